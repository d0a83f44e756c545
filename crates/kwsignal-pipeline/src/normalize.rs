//! Monthly volume normalization.

use kwsignal_naver::RawVolume;

/// Value substituted for suppressed counts reported as `"< 10"`.
pub const SUPPRESSED_VOLUME: u64 = 10;

/// Normalizes a raw monthly query count.
///
/// Any string containing `<` becomes [`SUPPRESSED_VOLUME`]. Other strings
/// are parsed as integers after trimming. Fractional numbers truncate
/// toward zero. Returns `None` for negative or unparseable values.
#[must_use]
pub fn normalize_volume(raw: &RawVolume) -> Option<u64> {
    match raw {
        RawVolume::Text(s) if s.contains('<') => Some(SUPPRESSED_VOLUME),
        RawVolume::Text(s) => s.trim().parse::<u64>().ok(),
        RawVolume::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(truncate)
        }),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(f: f64) -> u64 {
    f.trunc() as u64
}
