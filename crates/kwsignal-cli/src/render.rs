//! Text and JSON presentation of an aggregated batch.

use kwsignal_core::{
    find_seed_signal, CompetitionLevel, KeywordSignal, KEYWORD_SIGNAL_SCHEMA_VERSION,
};
use serde::Serialize;

const KEYWORD_COLUMNS: usize = 24;

pub(crate) const NO_DATA_NOTICE: &str = "No keyword data was returned for this seed phrase.";

/// JSON envelope for `analyze --json`.
#[derive(Debug, Serialize)]
pub(crate) struct AnalysisReport<'a> {
    schema_version: u32,
    seed: &'a str,
    seed_keyword: Option<&'a str>,
    competition_level: Option<CompetitionLevel>,
    signals: &'a [KeywordSignal],
}

impl<'a> AnalysisReport<'a> {
    pub(crate) fn new(seed: &'a str, signals: &'a [KeywordSignal]) -> Self {
        let own = find_seed_signal(signals, seed);
        Self {
            schema_version: KEYWORD_SIGNAL_SCHEMA_VERSION,
            seed,
            seed_keyword: own.map(KeywordSignal::keyword),
            competition_level: own.map(|s| CompetitionLevel::from_index(s.competition_index())),
            signals,
        }
    }
}

/// Four summary cards for the seed's own record. Empty when the batch is.
pub(crate) fn render_cards(seed: &str, batch: &[KeywordSignal]) -> String {
    let Some(s) = find_seed_signal(batch, seed) else {
        return String::new();
    };
    let level = CompetitionLevel::from_index(s.competition_index());
    [
        format!("== {} ==", s.keyword()),
        format!(
            "[월간 검색량]      PC {}  MO {}  TOT {}",
            group_thousands(s.search_volume_pc()),
            group_thousands(s.search_volume_mobile()),
            group_thousands(s.search_volume_total()),
        ),
        format!("[경쟁강도]        {:.2} ({level})", s.competition_index()),
        format!(
            "[콘텐츠 누적 발행] BLOG {}  CAFE {}  TOT {}",
            group_thousands(s.content_count_primary()),
            group_thousands(s.content_count_secondary()),
            group_thousands(s.content_count_total()),
        ),
        format!("[최근 한 달 발행]  {}건", s.recent_primary_count()),
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect()
}

/// One row per record, in batch order.
pub(crate) fn render_table(batch: &[KeywordSignal]) -> String {
    let mut out = format!(
        "{} {:>10} {:>10} {:>10} {:>12} {:>10} {:>12} {:>6} {:>8}\n",
        pad_display("KEYWORD", KEYWORD_COLUMNS),
        "PC", "MOBILE", "TOTAL", "BLOG", "CAFE", "DOCS", "RECENT", "INDEX"
    );
    for s in batch {
        out.push_str(&format!(
            "{} {:>10} {:>10} {:>10} {:>12} {:>10} {:>12} {:>6} {:>8.2}\n",
            pad_display(s.keyword(), KEYWORD_COLUMNS),
            group_thousands(s.search_volume_pc()),
            group_thousands(s.search_volume_mobile()),
            group_thousands(s.search_volume_total()),
            group_thousands(s.content_count_primary()),
            group_thousands(s.content_count_secondary()),
            group_thousands(s.content_count_total()),
            s.recent_primary_count(),
            s.competition_index(),
        ));
    }
    out
}

/// Left-aligns `text` to `columns` terminal cells. `format!` pads by char
/// count, which misaligns Hangul and other double-width text.
fn pad_display(text: &str, columns: usize) -> String {
    let fill = columns.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

/// East Asian wide and fullwidth ranges.
fn is_wide(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
    )
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
