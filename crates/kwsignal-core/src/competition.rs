//! Five-band grading of the competition index for summary display.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl CompetitionLevel {
    /// Grades a competition index. Band edges are exclusive upper bounds:
    /// `0.5`, `1.0`, `5.0`, `10.0`.
    #[must_use]
    pub fn from_index(index: f64) -> Self {
        if index < 0.5 {
            Self::VeryLow
        } else if index < 1.0 {
            Self::Low
        } else if index < 5.0 {
            Self::Medium
        } else if index < 10.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "매우 낮음",
            Self::Low => "낮음",
            Self::Medium => "보통",
            Self::High => "높음",
            Self::VeryHigh => "매우 높음",
        }
    }

    /// Badge colour as a CSS hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::VeryLow => "#2ecc71",
            Self::Low => "#3498db",
            Self::Medium => "#f39c12",
            Self::High => "#e67e22",
            Self::VeryHigh => "#e74c3c",
        }
    }
}

impl std::fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
