//! Counting recently published primary-content items.

use chrono::{Days, NaiveDate};
use kwsignal_naver::BlogPost;

pub const RECENT_WINDOW_DAYS: u64 = 30;

/// Items per primary search page; also the ceiling on the recent count.
pub const PRIMARY_PAGE_SIZE: usize = 100;

/// The `YYYYMMDD` date [`RECENT_WINDOW_DAYS`] before `today`.
#[must_use]
pub fn recent_cutoff(today: NaiveDate) -> String {
    today
        .checked_sub_days(Days::new(RECENT_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN)
        .format("%Y%m%d")
        .to_string()
}

/// Counts posts among the first [`PRIMARY_PAGE_SIZE`] whose `postdate` is on
/// or after `cutoff`.
///
/// Dates are compared as `YYYYMMDD` strings, where lexicographic and
/// chronological order coincide.
#[must_use]
pub fn count_recent(posts: &[BlogPost], cutoff: &str) -> u64 {
    let count = posts
        .iter()
        .take(PRIMARY_PAGE_SIZE)
        .filter(|p| p.postdate.as_str() >= cutoff)
        .count();
    u64::try_from(count).unwrap_or(u64::MAX)
}
