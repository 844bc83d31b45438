//! Summary ordering: highest combined score first, most recently started first among equal
//! totals, start order as the final tie-break.

use std::cmp::Ordering;

use crate::dao::models::MatchRecord;

/// Total order used by the summary.
pub fn compare_for_summary(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.started_at.cmp(&a.started_at))
        .then_with(|| a.sequence.cmp(&b.sequence))
}

/// Stable sort of `records` into summary order.
pub fn sort_for_summary(records: &mut [MatchRecord]) {
    records.sort_by(compare_for_summary);
}
