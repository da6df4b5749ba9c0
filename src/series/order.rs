// Ordering and dedup helpers shared by the builder and the event selectors.
// All helpers work on owned copies; the caller's history is never reordered.

use std::collections::BTreeMap;

use crate::models::{Observation, PlottedPoint};

/// Ascending by timestamp. Stable, so equal timestamps keep received order.
pub fn sorted_oldest_first(history: &[Observation]) -> Vec<Observation> {
    let mut sorted = history.to_vec();
    sorted.sort_by_key(|o| o.timestamp);
    sorted
}

/// Descending by timestamp. Stable, so equal timestamps keep received order.
pub fn sorted_newest_first(history: &[Observation]) -> Vec<Observation> {
    let mut sorted = history.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// One point per `x`, ascending. A later point replaces an earlier one at the same `x`.
pub fn dedup_by_x<I>(points: I) -> Vec<PlottedPoint>
where
    I: IntoIterator<Item = PlottedPoint>,
{
    let by_x: BTreeMap<i64, PlottedPoint> = points.into_iter().map(|p| (p.x, p)).collect();
    by_x.into_values().collect()
}
