// Step series: raw history -> gap-free square wave clipped to a window.
//
// Pipeline (order matters):
//   sort copy -> clip to window -> boundary fill at cutoff -> step edges -> right edge -> dedup by x
//
// The result always satisfies: ascending x, unique x, last x == now (if non-empty),
// first x == cutoff whenever something was recorded at or before cutoff.

use tracing::debug;

use super::order::{dedup_by_x, sorted_oldest_first};
use crate::models::{Observation, PlottedPoint};
use crate::window::Window;

/// Builds the plotted step series for `history` over `window`.
///
/// Empty history yields an empty series; callers render that as "no data".
pub fn build(history: &[Observation], window: &Window) -> Vec<PlottedPoint> {
    if history.is_empty() {
        return Vec::new();
    }

    let sorted = sorted_oldest_first(history);
    let clipped = clip_with_boundary(&sorted, window);
    let stepped = insert_step_edges(clipped);
    let extended = extend_to_now(stepped, window);
    let points = dedup_by_x(extended);

    debug!(
        history = history.len(),
        points = points.len(),
        cutoff_ms = window.cutoff_ms(),
        now_ms = window.now_ms(),
        "built step series"
    );
    points
}

/// Observations inside the window, preceded by a synthetic point at `cutoff` carrying
/// the status that was active when the window opened.
///
/// `sorted` must be non-empty and ascending.
fn clip_with_boundary(sorted: &[Observation], window: &Window) -> Vec<PlottedPoint> {
    let mut points: Vec<PlottedPoint> = sorted
        .iter()
        .filter(|o| window.contains(o.timestamp))
        .map(|o| PlottedPoint::observed(o.timestamp, o.status))
        .collect();

    // Last observation strictly before cutoff; one exactly at cutoff is already inside.
    let before_cutoff = sorted.partition_point(|o| o.timestamp < window.cutoff);
    let boundary_status = match before_cutoff.checked_sub(1) {
        Some(idx) => Some(sorted[idx].status),
        // Nothing before the window and nothing inside it: assume the earliest known
        // status held all along. A guess, since the true earlier status is unknown.
        None if points.is_empty() => Some(sorted[0].status),
        None => None,
    };

    // A sample already at cutoff states the opening status itself.
    let starts_at_cutoff = points.first().is_some_and(|p| p.x == window.cutoff_ms());
    if let Some(status) = boundary_status
        && !starts_at_cutoff
    {
        points.insert(0, PlottedPoint::synthetic(window.cutoff, status));
    }
    points
}

/// Before every status change, a point 1 ms earlier carrying the previous value so the
/// line rises vertically instead of sloping.
fn insert_step_edges(points: Vec<PlottedPoint>) -> Vec<PlottedPoint> {
    let mut stepped = Vec::with_capacity(points.len() * 2);
    let mut prev: Option<PlottedPoint> = None;
    for curr in points {
        if let Some(p) = prev
            && p.status != curr.status
        {
            stepped.push(p.shifted_to(curr.x.saturating_sub(1)));
        }
        stepped.push(curr);
        prev = Some(curr);
    }
    stepped
}

fn extend_to_now(mut points: Vec<PlottedPoint>, window: &Window) -> Vec<PlottedPoint> {
    if let Some(last) = points.last()
        && last.x < window.now_ms()
    {
        let edge = PlottedPoint::synthetic(window.now, last.status);
        points.push(edge);
    }
    points
}
