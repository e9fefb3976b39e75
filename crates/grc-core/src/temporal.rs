//! # Temporal Classifiers
//!
//! The single shared notion of due-status for the whole dashboard.
//! Every aggregator that touches a date delegates to the predicates in
//! this module, so "overdue" means exactly one thing everywhere.
//!
//! All functions are pure: `now` is a parameter, never read from a
//! global clock. Day arithmetic is integer-only — the day count is the
//! ceiling of the remaining interval in whole days, so anything due
//! later today still reads as one day away and anything due at or
//! before `now` reads as zero or negative.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Horizon for the "due soon" window, in days.
pub const DUE_SOON_HORIZON_DAYS: i64 = 30;

/// Review cadence applied when a reviewable entity has none configured.
pub const DEFAULT_REVIEW_FREQUENCY_DAYS: i64 = 90;

/// A review counts as due this many days before its computed date.
pub const REVIEW_DUE_WINDOW_DAYS: i64 = 7;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days until `date`, as the ceiling of the remaining interval.
///
/// Returns `None` when there is no date; a missing date is "no signal",
/// never "due now". Negative results mean the date has passed.
pub fn days_until(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<i64> {
    let date = date?;
    let secs = (date - now).num_seconds();
    // Integer division truncates toward zero, which is already the
    // ceiling for negative intervals.
    if secs > 0 && secs % SECONDS_PER_DAY != 0 {
        Some(secs / SECONDS_PER_DAY + 1)
    } else {
        Some(secs / SECONDS_PER_DAY)
    }
}

/// Due-status classification for any entity with a nullable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// The date has passed.
    Overdue,
    /// Due within the horizon (30 days by default).
    DueSoon,
    /// Due beyond the horizon.
    OnTrack,
    /// No date set.
    NoDate,
}

impl DueStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::OnTrack => "on_track",
            Self::NoDate => "no_date",
        }
    }
}

impl std::fmt::Display for DueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a nullable date relative to `now`.
pub fn classify_due(
    date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    horizon_days: i64,
) -> DueStatus {
    match days_until(date, now) {
        None => DueStatus::NoDate,
        Some(d) if d <= 0 => DueStatus::Overdue,
        Some(d) if d <= horizon_days => DueStatus::DueSoon,
        Some(_) => DueStatus::OnTrack,
    }
}

/// An entity that can be tracked against a due or expiry date.
///
/// Implemented by the record types in `grc-model`. The trait carries the
/// two non-date facts the predicates need: whether the entity's own
/// status already says "overdue", and whether it has reached a terminal
/// state (terminal entities are never due).
pub trait Trackable {
    /// The entity's due or expiry date, if any.
    fn due_date(&self) -> Option<DateTime<Utc>>;

    /// Whether the entity is in a terminal state (completed, closed).
    fn is_terminal(&self) -> bool;

    /// Whether the entity's status field explicitly says "overdue".
    fn is_flagged_overdue(&self) -> bool {
        false
    }
}

/// Whether a trackable entity is overdue.
///
/// True when the status explicitly says so, or when the entity is not
/// terminal and its date has passed.
pub fn is_overdue(item: &impl Trackable, now: DateTime<Utc>) -> bool {
    if item.is_flagged_overdue() {
        return true;
    }
    if item.is_terminal() {
        return false;
    }
    matches!(days_until(item.due_date(), now), Some(d) if d <= 0)
}

/// Whether a trackable entity is due within `horizon_days`.
///
/// Overdue and terminal entities are excluded; this is strictly the
/// "coming up" band.
pub fn is_due_soon(item: &impl Trackable, now: DateTime<Utc>, horizon_days: i64) -> bool {
    if item.is_terminal() || is_overdue(item, now) {
        return false;
    }
    matches!(days_until(item.due_date(), now), Some(d) if d > 0 && d <= horizon_days)
}

/// An entity with a periodic review cycle.
pub trait Reviewable {
    /// When the entity was last reviewed, if ever.
    fn last_reviewed(&self) -> Option<DateTime<Utc>>;

    /// Days between reviews. Defaults to [`DEFAULT_REVIEW_FREQUENCY_DAYS`].
    fn review_frequency_days(&self) -> i64 {
        DEFAULT_REVIEW_FREQUENCY_DAYS
    }

    /// Whether a review has been explicitly requested.
    fn review_requested(&self) -> bool {
        false
    }
}

/// The next review date: last review plus the review cadence.
///
/// `None` when the entity has never been reviewed — an unreviewed
/// entity has no computed cycle and only becomes due via an explicit
/// review request.
pub fn next_review(item: &impl Reviewable) -> Option<DateTime<Utc>> {
    item.last_reviewed()
        .map(|last| last + Duration::days(item.review_frequency_days()))
}

/// Whether a reviewable entity is due for review.
///
/// True when a review has been explicitly requested, or when the
/// computed next review date is within [`REVIEW_DUE_WINDOW_DAYS`].
pub fn is_review_due(item: &impl Reviewable, now: DateTime<Utc>) -> bool {
    if item.review_requested() {
        return true;
    }
    matches!(
        days_until(next_review(item), now),
        Some(d) if d <= REVIEW_DUE_WINDOW_DAYS
    )
}
