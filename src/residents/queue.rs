// src/residents/queue.rs

use crate::residents::models::{ResidencyStatus, ResidentView};

/// A resident needs an administrator when identity verification is still
/// pending or was denied, or when the residency itself is flagged for review.
///
/// The two conditions are independent: an `approved` resident that is
/// `for_review` still shows up.
pub fn needs_review(resident: &ResidentView) -> bool {
    let verification_flagged = resident
        .verification_status
        .as_deref()
        .map(|s| {
            let s = s.trim();
            s.eq_ignore_ascii_case("pending") || s.eq_ignore_ascii_case("denied")
        })
        .unwrap_or(false);

    verification_flagged || resident.residency_status == ResidencyStatus::ForReview
}

/// Keep only the residents needing review, in backend order.
pub fn review_queue(residents: Vec<ResidentView>) -> Vec<ResidentView> {
    residents.into_iter().filter(needs_review).collect()
}

/// Counts shown in the cards above the queue table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueueSummary {
    pub total: usize,
    pub pending_verification: usize,
    pub denied_verification: usize,
    pub flagged_for_review: usize,
}

impl QueueSummary {
    pub fn from_queue(queue: &[ResidentView]) -> Self {
        queue.iter().fold(Self::default(), |mut acc, r| {
            acc.total += 1;
            match r.verification_status.as_deref().map(str::trim) {
                Some(s) if s.eq_ignore_ascii_case("pending") => acc.pending_verification += 1,
                Some(s) if s.eq_ignore_ascii_case("denied") => acc.denied_verification += 1,
                _ => {}
            }
            if r.residency_status == ResidencyStatus::ForReview {
                acc.flagged_for_review += 1;
            }
            acc
        })
    }
}
