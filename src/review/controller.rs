// src/review/controller.rs

use crate::residents::{
    normalize_all, review_queue, ApiError, ResidencyStatus, ResidentId, ResidentView,
    ResidentsApi, UpdateRequest,
};
use crate::review::NotificationSink;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to load residents for review.";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update residency status.";
pub const UPDATE_SUCCEEDED_MESSAGE: &str = "Residency status updated successfully.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDraft {
    pub residency_status: Option<ResidencyStatus>,
    pub status_notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateModal {
    pub target: ResidentView,
    pub draft: UpdateDraft,
}

/// Everything the review page renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewState {
    pub load: LoadState,
    pub queue: Vec<ResidentView>,
    pub details: Option<ResidentView>,
    pub update: Option<UpdateModal>,
    pub submitting: bool,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
            queue: Vec::new(),
            details: None,
            update: None,
            submitting: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit: no open target or no status picked.
    Skipped,
    Updated,
    Failed,
}

/// Owns the review page state for one mounted page.
///
/// Every transition is a method taking `&mut self`, so a caller sharing the
/// controller between threads serializes transitions through its own lock.
pub struct ReviewController<A, N> {
    api: A,
    notify: N,
    state: ReviewState,
    mounted: bool,
}

impl<A: ResidentsApi, N: NotificationSink> ReviewController<A, N> {
    pub fn new(api: A, notify: N) -> Self {
        Self {
            api,
            notify,
            state: ReviewState::default(),
            mounted: false,
        }
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Fresh page: reset everything and load the queue once.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.state = ReviewState::default();
        self.refresh();
    }

    /// The page was left: drop its state. Submits are ignored until the next mount.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.state = ReviewState::default();
    }

    pub fn find(&self, id: &ResidentId) -> Option<&ResidentView> {
        self.state.queue.iter().find(|r| &r.id == id)
    }

    /// Returns `false` when the id is not in the current queue.
    pub fn open_details(&mut self, id: &ResidentId) -> bool {
        let Some(resident) = self.find(id).cloned() else {
            return false;
        };
        self.state.details = Some(resident);
        true
    }

    pub fn close_details(&mut self) {
        self.state.details = None;
    }

    /// Returns `false` when the id is not in the current queue.
    pub fn open_update(&mut self, id: &ResidentId) -> bool {
        let Some(target) = self.find(id).cloned() else {
            return false;
        };

        let draft = UpdateDraft {
            residency_status: Some(target.residency_status),
            status_notes: target.status_notes.clone().unwrap_or_default(),
        };
        self.state.update = Some(UpdateModal { target, draft });
        true
    }

    pub fn close_update(&mut self) {
        self.state.update = None;
    }

    pub fn edit_draft(&mut self, residency_status: Option<ResidencyStatus>, status_notes: String) {
        if let Some(modal) = self.state.update.as_mut() {
            modal.draft = UpdateDraft {
                residency_status,
                status_notes,
            };
        }
    }

    pub fn submit_update(&mut self) -> SubmitOutcome {
        if !self.mounted || self.state.submitting {
            return SubmitOutcome::Skipped;
        }

        let Some(modal) = self.state.update.as_ref() else {
            tracing::debug!("submit ignored: no resident selected");
            return SubmitOutcome::Skipped;
        };
        let Some(residency_status) = modal.draft.residency_status else {
            tracing::debug!(id = %modal.target.id, "submit ignored: no status selected");
            return SubmitOutcome::Skipped;
        };

        let id = modal.target.id.clone();
        let notes = modal.draft.status_notes.trim();
        let request = UpdateRequest {
            residency_status,
            status_notes: (!notes.is_empty()).then(|| notes.to_string()),
        };

        self.state.submitting = true;
        let result = self.api.update_residency_status(&id, &request);

        let outcome = match result {
            Ok(()) => {
                tracing::info!(%id, status = %residency_status, "residency status updated");
                self.refresh();
                self.state.update = None;
                self.notify.notify_success(UPDATE_SUCCEEDED_MESSAGE);
                SubmitOutcome::Updated
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "residency status update failed");
                self.notify.notify_failure(UPDATE_FAILED_MESSAGE);
                SubmitOutcome::Failed
            }
        };

        self.state.submitting = false;
        outcome
    }

    fn fetch_queue(&self) -> Result<(usize, Vec<ResidentView>), ApiError> {
        let raw = self.api.list_residents()?;
        let fetched = raw.len();
        let residents = normalize_all(raw)?;
        Ok((fetched, review_queue(residents)))
    }

    fn refresh(&mut self) {
        self.state.load = LoadState::Loading;
        match self.fetch_queue() {
            Ok((fetched, queue)) => {
                tracing::info!(fetched, queued = queue.len(), "review queue loaded");
                self.state.queue = queue;
                self.state.load = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load review queue");
                self.state.queue.clear();
                self.state.load = LoadState::Error(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }
}
