use crate::residents::{ApiError, ResidentId, ResidentsApi, UpdateRequest};
use crate::review::{FlashSink, ReviewController};
use crate::router::AppState;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted stand-in for the residents backend.
///
/// List responses are served in order; the last one keeps being served.
/// Update responses are served in order, then every update succeeds.
#[derive(Default)]
pub struct FakeResidentsApi {
    lists: Mutex<VecDeque<Result<Vec<Value>, ApiError>>>,
    update_results: Mutex<VecDeque<Result<(), ApiError>>>,
    updates: Mutex<Vec<(ResidentId, UpdateRequest)>>,
    list_calls: AtomicUsize,
}

impl FakeResidentsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, residents: Value) -> Self {
        let entries = match residents {
            Value::Array(entries) => entries,
            other => vec![other],
        };
        self.lists.lock().push_back(Ok(entries));
        self
    }

    pub fn with_list_error(self, err: ApiError) -> Self {
        self.lists.lock().push_back(Err(err));
        self
    }

    pub fn with_update_error(self, err: ApiError) -> Self {
        self.update_results.lock().push_back(Err(err));
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> Vec<(ResidentId, UpdateRequest)> {
        self.updates.lock().clone()
    }
}

impl ResidentsApi for FakeResidentsApi {
    fn list_residents(&self) -> Result<Vec<Value>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut lists = self.lists.lock();
        match lists.len() {
            0 => Ok(Vec::new()),
            1 => lists[0].clone(),
            _ => lists.pop_front().unwrap_or(Ok(Vec::new())),
        }
    }

    fn update_residency_status(
        &self,
        id: &ResidentId,
        req: &UpdateRequest,
    ) -> Result<(), ApiError> {
        self.updates.lock().push((id.clone(), req.clone()));
        self.update_results.lock().pop_front().unwrap_or(Ok(()))
    }
}

/// App state wired to a fake backend, as `main` wires the real one.
pub fn test_app(api: FakeResidentsApi) -> AppState<FakeResidentsApi> {
    let flash = FlashSink::new();
    AppState::new(ReviewController::new(api, flash.clone()), flash)
}
