mod api_error;
mod badge;
mod client;
mod models;
mod normalize;
mod queue;

pub use api_error::ApiError;
pub use badge::StatusBadge;
pub use client::{HttpResidentsApi, ResidentsApi};
pub use models::{ResidencyStatus, ResidentId, ResidentView, UpdateRequest};
pub use normalize::normalize_all;
pub use queue::{review_queue, QueueSummary};
