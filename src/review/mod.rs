mod controller;
mod notify;

pub use controller::{LoadState, ReviewController, ReviewState, UpdateModal};
pub use notify::{Flash, FlashKind, FlashSink, NotificationSink};

#[cfg(test)]
pub use controller::UpdateDraft;
