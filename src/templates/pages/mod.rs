pub mod home;
pub mod review;

pub use home::home_page;
pub use review::{review_page, ReviewVm};
