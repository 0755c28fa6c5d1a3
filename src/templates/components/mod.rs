pub mod badge;
pub mod banner;
pub mod card;
pub mod error;
pub mod modal;

pub use badge::status_badge;
pub use banner::{error_banner, flash_banners};
pub use card::count_card;
pub use error::html_error_response;
pub use modal::modal;
