//! HTTP request handlers.

pub mod health;
pub mod new_url;
pub mod redirect;

pub use health::health_handler;
pub use new_url::new_url_handler;
pub use redirect::redirect_handler;
