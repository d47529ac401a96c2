pub mod use_js_api_loader;
pub mod use_pending_reports;

pub use use_js_api_loader::{use_js_api_loader, LoaderOptions};
pub use use_pending_reports::use_pending_reports;

