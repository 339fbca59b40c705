pub mod app;
pub mod fixtures;

pub use app::{json_body, make_test_app, make_test_app_with_threshold};
