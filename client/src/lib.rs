//! Typed client for the results endpoint and the view model built on top of it.
//!
//! ```no_run
//! use client::{ClientConfig, ResultsClient, SortOrder};
//!
//! # async fn run() -> Result<(), client::ClientError> {
//! let client = ResultsClient::new(ClientConfig::new("http://127.0.0.1:3000"))?;
//! let mut view = client.load_view("2").await;
//! view.sort_by(SortOrder::Percentage);
//! println!("{}", view.render());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod view;

pub use api::ResultsClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use view::{ResultRow, ResultsView, SortOrder, ViewState};
