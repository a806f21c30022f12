pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{DownloadRequest, DownloadResult, DownloadType};
