// Common functionality across platforms
use thiserror::Error;
#[cfg(not(any(feature = "web", feature = "desktop")))]
use url::Url;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    #[cfg(all(feature = "web", not(feature = "desktop")))]
    #[error("No browser window available")]
    NoWindow,

    #[cfg(any(feature = "web", feature = "desktop"))]
    #[error("Could not open {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    #[error("Opening {0} is not supported on this platform")]
    Unsupported(String),
}

// Fallback when neither renderer is compiled in, e.g. unit tests
#[cfg(not(any(feature = "web", feature = "desktop")))]
pub fn navigate_to(url: &Url) -> Result<(), PlatformError> {
    tracing::warn!("No platform support for navigation to {}", url);
    Err(PlatformError::Unsupported(url.to_string()))
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
pub fn page_origin() -> Option<String> {
    None
}
