// Desktop-specific implementations
use url::Url;

use super::common::PlatformError;

/// Hands the file URL to the system browser, which performs the download.
pub fn navigate_to(url: &Url) -> Result<(), PlatformError> {
    tracing::info!("Opening {} in the system browser", url);
    open::that(url.as_str()).map_err(|e| PlatformError::Navigation {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// A desktop window has no page origin; the backend base must be absolute.
pub fn page_origin() -> Option<String> {
    None
}
