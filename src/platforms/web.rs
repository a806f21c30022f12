// Web-specific implementations
use url::Url;

use super::common::PlatformError;

/// Full page navigation. The backend answers the file URL with an
/// attachment, so the browser starts a download and stays on the page.
pub fn navigate_to(url: &Url) -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
    tracing::info!("Navigating to {}", url);
    window
        .location()
        .set_href(url.as_str())
        .map_err(|e| PlatformError::Navigation {
            url: url.to_string(),
            reason: format!("{:?}", e),
        })
}

/// Origin of the page serving the app, used to resolve a relative backend base.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
