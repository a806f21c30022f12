// Platform-specific implementations
//
// Desktop takes precedence over web when both features are enabled, the
// same order `main` uses to pick a launcher.
mod common;
#[cfg(feature = "desktop")]
mod desktop;
#[cfg(all(feature = "web", not(feature = "desktop")))]
mod web;

#[cfg(not(any(feature = "web", feature = "desktop")))]
pub use common::{navigate_to, page_origin};
#[cfg(feature = "desktop")]
pub use desktop::{navigate_to, page_origin};
#[cfg(all(feature = "web", not(feature = "desktop")))]
pub use web::{navigate_to, page_origin};

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Desktop,
    Web,
    /// No renderer compiled in, e.g. unit tests
    Headless,
}

#[cfg(feature = "desktop")]
pub const TARGET: Target = Target::Desktop;
#[cfg(all(feature = "web", not(feature = "desktop")))]
pub const TARGET: Target = Target::Web;
#[cfg(not(any(feature = "web", feature = "desktop")))]
pub const TARGET: Target = Target::Headless;

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_target_follows_enabled_features() {
        let expected = if cfg!(feature = "desktop") {
            Target::Desktop
        } else if cfg!(feature = "web") {
            Target::Web
        } else {
            Target::Headless
        };
        assert_eq!(TARGET, expected);
    }

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    #[test]
    fn test_headless_navigation_is_unsupported() {
        let url = Url::parse("http://localhost:5000/download-file/a.mp4").unwrap();
        let err = navigate_to(&url).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Opening http://localhost:5000/download-file/a.mp4 is not supported on this platform"
        );
        assert_eq!(page_origin(), None);
    }

    #[cfg(feature = "desktop")]
    #[test]
    fn test_desktop_has_no_page_origin() {
        // With web also enabled this must still be the desktop shim
        assert_eq!(page_origin(), None);
    }
}
