use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_brands_icons::{FaFacebook, FaInstagram, FaTwitter, FaYoutube},
    Icon,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteIcon {
    Youtube,
    Facebook,
    Twitter,
    Instagram,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportedSite {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: SiteIcon,
}

pub const SUPPORTED_SITES: [SupportedSite; 4] = [
    SupportedSite {
        name: "YouTube",
        description: "Download videos and playlists",
        icon: SiteIcon::Youtube,
    },
    SupportedSite {
        name: "Facebook",
        description: "Save videos and stories",
        icon: SiteIcon::Facebook,
    },
    SupportedSite {
        name: "Twitter",
        description: "Download tweets with media",
        icon: SiteIcon::Twitter,
    },
    SupportedSite {
        name: "Instagram",
        description: "Save posts and stories",
        icon: SiteIcon::Instagram,
    },
];

#[component]
fn SiteLogo(icon: SiteIcon) -> Element {
    match icon {
        SiteIcon::Youtube => rsx! {
            Icon { icon: FaYoutube, width: 32, height: 32, class: "text-accent-teal" }
        },
        SiteIcon::Facebook => rsx! {
            Icon { icon: FaFacebook, width: 32, height: 32, class: "text-accent-teal" }
        },
        SiteIcon::Twitter => rsx! {
            Icon { icon: FaTwitter, width: 32, height: 32, class: "text-accent-teal" }
        },
        SiteIcon::Instagram => rsx! {
            Icon { icon: FaInstagram, width: 32, height: 32, class: "text-accent-teal" }
        },
    }
}

#[component]
pub fn SupportedSites() -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 w-full max-w-6xl mx-auto px-4",
            for site in SUPPORTED_SITES {
                div {
                    key: "{site.name}",
                    class: "glass rounded-lg p-6 flex flex-col items-center text-center space-y-4",
                    SiteLogo { icon: site.icon }
                    h3 { class: "font-semibold text-text-primary", "{site.name}" }
                    p { class: "text-sm text-text-secondary", "{site.description}" }
                }
            }
        }
    }
}
