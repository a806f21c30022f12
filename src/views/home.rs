use crate::views::{DownloadForm, SupportedSites};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "min-h-screen bg-background",
            div { class: "container mx-auto px-4 py-16 space-y-16",
                // Hero section
                div { class: "text-center space-y-4",
                    div { class: "inline-block px-4 py-1.5 rounded-full bg-accent-teal bg-opacity-10 text-accent-teal text-sm font-medium mb-4",
                        "Simple. Fast. Reliable."
                    }
                    h1 { class: "text-4xl font-bold tracking-tight sm:text-6xl text-text-primary",
                        "Download From Anywhere"
                    }
                    p { class: "text-lg text-text-secondary max-w-2xl mx-auto",
                        "Advanced video downloader supporting multiple platforms and formats. Just paste your URL and we'll handle the rest."
                    }
                }

                div { class: "flex flex-col items-center", DownloadForm {} }

                // Supported platforms
                div { class: "space-y-8",
                    div { class: "text-center",
                        h2 { class: "text-2xl font-semibold mb-2 text-text-primary",
                            "Supported Platforms"
                        }
                        p { class: "text-text-secondary",
                            "Download from your favorite platforms with ease"
                        }
                    }
                    SupportedSites {}
                }
            }
        }
    }
}
