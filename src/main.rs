#![recursion_limit = "256"]

use dioxus::prelude::*;

use api::ApiClient;
use config::{BackendConfig, BuildSettings, ConfigError};
use views::Home;

mod api;
mod components;
mod config;
mod platforms;
mod views;

// Add the common module to the root
pub mod common;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    let settings = BuildSettings::from_build_env();
    if let Err(e) = dioxus::logger::init(settings.log_level()) {
        eprintln!("Logger initialization error: {}", e);
    }

    tracing::info!("Starting application for {:?}", platforms::TARGET);

    // Launch the app based on target platform, same precedence as `platforms`
    #[cfg(feature = "desktop")]
    {
        LaunchBuilder::desktop().launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        LaunchBuilder::web().launch(App);
    }

    #[cfg(not(any(feature = "desktop", feature = "web")))]
    {
        LaunchBuilder::new().launch(App);
    }
}

fn load_config() -> Result<BackendConfig, ConfigError> {
    let origin = platforms::page_origin();
    BackendConfig::from_settings(&BuildSettings::from_build_env(), origin.as_deref())
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        match config {
            Ok(config) => rsx! {
                Backend { config: config }
            },
            Err(e) => rsx! {
                ConfigProblem { message: e.to_string() }
            },
        }
    }
}

/// Provides the API client to everything under the router.
#[component]
fn Backend(config: BackendConfig) -> Element {
    use_context_provider(|| ApiClient::new(config.clone()));

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn ConfigProblem(message: String) -> Element {
    use_hook(|| tracing::error!("Invalid backend configuration: {}", message));

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-background",
            div { class: "max-w-xl bg-danger-500 text-text-primary p-6 rounded-lg shadow-lg",
                h1 { class: "text-xl font-bold mb-2", "Backend is not configured correctly" }
                p { "{message}" }
            }
        }
    }
}
