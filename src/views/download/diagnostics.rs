use crate::api::ApiClient;
use crate::components::{show_toast, Toast};
use crate::views::download::handlers::{check_version, run_network_test, update_ytdlp};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCodeBranch, FaDownload, FaNetworkWired},
    Icon,
};

const ACTION_CLASS: &str = "flex-1 inline-flex items-center justify-center bg-background-medium text-text-primary px-4 py-2 rounded-lg border border-border hover:bg-background-hover transition-colors";

/// Backend troubleshooting actions. Each one is independent of the form and
/// of each other; nothing here is guarded by the form's busy flag.
#[component]
pub fn Diagnostics(toast: Signal<Option<Toast>>) -> Element {
    let client = use_context::<ApiClient>();
    let mut backend_version = use_signal(|| None::<String>);

    let test_connection = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                let toaster = run_network_test(&client).await;
                show_toast(toast, toaster);
            });
        }
    };

    let version = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                let (reported, toaster) = check_version(&client).await;
                if reported.is_some() {
                    backend_version.set(reported);
                }
                show_toast(toast, toaster);
            });
        }
    };

    let update = move |_| {
        let client = client.clone();
        spawn(async move {
            let (new_version, toaster) = update_ytdlp(&client).await;
            if new_version.is_some() {
                backend_version.set(new_version);
            }
            show_toast(toast, toaster);
        });
    };

    rsx! {
        div { class: "w-full max-w-xl mt-6 space-y-3",
            div { class: "flex gap-3",
                button { class: ACTION_CLASS, r#type: "button", onclick: test_connection,
                    Icon {
                        icon: FaNetworkWired,
                        width: 16,
                        height: 16,
                        class: "mr-2",
                    }
                    "Test Connection"
                }
                button { class: ACTION_CLASS, r#type: "button", onclick: version,
                    Icon {
                        icon: FaCodeBranch,
                        width: 16,
                        height: 16,
                        class: "mr-2",
                    }
                    "Check Version"
                }
                button { class: ACTION_CLASS, r#type: "button", onclick: update,
                    Icon {
                        icon: FaDownload,
                        width: 16,
                        height: 16,
                        class: "mr-2",
                    }
                    "Update yt-dlp"
                }
            }
            if let Some(v) = backend_version() {
                p { class: "text-sm text-text-secondary text-center", "Backend yt-dlp {v}" }
            }
        }
    }
}
