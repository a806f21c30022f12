use crate::api::{ApiClient, DownloadType};
use crate::common::Toaster;
use crate::components::{show_toast, Toast, ToastHost};
use crate::platforms::navigate_to;
use crate::views::download::diagnostics::Diagnostics;
use crate::views::download::handlers::{submit_request, while_busy, SubmitOutcome};
use crate::views::download::types::{FormState, DOWNLOAD_TYPE_OPTIONS};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCheck, FaSpinner},
    Icon,
};

const INPUT_CLASS: &str = "w-full bg-background-medium text-text-primary border border-border rounded-md py-2 px-3 mt-1.5 focus:outline-none focus:border-accent-teal";
const LABEL_CLASS: &str = "text-sm font-medium text-text-primary";

#[component]
pub fn DownloadForm() -> Element {
    let client = use_context::<ApiClient>();
    let diagnostics_enabled = client.config().diagnostics;

    // Form state
    let mut form = use_signal(FormState::default);

    // UI state
    let mut loading = use_signal(|| false);
    let toast = use_signal(|| None::<Toast>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let request = form.read().to_request();
        let client = client.clone();
        spawn(async move {
            let outcome = while_busy(
                move |busy| loading.set(busy),
                submit_request(&client, request),
            )
            .await;

            match outcome {
                SubmitOutcome::Navigate(url) => {
                    if let Err(e) = navigate_to(&url) {
                        tracing::error!("Direct download navigation failed: {}", e);
                        show_toast(toast, Toaster::Error(e.to_string()));
                    }
                }
                SubmitOutcome::Notify(toaster) => show_toast(toast, toaster),
            }
        });
    };

    let current_type = form.read().download_type;

    rsx! {
        form {
            class: "w-full max-w-xl space-y-6",
            onsubmit: handle_submit,
            div { class: "space-y-4",
                div {
                    label { class: LABEL_CLASS, r#for: "url", "Video URL" }
                    input {
                        id: "url",
                        class: INPUT_CLASS,
                        r#type: "url",
                        required: true,
                        placeholder: "Enter video URL",
                        value: "{form.read().url}",
                        oninput: move |evt| form.write().url = evt.value(),
                    }
                }

                div {
                    label { class: LABEL_CLASS, r#for: "downloadType", "Download Type" }
                    select {
                        id: "downloadType",
                        class: INPUT_CLASS,
                        value: current_type.as_str(),
                        onchange: move |evt| {
                            form.write().download_type = DownloadType::from_value(&evt.value());
                        },
                        for (option_type , label) in DOWNLOAD_TYPE_OPTIONS {
                            option {
                                key: "{option_type.as_str()}",
                                value: option_type.as_str(),
                                selected: option_type == current_type,
                                "{label}"
                            }
                        }
                    }
                }

                div {
                    label { class: LABEL_CLASS, r#for: "format", "Format (optional)" }
                    input {
                        id: "format",
                        class: INPUT_CLASS,
                        r#type: "text",
                        placeholder: "e.g., mp4, mkv, mp3",
                        value: "{form.read().format}",
                        oninput: move |evt| form.write().format = evt.value(),
                    }
                }

                div {
                    label { class: LABEL_CLASS, r#for: "quality", "Video Quality (optional)" }
                    input {
                        id: "quality",
                        class: INPUT_CLASS,
                        r#type: "text",
                        placeholder: "e.g., 720, 1080",
                        value: "{form.read().quality}",
                        oninput: move |evt| form.write().quality = evt.value(),
                    }
                }

                div { class: "flex items-center space-x-2",
                    input {
                        id: "directDownload",
                        class: "h-4 w-4 rounded border-border",
                        r#type: "checkbox",
                        checked: form.read().direct_download,
                        onchange: move |evt| form.write().direct_download = evt.checked(),
                    }
                    label { class: LABEL_CLASS, r#for: "directDownload", "Direct Download" }
                }
            }

            button {
                class: "inline-flex items-center justify-center w-full h-10 px-4 py-2 rounded-md bg-accent-teal text-text-invert font-medium hover:bg-opacity-80 transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                r#type: "submit",
                disabled: loading(),
                if loading() {
                    Icon {
                        icon: FaSpinner,
                        width: 16,
                        height: 16,
                        class: "mr-2 animate-spin",
                    }
                    "Processing..."
                } else {
                    Icon {
                        icon: FaCheck,
                        width: 16,
                        height: 16,
                        class: "mr-2",
                    }
                    "Download"
                }
            }
        }

        if diagnostics_enabled {
            Diagnostics { toast: toast }
        }

        ToastHost { toast: toast }
    }
}
