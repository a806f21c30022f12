use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;
use futures_timer::Delay;

use crate::common::Toaster;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_DURATION: Duration = Duration::from_millis(5000);

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: Toaster,
}

impl Toast {
    pub fn new(kind: Toaster) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            kind,
        }
    }
}

/// Replaces the current toast and schedules its dismissal. The timer only
/// clears the toast it was started for, so a newer toast keeps its full time.
pub fn show_toast(mut slot: Signal<Option<Toast>>, kind: Toaster) {
    let toast = Toast::new(kind);
    let id = toast.id;
    slot.set(Some(toast));

    spawn(async move {
        Delay::new(TOAST_DURATION).await;
        let mut current = (*slot.peek()).clone();
        if dismiss_if_current(&mut current, id) {
            slot.set(current);
        }
    });
}

/// Clears the slot only while it still holds the toast with `id`.
pub fn dismiss_if_current(slot: &mut Option<Toast>, id: u64) -> bool {
    if matches!(slot, Some(current) if current.id == id) {
        *slot = None;
        true
    } else {
        false
    }
}

#[component]
pub fn ToastHost(toast: Signal<Option<Toast>>) -> Element {
    let mut toast = toast;
    let Some(current) = toast() else {
        return rsx! {};
    };

    let (bg_color, icon) = match current.kind {
        Toaster::Success(_) => ("bg-success-500", "✓"),
        Toaster::Error(_) => ("bg-danger-500", "✗"),
        Toaster::Warning(_) => ("bg-warning-500", "⚠"),
        Toaster::Info(_) => ("bg-accent-teal", "ℹ"),
    };
    let title = current.kind.title();
    let message = current.kind.message().to_string();

    rsx! {
        div {
            class: "toast fixed bottom-5 right-5 {bg_color} text-text-primary px-6 py-4 rounded-lg shadow-lg max-w-md",
            role: "status",
            div { class: "flex items-start",
                span { class: "text-xl mr-2", "{icon}" }
                div { class: "flex-1",
                    p { class: "font-semibold", "{title}" }
                    p { class: "text-sm", "{message}" }
                }
                button {
                    class: "ml-4 text-text-muted hover:text-text-primary",
                    r#type: "button",
                    aria_label: "Dismiss notification",
                    onclick: move |_| toast.set(None),
                    "×"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_ids_are_unique() {
        let first = Toast::new(Toaster::Info("one".to_string()));
        let second = Toast::new(Toaster::Info("one".to_string()));
        assert_ne!(first.id, second.id);
        assert_ne!(first, second);
    }

    #[test]
    fn test_stale_timer_leaves_newer_toast() {
        let older = Toast::new(Toaster::Info("checking version".to_string()));
        let newer = Toast::new(Toaster::Error("bad url".to_string()));
        let mut slot = Some(newer.clone());

        assert!(!dismiss_if_current(&mut slot, older.id));
        assert_eq!(slot, Some(newer));
    }

    #[test]
    fn test_matching_timer_clears_toast() {
        let toast = Toast::new(Toaster::Success("Video \"X\" is ready for download".to_string()));
        let mut slot = Some(toast.clone());

        assert!(dismiss_if_current(&mut slot, toast.id));
        assert_eq!(slot, None);
    }

    #[test]
    fn test_timer_after_manual_dismiss_is_a_no_op() {
        let toast = Toast::new(Toaster::Warning("Network test timed out".to_string()));
        let mut slot: Option<Toast> = None;

        assert!(!dismiss_if_current(&mut slot, toast.id));
        assert_eq!(slot, None);
    }
}
