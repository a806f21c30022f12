pub mod toast;

pub use toast::{show_toast, Toast, ToastHost};
