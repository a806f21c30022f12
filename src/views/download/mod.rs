// Export all parts of the download module
mod diagnostics;
mod handlers;
mod types;
mod ui;

// Re-export the main component
pub use ui::DownloadForm;
