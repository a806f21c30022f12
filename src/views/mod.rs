pub mod download;
pub use download::DownloadForm;

pub mod home;
pub use home::Home;

pub mod supported_sites;
pub use supported_sites::SupportedSites;
