use std::env;
use std::path::Path;

// Build-time settings baked into the binary through `option_env!`.
const BUILD_ENV: &[&str] = &[
    "DOWNLOADER_API_BASE",
    "DOWNLOADER_WIRE",
    "DOWNLOADER_FILL_DEFAULTS",
    "DOWNLOADER_DIAGNOSTICS",
    "DOWNLOADER_NETWORK_TEST_TIMEOUT_SECS",
    "DOWNLOADER_LOG",
];

fn main() {
    println!("cargo:rerun-if-changed=assets/");

    for name in BUILD_ENV {
        println!("cargo:rerun-if-env-changed={}", name);
        if let Ok(value) = env::var(name) {
            println!("cargo:warning={}={}", name, value);
        }
    }

    if env::var("DOWNLOADER_API_BASE").is_err() {
        println!("cargo:warning=DOWNLOADER_API_BASE not set, using the built-in default backend");
    }

    let styling_dir = Path::new("assets").join("styling");
    if !styling_dir.is_dir() {
        println!("cargo:warning=Styling directory not found: {}", styling_dir.display());
    }
}
