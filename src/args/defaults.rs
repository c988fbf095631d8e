pub(crate) const DEFAULT_URL: &str = "http://example.com/";
pub(crate) const DEFAULT_RATE: &str = "10";
pub(crate) const DEFAULT_SECONDS: &str = "1";
pub(crate) const DEFAULT_REQUEST_TIMEOUT: &str = "30s";

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["hitit.toml", "hitit.json"];

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("hitit/", env!("CARGO_PKG_VERSION"));
