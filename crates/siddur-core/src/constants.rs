/// Configuration sources shared across crates
pub const APP_NAME: &str = "siddur";
pub const CONFIG_FILE_STEM: &str = APP_NAME;
pub const CONFIG_FILE_NAME: &str = const_str::concat!(CONFIG_FILE_STEM, ".toml");
pub const ENV_PREFIX: &str = "SIDDUR";
pub const ENV_SEPARATOR: &str = "__";

/// Default directory holding the authored prayer documents.
pub const DEFAULT_LIBRARY_ROOT: &str = "prayers";

/// File extensions recognised as prayer documents when scanning a directory.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = ["html", "xml"];
