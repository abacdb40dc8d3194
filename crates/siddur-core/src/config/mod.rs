use std::path::Path;

use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_STEM, DEFAULT_LIBRARY_ROOT, ENV_PREFIX, ENV_SEPARATOR};
use crate::error::CoreResult;
use crate::types::Location;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub library: LibraryConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryConfig {
    pub root: String,
    /// Explicit document list, in display order. Empty means "scan `root`".
    #[serde(default)]
    pub documents: Vec<DocumentConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub id: String,
    pub title: Option<String>,
    /// Path relative to `library.root`.
    pub path: String,
}

impl DocumentConfig {
    /// ## Summary
    /// Returns the configured title, falling back to the document id.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub location: Location,
    /// The Hebrew day starts at nightfall; when set, "today" is the next civil day.
    pub after_nightfall: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional TOML file and `SIDDUR_*`
    /// environment variables. Later sources override earlier ones, so the
    /// environment wins over the file.
    ///
    /// When `path` is `None`, `siddur.toml` in the working directory is used if present.
    ///
    /// ## Errors
    /// Returns an error if an explicit file is missing, or if building the
    /// configuration or deserializing it fails.
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_STEM).required(false),
        };

        Ok(Config::builder()
            .set_default("library.root", DEFAULT_LIBRARY_ROOT)?
            .set_default("calendar.location", Location::default().as_str())?
            .set_default("calendar.after_nightfall", false)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(file)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration after reading a `.env` file, if one exists.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load(path)
}
