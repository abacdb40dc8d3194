//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "siddur",
    version,
    about = "Resolve prayer-book documents for a day of the Hebrew calendar"
)]
pub struct Cli {
    /// Configuration file. Defaults to `siddur.toml` in the working directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Civil date to evaluate instead of today.
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Observe the diaspora calendar regardless of configuration.
    #[arg(long, global = true)]
    pub diaspora: bool,

    /// Treat the civil date as evening, after the Hebrew day has turned.
    #[arg(long, global = true)]
    pub after_nightfall: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the documents in the library.
    List,
    /// Show the calendar flags for the day.
    Flags {
        /// Include inactive flags.
        #[arg(long)]
        all: bool,
        /// Print the full flag set as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print a document resolved for the day.
    Render {
        /// Document id, as shown by `list`.
        id: String,
        /// Print the resolved tree as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Print the conditional structure of a document as JSON.
    Tree {
        /// Document id, as shown by `list`.
        id: String,
    },
    /// Show the layout of a Hebrew year.
    Year {
        /// Hebrew year, e.g. 5785.
        year: i32,
    },
}
