use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kanji_types::ImportMode;

#[derive(Parser, Debug)]
#[command(name = "kanji")]
#[command(about = "Import kanji study sheets and quiz yourself on readings")]
#[command(version)]
pub struct Cli {
    /// JSON config file, environment variables are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a spreadsheet (.xlsx, .xls, .ods) or a JSON cell grid
    Import {
        file: PathBuf,

        /// merge keeps stored kanji missing from the file, replace drops them
        #[arg(long)]
        mode: Option<ImportMode>,

        /// Print the import stats as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import the sheet configured as `import.default_sheet`
    ImportDefault {
        #[arg(long)]
        mode: Option<ImportMode>,

        #[arg(long)]
        json: bool,
    },

    /// List stored kanji
    List,

    /// Show readings and examples of one kanji
    Show { kanji: String },

    /// Remove one kanji from the collection
    Delete { kanji: String },

    /// Check a reading answer
    Check {
        kanji: String,
        answer: String,

        /// Answer is typed in romaji
        #[arg(long)]
        romaji: bool,

        /// Check against on readings instead of kun
        #[arg(long)]
        on: bool,
    },

    /// Remove the whole stored collection
    Clear,
}
