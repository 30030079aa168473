use anyhow::Context;

use crate::cli::Command;
use crate::state::AppState;

pub mod collection;
pub mod import;
pub mod quiz;

use collection::{clear_collection, delete_entry, list_entries, show_entry};
use import::{import_sheet, render_stats};
use quiz::check_answer;

/// Run one CLI command against the stored collection, returns what to print
pub fn run_command(state: &mut AppState, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Import { file, mode, json } => {
            let mode = mode.unwrap_or(state.config.import.default_mode);
            let stats = import_sheet(&mut state.collection, &file, mode)?;
            render_stats(&stats, json)
        }
        Command::ImportDefault { mode, json } => {
            let file = state.config.import.default_sheet.clone().context(
                "No default sheet configured, set KANJI_DEFAULT_SHEET or import.default_sheet",
            )?;
            let mode = mode.unwrap_or(state.config.import.default_mode);
            let stats = import_sheet(&mut state.collection, &file, mode)?;
            render_stats(&stats, json)
        }
        Command::List => list_entries(&state.collection),
        Command::Show { kanji } => show_entry(&state.collection, &kanji),
        Command::Delete { kanji } => delete_entry(&mut state.collection, &kanji),
        Command::Check {
            kanji,
            answer,
            romaji,
            on,
        } => check_answer(&state.collection, &kanji, &answer, romaji, on),
        Command::Clear => clear_collection(&mut state.collection),
    }
}
