use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nutrition Facts calculator — rounds recipe nutrition to FDA label values.
#[derive(Parser, Debug)]
#[command(name = "nutrition_label")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe formulation JSON file.
    #[arg(short, long, default_value = "formulation.json", global = true)]
    pub file: PathBuf,

    /// JSON object of Daily Value overrides keyed by nutrient (e.g. {"sodium": 2300}).
    #[arg(long, global = true)]
    pub daily_values: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the Nutrition Facts panel with ingredient and allergen statements.
    Panel,

    /// Write the full calculation result as JSON.
    Json {
        /// Output file; prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Export raw, declared and % Daily Values as CSV.
    Export {
        /// Output CSV file.
        #[arg(long, default_value = "nutrition_label.csv")]
        out: PathBuf,
    },

    /// List ingredients whose names suggest allergens they do not declare.
    Audit,
}

impl Default for Command {
    fn default() -> Self {
        Command::Panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["nutrition_label"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.file, PathBuf::from("formulation.json"));
        assert!(cli.daily_values.is_none());
    }

    #[test]
    fn test_export_with_global_file() {
        let cli = Cli::parse_from([
            "nutrition_label",
            "export",
            "--out",
            "label.csv",
            "--file",
            "cookies.json",
        ]);
        assert_eq!(cli.file, PathBuf::from("cookies.json"));
        match cli.command {
            Some(Command::Export { out }) => assert_eq!(out, PathBuf::from("label.csv")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
