use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutrition_label_rs::cli::{Cli, Command};
use nutrition_label_rs::engine::{
    calculate_label, undeclared_allergens, NutritionLabel, ReferenceDailyValues,
};
use nutrition_label_rs::error::Result;
use nutrition_label_rs::interface::{display_allergen_audit, display_label};
use nutrition_label_rs::models::RecipeFormulation;
use nutrition_label_rs::persistence::{
    load_daily_values, load_formulation, save_label, write_label_csv,
};

fn main() {
    // Logs go to stderr so JSON and CSV output on stdout stay clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nutrition_label=info,nutrition_label_rs=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let formulation = load_formulation(&cli.file)?;
    info!(
        file = %cli.file.display(),
        lines = formulation.lines.len(),
        "loaded formulation"
    );

    let overrides = cli.daily_values.as_deref();
    match command {
        Command::Panel => cmd_panel(&formulation, overrides),
        Command::Json { out } => cmd_json(&formulation, overrides, out.as_deref()),
        Command::Export { out } => cmd_export(&formulation, overrides, &out),
        Command::Audit => cmd_audit(&formulation),
    }
}

/// Build the Daily Value table, applying overrides from a file if given.
fn reference_values(overrides: Option<&Path>) -> Result<ReferenceDailyValues> {
    let references = ReferenceDailyValues::default();
    match overrides {
        Some(path) => {
            let overrides = load_daily_values(path)?;
            info!(
                path = %path.display(),
                entries = overrides.len(),
                "applied daily value overrides"
            );
            Ok(references.with_overrides(overrides))
        }
        None => Ok(references),
    }
}

fn label_for(formulation: &RecipeFormulation, overrides: Option<&Path>) -> Result<NutritionLabel> {
    let references = reference_values(overrides)?;
    calculate_label(formulation, &references)
}

/// Print the Nutrition Facts panel.
fn cmd_panel(formulation: &RecipeFormulation, overrides: Option<&Path>) -> Result<()> {
    let label = label_for(formulation, overrides)?;
    display_label(formulation, &label);
    Ok(())
}

/// Write the calculation result as JSON to a file or stdout.
fn cmd_json(
    formulation: &RecipeFormulation,
    overrides: Option<&Path>,
    out: Option<&Path>,
) -> Result<()> {
    let label = label_for(formulation, overrides)?;

    match out {
        Some(path) => {
            save_label(path, &label)?;
            println!("Wrote label to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&label)?),
    }

    Ok(())
}

/// Export the label as CSV.
fn cmd_export(
    formulation: &RecipeFormulation,
    overrides: Option<&Path>,
    out: &Path,
) -> Result<()> {
    let label = label_for(formulation, overrides)?;
    write_label_csv(&label, out)?;
    println!(
        "Wrote {} nutrient rows to {}",
        label.raw.iter().count(),
        out.display()
    );
    Ok(())
}

/// Report ingredients whose names suggest undeclared allergens.
fn cmd_audit(formulation: &RecipeFormulation) -> Result<()> {
    let findings: Vec<_> = formulation
        .ordered_lines()
        .iter()
        .filter_map(|line| {
            let missing = undeclared_allergens(line);
            if missing.is_empty() {
                None
            } else {
                Some((line.ingredient.name.clone(), missing))
            }
        })
        .collect();

    display_allergen_audit(&findings);
    Ok(())
}
