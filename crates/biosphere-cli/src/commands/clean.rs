//! Clean command - clean a data file and export the result.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use biosphere::{BiosphereConfig, Table};
use colored::Colorize;

use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    config: BiosphereConfig,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Cleaning".cyan().bold(),
        file.display().to_string().white()
    );

    let (_, dataset) = super::load_dataset(&file, config)?;
    let report = &dataset.report;

    println!(
        "Rows: {} -> {} ({} removed)",
        report.rows_before.to_string().white(),
        report.rows_after.to_string().white().bold(),
        report.rows_removed().to_string().yellow()
    );
    println!(
        "Recorded {} changes",
        report.changes.len().to_string().white().bold()
    );

    if verbose {
        println!();
        println!("{}", "Changes:".yellow().bold());
        for change in &report.changes {
            let column = change.column.as_deref().unwrap_or("-");
            println!(
                "  {:20} {:20} {}",
                change.step.label(),
                column,
                change.description
            );
        }
        println!();
    }

    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}_cleaned.{}", stem, format.extension()))
    });

    write_table(&dataset.table, &output_path, format)?;

    println!(
        "{} {}",
        "Saved cleaned data to".green(),
        output_path.display().to_string().cyan()
    );

    Ok(())
}

fn write_table(
    table: &Table,
    path: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let delimiter = match format {
        OutputFormat::Csv => b',',
        OutputFormat::Tsv => b'\t',
        OutputFormat::Json => {
            let writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(writer, &table.to_json_records())?;
            return Ok(());
        }
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;
    writer.write_record(table.column_names())?;
    for record in table.to_string_records() {
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
