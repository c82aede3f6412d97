//! Applicant mapping command

use aamva_core::build_applicant;
use anyhow::Result;
use console::style;

use super::read_json;

/// Print the canonical applicant built from an applicant data file
pub fn show(input_file: &str) -> Result<()> {
    let raw = read_json(input_file)?;
    let applicant = build_applicant(&raw)?;

    eprintln!("\n{}", style("Canonical Applicant").bold().underlined());
    eprintln!(
        "  Requested:     {}",
        style(applicant.requested_attributes().join(", ")).cyan()
    );
    eprintln!();

    println!("{}", serde_json::to_string_pretty(&applicant)?);
    Ok(())
}
