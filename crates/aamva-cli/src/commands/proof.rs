//! Proof and interpretation commands

use aamva_core::{build_applicant, ProofResult};
use aamva_proofer::{interpret_json, Proofer, ProoferConfig};
use anyhow::Result;
use console::style;

use super::read_json;

/// Interpret a saved verification response
pub fn interpret(response_file: &str, input_file: Option<&str>) -> Result<()> {
    let response = read_json(response_file)?;

    let requested = match input_file {
        Some(path) => build_applicant(&read_json(path)?)?.requested_attributes(),
        None => Vec::new(),
    };

    let mut result = ProofResult::new();
    interpret_json(&response, &requested, &mut result)?;

    print_result(&result)
}

/// Run a full proof through the configured verification endpoint
pub async fn run(input_file: &str, url: Option<String>) -> Result<()> {
    let raw = read_json(input_file)?;

    let mut config = ProoferConfig::load()?;
    if let Some(url) = url {
        config.verification_url = url;
    }

    tracing::info!("Proofing against {}", config.verification_url);

    let proofer = Proofer::from_config(&config)?;
    let result = proofer.proof(&raw).await?;

    print_result(&result)
}

fn print_result(result: &ProofResult) -> Result<()> {
    let verdict = if result.success() {
        style("VERIFIED").green().bold()
    } else {
        style("FAILED").red().bold()
    };
    eprintln!("\n  Result:        {}", verdict);
    for (attribute, codes) in result.errors() {
        let codes: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
        eprintln!("  {:<14} {}", attribute, style(codes.join(", ")).yellow());
    }
    eprintln!();

    println!("{}", serde_json::to_string_pretty(&result.to_json())?);
    Ok(())
}
