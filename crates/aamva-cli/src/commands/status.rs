//! Status command - show configuration

use aamva_proofer::ProoferConfig;
use anyhow::Result;
use console::style;

pub fn show() -> Result<()> {
    println!("\n{}", style("Version").bold().underlined());
    println!("  aamva-cli:     {}", env!("CARGO_PKG_VERSION"));
    println!();

    let config = ProoferConfig::load()?;

    println!("{}", style("Configuration").bold().underlined());
    println!("  Endpoint:      {}", style(&config.verification_url).cyan());
    println!(
        "  Timeout:       {}s",
        config.verification_request_timeout_secs
    );
    println!("  User-Agent:    {}", config.user_agent);
    println!(
        "  Config file:   {}",
        if std::path::Path::new("aamva.toml").exists() {
            style("aamva.toml").green()
        } else {
            style("none (defaults + AAMVA_* env)").yellow()
        }
    );
    println!();

    Ok(())
}
