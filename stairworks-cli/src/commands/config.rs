//! Site configuration commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stairworks_core::SiteConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective config (file merged over built-in defaults)
    Show,
    /// Write a config file with the built-in catalog, models and FAQ
    Init(InitArgs),
    /// Load the config and check the finish catalog
    Validate,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Validate => run_validate(),
    }
}

fn run_path() -> Result<()> {
    println!("{}", SiteConfig::config_path().display());
    Ok(())
}

fn run_show() -> Result<()> {
    let config = SiteConfig::load()?;
    print!("{}", config.resolved().to_toml()?);
    Ok(())
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = SiteConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\n\nUse --force to overwrite",
            config_path.display()
        ));
    }

    SiteConfig::with_defaults()
        .save(&config_path)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    println!("Created config at: {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit the config: $EDITOR {}", config_path.display());
    println!("  2. Point server.assets_dir at your preview images");
    println!("  3. Run: stairworks config validate");

    Ok(())
}

fn run_validate() -> Result<()> {
    let config = SiteConfig::load()?;
    config.validate()?;
    let catalog = config.catalog()?;

    println!("Config OK: {}", SiteConfig::config_path().display());
    println!("  Finishes: {}", catalog.finishes().len());
    println!("  Models:   {}", catalog.models().len());
    for model in catalog.models() {
        let supported = catalog
            .finishes()
            .iter()
            .filter(|finish| model.supports(finish.id.as_str()))
            .count();
        println!("    {} ({} finishes)", model.name, supported);
    }
    println!("  FAQ:      {}", config.faq().len());
    Ok(())
}
