use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use markdown_sitegen_config::Config;

mod site;

/// Generate a static HTML site from a tree of markdown files.
#[derive(Parser, Debug)]
#[command(name = "markdown-sitegen", version, about)]
struct Cli {
    /// Config file to read (defaults to ./sitegen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory
    #[arg(long)]
    content: Option<PathBuf>,

    /// Static assets copied verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory (wiped on every run)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Escape text and attribute values in generated pages
    #[arg(long)]
    escape_html: bool,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    init_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Loads the config file, or defaults when there is none.
    ///
    /// An explicitly passed `--config` must exist unless `allow_missing` is set.
    fn load_config(&self, allow_missing: bool) -> Result<Config> {
        let config_path = self.config_path();
        let loaded = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };
        match loaded {
            Some(config) => {
                log::debug!("Loaded config from {}", config_path.display());
                Ok(config)
            }
            None if self.config.is_some() && !allow_missing => {
                anyhow::bail!("Config file not found: {}", config_path.display())
            }
            None => Ok(Config::default()),
        }
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(content) = &self.content {
            config.content_dir = content.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(template) = &self.template {
            config.template_path = template.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if self.escape_html {
            config.escape_html = true;
        }
        config
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.init_config {
        let config_path = cli.config_path();
        let config = cli.apply_overrides(cli.load_config(true)?);
        config.save_to_path(&config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    let config = cli.apply_overrides(cli.load_config(false)?);
    let report = site::build_site(&config)?;

    log::info!(
        "Generated {} pages into {}",
        report.written.len(),
        config.output_dir.display()
    );
    if !report.failed.is_empty() {
        log::warn!("{} pages failed and were skipped", report.failed.len());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
