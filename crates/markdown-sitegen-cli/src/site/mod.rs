//! Static site generation: clean the output, copy static assets, render pages.

pub mod generate;
pub mod io;
pub mod template;

use markdown_sitegen_config::Config;

use generate::{PageReport, generate_pages_recursive};
use io::SiteError;

/// Builds the whole site described by `config`.
///
/// A missing static directory only logs a warning. A missing template or
/// content directory fails the run.
pub fn build_site(config: &Config) -> Result<PageReport, SiteError> {
    log::info!("Cleaning output directory {}", config.output_dir.display());
    io::clean_dir(&config.output_dir)?;

    if config.static_dir.is_dir() {
        let copied = io::copy_dir_recursive(&config.static_dir, &config.output_dir)?;
        log::info!(
            "Copied {copied} static files from {}",
            config.static_dir.display()
        );
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
    }

    let template = io::read_file(&config.template_path)?;
    generate_pages_recursive(
        &config.content_dir,
        &template,
        &config.output_dir,
        &config.render_options(),
    )
}
