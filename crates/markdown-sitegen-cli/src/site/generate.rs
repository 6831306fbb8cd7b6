use std::path::{Path, PathBuf};

use anyhow::Context;
use markdown_sitegen_engine::{RenderOptions, convert_document, extract_title};
use relative_path::RelativePathBuf;

use super::io::{self, SiteError};
use super::template::render_template;

/// Outcome of generating every page under a content directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Converts one markdown file and writes it into `dest_path` through `template`.
pub fn generate_page(
    from_path: &Path,
    template: &str,
    dest_path: &Path,
    options: &RenderOptions,
) -> anyhow::Result<()> {
    log::info!(
        "Generating page from {} to {}",
        from_path.display(),
        dest_path.display()
    );

    let markdown = io::read_file(from_path)?;
    let content = convert_document(&markdown)
        .and_then(|node| node.render_with(options))
        .with_context(|| format!("converting {}", from_path.display()))?;
    let title = extract_title(&markdown)
        .with_context(|| format!("reading title of {}", from_path.display()))?;

    io::write_file(dest_path, &render_template(template, &title, &content))?;
    Ok(())
}

/// Maps `content_root/a/b.md` to `dest_root/a/b.html`.
pub fn output_path_for(
    markdown_path: &Path,
    content_root: &Path,
    dest_root: &Path,
) -> anyhow::Result<PathBuf> {
    let relative = markdown_path
        .strip_prefix(content_root)
        .with_context(|| {
            format!(
                "{} is outside the content directory",
                markdown_path.display()
            )
        })?;
    let relative = RelativePathBuf::from_path(relative)?;
    Ok(relative.with_extension("html").to_path(dest_root))
}

/// Generates a page for every markdown file under `content_root`.
///
/// Pages that fail to convert are logged and skipped. A missing content
/// directory fails the whole run.
pub fn generate_pages_recursive(
    content_root: &Path,
    template: &str,
    dest_root: &Path,
    options: &RenderOptions,
) -> Result<PageReport, SiteError> {
    let mut report = PageReport::default();

    for markdown_path in io::scan_markdown_files(content_root)? {
        match generate_mirrored(&markdown_path, content_root, template, dest_root, options) {
            Ok(dest) => report.written.push(dest),
            Err(e) => {
                log::error!("Skipping {}: {e:#}", markdown_path.display());
                report.failed.push(markdown_path);
            }
        }
    }

    Ok(report)
}

fn generate_mirrored(
    markdown_path: &Path,
    content_root: &Path,
    template: &str,
    dest_root: &Path,
    options: &RenderOptions,
) -> anyhow::Result<PathBuf> {
    let dest = output_path_for(markdown_path, content_root, dest_root)?;
    generate_page(markdown_path, template, &dest, options)?;
    Ok(dest)
}
