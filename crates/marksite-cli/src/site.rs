//! Site generation: output cleanup, static asset copying and page
//! rendering.
//!
//! The conversion core only sees strings; everything filesystem-shaped
//! lives here.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use marksite::{extract_title, markdown_to_html};
use walkdir::WalkDir;

/// Remove and recreate the output directory.
pub fn clean_output(output: &Path) -> Result<()> {
    if output.exists() {
        fs::remove_dir_all(output).with_context(|| format!("removing {}", output.display()))?;
        log::info!("removed {}", output.display());
    }
    fs::create_dir_all(output).with_context(|| format!("creating {}", output.display()))?;
    log::info!("created {}", output.display());
    Ok(())
}

/// Copy the static asset tree into the output directory, preserving
/// subdirectories.
pub fn copy_static(static_dir: &Path, output: &Path) -> Result<()> {
    if !static_dir.is_dir() {
        bail!("no static directory at {}", static_dir.display());
    }

    for entry in WalkDir::new(static_dir) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(static_dir)?;
        let dest = output.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .with_context(|| format!("creating {}", dest.display()))?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)
                .with_context(|| format!("copying {}", entry.path().display()))?;
            log::info!("copied {}", dest.display());
        }
    }

    Ok(())
}

/// Render every `*.md` file under `content` into a mirrored `.html` page.
pub fn generate_pages(content: &Path, template_path: &Path, output: &Path) -> Result<()> {
    if !content.is_dir() {
        bail!("no content directory at {}", content.display());
    }

    let template = fs::read_to_string(template_path)
        .with_context(|| format!("reading template {}", template_path.display()))?;

    for entry in WalkDir::new(content) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }

        let rel = entry.path().strip_prefix(content)?;
        let dest = output.join(rel).with_extension("html");
        generate_page(entry.path(), &template, &dest)?;
    }

    Ok(())
}

/// Render one markdown file through the template.
fn generate_page(source: &Path, template: &str, dest: &Path) -> Result<()> {
    log::info!("generating {} from {}", dest.display(), source.display());

    let markdown =
        fs::read_to_string(source).with_context(|| format!("reading {}", source.display()))?;
    let title = extract_title(&markdown)
        .with_context(|| format!("extracting title from {}", source.display()))?;
    let content = markdown_to_html(&markdown)
        .with_context(|| format!("converting {}", source.display()))?;

    let page = render_template(template, &title, &content);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page).with_context(|| format!("writing {}", dest.display()))?;
    log::info!("created {}", dest.display());

    Ok(())
}

/// Substitute the literal `{{ Title }}` and `{{ Content }}` markers.
fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace("{{ Title }}", title)
        .replace("{{ Content }}", content)
}
