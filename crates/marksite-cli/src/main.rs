//! Static site generator entry point.
//!
//! Cleans the output directory, mirrors the static asset tree into it, then
//! renders every markdown page under the content directory through the page
//! template.

mod site;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Generate a static HTML site from a directory of markdown pages.
#[derive(Debug, Parser)]
#[command(name = "marksite", version, about)]
struct Args {
    /// Directory of markdown pages
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Directory of static assets copied into the output as-is
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Page template with `{{ Title }}` and `{{ Content }}` markers
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Output directory, removed and recreated on every run
    #[arg(long, default_value = "public")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    log::info!("starting site generation");
    site::clean_output(&args.output)?;
    site::copy_static(&args.static_dir, &args.output)?;
    site::generate_pages(&args.content, &args.template, &args.output)?;
    log::info!("finished");

    Ok(())
}
