//! doxmd — render Doxygen XML class documentation into a README template.
//!
//! Runs doxygen, parses the generated XML export into one record per
//! class, orders the records base-first, renders Markdown, and injects the
//! result plus a directory listing into the template's AUTODOC blocks.

mod inject;
mod model;
mod parser;
mod render;
mod sort;
mod tree;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Parser)]
#[command(
    name = "doxmd",
    about = "Generate README API documentation from a Doxygen XML export"
)]
struct Cli {
    /// Doxygen XML output directory
    #[arg(long, default_value = "docs/xml")]
    xml_dir: PathBuf,

    /// Template containing the two AUTODOC marker blocks
    #[arg(long, default_value = "README.template.md")]
    template: PathBuf,

    /// Final rendered file
    #[arg(long, default_value = "README.md")]
    output: PathBuf,

    /// Doxygen configuration file
    #[arg(long, default_value = "Doxyfile")]
    doxyfile: PathBuf,

    /// Project root for the directory listing and its .gitignore
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Reuse an existing XML export instead of invoking doxygen
    #[arg(long)]
    skip_doxygen: bool,
}

/// Resolved pipeline configuration.
struct Config {
    export_root: PathBuf,
    template_path: PathBuf,
    output_path: PathBuf,
    project_root: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.skip_doxygen {
        run_doxygen(&cli.doxyfile)?;
    }

    run(&Config {
        export_root: cli.xml_dir,
        template_path: cli.template,
        output_path: cli.output,
        project_root: cli.root,
    })
}

/// Invoke the external extractor. A failed spawn and a non-zero exit are
/// both fatal: without a fresh export there is nothing to render.
fn run_doxygen(doxyfile: &Path) -> Result<()> {
    println!("Running doxygen...");
    let status = Command::new("doxygen")
        .arg(doxyfile)
        .status()
        .context("failed to invoke doxygen")?;
    if !status.success() {
        bail!("doxygen exited with {}", status);
    }
    Ok(())
}

/// One pass: export → records → order → Markdown → template → disk.
fn run(config: &Config) -> Result<()> {
    let classes = parser::load_classes(&config.export_root)?;
    let classes = sort::sort_classes(classes);
    let api_docs = render::render(&classes);

    let patterns = tree::gitignore_patterns(&config.project_root.join(".gitignore"));
    let listing = tree::directory_tree(&config.project_root, &patterns);

    let template = fs::read_to_string(&config.template_path)
        .with_context(|| format!("failed to read template: {}", config.template_path.display()))?;
    let final_doc = inject::inject_two_blocks(&template, &listing, &api_docs)?;

    fs::write(&config.output_path, final_doc)
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;

    println!("Wrote {}", config.output_path.display());
    Ok(())
}
