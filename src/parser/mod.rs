//! Doxygen XML export parsing.

pub mod compound;
pub mod member;
pub mod text;

use crate::model::ClassRecord;
use anyhow::{ensure, Context, Result};
use roxmltree::Node;
use std::fs;
use std::path::{Path, PathBuf};

/// First child element with the given tag name.
pub(crate) fn child<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children().find(|c| c.has_tag_name(name))
}

/// Locate the class definition files in an export directory, sorted for
/// deterministic output.
pub fn class_files(export_root: &Path) -> Result<Vec<PathBuf>> {
    ensure!(
        export_root.is_dir(),
        "export directory not found: {}",
        export_root.display()
    );
    let pattern = export_root.join("class*.xml");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .with_context(|| format!("invalid export path: {}", export_root.display()))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Parse every class file under the export root.
///
/// A file that fails structurally is reported on stderr and skipped; the
/// rest of the export still renders.
pub fn load_classes(export_root: &Path) -> Result<Vec<ClassRecord>> {
    let mut classes = Vec::new();
    for path in class_files(export_root)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match compound::parse_class(&content) {
            Ok(record) => classes.push(record),
            Err(e) => eprintln!("warning: skipping {}: {}", path.display(), e),
        }
    }
    Ok(classes)
}
