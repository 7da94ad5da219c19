//! Project directory listing via the external `tree` command.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Ignore patterns for `tree -I`, read from a .gitignore file. A missing
/// file means no patterns.
pub fn gitignore_patterns(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => parse_patterns(&content),
        Err(_) => Vec::new(),
    }
}

fn parse_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Run `tree` in `root` with the ignore patterns applied.
///
/// A machine without the binary degrades to a placeholder line; the
/// listing is decoration, not worth failing the run over.
pub fn directory_tree(root: &Path, ignore_patterns: &[String]) -> String {
    let mut cmd = Command::new("tree");
    cmd.current_dir(root);
    if !ignore_patterns.is_empty() {
        cmd.arg("-I").arg(ignore_patterns.join("|"));
    }
    match cmd.output() {
        Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
        Err(_) => "tree command not found.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_skip_comments_and_blanks() {
        let patterns = parse_patterns("# build output\nbuild/\n\n*.o\n  \n# editors\n.idea/\n");
        assert_eq!(patterns, vec!["build/", "*.o", ".idea/"]);
    }

    #[test]
    fn empty_file_yields_no_patterns() {
        assert!(parse_patterns("").is_empty());
    }
}
