//! Marker-block substitution into the README template.

use anyhow::{ensure, Result};
use regex::Regex;
use std::sync::LazyLock;

static RE_AUTODOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!-- AUTODOC:BEGIN -->.*?<!-- AUTODOC:END -->").unwrap()
});

/// Replace the two AUTODOC blocks in `template`: the first receives the
/// directory listing in a code fence, the second the rendered API
/// documentation. Everything outside the blocks is preserved
/// byte-for-byte.
pub fn inject_two_blocks(template: &str, tree_listing: &str, api_docs: &str) -> Result<String> {
    let markers: Vec<_> = RE_AUTODOC.find_iter(template).collect();
    ensure!(
        markers.len() == 2,
        "expected exactly two AUTODOC blocks in template, found {}",
        markers.len()
    );

    let mut result = String::with_capacity(template.len() + tree_listing.len() + api_docs.len());
    result.push_str(&template[..markers[0].start()]);
    result.push_str(&format!(
        "<!-- AUTODOC:BEGIN -->\n\n```\n{}\n```\n\n<!-- AUTODOC:END -->",
        tree_listing
    ));
    result.push_str(&template[markers[0].end()..markers[1].start()]);
    result.push_str(&format!(
        "<!-- AUTODOC:BEGIN -->\n\n{}\n<!-- AUTODOC:END -->",
        api_docs
    ));
    result.push_str(&template[markers[1].end()..]);
    Ok(result)
}
