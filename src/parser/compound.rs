//! Class extraction from one compound-definition document.

use crate::model::{ClassRecord, MemberKind};
use crate::parser::text::{node_text, TextOptions};
use crate::parser::{child, member};
use anyhow::{anyhow, Result};

/// Member classification carried by a section kind. Sections holding
/// anything else (typedefs, enums, friends) are not documented.
fn classify_section(kind: &str) -> Option<MemberKind> {
    match kind {
        "public-func" => Some(MemberKind::PublicFunction),
        "protected-func" => Some(MemberKind::ProtectedFunction),
        "private-func" => Some(MemberKind::PrivateFunction),
        k if k.ends_with("attrib") => Some(MemberKind::Attribute),
        _ => None,
    }
}

/// Parse one class XML document into a [`ClassRecord`].
///
/// A document without a named compound definition is a structural failure.
/// Malformed individual members degrade to empty fields instead of
/// aborting the class.
pub fn parse_class(xml: &str) -> Result<ClassRecord> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| anyhow!("invalid XML: {e}"))?;
    let comp =
        child(doc.root_element(), "compounddef").ok_or_else(|| anyhow!("missing compounddef"))?;

    let plain = TextOptions::default();
    let name = node_text(child(comp, "compoundname"), plain);
    if name.is_empty() {
        return Err(anyhow!("compound definition has no name"));
    }

    let base_names = comp
        .children()
        .filter(|c| c.has_tag_name("basecompoundref"))
        .map(|b| node_text(Some(b), plain))
        .collect();

    let mut record = ClassRecord {
        name,
        base_names,
        ..Default::default()
    };

    for section in comp.children().filter(|c| c.has_tag_name("sectiondef")) {
        let Some(kind) = section.attribute("kind").and_then(classify_section) else {
            continue;
        };
        for m in section.children().filter(|c| c.has_tag_name("memberdef")) {
            let parsed = member::parse_member(m, kind);
            if kind.is_function() {
                record.functions.push(parsed);
            } else {
                record.variables.push(parsed);
            }
        }
    }

    Ok(record)
}
