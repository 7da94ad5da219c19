//! Member extraction — one flat record per function or variable.

use crate::model::{Member, MemberKind, Parameter};
use crate::parser::child;
use crate::parser::text::{node_text, node_text_excluding, TextOptions};
use roxmltree::Node;

/// Sub-blocks extracted separately and therefore excluded from the
/// remaining detailed text: parameter lists, and every `simplesect`
/// admonition (return, warning, note).
const DETAIL_EXCLUDED: &[&str] = &["parameterlist", "simplesect"];

/// Build a [`Member`] from one `memberdef` node.
///
/// Missing sub-nodes degrade to empty fields; nothing here fails.
pub fn parse_member(node: Node, kind: MemberKind) -> Member {
    let plain = TextOptions::default();

    let name = node_text(child(node, "name"), plain);
    let signature = node_text(child(node, "definition"), plain);
    let brief = node_text(child(node, "briefdescription"), TextOptions::collapsed());
    let detailed_node = child(node, "detaileddescription");

    let parameters = resolve_parameters(node, detailed_node);

    let return_description = detailed_node
        .map(|d| {
            d.descendants()
                .filter(|n| {
                    n.has_tag_name("simplesect") && n.attribute("kind") == Some("return")
                })
                .map(|n| node_text(Some(n), plain))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    let detailed = node_text_excluding(detailed_node, DETAIL_EXCLUDED, plain);
    let return_type = node_text(child(node, "type"), plain);

    Member {
        kind,
        name,
        signature,
        brief,
        detailed,
        parameters,
        return_description,
        return_type,
    }
}

/// Two-pass parameter resolution.
///
/// Pass one takes the positional declarations; entries without a name are
/// dropped. Pass two scans the `parameterlist` description block inside the
/// detailed description and fills descriptions in by exact name match;
/// entries naming an unknown parameter are dropped.
pub fn resolve_parameters(member: Node, detailed: Option<Node>) -> Vec<Parameter> {
    let plain = TextOptions::default();

    let mut params: Vec<Parameter> = member
        .children()
        .filter(|c| c.has_tag_name("param"))
        .filter_map(|p| {
            let name = node_text(child(p, "declname"), plain);
            if name.is_empty() {
                return None;
            }
            Some(Parameter {
                name,
                ty: node_text(child(p, "type"), plain),
                description: String::new(),
            })
        })
        .collect();

    let Some(detailed) = detailed else {
        return params;
    };
    let Some(plist) = detailed
        .descendants()
        .find(|n| n.has_tag_name("parameterlist") && n.attribute("kind") == Some("param"))
    else {
        return params;
    };

    for item in plist.children().filter(|c| c.has_tag_name("parameteritem")) {
        let (Some(names), Some(desc_node)) = (
            child(item, "parameternamelist"),
            child(item, "parameterdescription"),
        ) else {
            continue;
        };
        let pname = node_text(child(names, "parametername"), plain);

        // Prefer distinct paragraphs for a clean description; otherwise
        // take the full text with nested admonitions left out.
        let paras: Vec<Node> = desc_node
            .children()
            .filter(|c| c.has_tag_name("para"))
            .collect();
        let pdesc = if paras.is_empty() {
            node_text_excluding(Some(desc_node), &["simplesect"], plain)
        } else {
            paras
                .iter()
                .map(|p| node_text(Some(*p), plain))
                .collect::<Vec<_>>()
                .join(" ")
        };

        for existing in params.iter_mut().filter(|p| p.name == pname) {
            existing.description = pdesc.clone();
        }
    }

    params
}
