//! Markdown renderer for the ordered class list.
//!
//! One `##` block per class: member variables as a bullet list, member
//! functions as `####` signature headings with parameter and return
//! tables, a `---` rule closing each class.

use crate::model::{ClassRecord, Member};
use regex::Regex;

/// Render the full document.
pub fn render(classes: &[ClassRecord]) -> String {
    let mut out = String::new();
    for class in classes {
        render_class(&mut out, class);
    }
    out
}

fn render_class(out: &mut String, class: &ClassRecord) {
    out.push_str(&format!("## {}\n\n", class.name));

    if !class.variables.is_empty() {
        out.push_str("### Member Variables\n\n");
        for variable in &class.variables {
            render_variable(out, variable);
        }
        out.push('\n');
    }

    if !class.functions.is_empty() {
        out.push_str("### Member Functions\n\n");
        for function in &class.functions {
            render_function(out, function);
        }
    }

    out.push_str("\n---\n\n");
}

fn render_variable(out: &mut String, member: &Member) {
    let ty = variable_type(member);
    let line_text = if member.brief.is_empty() {
        member.detailed.as_str()
    } else {
        member.brief.as_str()
    };

    if ty.is_empty() {
        out.push_str(&format!("- `{}`: {}\n", member.name, line_text));
    } else {
        out.push_str(&format!("- `{}` `{}`: {}\n", ty, member.name, line_text));
    }

    // longer @details text becomes its own indented paragraph
    if !member.detailed.is_empty() && member.detailed != line_text {
        out.push_str(&format!("  \n  {}\n", member.detailed));
    }
}

fn render_function(out: &mut String, func: &Member) {
    out.push_str(&format!("#### `{}`\n\n", func.signature));

    if !func.brief.is_empty() {
        out.push_str(&format!("{}\n\n", func.brief));
    }
    if !func.detailed.is_empty() {
        out.push_str(&format!("{}\n\n", func.detailed));
    }

    if !func.parameters.is_empty() {
        out.push_str("#### Parameters\n\n");
        out.push_str("| Name | Type | Description |\n");
        out.push_str("|------|------|-------------|\n");
        for p in &func.parameters {
            out.push_str(&format!("| `{}` | `{}` | {} |\n", p.name, p.ty, p.description));
        }
        out.push('\n');
    }

    if !func.return_description.is_empty() {
        out.push_str("#### Return\n\n");
        out.push_str("| Type | Description |\n");
        out.push_str("|--------|-------------|\n");
        out.push_str(&format!(
            "| {} | {} |\n\n",
            func.return_type, func.return_description
        ));
    }
}

/// Best-effort type text for a variable: everything before the trailing
/// scope-qualified name in its declaration, falling back to the recorded
/// type field when nothing is left.
///
/// TODO: on the no-match path, a type containing the variable's own name
/// as a substring gets mangled by the global strip; anchor the strip to
/// the final identifier token instead.
fn variable_type(member: &Member) -> String {
    let pattern = format!(r"^(.*?)(?:\w+::)*{}$", regex::escape(&member.name));
    let derived = Regex::new(&pattern)
        .ok()
        .and_then(|re| {
            re.captures(&member.signature)
                .map(|caps| caps.get(1).map_or("", |m| m.as_str()).trim().to_string())
        })
        .unwrap_or_else(|| member.signature.replace(&member.name, "").trim().to_string());
    if derived.is_empty() {
        member.return_type.clone()
    } else {
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MemberKind, Parameter};

    fn variable(name: &str, signature: &str, ty: &str, brief: &str, detailed: &str) -> Member {
        Member {
            kind: MemberKind::Attribute,
            name: name.to_string(),
            signature: signature.to_string(),
            brief: brief.to_string(),
            detailed: detailed.to_string(),
            parameters: Vec::new(),
            return_description: String::new(),
            return_type: ty.to_string(),
        }
    }

    fn function(name: &str, signature: &str) -> Member {
        Member {
            kind: MemberKind::PublicFunction,
            name: name.to_string(),
            signature: signature.to_string(),
            brief: String::new(),
            detailed: String::new(),
            parameters: Vec::new(),
            return_description: String::new(),
            return_type: String::new(),
        }
    }

    #[test]
    fn type_from_scoped_declaration() {
        let v = variable("count", "int Derived::count", "int", "counter", "");
        assert_eq!(variable_type(&v), "int");
    }

    #[test]
    fn type_with_scoped_qualifier() {
        let v = variable("count", "std::size_t count", "std::size_t", "", "");
        assert_eq!(variable_type(&v), "std::size_t");
    }

    #[test]
    fn type_falls_back_to_recorded_field() {
        let v = variable("count", "count", "int", "", "");
        assert_eq!(variable_type(&v), "int");
    }

    #[test]
    fn variable_line_with_type_and_brief() {
        let mut out = String::new();
        render_variable(
            &mut out,
            &variable("count", "int Derived::count", "int", "counter", ""),
        );
        assert_eq!(out, "- `int` `count`: counter\n");
    }

    #[test]
    fn variable_line_falls_back_to_detailed() {
        let mut out = String::new();
        render_variable(
            &mut out,
            &variable("count", "int Derived::count", "int", "", "frame counter"),
        );
        assert_eq!(out, "- `int` `count`: frame counter\n");
    }

    #[test]
    fn distinct_detailed_gets_its_own_paragraph() {
        let mut out = String::new();
        render_variable(
            &mut out,
            &variable(
                "count",
                "int Derived::count",
                "int",
                "counter",
                "Incremented once per frame.",
            ),
        );
        assert_eq!(
            out,
            "- `int` `count`: counter\n  \n  Incremented once per frame.\n"
        );
    }

    #[test]
    fn function_without_params_or_return_has_no_tables() {
        let mut out = String::new();
        render_function(&mut out, &function("greet", "void Base::greet"));
        assert!(out.starts_with("#### `void Base::greet`\n\n"));
        assert!(!out.contains("#### Parameters"));
        assert!(!out.contains("#### Return"));
    }

    #[test]
    fn parameter_and_return_tables() {
        let mut f = function("resize", "bool Engine::resize");
        f.parameters.push(Parameter {
            name: "width".to_string(),
            ty: "int".to_string(),
            description: "new width".to_string(),
        });
        f.return_type = "bool".to_string();
        f.return_description = "true when the surface changed".to_string();

        let mut out = String::new();
        render_function(&mut out, &f);
        assert!(out.contains("| Name | Type | Description |\n"));
        assert!(out.contains("| `width` | `int` | new width |\n"));
        assert!(out.contains("#### Return\n"));
        assert!(out.contains("| bool | true when the surface changed |\n"));
    }

    #[test]
    fn class_block_layout() {
        let class = ClassRecord {
            name: "Base".to_string(),
            base_names: Vec::new(),
            functions: vec![function("greet", "void Base::greet")],
            variables: Vec::new(),
        };
        let doc = render(&[class]);
        assert!(doc.starts_with("## Base\n\n### Member Functions\n\n"));
        assert!(doc.ends_with("\n---\n\n"));
        assert!(!doc.contains("Member Variables"));
    }

    #[test]
    fn memberless_class_is_heading_and_rule() {
        let class = ClassRecord {
            name: "Empty".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&[class]), "## Empty\n\n\n---\n\n");
    }
}
