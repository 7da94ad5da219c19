//! Data model for parsed class documentation — one flat record per entity.

/// Member classification, derived from the enclosing section kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    PublicFunction,
    ProtectedFunction,
    PrivateFunction,
    Attribute,
}

impl MemberKind {
    pub fn is_function(self) -> bool {
        !matches!(self, MemberKind::Attribute)
    }
}

/// A single declared parameter of a member function.
#[derive(Debug, Clone, Default)]
pub struct Parameter {
    pub name: String,
    /// Declared type text (may be empty).
    pub ty: String,
    /// Filled from the parameter-description block when a name matches.
    pub description: String,
}

/// One member function or variable.
#[derive(Debug, Clone)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    /// Full declaration text, qualifiers and scope included.
    pub signature: String,
    pub brief: String,
    /// Remaining descriptive prose — parameter lists, return blocks and
    /// other admonitions are extracted separately and never re-appear here.
    pub detailed: String,
    /// Declaration order; always empty for attributes.
    pub parameters: Vec<Parameter>,
    pub return_description: String,
    /// Declared return type for functions, declared type for variables.
    pub return_type: String,
}

/// One documented class: name, raw base references, members in
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct ClassRecord {
    pub name: String,
    /// Base-class names as declared. May reference classes that are not
    /// part of this export.
    pub base_names: Vec<String>,
    pub functions: Vec<Member>,
    pub variables: Vec<Member>,
}
