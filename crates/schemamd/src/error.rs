//! render errors
//!
//! Rendering is all or nothing. Any error aborts the whole document, and since rendering is pure the same input
//! fails the same way every time.

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Value type descriptor the type formatter does not know
    #[error("unexpected type {0}")]
    UnexpectedType(String),
    /// Attribute without a type and without a nested type
    #[error("attribute has neither a type nor a nested type")]
    MalformedAttribute,
    /// None of Required, Optional, Read-only holds
    #[error("no group matches {0:?}, exactly one of required, optional or computed must be set")]
    Unclassified(String),
    /// Object (or collection of objects) used as a plain attribute type
    #[error("expanding nested structure of {0} is not supported, use a nested attribute type instead")]
    UnsupportedStructure(String),
    /// Failure while rendering a named child, `path` is dot separated
    #[error("unable to render {kind} {path:?}")]
    Child {
        kind: ChildKind,
        path: String,
        #[source]
        source: Box<RenderError>,
    },
    #[error("unable to render schema")]
    Schema(#[source] Box<RenderError>),
    #[error("unable to write output")]
    Write(#[from] std::fmt::Error),
}

impl RenderError {
    pub(crate) fn in_child(self, kind: ChildKind, path: &[&str]) -> Self {
        RenderError::Child {
            kind,
            path: path.join("."),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping context wrappers
    pub fn root_cause(&self) -> &RenderError {
        match self {
            RenderError::Child { source, .. } | RenderError::Schema(source) => source.root_cause(),
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Attribute,
    Block,
}

impl std::fmt::Display for ChildKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChildKind::Attribute => f.write_str("attribute"),
            ChildKind::Block => f.write_str("block"),
        }
    }
}
