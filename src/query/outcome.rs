//! Query outcomes. Every variant is a normal result; none signals failure.

use super::kind::ResourceKind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// No kind was supplied
    Usage,

    /// Kind literal is not recognized
    InvalidKind { given: String },

    /// All identifiers of a kind, in snapshot order
    Listing {
        kind: ResourceKind,
        identifiers: Vec<String>,
    },

    /// Rendered attributes of the entries matching a name
    Detail {
        kind: ResourceKind,
        name: String,
        entries: Vec<String>,
    },

    /// Valid kind, but nothing carries the requested name
    NotFound { kind: ResourceKind, name: String },
}

impl QueryOutcome {
    /// True only for a detail result that matched at least one entry
    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Detail { .. })
    }

    /// Short tag used in log events and json output
    pub fn tag(&self) -> &'static str {
        match self {
            QueryOutcome::Usage => "usage",
            QueryOutcome::InvalidKind { .. } => "invalid_kind",
            QueryOutcome::Listing { .. } => "listing",
            QueryOutcome::Detail { .. } => "detail",
            QueryOutcome::NotFound { .. } => "not_found",
        }
    }
}

/// Guidance shown when no kind is given.
pub fn usage_text() -> String {
    let mut lines = vec![
        "Please enter resource or resource + field arguments".to_string(),
        "Usage examples:".to_string(),
    ];
    let mut step = 1;
    for kind in ResourceKind::ALL {
        lines.push(format!(
            "{}) confq config view {} --> shows the list of all {}s",
            step,
            kind.as_str(),
            kind.as_str()
        ));
        step += 1;
        lines.push(format!(
            "{}) confq config view {} {} --> shows the properties of {}",
            step,
            kind.as_str(),
            kind.name_placeholder(),
            kind.name_placeholder()
        ));
        step += 1;
    }
    lines.join("\n")
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Usage => f.write_str(&usage_text()),
            QueryOutcome::InvalidKind { .. } => write!(
                f,
                "Invalid resource name given.\nValid resources: {}.",
                ResourceKind::valid_literals()
            ),
            QueryOutcome::Listing { kind, identifiers } => {
                write!(f, "{}: {}", kind.list_label(), identifiers.join(", "))
            }
            QueryOutcome::Detail { entries, .. } => f.write_str(&entries.join("\n\n")),
            QueryOutcome::NotFound { kind, name } => {
                write!(f, "{} {} does not exist", kind.title(), name)
            }
        }
    }
}
