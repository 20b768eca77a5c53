//! Host-facing node descriptors.
//!
//! The pipeline host discovers nodes through a registration table: each node
//! declares its typed inputs, its return values, and whether the host's
//! re-run-avoidance cache may short-circuit it. This module models that table
//! as plain serializable data; no host runtime lives in this crate.
//!
//! The original pack defeated the host cache by returning a random "changed"
//! value on every poll. That is expressed here as an explicit
//! `always_rerun` flag instead.

use serde::{Deserialize, Serialize};

/// Category shown for all nodes in this pack.
pub const NODE_CATEGORY: &str = "Downloader";

/// The kind of value flowing through a node input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// A plain string (URLs, paths, file names, tokens).
    String,
    /// A boolean flag.
    Boolean,
    /// The opaque summary log threaded between Downloader nodes.
    Summary,
    /// A token source discriminator (one of the three source kinds).
    TokenSourceKind,
}

/// One declared node input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    /// Input name as shown by the host.
    pub name: String,
    /// Value kind accepted on this input.
    pub kind: ValueKind,
}

impl InputSpec {
    /// Create a new input spec.
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One declared node output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Output name as shown by the host.
    pub name: String,
    /// Value kind produced on this output.
    pub kind: ValueKind,
}

impl OutputSpec {
    /// Create a new output spec.
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Registration data for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Stable identifier used in serialized graphs.
    pub name: String,
    /// Human-readable name shown in the host UI.
    pub display_name: String,
    /// Menu category.
    pub category: String,
    /// Inputs the host must connect.
    pub required: Vec<InputSpec>,
    /// Inputs the host may leave unconnected.
    pub optional: Vec<InputSpec>,
    /// Returned values, in tuple order.
    pub returns: Vec<OutputSpec>,
    /// When `true` the host must re-execute this node on every run instead
    /// of serving a cached result.
    pub always_rerun: bool,
}

/// Descriptor for the Downloader node.
#[must_use]
pub fn downloader() -> NodeDescriptor {
    NodeDescriptor {
        name: "Downloader".to_string(),
        display_name: "Downloader".to_string(),
        category: NODE_CATEGORY.to_string(),
        required: vec![
            InputSpec::new("url", ValueKind::String),
            InputSpec::new("path", ValueKind::String),
            InputSpec::new("file_name", ValueKind::String),
            InputSpec::new("force", ValueKind::Boolean),
        ],
        optional: vec![
            InputSpec::new("summary", ValueKind::Summary),
            InputSpec::new("token", ValueKind::String),
        ],
        returns: vec![OutputSpec::new("summary", ValueKind::Summary)],
        // Downloads must observe the real filesystem every run; a cached
        // result would skip the existence check entirely.
        always_rerun: true,
    }
}

/// Descriptor for the summary parser node.
#[must_use]
pub fn summary_parser() -> NodeDescriptor {
    NodeDescriptor {
        name: "DownloadSummaryParser".to_string(),
        display_name: "Download Summary Parser".to_string(),
        category: NODE_CATEGORY.to_string(),
        required: vec![InputSpec::new("summary", ValueKind::Summary)],
        optional: vec![],
        returns: vec![OutputSpec::new("text", ValueKind::String)],
        always_rerun: false,
    }
}

/// Descriptor for the token loader node.
#[must_use]
pub fn token_loader() -> NodeDescriptor {
    NodeDescriptor {
        name: "DownloadTokenLoader".to_string(),
        display_name: "Download Token Loader".to_string(),
        category: NODE_CATEGORY.to_string(),
        required: vec![
            InputSpec::new("value", ValueKind::String),
            InputSpec::new("type", ValueKind::TokenSourceKind),
        ],
        optional: vec![],
        returns: vec![OutputSpec::new("token", ValueKind::String)],
        always_rerun: false,
    }
}

/// All node descriptors in this pack, in declaration order.
#[must_use]
pub fn registry() -> Vec<NodeDescriptor> {
    vec![downloader(), summary_parser(), token_loader()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_declares_three_nodes() {
        let nodes = registry();
        let names: Vec<_> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Downloader", "DownloadSummaryParser", "DownloadTokenLoader"]
        );
        assert!(nodes.iter().all(|n| n.category == NODE_CATEGORY));
    }

    #[test]
    fn test_downloader_is_always_rerun() {
        let node = downloader();
        assert!(node.always_rerun);
        assert!(!summary_parser().always_rerun);
        assert!(!token_loader().always_rerun);

        // Summary and token are optional so graphs can omit them
        let optional: Vec<_> = node.optional.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(optional, vec!["summary", "token"]);
    }

    #[test]
    fn test_descriptors_serialize() {
        let json = serde_json::to_string(&downloader()).unwrap();
        assert!(json.contains("\"always_rerun\":true"));
        assert!(json.contains("\"file_name\""));
    }
}
