use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Target,
    Person,
    Platform,
    News,
    Account,
    Group,
}

impl NodeType {
    pub const ALL: [NodeType; 6] = [
        NodeType::Target,
        NodeType::Person,
        NodeType::Platform,
        NodeType::News,
        NodeType::Account,
        NodeType::Group,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Target => "target",
            NodeType::Person => "person",
            NodeType::Platform => "platform",
            NodeType::News => "news",
            NodeType::Account => "account",
            NodeType::Group => "group",
        }
    }

    /// Rendering hint only; carries no meaning for the analysis.
    pub fn default_size(&self) -> u32 {
        match self {
            NodeType::Target => 30,
            NodeType::Platform => 25,
            NodeType::News | NodeType::Person => 20,
            NodeType::Account | NodeType::Group => 15,
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes stored with a node. The node's label is its key and lives
/// outside this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttrs {
    pub node_type: NodeType,
    pub size: u32,
    pub platform: Option<String>,
    pub source: Option<String>,
}

impl NodeAttrs {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            size: node_type.default_size(),
            platform: None,
            source: None,
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }
}

/// A node found in a record, paired with the node it hangs off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    pub label: String,
    pub attrs: NodeAttrs,
    pub anchor: String,
}

impl Discovery {
    pub fn new(label: impl Into<String>, attrs: NodeAttrs, anchor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            attrs,
            anchor: anchor.into(),
        }
    }
}
