// src/node/mod.rs

//! Generic tree-of-nodes configuration, as supplied by the host.
//!
//! A node has a name, an ordered list of `key = value` pairs and an ordered
//! list of named child nodes. Nothing here knows about game modes; the
//! `config` module interprets the tree.

pub mod parser;

pub use parser::{ParseError, parse_nodes};

/// One node of the host's configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawNode {
    pub name: String,
    pub values: Vec<(String, String)>,
    pub nodes: Vec<RawNode>,
}

impl RawNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((key.into(), value.into()));
        self
    }

    pub fn with_node(mut self, child: RawNode) -> Self {
        self.nodes.push(child);
        self
    }

    /// First value stored under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Every value stored under `key`, in file order.
    pub fn values_named<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.values
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child nodes called `name`, in file order.
    pub fn nodes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RawNode> + 'a {
        self.nodes.iter().filter(move |n| n.name == name)
    }
}

/// Supplier of top-level configuration nodes.
///
/// The host may assemble these from many files; the order returned is the
/// order in which same-mode sections are merged.
pub trait ConfigSource {
    /// All top-level nodes called `name`.
    fn configs(&self, name: &str) -> Vec<RawNode>;
}

/// An in-memory forest of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    roots: Vec<RawNode>,
}

impl Forest {
    pub fn new(roots: Vec<RawNode>) -> Self {
        Self { roots }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse one document in the host's text format.
    pub fn from_text(text: &str) -> crate::errors::Result<Self> {
        Ok(Self::new(parse_nodes(text)?))
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = RawNode>) {
        self.roots.extend(nodes);
    }

    pub fn roots(&self) -> &[RawNode] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl From<Vec<RawNode>> for Forest {
    fn from(roots: Vec<RawNode>) -> Self {
        Self::new(roots)
    }
}

impl ConfigSource for Forest {
    fn configs(&self, name: &str) -> Vec<RawNode> {
        self.roots.configs(name)
    }
}

impl ConfigSource for [RawNode] {
    fn configs(&self, name: &str) -> Vec<RawNode> {
        self.iter().filter(|n| n.name == name).cloned().collect()
    }
}

impl ConfigSource for Vec<RawNode> {
    fn configs(&self, name: &str) -> Vec<RawNode> {
        self.as_slice().configs(name)
    }
}

/// A missing source behaves like an empty one.
impl<S: ConfigSource> ConfigSource for Option<S> {
    fn configs(&self, name: &str) -> Vec<RawNode> {
        match self {
            Some(source) => source.configs(name),
            None => Vec::new(),
        }
    }
}
