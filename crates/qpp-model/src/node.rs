//! Decoded document tree.
//!
//! A [`Node`] owns its children outright. Paths are derived when a child is
//! attached and are only used to attribute validation errors, so validators
//! never need parent pointers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::template::TemplateId;

/// Breadcrumb locator of a node, e.g. `/clinicalDocument/measureSection[0]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(String);

impl NodePath {
    /// Path of a tree root.
    pub fn root(template_id: TemplateId) -> Self {
        Self(format!("/{}", template_id.path_segment()))
    }

    /// Path of the child at `index` below this path.
    pub fn child(&self, template_id: TemplateId, index: usize) -> Self {
        Self(format!("{}/{}[{}]", self.0, template_id.path_segment(), index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One decoded document element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NodeDocument", into = "NodeDocument")]
pub struct Node {
    template_id: TemplateId,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
    path: NodePath,
}

impl Node {
    /// Create a childless node rooted at its own path.
    pub fn new(template_id: TemplateId) -> Self {
        Self {
            template_id,
            attributes: BTreeMap::new(),
            children: Vec::new(),
            path: NodePath::root(template_id),
        }
    }

    /// Builder form of [`Node::put_value`].
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put_value(key, value);
        self
    }

    /// Builder form of [`Node::add_child`].
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    pub fn put_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Append a child, re-deriving the path of its whole subtree.
    pub fn add_child(&mut self, mut child: Node) {
        let path = self.path.child(child.template_id, self.children.len());
        child.reroot(path);
        self.children.push(child);
    }

    fn reroot(&mut self, path: NodePath) {
        self.path = path;
        for (index, child) in self.children.iter_mut().enumerate() {
            let child_path = self.path.child(child.template_id, index);
            child.reroot(child_path);
        }
    }

    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Attribute value for an exact key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// True when the attribute exists and is not blank.
    pub fn has_value(&self, key: &str) -> bool {
        self.value(key).is_some_and(|value| !value.trim().is_empty())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Direct children accepted by `predicate`, in insertion order.
    ///
    /// The iterator is lazy and can be cloned to restart the scan.
    pub fn children_matching<P>(&self, predicate: P) -> impl Iterator<Item = &Node> + Clone
    where
        P: Fn(&Node) -> bool + Clone,
    {
        self.children.iter().filter(move |child: &&Node| predicate(*child))
    }

    /// Direct children whose template is one of `templates`.
    pub fn children_of<'a>(
        &'a self,
        templates: &'a [TemplateId],
    ) -> impl Iterator<Item = &'a Node> + Clone {
        self.children_matching(move |child: &Node| templates.contains(&child.template_id))
    }

    pub fn count_children_of(&self, templates: &[TemplateId]) -> usize {
        self.children_of(templates).count()
    }

    /// Pre-order traversal starting at (and including) this node.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// All nodes in this subtree with the given template, in traversal order.
    pub fn find_all(&self, template_id: TemplateId) -> impl Iterator<Item = &Node> {
        self.descendants()
            .filter(move |node| node.template_id == template_id)
    }
}

/// Depth-first, pre-order iterator over a subtree.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Serialized form of a node; paths are recomputed on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeDocument {
    template: TemplateId,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeDocument>,
}

impl From<NodeDocument> for Node {
    fn from(document: NodeDocument) -> Self {
        let mut node = Node::new(document.template);
        node.attributes = document.attributes;
        for child in document.children {
            node.add_child(child.into());
        }
        node
    }
}

impl From<Node> for NodeDocument {
    fn from(node: Node) -> Self {
        Self {
            template: node.template_id,
            attributes: node.attributes,
            children: node.children.into_iter().map(Into::into).collect(),
        }
    }
}
