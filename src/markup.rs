use indextree::{Arena, NodeEdge as IndexTreeNodeEdge, NodeId};

use crate::attribute::HtmlAttribute;

pub(crate) type MarkupArena = Arena<Value>;

/// A node in a markup tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// An element: a tag name and its finalized attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<HtmlAttribute>,
}

impl Element {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Value {
    /// Holds a sequence of nodes without a tag of its own.
    Fragment,
    Element(Element),
    /// Text, escaped when serialized.
    Text(String),
    /// Markup that is written out as-is.
    Html(String),
}

/// Node edges, as produced by [`Markup::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum NodeEdge {
    /// The start edge of a node. For an element this is the start tag.
    Start(Node),
    /// The end edge of a node. For an element this is the end tag; for
    /// anything else it immediately follows the start edge.
    End(Node),
}

/// Arena holding the nodes of markup trees while they are rendered.
pub(crate) struct Markup {
    arena: MarkupArena,
}

impl Markup {
    pub(crate) fn new() -> Self {
        Markup {
            arena: MarkupArena::new(),
        }
    }

    fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena.new_node(value))
    }

    pub(crate) fn new_fragment(&mut self) -> Node {
        self.new_node(Value::Fragment)
    }

    pub(crate) fn new_element(&mut self, name: &str, attributes: Vec<HtmlAttribute>) -> Node {
        self.new_node(Value::Element(Element {
            name: name.to_string(),
            attributes,
        }))
    }

    pub(crate) fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(text.to_string()))
    }

    pub(crate) fn new_html(&mut self, html: &str) -> Node {
        self.new_node(Value::Html(html.to_string()))
    }

    /// Append `child` as the last child of `parent`.
    pub(crate) fn append(&mut self, parent: Node, child: Node) {
        parent.get().append(child.get(), &mut self.arena);
    }

    #[inline]
    pub(crate) fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    /// Depth-first traversal of `node` and its descendants.
    pub(crate) fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(&self.arena).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::new()
    }
}
