//! Layout arena data structures.
//!
//! A [`Layout`] owns every positioned node of one computation, keyed by
//! sprite identity. It is built once per recomputation and handed to the
//! rendering collaborator as an immutable value; the next recomputation
//! replaces it wholesale.

use glam::DVec2;
use indexmap::IndexMap;
use lineage_core::{Measures, SpriteDescriptor, SpriteId, Viewport};
use serde_json::Value;
use smallvec::SmallVec;

/// A sprite augmented with its place in the lineage tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutNode {
    /// Identity of the sprite this node was built from.
    pub id: SpriteId,
    /// Parent identity; `None` only for the synthetic root and for stub
    /// nodes synthesized from dangling parent references.
    pub parent: Option<SpriteId>,
    /// Display name (already deduplicated by the caller).
    pub name: String,
    /// Opaque payload carried over from the descriptor.
    pub metadata: Value,
    /// Breadth-first depth from the synthetic root (root = 0).
    pub generation: u32,
    /// Child identities in input order.
    pub children: SmallVec<[SpriteId; 4]>,
    /// True once the node was reached during traversal. The synthetic root
    /// and anything unreachable from it stay invisible.
    pub visible: bool,
    /// Center x in layout coordinates.
    pub x: f64,
    /// Center y in layout coordinates.
    pub y: f64,
    /// Top-left x, `x - node_width / 2`.
    pub x_offset: f64,
    /// Top-left y, `y - node_height / 2`.
    pub y_offset: f64,
}

impl LayoutNode {
    /// Create a placeholder node with empty descriptor fields.
    ///
    /// Stubs exist for identities that were only ever seen as a parent
    /// reference; a later descriptor for the same identity fills them in.
    pub(crate) fn stub(id: SpriteId) -> Self {
        Self {
            id,
            parent: None,
            name: String::new(),
            metadata: Value::Null,
            generation: 0,
            children: SmallVec::new(),
            visible: false,
            x: 0.0,
            y: 0.0,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }

    /// Set the center point and keep the top-left offset pair in sync.
    pub(crate) fn set_center(&mut self, x: f64, y: f64, measures: &Measures) {
        self.x = x;
        self.y = y;
        self.x_offset = x - measures.node_width / 2.0;
        self.y_offset = y - measures.node_height / 2.0;
    }

    /// Center point as a vector.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Top-left corner as a vector.
    pub fn offset(&self) -> DVec2 {
        DVec2::new(self.x_offset, self.y_offset)
    }
}

/// The complete positioned tree for one sprite collection.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// All nodes, keyed by identity, in first-seen order.
    nodes: IndexMap<SpriteId, LayoutNode>,
    /// Identity of the synthetic root.
    root: SpriteId,
}

impl Layout {
    /// Create a layout holding only the synthetic root.
    ///
    /// The root is parked below the visible window so it can anchor the
    /// centering of the first generation without ever rendering.
    pub(crate) fn with_root(viewport: &Viewport, measures: &Measures) -> Self {
        let root_id = SpriteId::root();
        let mut root = LayoutNode::stub(root_id.clone());
        root.set_center(0.0, viewport.height + measures.node_height / 2.0, measures);

        let mut nodes = IndexMap::new();
        nodes.insert(root_id.clone(), root);
        Self { nodes, root: root_id }
    }

    /// Get the node for an identity, creating a stub when absent.
    pub(crate) fn ensure(&mut self, id: SpriteId) -> &mut LayoutNode {
        self.nodes
            .entry(id.clone())
            .or_insert_with(|| LayoutNode::stub(id))
    }

    /// Fold one descriptor into the arena.
    ///
    /// Copies the descriptor fields onto the node (filling a stub if the
    /// identity was referenced earlier), defaults an absent parent to the
    /// synthetic root, and appends the node to its parent's child list.
    pub(crate) fn insert_descriptor(&mut self, descriptor: &SpriteDescriptor) {
        let parent_id = descriptor.parent.clone().unwrap_or_else(SpriteId::root);

        let node = self.ensure(descriptor.id.clone());
        node.name.clone_from(&descriptor.name);
        node.metadata = descriptor.metadata.clone();
        node.parent = Some(parent_id.clone());

        self.ensure(parent_id).children.push(descriptor.id.clone());
    }

    /// Identity of the synthetic root.
    pub fn root_id(&self) -> &SpriteId {
        &self.root
    }

    /// The synthetic root node.
    pub fn root(&self) -> &LayoutNode {
        &self.nodes[&self.root]
    }

    /// Get a node by identity.
    pub fn get(&self, id: &SpriteId) -> Option<&LayoutNode> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &SpriteId) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(id)
    }

    /// Whether an identity is present.
    pub fn contains(&self, id: &SpriteId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes, synthetic root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all identities in first-seen order.
    pub fn ids(&self) -> impl Iterator<Item = &SpriteId> {
        self.nodes.keys()
    }

    /// Iterate over all nodes in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.values()
    }

    /// Iterate over `(identity, node)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&SpriteId, &LayoutNode)> {
        self.nodes.iter()
    }

    /// Children of a node, in input order.
    pub fn children_of<'a>(&'a self, id: &SpriteId) -> impl Iterator<Item = &'a LayoutNode> {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child| self.nodes.get(child))
    }
}
