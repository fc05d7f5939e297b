//! Breadth-first generation and group collection.

use std::collections::VecDeque;
use std::mem;

use lineage_core::SpriteId;
use smallvec::{smallvec, SmallVec};

use crate::tree::Layout;

/// A maximal run of consecutively discovered same-parent siblings.
#[derive(Debug, Clone, Default)]
pub struct Group {
    /// Shared parent identity; `None` only for the synthetic root's group.
    pub parent: Option<SpriteId>,
    /// Member identities in discovery order.
    pub members: SmallVec<[SpriteId; 4]>,
}

impl Group {
    fn seeded(parent: Option<SpriteId>, first: SpriteId) -> Self {
        Self {
            parent,
            members: smallvec![first],
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One breadth-first depth level, as an ordered list of groups.
pub type Generation = Vec<Group>;

/// Split the tree into breadth-first generations of same-parent groups.
///
/// Walks the arena from the synthetic root, marking every reached child
/// visible with `generation = parent.generation + 1`. A new generation
/// opens when the dequeued node is deeper than the previous one; a new
/// group opens when its parent differs from the previous node's parent.
/// The still-open generation is flushed once the queue drains.
///
/// Nodes unreachable from the root (stubs for dangling parent references
/// and their subtrees) are never visited and stay invisible.
pub fn collect_generations(layout: &mut Layout) -> Vec<Generation> {
    let mut generations = Vec::new();
    // Seed group that the root itself lands in; it matches the root's
    // absent parent in the same-parent check below.
    let mut current: Generation = vec![Group::default()];
    let mut depth = 0u32;
    let mut prev_parent: Option<SpriteId> = None;

    let mut queue = VecDeque::new();
    queue.push_back(layout.root_id().clone());

    while let Some(id) = queue.pop_front() {
        let (node_depth, node_parent, children) = {
            let node = layout.get(&id).expect("queued nodes exist in the arena");
            (node.generation, node.parent.clone(), node.children.clone())
        };

        for child_id in &children {
            if let Some(child) = layout.get_mut(child_id) {
                child.visible = true;
                child.generation = node_depth + 1;
            }
            queue.push_back(child_id.clone());
        }

        if node_depth > depth {
            generations.push(mem::take(&mut current));
            current = vec![Group::seeded(node_parent.clone(), id)];
        } else if node_parent == prev_parent {
            current
                .last_mut()
                .expect("a generation always holds at least one group")
                .members
                .push(id);
        } else {
            current.push(Group::seeded(node_parent.clone(), id));
        }

        if queue.is_empty() {
            generations.push(mem::take(&mut current));
        }

        depth = node_depth;
        prev_parent = node_parent;
    }

    generations
}
