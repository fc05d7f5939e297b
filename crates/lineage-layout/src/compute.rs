//! Layout computation from sprite descriptors.

use std::collections::HashSet;

use lineage_core::{LayoutError, Measures, SpriteDescriptor, SpriteId, Viewport};

use crate::frontier::place_generation;
use crate::generations::collect_generations;
use crate::tree::Layout;

/// Compute a fresh layout for a sprite collection.
///
/// `None` descriptors means the collection has not been fetched yet and
/// yields `Ok(None)`, the "nothing to draw" sentinel. An empty list is a
/// valid collection and produces a layout holding only the synthetic
/// root. The returned layout is a self-contained value; recomputing
/// replaces it wholesale.
pub fn compute_layout(
    viewport: &Viewport,
    measures: &Measures,
    descriptors: Option<&[SpriteDescriptor]>,
) -> Result<Option<Layout>, LayoutError> {
    let Some(descriptors) = descriptors else {
        return Ok(None);
    };

    let mut layout = Layout::with_root(viewport, measures);
    for descriptor in descriptors {
        layout.insert_descriptor(descriptor);
    }

    if log::log_enabled!(log::Level::Debug) {
        let described: HashSet<&SpriteId> = descriptors.iter().map(|d| &d.id).collect();
        for id in layout.ids() {
            if !id.is_root() && !described.contains(id) {
                log::debug!("sprite {id} only ever referenced as a parent, keeping a stub node");
            }
        }
    }

    let generations = collect_generations(&mut layout);
    for (index, generation) in generations.iter().enumerate() {
        place_generation(&mut layout, measures, generation, index)?;
    }

    Ok(Some(layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_absent_collection_yields_no_layout() {
        let layout = compute_layout(&viewport(), &Measures::default(), None).unwrap();
        assert!(layout.is_none());
    }

    #[test]
    fn test_empty_collection_yields_root_only_layout() {
        let layout = compute_layout(&viewport(), &Measures::default(), Some(&[]))
            .unwrap()
            .unwrap();
        assert_eq!(layout.len(), 1);
        assert!(!layout.root().visible);
    }

    #[test]
    fn test_two_child_example() {
        let sprites = vec![
            SpriteDescriptor::new("a", "a"),
            SpriteDescriptor::new("b", "b").with_parent("a"),
            SpriteDescriptor::new("c", "c").with_parent("a"),
        ];
        let layout = compute_layout(&viewport(), &Measures::default(), Some(&sprites))
            .unwrap()
            .unwrap();

        assert_eq!(layout.len(), 4);
        let a = layout.get(&SpriteId::from("a")).unwrap();
        let b = layout.get(&SpriteId::from("b")).unwrap();
        let c = layout.get(&SpriteId::from("c")).unwrap();

        assert_eq!(layout.root().generation, 0);
        assert_eq!(a.generation, 1);
        assert_eq!(b.generation, 2);
        assert_eq!(c.generation, 2);

        // One on each side of the parent, never overlapping.
        assert!(b.x < a.x && a.x < c.x);
        assert!(b.x_offset + 100.0 <= c.x_offset);
        assert!((b.y - c.y).abs() < 0.001);
    }

    #[test]
    fn test_generation_monotonicity() {
        let sprites = vec![
            SpriteDescriptor::new("a", "a"),
            SpriteDescriptor::new("b", "b").with_parent("a"),
            SpriteDescriptor::new("c", "c").with_parent("b"),
            SpriteDescriptor::new("d", "d").with_parent("b"),
            SpriteDescriptor::new("e", "e"),
        ];
        let layout = compute_layout(&viewport(), &Measures::default(), Some(&sprites))
            .unwrap()
            .unwrap();

        for node in layout.nodes().filter(|n| n.visible) {
            let parent = node
                .parent
                .as_ref()
                .and_then(|p| layout.get(p))
                .expect("visible nodes hang off a placed parent");
            assert_eq!(node.generation, parent.generation + 1);
        }
    }

    #[test]
    fn test_dangling_parent_keeps_stub_in_map() {
        let sprites = vec![
            SpriteDescriptor::new("a", "a"),
            SpriteDescriptor::new("lost", "lost").with_parent("ghost"),
        ];
        let layout = compute_layout(&viewport(), &Measures::default(), Some(&sprites))
            .unwrap()
            .unwrap();

        let ghost = layout.get(&SpriteId::from("ghost")).unwrap();
        assert!(ghost.name.is_empty());
        assert!(!ghost.visible);
        assert!(!layout.get(&SpriteId::from("lost")).unwrap().visible);
    }

    #[test]
    fn test_no_overlap_across_varied_fanouts() {
        // Deterministic pseudo-random fanouts over four generations.
        let mut sprites = Vec::new();
        let mut parents = vec![None::<String>];
        let mut seed = 0x2545_f491u32;
        let mut serial = 0;
        for _ in 0..4 {
            let mut next_parents = Vec::new();
            for parent in &parents {
                seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                let fanout = 1 + (seed >> 28) % 3;
                for _ in 0..fanout {
                    let id = format!("s{serial}");
                    serial += 1;
                    let mut d = SpriteDescriptor::new(id.clone(), id.clone());
                    if let Some(p) = parent {
                        d = d.with_parent(p.clone());
                    }
                    sprites.push(d);
                    next_parents.push(Some(id));
                }
            }
            if next_parents.is_empty() {
                break;
            }
            parents = next_parents;
        }

        let measures = Measures::default();
        let layout = compute_layout(&viewport(), &measures, Some(&sprites))
            .unwrap()
            .unwrap();

        let max_generation = layout.nodes().map(|n| n.generation).max().unwrap_or(0);
        for level in 1..=max_generation {
            let row: Vec<_> = layout
                .nodes()
                .filter(|n| n.visible && n.generation == level)
                .collect();
            for (i, one) in row.iter().enumerate() {
                for other in &row[i + 1..] {
                    assert!((one.y - other.y).abs() < 0.001);
                    let disjoint = one.x_offset + measures.node_width <= other.x_offset + 0.001
                        || other.x_offset + measures.node_width <= one.x_offset + 0.001;
                    assert!(disjoint, "{} and {} overlap at level {level}", one.id, other.id);
                }
            }
        }
    }
}
