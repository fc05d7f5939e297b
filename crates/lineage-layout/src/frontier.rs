//! Frontier placement: positioning one generation's groups in a row.
//!
//! Groups expand outward from the generation's median group, which is
//! anchored under its parent. Walking left the running `right_limit` only
//! ever shrinks, walking right the running `left_limit` only ever grows,
//! so neighboring groups cannot overlap:
//!
//! ```text
//!             right                      left
//!             limit                      limit
//!               |  |----|  |----|----|   |  |----|----|
//!               |  |____|  |____|____|   |  |____|____|
//!        ... ---|            \_____________/      \________ ...
//!                                median
//! ```

use lineage_core::{LayoutError, Measures, SpriteId};

use crate::generations::{Generation, Group};
use crate::tree::Layout;

/// Total horizontal extent reserved for a laid-out group.
///
/// Sized with the vertical-axis constants: the reserved span overshoots
/// the painted row, keeping cousin groups apart.
pub(crate) fn group_width(group: &Group, measures: &Measures) -> f64 {
    let count = group.len() as f64;
    measures.node_height * count + measures.delta_height * 2.0 * (count - 1.0)
}

/// Center point of a group's parent node.
fn parent_center(
    layout: &Layout,
    group: &Group,
    generation: usize,
) -> Result<(f64, f64), LayoutError> {
    let parent_id: &SpriteId = group
        .parent
        .as_ref()
        .ok_or(LayoutError::DetachedGroup { generation })?;
    let parent = layout
        .get(parent_id)
        .ok_or_else(|| LayoutError::MissingGroupParent {
            parent: parent_id.clone(),
            generation,
        })?;
    Ok((parent.x, parent.y))
}

/// Assign center points and offsets to every node of one generation.
///
/// Generation 0 holds only the invisible synthetic root and is left
/// untouched. All other generations share a single row one level above
/// the median group's parent.
pub(crate) fn place_generation(
    layout: &mut Layout,
    measures: &Measures,
    generation: &Generation,
    index: usize,
) -> Result<(), LayoutError> {
    if index == 0 {
        return Ok(());
    }
    let m = measures;
    let step = m.node_width + m.delta_width * 2.0;

    let mid_index = generation.len() / 2;
    let mid_group = &generation[mid_index];
    let (mid_parent_x, mid_parent_y) = parent_center(layout, mid_group, index)?;
    let mid_x = mid_parent_x - group_width(mid_group, m) / 2.0;
    let row_y = mid_parent_y - m.level_height;

    // Left of the median, walked inside-out.
    let mut right_limit = mid_x - m.delta_width;
    for group in generation[..mid_index].iter().rev() {
        let (parent_x, _) = parent_center(layout, group, index)?;
        let width = group_width(group, m);
        right_limit = right_limit.min(parent_x + width / 2.0);

        for (i, id) in group.members.iter().enumerate() {
            let x = right_limit - width + m.node_width / 2.0 + step * i as f64;
            if let Some(node) = layout.get_mut(id) {
                node.set_center(x, row_y, m);
            }
        }
        right_limit -= width + 2.0 * m.delta_width;
    }

    // Median and everything right of it.
    let mut left_limit = mid_x + m.delta_width;
    for group in &generation[mid_index..] {
        let (parent_x, _) = parent_center(layout, group, index)?;
        let width = group_width(group, m);
        left_limit = left_limit.max(parent_x - width / 2.0);

        for (i, id) in group.members.iter().enumerate() {
            let x = left_limit + m.node_width / 2.0 + step * i as f64;
            if let Some(node) = layout.get_mut(id) {
                node.set_center(x, row_y, m);
            }
        }
        left_limit += width + 2.0 * m.delta_width;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generations::collect_generations;
    use lineage_core::{SpriteDescriptor, Viewport};

    fn placed(descriptors: &[SpriteDescriptor]) -> Layout {
        let mut layout = Layout::with_root(&Viewport::new(800.0, 600.0), &Measures::default());
        for d in descriptors {
            layout.insert_descriptor(d);
        }
        let generations = collect_generations(&mut layout);
        for (index, generation) in generations.iter().enumerate() {
            place_generation(&mut layout, &Measures::default(), generation, index).unwrap();
        }
        layout
    }

    fn node_x(layout: &Layout, id: &str) -> f64 {
        layout.get(&SpriteId::from(id)).unwrap().x
    }

    #[test]
    fn test_single_child_centered_on_parent() {
        let layout = placed(&[SpriteDescriptor::new("a", "a")]);
        let a = layout.get(&SpriteId::from("a")).unwrap();

        // Sole group of the generation sits on its parent's center line,
        // one level up.
        assert!((a.x - 0.0).abs() < 0.001);
        assert!((a.y - (layout.root().y - 180.0)).abs() < 0.001);
        assert!((a.x_offset - (a.x - 50.0)).abs() < 0.001);
        assert!((a.y_offset - (a.y - 75.0)).abs() < 0.001);
    }

    #[test]
    fn test_two_siblings_straddle_parent() {
        let layout = placed(&[
            SpriteDescriptor::new("a", "a"),
            SpriteDescriptor::new("b", "b").with_parent("a"),
            SpriteDescriptor::new("c", "c").with_parent("a"),
        ]);

        let a_x = node_x(&layout, "a");
        assert!(node_x(&layout, "b") < a_x);
        assert!(node_x(&layout, "c") > a_x);

        // Reserved group span is 2*150 + 2*15 = 330, so the pair starts
        // delta_width past (parent - span/2).
        assert!((node_x(&layout, "b") + 90.0).abs() < 0.001);
        assert!((node_x(&layout, "c") - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_generation_shares_one_row() {
        let layout = placed(&[
            SpriteDescriptor::new("a", "a"),
            SpriteDescriptor::new("b", "b"),
            SpriteDescriptor::new("c", "c").with_parent("a"),
            SpriteDescriptor::new("d", "d").with_parent("b"),
        ]);

        let c = layout.get(&SpriteId::from("c")).unwrap();
        let d = layout.get(&SpriteId::from("d")).unwrap();
        assert!((c.y - d.y).abs() < 0.001);
        assert!((c.y - (layout.root().y - 360.0)).abs() < 0.001);
    }

    #[test]
    fn test_cousin_groups_do_not_overlap() {
        let layout = placed(&[
            SpriteDescriptor::new("a", "a"),
            SpriteDescriptor::new("b", "b"),
            SpriteDescriptor::new("c", "c").with_parent("a"),
            SpriteDescriptor::new("d", "d").with_parent("a"),
            SpriteDescriptor::new("e", "e").with_parent("a"),
            SpriteDescriptor::new("f", "f").with_parent("b"),
            SpriteDescriptor::new("g", "g").with_parent("b"),
        ]);
        let m = Measures::default();

        for level in 1..=2u32 {
            let row: Vec<&crate::tree::LayoutNode> =
                layout.nodes().filter(|n| n.visible && n.generation == level).collect();
            for (i, one) in row.iter().enumerate() {
                for other in &row[i + 1..] {
                    let disjoint = one.x_offset + m.node_width <= other.x_offset + 0.001
                        || other.x_offset + m.node_width <= one.x_offset + 0.001;
                    assert!(
                        disjoint,
                        "{} [{}] and {} [{}] overlap",
                        one.id, one.x_offset, other.id, other.x_offset
                    );
                }
            }
        }
    }

    #[test]
    fn test_median_group_anchors_deep_generation() {
        // Three gen-2 groups; the median (second) group is anchored under
        // its own parent, the flanks are pushed outward.
        let layout = placed(&[
            SpriteDescriptor::new("a", "a"),
            SpriteDescriptor::new("b", "b"),
            SpriteDescriptor::new("c", "c"),
            SpriteDescriptor::new("d", "d").with_parent("a"),
            SpriteDescriptor::new("e", "e").with_parent("b"),
            SpriteDescriptor::new("f", "f").with_parent("c"),
        ]);

        assert!(node_x(&layout, "d") < node_x(&layout, "e"));
        assert!(node_x(&layout, "e") < node_x(&layout, "f"));
    }
}
