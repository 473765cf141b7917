//! Quadtree nodes and recursive subdivision.
//!
//! Children are created all four at once and then subdivided in NW, NE, SW, SE order,
//! so identities follow creation order: a node's four children get consecutive ids,
//! then the north-west child's subtree is built before the north-east child's.

use tracing::debug;

use crate::region::Region;

/// One of the four child slots of an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Compass label used for graph edges.
    pub const fn label(self) -> &'static str {
        match self {
            Quadrant::NorthWest => "NW",
            Quadrant::NorthEast => "NE",
            Quadrant::SouthWest => "SW",
            Quadrant::SouthEast => "SE",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Sequential node identity allocator.
///
/// Each tree-building session owns one, so separate trees never share a counter.
#[derive(Debug, Default)]
pub struct NodeIds {
    next: u32,
}

impl NodeIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next identity.
    #[inline]
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The identity the next created node will receive.
    #[inline]
    pub fn peek(&self) -> u32 {
        self.next
    }
}

/// Which branch a call to [`QuadNode::subdivide`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubdivideOutcome {
    /// Four children were created and recursively subdivided.
    Subdivided,
    /// Width or height is at or below the size floor; the node stays a leaf.
    AtSizeFloor,
    /// The node already had children; nothing changed.
    AlreadySubdivided,
}

/// A quadtree node owning its region and either zero or four children.
#[derive(Debug)]
pub struct QuadNode {
    id: u32,
    region: Region,
    children: Option<Box<[QuadNode; 4]>>,
}

impl QuadNode {
    /// Create a leaf node, taking the next identity from `ids`.
    pub fn create(region: Region, ids: &mut NodeIds) -> Self {
        Self {
            id: ids.next_id(),
            region,
            children: None,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// All four children in NW, NE, SW, SE order, or `None` for a leaf.
    #[inline]
    pub fn children(&self) -> Option<&[QuadNode; 4]> {
        self.children.as_deref()
    }

    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadNode> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Recursively split this node into quadrants until the size floor is reached.
    ///
    /// The floor check runs before the already-subdivided check.
    pub fn subdivide(&mut self, ids: &mut NodeIds, min_size: u32) -> SubdivideOutcome {
        if self.region.is_at_floor(min_size) {
            debug!(
                "Node {}: cannot subdivide further (size {}x{}), marking as leaf",
                self.id,
                self.region.width(),
                self.region.height()
            );
            return SubdivideOutcome::AtSizeFloor;
        }
        if self.children.is_some() {
            return SubdivideOutcome::AlreadySubdivided;
        }

        let region = self.region;
        let children = self.children.insert(Box::new(
            Quadrant::ALL.map(|q| QuadNode::create(region.quadrant(q), ids)),
        ));
        debug!(
            "Node {}: subdivided into {}..={}",
            self.id,
            children[0].id,
            children[3].id
        );

        for child in children.iter_mut() {
            child.subdivide(ids, min_size);
        }

        SubdivideOutcome::Subdivided
    }

    /// Pre-order depth-first iterator over this node and its descendants.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of edges below this node (0 for a single leaf).
    pub fn depth(&self) -> usize {
        match self.children() {
            None => 0,
            Some(children) => 1 + children.iter().map(QuadNode::depth).max().unwrap_or(0),
        }
    }
}

/// Pre-order iterator returned by [`QuadNode::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a QuadNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a QuadNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            // Reverse so the north-west child is popped first.
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(width: u32, height: u32) -> QuadNode {
        let mut ids = NodeIds::new();
        let mut root = QuadNode::create(Region::from_xywh(0, 0, width, height).unwrap(), &mut ids);
        root.subdivide(&mut ids, crate::SIZE_FLOOR);
        root
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut ids = NodeIds::new();
        let a = QuadNode::create(Region::default(), &mut ids);
        let b = QuadNode::create(Region::default(), &mut ids);
        assert_eq!((a.id(), b.id()), (0, 1));
        assert_eq!(ids.peek(), 2);
        assert!(a.is_leaf());
        assert!(a.children().is_none());
    }

    #[test]
    fn test_100x100_example() {
        let root = build(100, 100);

        // 100 -> 50 -> 25 -> 12, and 25 is still above the floor.
        assert_eq!(root.node_count(), 1 + 4 + 16 + 64);
        assert_eq!(root.leaf_count(), 64);
        assert_eq!(root.depth(), 3);

        let children = root.children().unwrap();
        let expected = [(0, 0), (50, 0), (0, 50), (50, 50)];
        for (child, (x, y)) in children.iter().zip(expected) {
            assert_eq!(child.region(), &Region::from_xywh(x, y, 50, 50).unwrap());
            for grandchild in child.children().unwrap() {
                assert_eq!(grandchild.region().width(), 25);
                assert!(!grandchild.is_leaf());
                for leaf in grandchild.children().unwrap() {
                    assert_eq!((leaf.region().width(), leaf.region().height()), (12, 12));
                    assert!(leaf.is_leaf());
                }
            }
        }

        let mut ids: Vec<u32> = root.iter().map(QuadNode::id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..85).collect::<Vec<_>>());
    }

    #[test]
    fn test_25x25_children_are_12x12_leaves() {
        let root = build(25 * 2, 25 * 2);
        let grandchild = root
            .child(Quadrant::SouthEast)
            .and_then(|c| c.child(Quadrant::NorthEast))
            .unwrap();
        assert_eq!(grandchild.region(), &Region::from_xywh(37, 25, 12, 12).unwrap());
        assert!(grandchild.is_leaf());
    }

    #[test]
    fn test_200x200_reaches_12x12() {
        let root = build(200, 200);
        // 200 -> 100 -> 50 -> 25 -> 12
        assert_eq!(root.depth(), 4);
        assert_eq!(root.node_count(), 1 + 4 + 16 + 64 + 256);
        assert!(root.iter().filter(|n| n.is_leaf()).all(|n| n.region().width() == 12));
    }

    #[test]
    fn test_identity_follows_creation_order() {
        let root = build(100, 100);
        let ids = |node: &QuadNode| -> Vec<u32> {
            node.children().unwrap().iter().map(QuadNode::id).collect()
        };

        assert_eq!(root.id(), 0);
        assert_eq!(ids(&root), vec![1, 2, 3, 4]);
        assert_eq!(ids(root.child(Quadrant::NorthWest).unwrap()), vec![5, 6, 7, 8]);
        assert_eq!(ids(root.child(Quadrant::NorthEast).unwrap()), vec![25, 26, 27, 28]);
        assert_eq!(ids(root.child(Quadrant::SouthWest).unwrap()), vec![45, 46, 47, 48]);
        assert_eq!(ids(root.child(Quadrant::SouthEast).unwrap()), vec![65, 66, 67, 68]);

        let nw_nw = root
            .child(Quadrant::NorthWest)
            .and_then(|c| c.child(Quadrant::NorthWest))
            .unwrap();
        assert_eq!(ids(nw_nw), vec![9, 10, 11, 12]);
    }

    #[test]
    fn test_structural_invariants() {
        let root = build(317, 141);
        for node in root.iter() {
            let region = node.region();
            assert_eq!(node.is_leaf(), region.is_at_floor(crate::SIZE_FLOOR));

            if let Some(children) = node.children() {
                assert_eq!(children.len(), 4);
                let (w, h) = (region.width() / 2, region.height() / 2);
                let offsets = [(0, 0), (w, 0), (0, h), (w, h)];
                for (child, (dx, dy)) in children.iter().zip(offsets) {
                    assert_eq!(child.region().width(), w);
                    assert_eq!(child.region().height(), h);
                    assert_eq!(child.region().x(), region.x() + dx as i32);
                    assert_eq!(child.region().y(), region.y() + dy as i32);
                    assert!(child.id() > node.id());
                }
            }
        }
    }

    #[test]
    fn test_preorder_iter_visits_north_west_first() {
        let root = build(40, 40);
        let order: Vec<u32> = root.iter().map(QuadNode::id).collect();
        assert_eq!(order[..3], [0, 1, 5]);
        assert_eq!(order.len(), 21);
    }

    #[test]
    fn test_small_root_stays_leaf() {
        let mut ids = NodeIds::new();
        let mut root = QuadNode::create(Region::from_xywh(0, 0, 10, 10).unwrap(), &mut ids);
        assert_eq!(root.subdivide(&mut ids, crate::SIZE_FLOOR), SubdivideOutcome::AtSizeFloor);
        assert!(root.is_leaf());
        assert_eq!(root.node_count(), 1);
        assert_eq!(ids.peek(), 1);
    }

    #[test]
    fn test_zero_sized_root_stays_leaf() {
        let mut ids = NodeIds::new();
        let mut root = QuadNode::create(Region::from_xywh(5, 5, 0, 400).unwrap(), &mut ids);
        assert_eq!(root.subdivide(&mut ids, crate::SIZE_FLOOR), SubdivideOutcome::AtSizeFloor);
        assert!(root.is_leaf());
    }

    #[test]
    fn test_subdivide_is_idempotent() {
        let mut ids = NodeIds::new();
        let mut root = QuadNode::create(Region::default(), &mut ids);
        assert_eq!(root.subdivide(&mut ids, crate::SIZE_FLOOR), SubdivideOutcome::Subdivided);
        let before: Vec<(u32, Region)> = root.iter().map(|n| (n.id(), *n.region())).collect();
        let next = ids.peek();

        assert_eq!(
            root.subdivide(&mut ids, crate::SIZE_FLOOR),
            SubdivideOutcome::AlreadySubdivided
        );
        let after: Vec<(u32, Region)> = root.iter().map(|n| (n.id(), *n.region())).collect();
        assert_eq!(before, after);
        assert_eq!(ids.peek(), next);
    }

    #[test]
    fn test_floor_of_zero_terminates() {
        let mut ids = NodeIds::new();
        let mut root = QuadNode::create(Region::from_xywh(0, 0, 4, 4).unwrap(), &mut ids);
        root.subdivide(&mut ids, 0);
        // 4 -> 2 -> 1 -> 0
        assert_eq!(root.depth(), 3);
        assert!(root.iter().filter(|n| n.is_leaf()).all(|n| n.region().width() == 0));
    }

    #[test]
    fn test_quadrant_labels() {
        let labels: Vec<&str> = Quadrant::ALL.iter().map(|q| q.label()).collect();
        assert_eq!(labels, ["NW", "NE", "SW", "SE"]);
    }
}
