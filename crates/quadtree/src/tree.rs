//! Tree-building session.

use tracing::info;

use crate::dot::Dot;
use crate::node::{NodeIds, QuadNode, SubdivideOutcome};
use crate::outline::Outline;
use crate::region::Region;
use crate::SIZE_FLOOR;

/// Summary counts for a built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub internal: usize,
    pub edges: usize,
    pub depth: usize,
}

/// A quadtree together with the identity counter that numbers its nodes.
///
/// Every `QuadTree` starts numbering at 0, so any number of trees can be built
/// side by side without sharing state.
#[derive(Debug)]
pub struct QuadTree {
    root: QuadNode,
    ids: NodeIds,
    min_size: u32,
}

impl QuadTree {
    /// Create an unsubdivided tree using the default size floor.
    pub fn new(region: Region) -> Self {
        Self::with_min_size(region, SIZE_FLOOR)
    }

    /// Create an unsubdivided tree with a custom size floor.
    pub fn with_min_size(region: Region, min_size: u32) -> Self {
        let mut ids = NodeIds::new();
        let root = QuadNode::create(region, &mut ids);
        Self { root, ids, min_size }
    }

    /// Subdivide the root down to the size floor.
    pub fn subdivide(&mut self) -> SubdivideOutcome {
        let outcome = self.root.subdivide(&mut self.ids, self.min_size);
        if outcome == SubdivideOutcome::Subdivided {
            let stats = self.stats();
            info!(
                "Built quadtree: {} nodes, {} leaves, depth {}",
                stats.nodes, stats.leaves, stats.depth
            );
        }
        outcome
    }

    #[inline]
    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    #[inline]
    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Number of nodes created so far.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.ids.peek() as usize
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn stats(&self) -> TreeStats {
        let nodes = self.node_count();
        let leaves = self.leaf_count();
        TreeStats {
            nodes,
            leaves,
            internal: nodes - leaves,
            edges: nodes - 1,
            depth: self.depth(),
        }
    }

    pub fn outline(&self) -> Outline<'_> {
        self.root.outline()
    }

    pub fn dot(&self) -> Dot<'_> {
        self.root.dot()
    }

    pub fn to_dot(&self) -> String {
        self.root.to_dot()
    }
}
