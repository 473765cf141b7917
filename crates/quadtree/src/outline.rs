//! Indented text dump of a quadtree.

use std::fmt;
use std::io;

use crate::node::QuadNode;

const INDENT_WIDTH: usize = 4;

/// Display view writing one line per node, four spaces of indent per level.
///
/// ```text
/// Node ID: 0, Pos: (0, 0), Size: 40x40 (Internal Node)
///     Node ID: 1, Pos: (0, 0), Size: 20x20 (Internal Node)
/// ```
pub struct Outline<'a> {
    root: &'a QuadNode,
}

impl<'a> Outline<'a> {
    pub fn new(root: &'a QuadNode) -> Self {
        Self { root }
    }
}

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.root, 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &QuadNode, depth: usize) -> fmt::Result {
    let region = node.region();
    let tag = if node.is_leaf() { "Leaf" } else { "Internal Node" };
    writeln!(
        f,
        "{:indent$}Node ID: {}, Pos: {}, Size: {}x{} ({})",
        "",
        node.id(),
        region,
        region.width(),
        region.height(),
        tag,
        indent = depth * INDENT_WIDTH
    )?;

    if let Some(children) = node.children() {
        for child in children {
            write_node(f, child, depth + 1)?;
        }
    }
    Ok(())
}

impl QuadNode {
    /// Text view of this subtree.
    pub fn outline(&self) -> Outline<'_> {
        Outline::new(self)
    }

    /// Write the outline of this subtree to `out`.
    pub fn describe<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self.outline())
    }
}
