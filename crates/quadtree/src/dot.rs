//! Graphviz DOT export.
//!
//! Render the output with `dot -Tpng quadtree.dot -o quadtree.png`.

use std::fmt;

use crate::node::{QuadNode, Quadrant};

/// Display view producing a `digraph QuadTree` document.
///
/// Each node is declared, followed by its four outgoing edges in NW, NE, SW, SE
/// order, before any child is declared.
pub struct Dot<'a> {
    root: &'a QuadNode,
}

impl<'a> Dot<'a> {
    pub fn new(root: &'a QuadNode) -> Self {
        Self { root }
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph QuadTree {{")?;
        writeln!(f, "  node [shape=box, style=filled, fillcolor=lightblue];")?;
        write_node(f, self.root)?;
        writeln!(f, "}}")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &QuadNode) -> fmt::Result {
    let region = node.region();
    write!(
        f,
        "  node_{id} [label=\"ID: {id}\\nPos: {pos}\\nSize: {w}x{h}",
        id = node.id(),
        pos = region,
        w = region.width(),
        h = region.height()
    )?;

    let Some(children) = node.children() else {
        return writeln!(f, "\\n(Leaf)\", fillcolor=lightgreen];");
    };
    writeln!(f, "\\n(Internal Node)\"];")?;

    for (quadrant, child) in Quadrant::ALL.iter().zip(children.iter()) {
        writeln!(
            f,
            "  node_{} -> node_{} [label=\"{}\"];",
            node.id(),
            child.id(),
            quadrant.label()
        )?;
    }
    for child in children {
        write_node(f, child)?;
    }
    Ok(())
}

impl QuadNode {
    /// Graphviz view of this subtree.
    pub fn dot(&self) -> Dot<'_> {
        Dot::new(self)
    }

    /// Render this subtree as a DOT document.
    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }
}
