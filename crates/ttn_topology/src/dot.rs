//! Graphviz DOT export for a [`crate::Topology`].

use crate::graph::Topology;

/// Rendering options for [`to_dot`].
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graphviz `layout` engine, e.g. `neato`, `dot`, `circo`.
    pub layout: String,
    /// Node shape, e.g. `circle`, `box`.
    pub shape: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            layout: "neato".to_string(),
            shape: "circle".to_string(),
        }
    }
}

/// Renders a topology as Graphviz DOT text, emitting each undirected
/// edge exactly once (in the `u -- v` orientation with `u > v`).
pub fn to_dot(topology: &Topology, options: &DotOptions) -> String {
    let mut out = String::new();
    out.push_str("graph {\n");
    out.push_str(&format!("    graph[layout={}]\n", options.layout));
    out.push_str(&format!("    node[shape={}]\n\n", options.shape));

    for u in 0..topology.num_bits() {
        for n in topology.neighbors_of(u) {
            if u > n.site {
                out.push_str(&format!("    {} -- {};\n", u, n.site));
            }
        }
    }

    out.push_str("}\n");
    out
}
