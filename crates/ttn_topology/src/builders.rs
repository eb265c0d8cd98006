//! Standard topology builders: linear chain, all-to-all, and an
//! IBMQ-style heavy-hex layout.

use crate::graph::Topology;

/// A linear chain of `size` sites, optionally closed into a ring.
pub fn make_chain(size: usize, periodic: bool) -> Topology {
    let mut t = Topology::new(size);
    for i in 0..size.saturating_sub(1) {
        t.add_link(i, i + 1).expect("fresh chain link");
    }
    if periodic && size > 2 {
        t.add_link(size - 1, 0).expect("fresh periodic link");
    }
    t
}

/// A fully connected graph of `size` sites.
pub fn make_all_to_all(size: usize) -> Topology {
    let mut t = Topology::new(size);
    for a in 0..size {
        for b in (a + 1)..size {
            t.add_link(a, b).expect("fresh all-to-all link");
        }
    }
    t
}

/// An IBMQ-style heavy-hex layout: alternating main rows of `cols`
/// qubits joined by single-bond bridge qubits between rows, in the
/// same row/bridge pattern IBM's heavy-hex hardware uses. `rows=3,
/// cols=13` yields exactly 53 qubits, matching an IBM Falcon-class
/// device; any caller wanting a different size can adjust `rows`/`cols`.
pub fn make_ibmq_topology() -> Topology {
    make_heavy_hex(3, 13)
}

fn make_heavy_hex(rows: usize, cols: usize) -> Topology {
    let bridges_per_gap = cols.div_ceil(2);
    let main_qubits = rows * cols;
    let bridge_rows = rows.saturating_sub(1);
    let bridge_qubits = bridge_rows * bridges_per_gap;
    let num_qubits = main_qubits + bridge_qubits;

    let mut t = Topology::new(num_qubits);

    for row in 0..rows {
        let main_row_offset: usize = (0..row)
            .map(|r| cols + if r < rows - 1 { bridges_per_gap } else { 0 })
            .sum();

        for c in 0..cols.saturating_sub(1) {
            let q1 = main_row_offset + c;
            let q2 = main_row_offset + c + 1;
            t.add_link(q1, q2).expect("fresh heavy-hex main-row link");
        }

        if row < rows - 1 {
            let bridge_row_offset = main_row_offset + cols;
            for b in 0..bridges_per_gap {
                let bridge_col = b * 2;
                if bridge_col < cols {
                    let bridge_idx = bridge_row_offset + b;
                    let top_qubit = main_row_offset + bridge_col;
                    let next_main_offset = main_row_offset + cols + bridges_per_gap;
                    let bottom_qubit = next_main_offset + bridge_col;

                    t.add_link(top_qubit, bridge_idx)
                        .expect("fresh heavy-hex bridge link");
                    t.add_link(bridge_idx, bottom_qubit)
                        .expect("fresh heavy-hex bridge link");
                }
            }
        }
    }

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_connected() {
        let t = make_chain(8, false);
        assert_eq!(t.num_bits(), 8);
        assert_eq!(t.num_links(), 7);
        assert!(t.is_connected());
    }

    #[test]
    fn test_chain_periodic_adds_wrap_link() {
        let t = make_chain(8, true);
        assert_eq!(t.num_links(), 8);
        assert!(t.has_link(7, 0));
    }

    #[test]
    fn test_all_to_all() {
        let t = make_all_to_all(5);
        assert_eq!(t.num_links(), 10);
        assert!(t.is_connected());
        for a in 0..5 {
            for b in 0..5 {
                if a != b {
                    assert!(t.has_link(a, b));
                }
            }
        }
    }

    #[test]
    fn test_ibmq_topology_has_53_qubits_and_is_connected() {
        let t = make_ibmq_topology();
        assert_eq!(t.num_bits(), 53);
        assert!(t.is_connected());
    }

    #[test]
    fn test_heavy_hex_small_matches_expected_count() {
        // 2 rows * 3 cols = 6 main + 1 gap * 2 bridges = 8 total.
        let t = make_heavy_hex(2, 3);
        assert_eq!(t.num_bits(), 8);
        assert!(t.has_link(0, 1));
        assert!(t.has_link(1, 2));
    }
}
