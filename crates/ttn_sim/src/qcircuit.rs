//! The tree tensor-network wavefunction: site tensors, per-link
//! singular-value tensors, and a movable two-site orthogonality center.

use std::collections::{HashMap, HashSet, VecDeque};

use num_complex::Complex64;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use ttn_core::{Gate, OneSiteKind, Result, TtnError, TwoSiteKind};
use ttn_tensor::{materialize, materialize_one_site, materialize_two_site, Index, Tensor};
use ttn_topology::Topology;

/// Which cursor endpoint is kept ("head") when shifting onto a new site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Detect automatically from which endpoint `dest` neighbors.
    Auto,
    /// Keep the cursor's first endpoint; the second is replaced by `dest`.
    FirstAsHead,
    /// Keep the cursor's second endpoint; the first is replaced by `dest`.
    SecondAsHead,
}

/// A tree/graph tensor-network quantum circuit simulator.
#[derive(Clone)]
pub struct QCircuit {
    topology: Topology,
    s: Vec<Index>,
    m: Vec<Tensor>,
    sv: Vec<Tensor>,
    /// `(site, link) -> the Index attached to M[site] for that link.`
    link_endpoint_index: HashMap<(usize, usize), Index>,
    psi: Tensor,
    cursor: (usize, usize),
    rng: StdRng,
    cutoff: f64,
    max_dim: usize,
}

impl QCircuit {
    /// Builds a new circuit over `topology`, with each qubit initialized
    /// to `amplitudes[i] = (alpha, beta)` (defaults to `|0>` if shorter
    /// than `topology.num_bits()`), minting fresh physical site indices.
    pub fn new(topology: Topology, amplitudes: &[(Complex64, Complex64)]) -> Result<Self> {
        let n = topology.num_bits();
        let site_indices: Vec<Index> = (0..n).map(|_| Index::new(2, "site")).collect();
        Self::with_site_indices(topology, amplitudes, site_indices)
    }

    /// Like [`QCircuit::new`], but using caller-supplied physical site
    /// indices. Two circuits built with the *same* `site_indices` can
    /// later be compared via [`overlap`] without any extra bookkeeping.
    pub fn with_site_indices(
        topology: Topology,
        amplitudes: &[(Complex64, Complex64)],
        site_indices: Vec<Index>,
    ) -> Result<Self> {
        let n = topology.num_bits();
        if n < 2 {
            return Err(TtnError::simulator(
                "a tensor-network circuit needs at least two sites",
            ));
        }
        if !topology.is_connected() {
            return Err(TtnError::Disconnected);
        }
        if site_indices.len() != n {
            return Err(TtnError::simulator(
                "site_indices length must equal topology.num_bits()",
            ));
        }

        let mut link_endpoint_index: HashMap<(usize, usize), Index> = HashMap::new();
        let mut sv: Vec<Option<Tensor>> = vec![None; topology.num_links()];
        let mut seen_links: HashSet<usize> = HashSet::new();

        for site in 0..n {
            for nb in topology.neighbors_of(site) {
                if seen_links.insert(nb.link) {
                    let idx_here = Index::new(1, "link");
                    let idx_there = idx_here.prime();
                    link_endpoint_index.insert((site, nb.link), idx_here);
                    link_endpoint_index.insert((nb.site, nb.link), idx_there);
                    sv[nb.link] = Some(Tensor::diagonal(idx_here, idx_there, &[Complex64::new(1.0, 0.0)]));
                }
            }
        }
        let sv: Vec<Tensor> = sv.into_iter().map(|t| t.expect("every link visited")).collect();

        let mut m = Vec::with_capacity(n);
        for site in 0..n {
            let mut indices = vec![site_indices[site]];
            for nb in topology.neighbors_of(site) {
                indices.push(link_endpoint_index[&(site, nb.link)]);
            }
            let mut tensor = Tensor::zeros(indices);
            let (alpha, beta) = amplitudes
                .get(site)
                .copied()
                .unwrap_or((Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)));
            let link_coords: Vec<(Index, usize)> =
                tensor.indices().iter().skip(1).map(|&idx| (idx, 0)).collect();

            let mut coords0 = vec![(site_indices[site], 0usize)];
            coords0.extend(link_coords.iter().cloned());
            tensor.set(&coords0, alpha);

            let mut coords1 = vec![(site_indices[site], 1usize)];
            coords1.extend(link_coords.iter().cloned());
            tensor.set(&coords1, beta);

            m.push(tensor);
        }

        let c2 = topology
            .neighbors_of(0)
            .iter()
            .map(|n| n.site)
            .min()
            .expect("n >= 2 and connected implies site 0 has a neighbor");

        let mut circuit = Self {
            topology,
            s: site_indices,
            m,
            sv,
            link_endpoint_index,
            psi: Tensor::scalar(Complex64::new(1.0, 0.0)),
            cursor: (0, c2),
            rng: StdRng::from_entropy(),
            cutoff: 0.0,
            max_dim: 0,
        };
        circuit.assemble_psi()?;
        Ok(circuit)
    }

    /// Reseeds the RNG deterministically, for reproducible measurement sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the SVD cutoff (relative singular-value threshold).
    pub fn with_cutoff(&mut self, cutoff: f64) -> &mut Self {
        self.cutoff = cutoff;
        self
    }

    /// Sets the maximum bond dimension (`0` = unbounded).
    pub fn with_max_dim(&mut self, max_dim: usize) -> &mut Self {
        self.max_dim = max_dim;
        self
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.s.len()
    }

    /// The physical site index for a qubit (for building replica circuits).
    pub fn site_index(&self, site: usize) -> Index {
        self.s[site]
    }

    /// This circuit's underlying topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The current orthogonality-center edge.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    fn peripheral_links(&self, site: usize, exclude_link: usize) -> Vec<(usize, usize)> {
        self.topology
            .neighbors_of(site)
            .iter()
            .filter(|n| n.link != exclude_link)
            .map(|n| (n.link, n.site))
            .collect()
    }

    /// Recomputes `Psi` from `M`/`SV` at the current cursor (the
    /// "center assembly" rule: absorb every peripheral singular-value
    /// tensor incident to either cursor endpoint).
    fn assemble_psi(&mut self) -> Result<()> {
        let (c1, c2) = self.cursor;
        let l_star = self.topology.link_id(c1, c2)?;

        let mut psi = self.m[c1].contract(&self.sv[l_star])?;
        psi = psi.contract(&self.m[c2])?;

        for &site in &[c1, c2] {
            for (link, _far) in self.peripheral_links(site, l_star) {
                psi = psi.contract(&self.sv[link])?;
            }
        }
        self.psi = psi;
        Ok(())
    }

    /// Splits `Psi` back across the cursor edge via truncated SVD,
    /// writing the result into `M[c1]`, `M[c2]`, `SV[l*]`, peeling
    /// every peripheral singular-value factor back off so non-center
    /// sites remain in canonical (isometric) form.
    fn decompose_psi(&mut self) -> Result<()> {
        let (c1, c2) = self.cursor;
        let l_star = self.topology.link_id(c1, c2)?;

        let c1_peripheral = self.peripheral_links(c1, l_star);
        let c2_peripheral = self.peripheral_links(c2, l_star);

        let mut row_indices = vec![self.s[c1]];
        for (link, far_site) in &c1_peripheral {
            row_indices.push(self.link_endpoint_index[&(*far_site, *link)]);
        }

        let (mut u, mut s, mut v, spectrum) =
            self.psi.svd(&row_indices, self.cutoff, self.max_dim)?;
        s.normalize();
        trace!(cursor = ?self.cursor, kept = spectrum.len(), "decompose_psi: svd truncation");

        for (link, far_site) in &c1_peripheral {
            let index_shared = self.link_endpoint_index[&(*far_site, *link)];
            let index_outer = self.link_endpoint_index[&(c1, *link)];
            let inv = inverse_diagonal(&self.sv[*link], index_shared, index_outer);
            u = u.prime_indices(&[index_shared]).contract(&inv)?;
        }
        for (link, far_site) in &c2_peripheral {
            let index_shared = self.link_endpoint_index[&(*far_site, *link)];
            let index_outer = self.link_endpoint_index[&(c2, *link)];
            let inv = inverse_diagonal(&self.sv[*link], index_shared, index_outer);
            v = v.prime_indices(&[index_shared]).contract(&inv)?;
        }

        let new_bond_u = s.indices()[0];
        let new_bond_v = s.indices()[1];

        self.link_endpoint_index.insert((c1, l_star), new_bond_u);
        self.link_endpoint_index.insert((c2, l_star), new_bond_v);

        self.m[c1] = u;
        self.m[c2] = v;
        self.sv[l_star] = s;
        Ok(())
    }

    /// Shifts the cursor by one hop onto `dest`.
    pub fn shift_cursor_to(&mut self, dest: usize, direction: ShiftDirection) -> Result<()> {
        let (c1, c2) = self.cursor;
        let resolved = match direction {
            ShiftDirection::Auto => {
                if self.topology.has_link(dest, c1) {
                    ShiftDirection::FirstAsHead
                } else if self.topology.has_link(dest, c2) {
                    ShiftDirection::SecondAsHead
                } else {
                    return Err(TtnError::simulator(format!(
                        "{dest} is not adjacent to either cursor endpoint ({c1}, {c2})"
                    )));
                }
            }
            other => other,
        };

        self.decompose_psi()?;
        self.cursor = match resolved {
            ShiftDirection::FirstAsHead => (dest, c1),
            ShiftDirection::SecondAsHead => (c2, dest),
            ShiftDirection::Auto => unreachable!("resolved above"),
        };
        self.assemble_psi()?;
        debug!(cursor = ?self.cursor, "shifted orthogonality center");
        Ok(())
    }

    /// Moves the cursor onto the edge `(d1, d2)`, walking whatever path
    /// the topology's BFS router returns.
    pub fn move_cursor_to(&mut self, d1: usize, d2: usize) -> Result<()> {
        if !self.topology.has_link(d1, d2) {
            return Err(TtnError::NoSuchLink(d1, d2));
        }
        let (c1, c2) = self.cursor;
        if (c1 == d1 && c2 == d2) || (c1 == d2 && c2 == d1) {
            return Ok(());
        }
        let path = self.topology.route((c1, c2), (d1, d2))?;
        for site in path {
            self.shift_cursor_to(site, ShiftDirection::Auto)?;
        }
        Ok(())
    }

    /// Applies a single gate (one-site or two-site).
    pub fn apply(&mut self, gate: Gate) -> Result<()> {
        match gate {
            Gate::OneSite(kind, site) => self.apply_one_site(kind, site),
            Gate::TwoSite(kind, a, b) => self.apply_two_site(kind, a, b),
        }
    }

    /// Applies two independent one-site gates simultaneously (a single
    /// cursor move covering both sites, instead of two separate moves).
    pub fn apply_simultaneous(
        &mut self,
        g1: OneSiteKind,
        site1: usize,
        g2: OneSiteKind,
        site2: usize,
    ) -> Result<()> {
        if site1 == site2 {
            return Err(TtnError::simulator(
                "apply_simultaneous requires two distinct sites",
            ));
        }
        self.move_cursor_to(site1, site2)?;
        let op1 = materialize_one_site(&g1, self.s[site1]);
        let op2 = materialize_one_site(&g2, self.s[site2]);
        let op = op1.outer(&op2);
        self.contract_op_into_psi(&op, site1, site2)
    }

    fn apply_two_site(&mut self, kind: TwoSiteKind, site1: usize, site2: usize) -> Result<()> {
        self.move_cursor_to(site1, site2)?;
        let op = materialize_two_site(&kind, self.s[site1], self.s[site2]);
        self.contract_op_into_psi(&op, site1, site2)
    }

    fn apply_one_site(&mut self, kind: OneSiteKind, site: usize) -> Result<()> {
        let neighbor = self
            .topology
            .neighbors_of(site)
            .first()
            .map(|n| n.site)
            .ok_or_else(|| {
                TtnError::simulator(format!("site {site} has no neighbor to pair a lone gate with"))
            })?;
        self.apply_simultaneous(kind, site, OneSiteKind::Id, neighbor)
    }

    fn contract_op_into_psi(&mut self, op: &Tensor, site1: usize, site2: usize) -> Result<()> {
        let primed = self.psi.prime_indices(&[self.s[site1], self.s[site2]]);
        self.psi = op.contract(&primed)?;
        Ok(())
    }

    /// `P(site = x)`, computed as `<psi| Proj_x(site) |psi>`.
    pub fn probability_of(&self, site: usize, x: u8) -> Result<f64> {
        let proj = match x {
            0 => OneSiteKind::Proj0,
            1 => OneSiteKind::Proj1,
            _ => return Err(TtnError::simulator("x must be 0 or 1")),
        };
        let ops: Vec<Gate> = (0..self.s.len())
            .map(|i| {
                if i == site {
                    Gate::OneSite(proj, i)
                } else {
                    Gate::OneSite(OneSiteKind::Id, i)
                }
            })
            .collect();
        let value = overlap(self, &ops, self)?;
        Ok(value.re)
    }

    /// `P(site = 0)`.
    pub fn probability_of_zero(&self, site: usize) -> Result<f64> {
        self.probability_of(site, 0)
    }

    /// Samples a measurement outcome for `site`, collapsing and renormalizing the state.
    pub fn observe_qubit(&mut self, site: usize) -> Result<u8> {
        let p0 = self.probability_of_zero(site)?;
        let sample: f64 = self.rng.gen();
        let outcome = if sample < p0 { 0 } else { 1 };
        let proj = if outcome == 0 {
            OneSiteKind::Proj0
        } else {
            OneSiteKind::Proj1
        };
        self.apply_one_site(proj, site)?;
        self.psi.normalize();
        Ok(outcome)
    }

    /// Deterministically collapses `site` to `|0>`, regardless of its current state.
    pub fn reset_qubit(&mut self, site: usize) -> Result<()> {
        let p0 = self.probability_of_zero(site)?;
        let took_one_branch = p0 <= 0.0;
        let proj = if took_one_branch {
            OneSiteKind::Proj1
        } else {
            OneSiteKind::Proj0
        };
        self.apply_one_site(proj, site)?;
        self.psi.normalize();
        if took_one_branch {
            self.apply_one_site(OneSiteKind::X, site)?;
        }
        Ok(())
    }
}

/// Builds `diag(1/sigma_i)` across `(shared.prime(), outer)`, dropping
/// singular values below `1e-16` (they are stored in descending order).
fn inverse_diagonal(sv: &Tensor, shared: Index, outer: Index) -> Tensor {
    const THRESHOLD: f64 = 1e-16;
    let dim = shared.dim().min(outer.dim());
    let mut values = Vec::with_capacity(dim);
    for k in 0..dim {
        let sigma = sv.get(&[(shared, k), (outer, k)]);
        if sigma.norm() < THRESHOLD {
            break;
        }
        values.push(Complex64::new(1.0, 0.0) / sigma);
    }
    Tensor::diagonal(shared.prime(), outer, &values)
}

/// Computes `<c1| op[0] (x) op[1] (x) ... |c2>` for independent
/// circuit copies sharing the same physical site indices.
///
/// Both circuits are canonicalized (decomposed) and `c2` is fully
/// primed internally; neither input is mutated.
pub fn overlap(c1: &QCircuit, ops: &[Gate], c2: &QCircuit) -> Result<Complex64> {
    let mut a = c1.clone();
    a.decompose_psi()?;
    let mut b = c2.clone();
    b.decompose_psi()?;
    for m in b.m.iter_mut() {
        *m = m.prime_all();
    }
    for sv in b.sv.iter_mut() {
        *sv = sv.prime_all();
    }

    let n = a.s.len();
    let site_tensor = |site: usize| -> Result<Tensor> {
        let op = materialize(&ops[site], &a.s);
        a.m[site].dag().contract(&op)?.contract(&b.m[site])
    };

    let mut visited = vec![false; n];
    let mut processed_links: HashSet<usize> = HashSet::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[0] = true;
    queue.push_back(0);
    let mut ret = site_tensor(0)?;

    while let Some(p) = queue.pop_front() {
        let neighbors: Vec<(usize, usize)> = a
            .topology
            .neighbors_of(p)
            .iter()
            .map(|nb| (nb.site, nb.link))
            .collect();
        for (q, link) in neighbors {
            if visited[q] {
                continue;
            }
            visited[q] = true;
            processed_links.insert(link);
            let tq = site_tensor(q)?;
            ret = ret.contract(&a.sv[link].dag())?;
            ret = ret.contract(&b.sv[link])?;
            ret = ret.contract(&tq)?;
            queue.push_back(q);
        }
    }

    for link in 0..a.topology.num_links() {
        if !processed_links.contains(&link) {
            ret = ret.contract(&a.sv[link].dag())?;
            ret = ret.contract(&b.sv[link])?;
        }
    }

    ret.as_scalar()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttn_topology::{make_chain, make_ibmq_topology};

    fn zero_amplitudes(n: usize) -> Vec<(Complex64, Complex64)> {
        vec![(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)); n]
    }

    #[test]
    fn test_new_circuit_is_normalized_and_self_overlap_one() {
        let t = make_chain(4, false);
        let qc = QCircuit::new(t, &zero_amplitudes(4)).unwrap();
        let self_ov = qc.probability_of_zero(0).unwrap();
        assert!((self_ov - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_hadamard_gives_half_half() {
        let t = make_chain(4, false);
        let mut qc = QCircuit::new(t, &zero_amplitudes(4)).unwrap();
        qc.apply(Gate::h(0)).unwrap();
        let p0 = qc.probability_of_zero(0).unwrap();
        assert!((p0 - 0.5).abs() < 1e-6, "p0 = {p0}");
    }

    #[test]
    fn test_x_squared_is_identity() {
        let t = make_chain(3, false);
        let mut qc = QCircuit::new(t, &zero_amplitudes(3)).unwrap();
        qc.apply(Gate::x(1)).unwrap();
        qc.apply(Gate::x(1)).unwrap();
        let p0 = qc.probability_of_zero(1).unwrap();
        assert!((p0 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bell_pair_probabilities() {
        let t = make_chain(2, false);
        let mut qc = QCircuit::new(t, &zero_amplitudes(2)).unwrap();
        qc.apply(Gate::h(0)).unwrap();
        qc.apply(Gate::cnot(0, 1)).unwrap();
        let p0_site0 = qc.probability_of_zero(0).unwrap();
        let p0_site1 = qc.probability_of_zero(1).unwrap();
        assert!((p0_site0 - 0.5).abs() < 1e-6);
        assert!((p0_site1 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_swap_moves_state() {
        let t = make_chain(3, false);
        let mut qc = QCircuit::new(t, &zero_amplitudes(3)).unwrap();
        qc.apply(Gate::x(0)).unwrap();
        qc.apply(Gate::swap(0, 1)).unwrap();
        let p1_at_1 = qc.probability_of(1, 1).unwrap();
        assert!((p1_at_1 - 1.0).abs() < 1e-6);
        let p0_at_0 = qc.probability_of_zero(0).unwrap();
        assert!((p0_at_0 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_disconnected_topology_rejected() {
        let mut t = Topology::new(5);
        t.add_link(0, 1).unwrap();
        t.add_link(3, 4).unwrap();
        let result = QCircuit::new(t, &zero_amplitudes(5));
        assert!(matches!(result, Err(TtnError::Disconnected)));
    }

    #[test]
    fn test_observe_qubit_collapses_state() {
        let t = make_chain(2, false);
        let mut qc = QCircuit::new(t, &zero_amplitudes(2)).unwrap().with_seed(7);
        qc.apply(Gate::h(0)).unwrap();
        let outcome = qc.observe_qubit(0).unwrap();
        let p0_after = qc.probability_of_zero(0).unwrap();
        if outcome == 0 {
            assert!((p0_after - 1.0).abs() < 1e-6);
        } else {
            assert!(p0_after < 1e-6);
        }
    }

    #[test]
    fn test_periodic_chain_cursor_loop_detour() {
        let t = make_chain(8, true);
        let mut qc = QCircuit::new(t, &zero_amplitudes(8)).unwrap().with_seed(1);
        qc.with_cutoff(1e-5);
        qc.apply(Gate::h(0)).unwrap();
        qc.apply(Gate::x(1)).unwrap();
        qc.apply(Gate::h(2)).unwrap();
        qc.apply(Gate::cnot(2, 1)).unwrap();
        for site in [3, 4, 5, 6, 7, 0] {
            qc.shift_cursor_to(site, ShiftDirection::Auto).unwrap();
        }
        qc.apply(Gate::cnot(0, 1)).unwrap();
        qc.apply(Gate::h(0)).unwrap();
        qc.apply(Gate::h(1)).unwrap();
        qc.apply(Gate::h(2)).unwrap();

        let all_id: Vec<Gate> = (0..8).map(|i| Gate::OneSite(OneSiteKind::Id, i)).collect();
        let self_overlap = overlap(&qc, &all_id, &qc).unwrap();
        assert!((self_overlap.norm() - 1.0).abs() < 1e-3);

        let zeros = QCircuit::new(make_chain(8, true), &zero_amplitudes(8)).unwrap();
        let ov_zeros = overlap(&qc, &all_id, &zeros).unwrap();
        assert!(
            (ov_zeros.norm() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-3,
            "|overlap with |000...>| = {}",
            ov_zeros.norm()
        );

        let mut ones = QCircuit::new(make_chain(8, true), &zero_amplitudes(8)).unwrap();
        for site in 0..8 {
            ones.apply(Gate::x(site)).unwrap();
        }
        let ov_ones = overlap(&qc, &all_id, &ones).unwrap();
        assert!(
            (ov_ones.norm() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-3,
            "|overlap with |111...>| = {}",
            ov_ones.norm()
        );
    }

    #[test]
    fn test_ibmq_topology_bell_ghz_overlap() {
        let t = make_ibmq_topology();
        let n = t.num_bits();
        assert_eq!(n, 53);
        let mut qc = QCircuit::new(t, &zero_amplitudes(n)).unwrap().with_seed(2);
        qc.with_cutoff(1e-5);
        qc.apply(Gate::h(6)).unwrap();
        qc.apply(Gate::x(11)).unwrap();
        qc.apply(Gate::h(10)).unwrap();
        qc.apply(Gate::cnot(10, 11)).unwrap();
        qc.apply(Gate::cnot(6, 11)).unwrap();
        qc.apply(Gate::h(6)).unwrap();
        qc.apply(Gate::h(11)).unwrap();
        qc.apply(Gate::h(10)).unwrap();

        let all_id: Vec<Gate> = (0..n).map(|i| Gate::OneSite(OneSiteKind::Id, i)).collect();
        let self_overlap = overlap(&qc, &all_id, &qc).unwrap();
        assert!((self_overlap.norm() - 1.0).abs() < 1e-3);

        let zeros = QCircuit::new(make_ibmq_topology(), &zero_amplitudes(n)).unwrap();
        let ov_zeros = overlap(&qc, &all_id, &zeros).unwrap();
        assert!(
            (ov_zeros.norm() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-3,
            "|overlap with |0...0>| = {}",
            ov_zeros.norm()
        );

        let mut comparator = QCircuit::new(make_ibmq_topology(), &zero_amplitudes(n)).unwrap();
        comparator.apply(Gate::x(6)).unwrap();
        comparator.apply(Gate::x(10)).unwrap();
        comparator.apply(Gate::x(11)).unwrap();
        let ov_comparator = overlap(&qc, &all_id, &comparator).unwrap();
        assert!(
            (ov_comparator.norm() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-3,
            "|overlap with X(6)X(10)X(11)|0...0>| = {}",
            ov_comparator.norm()
        );
    }

    fn make_star(n: usize) -> Topology {
        let mut t = Topology::new(n);
        for leaf in 1..n {
            t.add_link(0, leaf).unwrap();
        }
        t
    }

    #[test]
    fn test_star_topology_ghz_entanglement() {
        let mut qc = QCircuit::new(make_star(6), &zero_amplitudes(6))
            .unwrap()
            .with_seed(3);
        qc.apply(Gate::h(0)).unwrap();
        for leaf in 1..6 {
            qc.apply(Gate::cnot(0, leaf)).unwrap();
        }

        let all_id: Vec<Gate> = (0..6).map(|i| Gate::OneSite(OneSiteKind::Id, i)).collect();
        let self_overlap = overlap(&qc, &all_id, &qc).unwrap();
        assert!((self_overlap.norm() - 1.0).abs() < 1e-3);

        let zeros = QCircuit::new(make_star(6), &zero_amplitudes(6)).unwrap();
        let ov_zeros = overlap(&qc, &all_id, &zeros).unwrap();
        assert!(
            (ov_zeros.norm() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-3,
            "|overlap with |000000>| = {}",
            ov_zeros.norm()
        );

        let mut ones = QCircuit::new(make_star(6), &zero_amplitudes(6)).unwrap();
        for site in 0..6 {
            ones.apply(Gate::x(site)).unwrap();
        }
        let ov_ones = overlap(&qc, &all_id, &ones).unwrap();
        assert!(
            (ov_ones.norm() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-3,
            "|overlap with |111111>| = {}",
            ov_ones.norm()
        );
    }
}
