//! The quantum gate catalogue.
//!
//! Gates collapse into a two-variant sum type instead of one enum case
//! per gate, so that dispatch is a single match in the tensor layer's
//! `materialize` function rather than per-gate virtual methods.

use crate::physics::{self, Matrix2x2, Matrix4x4};

/// A gate acting on exactly one site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OneSiteKind {
    /// Identity.
    Id,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Hadamard.
    H,
    /// |0⟩⟨0|.
    Proj0,
    /// |1⟩⟨1|.
    Proj1,
    /// |1⟩⟨0|.
    Proj0To1,
    /// |0⟩⟨1|.
    Proj1To0,
    /// Phase gate `P(θ) = diag(1, e^{iθ})`.
    P(f64),
    /// General single-qubit rotation `U3(θ, φ, λ)`.
    U3(f64, f64, f64),
}

impl OneSiteKind {
    /// The 2x2 matrix for this gate, with the unprimed axis as output.
    pub fn matrix(&self) -> Matrix2x2 {
        match self {
            OneSiteKind::Id => physics::IDENTITY,
            OneSiteKind::X => physics::PAULI_X,
            OneSiteKind::Y => physics::PAULI_Y,
            OneSiteKind::Z => physics::PAULI_Z,
            OneSiteKind::H => physics::HADAMARD,
            OneSiteKind::Proj0 => physics::PROJ_0,
            OneSiteKind::Proj1 => physics::PROJ_1,
            OneSiteKind::Proj0To1 => physics::PROJ_0_TO_1,
            OneSiteKind::Proj1To0 => physics::PROJ_1_TO_0,
            OneSiteKind::P(theta) => physics::p_gate(*theta),
            OneSiteKind::U3(theta, phi, lambda) => physics::u3(*theta, *phi, *lambda),
        }
    }
}

/// A gate acting on exactly two sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TwoSiteKind {
    /// Controlled-NOT, control = site1, target = site2.
    Cnot,
    /// Controlled-Y.
    Cy,
    /// Controlled-Z.
    Cz,
    /// Controlled phase `CP(θ)`.
    Cp(f64),
    /// Controlled `U3(θ, φ, λ)`.
    Cu3(f64, f64, f64),
    /// SWAP.
    Swap,
}

impl TwoSiteKind {
    /// The 4x4 matrix for this gate, basis order `|site1,site2>`.
    pub fn matrix(&self) -> Matrix4x4 {
        match self {
            TwoSiteKind::Cnot => physics::CNOT,
            TwoSiteKind::Cy => physics::cy(),
            TwoSiteKind::Cz => physics::CZ,
            TwoSiteKind::Cp(theta) => physics::cp(*theta),
            TwoSiteKind::Cu3(theta, phi, lambda) => physics::cu3(*theta, *phi, *lambda),
            TwoSiteKind::Swap => physics::SWAP,
        }
    }
}

/// A gate applied to a circuit: either a one-site or a two-site operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Acts on a single site.
    OneSite(OneSiteKind, usize),
    /// Acts on two distinct sites.
    TwoSite(TwoSiteKind, usize, usize),
}

impl Gate {
    /// The sites this gate acts on.
    pub fn sites(&self) -> Vec<usize> {
        match self {
            Gate::OneSite(_, s) => vec![*s],
            Gate::TwoSite(_, a, b) => vec![*a, *b],
        }
    }

    /// Shorthand constructor for a Hadamard gate.
    pub fn h(site: usize) -> Self {
        Gate::OneSite(OneSiteKind::H, site)
    }

    /// Shorthand constructor for a Pauli-X gate.
    pub fn x(site: usize) -> Self {
        Gate::OneSite(OneSiteKind::X, site)
    }

    /// Shorthand constructor for a CNOT gate.
    pub fn cnot(control: usize, target: usize) -> Self {
        Gate::TwoSite(TwoSiteKind::Cnot, control, target)
    }

    /// Shorthand constructor for a SWAP gate.
    pub fn swap(a: usize, b: usize) -> Self {
        Gate::TwoSite(TwoSiteKind::Swap, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_site_sites() {
        let g = Gate::h(3);
        assert_eq!(g.sites(), vec![3]);
    }

    #[test]
    fn test_two_site_sites() {
        let g = Gate::cnot(1, 4);
        assert_eq!(g.sites(), vec![1, 4]);
    }

    #[test]
    fn test_swap_matrix_matches_physics() {
        let g = TwoSiteKind::Swap;
        assert_eq!(g.matrix(), physics::SWAP);
    }
}
