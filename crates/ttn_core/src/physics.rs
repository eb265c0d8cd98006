//! Physical constants and gate matrices for quantum computing.
//!
//! This module provides the fixed 2x2 / 4x4 matrices behind every
//! `Gate` variant in [`crate::gate`], plus the handful of named physical
//! constants (typical gate times) that the ambient CLI/logging layer
//! reports alongside a circuit run.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Complex number type alias for readability.
pub type C64 = Complex64;

/// Create a complex number from real and imaginary parts.
#[inline]
pub const fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

/// Complex zero.
pub const ZERO: C64 = C64::new(0.0, 0.0);

/// Complex one.
pub const ONE: C64 = C64::new(1.0, 0.0);

/// Complex imaginary unit i.
pub const I: C64 = C64::new(0.0, 1.0);

/// 1/√2 as a complex number.
pub const FRAC_1_SQRT_2_C: C64 = C64::new(FRAC_1_SQRT_2, 0.0);

/// Typical gate times (ns), reported by the CLI when summarizing a run.
pub mod gate_times {
    /// Single-qubit gate time.
    pub const SINGLE_QUBIT: f64 = 35.0;
    /// Two-qubit gate time (CNOT, CZ).
    pub const TWO_QUBIT: f64 = 300.0;
    /// Measurement time.
    pub const MEASUREMENT: f64 = 1000.0;
}

// ============================================================================
// Gate matrices (2x2 for single-site, 4x4 for two-site)
// ============================================================================

/// 2x2 matrix type: `[[a, b], [c, d]]`, row-major, `m[row][col]`.
pub type Matrix2x2 = [[C64; 2]; 2];

/// 4x4 matrix type for two-site gates, basis order `|00>,|01>,|10>,|11>`.
pub type Matrix4x4 = [[C64; 4]; 4];

/// Identity matrix.
pub const IDENTITY: Matrix2x2 = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X (NOT) gate. |0⟩ → |1⟩, |1⟩ → |0⟩.
pub const PAULI_X: Matrix2x2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate. |0⟩ → i|1⟩, |1⟩ → -i|0⟩.
pub const PAULI_Y: Matrix2x2 = [[ZERO, C64::new(0.0, -1.0)], [I, ZERO]];

/// Pauli-Z gate. |0⟩ → |0⟩, |1⟩ → -|1⟩.
pub const PAULI_Z: Matrix2x2 = [[ONE, ZERO], [ZERO, C64::new(-1.0, 0.0)]];

/// Projector onto |0⟩: |0⟩⟨0|.
pub const PROJ_0: Matrix2x2 = [[ONE, ZERO], [ZERO, ZERO]];

/// Projector onto |1⟩: |1⟩⟨1|.
pub const PROJ_1: Matrix2x2 = [[ZERO, ZERO], [ZERO, ONE]];

/// Raising map |1⟩⟨0|: sends |0⟩ to |1⟩, annihilates |1⟩.
pub const PROJ_0_TO_1: Matrix2x2 = [[ZERO, ZERO], [ONE, ZERO]];

/// Lowering map |0⟩⟨1|: sends |1⟩ to |0⟩, annihilates |0⟩.
pub const PROJ_1_TO_0: Matrix2x2 = [[ZERO, ONE], [ZERO, ZERO]];

/// Hadamard gate. |0⟩ → (|0⟩ + |1⟩)/√2, |1⟩ → (|0⟩ - |1⟩)/√2.
///
/// Equivalently `(PROJ_0 + PROJ_0_TO_1 + PROJ_1_TO_0 - PROJ_1) / √2`.
pub const HADAMARD: Matrix2x2 = [
    [FRAC_1_SQRT_2_C, FRAC_1_SQRT_2_C],
    [FRAC_1_SQRT_2_C, C64::new(-FRAC_1_SQRT_2, 0.0)],
];

/// Phase gate `P(θ) = diag(1, e^{iθ})`.
pub fn p_gate(theta: f64) -> Matrix2x2 {
    [[ONE, ZERO], [ZERO, c(theta.cos(), theta.sin())]]
}

/// General single-qubit SU(2) gate `U3(θ, φ, λ)`.
///
/// `α = e^{-i(φ+λ)/2} cos(θ/2)`, `β = -e^{-i(φ-λ)/2} sin(θ/2)`,
/// matrix rows are `(α, β)` and `(-β̄, ᾱ)`.
pub fn u3(theta: f64, phi: f64, lambda: f64) -> Matrix2x2 {
    let half = theta / 2.0;
    let cos = half.cos();
    let sin = half.sin();
    let phase_sum = c(0.0, -(phi + lambda) / 2.0).exp();
    let phase_diff = c(0.0, -(phi - lambda) / 2.0).exp();
    let alpha = phase_sum * cos;
    let beta = -phase_diff * sin;
    [[alpha, beta], [-beta.conj(), alpha.conj()]]
}

/// CNOT (control = site1, target = site2).
pub const CNOT: Matrix4x4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// CZ gate.
pub const CZ: Matrix4x4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ZERO, ZERO, C64::new(-1.0, 0.0)],
];

/// SWAP gate.
pub const SWAP: Matrix4x4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
];

/// Builds a controlled version of a single-qubit gate: `Proj0(c)⊗Id(t) + Proj1(c)⊗G(t)`.
pub fn controlled(gate: &Matrix2x2) -> Matrix4x4 {
    let mut out = [[ZERO; 4]; 4];
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        out[row][col] = IDENTITY[row][col];
    }
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        out[2 + row][2 + col] = gate[row][col];
    }
    out
}

/// CY gate.
pub fn cy() -> Matrix4x4 {
    controlled(&PAULI_Y)
}

/// CP(θ) gate.
pub fn cp(theta: f64) -> Matrix4x4 {
    controlled(&p_gate(theta))
}

/// CU3(θ, φ, λ) gate.
pub fn cu3(theta: f64, phi: f64, lambda: f64) -> Matrix4x4 {
    controlled(&u3(theta, phi, lambda))
}

// ============================================================================
// Utility functions
// ============================================================================

/// Hermitian conjugate (conjugate transpose) of a 2x2 matrix.
pub fn dagger_2x2(m: &Matrix2x2) -> Matrix2x2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Multiplies two 2x2 matrices.
pub fn mul_2x2(a: &Matrix2x2, b: &Matrix2x2) -> Matrix2x2 {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// Checks if a 2x2 matrix is approximately unitary (U†U ≈ I).
pub fn is_unitary_2x2(m: &Matrix2x2, tolerance: f64) -> bool {
    let product = mul_2x2(&dagger_2x2(m), m);
    (product[0][0] - ONE).norm() < tolerance
        && product[0][1].norm() < tolerance
        && product[1][0].norm() < tolerance
        && (product[1][1] - ONE).norm() < tolerance
}
