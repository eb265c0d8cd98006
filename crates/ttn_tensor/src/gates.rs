//! Materializes [`Gate`]s from `ttn_core` as labelled [`Tensor`]s.

use num_complex::Complex64;
use ttn_core::{Gate, OneSiteKind, TwoSiteKind};

use crate::index::Index;
use crate::tensor::Tensor;

fn tensor_from_2x2(matrix: [[Complex64; 2]; 2], out: Index, inp: Index) -> Tensor {
    let mut t = Tensor::zeros(vec![out, inp]);
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        t.set(&[(out, row), (inp, col)], matrix[row][col]);
    }
    t
}

fn tensor_from_4x4(
    matrix: [[Complex64; 4]; 4],
    out1: Index,
    out2: Index,
    in1: Index,
    in2: Index,
) -> Tensor {
    let mut t = Tensor::zeros(vec![out1, out2, in1, in2]);
    for r1 in 0..2 {
        for r2 in 0..2 {
            for c1 in 0..2 {
                for c2 in 0..2 {
                    let val = matrix[r1 * 2 + r2][c1 * 2 + c2];
                    t.set(&[(out1, r1), (out2, r2), (in1, c1), (in2, c2)], val);
                }
            }
        }
    }
    t
}

/// Materializes a gate into a labelled tensor acting on `site_index`
/// (for one-site gates) or `site1_index`/`site2_index` (for two-site
/// gates). The unprimed axis is the output ("bra") side, the primed
/// axis is the input ("ket") side: `op[out, in'] = <out|G|in>`.
pub fn materialize_one_site(kind: &OneSiteKind, site_index: Index) -> Tensor {
    tensor_from_2x2(kind.matrix(), site_index, site_index.prime())
}

/// Materializes a two-site gate tensor over `(site1_index, site2_index)`.
pub fn materialize_two_site(kind: &TwoSiteKind, site1_index: Index, site2_index: Index) -> Tensor {
    tensor_from_4x4(
        kind.matrix(),
        site1_index,
        site2_index,
        site1_index.prime(),
        site2_index.prime(),
    )
}

/// Materializes any [`Gate`], given the physical site indices it acts on
/// indexed by qubit number (i.e. `site_indices[q]` is the `Index` for qubit `q`).
pub fn materialize(gate: &Gate, site_indices: &[Index]) -> Tensor {
    match gate {
        Gate::OneSite(kind, site) => materialize_one_site(kind, site_indices[*site]),
        Gate::TwoSite(kind, a, b) => {
            materialize_two_site(kind, site_indices[*a], site_indices[*b])
        }
    }
}
