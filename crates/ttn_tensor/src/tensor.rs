//! Dense, labelled-index tensors with contraction and truncated SVD.

use ndarray::{ArrayD, IxDyn};
use num_complex::Complex64;
use ttn_core::{Result, TtnError};

use crate::index::Index;

/// A dense tensor whose axes are labelled by [`Index`]es rather than by
/// position. Contraction, priming and SVD all operate by matching
/// indices rather than by axis order.
#[derive(Debug, Clone)]
pub struct Tensor {
    indices: Vec<Index>,
    data: ArrayD<Complex64>,
}

impl Tensor {
    /// Builds a tensor from explicit indices and data, checking the shape matches.
    pub fn new(indices: Vec<Index>, data: ArrayD<Complex64>) -> Result<Self> {
        let expected: Vec<usize> = indices.iter().map(|i| i.dim()).collect();
        if data.shape() != expected.as_slice() {
            return Err(TtnError::tensor(format!(
                "shape {:?} does not match index dims {:?}",
                data.shape(),
                expected
            )));
        }
        Ok(Self { indices, data })
    }

    /// An all-zero tensor over the given indices.
    pub fn zeros(indices: Vec<Index>) -> Self {
        let shape: Vec<usize> = indices.iter().map(|i| i.dim()).collect();
        let data = ArrayD::zeros(IxDyn(&shape));
        Self { indices, data }
    }

    /// A rank-0 tensor holding a single complex value.
    pub fn scalar(value: Complex64) -> Self {
        Self {
            indices: Vec::new(),
            data: ArrayD::from_elem(IxDyn(&[]), value),
        }
    }

    /// The scalar value of a rank-0 tensor.
    pub fn as_scalar(&self) -> Result<Complex64> {
        if !self.indices.is_empty() {
            return Err(TtnError::tensor("as_scalar called on a non-rank-0 tensor"));
        }
        Ok(self.data[IxDyn(&[])])
    }

    /// This tensor's free indices.
    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    /// Reads one entry by full coordinate assignment (one `(index, value)` per axis).
    pub fn get(&self, assignment: &[(Index, usize)]) -> Complex64 {
        let coord = self.coord_of(assignment);
        self.data[IxDyn(&coord)]
    }

    /// Writes one entry by full coordinate assignment.
    pub fn set(&mut self, assignment: &[(Index, usize)], value: Complex64) {
        let coord = self.coord_of(assignment);
        self.data[IxDyn(&coord)] = value;
    }

    fn coord_of(&self, assignment: &[(Index, usize)]) -> Vec<usize> {
        let mut coord = vec![0usize; self.indices.len()];
        for (idx, val) in assignment {
            let pos = self
                .indices
                .iter()
                .position(|i| i == idx)
                .unwrap_or_else(|| panic!("index {idx} not present on this tensor"));
            coord[pos] = *val;
        }
        coord
    }

    /// Frobenius norm, `sqrt(sum |x_i|^2)`.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Scales every entry by `factor` in place.
    pub fn scale(&mut self, factor: Complex64) {
        self.data.mapv_inplace(|x| x * factor);
    }

    /// Divides every entry by `self.norm()`, in place. No-op on a zero tensor.
    pub fn normalize(&mut self) {
        let n = self.norm();
        if n > 0.0 {
            self.scale(Complex64::new(1.0 / n, 0.0));
        }
    }

    /// Complex-conjugates every entry, indices unchanged.
    pub fn conj(&self) -> Self {
        Self {
            indices: self.indices.clone(),
            data: self.data.mapv(|x| x.conj()),
        }
    }

    /// Alias for [`Tensor::conj`], matching the bra/ket naming used at call sites.
    pub fn dag(&self) -> Self {
        self.conj()
    }

    /// Primes every index on this tensor.
    pub fn prime_all(&self) -> Self {
        Self {
            indices: self.indices.iter().map(|i| i.prime()).collect(),
            data: self.data.clone(),
        }
    }

    /// Primes only the indices in `targets` (matched by id, any existing level).
    pub fn prime_indices(&self, targets: &[Index]) -> Self {
        let indices = self
            .indices
            .iter()
            .map(|i| {
                if targets.iter().any(|t| t.same_family(i)) {
                    i.prime()
                } else {
                    *i
                }
            })
            .collect();
        Self {
            indices,
            data: self.data.clone(),
        }
    }

    /// Contracts `self` and `other` over every index they share (matched
    /// by id and prime level). The result's free axes are `self`'s free
    /// axes (in order) followed by `other`'s.
    pub fn contract(&self, other: &Tensor) -> Result<Tensor> {
        let mut self_free = Vec::new();
        let mut self_shared = Vec::new();
        let mut other_shared = Vec::new();
        let mut other_used = vec![false; other.indices.len()];

        for (i, idx) in self.indices.iter().enumerate() {
            if let Some(j) = other.indices.iter().position(|o| o == idx) {
                self_shared.push(i);
                other_shared.push(j);
                other_used[j] = true;
            } else {
                self_free.push(i);
            }
        }
        if self_shared.is_empty() {
            return Err(TtnError::NoCommonIndex);
        }
        let other_free: Vec<usize> = (0..other.indices.len())
            .filter(|&j| !other_used[j])
            .collect();

        let free_dim_self: usize = self_free.iter().map(|&i| self.indices[i].dim()).product();
        let shared_dim: usize = self_shared.iter().map(|&i| self.indices[i].dim()).product();
        let free_dim_other: usize = other_free.iter().map(|&i| other.indices[i].dim()).product();

        let mut self_perm = self_free.clone();
        self_perm.extend(&self_shared);
        let self_mat = self
            .data
            .view()
            .permuted_axes(IxDyn(&self_perm))
            .as_standard_layout()
            .into_owned()
            .into_shape((free_dim_self.max(1), shared_dim))
            .map_err(|e| TtnError::tensor(e.to_string()))?;

        let mut other_perm = other_shared.clone();
        other_perm.extend(&other_free);
        let other_mat = other
            .data
            .view()
            .permuted_axes(IxDyn(&other_perm))
            .as_standard_layout()
            .into_owned()
            .into_shape((shared_dim, free_dim_other.max(1)))
            .map_err(|e| TtnError::tensor(e.to_string()))?;

        let result = self_mat.dot(&other_mat);

        let mut new_indices: Vec<Index> = self_free.iter().map(|&i| self.indices[i]).collect();
        new_indices.extend(other_free.iter().map(|&i| other.indices[i]));
        let new_shape: Vec<usize> = new_indices.iter().map(|i| i.dim()).collect();
        let data = result
            .into_dyn()
            .into_shape(IxDyn(&new_shape))
            .map_err(|e| TtnError::tensor(e.to_string()))?;

        Ok(Tensor {
            indices: new_indices,
            data,
        })
    }

    /// Tensor (outer/Kronecker) product of two tensors sharing no indices.
    pub fn outer(&self, other: &Tensor) -> Tensor {
        let self_mat = self
            .data
            .view()
            .as_standard_layout()
            .into_owned()
            .into_shape((self.data.len().max(1), 1))
            .expect("standard-layout reshape cannot fail");
        let other_mat = other
            .data
            .view()
            .as_standard_layout()
            .into_owned()
            .into_shape((1, other.data.len().max(1)))
            .expect("standard-layout reshape cannot fail");
        let result = self_mat.dot(&other_mat);

        let mut indices = self.indices.clone();
        indices.extend(other.indices.clone());
        let shape: Vec<usize> = indices.iter().map(|i| i.dim()).collect();
        let data = result
            .into_dyn()
            .into_shape(IxDyn(&shape))
            .expect("element count matches by construction");
        Tensor { indices, data }
    }

    /// Builds a diagonal rank-2 tensor over `(row, col)` from `values`.
    pub fn diagonal(row: Index, col: Index, values: &[Complex64]) -> Tensor {
        let mut t = Tensor::zeros(vec![row, col]);
        for (k, v) in values.iter().enumerate() {
            t.set(&[(row, k), (col, k)], *v);
        }
        t
    }

    /// Truncated SVD: `self = U · S · V`, splitting `row_indices` from
    /// the rest. `S`'s two axes are a freshly minted `bond` index and
    /// its primed copy; `U` carries `bond`, `V` carries `bond.prime()`.
    /// Singular values below `cutoff` (relative to the largest) are
    /// dropped, and at most `max_dim` (0 = unbounded) are kept.
    pub fn svd(
        &self,
        row_indices: &[Index],
        cutoff: f64,
        max_dim: usize,
    ) -> Result<(Tensor, Tensor, Tensor, Vec<f64>)> {
        let mut row_pos = Vec::new();
        let mut col_pos = Vec::new();
        for (i, idx) in self.indices.iter().enumerate() {
            if row_indices.iter().any(|r| r == idx) {
                row_pos.push(i);
            } else {
                col_pos.push(i);
            }
        }
        if row_pos.len() != row_indices.len() {
            return Err(TtnError::UnknownIndex(
                "one or more row_indices are not free indices of this tensor".to_string(),
            ));
        }

        let row_dims: Vec<usize> = row_pos.iter().map(|&i| self.indices[i].dim()).collect();
        let col_dims: Vec<usize> = col_pos.iter().map(|&i| self.indices[i].dim()).collect();
        let row_dim: usize = row_dims.iter().product::<usize>().max(1);
        let col_dim: usize = col_dims.iter().product::<usize>().max(1);

        let mut perm = row_pos.clone();
        perm.extend(&col_pos);
        let mat = self
            .data
            .view()
            .permuted_axes(IxDyn(&perm))
            .as_standard_layout()
            .into_owned()
            .into_shape((row_dim, col_dim))
            .map_err(|e| TtnError::tensor(e.to_string()))?;

        let slice = mat.as_slice().ok_or_else(|| {
            TtnError::tensor("internal contraction buffer was not contiguous".to_string())
        })?;
        let m = nalgebra::DMatrix::<Complex64>::from_row_slice(row_dim, col_dim, slice);
        let svd = m.svd(true, true);
        let u = svd.u.ok_or_else(|| TtnError::tensor("SVD failed to produce U"))?;
        let v_t = svd
            .v_t
            .ok_or_else(|| TtnError::tensor("SVD failed to produce V^H"))?;
        let sigma = svd.singular_values;

        let total = sigma.len();
        let max_sigma = sigma.iter().cloned().fold(0.0_f64, f64::max);
        let mut keep = total;
        if cutoff > 0.0 && max_sigma > 0.0 {
            while keep > 1 && sigma[keep - 1] / max_sigma < cutoff {
                keep -= 1;
            }
        }
        if max_dim > 0 && keep > max_dim {
            keep = max_dim;
        }
        keep = keep.max(1).min(total);

        let bond_u = Index::new(keep, "link");
        let bond_v = bond_u.prime();

        let mut u_indices: Vec<Index> = row_pos.iter().map(|&i| self.indices[i]).collect();
        u_indices.push(bond_u);
        let mut u_data = ArrayD::zeros(IxDyn(&[row_dim, keep]));
        for r in 0..row_dim {
            for k in 0..keep {
                u_data[IxDyn(&[r, k])] = u[(r, k)];
            }
        }
        let u_data = u_data
            .into_shape({
                let mut s = row_dims.clone();
                s.push(keep);
                IxDyn(&s)
            })
            .map_err(|e| TtnError::tensor(e.to_string()))?;
        let u_tensor = Tensor {
            indices: u_indices,
            data: u_data,
        };

        let spectrum: Vec<f64> = sigma.iter().take(keep).cloned().collect();
        let s_values: Vec<Complex64> = spectrum.iter().map(|&s| Complex64::new(s, 0.0)).collect();
        let s_tensor = Tensor::diagonal(bond_u, bond_v, &s_values);

        let mut v_indices = vec![bond_v];
        v_indices.extend(col_pos.iter().map(|&i| self.indices[i]));
        let mut v_data = ArrayD::zeros(IxDyn(&[keep, col_dim]));
        for k in 0..keep {
            for c in 0..col_dim {
                v_data[IxDyn(&[k, c])] = v_t[(k, c)];
            }
        }
        let mut v_shape = vec![keep];
        v_shape.extend(&col_dims);
        let v_data = v_data
            .into_shape(IxDyn(&v_shape))
            .map_err(|e| TtnError::tensor(e.to_string()))?;
        let v_tensor = Tensor {
            indices: v_indices,
            data: v_data,
        };

        Ok((u_tensor, s_tensor, v_tensor, spectrum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ket0(site: Index) -> Tensor {
        let mut t = Tensor::zeros(vec![site]);
        t.set(&[(site, 0)], Complex64::new(1.0, 0.0));
        t
    }

    #[test]
    fn test_contract_identity_preserves_amplitude() {
        let s = Index::new(2, "site");
        let ket = ket0(s);
        let id = {
            let mut t = Tensor::zeros(vec![s.prime(), s]);
            t.set(&[(s.prime(), 0), (s, 0)], Complex64::new(1.0, 0.0));
            t.set(&[(s.prime(), 1), (s, 1)], Complex64::new(1.0, 0.0));
            t
        };
        let result = id.contract(&ket.prime_all()).unwrap();
        assert_eq!(result.indices().len(), 1);
        assert_eq!(result.get(&[(s.prime(), 0)]), Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_norm_of_unit_vector() {
        let s = Index::new(2, "site");
        let ket = ket0(s);
        assert!((ket.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_outer_product_dimensions() {
        let a = Index::new(2, "site");
        let b = Index::new(2, "site");
        let ta = ket0(a);
        let tb = ket0(b);
        let out = ta.outer(&tb);
        assert_eq!(out.indices().len(), 2);
        assert_eq!(out.get(&[(a, 0), (b, 0)]), Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_svd_roundtrip_reconstructs_tensor() {
        // A 2x2 "Bell-like" tensor over (row, col), both dim 2.
        let row = Index::new(2, "site");
        let col = Index::new(2, "site");
        let mut t = Tensor::zeros(vec![row, col]);
        let amp = Complex64::new(1.0 / std::f64::consts::SQRT_2, 0.0);
        t.set(&[(row, 0), (col, 0)], amp);
        t.set(&[(row, 1), (col, 1)], amp);

        let (u, s, v, spectrum) = t.svd(&[row], 0.0, 0).unwrap();
        assert_eq!(spectrum.len(), 2);

        let us = u.contract(&s).unwrap();
        let reconstructed = us.contract(&v).unwrap();

        for r in 0..2 {
            for c in 0..2 {
                let expected = t.get(&[(row, r), (col, c)]);
                let got = reconstructed.get(&[(row, r), (col, c)]);
                assert!((expected - got).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn test_svd_truncation_respects_max_dim() {
        let row = Index::new(2, "site");
        let col = Index::new(2, "site");
        let mut t = Tensor::zeros(vec![row, col]);
        t.set(&[(row, 0), (col, 0)], Complex64::new(1.0, 0.0));
        let (_, _, _, spectrum) = t.svd(&[row], 0.0, 1).unwrap();
        assert_eq!(spectrum.len(), 1);
    }
}
