//! Dense 2D field storage: [`ScalarField`] and [`BoolMask`].
//!
//! Both types store an `[n_x, n_y]` lattice in a flat `Vec`, x-major
//! (`index = i * n_y + j`). Shapes are fixed at construction; every
//! cross-field operation requires matching shapes and this is checked
//! at the registration boundary, never mid-simulation.

use std::fmt;

/// Dense 2D array of `f64` over an `[n_x, n_y]` grid.
///
/// Used for material meshes (permittivity, conductivity), conductivity
/// profiles, and the mutable `Hx`/`Hy`/`Ez` field state.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    n_x: usize,
    n_y: usize,
    data: Vec<f64>,
}

impl ScalarField {
    /// Create a field with every cell set to `value`.
    pub fn filled(n_x: usize, n_y: usize, value: f64) -> Self {
        Self {
            n_x,
            n_y,
            data: vec![value; n_x * n_y],
        }
    }

    /// Create a zero-initialized field.
    pub fn zeros(n_x: usize, n_y: usize) -> Self {
        Self::filled(n_x, n_y, 0.0)
    }

    /// Create a field by evaluating `f(i, j)` at every cell.
    pub fn from_fn(n_x: usize, n_y: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(n_x * n_y);
        for i in 0..n_x {
            for j in 0..n_y {
                data.push(f(i, j));
            }
        }
        Self { n_x, n_y, data }
    }

    /// Number of cells along x.
    pub fn n_x(&self) -> usize {
        self.n_x
    }

    /// Number of cells along y.
    pub fn n_y(&self) -> usize {
        self.n_y
    }

    /// `(n_x, n_y)` shape tuple.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_x, self.n_y)
    }

    /// Flat index for `(i, j)`.
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.n_x && j < self.n_y);
        i * self.n_y + j
    }

    /// Value at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.idx(i, j)]
    }

    /// Set the value at `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.idx(i, j);
        self.data[idx] = value;
    }

    /// Read-only view of the flat backing storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable view of the flat backing storage.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Apply `f` to every cell in place.
    pub fn map_inplace(&mut self, mut f: impl FnMut(f64) -> f64) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// Largest absolute value over all cells (0.0 for an empty field).
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField[{} x {}]", self.n_x, self.n_y)
    }
}

/// Dense 2D array of `bool` over an `[n_x, n_y]` grid.
///
/// Occupancy masks: `true` marks cells inside a declared geometric
/// region. The solver consumes only this boolean contract, never
/// geometry types directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoolMask {
    n_x: usize,
    n_y: usize,
    data: Vec<bool>,
}

impl BoolMask {
    /// Create an all-`false` mask.
    pub fn empty(n_x: usize, n_y: usize) -> Self {
        Self {
            n_x,
            n_y,
            data: vec![false; n_x * n_y],
        }
    }

    /// Create a mask by evaluating a predicate at every cell.
    pub fn from_fn(n_x: usize, n_y: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(n_x * n_y);
        for i in 0..n_x {
            for j in 0..n_y {
                data.push(f(i, j));
            }
        }
        Self { n_x, n_y, data }
    }

    /// `(n_x, n_y)` shape tuple.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_x, self.n_y)
    }

    /// Whether `(i, j)` is inside the region.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        debug_assert!(i < self.n_x && j < self.n_y);
        self.data[i * self.n_y + j]
    }

    /// Mark or clear the cell at `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        debug_assert!(i < self.n_x && j < self.n_y);
        self.data[i * self.n_y + j] = value;
    }

    /// Number of `true` cells.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Union with another mask of the same shape.
    pub fn union(&self, other: &Self) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        Self {
            n_x: self.n_x,
            n_y: self.n_y,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a || b)
                .collect(),
        }
    }

    /// Intersection with another mask of the same shape.
    pub fn intersection(&self, other: &Self) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        Self {
            n_x: self.n_x,
            n_y: self.n_y,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a && b)
                .collect(),
        }
    }

    /// Cells in `self` but not in `other` (same shape).
    pub fn difference(&self, other: &Self) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        Self {
            n_x: self.n_x,
            n_y: self.n_y,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a && !b)
                .collect(),
        }
    }

    /// Iterate over the `(i, j)` indices of `true` cells in x-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n_y = self.n_y;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(move |(idx, _)| (idx / n_y, idx % n_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scalar_field_indexing_is_x_major() {
        let field = ScalarField::from_fn(3, 4, |i, j| (i * 10 + j) as f64);
        assert_eq!(field.get(0, 0), 0.0);
        assert_eq!(field.get(0, 3), 3.0);
        assert_eq!(field.get(2, 1), 21.0);
        assert_eq!(field.idx(1, 0), 4);
        assert_eq!(field.as_slice().len(), 12);
    }

    #[test]
    fn set_then_get_roundtrips() {
        let mut field = ScalarField::zeros(4, 4);
        field.set(2, 3, 1.5);
        assert_eq!(field.get(2, 3), 1.5);
        assert_eq!(field.get(3, 2), 0.0);
    }

    #[test]
    fn max_abs_sees_negative_values() {
        let mut field = ScalarField::zeros(2, 2);
        field.set(1, 1, -7.0);
        field.set(0, 0, 3.0);
        assert_eq!(field.max_abs(), 7.0);
    }

    #[test]
    fn mask_set_operations() {
        let a = BoolMask::from_fn(2, 2, |i, _| i == 0);
        let b = BoolMask::from_fn(2, 2, |_, j| j == 0);
        assert_eq!(a.union(&b).count(), 3);
        assert_eq!(a.intersection(&b).count(), 1);
        assert_eq!(a.difference(&b).count(), 1);
        assert!(a.intersection(&b).get(0, 0));
    }

    #[test]
    fn iter_set_yields_x_major_order() {
        let mask = BoolMask::from_fn(2, 3, |i, j| i == 1 || j == 2);
        let cells: Vec<_> = mask.iter_set().collect();
        assert_eq!(cells, vec![(0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    proptest! {
        #[test]
        fn from_fn_matches_get(n_x in 1usize..12, n_y in 1usize..12) {
            let field = ScalarField::from_fn(n_x, n_y, |i, j| (i * 100 + j) as f64);
            for i in 0..n_x {
                for j in 0..n_y {
                    prop_assert_eq!(field.get(i, j), (i * 100 + j) as f64);
                }
            }
        }

        #[test]
        fn mask_count_matches_iter(n_x in 1usize..12, n_y in 1usize..12, modulus in 1usize..5) {
            let mask = BoolMask::from_fn(n_x, n_y, |i, j| (i + j) % modulus == 0);
            prop_assert_eq!(mask.count(), mask.iter_set().count());
        }
    }
}
