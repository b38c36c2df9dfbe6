//! Row reduction over GF(2) for Pauli operators in symplectic form.

use std::collections::BTreeMap;

use crate::pauli::{symmetric_difference, SparsePauli};

/// Echelon basis for the span of a set of Pauli operators, ignoring phases.
///
/// Every stored row has a distinct leading column, so a vector reduces to zero
/// exactly when it lies in the span.
#[derive(Clone, Debug, Default)]
pub struct SymplecticEchelon {
    rows: BTreeMap<usize, Vec<usize>>,
}

impl SymplecticEchelon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        self.rows.len()
    }

    /// Adds `pauli` to the basis. Returns `false`, leaving the basis unchanged, if it
    /// is already a product of operators inserted earlier.
    pub fn insert(&mut self, pauli: &SparsePauli) -> bool {
        match self.reduce(pauli.symplectic_columns()) {
            Some(row) => {
                self.rows.insert(row[0], row);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, pauli: &SparsePauli) -> bool {
        self.reduce(pauli.symplectic_columns()).is_none()
    }

    fn reduce(&self, mut row: Vec<usize>) -> Option<Vec<usize>> {
        while let Some(&leading) = row.first() {
            match self.rows.get(&leading) {
                Some(pivot_row) => row = symmetric_difference(&row, pivot_row),
                None => return Some(row),
            }
        }
        None
    }
}
