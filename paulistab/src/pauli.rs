use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::ops::{Mul, MulAssign};
use std::str::FromStr;

use sorted_iter::assume::AssumeSortedByItemExt;
use sorted_iter::SortedIterator;
use sorted_vec::SortedSet;

use crate::error::PauliError;
use crate::label::PauliLabel;

/// Pauli operator on a fixed number of qubits.
///
/// Only the X and Z supports are stored, so memory scales with the weight rather
/// than the qubit count. Products are taken up to a global phase, which leaves
/// weights and commutation relations unchanged.
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SparsePauli {
    qubit_count: usize,
    x_bits: SortedSet<usize>,
    z_bits: SortedSet<usize>,
}

impl SparsePauli {
    pub fn identity(qubit_count: usize) -> Self {
        SparsePauli {
            qubit_count,
            x_bits: SortedSet::new(),
            z_bits: SortedSet::new(),
        }
    }

    /// Builds an operator with the given letter on each listed qubit and identity elsewhere.
    ///
    /// A qubit listed more than once keeps the last letter given for it.
    ///
    /// # Errors
    ///
    /// Returns [`PauliError::QubitOutOfRange`] if an index is not below `qubit_count`.
    pub fn from_sparse<Pairs>(pairs: Pairs, qubit_count: usize) -> Result<Self, PauliError>
    where
        Pairs: IntoIterator<Item = (usize, PauliLabel)>,
    {
        let mut labels = BTreeMap::new();
        for (index, label) in pairs {
            if index >= qubit_count {
                return Err(PauliError::QubitOutOfRange { index, qubit_count });
            }
            labels.insert(index, label);
        }
        let x_bits: Vec<usize> = labels
            .iter()
            .filter(|(_, label)| label.has_x())
            .map(|(&index, _)| index)
            .collect();
        let z_bits: Vec<usize> = labels
            .iter()
            .filter(|(_, label)| label.has_z())
            .map(|(&index, _)| index)
            .collect();
        Ok(SparsePauli {
            qubit_count,
            x_bits: x_bits.into(),
            z_bits: z_bits.into(),
        })
    }

    /// # Errors
    ///
    /// Returns [`PauliError::QubitOutOfRange`] if `qubit` is not below `qubit_count`.
    pub fn single(label: PauliLabel, qubit: usize, qubit_count: usize) -> Result<Self, PauliError> {
        Self::from_sparse([(qubit, label)], qubit_count)
    }

    #[inline]
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Number of qubits acted on by a non-identity letter.
    #[inline]
    pub fn weight(&self) -> usize {
        self.support().count()
    }

    #[inline]
    pub fn x_support(&self) -> impl SortedIterator<Item = usize> + '_ {
        self.x_bits.iter().copied().assume_sorted_by_item()
    }

    #[inline]
    pub fn z_support(&self) -> impl SortedIterator<Item = usize> + '_ {
        self.z_bits.iter().copied().assume_sorted_by_item()
    }

    #[inline]
    pub fn support(&self) -> impl SortedIterator<Item = usize> + '_ {
        self.x_support().union(self.z_support())
    }

    pub fn label(&self, qubit: usize) -> PauliLabel {
        PauliLabel::from_bits(
            self.x_bits.binary_search(&qubit).is_ok(),
            self.z_bits.binary_search(&qubit).is_ok(),
        )
    }

    /// Letters on every qubit in order, identity included.
    pub fn labels(&self) -> impl Iterator<Item = PauliLabel> + '_ {
        (0..self.qubit_count).map(|qubit| self.label(qubit))
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x_bits.is_empty() && self.z_bits.is_empty()
    }

    pub fn commutes_with(&self, other: &SparsePauli) -> bool {
        let xz_overlap = self.x_support().intersection(other.z_support()).count();
        let zx_overlap = self.z_support().intersection(other.x_support()).count();
        (xz_overlap + zx_overlap) % 2 == 0
    }

    /// Columns of the operator in interleaved symplectic form: `2q` for the X part
    /// and `2q + 1` for the Z part of qubit `q`.
    pub(crate) fn symplectic_columns(&self) -> Vec<usize> {
        let x_columns = self.x_support().map(|qubit| 2 * qubit).assume_sorted_by_item();
        let z_columns = self.z_support().map(|qubit| 2 * qubit + 1).assume_sorted_by_item();
        x_columns.union(z_columns).collect()
    }
}

pub(crate) fn symmetric_difference(left: &[usize], right: &[usize]) -> Vec<usize> {
    let left = left.iter().copied().assume_sorted_by_item();
    let right = right.iter().copied().assume_sorted_by_item();
    left.symmetric_difference(right).collect()
}

impl MulAssign<&SparsePauli> for SparsePauli {
    #[inline]
    fn mul_assign(&mut self, other: &SparsePauli) {
        self.x_bits = symmetric_difference(&self.x_bits, &other.x_bits).into();
        self.z_bits = symmetric_difference(&self.z_bits, &other.z_bits).into();
        self.qubit_count = self.qubit_count.max(other.qubit_count);
    }
}

impl Mul<&SparsePauli> for SparsePauli {
    type Output = SparsePauli;

    #[inline]
    fn mul(mut self, other: &SparsePauli) -> SparsePauli {
        self *= other;
        self
    }
}

impl Mul<SparsePauli> for SparsePauli {
    type Output = SparsePauli;

    #[inline]
    fn mul(self, other: SparsePauli) -> SparsePauli {
        self * &other
    }
}

impl Mul<&SparsePauli> for &SparsePauli {
    type Output = SparsePauli;

    #[inline]
    fn mul(self, other: &SparsePauli) -> SparsePauli {
        self.clone() * other
    }
}

impl Display for SparsePauli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dense: String = self.labels().map(PauliLabel::as_char).collect();
        f.pad(&dense)
    }
}

impl Debug for SparsePauli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

// Dense strings only, one letter per qubit; whitespace is ignored.
impl FromStr for SparsePauli {
    type Err = PauliError;

    fn from_str(characters: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        let mut qubit_count = 0;
        for character in characters.chars().filter(|character| !character.is_whitespace()) {
            let label = PauliLabel::try_from(character).map_err(PauliError::InvalidCharacter)?;
            pairs.push((qubit_count, label));
            qubit_count += 1;
        }
        Self::from_sparse(pairs, qubit_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symplectic_columns_interleave_x_and_z() {
        let pauli: SparsePauli = "XZY".parse().unwrap();
        assert_eq!(pauli.symplectic_columns(), vec![0, 3, 4, 5]);
    }

    #[test]
    fn symmetric_difference_drops_shared_indexes() {
        assert_eq!(symmetric_difference(&[1, 3, 5], &[3, 4]), vec![1, 4, 5]);
        assert!(symmetric_difference(&[2, 7], &[2, 7]).is_empty());
    }
}
