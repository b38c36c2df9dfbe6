//! Weight histograms of stabilizer cosets, exact and sampled.

use std::ops::Index;

use rand::Rng;
use tracing::debug;

use crate::algebra::{PauliOperator, StabilizerGroup};
use crate::error::{Error, Result};
use crate::sampling::random_element;

pub const DEFAULT_SAMPLED_TRIALS: usize = 100_000;

/// Number of operators observed at each weight `0..=qubit_count`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightHistogram {
    counts: Vec<u64>,
}

impl WeightHistogram {
    /// All-zero histogram with `qubit_count + 1` bins.
    #[must_use]
    pub fn new(qubit_count: usize) -> Self {
        WeightHistogram {
            counts: vec![0; qubit_count + 1],
        }
    }

    /// # Panics
    ///
    /// Panics if `counts` is empty.
    #[must_use]
    pub fn from_counts(counts: Vec<u64>) -> Self {
        assert!(!counts.is_empty(), "a weight histogram has at least one bin");
        WeightHistogram { counts }
    }

    pub fn qubit_count(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }

    /// # Panics
    ///
    /// Panics if `weight` exceeds the qubit count.
    pub fn record(&mut self, weight: usize) {
        let qubit_count = self.qubit_count();
        let Some(count) = self.counts.get_mut(weight) else {
            panic!("weight {weight} exceeds qubit count {qubit_count}");
        };
        *count += 1;
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Counts divided by the total; all zeros for an empty histogram.
    #[allow(clippy::cast_precision_loss)]
    pub fn frequencies(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts.iter().map(|&count| count as f64 / total as f64).collect()
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn mean_weight(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: u64 = self.counts.iter().enumerate().map(|(weight, &count)| weight as u64 * count).sum();
        Some(weighted as f64 / total as f64)
    }

    /// Smallest weight with a non-zero count.
    pub fn min_weight(&self) -> Option<usize> {
        self.counts.iter().position(|&count| count > 0)
    }

    /// # Panics
    ///
    /// Panics if the histograms have different numbers of bins.
    pub fn merge(&mut self, other: &WeightHistogram) {
        assert_eq!(self.bins(), other.bins(), "cannot merge histograms of different lengths");
        for (count, &extra) in self.counts.iter_mut().zip(&other.counts) {
            *count += extra;
        }
    }
}

impl Index<usize> for WeightHistogram {
    type Output = u64;

    fn index(&self, weight: usize) -> &u64 {
        &self.counts[weight]
    }
}

/// `coset_rep`, or the identity when none is given, checked against the code's qubit count.
///
/// # Errors
///
/// Returns [`Error::QubitCountMismatch`] if `coset_rep` acts on a different number of qubits.
pub(crate) fn coset_representative<C: StabilizerGroup>(code: &C, coset_rep: Option<&C::Pauli>) -> Result<C::Pauli> {
    let expected = code.qubit_count();
    match coset_rep {
        None => Ok(C::Pauli::identity(expected)),
        Some(pauli) if pauli.qubit_count() == expected => Ok(pauli.clone()),
        Some(pauli) => Err(Error::QubitCountMismatch {
            expected,
            found: pauli.qubit_count(),
        }),
    }
}

/// Exact weight histogram of the coset `coset_rep · S`, or of `S` itself when no
/// representative is given.
///
/// Visits all `2^r` elements for `r` generators. The counts sum to `2^r`.
///
/// # Errors
///
/// * [`Error::QubitCountMismatch`] if `coset_rep` does not act on the code's qubits.
/// * [`Error::GroupTooLarge`] if the group has more than
///   [`StabilizerGroup::MAX_ENUMERABLE_GENERATORS`] generators.
pub fn coset_hist<C: StabilizerGroup>(code: &C, coset_rep: Option<&C::Pauli>) -> Result<WeightHistogram> {
    let coset_rep = coset_representative(code, coset_rep)?;
    let generators = code.group_generators().len();
    if generators > C::MAX_ENUMERABLE_GENERATORS {
        return Err(Error::GroupTooLarge { generators });
    }

    let mut histogram = WeightHistogram::new(code.qubit_count());
    for element in code.elements(&coset_rep) {
        histogram.record(element.weight());
    }
    debug!(generators, elements = histogram.total(), "enumerated coset weights");
    Ok(histogram)
}

/// Weight histogram of `n_trials` uniformly random elements of the coset
/// `coset_rep · S`, or of `S` when no representative is given.
///
/// # Errors
///
/// Returns [`Error::QubitCountMismatch`] if `coset_rep` does not act on the code's qubits.
pub fn freq_hist<C, R>(code: &C, coset_rep: Option<&C::Pauli>, n_trials: usize, rng: &mut R) -> Result<WeightHistogram>
where
    C: StabilizerGroup,
    R: Rng,
{
    let coset_rep = coset_representative(code, coset_rep)?;

    let mut histogram = WeightHistogram::new(code.qubit_count());
    for _ in 0..n_trials {
        histogram.record(random_element(code, &coset_rep, rng).weight());
    }
    debug!(trials = n_trials, "sampled coset weights");
    Ok(histogram)
}
