//! Stabilizer codes and enumeration of their stabilizer groups.

use std::iter::FusedIterator;

use tracing::debug;

use crate::echelon::SymplecticEchelon;
use crate::error::CodeError;
use crate::pauli::SparsePauli;

/// Largest generator count whose group can be enumerated with a 64-bit counter.
pub const MAX_ENUMERABLE_GENERATORS: usize = 63;

/// Stabilizer code given by independent, mutually commuting generators and
/// paired logical operators.
#[derive(Clone, Debug)]
pub struct StabilizerCode {
    qubit_count: usize,
    group_generators: Vec<SparsePauli>,
    logical_xs: Vec<SparsePauli>,
    logical_zs: Vec<SparsePauli>,
    redundant_generator_count: usize,
    echelon: SymplecticEchelon,
}

impl StabilizerCode {
    /// Validates the operators and keeps an independent subset of `generators`.
    ///
    /// Generators that are products of earlier ones are dropped, preserving the order
    /// of the rest. Logical operators are numbered X first, then Z, in errors.
    ///
    /// # Errors
    ///
    /// * [`CodeError::Empty`] if no operator is given at all.
    /// * [`CodeError::QubitCountMismatch`] if the operators act on different qubit counts.
    /// * [`CodeError::LogicalCountMismatch`] if the logical X and Z lists differ in length.
    /// * [`CodeError::AnticommutingGenerators`] if two generators anticommute.
    /// * [`CodeError::LogicalNotInCentralizer`] if a logical operator anticommutes with a generator.
    /// * [`CodeError::GeneratorCountMismatch`] if the independent generators do not number
    ///   `qubit_count - logical_count`.
    pub fn new(
        generators: Vec<SparsePauli>,
        logical_xs: Vec<SparsePauli>,
        logical_zs: Vec<SparsePauli>,
    ) -> Result<Self, CodeError> {
        let mut qubit_counts = generators
            .iter()
            .chain(&logical_xs)
            .chain(&logical_zs)
            .map(SparsePauli::qubit_count);
        let qubit_count = qubit_counts.next().ok_or(CodeError::Empty)?;
        if let Some(found) = qubit_counts.find(|&count| count != qubit_count) {
            return Err(CodeError::QubitCountMismatch {
                expected: qubit_count,
                found,
            });
        }
        if logical_xs.len() != logical_zs.len() {
            return Err(CodeError::LogicalCountMismatch {
                x_count: logical_xs.len(),
                z_count: logical_zs.len(),
            });
        }

        for (second, generator) in generators.iter().enumerate() {
            if let Some(first) = generators[..second]
                .iter()
                .position(|earlier| !earlier.commutes_with(generator))
            {
                return Err(CodeError::AnticommutingGenerators { first, second });
            }
        }
        for (logical, operator) in logical_xs.iter().chain(&logical_zs).enumerate() {
            if let Some(generator) = generators
                .iter()
                .position(|generator| !generator.commutes_with(operator))
            {
                return Err(CodeError::LogicalNotInCentralizer { logical, generator });
            }
        }

        let supplied_count = generators.len();
        let mut echelon = SymplecticEchelon::new();
        let group_generators: Vec<SparsePauli> = generators
            .into_iter()
            .filter(|generator| echelon.insert(generator))
            .collect();
        let redundant_generator_count = supplied_count - group_generators.len();
        if redundant_generator_count > 0 {
            debug!(
                supplied = supplied_count,
                kept = group_generators.len(),
                "dropped dependent stabilizer generators"
            );
        }

        let logical_count = logical_xs.len();
        if qubit_count.checked_sub(logical_count) != Some(group_generators.len()) {
            return Err(CodeError::GeneratorCountMismatch {
                independent: group_generators.len(),
                expected: qubit_count.saturating_sub(logical_count),
                qubit_count,
                logical_count,
            });
        }

        Ok(StabilizerCode {
            qubit_count,
            group_generators,
            logical_xs,
            logical_zs,
            redundant_generator_count,
            echelon,
        })
    }

    #[must_use]
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    #[must_use]
    pub fn logical_qubit_count(&self) -> usize {
        self.logical_xs.len()
    }

    /// Independent generators, in the order they were supplied.
    #[must_use]
    pub fn group_generators(&self) -> &[SparsePauli] {
        &self.group_generators
    }

    #[must_use]
    pub fn logical_xs(&self) -> &[SparsePauli] {
        &self.logical_xs
    }

    #[must_use]
    pub fn logical_zs(&self) -> &[SparsePauli] {
        &self.logical_zs
    }

    /// Number of supplied generators dropped as products of earlier ones.
    #[must_use]
    pub fn redundant_generator_count(&self) -> usize {
        self.redundant_generator_count
    }

    /// Base-two logarithm of the stabilizer group order.
    #[must_use]
    pub fn log2_order(&self) -> usize {
        self.group_generators.len()
    }

    /// Whether `pauli` is a stabilizer group element, up to phase.
    #[must_use]
    pub fn is_stabilizer(&self, pauli: &SparsePauli) -> bool {
        self.echelon.contains(pauli)
    }

    /// All elements of the stabilizer group multiplied by `coset_rep`, or of the group
    /// itself when no representative is given.
    ///
    /// # Panics
    ///
    /// Panics if the code has more than [`MAX_ENUMERABLE_GENERATORS`] generators.
    pub fn stabilizer_group(&self, coset_rep: Option<&SparsePauli>) -> GroupElements<'_> {
        let start = coset_rep.map_or_else(|| SparsePauli::identity(self.qubit_count), SparsePauli::clone);
        GroupElements::new(&self.group_generators, start)
    }
}

/// Elements of a coset of the group generated by independent `generators`.
///
/// Elements come in Gray-code order: each one differs from the previous one by a
/// single generator, so every step costs one product.
#[derive(Clone, Debug)]
pub struct GroupElements<'code> {
    generators: &'code [SparsePauli],
    current: SparsePauli,
    next_index: u64,
    order: u64,
}

impl<'code> GroupElements<'code> {
    /// # Panics
    ///
    /// Panics if there are more than [`MAX_ENUMERABLE_GENERATORS`] generators.
    pub fn new(generators: &'code [SparsePauli], coset_rep: SparsePauli) -> Self {
        assert!(
            generators.len() <= MAX_ENUMERABLE_GENERATORS,
            "cannot enumerate a group with {} generators",
            generators.len()
        );
        GroupElements {
            generators,
            current: coset_rep,
            next_index: 0,
            order: 1u64 << generators.len(),
        }
    }
}

impl Iterator for GroupElements<'_> {
    type Item = SparsePauli;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.order {
            return None;
        }
        if self.next_index > 0 {
            let flipped = self.next_index.trailing_zeros() as usize;
            self.current *= &self.generators[flipped];
        }
        self.next_index += 1;
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.order - self.next_index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GroupElements<'_> {}

impl FusedIterator for GroupElements<'_> {}
