//! The operations the histogram algorithms need from a Pauli algebra.
//!
//! The samplers only ever build sparse operators, multiply them, read their
//! weights and walk a stabilizer group, so any implementation of these traits can
//! be plugged in. [`paulistab`] provides the implementation used by default.

use paulistab::{CodeError, PauliError, PauliLabel, SparsePauli, StabilizerCode};

pub trait PauliOperator: Clone {
    type Error: std::error::Error + Send + Sync + 'static;

    fn identity(qubit_count: usize) -> Self;

    /// Operator with the given letters on the listed qubits and identity elsewhere.
    ///
    /// # Errors
    ///
    /// Implementations reject qubit indices outside `0..qubit_count`.
    fn from_sparse<Pairs>(pairs: Pairs, qubit_count: usize) -> Result<Self, Self::Error>
    where
        Pairs: IntoIterator<Item = (usize, PauliLabel)>;

    fn qubit_count(&self) -> usize;

    fn weight(&self) -> usize;

    fn mul_assign_right(&mut self, rhs: &Self);

    #[must_use]
    fn multiply(&self, rhs: &Self) -> Self {
        let mut product = self.clone();
        product.mul_assign_right(rhs);
        product
    }
}

/// Read-only view of a stabilizer code.
pub trait StabilizerGroup {
    type Pauli: PauliOperator;

    /// Largest generator count for which [`elements`](Self::elements) can walk the group.
    const MAX_ENUMERABLE_GENERATORS: usize;

    fn qubit_count(&self) -> usize;

    fn logical_qubit_count(&self) -> usize;

    /// Independent generators; there are `qubit_count - logical_qubit_count` of them.
    fn group_generators(&self) -> &[Self::Pauli];

    /// Every element of the group multiplied by `coset_rep`, each exactly once.
    fn elements(&self, coset_rep: &Self::Pauli) -> impl Iterator<Item = Self::Pauli>;
}

pub trait CodeBuilder: StabilizerGroup + Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Implementations reject operator sets that do not form a valid stabilizer code.
    fn build(
        z_generators: Vec<Self::Pauli>,
        x_generators: Vec<Self::Pauli>,
        logical_xs: Vec<Self::Pauli>,
        logical_zs: Vec<Self::Pauli>,
    ) -> Result<Self, Self::Error>;
}

impl PauliOperator for SparsePauli {
    type Error = PauliError;

    #[inline]
    fn identity(qubit_count: usize) -> Self {
        SparsePauli::identity(qubit_count)
    }

    fn from_sparse<Pairs>(pairs: Pairs, qubit_count: usize) -> Result<Self, Self::Error>
    where
        Pairs: IntoIterator<Item = (usize, PauliLabel)>,
    {
        SparsePauli::from_sparse(pairs, qubit_count)
    }

    #[inline]
    fn qubit_count(&self) -> usize {
        SparsePauli::qubit_count(self)
    }

    #[inline]
    fn weight(&self) -> usize {
        SparsePauli::weight(self)
    }

    #[inline]
    fn mul_assign_right(&mut self, rhs: &Self) {
        *self *= rhs;
    }
}

impl StabilizerGroup for StabilizerCode {
    type Pauli = SparsePauli;

    const MAX_ENUMERABLE_GENERATORS: usize = paulistab::MAX_ENUMERABLE_GENERATORS;

    fn qubit_count(&self) -> usize {
        StabilizerCode::qubit_count(self)
    }

    fn logical_qubit_count(&self) -> usize {
        StabilizerCode::logical_qubit_count(self)
    }

    fn group_generators(&self) -> &[SparsePauli] {
        StabilizerCode::group_generators(self)
    }

    fn elements(&self, coset_rep: &SparsePauli) -> impl Iterator<Item = SparsePauli> {
        self.stabilizer_group(Some(coset_rep))
    }
}

impl CodeBuilder for StabilizerCode {
    type Error = CodeError;

    fn build(
        mut z_generators: Vec<SparsePauli>,
        x_generators: Vec<SparsePauli>,
        logical_xs: Vec<SparsePauli>,
        logical_zs: Vec<SparsePauli>,
    ) -> Result<Self, Self::Error> {
        z_generators.extend(x_generators);
        StabilizerCode::new(z_generators, logical_xs, logical_zs)
    }
}
