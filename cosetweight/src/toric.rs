//! Toric code construction from lattice supports.

use paulistab::PauliLabel;
use tracing::debug;

use crate::algebra::{CodeBuilder, PauliOperator};
use crate::error::{Error, Result};
use crate::lattice::LatticeShape;

/// Operator on `qubit_count` qubits with `label` on each of `indices`.
///
/// # Errors
///
/// Returns [`Error::Algebra`] if the algebra rejects an index.
pub fn iter_pauli<P, Indices>(indices: Indices, label: PauliLabel, qubit_count: usize) -> Result<P>
where
    P: PauliOperator,
    Indices: IntoIterator<Item = usize>,
{
    P::from_sparse(indices.into_iter().map(|index| (index, label)), qubit_count).map_err(Error::algebra)
}

/// Toric code on an `n`×`m` torus: Z generators on squares, X generators on stars.
///
/// # Errors
///
/// * [`Error::InvalidLattice`] if `n` or `m` is zero.
/// * [`Error::Algebra`] if the code builder rejects the operators, which happens for
///   the degenerate lattices with `n == 1` or `m == 1`.
pub fn toric_code<C: CodeBuilder>(n: usize, m: usize) -> Result<C> {
    let shape = LatticeShape::new(n, m)?;
    let qubit_count = shape.qubit_count();

    let z_generators = shape
        .squares()
        .map(|support| iter_pauli(support, PauliLabel::Z, qubit_count))
        .collect::<Result<Vec<C::Pauli>>>()?;
    let x_generators = shape
        .stars()
        .map(|support| iter_pauli(support, PauliLabel::X, qubit_count))
        .collect::<Result<Vec<C::Pauli>>>()?;
    let logical_xs = shape
        .logical_xs()
        .into_iter()
        .map(|support| iter_pauli(support, PauliLabel::X, qubit_count))
        .collect::<Result<Vec<C::Pauli>>>()?;
    let logical_zs = shape
        .logical_zs()
        .into_iter()
        .map(|support| iter_pauli(support, PauliLabel::Z, qubit_count))
        .collect::<Result<Vec<C::Pauli>>>()?;

    debug!(
        width = n,
        height = m,
        qubits = qubit_count,
        squares = z_generators.len(),
        stars = x_generators.len(),
        "building toric code"
    );
    C::build(z_generators, x_generators, logical_xs, logical_zs).map_err(Error::algebra)
}

/// Toric code on an `n`×`n` torus.
///
/// # Errors
///
/// See [`toric_code`].
pub fn toric_code_square<C: CodeBuilder>(n: usize) -> Result<C> {
    toric_code(n, n)
}
