//! Error types for Pauli construction and stabilizer-code validation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PauliError {
    #[error("qubit {index} is out of range for a {qubit_count}-qubit operator")]
    QubitOutOfRange { index: usize, qubit_count: usize },

    #[error("invalid Pauli character '{0}'")]
    InvalidCharacter(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("a stabilizer code needs at least one generator or logical operator")]
    Empty,

    #[error("operator acts on {found} qubits, expected {expected}")]
    QubitCountMismatch { expected: usize, found: usize },

    #[error("{x_count} logical X operators do not pair with {z_count} logical Z operators")]
    LogicalCountMismatch { x_count: usize, z_count: usize },

    #[error("generators {first} and {second} anticommute")]
    AnticommutingGenerators { first: usize, second: usize },

    #[error("logical operator {logical} anticommutes with generator {generator}")]
    LogicalNotInCentralizer { logical: usize, generator: usize },

    #[error(
        "{independent} independent generators found, a code on {qubit_count} qubits \
         with {logical_count} logical qubits needs {expected}"
    )]
    GeneratorCountMismatch {
        independent: usize,
        expected: usize,
        qubit_count: usize,
        logical_count: usize,
    },
}
