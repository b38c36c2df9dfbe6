//! Error type shared by the lattice builder, the code factory and the samplers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("lattice dimensions must be positive, got {width}x{height}")]
    InvalidLattice { width: usize, height: usize },

    #[error("unknown proposal method '{0}', expected 'generator' or 'element'")]
    UnknownProposalMethod(String),

    #[error("thinning stride must be at least 1")]
    InvalidThinning,

    #[error("inverse temperature must be a non-negative number, got {0}")]
    InvalidInverseTemperature(f64),

    #[error("proposing single generators requires a code with at least one generator")]
    NoGenerators,

    #[error("operator acts on {found} qubits, the code has {expected}")]
    QubitCountMismatch { expected: usize, found: usize },

    #[error("cannot enumerate a stabilizer group with {generators} generators")]
    GroupTooLarge { generators: usize },

    #[error("Pauli algebra failure: {0}")]
    Algebra(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn algebra<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Algebra(Box::new(error))
    }
}
