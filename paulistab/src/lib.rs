//! Sparse Pauli operators and stabilizer codes.
//!
//! Operators are phase-free: a [`SparsePauli`] records which qubits carry an X
//! and which carry a Z component, which is all that weights, products and
//! commutation relations depend on. A [`StabilizerCode`] checks its generators,
//! reduces them to an independent set and enumerates the stabilizer group or any
//! of its cosets.

pub mod code;
pub mod echelon;
pub mod error;
pub mod label;
pub mod pauli;

#[cfg(feature = "serde")]
mod serde;

pub use code::{GroupElements, StabilizerCode, MAX_ENUMERABLE_GENERATORS};
pub use echelon::SymplecticEchelon;
pub use error::{CodeError, PauliError};
pub use label::PauliLabel;
pub use pauli::SparsePauli;
