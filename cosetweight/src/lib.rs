//! Weight distributions of stabilizer cosets, with the toric code as the main example.
//!
//! [`toric_code`] builds the toric code on a periodic lattice. For any stabilizer
//! code, [`coset_hist`] counts the weights of every element of a coset exactly,
//! [`freq_hist`] estimates them by uniform sampling and [`metropolis`] samples them
//! with a bias towards low weight.
//!
//! The algorithms only see the code through the traits in [`algebra`], which are
//! implemented for the [`paulistab`] types.

pub mod algebra;
pub mod error;
pub mod histogram;
pub mod lattice;
pub mod metropolis;
pub mod sampling;
pub mod toric;

#[cfg(test)]
pub(crate) mod statistical_testing;

pub use algebra::{CodeBuilder, PauliOperator, StabilizerGroup};
pub use error::{Error, Result};
pub use histogram::{coset_hist, freq_hist, WeightHistogram, DEFAULT_SAMPLED_TRIALS};
pub use lattice::{squares, starts, stars, toric_log_xs, toric_log_zs, LatticeShape};
pub use metropolis::{
    accepts, metropolis, MetropolisChain, MetropolisConfig, MetropolisOutcome, ProposalMethod,
    DEFAULT_METROPOLIS_TRIALS,
};
pub use sampling::{mul_assign_random_subset, random_element, random_generator};
pub use toric::{iter_pauli, toric_code, toric_code_square};
