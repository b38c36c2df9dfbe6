//! Metropolis random walk over a stabilizer coset, biased towards low weight.
//!
//! Each step multiplies the current operator by a random stabilizer and accepts
//! the product according to the Metropolis rule at inverse temperature `beta`.
//! Weights are recorded after a burn-in and then every `thinning` steps.

use std::str::FromStr;

use derive_more::Display;
use rand::Rng;
use tracing::debug;

use crate::algebra::{PauliOperator, StabilizerGroup};
use crate::error::{Error, Result};
use crate::histogram::{coset_representative, WeightHistogram};
use crate::sampling::{random_element, random_generator};

pub const DEFAULT_METROPOLIS_TRIALS: usize = 10_000;

/// How the stabilizer multiplying the current state is chosen at each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ProposalMethod {
    /// A single generator, uniformly.
    #[default]
    #[display("generator")]
    Generator,
    /// A uniformly random element of the whole group.
    #[display("element")]
    Element,
}

impl FromStr for ProposalMethod {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "generator" | "gen" => Ok(ProposalMethod::Generator),
            "element" | "elem" => Ok(ProposalMethod::Element),
            _ => Err(Error::UnknownProposalMethod(name.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MetropolisConfig {
    /// Inverse temperature; zero accepts every proposal.
    pub beta: f64,
    /// Steps `0..=burn_in` are never recorded.
    pub burn_in: usize,
    /// Stride between recorded steps after the burn-in.
    pub thinning: usize,
    /// Total number of steps.
    pub trials: usize,
    pub method: ProposalMethod,
}

impl Default for MetropolisConfig {
    fn default() -> Self {
        MetropolisConfig {
            beta: 0.0,
            burn_in: 0,
            thinning: 1,
            trials: DEFAULT_METROPOLIS_TRIALS,
            method: ProposalMethod::Generator,
        }
    }
}

impl MetropolisConfig {
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    #[must_use]
    pub fn with_burn_in(mut self, burn_in: usize) -> Self {
        self.burn_in = burn_in;
        self
    }

    #[must_use]
    pub fn with_thinning(mut self, thinning: usize) -> Self {
        self.thinning = thinning;
        self
    }

    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: ProposalMethod) -> Self {
        self.method = method;
        self
    }

    /// # Errors
    ///
    /// * [`Error::InvalidThinning`] if `thinning` is zero.
    /// * [`Error::InvalidInverseTemperature`] if `beta` is negative or NaN.
    pub fn validate(&self) -> Result<()> {
        if self.thinning == 0 {
            return Err(Error::InvalidThinning);
        }
        if self.beta.is_nan() || self.beta < 0.0 {
            return Err(Error::InvalidInverseTemperature(self.beta));
        }
        Ok(())
    }

    /// Whether the weight after step `step` (counted from zero) goes into the histogram.
    pub fn records_step(&self, step: usize) -> bool {
        step > self.burn_in && (step - self.burn_in - 1).checked_rem(self.thinning) == Some(0)
    }

    /// Number of steps in `0..trials` for which [`records_step`](Self::records_step) holds.
    pub fn recorded_sample_count(&self) -> usize {
        if self.thinning == 0 {
            return 0;
        }
        let recordable_steps = self.trials.saturating_sub(self.burn_in.saturating_add(1));
        recordable_steps.div_ceil(self.thinning)
    }
}

/// Metropolis acceptance rule.
///
/// Moves that do not increase the weight are always accepted, as is everything at
/// `beta == 0`; neither case consumes randomness. Otherwise one uniform draw `u` is
/// taken and the move is accepted iff `u < exp(-beta * increase)`.
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
pub fn accepts<R: Rng>(beta: f64, current_weight: usize, candidate_weight: usize, rng: &mut R) -> bool {
    if candidate_weight <= current_weight || beta == 0.0 {
        return true;
    }
    let increase = (candidate_weight - current_weight) as f64;
    rng.gen::<f64>() < (-beta * increase).exp()
}

/// State of a single Metropolis chain.
#[derive(Clone, Debug)]
pub struct MetropolisChain<P> {
    state: P,
    weight: usize,
    beta: f64,
    accepted_moves: u64,
}

impl<P: PauliOperator> MetropolisChain<P> {
    #[must_use]
    pub fn new(start: P, beta: f64) -> Self {
        let weight = start.weight();
        MetropolisChain {
            state: start,
            weight,
            beta,
            accepted_moves: 0,
        }
    }

    /// Proposes `stabilizer · state` and moves there if [`accepts`] allows it.
    /// Returns whether the move was taken.
    pub fn propose<R: Rng>(&mut self, stabilizer: &P, rng: &mut R) -> bool {
        let candidate = stabilizer.multiply(&self.state);
        let candidate_weight = candidate.weight();
        if !accepts(self.beta, self.weight, candidate_weight, rng) {
            return false;
        }
        self.state = candidate;
        self.weight = candidate_weight;
        self.accepted_moves += 1;
        true
    }

    pub fn state(&self) -> &P {
        &self.state
    }

    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn accepted_moves(&self) -> u64 {
        self.accepted_moves
    }

    pub fn into_state(self) -> P {
        self.state
    }
}

#[derive(Clone, Debug)]
pub struct MetropolisOutcome<P> {
    /// Holds [`MetropolisConfig::recorded_sample_count`] samples.
    pub histogram: WeightHistogram,
    pub final_state: P,
    pub accepted_moves: u64,
}

/// Runs `config.trials` Metropolis steps starting from `start`, or from the identity.
///
/// The walk stays inside the coset of its start state.
///
/// # Errors
///
/// * Any error of [`MetropolisConfig::validate`].
/// * [`Error::QubitCountMismatch`] if `start` does not act on the code's qubits.
/// * [`Error::NoGenerators`] if single generators are proposed on a code without any.
pub fn metropolis<C, R>(
    code: &C,
    start: Option<&C::Pauli>,
    config: &MetropolisConfig,
    rng: &mut R,
) -> Result<MetropolisOutcome<C::Pauli>>
where
    C: StabilizerGroup,
    R: Rng,
{
    config.validate()?;
    if config.method == ProposalMethod::Generator && code.group_generators().is_empty() {
        return Err(Error::NoGenerators);
    }

    let qubit_count = code.qubit_count();
    let start = coset_representative(code, start)?;
    let identity = C::Pauli::identity(qubit_count);
    let mut chain = MetropolisChain::new(start, config.beta);
    let mut histogram = WeightHistogram::new(qubit_count);

    for step in 0..config.trials {
        match config.method {
            ProposalMethod::Generator => {
                let generator = random_generator(code, rng).ok_or(Error::NoGenerators)?;
                chain.propose(generator, rng);
            }
            ProposalMethod::Element => {
                let stabilizer = random_element(code, &identity, rng);
                chain.propose(&stabilizer, rng);
            }
        }
        if config.records_step(step) {
            histogram.record(chain.weight());
        }
    }

    debug!(
        trials = config.trials,
        recorded = histogram.total(),
        accepted = chain.accepted_moves(),
        method = %config.method,
        beta = config.beta,
        "metropolis chain finished"
    );
    let accepted_moves = chain.accepted_moves();
    Ok(MetropolisOutcome {
        histogram,
        final_state: chain.into_state(),
        accepted_moves,
    })
}
