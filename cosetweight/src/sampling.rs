//! Uniform sampling of generators and group elements.

use rand::Rng;

use crate::algebra::{PauliOperator, StabilizerGroup};

/// A generator of `code` chosen uniformly, or `None` if the code has none.
pub fn random_generator<'code, C, R>(code: &'code C, rng: &mut R) -> Option<&'code C::Pauli>
where
    C: StabilizerGroup,
    R: Rng,
{
    let generators = code.group_generators();
    if generators.is_empty() {
        None
    } else {
        Some(&generators[rng.gen_range(0..generators.len())])
    }
}

/// `coset_rep` times a uniformly random element of the stabilizer group of `code`.
pub fn random_element<C, R>(code: &C, coset_rep: &C::Pauli, rng: &mut R) -> C::Pauli
where
    C: StabilizerGroup,
    R: Rng,
{
    let mut element = coset_rep.clone();
    mul_assign_random_subset(&mut element, code.group_generators(), rng);
    element
}

/// Multiplies `target` by each of `generators` with probability one half.
///
/// The subset is read from the bits of random 64-bit words, one bit per generator,
/// so independent generators give a uniformly random group element.
pub fn mul_assign_random_subset<P, R>(target: &mut P, generators: &[P], rng: &mut R)
where
    P: PauliOperator,
    R: Rng,
{
    for chunk in generators.chunks(u64::BITS as usize) {
        let mut remaining_bits: u64 = rng.gen();
        for generator in chunk {
            if remaining_bits & 1 != 0 {
                target.mul_assign_right(generator);
            }
            remaining_bits >>= 1;
        }
    }
}
