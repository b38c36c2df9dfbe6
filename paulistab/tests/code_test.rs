use itertools::Itertools;
use paulistab::{CodeError, SparsePauli, StabilizerCode};
use proptest::prelude::*;
use std::collections::HashSet;

fn paulis(strings: &[&str]) -> Vec<SparsePauli> {
    strings.iter().map(|string| string.parse().unwrap()).collect()
}

fn repetition_code() -> StabilizerCode {
    StabilizerCode::new(paulis(&["ZZI", "IZZ"]), paulis(&["XXX"]), paulis(&["ZII"])).unwrap()
}

fn steane_code() -> StabilizerCode {
    StabilizerCode::new(
        paulis(&[
            "IIIXXXX", "IXXIIXX", "XIXIXIX", "IIIZZZZ", "IZZIIZZ", "ZIZIZIZ",
        ]),
        paulis(&["XXXXXXX"]),
        paulis(&["ZZZZZZZ"]),
    )
    .unwrap()
}

#[test]
fn repetition_code_counts() {
    let code = repetition_code();
    assert_eq!(code.qubit_count(), 3);
    assert_eq!(code.logical_qubit_count(), 1);
    assert_eq!(code.group_generators().len(), 2);
    assert_eq!(code.redundant_generator_count(), 0);
    assert_eq!(code.log2_order(), 2);
}

#[test]
fn dependent_generators_are_dropped() {
    let code = StabilizerCode::new(paulis(&["ZZI", "IZZ", "ZIZ"]), paulis(&["XXX"]), paulis(&["ZII"])).unwrap();
    assert_eq!(code.group_generators(), paulis(&["ZZI", "IZZ"]).as_slice());
    assert_eq!(code.redundant_generator_count(), 1);
}

#[test]
fn identity_generator_is_dropped() {
    let code = StabilizerCode::new(paulis(&["III", "ZZI", "IZZ"]), paulis(&["XXX"]), paulis(&["ZII"])).unwrap();
    assert_eq!(code.group_generators().len(), 2);
    assert_eq!(code.redundant_generator_count(), 1);
}

#[test]
fn empty_code_is_rejected() {
    assert_eq!(StabilizerCode::new(vec![], vec![], vec![]).unwrap_err(), CodeError::Empty);
}

#[test]
fn qubit_count_mismatch_is_rejected() {
    let error = StabilizerCode::new(paulis(&["ZZI", "IZZI"]), paulis(&["XXX"]), paulis(&["ZII"])).unwrap_err();
    assert_eq!(error, CodeError::QubitCountMismatch { expected: 3, found: 4 });
}

#[test]
fn unpaired_logicals_are_rejected() {
    let error = StabilizerCode::new(paulis(&["ZZI", "IZZ"]), paulis(&["XXX"]), vec![]).unwrap_err();
    assert_eq!(error, CodeError::LogicalCountMismatch { x_count: 1, z_count: 0 });
}

#[test]
fn anticommuting_generators_are_rejected() {
    let error = StabilizerCode::new(paulis(&["ZZI", "XII"]), paulis(&["IXX"]), paulis(&["IZZ"])).unwrap_err();
    assert_eq!(error, CodeError::AnticommutingGenerators { first: 0, second: 1 });
}

#[test]
fn logical_outside_centralizer_is_rejected() {
    let error = StabilizerCode::new(paulis(&["ZZI", "IZZ"]), paulis(&["XII"]), paulis(&["ZII"])).unwrap_err();
    assert_eq!(error, CodeError::LogicalNotInCentralizer { logical: 0, generator: 0 });
}

#[test]
fn too_few_generators_are_rejected() {
    let error = StabilizerCode::new(paulis(&["ZZI"]), paulis(&["XXX"]), paulis(&["ZII"])).unwrap_err();
    assert_eq!(
        error,
        CodeError::GeneratorCountMismatch {
            independent: 1,
            expected: 2,
            qubit_count: 3,
            logical_count: 1,
        }
    );
}

#[test]
fn stabilizer_group_has_distinct_elements() {
    let code = steane_code();
    let elements: Vec<SparsePauli> = code.stabilizer_group(None).collect();
    assert_eq!(elements.len(), 64);
    let distinct: HashSet<SparsePauli> = elements.iter().cloned().collect();
    assert_eq!(distinct.len(), 64);
    assert!(elements.iter().all(|element| code.is_stabilizer(element)));
}

#[test]
fn stabilizer_group_starts_at_coset_rep() {
    let code = repetition_code();
    let coset_rep: SparsePauli = "XII".parse().unwrap();
    let elements: Vec<String> = code.stabilizer_group(Some(&coset_rep)).map(|element| element.to_string()).collect();
    assert_eq!(elements, vec!["XII", "YZI", "YIZ", "XZZ"]);
}

#[test]
fn stabilizer_group_reports_exact_size() {
    let code = steane_code();
    let mut elements = code.stabilizer_group(None);
    assert_eq!(elements.len(), 64);
    elements.next();
    assert_eq!(elements.len(), 63);
    assert_eq!(elements.by_ref().count(), 63);
    assert_eq!(elements.next(), None);
}

#[test]
fn stabilizer_group_is_restartable() {
    let code = steane_code();
    let first_pass: Vec<SparsePauli> = code.stabilizer_group(None).collect();
    let second_pass: Vec<SparsePauli> = code.stabilizer_group(None).collect();
    assert_eq!(first_pass, second_pass);
}

#[test]
fn steane_weight_enumerator() {
    let code = steane_code();
    let mut counts = [0usize; 8];
    for element in code.stabilizer_group(None) {
        counts[element.weight()] += 1;
    }
    assert_eq!(counts, [1, 0, 0, 0, 21, 0, 42, 0]);
}

#[test]
fn kept_generators_commute_and_are_distinct() {
    let code = steane_code();
    assert!(code
        .group_generators()
        .iter()
        .tuple_combinations()
        .all(|(first, second)| first.commutes_with(second)));
    assert!(code
        .group_generators()
        .iter()
        .tuple_combinations()
        .all(|(first, second)| first != second));
}

#[test]
fn logicals_are_not_stabilizers() {
    let code = steane_code();
    assert!(!code.is_stabilizer(&code.logical_xs()[0]));
    assert!(!code.is_stabilizer(&code.logical_zs()[0]));
}

proptest! {
    #[test]
    fn coset_elements_share_a_coset(bits in prop::collection::vec(any::<bool>(), 7)) {
        let code = steane_code();
        let letters: String = bits.iter().map(|&bit| if bit { 'X' } else { 'I' }).collect();
        let coset_rep: SparsePauli = letters.parse().unwrap();
        for element in code.stabilizer_group(Some(&coset_rep)) {
            prop_assert!(code.is_stabilizer(&(&element * &coset_rep)));
        }
    }
}
