#![allow(missing_docs)]

use super::*;
use mdptk_ids::{Id, IdVec};
use rand::prelude::*;
use rand_pcg::Pcg64;

fn atom(number: u32) -> Atom {
    Atom::from_number(number).unwrap()
}

fn mol(number: u32) -> Mol {
    Mol::from_id_index(number as usize - 1)
}

fn prior_map(atom_count: u32, entries: &[(u32, u32)]) -> IdVec<Atom, Option<PriorMol>> {
    let mut map: IdVec<Atom, Option<PriorMol>> = Default::default();
    map.resize(atom_count as usize, None);
    for &(number, prior) in entries {
        map[atom(number)] = Some(PriorMol(prior));
    }
    map
}

fn no_prior(atom_count: u32) -> IdVec<Atom, Option<PriorMol>> {
    prior_map(atom_count, &[])
}

#[test]
fn two_chains_and_a_pair() {
    // atoms 1..6; bonds (1,2),(3,4),(2,3),(5,6)
    let result = reconstruct(6, [[1, 2], [3, 4], [2, 3], [5, 6]], &no_prior(6)).unwrap();
    assert_eq!(result.mol_count, 2);
    let expected: Vec<Option<Mol>> = vec![
        Some(mol(1)),
        Some(mol(1)),
        Some(mol(1)),
        Some(mol(1)),
        Some(mol(2)),
        Some(mol(2)),
    ];
    assert_eq!(result.molecule_of.values(), &expected[..]);
}

#[test]
fn no_bonds_means_no_molecules() {
    let result = reconstruct(4, [], &no_prior(4)).unwrap();
    assert_eq!(result.mol_count, 0);
    assert_eq!(result.molecule_of.values(), &[None; 4]);
    assert!(result.correspondence.is_empty());
}

#[test]
fn condensation_merges_prior_molecules() {
    // prior molecule 10 was {1,2}, prior molecule 20 was {3,4}; the new bond
    // (2,3) condenses them into one molecule
    let prior = prior_map(4, &[(1, 10), (2, 10), (3, 20), (4, 20)]);
    let result = reconstruct(4, [[1, 2], [3, 4], [2, 3]], &prior).unwrap();
    assert_eq!(result.mol_count, 1);
    assert_eq!(result.correspondence[mol(1)], vec![PriorMol(10), PriorMol(20)]);
}

#[test]
fn isolated_atoms_contribute_nothing() {
    // only the new bond is listed; atoms 1 and 4 are isolated and must not
    // leak their prior ids into the table
    let prior = prior_map(4, &[(1, 10), (2, 10), (3, 20), (4, 20)]);
    let result = reconstruct(4, [[2, 3]], &prior).unwrap();
    assert_eq!(result.mol_count, 1);
    assert_eq!(result.molecule_of[atom(1)], None);
    assert_eq!(result.molecule_of[atom(4)], None);
    assert_eq!(result.correspondence[mol(1)], vec![PriorMol(10), PriorMol(20)]);
}

#[test]
fn atoms_absent_from_prior_mapping_are_fine() {
    let prior = prior_map(6, &[(1, 3)]);
    let result = reconstruct(6, [[1, 2], [4, 5]], &prior).unwrap();
    assert_eq!(result.mol_count, 2);
    assert_eq!(result.correspondence[mol(1)], vec![PriorMol(3)]);
    assert_eq!(result.correspondence[mol(2)], vec![]);
}

#[test]
fn correspondence_sets_are_deduplicated_and_sorted() {
    let prior = prior_map(5, &[(1, 9), (2, 2), (3, 9), (4, 2), (5, 7)]);
    let result = reconstruct(5, [[1, 2], [2, 3], [3, 4], [4, 5]], &prior).unwrap();
    assert_eq!(result.mol_count, 1);
    assert_eq!(
        result.correspondence[mol(1)],
        vec![PriorMol(2), PriorMol(7), PriorMol(9)]
    );
}

#[test]
fn canonical_ids_are_gap_free_and_discovery_ordered() {
    // molecule of the lowest-numbered bonded atom gets id 1 even when its
    // bonds appear last in the file
    let result = reconstruct(7, [[6, 7], [4, 5], [1, 3]], &no_prior(7)).unwrap();
    assert_eq!(result.mol_count, 3);
    assert_eq!(result.molecule_of[atom(1)], Some(mol(1)));
    assert_eq!(result.molecule_of[atom(3)], Some(mol(1)));
    assert_eq!(result.molecule_of[atom(4)], Some(mol(2)));
    assert_eq!(result.molecule_of[atom(6)], Some(mol(3)));
    assert_eq!(result.correspondence.len(), 3);
}

#[test]
fn malformed_records_abort_the_batch() {
    assert_eq!(
        reconstruct(4, [[1, 2], [0, 5]], &no_prior(4)).unwrap_err(),
        TopologyError::AtomOutOfRange {
            atom: 0,
            atom_count: 4
        }
    );
    assert_eq!(
        reconstruct(4, [[2, 2]], &no_prior(4)).unwrap_err(),
        TopologyError::SelfBond { atom: 2 }
    );
}

#[test]
fn duplicate_bonds_leave_the_result_unchanged() {
    let once = reconstruct(5, [[1, 2], [2, 3]], &no_prior(5)).unwrap();
    let thrice = reconstruct(
        5,
        [[1, 2], [2, 3], [1, 2], [2, 1], [3, 1]],
        &no_prior(5),
    )
    .unwrap();
    assert_eq!(once.molecule_of, thrice.molecule_of);
    assert_eq!(once.mol_count, thrice.mol_count);
}

#[test]
fn reconstruction_is_deterministic_and_order_invariant() {
    let mut rng = Pcg64::seed_from_u64(0x6672_616d);
    let atom_count = 30;
    let mut bonds = Vec::new();
    for _ in 0..45 {
        let a = rng.gen_range(1..=atom_count);
        let b = rng.gen_range(1..=atom_count);
        if a != b {
            bonds.push([a, b]);
        }
    }
    let prior_entries: Vec<(u32, u32)> =
        (1..=atom_count).map(|n| (n, rng.gen_range(100..110))).collect();
    let prior = prior_map(atom_count, &prior_entries);

    let reference = reconstruct(atom_count, bonds.iter().copied(), &prior).unwrap();
    // identical input, identical output
    let again = reconstruct(atom_count, bonds.iter().copied(), &prior).unwrap();
    assert_eq!(reference.molecule_of, again.molecule_of);
    assert_eq!(reference.correspondence, again.correspondence);

    for _ in 0..10 {
        bonds.shuffle(&mut rng);
        let shuffled = reconstruct(atom_count, bonds.iter().copied(), &prior).unwrap();
        assert_eq!(reference.molecule_of, shuffled.molecule_of);
        assert_eq!(reference.mol_count, shuffled.mol_count);
        assert_eq!(reference.correspondence, shuffled.correspondence);
    }
}

#[test]
fn connected_atoms_share_a_molecule() {
    let mut rng = Pcg64::seed_from_u64(0x626f_6e64);
    let atom_count = 20;
    let mut bonds = Vec::new();
    for _ in 0..25 {
        let a = rng.gen_range(1..=atom_count);
        let b = rng.gen_range(1..=atom_count);
        if a != b {
            bonds.push([a, b]);
        }
    }
    let result = reconstruct(atom_count, bonds.iter().copied(), &no_prior(atom_count)).unwrap();

    let mut forest = MoleculeForest::new(atom_count);
    for &[a, b] in &bonds {
        forest.add_bond(a, b).unwrap();
    }
    for a in 1..=atom_count {
        for b in 1..=atom_count {
            let same = result.molecule_of[atom(a)].is_some()
                && result.molecule_of[atom(a)] == result.molecule_of[atom(b)];
            let connected = a != b && forest.connected(atom(a), atom(b));
            if a != b {
                assert_eq!(same, connected, "atoms {a} and {b}");
            }
        }
    }
}
