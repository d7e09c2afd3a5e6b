//! Canonical renumbering of raw partition labels.
use std::hash::BuildHasherDefault;

use hashbrown::HashMap;
use mdptk_ids::{Id, IdVec};
use zwohash::ZwoHasher;

use crate::{Atom, Mol, MoleculeForest};

/// The per-atom molecule assignment produced by [`canonicalize`].
pub struct Canonical {
    /// Final molecule of each atom; `None` for atoms no bond touched.
    pub molecule_of: IdVec<Atom, Option<Mol>>,
    /// Number of molecules; canonical ids span `1..=mol_count` with no gaps.
    pub mol_count: u32,
}

/// Renumbers raw class labels into contiguous canonical molecule ids.
///
/// Atoms are scanned in ascending id order and each class receives the next
/// id from a counter starting at 1 when its first member is encountered.
/// Since a class's raw label is its smallest member, molecule 1 is always the
/// class containing the lowest-numbered bonded atom, and discovery order
/// equals ascending-minimum-atom-id order. The explicit scan makes the
/// result a deterministic function of the partition alone, independent of
/// any hash iteration order.
pub fn canonicalize(forest: &mut MoleculeForest) -> Canonical {
    let mut ids: HashMap<Atom, Mol, BuildHasherDefault<ZwoHasher>> = Default::default();
    let mut molecule_of: IdVec<Atom, Option<Mol>> = Default::default();
    for index in 0..forest.atom_count() as usize {
        let atom = Atom::from_id_index(index);
        let mol = forest.label(atom).map(|label| {
            let next = Mol::from_id_index(ids.len());
            *ids.entry(label).or_insert(next)
        });
        molecule_of.push(mol);
    }
    Canonical {
        molecule_of,
        mol_count: ids.len() as u32,
    }
}
