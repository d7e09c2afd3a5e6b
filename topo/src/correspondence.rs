//! Cross-referencing final molecules against a prior molecule mapping.
use std::hash::BuildHasherDefault;

use hashbrown::HashSet;
use mdptk_ids::IdVec;
use zwohash::ZwoHasher;

use crate::{Atom, Mol, PriorMol};

/// Builds the final-molecule → prior-molecules table.
///
/// Every atom that belongs to a final molecule *and* carries a prior
/// molecule id contributes that id to its molecule's set. Atoms without a
/// final molecule and atoms missing from the prior mapping are normal data
/// and contribute nothing. The table is a pure function of its two inputs;
/// bond processing order cannot influence it.
///
/// Each set is emitted deduplicated and sorted ascending, so the output is
/// deterministic and cheap to diff between runs.
pub fn correspondence(
    molecule_of: &IdVec<Atom, Option<Mol>>,
    mol_count: u32,
    prior: &IdVec<Atom, Option<PriorMol>>,
) -> IdVec<Mol, Vec<PriorMol>> {
    let mut sets: IdVec<Mol, HashSet<PriorMol, BuildHasherDefault<ZwoHasher>>> = Default::default();
    sets.resize_with(mol_count as usize, Default::default);
    for (atom, &mol) in molecule_of.iter() {
        let Some(mol) = mol else { continue };
        let Some(&Some(prior_mol)) = prior.get(atom) else {
            continue;
        };
        sets[mol].insert(prior_mol);
    }
    sets.into_iter()
        .map(|(_, set)| {
            let mut ids: Vec<PriorMol> = set.into_iter().collect();
            ids.sort_unstable();
            ids
        })
        .collect()
}
