//! Molecular topology reconstruction for simulation post-processing.
//!
//! Given the bond records of one snapshot, this crate determines the
//! connected components ("molecules") of the implied graph, assigns them
//! contiguous canonical ids, and reports how molecules after a bonding or
//! condensation event correspond to the prior molecules whose atoms now
//! compose them.
//!
//! The crate is the computational core only: parsing of data and dump file
//! layouts, frame seeking, and report formatting live in the surrounding
//! tooling, which feeds in raw bond pairs and an optional prior
//! atom-to-molecule mapping and renders the results. Each call to
//! [`reconstruct`] is an independent batch over one snapshot with no shared
//! state, so distinct frames may be processed on distinct threads.

mod atom;
mod canonical;
mod correspondence;
mod error;
mod union_find;

pub use atom::{Atom, Bond, Mol, PriorMol};
pub use canonical::{canonicalize, Canonical};
pub use correspondence::correspondence;
pub use error::TopologyError;
pub use union_find::MoleculeForest;

use mdptk_ids::IdVec;

#[cfg(test)]
#[path = "tests/test_reconstruct.rs"]
mod test_reconstruct;

/// Everything the reconstruction produces for one snapshot.
#[derive(Debug)]
pub struct Reconstruction {
    /// Final molecule of each atom in `1..=atom_count`; `None` for atoms no
    /// bond touched.
    pub molecule_of: IdVec<Atom, Option<Mol>>,
    /// Number of final molecules; ids span `1..=mol_count` with no gaps.
    pub mol_count: u32,
    /// For each final molecule, the ascending deduplicated prior molecule
    /// ids its atoms contributed.
    pub correspondence: IdVec<Mol, Vec<PriorMol>>,
}

/// Reconstructs the molecules of one snapshot from its bond records.
///
/// `atom_count` declares the valid atom range `1..=atom_count`. `bonds`
/// yields raw atom-number pairs exactly as read from the bond section of a
/// data file; duplicates and ordering do not affect the result. `prior` is
/// the (possibly partial) atom-to-molecule mapping of the pre-event
/// snapshot; pass an empty mapping when no prior snapshot exists, which
/// leaves every correspondence set empty.
///
/// A self-bond or a bond referencing an atom outside the declared range
/// aborts the batch with a [`TopologyError`]; no partial result is returned.
pub fn reconstruct(
    atom_count: u32,
    bonds: impl IntoIterator<Item = [u32; 2]>,
    prior: &IdVec<Atom, Option<PriorMol>>,
) -> Result<Reconstruction, TopologyError> {
    let mut forest = MoleculeForest::new(atom_count);
    let mut bond_records = 0usize;
    let mut merges = 0usize;
    for [a, b] in bonds {
        bond_records += 1;
        merges += forest.add_bond(a, b)? as usize;
    }
    let Canonical {
        molecule_of,
        mol_count,
    } = canonicalize(&mut forest);
    log::debug!(
        "{mol_count} molecules from {bond_records} bond records \
         ({merges} merges) over {atom_count} atoms"
    );
    let correspondence = correspondence(&molecule_of, mol_count, prior);
    Ok(Reconstruction {
        molecule_of,
        mol_count,
        correspondence,
    })
}
