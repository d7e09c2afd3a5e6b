//! Domain id types for atoms, molecules and bonds.
use std::fmt;
use std::num::NonZeroU32;

use mdptk_ids::{Id, UnorderedPair};

/// A particle id as it appears in simulation data and dump files.
///
/// Atom ids are 1-based and dense over `1..=N` for a snapshot declaring `N`
/// atoms. The `NonZeroU32` representation leaves a niche, so `Option<Atom>`
/// is the same size as `Atom` and per-atom tables of optional ids stay
/// compact.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Atom(NonZeroU32);

impl Atom {
    /// Creates an atom from its 1-based number as written in a data file.
    ///
    /// Returns `None` for the number 0, which no atom carries.
    #[inline]
    pub fn from_number(number: u32) -> Option<Self> {
        NonZeroU32::new(number).map(Atom)
    }

    /// Returns the 1-based number of this atom.
    #[inline]
    pub fn number(self) -> u32 {
        self.0.get()
    }
}

impl Id for Atom {
    const MAX_ID_INDEX: usize = u32::MAX as usize - 1;

    #[inline]
    fn try_from_id_index(index: usize) -> Option<Self> {
        let number = u32::try_from(index).ok()?.checked_add(1)?;
        Some(Atom(NonZeroU32::new(number)?))
    }

    #[inline]
    fn id_index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({})", self.number())
    }
}

/// A canonical molecule id.
///
/// Canonical ids are contiguous over `1..=mol_count`, assigned in
/// ascending-atom-id first-discovery order; "no molecule" (an isolated atom)
/// is `Option::<Mol>::None` rather than a sentinel value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Mol(NonZeroU32);

impl Mol {
    /// Returns the 1-based number of this molecule.
    #[inline]
    pub fn number(self) -> u32 {
        self.0.get()
    }
}

impl Id for Mol {
    const MAX_ID_INDEX: usize = u32::MAX as usize - 1;

    #[inline]
    fn try_from_id_index(index: usize) -> Option<Self> {
        let number = u32::try_from(index).ok()?.checked_add(1)?;
        Some(Mol(NonZeroU32::new(number)?))
    }

    #[inline]
    fn id_index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Debug for Mol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mol({})", self.number())
    }
}

/// A molecule id from a prior snapshot's mapping.
///
/// These come from an external source (e.g. the molecule column of a
/// pre-event data file) and live in an arbitrary id space; nothing here
/// assumes they are dense or small.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PriorMol(pub u32);

/// An unordered pair of distinct atoms, as read from a bond record.
///
/// The pair representation keeps the smaller atom first, so duplicate bond
/// records compare equal no matter which way around the file wrote them.
/// Validation against the declared atom range happens when a raw record is
/// applied to a [`MoleculeForest`](crate::MoleculeForest).
pub type Bond = UnorderedPair<Atom>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_numbering_is_one_based() {
        assert_eq!(Atom::from_number(0), None);
        let atom = Atom::from_number(7).unwrap();
        assert_eq!(atom.number(), 7);
        assert_eq!(atom.id_index(), 6);
        assert_eq!(Atom::from_id_index(6), atom);
    }

    #[test]
    fn option_atom_is_free() {
        assert_eq!(
            std::mem::size_of::<Option<Atom>>(),
            std::mem::size_of::<Atom>()
        );
        assert_eq!(
            std::mem::size_of::<Option<Mol>>(),
            std::mem::size_of::<Mol>()
        );
    }
}
