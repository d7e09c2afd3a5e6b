//! `MoleculeForest` incrementally tracks bond connectivity between atoms.
use mdptk_ids::{Id, IdVec};

use crate::{Atom, Bond, TopologyError};

#[cfg(test)]
#[path = "tests/test_union_find.rs"]
mod test_union_find;

/// Per-atom state of the forest.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Node {
    /// No bond has touched this atom yet.
    Isolated,
    /// Class representative, tracking the member count and the smallest atom
    /// id ever merged into the class.
    Root { size: u32, min: Atom },
    /// Interior tree node pointing towards the representative.
    Child(Atom),
}

/// Union-find forest over the atoms of one snapshot.
///
/// Bonds are consumed one at a time; after each, the partition reflects the
/// connectivity of all bonds seen so far. The externally visible *raw label*
/// of a bonded atom is the smallest atom id in its class, matching the
/// convention that the lowest-numbered member names the molecule; atoms that
/// no bond has touched carry no label.
///
/// Internally this is a forest with union by size and path halving, so the
/// total cost over a snapshot is near-linear in the number of bonds. The
/// smallest member of each class is tracked per root, which keeps the label
/// contract observable without ever rescanning the atom range.
///
/// The atom range `1..=atom_count` is fixed at construction; bond records are
/// validated against it and malformed records abort with a
/// [`TopologyError`].
pub struct MoleculeForest {
    nodes: IdVec<Atom, Node>,
}

impl MoleculeForest {
    /// Creates a forest for `atom_count` atoms, all initially isolated.
    pub fn new(atom_count: u32) -> Self {
        let mut nodes = IdVec::default();
        nodes.resize(atom_count as usize, Node::Isolated);
        MoleculeForest { nodes }
    }

    /// Returns the declared number of atoms.
    pub fn atom_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    fn check_atom(&self, number: u32) -> Result<Atom, TopologyError> {
        match Atom::from_number(number) {
            Some(atom) if atom.id_index() < self.nodes.len() => Ok(atom),
            _ => Err(TopologyError::AtomOutOfRange {
                atom: number,
                atom_count: self.atom_count(),
            }),
        }
    }

    /// Validates a raw bond record against the declared atom range.
    ///
    /// Self-bonds are rejected as malformed rather than silently absorbed.
    pub fn check_bond(&self, a: u32, b: u32) -> Result<Bond, TopologyError> {
        if a == b {
            return Err(TopologyError::SelfBond { atom: a });
        }
        Ok(Bond::new([self.check_atom(a)?, self.check_atom(b)?]))
    }

    /// Applies one bond record, given as the raw atom numbers of the record.
    ///
    /// Returns `true` if the bond joined two previously separate classes and
    /// `false` for a bond between already connected atoms, which is a no-op
    /// that leaves the partition untouched.
    pub fn add_bond(&mut self, a: u32, b: u32) -> Result<bool, TopologyError> {
        let bond = self.check_bond(a, b)?;
        Ok(self.merge(bond))
    }

    /// Merges the classes of an already validated bond.
    pub fn merge(&mut self, bond: Bond) -> bool {
        let [a, b] = bond.into_values();
        self.ensure_root(a);
        self.ensure_root(b);
        let root_a = self.find_root(a);
        let root_b = self.find_root(b);
        if root_a == root_b {
            log::trace!("bond {bond:?} is redundant");
            return false;
        }
        let (Node::Root { size: size_a, min: min_a }, Node::Root { size: size_b, min: min_b }) =
            (self.nodes[root_a], self.nodes[root_b])
        else {
            panic!("shouldn't happen: find_root returned a non-root");
        };
        // union by size, attaching the smaller tree below the larger
        let (root, child) = if size_a >= size_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.nodes[child] = Node::Child(root);
        self.nodes[root] = Node::Root {
            size: size_a + size_b,
            min: min_a.min(min_b),
        };
        true
    }

    /// Returns the raw label of an atom: the smallest atom id in its class,
    /// or `None` while no bond has touched it.
    pub fn label(&mut self, atom: Atom) -> Option<Atom> {
        if self.nodes[atom] == Node::Isolated {
            return None;
        }
        let root = self.find_root(atom);
        let Node::Root { min, .. } = self.nodes[root] else {
            panic!("shouldn't happen: find_root returned a non-root");
        };
        Some(min)
    }

    /// Returns whether two atoms belong to the same class.
    ///
    /// Two isolated atoms are *not* connected, even though both carry no
    /// label; they are conceptually distinct singleton classes.
    pub fn connected(&mut self, a: Atom, b: Atom) -> bool {
        if a == b {
            return true;
        }
        if self.nodes[a] == Node::Isolated || self.nodes[b] == Node::Isolated {
            return false;
        }
        self.find_root(a) == self.find_root(b)
    }

    fn ensure_root(&mut self, atom: Atom) {
        if self.nodes[atom] == Node::Isolated {
            self.nodes[atom] = Node::Root { size: 1, min: atom };
        }
    }

    // Path halving: every other atom on the walk is repointed at its
    // grandparent, so repeated lookups flatten the tree.
    fn find_root(&mut self, mut atom: Atom) -> Atom {
        loop {
            let Node::Child(parent) = self.nodes[atom] else {
                return atom;
            };
            let Node::Child(grandparent) = self.nodes[parent] else {
                return parent;
            };
            self.nodes[atom] = Node::Child(grandparent);
            atom = grandparent;
        }
    }

    // Read-only variant for `Debug`; follows parent links without halving.
    fn peek_root(&self, mut atom: Atom) -> Atom {
        while let Node::Child(parent) = self.nodes[atom] {
            atom = parent;
        }
        atom
    }
}

impl std::fmt::Debug for MoleculeForest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // prints each nontrivial class as its label followed by its members
        let mut classes = std::collections::BTreeMap::<Atom, Vec<Atom>>::new();
        for atom in self.nodes.keys() {
            if self.nodes[atom] == Node::Isolated {
                continue;
            }
            let root = self.peek_root(atom);
            let Node::Root { min, .. } = self.nodes[root] else {
                continue;
            };
            classes.entry(min).or_default().push(atom);
        }
        f.debug_map().entries(classes.iter()).finish()
    }
}
