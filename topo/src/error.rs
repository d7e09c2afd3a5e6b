//! Error types for topology reconstruction.
//!
//! Both variants are detected at the offending bond record and abort the
//! whole batch; a partially applied bond list has no meaningful connectivity,
//! so no partial partition is ever returned.

use thiserror::Error;

/// Errors raised while applying bond records to a snapshot's partition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    /// A bond record names the same atom on both ends.
    #[error("malformed topology: bond connects atom {atom} to itself")]
    SelfBond {
        /// The repeated atom number.
        atom: u32,
    },

    /// A bond record references an atom outside the declared range
    /// `1..=atom_count`.
    ///
    /// This also covers the number 0, which no atom carries.
    #[error("inconsistent atom count: bond references atom {atom} but the snapshot declares {atom_count} atoms")]
    AtomOutOfRange {
        /// The offending atom number as written in the bond record.
        atom: u32,
        /// The declared number of atoms in the snapshot.
        atom_count: u32,
    },
}
