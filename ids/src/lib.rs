//! Type checked integer ids and id-indexed containers.

mod id;
pub mod id_vec;
mod unordered_pair;

pub use id::Id;
pub use id_vec::IdVec;
pub use unordered_pair::UnorderedPair;
