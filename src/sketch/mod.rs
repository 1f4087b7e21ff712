pub mod minhash;
pub mod shingle;
pub mod vector;

pub use minhash::{Permutation, Permuter};
pub use shingle::ShingleSet;
pub use vector::PresenceVector;
