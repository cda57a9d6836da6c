//! A fixed-size vector of bits backed by `u64` words.

pub mod bit_vec;

pub use bit_vec::BitVec;
