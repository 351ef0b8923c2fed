//! Codec implementations for common types.

pub mod aggregate;
pub mod bytes;
pub mod enumeration;
pub mod primitives;
pub mod string;
pub mod vec;
