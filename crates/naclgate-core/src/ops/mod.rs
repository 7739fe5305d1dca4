//! Primitive adapters, one module per operation family.
//!
//! Each adapter works on canonical byte slices, applies the size guards its
//! family needs, invokes the primitive, and maps any primitive failure to the
//! family's own error kind. Adapters hold no state between calls.
//!
//! These functions are also the typed API for Rust callers that have no host
//! values to marshal.

pub mod auth;
pub mod boxes;
pub mod hash;
pub mod random;
pub mod secretbox;
pub mod sign;
