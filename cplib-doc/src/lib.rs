//! Snippets for competitive programming.
//!
//! Structures are meant to be pasted into single-file contest solutions:
//! [`ds::Dsu`] for disjoint-set queries and [`math::MatrixMod`] for linear
//! recurrences under a fixed modulus. The [`naive`] crates are brute-force
//! counterparts used to cross-check the real ones in tests.

pub use ds;
pub use math;
pub use naive;
