//! Kani proof harnesses
//!
//! This module contains the Kani verification proofs for the d-ary heap.
//!
//! - `dary_proofs.rs`: Operation-level proofs over symbolic weights and degrees

#[cfg(kani)]
#[path = "dary_proofs.rs"]
mod dary_proofs;
