//! grove-core
//!
//! Pure domain types and prompt construction for the Grove focus coach.
//! No HTTP and no provider client — this is the shared vocabulary of the
//! Grove backend.

pub mod models;
pub mod prompt;
