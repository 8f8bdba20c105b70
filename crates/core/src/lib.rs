//! Contact form domain logic.
//!
//! Pure, synchronous code with no I/O so it can be exercised from unit tests
//! and shared between the HTTP layer and any future batch tooling.

pub mod validation;
