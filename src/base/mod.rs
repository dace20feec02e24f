//! Base types shared across the crate.
//!
//! - [`Clock`](clock::Clock): Source of the current time for expiry decisions

pub mod clock;
