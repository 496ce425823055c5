//! Shuffleseed (SHUFFLEd SEcret Derivation)
//!
//! Player-level orchestration: each player owns one keypair, publishes its
//! compressed public key into a shared bundle, and independently derives
//! the group secret that seeds the shuffle.
//!
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

pub mod bundle;
pub mod error;
pub mod player;

#[cfg(test)]
pub mod tests;
