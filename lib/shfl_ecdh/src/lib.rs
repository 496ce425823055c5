//! Shuffleseed (SHUFFLEd SEcret Derivation)
//!
//! Dealer-free shuffle seeding: N players run pairwise ECDH over secp256k1
//! and fold the derived secrets into one group secret no single player or
//! dealer controls.
//!
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.
//!
//! Note the folding step is plain XOR: a player who picks their public key
//! after seeing everyone else's could try to steer the result. The protocol
//! as deployed does not commit-then-reveal public keys; callers that need
//! that property must add it at the transport layer.

pub mod aggregate;
pub mod curve;
pub mod error;
pub mod exchange;
pub mod types;
