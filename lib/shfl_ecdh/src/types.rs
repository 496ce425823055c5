//! Shuffleseed (SHUFFLEd SEcret Derivation)
//!
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use k256::AffinePoint;

pub type PublicKey = AffinePoint;
pub type PairwiseSecret = [u8; crate::exchange::SECRET_LEN];
