//! Shuffleseed (SHUFFLEd SEcret Derivation)
//!
//! Three-player demo: generate keypairs, assemble the public-key bundle,
//! and have every player independently derive the shuffle seed.
//!
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use itertools::Itertools;
use rand::thread_rng;
use shfl_deal::bundle::KeyBundle;
use shfl_deal::error::Error;
use shfl_deal::player::Player;
use shfl_ecdh::curve::CURVE_ID;
use tracing::info;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let mut rng = thread_rng();
    let players: Vec<Player> = ["player1", "player2", "player3"]
        .into_iter()
        .map(|id| Player::new(id, &mut rng))
        .collect();

    let mut bundle = KeyBundle::new();
    for player in &players {
        bundle.insert(player.id(), player.public_key_bytes())?;
    }
    info!(
        "Bundle assembled over {} for: {}",
        CURVE_ID,
        players.iter().map(Player::id).join(", ")
    );

    let secrets = players
        .iter()
        .map(|player| player.compute_group_secret(&bundle))
        .collect::<Result<Vec<_>, _>>()?;

    for (player, secret) in players.iter().zip(&secrets) {
        info!("{} derived {}", player.id(), secret);
    }

    assert!(
        secrets.iter().all(|s| *s == secrets[0]),
        "Players disagree on the shuffle seed"
    );
    info!("Shuffle seed agreed: {}", secrets[0].to_hex());

    Ok(())
}
