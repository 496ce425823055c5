use rand::{SeedableRng, rngs::StdRng, thread_rng};
use shfl_ecdh::error::Error as EcdhError;
use shfl_ecdh::exchange::SECRET_LEN;

use crate::bundle::KeyBundle;
use crate::error::Error;
use crate::player::Player;

fn bundle_of(players: &[Player]) -> KeyBundle {
    let mut bundle = KeyBundle::new();
    for player in players {
        bundle
            .insert(player.id(), player.public_key_bytes())
            .expect("Failed to insert into bundle");
    }
    bundle
}

#[test]
fn test_three_player_shuffle_seed() {
    // --- 1. SETUP ---
    let mut rng = thread_rng();

    let alice = Player::new("alice", &mut rng);
    let bob = Player::new("bob", &mut rng);
    let carol = Player::new("carol", &mut rng);

    // The transport collects every public key into one bundle and hands the
    // same bundle to every player.
    let players = [alice, bob, carol];
    let bundle = bundle_of(&players);

    // --- 2. DERIVATION ---
    // Each player runs ECDH against the other two and folds the results.
    let secrets: Vec<_> = players
        .iter()
        .map(|p| p.compute_group_secret(&bundle).expect("Failed to derive"))
        .collect();

    // All three must land on the exact same seed, bit for bit.
    assert_eq!(secrets[0], secrets[1], "alice and bob disagree");
    assert_eq!(secrets[1], secrets[2], "bob and carol disagree");
    assert_ne!(secrets[0].as_bytes(), &[0u8; SECRET_LEN]);

    // Recomputing against the same bundle is idempotent.
    let again = players[0]
        .compute_group_secret(&bundle)
        .expect("Failed to derive twice");
    assert_eq!(again, secrets[0]);

    // --- 3. AVALANCHE ---
    // Carol rejoins with a fresh keypair; the seed must move for everyone.
    let carol_2 = Player::new("carol", &mut rng);
    let mut bundle_2 = KeyBundle::new();
    for player in &players[..2] {
        bundle_2
            .insert(player.id(), player.public_key_bytes())
            .expect("Failed to insert into bundle");
    }
    bundle_2
        .insert(carol_2.id(), carol_2.public_key_bytes())
        .expect("Failed to insert into bundle");

    let secret_a2 = players[0]
        .compute_group_secret(&bundle_2)
        .expect("Failed to derive");
    let secret_b2 = players[1]
        .compute_group_secret(&bundle_2)
        .expect("Failed to derive");
    let secret_c2 = carol_2
        .compute_group_secret(&bundle_2)
        .expect("Failed to derive");

    assert_eq!(secret_a2, secret_b2);
    assert_eq!(secret_b2, secret_c2);
    assert_ne!(secret_a2, secrets[0], "New keypair must move the seed");
}

#[test]
fn test_missing_self_is_rejected() {
    let mut rng = thread_rng();
    let alice = Player::new("alice", &mut rng);
    let bob = Player::new("bob", &mut rng);

    let mut bundle = KeyBundle::new();
    bundle
        .insert(bob.id(), bob.public_key_bytes())
        .expect("Failed to insert");

    assert_eq!(
        alice.compute_group_secret(&bundle),
        Err(Error::SelfNotInBundle("alice".to_string()))
    );
}

#[test]
fn test_duplicate_identifier_is_rejected() {
    let mut rng = thread_rng();
    let alice = Player::new("alice", &mut rng);
    let impostor = Player::new("alice", &mut rng);

    let mut bundle = KeyBundle::new();
    bundle
        .insert(alice.id(), alice.public_key_bytes())
        .expect("Failed to insert");
    assert_eq!(
        bundle.insert(impostor.id(), impostor.public_key_bytes()),
        Err(Error::DuplicateIdentifier("alice".to_string()))
    );
    assert_eq!(bundle.len(), 1);
}

#[test]
fn test_lone_player_gets_zero_secret() {
    // Zero peers is degenerate but defined: the fold never starts, so the
    // accumulator comes back untouched.
    let alice = Player::new("alice", &mut thread_rng());
    let bundle = bundle_of(std::slice::from_ref(&alice));

    let secret = alice
        .compute_group_secret(&bundle)
        .expect("Failed to derive");
    assert_eq!(secret.as_bytes(), &[0u8; SECRET_LEN]);
}

#[test]
fn test_corrupt_bundle_entry_propagates() {
    let mut rng = thread_rng();
    let alice = Player::new("alice", &mut rng);

    let mut bundle = KeyBundle::new();
    bundle
        .insert(alice.id(), alice.public_key_bytes())
        .expect("Failed to insert");
    bundle
        .insert("mallory", vec![0xffu8; 33])
        .expect("Failed to insert");

    assert_eq!(
        alice.compute_group_secret(&bundle),
        Err(Error::Ecdh(EcdhError::InvalidEncoding))
    );
}

#[test]
fn test_players_compute_in_parallel() {
    // Share-nothing: each player reads the bundle and its own key only, so
    // all derivations can run at once.
    let mut rng = StdRng::seed_from_u64(1979);
    let players: Vec<Player> = (1..=4)
        .map(|n| Player::new(format!("player{n}"), &mut rng))
        .collect();
    let bundle = bundle_of(&players);

    let bundle = &bundle;
    let secrets = std::thread::scope(|scope| {
        let handles: Vec<_> = players
            .iter()
            .map(|player| scope.spawn(move || player.compute_group_secret(bundle)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("Worker panicked").expect("Failed to derive"))
            .collect::<Vec<_>>()
    });

    assert!(secrets.iter().all(|s| *s == secrets[0]));
}
