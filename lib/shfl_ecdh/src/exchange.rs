/// Keypair lifecycle & pairwise ECDH secret derivation
use hkdf::Hkdf;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{AffinePoint, NonZeroScalar, ProjectivePoint};
use rand_core::CryptoRngCore;
use sha2::Sha256;

use crate::curve::{POINT_COMPRESSED_LEN, decode_point, encode_point};
use crate::error::Error;
use crate::types::{PairwiseSecret, PublicKey};

/// HKDF domain-separation label. Identical across all participants and
/// stable across versions; changing it is a breaking protocol change.
pub const SHARED_SECRET_INFO: &[u8] = b"poker_game_shared_secret";

pub const SECRET_LEN: usize = 32;

/// One participant's keypair. The secret scalar never leaves this struct;
/// there is deliberately no way to serialize, print, or clone it out.
pub struct KeyPair {
    secret: NonZeroScalar,
    public: AffinePoint,
}

impl KeyPair {
    pub fn public(&self) -> &PublicKey {
        &self.public
    }
}

/// Draws a fresh uniform nonzero scalar from the caller's secure RNG and
/// computes the matching public point. Scalars must never be reused across
/// participants or sessions.
pub fn generate_keypair(rng: &mut impl CryptoRngCore) -> KeyPair {
    let secret = NonZeroScalar::random(rng);
    let public = (ProjectivePoint::GENERATOR * *secret).to_affine();
    KeyPair { secret, public }
}

pub fn serialize_public(key_pair: &KeyPair) -> [u8; POINT_COMPRESSED_LEN] {
    encode_point(&key_pair.public)
}

pub fn deserialize_public(data: &[u8]) -> Result<PublicKey, Error> {
    decode_point(data)
}

/// ECDH against one peer: shared point = peer_public * local_secret, then
/// the shared x-coordinate is stretched through HKDF-SHA256 under
/// [`SHARED_SECRET_INFO`].
pub fn derive_pairwise_secret(
    key_pair: &KeyPair,
    peer_public: &PublicKey,
) -> Result<PairwiseSecret, Error> {
    if *peer_public == AffinePoint::IDENTITY {
        return Err(Error::InvalidPeerKey);
    }

    let shared = (ProjectivePoint::from(*peer_public) * *key_pair.secret).to_affine();
    let shared_sec1 = shared.to_encoded_point(false);
    // The shared point cannot be the identity: the scalar is nonzero and the
    // peer point was rejected above, so x() is always present.
    let x = shared_sec1.x().ok_or(Error::InvalidPeerKey)?;

    let mut secret = [0u8; SECRET_LEN];
    Hkdf::<Sha256>::new(None, x)
        .expand(SHARED_SECRET_INFO, &mut secret)
        .expect("Failed to expand HKDF output");
    Ok(secret)
}
