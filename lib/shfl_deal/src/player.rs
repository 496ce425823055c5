use rand_core::CryptoRngCore;
use shfl_ecdh::aggregate::{self, GroupSecret};
use shfl_ecdh::curve::POINT_COMPRESSED_LEN;
use shfl_ecdh::exchange::{self, KeyPair};

use crate::bundle::KeyBundle;
use crate::error::Error;

/// One seat at the table. Owns its keypair for the lifetime of the process;
/// nothing is persisted.
pub struct Player {
    id: String,
    key_pair: KeyPair,
}

impl Player {
    pub fn new(id: impl Into<String>, rng: &mut impl CryptoRngCore) -> Self {
        Self {
            id: id.into(),
            key_pair: exchange::generate_keypair(rng),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The compressed public key this player contributes to the bundle.
    pub fn public_key_bytes(&self) -> [u8; POINT_COMPRESSED_LEN] {
        exchange::serialize_public(&self.key_pair)
    }

    /// Derives one pairwise secret per peer in the bundle and folds them
    /// into the group secret. Pure function of the stored private key and
    /// the bundle, so calling it again with the same bundle returns the
    /// same secret.
    pub fn compute_group_secret(&self, bundle: &KeyBundle) -> Result<GroupSecret, Error> {
        if !bundle.contains(&self.id) {
            return Err(Error::SelfNotInBundle(self.id.clone()));
        }

        let mut pairwise = Vec::with_capacity(bundle.len().saturating_sub(1));
        for (peer_id, key_bytes) in bundle.iter() {
            if peer_id == self.id {
                continue;
            }
            let peer_public = exchange::deserialize_public(key_bytes)?;
            pairwise.push(exchange::derive_pairwise_secret(&self.key_pair, &peer_public)?);
        }

        Ok(aggregate::aggregate(pairwise))
    }
}
