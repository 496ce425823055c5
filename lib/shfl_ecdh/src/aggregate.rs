/// XOR-folding of pairwise secrets into the group secret
use std::fmt;

use crate::exchange::SECRET_LEN;
use crate::types::PairwiseSecret;

/// The value every honest participant converges on. Raw bytes are the
/// canonical form; hex is a rendering convenience.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GroupSecret([u8; SECRET_LEN]);

impl GroupSecret {
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for GroupSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for GroupSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupSecret({})", self.to_hex())
    }
}

/// Folds the per-peer secrets into a single group secret, starting from an
/// all-zero accumulator. XOR is commutative and associative, so the result
/// does not depend on the order peers are enumerated in; that property is
/// what lets every participant walk the bundle in its own order and still
/// agree. Zero peers yields the all-zero secret, which is defined and fine.
pub fn aggregate(pairwise_secrets: impl IntoIterator<Item = PairwiseSecret>) -> GroupSecret {
    let mut folded = [0u8; SECRET_LEN];
    for secret in pairwise_secrets {
        for (acc, byte) in folded.iter_mut().zip(secret) {
            *acc ^= byte;
        }
    }
    GroupSecret(folded)
}
