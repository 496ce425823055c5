#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Wrong length, unrecognized leading tag, or an x-coordinate with no
    /// on-curve y. Signals a corrupt or malicious bundle entry.
    #[error("public key bytes are not a valid compressed secp256k1 point")]
    InvalidEncoding,
    /// Structurally valid but cryptographically degenerate peer key.
    #[error("peer public key is the identity element")]
    InvalidPeerKey,
}
