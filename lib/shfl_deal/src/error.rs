#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Ecdh(#[from] shfl_ecdh::error::Error),
    /// The bundle handed to a player must contain that player's own key;
    /// a bundle without it was assembled wrong by the transport.
    #[error("player {0:?} is missing from the key bundle")]
    SelfNotInBundle(String),
    #[error("duplicate player {0:?} in the key bundle")]
    DuplicateIdentifier(String),
}
