use std::collections::HashMap;

use crate::error::Error;

/// Every player's serialized public key, keyed by player identifier. The
/// transport assembles one bundle per hand and hands the same bundle to
/// every player; this core only ever reads it. Entry bytes are kept as
/// received and validated at decode time, so a truncated or padded wire
/// value surfaces as a decode failure, never a silent fixup.
#[derive(Default, Clone, Debug)]
pub struct KeyBundle {
    keys: HashMap<String, Vec<u8>>,
}

impl KeyBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers are unique; a second insert under the same identifier is
    /// rejected rather than overwritten.
    pub fn insert(&mut self, id: impl Into<String>, key_bytes: impl Into<Vec<u8>>) -> Result<(), Error> {
        let id = id.into();
        if self.keys.contains_key(&id) {
            return Err(Error::DuplicateIdentifier(id));
        }
        self.keys.insert(id, key_bytes.into());
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.keys.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.keys.get(id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.keys.iter().map(|(id, key)| (id.as_str(), key.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
