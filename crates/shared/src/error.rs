use thiserror::Error;

use crate::domain::{EntryId, TierId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown catalog entry {0}")]
    UnknownEntry(EntryId),
    #[error("duplicate catalog entry id {0}")]
    DuplicateEntry(EntryId),
    #[error("duplicate ticket tier id {0}")]
    DuplicateTier(TierId),
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}
