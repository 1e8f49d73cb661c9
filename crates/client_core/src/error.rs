use shared::domain::TierId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown ticket tier {0}")]
    UnknownTier(TierId),
    #[error("countdown tick interval must be greater than zero")]
    ZeroTickInterval,
}

pub type Result<T> = std::result::Result<T, CoreError>;
