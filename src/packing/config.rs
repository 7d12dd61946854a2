use serde::{Deserialize, Serialize};

use crate::types::PackMode;

/// How a [`Packer`](super::Packer) treats the caller's pool. Defaults to
/// consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackerConfig {
    pub mode: PackMode,
}

impl PackerConfig {
    /// Selected items leave the caller's pool.
    pub fn consume() -> Self {
        Self {
            mode: PackMode::Consume,
        }
    }

    /// The caller's pool is left as it was.
    pub fn replenish() -> Self {
        Self {
            mode: PackMode::Replenish,
        }
    }
}
