use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::packing::PackingPlan;

/// Content hash of a packing plan.
///
/// Two plans share a digest exactly when they serialize to the same bytes:
/// same capacity, same quantization, same taken indices, same totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionDigest(String);

impl SelectionDigest {
    pub fn from_plan(plan: &PackingPlan) -> Result<Self, serde_json::Error> {
        let canonical = serde_json::to_vec(plan)?;
        Ok(Self::from_bytes(&canonical))
    }

    pub fn from_bytes(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SelectionDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
