//! Saving and restoring host state with `bincode`.
//!
//! Only the [`World`] is persisted: the ledger, every contract's state and
//! the address sequence. Host limits come from configuration at load time.

use std::fs;
use std::path::Path;

use mintgate_ledger::Ledger;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Host, HostConfig, HostError, World};

impl<L> Host<L>
where
    L: Ledger + Clone + Serialize + DeserializeOwned,
{
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HostError> {
        let path = path.as_ref();
        let bytes = bincode::serialize(self.world()).map_err(|e| HostError::Persistence(e.to_string()))?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &bytes).map_err(|e| HostError::Persistence(format!("{}: {e}", tmp.display())))?;
        fs::rename(&tmp, path).map_err(|e| HostError::Persistence(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "state saved");
        Ok(())
    }

    pub fn load(config: HostConfig, path: impl AsRef<Path>) -> Result<Self, HostError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| HostError::Persistence(format!("{}: {e}", path.display())))?;
        let world: World<L> = bincode::deserialize(&bytes).map_err(|e| HostError::Persistence(e.to_string()))?;
        tracing::debug!(
            path = %path.display(),
            contracts = world.contracts.len(),
            "state loaded"
        );
        Ok(Self::from_world(config, world))
    }
}
