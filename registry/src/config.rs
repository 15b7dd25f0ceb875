//! Registry configuration and its authorization checks.

use std::collections::BTreeSet;

use mintgate_types::{Address, Denom};
use serde::{Deserialize, Serialize};

use crate::RegistryError;

/// The registry's entire persisted state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Sole principal allowed to change the two sets below.
    pub manager: Address,
    /// Principals allowed to mint, burn from holders and force-transfer.
    pub allowed_principals: BTreeSet<Address>,
    /// Denoms this registry claims ledger custody of.
    pub administered_denoms: BTreeSet<Denom>,
}

impl RegistryConfig {
    pub fn is_manager(&self, caller: &Address) -> bool {
        &self.manager == caller
    }

    pub fn is_allowed(&self, caller: &Address) -> bool {
        self.allowed_principals.contains(caller)
    }

    pub fn administers(&self, denom: &Denom) -> bool {
        self.administered_denoms.contains(denom)
    }

    pub fn ensure_manager(&self, caller: &Address) -> Result<(), RegistryError> {
        if !self.is_manager(caller) {
            return Err(RegistryError::Unauthorized {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    pub fn ensure_allowed(&self, caller: &Address) -> Result<(), RegistryError> {
        if !self.is_allowed(caller) {
            return Err(RegistryError::Unauthorized {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    pub fn ensure_administered(&self, denom: &Denom) -> Result<(), RegistryError> {
        if !self.administers(denom) {
            return Err(RegistryError::UnknownDenom(denom.clone()));
        }
        Ok(())
    }
}
