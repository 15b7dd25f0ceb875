//! Registry message types.

use mintgate_types::{Address, Amount, Denom};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstantiateMsg {
    /// Defaults to the instantiating sender.
    #[serde(default)]
    pub manager: Option<Address>,
    #[serde(default)]
    pub allowed_principals: Vec<Address>,
    /// Factory denoms whose admin rights are (or will be) held by the registry.
    pub denoms: Vec<Denom>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum ExecuteMsg {
    // == ANYONE ==
    /// Burn the administered coins attached to the call; others are returned.
    Burn {},

    // == WHITELIST ==
    Mint {
        recipient: Address,
        denom: Denom,
        amount: Amount,
    },
    BurnFrom {
        holder: Address,
        denom: Denom,
        amount: Amount,
    },
    ForceTransfer {
        from: Address,
        to: Address,
        denom: Denom,
        amount: Amount,
    },

    // == MANAGER ==
    AddWhitelist { addresses: Vec<Address> },
    RemoveWhitelist { addresses: Vec<Address> },
    AddDenom { denoms: Vec<Denom> },
    RemoveDenom { denoms: Vec<Denom> },
    TransferAdmin { denom: Denom, new_admin: Address },
}

impl ExecuteMsg {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Burn {} => "burn",
            Self::Mint { .. } => "mint",
            Self::BurnFrom { .. } => "burn_from",
            Self::ForceTransfer { .. } => "force_transfer",
            Self::AddWhitelist { .. } => "add_whitelist",
            Self::RemoveWhitelist { .. } => "remove_whitelist",
            Self::AddDenom { .. } => "add_denom",
            Self::RemoveDenom { .. } => "remove_denom",
            Self::TransferAdmin { .. } => "transfer_admin",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum QueryMsg {
    /// Returns [`crate::RegistryConfig`].
    GetConfig {},
    /// Returns a [`mintgate_types::Coin`] read straight from the ledger.
    GetBalance { address: Address, denom: Denom },
    /// Returns every non-zero [`mintgate_types::Coin`] held by `address`.
    GetAllBalances { address: Address },
}
