use mintgate_token::ReceiveMsg;
use mintgate_types::{Address, Denom};
use serde::{Deserialize, Serialize};

use crate::config::Source;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstantiateMsg {
    pub source: Source,
    pub target_denom: Denom,
    pub registry: Address,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum ExecuteMsg {
    /// Convert the single native coin attached to this call.
    Convert {},
    /// Token hook; only the configured source token may call it.
    Receive(ReceiveMsg),
}

/// What a tracked-token depositor may ask for in the `send` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum HookPayload {
    Convert {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum QueryMsg {
    GetConfig {},
}
