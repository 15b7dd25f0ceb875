//! The closed set of contract kinds the host can run.

use std::fmt;
use std::str::FromStr;

use mintgate_conversion::{self as conversion, ConversionUnit};
use mintgate_messages::{Deps, Env, MessageInfo, Response};
use mintgate_registry::{self as registry, Registry};
use mintgate_token::{self as token, TrackedToken};
use mintgate_types::Address;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::HostError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    Registry,
    Conversion,
    Token,
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Registry => "registry",
            Self::Conversion => "conversion",
            Self::Token => "token",
        })
    }
}

impl FromStr for ContractKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registry" => Ok(Self::Registry),
            "conversion" => Ok(Self::Conversion),
            "token" => Ok(Self::Token),
            other => Err(format!(
                "unknown contract kind '{other}' (expected registry, conversion or token)"
            )),
        }
    }
}

/// What to deploy, with its instantiate message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstantiateRequest {
    Registry(registry::InstantiateMsg),
    Conversion(conversion::InstantiateMsg),
    Token(token::InstantiateMsg),
}

impl InstantiateRequest {
    pub fn kind(&self) -> ContractKind {
        match self {
            Self::Registry(_) => ContractKind::Registry,
            Self::Conversion(_) => ContractKind::Conversion,
            Self::Token(_) => ContractKind::Token,
        }
    }

    /// Decode the instantiate message for `kind` from JSON.
    pub fn from_json(kind: ContractKind, msg: serde_json::Value) -> Result<Self, HostError> {
        let config_err = |e: serde_json::Error| HostError::Config(format!("invalid {kind} instantiate message: {e}"));
        Ok(match kind {
            ContractKind::Registry => Self::Registry(serde_json::from_value(msg).map_err(config_err)?),
            ContractKind::Conversion => Self::Conversion(serde_json::from_value(msg).map_err(config_err)?),
            ContractKind::Token => Self::Token(serde_json::from_value(msg).map_err(config_err)?),
        })
    }
}

/// A deployed contract and its entire state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contract {
    Registry(Registry),
    Conversion(ConversionUnit),
    Token(TrackedToken),
}

impl Contract {
    pub fn instantiate(info: &MessageInfo, request: InstantiateRequest) -> Result<(Self, Response), HostError> {
        Ok(match request {
            InstantiateRequest::Registry(msg) => {
                let (c, res) = Registry::instantiate(info, msg)?;
                (Self::Registry(c), res)
            }
            InstantiateRequest::Conversion(msg) => {
                let (c, res) = ConversionUnit::instantiate(msg)?;
                (Self::Conversion(c), res)
            }
            InstantiateRequest::Token(msg) => {
                let (c, res) = TrackedToken::instantiate(msg)?;
                (Self::Token(c), res)
            }
        })
    }

    pub fn kind(&self) -> ContractKind {
        match self {
            Self::Registry(_) => ContractKind::Registry,
            Self::Conversion(_) => ContractKind::Conversion,
            Self::Token(_) => ContractKind::Token,
        }
    }

    /// Decode `msg` for this contract kind and run it. Messages the kind does
    /// not define are rejected before any handler code runs.
    pub fn execute(
        &mut self,
        deps: Deps<'_>,
        env: &Env,
        info: &MessageInfo,
        msg: serde_json::Value,
    ) -> Result<Response, HostError> {
        Ok(match self {
            Self::Registry(c) => c.execute(deps, env, info, decode(env, msg)?)?,
            Self::Conversion(c) => c.execute(env, info, decode(env, msg)?)?,
            Self::Token(c) => c.execute(env, info, decode(env, msg)?)?,
        })
    }

    pub fn query(&self, deps: Deps<'_>, env: &Env, msg: serde_json::Value) -> Result<serde_json::Value, HostError> {
        Ok(match self {
            Self::Registry(c) => c.query(deps, decode(env, msg)?)?,
            Self::Conversion(c) => c.query(decode(env, msg)?)?,
            Self::Token(c) => c.query(decode(env, msg)?)?,
        })
    }

    pub fn as_registry(&self) -> Option<&Registry> {
        match self {
            Self::Registry(c) => Some(c),
            _ => None,
        }
    }
}

fn decode<T: DeserializeOwned>(env: &Env, msg: serde_json::Value) -> Result<T, HostError> {
    serde_json::from_value(msg).map_err(|e| unrecognized(&env.contract, e))
}

fn unrecognized(contract: &Address, e: serde_json::Error) -> HostError {
    HostError::UnrecognizedMessage {
        contract: contract.clone(),
        reason: e.to_string(),
    }
}
