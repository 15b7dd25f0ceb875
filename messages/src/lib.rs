//! Contract execution vocabulary.
//!
//! A contract handler receives an [`Env`], a [`MessageInfo`] and read-only
//! [`Deps`], and returns a [`Response`] listing the [`Action`]s it wants the
//! host to perform on its behalf. The host applies those actions in order,
//! inside the same atomic boundary as the handler itself.

use std::fmt;

use mintgate_ledger::LedgerQuery;
use mintgate_types::{pretty_coins, Address, Amount, Coin, Denom};
use serde::{Deserialize, Serialize};

/// The executing contract's own identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Env {
    pub contract: Address,
}

/// Who is calling and what value they attached.
///
/// By the time a handler sees `funds`, the host has already moved them into
/// the contract's ledger balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub sender: Address,
    pub funds: Vec<Coin>,
}

impl MessageInfo {
    pub fn new(sender: Address) -> Self {
        Self {
            sender,
            funds: Vec::new(),
        }
    }

    pub fn with_funds(sender: Address, funds: Vec<Coin>) -> Self {
        Self { sender, funds }
    }
}

/// Read-only dependencies handed to contract handlers.
#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub ledger: &'a dyn LedgerQuery,
}

impl<'a> Deps<'a> {
    pub fn new(ledger: &'a dyn LedgerQuery) -> Self {
        Self { ledger }
    }
}

/// Bank primitives a contract may request, executed with the contract as authority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankAction {
    Send {
        to: Address,
        amount: Vec<Coin>,
    },
    Mint {
        denom: Denom,
        recipient: Address,
        amount: Amount,
    },
    Burn {
        denom: Denom,
        holder: Address,
        amount: Amount,
    },
    ForceTransfer {
        denom: Denom,
        from: Address,
        to: Address,
        amount: Amount,
    },
    ChangeAdmin {
        denom: Denom,
        new_admin: Address,
    },
}

impl BankAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Send { .. } => "send",
            Self::Mint { .. } => "mint",
            Self::Burn { .. } => "burn",
            Self::ForceTransfer { .. } => "force_transfer",
            Self::ChangeAdmin { .. } => "change_admin",
        }
    }
}

impl fmt::Display for BankAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Send { to, amount } => write!(f, "send {} to {to}", pretty_coins(amount)),
            Self::Mint {
                denom,
                recipient,
                amount,
            } => write!(f, "mint {amount}{denom} to {recipient}"),
            Self::Burn {
                denom,
                holder,
                amount,
            } => write!(f, "burn {amount}{denom} from {holder}"),
            Self::ForceTransfer {
                denom,
                from,
                to,
                amount,
            } => write!(f, "force {amount}{denom} from {from} to {to}"),
            Self::ChangeAdmin { denom, new_admin } => write!(f, "admin of {denom} to {new_admin}"),
        }
    }
}

/// Something a contract asks the host to do after its handler returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Bank(BankAction),
    /// Call another contract with this contract as the sender.
    Execute {
        contract: Address,
        msg: serde_json::Value,
        funds: Vec<Coin>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// Outcome of a successful handler.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub actions: Vec<Action>,
    pub attributes: Vec<Attribute>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_attribute(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push(Attribute {
            key: key.into(),
            value: value.to_string(),
        });
        self
    }

    pub fn add_bank(mut self, action: BankAction) -> Self {
        self.actions.push(Action::Bank(action));
        self
    }

    pub fn add_execute(mut self, contract: Address, msg: serde_json::Value) -> Self {
        self.actions.push(Action::Execute {
            contract,
            msg,
            funds: Vec::new(),
        });
        self
    }

    /// Value of the first attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// A record of one step the host performed while serving a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The contract (or account) the step ran as.
    pub source: Address,
    pub kind: String,
    pub attributes: Vec<Attribute>,
}
