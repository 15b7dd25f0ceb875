use mintgate_types::{Address, Amount};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitialBalance {
    pub address: Address,
    pub amount: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(default)]
    pub initial_balances: Vec<InitialBalance>,
    /// Without a minter the supply can only shrink.
    #[serde(default)]
    pub minter: Option<Address>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum ExecuteMsg {
    Transfer { recipient: Address, amount: Amount },
    /// Move `amount` to `contract` and call its `receive` hook with `msg`.
    Send {
        contract: Address,
        amount: Amount,
        msg: serde_json::Value,
    },
    Burn { amount: Amount },
    Mint { recipient: Address, amount: Amount },
}

impl ExecuteMsg {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "transfer",
            Self::Send { .. } => "send",
            Self::Burn { .. } => "burn",
            Self::Mint { .. } => "mint",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum QueryMsg {
    Balance { address: Address },
    TokenInfo {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: Amount,
}

/// Hook payload delivered to the target of a [`ExecuteMsg::Send`].
///
/// `sender` is the account that initiated the send, not the token contract;
/// the token contract itself is the caller of the hook.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceiveMsg {
    pub sender: Address,
    pub amount: Amount,
    pub msg: serde_json::Value,
}

impl ReceiveMsg {
    /// The externally tagged `{"receive": {..}}` message a hook target expects.
    pub fn into_execute_msg(self) -> Result<serde_json::Value, serde_json::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "snake_case")]
        enum Wrapper {
            Receive(ReceiveMsg),
        }
        serde_json::to_value(Wrapper::Receive(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn receive_envelope_is_tagged() {
        let value = ReceiveMsg {
            sender: Address::new("juno1alice"),
            amount: Amount::new(5),
            msg: json!({"convert": {}}),
        }
        .into_execute_msg()
        .unwrap();
        assert_eq!(
            value,
            json!({"receive": {"sender": "juno1alice", "amount": "5", "msg": {"convert": {}}}})
        );
    }

    #[test]
    fn send_parses_nested_msg() {
        let msg: ExecuteMsg = serde_json::from_value(json!({
            "send": {"contract": "contract2", "amount": 10, "msg": {"convert": {}}}
        }))
        .unwrap();
        assert_eq!(msg.name(), "send");
    }
}
