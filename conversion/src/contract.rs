use mintgate_messages::{Env, MessageInfo, Response};
use mintgate_token::ReceiveMsg;
use serde::{Deserialize, Serialize};

use crate::config::ConversionConfig;
use crate::error::ConversionError;
use crate::msg::{ExecuteMsg, HookPayload, InstantiateMsg, QueryMsg};
use crate::pipeline::{Deposit, Pipeline};

/// A deployed conversion unit. Its configuration never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionUnit {
    config: ConversionConfig,
}

impl ConversionUnit {
    pub fn instantiate(msg: InstantiateMsg) -> Result<(Self, Response), ConversionError> {
        let config = ConversionConfig {
            source: msg.source,
            target_denom: msg.target_denom,
            registry: msg.registry,
        };
        config.validate()?;
        tracing::info!(
            source = %config.source,
            target = %config.target_denom,
            registry = %config.registry,
            "conversion unit instantiated"
        );
        let response = Response::new()
            .add_attribute("method", "instantiate")
            .add_attribute("target_denom", &config.target_denom);
        Ok((Self { config }, response))
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn execute(&self, env: &Env, info: &MessageInfo, msg: ExecuteMsg) -> Result<Response, ConversionError> {
        let deposit = match msg {
            ExecuteMsg::Convert {} => Deposit::from_funds(info.sender.clone(), &info.funds)?,
            ExecuteMsg::Receive(receive) => self.hook_deposit(info, receive)?,
        };
        let response = Pipeline::receive(&self.config, &env.contract, deposit)
            .validate()?
            .neutralize()?
            .request_mint()?
            .into_response();
        Ok(response)
    }

    pub fn query(&self, msg: QueryMsg) -> Result<serde_json::Value, ConversionError> {
        match msg {
            QueryMsg::GetConfig {} => serde_json::to_value(&self.config)
                .map_err(|e| ConversionError::Serialization(e.to_string())),
        }
    }

    /// The caller of a hook is the token contract; the envelope names the depositor.
    fn hook_deposit(&self, info: &MessageInfo, receive: ReceiveMsg) -> Result<Deposit, ConversionError> {
        if info.funds.iter().any(|c| !c.amount.is_zero()) {
            return Err(ConversionError::UnexpectedFunds);
        }
        let HookPayload::Convert {} = serde_json::from_value(receive.msg)
            .map_err(|e| ConversionError::UnrecognizedPayload(e.to_string()))?;
        Ok(Deposit::from_hook(info.sender.clone(), receive.sender, receive.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Source;
    use mintgate_messages::Action;
    use mintgate_types::{Address, Amount, Coin, Denom};
    use serde_json::json;

    fn addr(s: &str) -> Address {
        Address::new(s)
    }

    fn env() -> Env {
        Env {
            contract: addr("contract2"),
        }
    }

    fn unit(source: Source) -> ConversionUnit {
        ConversionUnit::instantiate(InstantiateMsg {
            source,
            target_denom: Denom::new("factory/contract1/new"),
            registry: addr("contract1"),
        })
        .unwrap()
        .0
    }

    fn tracked() -> ConversionUnit {
        unit(Source::Tracked {
            token: addr("contract0"),
        })
    }

    fn native() -> ConversionUnit {
        unit(Source::Native {
            denom: Denom::new("ujuno"),
        })
    }

    fn hook(sender: &str, amount: u128, msg: serde_json::Value) -> ExecuteMsg {
        ExecuteMsg::Receive(ReceiveMsg {
            sender: addr(sender),
            amount: Amount::new(amount),
            msg,
        })
    }

    #[test]
    fn test_native_convert_burns_then_mints() {
        let info = MessageInfo::with_funds(addr("juno1alice"), vec![Coin::new(5u128, Denom::new("ujuno"))]);
        let res = native().execute(&env(), &info, ExecuteMsg::Convert {}).unwrap();
        assert_eq!(res.actions.len(), 2);
        assert!(matches!(res.actions[0], Action::Bank(_)));
        assert!(matches!(res.actions[1], Action::Execute { .. }));
    }

    #[test]
    fn test_native_convert_rejects_wrong_denom_and_zero() {
        let unit = native();
        let info = MessageInfo::with_funds(addr("juno1alice"), vec![Coin::new(5u128, Denom::new("uatom"))]);
        assert!(matches!(
            unit.execute(&env(), &info, ExecuteMsg::Convert {}),
            Err(ConversionError::WrongAsset { .. })
        ));

        let info = MessageInfo::with_funds(addr("juno1alice"), vec![Coin::new(0u128, Denom::new("ujuno"))]);
        assert_eq!(
            unit.execute(&env(), &info, ExecuteMsg::Convert {}),
            Err(ConversionError::InvalidAmount)
        );
    }

    #[test]
    fn test_convert_on_tracked_unit_is_wrong_asset() {
        let info = MessageInfo::with_funds(addr("juno1alice"), vec![Coin::new(5u128, Denom::new("ujuno"))]);
        assert!(matches!(
            tracked().execute(&env(), &info, ExecuteMsg::Convert {}),
            Err(ConversionError::WrongAsset { .. })
        ));
    }

    #[test]
    fn test_hook_from_token_burns_via_token() {
        let info = MessageInfo::new(addr("contract0"));
        let res = tracked()
            .execute(&env(), &info, hook("juno1alice", 7, json!({"convert": {}})))
            .unwrap();
        assert_eq!(
            res.actions[0],
            Action::Execute {
                contract: addr("contract0"),
                msg: json!({"burn": {"amount": "7"}}),
                funds: vec![],
            }
        );
        assert_eq!(res.attribute("recipient"), Some("juno1alice"));
    }

    #[test]
    fn test_forged_hook_is_wrong_asset() {
        let info = MessageInfo::new(addr("juno1mallory"));
        let err = tracked()
            .execute(&env(), &info, hook("juno1mallory", 7, json!({"convert": {}})))
            .unwrap_err();
        assert!(matches!(err, ConversionError::WrongAsset { .. }));
    }

    #[test]
    fn test_hook_payload_and_funds_are_checked() {
        let unit = tracked();
        let err = unit
            .execute(
                &env(),
                &MessageInfo::new(addr("contract0")),
                hook("juno1alice", 7, json!({"withdraw": {}})),
            )
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnrecognizedPayload(_)));

        let info = MessageInfo::with_funds(addr("contract0"), vec![Coin::new(1u128, Denom::new("ujuno"))]);
        let err = unit
            .execute(&env(), &info, hook("juno1alice", 7, json!({"convert": {}})))
            .unwrap_err();
        assert_eq!(err, ConversionError::UnexpectedFunds);

        let err = unit
            .execute(
                &env(),
                &MessageInfo::new(addr("contract0")),
                hook("juno1alice", 0, json!({"convert": {}})),
            )
            .unwrap_err();
        assert_eq!(err, ConversionError::InvalidAmount);
    }

    #[test]
    fn test_get_config_reports_source_and_target() {
        let unit = tracked();
        let value = unit.query(QueryMsg::GetConfig {}).unwrap();
        assert_eq!(value["target_denom"], json!("factory/contract1/new"));
        assert_eq!(value["registry"], json!("contract1"));
        let config: ConversionConfig = serde_json::from_value(value).unwrap();
        assert_eq!(&config, unit.config());
    }

    #[test]
    fn test_instantiate_rejects_native_target() {
        let err = ConversionUnit::instantiate(InstantiateMsg {
            source: Source::Native {
                denom: Denom::new("ujuno"),
            },
            target_denom: Denom::new("uatom"),
            registry: addr("contract1"),
        })
        .unwrap_err();
        assert!(matches!(err, ConversionError::InvalidDenom { .. }));
    }
}
