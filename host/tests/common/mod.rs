#![allow(dead_code)]

use mintgate_conversion::{self as conversion, Source};
use mintgate_host::{Execution, Host, HostConfig, HostError, InstantiateRequest};
use mintgate_ledger::Ledger;
use mintgate_registry as registry;
use mintgate_token::{self as token, InitialBalance};
use mintgate_types::{Address, Amount, Coin, Denom};
use serde_json::json;

pub const STARTING_FUNDS: u128 = 1_000;

pub fn addr(s: &str) -> Address {
    Address::new(s)
}

pub fn native() -> Denom {
    Denom::new("ujuno")
}

pub fn alice() -> Address {
    addr("juno1alice")
}

/// Addresses of one deployed registry + conversion unit pair.
pub struct Scenario {
    pub manager: Address,
    pub registry: Address,
    pub unit: Address,
    /// Set when the unit converts a tracked token.
    pub token: Option<Address>,
    pub target: Denom,
}

impl Scenario {
    pub fn token(&self) -> &Address {
        self.token.as_ref().expect("tracked scenario")
    }
}

/// Host on the reference ledger with alice holding native funds.
pub fn funded_host() -> Host {
    let mut host = Host::new(HostConfig::default());
    host.fund(&alice(), &Coin::new(STARTING_FUNDS, native())).unwrap();
    host
}

/// Create the target denom, deploy a registry holding its custody, and a
/// unit converting either native funds or a freshly deployed token that
/// alice holds [`STARTING_FUNDS`] of. The unit is not whitelisted yet.
pub fn deploy<L: Ledger + Clone>(host: &mut Host<L>, tracked: bool) -> Scenario {
    let manager = addr("juno1manager");
    let target = host.create_denom(&manager, "new").unwrap();

    let registry = host
        .instantiate(
            &manager,
            InstantiateRequest::Registry(registry::InstantiateMsg {
                manager: None,
                allowed_principals: vec![],
                denoms: vec![target.clone()],
            }),
        )
        .unwrap();
    host.change_denom_admin(&manager, &target, &registry).unwrap();

    let token = tracked.then(|| {
        host.instantiate(
            &manager,
            InstantiateRequest::Token(token::InstantiateMsg {
                name: "Legacy Token".into(),
                symbol: "LGCY".into(),
                decimals: 6,
                initial_balances: vec![InitialBalance {
                    address: alice(),
                    amount: Amount::new(STARTING_FUNDS),
                }],
                minter: None,
            }),
        )
        .unwrap()
    });
    let source = match &token {
        Some(token) => Source::Tracked {
            token: token.clone(),
        },
        None => Source::Native { denom: native() },
    };

    let unit = host
        .instantiate(
            &manager,
            InstantiateRequest::Conversion(conversion::InstantiateMsg {
                source,
                target_denom: target.clone(),
                registry: registry.clone(),
            }),
        )
        .unwrap();

    Scenario {
        manager,
        registry,
        unit,
        token,
        target,
    }
}

pub fn whitelist<L: Ledger + Clone>(host: &mut Host<L>, s: &Scenario, who: &Address) {
    host.execute(
        &s.manager,
        &s.registry,
        json!({"add_whitelist": {"addresses": [who]}}),
        vec![],
    )
    .unwrap();
}

pub fn convert_native<L: Ledger + Clone>(
    host: &mut Host<L>,
    s: &Scenario,
    amount: u128,
) -> Result<Execution, HostError> {
    host.execute(
        &alice(),
        &s.unit,
        json!({"convert": {}}),
        vec![Coin::new(amount, native())],
    )
}

/// Alice sends `amount` tokens to the unit with a convert payload.
pub fn convert_tracked<L: Ledger + Clone>(
    host: &mut Host<L>,
    s: &Scenario,
    amount: u128,
) -> Result<Execution, HostError> {
    host.execute(
        &alice(),
        s.token(),
        json!({"send": {"contract": s.unit, "amount": amount.to_string(), "msg": {"convert": {}}}}),
        vec![],
    )
}

pub fn token_balance<L: Ledger + Clone>(host: &Host<L>, token: &Address, who: &Address) -> u128 {
    let value = host
        .query(token, json!({"balance": {"address": who}}))
        .unwrap();
    let response: token::BalanceResponse = serde_json::from_value(value).unwrap();
    response.balance.raw()
}

pub fn token_supply<L: Ledger + Clone>(host: &Host<L>, token: &Address) -> u128 {
    let value = host.query(token, json!({"token_info": {}})).unwrap();
    let info: token::TokenInfo = serde_json::from_value(value).unwrap();
    info.total_supply.raw()
}
