//! The host: single writer over the ledger and the contract table.
//!
//! Every public mutating call is one request. A request checkpoints the
//! whole [`World`] first; if the request fails at any depth the checkpoint is
//! put back, so no partial effect of a failed request is ever observable.

use std::collections::BTreeMap;

use mintgate_ledger::{Ledger, MemoryLedger};
use mintgate_messages::{Action, Attribute, BankAction, Deps, Env, Event, MessageInfo, Response};
use mintgate_types::{Address, Amount, Coin, Denom};
use serde::{Deserialize, Serialize};

use crate::config::{GenesisConfig, HostConfig};
use crate::contract::{Contract, InstantiateRequest};
use crate::spans;
use crate::HostError;

/// Everything a request can change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World<L> {
    pub ledger: L,
    pub contracts: BTreeMap<Address, Contract>,
    /// Sequence number of the next contract address.
    pub next_seq: u64,
}

impl<L> World<L> {
    pub fn new(ledger: L) -> Self {
        Self {
            ledger,
            contracts: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

/// Outcome of a committed request: the steps it took, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    pub events: Vec<Event>,
}

impl Execution {
    /// Value of `key` on the first event of `kind` emitted by `source`.
    pub fn attribute(&self, source: &Address, kind: &str, key: &str) -> Option<&str> {
        self.events
            .iter()
            .filter(|e| &e.source == source && e.kind == kind)
            .flat_map(|e| e.attributes.iter())
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Per-request bookkeeping: remaining action budget and emitted events.
struct Request {
    actions_left: usize,
    limit: usize,
    events: Vec<Event>,
}

impl Request {
    fn new(limit: usize) -> Self {
        Self {
            actions_left: limit,
            limit,
            events: Vec::new(),
        }
    }

    fn consume(&mut self) -> Result<(), HostError> {
        if self.actions_left == 0 {
            return Err(HostError::BudgetExceeded {
                resource: "actions",
                limit: self.limit,
            });
        }
        self.actions_left -= 1;
        Ok(())
    }

    fn record(&mut self, source: &Address, kind: &str, attributes: Vec<Attribute>) {
        self.events.push(Event {
            source: source.clone(),
            kind: kind.to_string(),
            attributes,
        });
    }
}

pub struct Host<L = MemoryLedger> {
    config: HostConfig,
    world: World<L>,
}

impl Host<MemoryLedger> {
    pub fn new(config: HostConfig) -> Self {
        Self::with_ledger(config, MemoryLedger::new())
    }

    /// Build a host whose ledger holds the genesis natives, balances and
    /// factory denoms.
    pub fn from_genesis(config: HostConfig, genesis: &GenesisConfig) -> Result<Self, HostError> {
        let mut ledger = MemoryLedger::new();
        for denom in &genesis.native_denoms {
            ledger.register_native(denom.clone());
        }
        for denom in &genesis.factory_denoms {
            ledger.create_denom(&denom.creator, &denom.subdenom)?;
        }
        for balance in &genesis.balances {
            for coin in balance.coins.iter().filter(|c| !c.amount.is_zero()) {
                ledger.fund(&balance.address, coin)?;
            }
        }
        tracing::info!(
            natives = genesis.native_denoms.len(),
            factory_denoms = genesis.factory_denoms.len(),
            accounts = genesis.balances.len(),
            "genesis applied"
        );
        Ok(Self::with_ledger(config, ledger))
    }

    /// Credit funds outside any request. Intended for test and genesis setup.
    pub fn fund(&mut self, holder: &Address, coin: &Coin) -> Result<(), HostError> {
        Ok(self.world.ledger.fund(holder, coin)?)
    }
}

impl<L: Ledger + Clone> Host<L> {
    pub fn with_ledger(config: HostConfig, ledger: L) -> Self {
        Self::from_world(config, World::new(ledger))
    }

    pub fn from_world(config: HostConfig, world: World<L>) -> Self {
        Self { config, world }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn world(&self) -> &World<L> {
        &self.world
    }

    pub fn ledger(&self) -> &L {
        &self.world.ledger
    }

    /// Direct ledger access outside any request, for test setup.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.world.ledger
    }

    pub fn contract(&self, address: &Address) -> Option<&Contract> {
        self.world.contracts.get(address)
    }

    // ── Requests ────────────────────────────────────────────────────────

    /// Deploy a contract at the next `contract{n}` address.
    pub fn instantiate(&mut self, creator: &Address, request: InstantiateRequest) -> Result<Address, HostError> {
        let span = spans::instantiate_span(creator, request.kind());
        let _enter = span.enter();
        let limit = self.config.max_actions;

        self.atomic(|host| {
            let address = Address::contract(host.world.next_seq);
            host.world.next_seq += 1;

            let (contract, response) = Contract::instantiate(&MessageInfo::new(creator.clone()), request)?;
            tracing::debug!(%address, kind = %contract.kind(), "contract deployed");
            host.world.contracts.insert(address.clone(), contract);

            let mut req = Request::new(limit);
            req.record(&address, "instantiate", response.attributes);
            host.apply_actions(&address, response.actions, 0, &mut req)?;
            Ok(address)
        })
    }

    /// Call `contract` as `sender`, attaching `funds` as call value.
    pub fn execute(
        &mut self,
        sender: &Address,
        contract: &Address,
        msg: serde_json::Value,
        funds: Vec<Coin>,
    ) -> Result<Execution, HostError> {
        let span = spans::execute_span(sender, contract);
        let _enter = span.enter();
        let limit = self.config.max_actions;

        self.atomic(|host| {
            let mut req = Request::new(limit);
            host.call(sender, contract, msg, funds, 0, &mut req)?;
            Ok(Execution { events: req.events })
        })
    }

    pub fn query(&self, contract: &Address, msg: serde_json::Value) -> Result<serde_json::Value, HostError> {
        let span = spans::query_span(contract);
        let _enter = span.enter();
        let target = self
            .world
            .contracts
            .get(contract)
            .ok_or_else(|| HostError::ContractNotFound(contract.clone()))?;
        let env = Env {
            contract: contract.clone(),
        };
        target.query(Deps::new(&self.world.ledger), &env, msg)
    }

    /// Ordinary bank send between accounts.
    pub fn bank_send(&mut self, from: &Address, to: &Address, coins: &[Coin]) -> Result<Execution, HostError> {
        let span = spans::bank_span("send", from);
        let _enter = span.enter();
        let action = BankAction::Send {
            to: to.clone(),
            amount: coins.to_vec(),
        };
        self.bank_request(from, action)
    }

    /// Create `factory/{creator}/{subdenom}` with `creator` as admin.
    pub fn create_denom(&mut self, creator: &Address, subdenom: &str) -> Result<Denom, HostError> {
        let span = spans::bank_span("create_denom", creator);
        let _enter = span.enter();
        self.atomic(|host| Ok(host.world.ledger.create_denom(creator, subdenom)?))
    }

    /// Reassign ledger admin rights of `denom`, with `authority` as the current admin.
    pub fn change_denom_admin(
        &mut self,
        authority: &Address,
        denom: &Denom,
        new_admin: &Address,
    ) -> Result<Execution, HostError> {
        let span = spans::bank_span("change_admin", authority);
        let _enter = span.enter();
        let action = BankAction::ChangeAdmin {
            denom: denom.clone(),
            new_admin: new_admin.clone(),
        };
        self.bank_request(authority, action)
    }

    // ── Ledger reads ────────────────────────────────────────────────────

    pub fn balance(&self, holder: &Address, denom: &Denom) -> Amount {
        self.world.ledger.balance_of(holder, denom)
    }

    pub fn all_balances(&self, holder: &Address) -> Vec<Coin> {
        self.world.ledger.all_balances(holder)
    }

    pub fn total_supply(&self, denom: &Denom) -> Amount {
        self.world.ledger.total_supply(denom)
    }

    pub fn denom_admin(&self, denom: &Denom) -> Option<Address> {
        self.world.ledger.denom_admin(denom)
    }

    // ── Dispatch ────────────────────────────────────────────────────────

    fn atomic<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T, HostError>) -> Result<T, HostError> {
        let checkpoint = self.world.clone();
        match op(self) {
            Ok(value) => {
                tracing::info!("request committed");
                Ok(value)
            }
            Err(e) => {
                self.world = checkpoint;
                tracing::warn!(error = %e, "request rolled back");
                Err(e)
            }
        }
    }

    fn bank_request(&mut self, actor: &Address, action: BankAction) -> Result<Execution, HostError> {
        let limit = self.config.max_actions;
        self.atomic(|host| {
            let mut req = Request::new(limit);
            req.consume()?;
            host.apply_bank(actor, action, &mut req)?;
            Ok(Execution { events: req.events })
        })
    }

    fn call(
        &mut self,
        sender: &Address,
        contract: &Address,
        msg: serde_json::Value,
        funds: Vec<Coin>,
        depth: usize,
        req: &mut Request,
    ) -> Result<(), HostError> {
        if depth > self.config.max_call_depth {
            return Err(HostError::BudgetExceeded {
                resource: "call depth",
                limit: self.config.max_call_depth,
            });
        }
        if !self.world.contracts.contains_key(contract) {
            return Err(HostError::ContractNotFound(contract.clone()));
        }

        // Call value lands in the contract's balance before its handler runs.
        for coin in funds.iter().filter(|c| !c.amount.is_zero()) {
            self.world.ledger.transfer(sender, contract, coin)?;
        }

        let env = Env {
            contract: contract.clone(),
        };
        let info = MessageInfo::with_funds(sender.clone(), funds);
        let World {
            ledger, contracts, ..
        } = &mut self.world;
        let target = contracts
            .get_mut(contract)
            .ok_or_else(|| HostError::ContractNotFound(contract.clone()))?;
        tracing::debug!(%sender, %contract, depth, kind = %target.kind(), "dispatch");
        let Response {
            actions,
            attributes,
        } = target.execute(Deps::new(&*ledger), &env, &info, msg)?;

        req.record(contract, "execute", attributes);
        self.apply_actions(contract, actions, depth, req)
    }

    fn apply_actions(
        &mut self,
        actor: &Address,
        actions: Vec<Action>,
        depth: usize,
        req: &mut Request,
    ) -> Result<(), HostError> {
        for action in actions {
            req.consume()?;
            match action {
                Action::Bank(bank) => self.apply_bank(actor, bank, req)?,
                Action::Execute {
                    contract,
                    msg,
                    funds,
                } => self.call(actor, &contract, msg, funds, depth + 1, req)?,
            }
        }
        Ok(())
    }

    /// Run one bank primitive with `actor` as its authority.
    fn apply_bank(&mut self, actor: &Address, action: BankAction, req: &mut Request) -> Result<(), HostError> {
        tracing::debug!(%actor, %action, "bank action");
        let ledger = &mut self.world.ledger;
        match &action {
            BankAction::Send { to, amount } => {
                for coin in amount.iter().filter(|c| !c.amount.is_zero()) {
                    ledger.transfer(actor, to, coin)?;
                }
            }
            BankAction::Mint {
                denom,
                recipient,
                amount,
            } => ledger.mint(actor, denom, recipient, *amount)?,
            BankAction::Burn {
                denom,
                holder,
                amount,
            } => ledger.burn(actor, denom, holder, *amount)?,
            BankAction::ForceTransfer {
                denom,
                from,
                to,
                amount,
            } => ledger.force_transfer(actor, denom, from, to, *amount)?,
            BankAction::ChangeAdmin { denom, new_admin } => ledger.set_denom_admin(actor, denom, new_admin)?,
        }
        req.record(
            actor,
            "bank",
            vec![
                Attribute {
                    key: "action".into(),
                    value: action.name().into(),
                },
                Attribute {
                    key: "detail".into(),
                    value: action.to_string(),
                },
            ],
        );
        Ok(())
    }
}
