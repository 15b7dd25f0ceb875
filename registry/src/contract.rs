//! Registry contract: instantiation, privileged operations and queries.

use std::collections::BTreeSet;

use mintgate_messages::{BankAction, Deps, Env, MessageInfo, Response};
use mintgate_ledger::LedgerError;
use mintgate_types::{pretty_coins, Address, Amount, Coin, Denom};
use serde::{Deserialize, Serialize};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

/// A token minting authority registry instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    config: RegistryConfig,
}

impl Registry {
    /// Validate `msg` and build the registry's initial configuration.
    ///
    /// Every initial denom must be a factory denom. Custody is not checked
    /// here: the admin handoff to the new registry usually happens after it
    /// exists, and every privileged call checks custody anyway.
    pub fn instantiate(info: &MessageInfo, msg: InstantiateMsg) -> Result<(Self, Response), RegistryError> {
        if msg.denoms.is_empty() {
            return Err(RegistryError::NoDenoms);
        }
        for denom in &msg.denoms {
            if !denom.is_factory() {
                return Err(RegistryError::InvalidDenom {
                    denom: denom.clone(),
                    reason: format!("denom must start with '{}'", Denom::FACTORY_PREFIX),
                });
            }
        }

        let config = RegistryConfig {
            manager: msg.manager.unwrap_or_else(|| info.sender.clone()),
            allowed_principals: msg.allowed_principals.into_iter().collect(),
            administered_denoms: msg.denoms.into_iter().collect(),
        };
        tracing::info!(
            manager = %config.manager,
            principals = config.allowed_principals.len(),
            denoms = config.administered_denoms.len(),
            "registry instantiated"
        );

        let response = Response::new()
            .add_attribute("method", "instantiate")
            .add_attribute("manager", &config.manager);
        Ok((Self { config }, response))
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Dispatch an execute message.
    pub fn execute(
        &mut self,
        deps: Deps<'_>,
        env: &Env,
        info: &MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, RegistryError> {
        tracing::debug!(method = msg.name(), sender = %info.sender, "registry execute");
        if !matches!(msg, ExecuteMsg::Burn {}) {
            ensure_no_funds(info)?;
        }
        let caller = &info.sender;
        match msg {
            ExecuteMsg::Burn {} => self.burn(env, info),
            ExecuteMsg::Mint {
                recipient,
                denom,
                amount,
            } => self.mint(deps, env, caller, &recipient, &denom, amount),
            ExecuteMsg::BurnFrom {
                holder,
                denom,
                amount,
            } => self.burn_from(deps, env, caller, &holder, &denom, amount),
            ExecuteMsg::ForceTransfer {
                from,
                to,
                denom,
                amount,
            } => self.force_transfer(deps, env, caller, &from, &to, &denom, amount),
            ExecuteMsg::AddWhitelist { addresses } => self.add_allowed_principals(caller, addresses),
            ExecuteMsg::RemoveWhitelist { addresses } => {
                self.remove_allowed_principals(caller, &addresses)
            }
            ExecuteMsg::AddDenom { denoms } => self.add_denoms(caller, denoms),
            ExecuteMsg::RemoveDenom { denoms } => self.remove_denoms(caller, &denoms),
            ExecuteMsg::TransferAdmin { denom, new_admin } => {
                self.transfer_denom_admin(deps, env, caller, &denom, &new_admin)
            }
        }
    }

    /// Answer a query. Balances are always read through from the ledger.
    pub fn query(&self, deps: Deps<'_>, msg: QueryMsg) -> Result<serde_json::Value, RegistryError> {
        match msg {
            QueryMsg::GetConfig {} => to_value(&self.config),
            QueryMsg::GetBalance { address, denom } => {
                let amount = deps.ledger.balance_of(&address, &denom);
                to_value(&Coin::new(amount, denom))
            }
            QueryMsg::GetAllBalances { address } => to_value(&deps.ledger.all_balances(&address)),
        }
    }

    // ── Whitelisted operations ──────────────────────────────────────────

    pub fn mint(
        &self,
        deps: Deps<'_>,
        env: &Env,
        caller: &Address,
        recipient: &Address,
        denom: &Denom,
        amount: Amount,
    ) -> Result<Response, RegistryError> {
        self.ensure_privileged(deps, env, caller, denom, amount)?;
        tracing::info!(%caller, %recipient, %denom, %amount, "mint requested");

        Ok(Response::new()
            .add_attribute("method", "mint")
            .add_attribute("to_address", recipient)
            .add_attribute("amount", Coin::new(amount, denom.clone()))
            .add_bank(BankAction::Mint {
                denom: denom.clone(),
                recipient: recipient.clone(),
                amount,
            }))
    }

    /// Burn from `holder`. Whether the holder can cover `amount` is left to
    /// the ledger.
    pub fn burn_from(
        &self,
        deps: Deps<'_>,
        env: &Env,
        caller: &Address,
        holder: &Address,
        denom: &Denom,
        amount: Amount,
    ) -> Result<Response, RegistryError> {
        self.ensure_privileged(deps, env, caller, denom, amount)?;
        tracing::info!(%caller, %holder, %denom, %amount, "burn requested");

        Ok(Response::new()
            .add_attribute("method", "burn_from")
            .add_attribute("from_address", holder)
            .add_attribute("amount", Coin::new(amount, denom.clone()))
            .add_bank(BankAction::Burn {
                denom: denom.clone(),
                holder: holder.clone(),
                amount,
            }))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn force_transfer(
        &self,
        deps: Deps<'_>,
        env: &Env,
        caller: &Address,
        from: &Address,
        to: &Address,
        denom: &Denom,
        amount: Amount,
    ) -> Result<Response, RegistryError> {
        self.ensure_privileged(deps, env, caller, denom, amount)?;
        tracing::warn!(%caller, %from, %to, %denom, %amount, "force transfer requested");

        Ok(Response::new()
            .add_attribute("method", "force_transfer")
            .add_attribute("from_address", from)
            .add_attribute("to_address", to)
            .add_attribute("amount", Coin::new(amount, denom.clone()))
            .add_bank(BankAction::ForceTransfer {
                denom: denom.clone(),
                from: from.clone(),
                to: to.clone(),
                amount,
            }))
    }

    // ── Public operations ───────────────────────────────────────────────

    /// Burn the attached coins this registry administers and hand the rest back.
    pub fn burn(&self, env: &Env, info: &MessageInfo) -> Result<Response, RegistryError> {
        if info.funds.iter().all(|c| c.amount.is_zero()) {
            return Err(RegistryError::NoFunds);
        }

        let (burned, returned): (Vec<Coin>, Vec<Coin>) = info
            .funds
            .iter()
            .filter(|c| !c.amount.is_zero())
            .cloned()
            .partition(|c| self.config.administers(&c.denom));

        let mut response = Response::new()
            .add_attribute("method", "burn")
            .add_attribute("burned", pretty_coins(&burned));
        for coin in &burned {
            response = response.add_bank(BankAction::Burn {
                denom: coin.denom.clone(),
                holder: env.contract.clone(),
                amount: coin.amount,
            });
        }
        if !returned.is_empty() {
            response = response
                .add_attribute("returned", pretty_coins(&returned))
                .add_bank(BankAction::Send {
                    to: info.sender.clone(),
                    amount: returned,
                });
        }
        Ok(response)
    }

    // ── Manager operations ──────────────────────────────────────────────

    pub fn add_allowed_principals(
        &mut self,
        caller: &Address,
        addresses: Vec<Address>,
    ) -> Result<Response, RegistryError> {
        self.config.ensure_manager(caller)?;
        let added = extend_counting(&mut self.config.allowed_principals, addresses);
        tracing::info!(added, total = self.config.allowed_principals.len(), "whitelist extended");
        Ok(Response::new()
            .add_attribute("method", "add_whitelist")
            .add_attribute("added", added))
    }

    pub fn remove_allowed_principals(
        &mut self,
        caller: &Address,
        addresses: &[Address],
    ) -> Result<Response, RegistryError> {
        self.config.ensure_manager(caller)?;
        let removed = remove_counting(&mut self.config.allowed_principals, addresses);
        tracing::info!(removed, total = self.config.allowed_principals.len(), "whitelist reduced");
        Ok(Response::new()
            .add_attribute("method", "remove_whitelist")
            .add_attribute("removed", removed))
    }

    /// Start tracking `denoms`. Does not acquire ledger custody.
    pub fn add_denoms(&mut self, caller: &Address, denoms: Vec<Denom>) -> Result<Response, RegistryError> {
        self.config.ensure_manager(caller)?;
        let added = extend_counting(&mut self.config.administered_denoms, denoms);
        tracing::info!(added, total = self.config.administered_denoms.len(), "denoms added");
        Ok(Response::new()
            .add_attribute("method", "add_denom")
            .add_attribute("added", added))
    }

    /// Stop tracking `denoms`. Does not give up ledger custody.
    pub fn remove_denoms(&mut self, caller: &Address, denoms: &[Denom]) -> Result<Response, RegistryError> {
        self.config.ensure_manager(caller)?;
        let removed = remove_counting(&mut self.config.administered_denoms, denoms);
        tracing::info!(removed, total = self.config.administered_denoms.len(), "denoms removed");
        Ok(Response::new()
            .add_attribute("method", "remove_denom")
            .add_attribute("removed", removed))
    }

    /// Hand the ledger admin rights of `denom` to `new_admin` and stop
    /// tracking it.
    ///
    /// The local removal happens in the same atomic request as the ledger
    /// handoff, so it only sticks if the ledger accepts. A denom held in
    /// custody but not tracked locally can be handed off too.
    pub fn transfer_denom_admin(
        &mut self,
        deps: Deps<'_>,
        env: &Env,
        caller: &Address,
        denom: &Denom,
        new_admin: &Address,
    ) -> Result<Response, RegistryError> {
        self.config.ensure_manager(caller)?;
        if new_admin == &env.contract {
            return Err(RegistryError::InvalidDenom {
                denom: denom.clone(),
                reason: "new admin is this registry".into(),
            });
        }
        ensure_custody(deps, env, denom)?;

        let was_tracked = self.config.administered_denoms.remove(denom);
        tracing::info!(%denom, %new_admin, was_tracked, "denom admin handoff requested");

        Ok(Response::new()
            .add_attribute("method", "transfer_admin")
            .add_attribute("denom", denom)
            .add_attribute("new_admin", new_admin)
            .add_bank(BankAction::ChangeAdmin {
                denom: denom.clone(),
                new_admin: new_admin.clone(),
            }))
    }

    /// Whitelist, administered set, amount and live custody, in that order.
    fn ensure_privileged(
        &self,
        deps: Deps<'_>,
        env: &Env,
        caller: &Address,
        denom: &Denom,
        amount: Amount,
    ) -> Result<(), RegistryError> {
        self.config.ensure_allowed(caller)?;
        self.config.ensure_administered(denom)?;
        if amount.is_zero() {
            return Err(RegistryError::InvalidAmount);
        }
        ensure_custody(deps, env, denom)
    }
}

/// The ledger must list this registry as the admin of `denom` right now.
fn ensure_custody(deps: Deps<'_>, env: &Env, denom: &Denom) -> Result<(), RegistryError> {
    if deps.ledger.is_denom_admin(denom, &env.contract) {
        return Ok(());
    }
    if !deps.ledger.denom_exists(denom) {
        return Err(LedgerError::UnknownDenom(denom.clone()).into());
    }
    Err(LedgerError::NotDenomAdmin {
        denom: denom.clone(),
        caller: env.contract.clone(),
        admin: deps.ledger.denom_admin(denom),
    }
    .into())
}

/// Only `burn {}` is payable.
fn ensure_no_funds(info: &MessageInfo) -> Result<(), RegistryError> {
    if info.funds.iter().any(|c| !c.amount.is_zero()) {
        return Err(RegistryError::UnexpectedFunds);
    }
    Ok(())
}

fn extend_counting<T: Ord>(set: &mut BTreeSet<T>, items: Vec<T>) -> usize {
    items.into_iter().map(|item| set.insert(item)).filter(|inserted| *inserted).count()
}

fn remove_counting<T: Ord>(set: &mut BTreeSet<T>, items: &[T]) -> usize {
    items.iter().filter(|item| set.remove(*item)).count()
}

fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value, RegistryError> {
    serde_json::to_value(value).map_err(|e| RegistryError::Serialization(e.to_string()))
}
