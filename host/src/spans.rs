//! Span constructors for host requests.
//!
//! Every public host request runs inside one of these, so nested contract
//! and bank logs can be correlated with the request that caused them.

use mintgate_types::Address;
use tracing::{info_span, Span};

use crate::ContractKind;

pub fn execute_span(sender: &Address, contract: &Address) -> Span {
    info_span!("execute", sender = %sender, contract = %contract)
}

pub fn instantiate_span(creator: &Address, kind: ContractKind) -> Span {
    info_span!("instantiate", creator = %creator, kind = %kind)
}

pub fn query_span(contract: &Address) -> Span {
    info_span!("query", contract = %contract)
}

/// Direct bank requests (`bank_send`, `create_denom`, `change_denom_admin`).
pub fn bank_span(op: &'static str, actor: &Address) -> Span {
    info_span!("bank", op = op, actor = %actor)
}
