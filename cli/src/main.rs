//! mintgate: drive a persisted host from the command line.
//!
//! Every command loads the state file, runs one request and, if the request
//! changed anything, writes the state back.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use mintgate_host::{ContractKind, GenesisConfig, Host, HostConfig, InstantiateRequest};
use mintgate_types::{Address, Coin, Denom};
use mintgate_utils::LogFormat;

#[derive(Parser)]
#[command(name = "mintgate", about = "Token minting authority registry and conversion host")]
struct Cli {
    /// Host state file.
    #[arg(long, default_value = "./mintgate.state", env = "MINTGATE_STATE")]
    state: PathBuf,

    /// Optional TOML file with host limits. Defaults apply when omitted.
    #[arg(long, env = "MINTGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "MINTGATE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "MINTGATE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Create a fresh state file from a genesis TOML.
    Init {
        #[arg(long)]
        genesis: PathBuf,
        /// Overwrite an existing state file.
        #[arg(long)]
        force: bool,
    },
    /// Deploy a contract.
    Instantiate {
        kind: ContractKind,
        #[arg(long)]
        sender: Address,
        /// Instantiate message as JSON.
        #[arg(long)]
        msg: String,
    },
    /// Execute a contract message.
    Execute {
        #[arg(long)]
        sender: Address,
        #[arg(long)]
        contract: Address,
        #[arg(long)]
        msg: String,
        /// Attached coins, comma-separated: "7ujuno,3factory/x/y".
        #[arg(long, value_delimiter = ',')]
        funds: Vec<Coin>,
    },
    /// Query a contract.
    Query {
        #[arg(long)]
        contract: Address,
        #[arg(long)]
        msg: String,
    },
    /// Read ledger balances.
    Balance {
        #[arg(long)]
        address: Address,
        #[arg(long)]
        denom: Option<Denom>,
    },
    /// Direct bank operations.
    Bank {
        #[command(subcommand)]
        action: BankCommand,
    },
}

#[derive(clap::Subcommand)]
enum BankCommand {
    Send {
        #[arg(long)]
        from: Address,
        #[arg(long)]
        to: Address,
        #[arg(long, value_delimiter = ',', required = true)]
        coins: Vec<Coin>,
    },
    CreateDenom {
        #[arg(long)]
        creator: Address,
        #[arg(long)]
        subdenom: String,
    },
    ChangeAdmin {
        #[arg(long)]
        authority: Address,
        #[arg(long)]
        denom: Denom,
        #[arg(long)]
        new_admin: Address,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let genesis = match &cli.command {
        Command::Init { genesis, .. } => Some(GenesisConfig::from_toml_file(genesis)?),
        _ => None,
    };
    let mut config = match (&cli.config, &genesis) {
        (Some(path), _) => HostConfig::from_toml_file(path)?,
        (None, Some(genesis)) => genesis.host_config(),
        (None, None) => HostConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    mintgate_utils::init_logging(config.log_format, &config.log_level)?;

    match cli.command {
        Command::Init { force, .. } => {
            if cli.state.exists() && !force {
                anyhow::bail!(
                    "{} already exists (pass --force to overwrite)",
                    cli.state.display()
                );
            }
            let genesis = genesis.context("genesis was parsed above")?;
            let host = Host::from_genesis(config, &genesis)?;
            host.save(&cli.state)?;
            tracing::info!(state = %cli.state.display(), "state initialised");
            print_json(&serde_json::json!({ "state": cli.state }))
        }
        Command::Instantiate { kind, sender, msg } => {
            let mut host = load(config, &cli.state)?;
            let request = InstantiateRequest::from_json(kind, parse_msg(&msg)?)?;
            let address = host.instantiate(&sender, request)?;
            host.save(&cli.state)?;
            print_json(&serde_json::json!({ "address": address, "kind": kind }))
        }
        Command::Execute {
            sender,
            contract,
            msg,
            funds,
        } => {
            let mut host = load(config, &cli.state)?;
            let execution = host.execute(&sender, &contract, parse_msg(&msg)?, funds)?;
            host.save(&cli.state)?;
            print_json(&execution)
        }
        Command::Query { contract, msg } => {
            let host = load(config, &cli.state)?;
            print_json(&host.query(&contract, parse_msg(&msg)?)?)
        }
        Command::Balance { address, denom } => {
            let host = load(config, &cli.state)?;
            match denom {
                Some(denom) => print_json(&Coin::new(host.balance(&address, &denom), denom)),
                None => print_json(&host.all_balances(&address)),
            }
        }
        Command::Bank { action } => {
            let mut host = load(config, &cli.state)?;
            let output = match action {
                BankCommand::Send { from, to, coins } => {
                    serde_json::to_value(host.bank_send(&from, &to, &coins)?)?
                }
                BankCommand::CreateDenom { creator, subdenom } => {
                    serde_json::json!({ "denom": host.create_denom(&creator, &subdenom)? })
                }
                BankCommand::ChangeAdmin {
                    authority,
                    denom,
                    new_admin,
                } => serde_json::to_value(host.change_denom_admin(&authority, &denom, &new_admin)?)?,
            };
            host.save(&cli.state)?;
            print_json(&output)
        }
    }
}

fn load(config: HostConfig, path: &Path) -> anyhow::Result<Host> {
    Host::load(config, path).with_context(|| {
        format!(
            "could not load {} (run `mintgate init --genesis FILE` first)",
            path.display()
        )
    })
}

fn parse_msg(raw: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(raw).with_context(|| format!("message is not valid JSON: {raw}"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
