/*
[INPUT]:  Parsed command-line arguments and a configured PaystackClient
[OUTPUT]: API responses rendered as JSON values
[POS]:    CLI layer - argument definitions and command dispatch
[UPDATE]: When adding subcommands or endpoint flags
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use paystack_adapter::{BankAccountRequest, PaystackClient, RefundRequest};
use serde_json::Value;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "paystack", version, about = "Paystack dedicated account and refund client")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
    #[arg(long = "dry-run")]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dedicated virtual accounts
    #[command(subcommand)]
    Accounts(AccountsCommand),
    /// Refund a transaction
    Refund(RefundArgs),
}

#[derive(Subcommand, Debug)]
pub enum AccountsCommand {
    /// Create and assign a dedicated account
    Create(CreateAccountArgs),
    /// Fetch one dedicated account
    Get {
        #[arg(value_name = "ID")]
        id_code: String,
    },
    /// List active NGN accounts
    List {
        #[arg(long, default_value_t = paystack_adapter::http::DEFAULT_PAGE_SIZE)]
        count: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

#[derive(Args, Debug)]
pub struct CreateAccountArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub preferred_bank: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
}

impl From<CreateAccountArgs> for BankAccountRequest {
    fn from(args: CreateAccountArgs) -> Self {
        Self {
            email: args.email,
            first_name: args.first_name,
            last_name: args.last_name,
            phone: args.phone,
            preferred_bank: args.preferred_bank,
            country: args.country,
        }
    }
}

#[derive(Args, Debug)]
pub struct RefundArgs {
    #[arg(long)]
    pub transaction: String,
    /// Amount in minor units; omit for a full refund
    #[arg(long)]
    pub amount: Option<u64>,
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long)]
    pub merchant_note: Option<String>,
    #[arg(long)]
    pub customer_note: Option<String>,
}

impl From<RefundArgs> for RefundRequest {
    fn from(args: RefundArgs) -> Self {
        Self {
            transaction: Some(args.transaction),
            currency: args.currency,
            amount: args.amount,
            merchant_note: args.merchant_note,
            customer_note: args.customer_note,
        }
    }
}

/// Execute one command and return the response as JSON
pub async fn run(client: &PaystackClient, command: Command) -> Result<Value> {
    let value = match command {
        Command::Accounts(AccountsCommand::Create(args)) => {
            let req = BankAccountRequest::from(args);
            info!(email = ?req.email, "assigning dedicated account");
            let response = client
                .dedicated_accounts()
                .create(&req)
                .await
                .context("create dedicated account")?;
            serde_json::to_value(response)?
        }
        Command::Accounts(AccountsCommand::Get { id_code }) => {
            info!(%id_code, "fetching dedicated account");
            let response = client
                .dedicated_accounts()
                .get(&id_code)
                .await
                .context("fetch dedicated account")?;
            serde_json::to_value(response)?
        }
        Command::Accounts(AccountsCommand::List { count, offset }) => {
            info!(count, offset, "listing dedicated accounts");
            let response = client
                .dedicated_accounts()
                .list_n(count, offset)
                .await
                .context("list dedicated accounts")?;
            serde_json::to_value(response)?
        }
        Command::Refund(args) => {
            let req = RefundRequest::from(args);
            info!(transaction = ?req.transaction, amount = ?req.amount, "requesting refund");
            let response = client
                .refunds()
                .refund(&req)
                .await
                .context("create refund")?;
            serde_json::to_value(response)?
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_defaults() {
        let cli = Cli::try_parse_from(["paystack", "accounts", "list"]).expect("parse");
        match cli.command {
            Command::Accounts(AccountsCommand::List { count, offset }) => {
                assert_eq!(count, 10);
                assert_eq!(offset, 0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.dry_run);
    }

    #[test]
    fn parses_refund_into_request() {
        let cli = Cli::try_parse_from([
            "paystack",
            "--dry-run",
            "refund",
            "--transaction",
            "T685312322670591",
            "--amount",
            "5000",
        ])
        .expect("parse");

        assert!(cli.dry_run);
        let Command::Refund(args) = cli.command else {
            panic!("expected refund command");
        };
        let req = RefundRequest::from(args);
        assert_eq!(req.transaction.as_deref(), Some("T685312322670591"));
        assert_eq!(req.amount, Some(5000));
        assert!(req.currency.is_none());
        assert!(req.merchant_note.is_none());
    }

    #[test]
    fn refund_requires_transaction() {
        assert!(Cli::try_parse_from(["paystack", "refund"]).is_err());
    }

    #[test]
    fn parses_create_flags() {
        let cli = Cli::try_parse_from([
            "paystack",
            "accounts",
            "create",
            "--email",
            "ada@example.com",
            "--first-name",
            "Ada",
            "--preferred-bank",
            "wema-bank",
        ])
        .expect("parse");

        let Command::Accounts(AccountsCommand::Create(args)) = cli.command else {
            panic!("expected create command");
        };
        let req = BankAccountRequest::from(args);
        assert_eq!(req.first_name.as_deref(), Some("Ada"));
        assert_eq!(req.preferred_bank.as_deref(), Some("wema-bank"));
        assert!(req.phone.is_none());
    }
}
