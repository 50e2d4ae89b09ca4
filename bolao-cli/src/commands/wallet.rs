use crate::commands::money;
use bolao_core::types::TransactionKind;
use bolao_core::{ApiClient, BolaoError, Result};
use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Subcommand)]
pub enum WalletCommands {
    /// Show the wallet balances
    Balance,
    /// List wallet transactions
    Transactions {
        /// Filter by kind: credito or debito
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Show totals of credits and debits
    Summary,
    /// Create a Pix charge to fund the wallet
    Deposit {
        /// Amount in reais
        amount: f64,
        /// Free-form description attached to the charge
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
}

pub async fn handle_wallet_command(cmd: WalletCommands, client: &ApiClient) -> Result<()> {
    match cmd {
        WalletCommands::Balance => {
            let summary = client.wallet().summary().await?;
            println!("Available: {}", money(summary.available));
            println!("Blocked: {}", money(summary.blocked));
            println!("Total: {}", money(summary.total));
        }

        WalletCommands::Transactions { kind } => {
            let kind = kind.map(|k| parse_kind(&k)).transpose()?;
            let transactions = client.wallet().transactions(kind).await?;
            if transactions.is_empty() {
                println!("No transactions.");
                return Ok(());
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Date", "Kind", "Amount", "Source", "Balance after"]);
            for tx in transactions {
                let kind = match tx.kind {
                    TransactionKind::Credit => "credit",
                    TransactionKind::Debit => "debit",
                };
                table.add_row(vec![
                    tx.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    kind.to_string(),
                    money(tx.amount),
                    tx.source,
                    money(tx.balance_after),
                ]);
            }
            println!("{table}");
        }

        WalletCommands::Summary => {
            let summary = client.wallet().transactions_summary().await?;
            println!(
                "Credits: {} over {} transaction(s)",
                money(summary.credit.total),
                summary.credit.count
            );
            println!(
                "Debits: {} over {} transaction(s)",
                money(summary.debit.total),
                summary.debit.count
            );
            println!("Net movement: {}", money(summary.net));
        }

        WalletCommands::Deposit {
            amount,
            description,
        } => {
            if !(amount > 0.0) {
                return Err(BolaoError::invalid_input("amount must be positive"));
            }
            let charge = client.payments().create_pix(amount, description).await?;
            println!("Pix charge created for {}.", money(charge.amount));
            println!("Status: {}", charge.status);
            println!("Expires at: {}", charge.expires_at.format("%Y-%m-%d %H:%M"));
            println!();
            println!("Copy-and-paste code:");
            println!("{}", charge.qr_code);
        }
    }

    Ok(())
}

fn parse_kind(raw: &str) -> Result<TransactionKind> {
    match raw.to_lowercase().as_str() {
        "credito" | "credit" => Ok(TransactionKind::Credit),
        "debito" | "debit" => Ok(TransactionKind::Debit),
        _ => Err(BolaoError::invalid_input(format!(
            "unknown transaction kind '{raw}'; use credito or debito"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_filter_accepts_both_languages() {
        assert_eq!(parse_kind("credito").unwrap(), TransactionKind::Credit);
        assert_eq!(parse_kind("DEBIT").unwrap(), TransactionKind::Debit);
        assert!(parse_kind("other").is_err());
    }
}
