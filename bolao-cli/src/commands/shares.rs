use crate::commands::{format_numbers, money};
use bolao_core::error::rewrite_wallet_detail;
use bolao_core::{ApiClient, BolaoError, Result};
use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::Confirm;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum ShareCommands {
    /// Buy shares of a pool from the wallet balance
    Buy {
        pool_id: Uuid,
        /// Number of shares
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List the shares you own
    Mine,
    /// Show your per-pool results after settlement
    Results,
}

pub async fn handle_share_command(cmd: ShareCommands, client: &ApiClient) -> Result<()> {
    match cmd {
        ShareCommands::Buy {
            pool_id,
            quantity,
            yes,
        } => {
            if quantity == 0 {
                return Err(BolaoError::invalid_input("quantity must be at least 1"));
            }

            let pool = client.pools().get(pool_id).await?;
            let total = order_total(pool.share_price, quantity);
            println!(
                "{} — {} share(s) at {} each, total {}",
                pool.name,
                quantity,
                money(pool.share_price),
                money(total)
            );

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Confirm the purchase?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Purchase cancelled.");
                    return Ok(());
                }
            }

            match client.shares().buy(pool_id, quantity).await {
                Ok(resp) => {
                    println!("{}", resp.message);
                    println!("Paid: {}", money(resp.total_price));
                    println!("Remaining balance: {}", money(resp.remaining_balance));
                }
                Err(BolaoError::Api {
                    status,
                    detail: Some(detail),
                }) => {
                    // wallet-balance rejections get the fixed deposit hint
                    return Err(BolaoError::api(
                        status,
                        Some(rewrite_wallet_detail(&detail).to_string()),
                    ));
                }
                Err(e) => return Err(e),
            }
        }

        ShareCommands::Mine => {
            let shares = client.shares().mine().await?;
            if shares.is_empty() {
                println!("You own no shares yet.");
                return Ok(());
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Pool", "Draw", "Paid", "Status", "Bought at"]);
            for share in shares {
                table.add_row(vec![
                    share.pool_name.unwrap_or_else(|| share.pool_id.to_string()),
                    share
                        .draw_number
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "-".into()),
                    money(share.amount_paid),
                    share.pool_status.unwrap_or_else(|| "-".into()),
                    share.created_at.format("%Y-%m-%d %H:%M").to_string(),
                ]);
            }
            println!("{table}");
        }

        ShareCommands::Results => {
            let results = client.shares().my_results().await?;
            if results.is_empty() {
                println!("No settled pools with your shares yet.");
                return Ok(());
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Pool", "Draw", "Result", "My shares", "Prize"]);
            for result in results {
                table.add_row(vec![
                    result.pool_name,
                    result.draw_number.to_string(),
                    result
                        .result_numbers
                        .as_deref()
                        .map(format_numbers)
                        .unwrap_or_else(|| "pending".into()),
                    result.my_shares.to_string(),
                    result.prize.map(money).unwrap_or_else(|| "-".into()),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}

/// Display total computed client-side before submission; the authoritative
/// amount still comes back from the server.
fn order_total(share_price: f64, quantity: u32) -> f64 {
    share_price * quantity as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_total_is_quantity_times_price() {
        assert_eq!(order_total(5.0, 2), 10.0);
        assert_eq!(order_total(12.5, 4), 50.0);
    }
}
