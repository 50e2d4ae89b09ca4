use crate::commands::pools::print_settlement;
use crate::commands::{format_numbers, money};
use bolao_core::types::{PoolCreate, PoolUpdate};
use bolao_core::{ApiClient, BolaoError, NumberPicker, Result};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List pools, including closed and settled ones
    Pools {
        /// Filter by status (aberto, fechado, apurado, cancelado)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Create a pool
    Create {
        name: String,
        /// Official draw number the pool plays
        #[arg(long)]
        draw_number: u32,
        #[arg(long)]
        total_shares: u32,
        /// Price per share in reais
        #[arg(long)]
        share_price: f64,
        #[arg(long)]
        description: Option<String>,
        /// Sales deadline, RFC 3339 (e.g. 2026-09-01T18:00:00Z)
        #[arg(long)]
        closes_at: Option<DateTime<Utc>>,
    },
    /// Update fields of a pool
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        draw_number: Option<u32>,
        #[arg(long)]
        total_shares: Option<u32>,
        #[arg(long)]
        share_price: Option<f64>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        closes_at: Option<DateTime<Utc>>,
    },
    /// Close a pool for purchases
    Close { id: Uuid },
    /// Delete a pool
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Add a game to a pool (interactive grid when --numbers is omitted)
    AddGame {
        pool_id: Uuid,
        /// Comma-separated numbers, e.g. 1,2,3,...,15
        #[arg(short, long)]
        numbers: Option<String>,
    },
    /// Remove a game from a pool
    RemoveGame { pool_id: Uuid, game_id: Uuid },
    /// Import games from a CSV file (parsed server-side)
    UploadCsv { pool_id: Uuid, file: PathBuf },
    /// Settle a pool: against --numbers when given, otherwise against the
    /// official draw
    Settle {
        pool_id: Uuid,
        /// Drawn numbers, comma-separated
        #[arg(short, long)]
        numbers: Option<String>,
    },
    /// Settle one specific draw of a teimosinha pool
    SettleDraw { pool_id: Uuid, draw_number: u32 },
    /// Settle every pending draw of a teimosinha pool
    SettlePending { pool_id: Uuid },
    /// Show which draws of a pool are settled or pending
    SettlementStatus { pool_id: Uuid },
    /// Platform dashboard: quick stats, revenue and recent activity
    Stats,
}

pub async fn handle_admin_command(cmd: AdminCommands, client: &ApiClient) -> Result<()> {
    match cmd {
        AdminCommands::Pools { status } => {
            let pools = client.admin().list_pools(status.as_deref()).await?;
            if pools.is_empty() {
                println!("No pools found.");
                return Ok(());
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["ID", "Name", "Draw", "Status", "Sold", "Revenue"]);
            for pool in pools {
                table.add_row(vec![
                    pool.id.to_string(),
                    pool.name.clone(),
                    pool.draw_number.to_string(),
                    pool.status.to_string(),
                    format!("{}/{}", pool.sold(), pool.total_shares),
                    pool.total_revenue.map(money).unwrap_or_else(|| "-".into()),
                ]);
            }
            println!("{table}");
        }

        AdminCommands::Create {
            name,
            draw_number,
            total_shares,
            share_price,
            description,
            closes_at,
        } => {
            if total_shares == 0 {
                return Err(BolaoError::invalid_input("total shares must be at least 1"));
            }
            if !(share_price > 0.0) {
                return Err(BolaoError::invalid_input("share price must be positive"));
            }
            let pool = client
                .admin()
                .create_pool(&PoolCreate {
                    name,
                    description,
                    draw_number,
                    total_shares,
                    share_price,
                    status: None,
                    closes_at,
                })
                .await?;
            println!("Pool '{}' created with id {}.", pool.name, pool.id);
        }

        AdminCommands::Update {
            id,
            name,
            description,
            draw_number,
            total_shares,
            share_price,
            status,
            closes_at,
        } => {
            let update = PoolUpdate {
                name,
                description,
                draw_number,
                total_shares,
                share_price,
                status,
                closes_at,
            };
            let pool = client.admin().update_pool(id, &update).await?;
            println!("Pool '{}' updated.", pool.name);
        }

        AdminCommands::Close { id } => {
            let resp = client.admin().close_pool(id).await?;
            println!("{}", resp.message);
        }

        AdminCommands::Delete { id, force } => {
            if !force {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Delete pool {id}? This action cannot be undone."
                    ))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }
            let resp = client.admin().delete_pool(id).await?;
            println!("{}", resp.message);
        }

        AdminCommands::AddGame { pool_id, numbers } => {
            let numbers = match numbers {
                Some(list) => build_selection(&parse_numbers(&list)?)?,
                None => pick_interactively()?,
            };
            let games = client.admin().add_games(pool_id, vec![numbers]).await?;
            for game in games {
                println!("Game added: {}", format_numbers(&game.numbers));
            }
        }

        AdminCommands::RemoveGame { pool_id, game_id } => {
            client.admin().remove_game(pool_id, game_id).await?;
            println!("Game {game_id} removed.");
        }

        AdminCommands::UploadCsv { pool_id, file } => {
            let report = client.admin().upload_games_csv(pool_id, &file).await?;
            println!("Imported {} game(s).", report.imported);
            for error in &report.errors {
                println!("  rejected: {error}");
            }
        }

        AdminCommands::Settle { pool_id, numbers } => {
            let result = match numbers {
                Some(list) => {
                    let drawn = build_selection(&parse_numbers(&list)?)?;
                    client.admin().settle_manual(pool_id, drawn).await?
                }
                None => client.admin().settle_automatic(pool_id).await?,
            };
            println!("Pool settled.");
            print_settlement(&result);
        }

        AdminCommands::SettleDraw {
            pool_id,
            draw_number,
        } => {
            let result = client.admin().settle_draw(pool_id, draw_number).await?;
            println!(
                "Draw {} settled: {}",
                result.draw_number,
                format_numbers(&result.result_numbers)
            );
        }

        AdminCommands::SettlePending { pool_id } => {
            let settlement = client.admin().settle_pending(pool_id).await?;
            if let Some(message) = &settlement.message {
                println!("{message}");
            }
            for draw in &settlement.results {
                println!(
                    "Draw {}: {}",
                    draw.draw_number,
                    format_numbers(&draw.result_numbers)
                );
            }
        }

        AdminCommands::SettlementStatus { pool_id } => {
            let status = client.admin().settlement_status(pool_id).await?;
            println!("Status: {}", status.status);
            if !status.settled_draws.is_empty() {
                println!(
                    "Settled draws: {}",
                    status
                        .settled_draws
                        .iter()
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            if !status.pending_draws.is_empty() {
                println!(
                    "Pending draws: {}",
                    status
                        .pending_draws
                        .iter()
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }

        AdminCommands::Stats => {
            let stats = client.admin().quick_stats().await?;
            println!("Active pools: {}", stats.active_pools);
            println!("Shares sold: {}", stats.shares_sold);
            println!("Revenue: {}", money(stats.total_revenue));
            println!("Users: {}", stats.user_count);
            println!("Pending payments: {}", stats.pending_payments);

            let revenue = client.admin().revenue().await?;
            if !revenue.is_empty() {
                println!("\nRevenue by day:");
                for point in revenue {
                    println!("  {}: {}", point.date, money(point.revenue));
                }
            }

            let activity = client.admin().activity().await?;
            if !activity.is_empty() {
                println!("\nRecent activity:");
                for entry in activity {
                    println!(
                        "  {} — {} ({})",
                        entry.date.format("%Y-%m-%d %H:%M"),
                        entry.description,
                        money(entry.amount)
                    );
                }
            }
        }
    }

    Ok(())
}

fn parse_numbers(raw: &str) -> Result<Vec<u8>> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| BolaoError::invalid_input(format!("'{}' is not a number", part.trim())))
        })
        .collect()
}

/// Funnels a raw list through the picker so a game always carries exactly 15
/// distinct numbers in 1..=25, sorted ascending.
fn build_selection(numbers: &[u8]) -> Result<Vec<u8>> {
    let mut picker = NumberPicker::default();
    for &n in numbers {
        if n < 1 || n > picker.universe() {
            return Err(BolaoError::invalid_input(format!(
                "{n} is outside the 1..={} grid",
                picker.universe()
            )));
        }
        if !picker.toggle(n) {
            return Err(BolaoError::invalid_input(format!(
                "duplicate or excess number {n}; a game takes exactly {} distinct numbers",
                picker.picks()
            )));
        }
    }
    picker.confirm().ok_or_else(|| {
        BolaoError::invalid_input("a game takes exactly 15 distinct numbers between 1 and 25")
    })
}

/// Grid entry at the terminal: numbers toggle in and out until the selection
/// is full, then it is confirmed.
fn pick_interactively() -> Result<Vec<u8>> {
    let mut picker = NumberPicker::default();
    println!(
        "Pick {} numbers between 1 and {}. Enter a number to toggle it, 'c' to clear.",
        picker.picks(),
        picker.universe()
    );
    loop {
        println!(
            "Selected ({}/{}): {}",
            picker.count(),
            picker.picks(),
            format_numbers(&picker.selected())
        );
        if picker.is_full() {
            if let Some(numbers) = picker.confirm() {
                return Ok(numbers);
            }
        }
        let entry: String = Input::new().with_prompt("Toggle").interact_text()?;
        let entry = entry.trim();
        if entry.eq_ignore_ascii_case("c") {
            picker.clear();
            continue;
        }
        match entry.parse::<u8>() {
            Ok(n) if n >= 1 && n <= picker.universe() => {
                picker.toggle(n);
            }
            _ => println!("Enter a number between 1 and {}, or 'c'.", picker.universe()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_lists_parse() {
        assert_eq!(parse_numbers("1, 2,15").unwrap(), vec![1, 2, 15]);
        assert!(parse_numbers("1,x").is_err());
    }

    #[test]
    fn a_game_needs_exactly_fifteen_distinct_numbers() {
        let full: Vec<u8> = (1..=15).collect();
        assert_eq!(build_selection(&full).unwrap(), full);

        let short: Vec<u8> = (1..=14).collect();
        assert!(build_selection(&short).is_err());

        let mut duplicated = full.clone();
        duplicated[14] = 1; // toggles 1 back out
        assert!(build_selection(&duplicated).is_err());

        let out_of_range: Vec<u8> = (12..=26).collect();
        assert!(build_selection(&out_of_range).is_err());
    }

    #[test]
    fn selection_comes_back_sorted() {
        let scrambled = [25, 3, 18, 1, 9, 14, 22, 5, 11, 7, 2, 19, 16, 4, 12];
        let selection = build_selection(&scrambled).unwrap();
        assert!(selection.windows(2).all(|w| w[0] < w[1]));
    }
}
