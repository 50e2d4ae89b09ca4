use crate::commands::{format_numbers, money};
use bolao_core::types::SettlementResult;
use bolao_core::{ApiClient, Result};
use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum PoolCommands {
    /// List pools open for purchase
    List {
        /// Include closed, settled and cancelled pools
        #[arg(long)]
        all: bool,
    },
    /// Show a pool with its games and, when settled, its result
    Show { id: Uuid },
    /// List only the games of a pool
    Games { id: Uuid },
    /// Show the settlement result of a pool
    Result { id: Uuid },
}

pub async fn handle_pool_command(cmd: PoolCommands, client: &ApiClient) -> Result<()> {
    match cmd {
        PoolCommands::List { all } => {
            let pools = client.pools().list(!all).await?;
            if pools.is_empty() {
                println!("No pools found.");
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec![
                "ID", "Name", "Draw", "Share price", "Available", "Sold %", "Status",
            ]);
            for pool in pools {
                table.add_row(vec![
                    pool.id.to_string(),
                    pool.name.clone(),
                    pool.draw_number.to_string(),
                    money(pool.share_price),
                    format!("{}/{}", pool.available_shares, pool.total_shares),
                    format!("{:.0}%", pool.percent_sold()),
                    pool.status.to_string(),
                ]);
            }
            println!("{table}");
        }

        PoolCommands::Show { id } => {
            // detail and games are fetched together, the way the detail page
            // loads; the result is optional and absent until settlement
            let pools = client.pools();
            let (pool, games) = tokio::join!(pools.get(id), pools.games(id));
            let pool = pool?;
            let games = games?;

            println!("{}", pool.name);
            if let Some(description) = &pool.description {
                println!("{description}");
            }
            println!();
            println!("  Draw: {}", pool.draw_number);
            println!("  Status: {}", pool.status);
            println!("  Share price: {}", money(pool.share_price));
            println!(
                "  Shares: {} sold of {} ({:.0}%), {} available",
                pool.sold(),
                pool.total_shares,
                pool.percent_sold(),
                pool.available_shares
            );
            if let Some(closes_at) = pool.closes_at {
                println!("  Closes at: {}", closes_at.format("%Y-%m-%d %H:%M"));
            }

            if games.is_empty() {
                println!("\nNo games registered yet.");
            } else {
                println!("\nGames:");
                let mut table = Table::new();
                table.load_preset(UTF8_FULL);
                table.set_header(vec!["ID", "Numbers", "Hits"]);
                for game in &games {
                    table.add_row(vec![
                        game.id.to_string(),
                        format_numbers(&game.numbers),
                        game.hits.map(|h| h.to_string()).unwrap_or_else(|| "-".into()),
                    ]);
                }
                println!("{table}");
            }

            if let Some(result) = client.pools().result(id).await? {
                print_settlement(&result);
            }
        }

        PoolCommands::Games { id } => {
            let games = client.pools().games(id).await?;
            if games.is_empty() {
                println!("No games registered yet.");
                return Ok(());
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["ID", "Numbers", "Hits"]);
            for game in games {
                table.add_row(vec![
                    game.id.to_string(),
                    format_numbers(&game.numbers),
                    game.hits.map(|h| h.to_string()).unwrap_or_else(|| "-".into()),
                ]);
            }
            println!("{table}");
        }

        PoolCommands::Result { id } => match client.pools().result(id).await? {
            Some(result) => print_settlement(&result),
            None => println!("This pool has not been settled yet."),
        },
    }

    Ok(())
}

pub(crate) fn print_settlement(result: &SettlementResult) {
    println!("\nDraw {} result: {}", result.draw_number, format_numbers(&result.result_numbers));
    if !result.summary.is_empty() {
        println!("Hit summary:");
        // highest scores first
        for (hits, count) in result.summary.iter().rev() {
            println!("  {hits} hits: {count} game(s)");
        }
    }
    if !result.game_results.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Game", "Numbers", "Hits"]);
        for game in &result.game_results {
            table.add_row(vec![
                game.game_id.to_string(),
                format_numbers(&game.numbers),
                game.hits.to_string(),
            ]);
        }
        println!("{table}");
    }
}
