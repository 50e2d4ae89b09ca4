pub mod admin;
pub mod auth;
pub mod pools;
pub mod shares;
pub mod wallet;

pub use admin::{handle_admin_command, AdminCommands};
pub use auth::{handle_auth_command, AuthCommands};
pub use pools::{handle_pool_command, PoolCommands};
pub use shares::{handle_share_command, ShareCommands};
pub use wallet::{handle_wallet_command, WalletCommands};

/// Formats a monetary value the way the platform displays it.
pub(crate) fn money(value: f64) -> String {
    format!("R$ {:.2}", value)
}

/// Renders a game's numbers zero-padded, ascending.
pub(crate) fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{n:02}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_renders_two_decimals() {
        assert_eq!(money(10.0), "R$ 10.00");
        assert_eq!(money(35.5), "R$ 35.50");
    }

    #[test]
    fn numbers_render_zero_padded() {
        assert_eq!(format_numbers(&[1, 2, 15]), "01 02 15");
    }
}
