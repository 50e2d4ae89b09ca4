use thiserror::Error;

pub type Result<T> = std::result::Result<T, BolaoError>;

/// Fixed message shown when the backend rejects a purchase for lack of
/// wallet balance.
pub const INSUFFICIENT_BALANCE_HINT: &str =
    "Saldo insuficiente. Deposite via Pix antes de comprar cotas.";

#[derive(Error, Debug)]
pub enum BolaoError {
    /// The server rejected the stored credential (HTTP 401). The session has
    /// already been cleared by the time this is returned.
    #[error("session expired or rejected by the server")]
    SessionExpired,

    #[error("API error ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BolaoError {
    pub fn api(status: u16, detail: Option<String>) -> Self {
        Self::Api { status, detail }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Status code of the server response, when this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// conversion from dialoguer::Error
impl From<dialoguer::Error> for BolaoError {
    fn from(err: dialoguer::Error) -> Self {
        BolaoError::Dialog(err.to_string())
    }
}

/// Rewrites a server error detail that mentions the wallet ("carteira",
/// any casing) into the fixed deposit hint. Every other detail passes
/// through verbatim.
pub fn rewrite_wallet_detail(detail: &str) -> &str {
    if detail.to_lowercase().contains("carteira") {
        INSUFFICIENT_BALANCE_HINT
    } else {
        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_detail_is_rewritten_for_any_casing() {
        for detail in [
            "Saldo da carteira insuficiente",
            "Saldo da CARTEIRA insuficiente",
            "Carteira sem fundos",
        ] {
            assert_eq!(rewrite_wallet_detail(detail), INSUFFICIENT_BALANCE_HINT);
        }
    }

    #[test]
    fn unrelated_detail_passes_through() {
        assert_eq!(
            rewrite_wallet_detail("Bolão fechado para compras"),
            "Bolão fechado para compras"
        );
    }

    #[test]
    fn api_error_exposes_status() {
        let err = BolaoError::api(422, Some("quantidade inválida".into()));
        assert_eq!(err.status(), Some(422));
        assert_eq!(BolaoError::SessionExpired.status(), None);
    }
}
