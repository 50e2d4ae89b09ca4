use crate::error::{BolaoError, Result};
use crate::http::ApiClient;
use crate::types::{Transaction, TransactionKind, TransactionsSummary, WalletSummary};

pub struct WalletApi<'a> {
    pub(crate) api: &'a ApiClient,
}

impl WalletApi<'_> {
    /// Wallet balances. A 404 means the backend has not created a wallet
    /// for this user yet and reads as an empty wallet.
    pub async fn summary(&self) -> Result<WalletSummary> {
        match self.api.get("/carteira/").await {
            Ok(summary) => Ok(summary),
            Err(BolaoError::Api { status: 404, .. }) => Ok(WalletSummary::zero()),
            Err(e) => Err(e),
        }
    }

    /// Statement, optionally filtered to credits or debits.
    pub async fn transactions(&self, kind: Option<TransactionKind>) -> Result<Vec<Transaction>> {
        match kind {
            Some(kind) => {
                self.api
                    .get_with_query("/transacoes/", &[("tipo", kind.as_query_value())])
                    .await
            }
            None => self.api.get("/transacoes/").await,
        }
    }

    pub async fn transactions_summary(&self) -> Result<TransactionsSummary> {
        self.api.get("/transacoes/resumo").await
    }
}
