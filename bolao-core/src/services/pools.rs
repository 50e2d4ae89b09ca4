use crate::error::Result;
use crate::http::ApiClient;
use crate::types::{Game, Pool, PoolAvailability, SettlementResult};
use uuid::Uuid;

pub struct PoolsApi<'a> {
    pub(crate) api: &'a ApiClient,
}

impl PoolsApi<'_> {
    /// Lists pools, open-only by default.
    pub async fn list(&self, only_open: bool) -> Result<Vec<Pool>> {
        self.api
            .get_with_query("/boloes", &[("apenas_abertos", only_open)])
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Pool> {
        self.api.get(&format!("/boloes/{id}")).await
    }

    pub async fn games(&self, id: Uuid) -> Result<Vec<Game>> {
        self.api.get(&format!("/boloes/{id}/jogos")).await
    }

    /// Settlement result; `None` while the pool has not been settled.
    pub async fn result(&self, id: Uuid) -> Result<Option<SettlementResult>> {
        self.api.get_optional(&format!("/boloes/{id}/resultado")).await
    }

    pub async fn availability(&self, id: Uuid) -> Result<PoolAvailability> {
        self.api.get(&format!("/boloes/{id}/disponivel")).await
    }
}
