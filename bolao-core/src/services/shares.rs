use crate::error::Result;
use crate::http::ApiClient;
use crate::types::{BuySharesRequest, BuySharesResponse, Share, UserPoolResult};
use uuid::Uuid;

pub struct SharesApi<'a> {
    pub(crate) api: &'a ApiClient,
}

impl SharesApi<'_> {
    /// Buys shares, debiting the wallet server-side.
    pub async fn buy(&self, pool_id: Uuid, quantity: u32) -> Result<BuySharesResponse> {
        let body = BuySharesRequest { pool_id, quantity };
        self.api.post("/cotas/comprar", &body).await
    }

    pub async fn mine(&self) -> Result<Vec<Share>> {
        self.api.get("/cotas/minhas").await
    }

    pub async fn my_results(&self) -> Result<Vec<UserPoolResult>> {
        self.api.get("/cotas/meus-resultados").await
    }
}
