use crate::error::Result;
use crate::http::ApiClient;
use crate::types::{PixCharge, PixChargeRequest};

pub struct PaymentsApi<'a> {
    pub(crate) api: &'a ApiClient,
}

impl PaymentsApi<'_> {
    /// Creates a Pix deposit charge; the wallet is credited server-side once
    /// the payment settles.
    pub async fn create_pix(&self, amount: f64, description: Option<String>) -> Result<PixCharge> {
        let body = PixChargeRequest { amount, description };
        self.api.post("/pagamentos/criar-pix", &body).await
    }

    pub async fn mine(&self) -> Result<Vec<PixCharge>> {
        self.api.get("/pagamentos/meus-pagamentos").await
    }
}
