//! Typed facades over the REST endpoints, one per domain, mirroring the
//! platform's service boundaries. Each call is a thin 1:1 HTTP wrapper; all
//! business rules live server-side.

mod admin;
mod auth;
mod payments;
mod pools;
mod shares;
mod wallet;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use payments::PaymentsApi;
pub use pools::PoolsApi;
pub use shares::SharesApi;
pub use wallet::WalletApi;

use crate::http::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { api: self }
    }

    pub fn pools(&self) -> PoolsApi<'_> {
        PoolsApi { api: self }
    }

    pub fn shares(&self) -> SharesApi<'_> {
        SharesApi { api: self }
    }

    pub fn wallet(&self) -> WalletApi<'_> {
        WalletApi { api: self }
    }

    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi { api: self }
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { api: self }
    }
}
