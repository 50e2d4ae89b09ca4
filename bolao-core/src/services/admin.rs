use crate::error::Result;
use crate::http::ApiClient;
use crate::types::{
    ActivityEntry, CsvImportReport, DrawResult, Game, GameCreate, GamesBatch,
    ManualSettleRequest, Message, Pool, PoolCreate, PoolUpdate, QuickStats, RevenuePoint,
    SettlementResult, SettlementStatus, TeimosinhaSettlement,
};
use std::path::Path;
use uuid::Uuid;

/// Administration surface: pool and game CRUD, settlement triggers and
/// dashboard statistics. The server enforces the admin role; the client only
/// gates the commands on the decoded flag.
pub struct AdminApi<'a> {
    pub(crate) api: &'a ApiClient,
}

impl AdminApi<'_> {
    // pools

    pub async fn list_pools(&self, status_filter: Option<&str>) -> Result<Vec<Pool>> {
        match status_filter {
            Some(status) => {
                self.api
                    .get_with_query("/admin/boloes", &[("status_filter", status)])
                    .await
            }
            None => self.api.get("/admin/boloes").await,
        }
    }

    pub async fn create_pool(&self, pool: &PoolCreate) -> Result<Pool> {
        self.api.post("/admin/boloes", pool).await
    }

    pub async fn update_pool(&self, id: Uuid, update: &PoolUpdate) -> Result<Pool> {
        self.api.put(&format!("/admin/boloes/{id}"), update).await
    }

    pub async fn close_pool(&self, id: Uuid) -> Result<Message> {
        self.api.patch(&format!("/admin/boloes/{id}/close")).await
    }

    pub async fn delete_pool(&self, id: Uuid) -> Result<Message> {
        self.api.delete(&format!("/admin/boloes/{id}")).await
    }

    // games

    pub async fn add_games(&self, pool_id: Uuid, games: Vec<Vec<u8>>) -> Result<Vec<Game>> {
        let batch = GamesBatch {
            games: games
                .into_iter()
                .map(|numbers| GameCreate { numbers })
                .collect(),
        };
        self.api
            .post(&format!("/admin/boloes/{pool_id}/jogos"), &batch)
            .await
    }

    pub async fn remove_game(&self, pool_id: Uuid, game_id: Uuid) -> Result<()> {
        self.api
            .delete_no_content(&format!("/admin/boloes/{pool_id}/jogos/{game_id}"))
            .await
    }

    /// Uploads a CSV of games; parsing and validation happen server-side.
    pub async fn upload_games_csv(&self, pool_id: Uuid, file: &Path) -> Result<CsvImportReport> {
        self.api
            .post_multipart_file(
                &format!("/admin/boloes/{pool_id}/jogos/upload-csv"),
                "file",
                file,
            )
            .await
    }

    // settlement

    /// Settles against a manually entered draw result.
    pub async fn settle_manual(&self, pool_id: Uuid, numbers: Vec<u8>) -> Result<SettlementResult> {
        let body = ManualSettleRequest { numbers };
        self.api
            .post(&format!("/admin/boloes/{pool_id}/apurar"), &body)
            .await
    }

    /// Settles against the official draw fetched server-side.
    pub async fn settle_automatic(&self, pool_id: Uuid) -> Result<SettlementResult> {
        self.api
            .post_empty(&format!("/admin/boloes/{pool_id}/apurar/automatico"))
            .await
    }

    /// Teimosinha: settles one specific draw of the replayed range.
    pub async fn settle_draw(&self, pool_id: Uuid, draw_number: u32) -> Result<DrawResult> {
        self.api
            .post_empty(&format!(
                "/admin/boloes/{pool_id}/apurar/concurso/{draw_number}"
            ))
            .await
    }

    /// Teimosinha: settles every draw still pending.
    pub async fn settle_pending(&self, pool_id: Uuid) -> Result<TeimosinhaSettlement> {
        self.api
            .post_empty(&format!("/admin/boloes/{pool_id}/apurar/pendentes"))
            .await
    }

    pub async fn settlement_status(&self, pool_id: Uuid) -> Result<SettlementStatus> {
        self.api
            .get(&format!("/admin/boloes/{pool_id}/apuracao/status"))
            .await
    }

    pub async fn result(&self, pool_id: Uuid) -> Result<Option<SettlementResult>> {
        self.api
            .get_optional(&format!("/admin/boloes/{pool_id}/resultado"))
            .await
    }

    // dashboard

    pub async fn quick_stats(&self) -> Result<QuickStats> {
        self.api.get("/admin/stats/quick").await
    }

    pub async fn revenue(&self) -> Result<Vec<RevenuePoint>> {
        self.api.get("/admin/stats/revenue").await
    }

    pub async fn activity(&self) -> Result<Vec<ActivityEntry>> {
        self.api.get("/admin/activity").await
    }
}
