//! Wire models for the platform's REST contract.
//!
//! The backend speaks Portuguese field names; these stay on the wire via
//! serde renames while the Rust side uses descriptive names. All monetary
//! values are plain JSON numbers (reais), mirrored here as `f64` and only
//! ever displayed, never computed on beyond a purchase-total preview.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ===== pools =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolStatus {
    #[serde(rename = "aberto")]
    Open,
    #[serde(rename = "fechado")]
    Closed,
    #[serde(rename = "apurado")]
    Settled,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl std::fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Open => "aberto",
            Self::Closed => "fechado",
            Self::Settled => "apurado",
            Self::Cancelled => "cancelado",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "total_cotas")]
    pub total_shares: u32,
    #[serde(rename = "cotas_disponiveis")]
    pub available_shares: u32,
    #[serde(rename = "valor_cota")]
    pub share_price: f64,
    #[serde(rename = "concurso_numero")]
    pub draw_number: u32,
    pub status: PoolStatus,
    #[serde(rename = "data_fechamento", default)]
    pub closes_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "jogos", default)]
    pub games: Option<Vec<Game>>,
    #[serde(rename = "resultado_dezenas", default)]
    pub result_numbers: Option<Vec<u8>>,
    #[serde(rename = "cotas_vendidas", default)]
    pub shares_sold: Option<u32>,
    #[serde(rename = "receita_total", default)]
    pub total_revenue: Option<f64>,
    #[serde(rename = "percentual_vendido", default)]
    pub percent_sold: Option<f64>,
}

impl Pool {
    /// Shares already sold, derived when the backend does not send the
    /// precomputed field.
    pub fn sold(&self) -> u32 {
        self.shares_sold
            .unwrap_or(self.total_shares.saturating_sub(self.available_shares))
    }

    pub fn percent_sold(&self) -> f64 {
        if self.total_shares == 0 {
            return 0.0;
        }
        self.percent_sold
            .unwrap_or(self.sold() as f64 / self.total_shares as f64 * 100.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    #[serde(rename = "bolao_id")]
    pub pool_id: Uuid,
    #[serde(rename = "dezenas")]
    pub numbers: Vec<u8>,
    #[serde(rename = "acertos", default)]
    pub hits: Option<u32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameCreate {
    #[serde(rename = "dezenas")]
    pub numbers: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesBatch {
    #[serde(rename = "jogos")]
    pub games: Vec<GameCreate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolAvailability {
    #[serde(rename = "bolao_id")]
    pub pool_id: Uuid,
    #[serde(rename = "disponivel")]
    pub available: bool,
    pub status: String,
    #[serde(rename = "cotas_disponiveis")]
    pub available_shares: u32,
}

// ===== settlement =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    #[serde(rename = "jogo_id")]
    pub game_id: Uuid,
    #[serde(rename = "dezenas")]
    pub numbers: Vec<u8>,
    #[serde(rename = "acertos")]
    pub hits: u32,
}

/// Outcome of settling one pool against one official draw. `summary` maps a
/// hit count to how many games scored it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResult {
    #[serde(rename = "bolao_id")]
    pub pool_id: Uuid,
    #[serde(rename = "concurso_numero")]
    pub draw_number: u32,
    #[serde(rename = "resultado_dezenas")]
    pub result_numbers: Vec<u8>,
    #[serde(rename = "jogos_resultado")]
    pub game_results: Vec<GameResult>,
    #[serde(rename = "resumo")]
    pub summary: BTreeMap<u8, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualSettleRequest {
    #[serde(rename = "dezenas")]
    pub numbers: Vec<u8>,
}

/// One draw of a teimosinha pool's settlement run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawResult {
    #[serde(rename = "concurso_numero")]
    pub draw_number: u32,
    #[serde(rename = "resultado_dezenas")]
    pub result_numbers: Vec<u8>,
    #[serde(rename = "resumo", default)]
    pub summary: BTreeMap<u8, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeimosinhaSettlement {
    #[serde(rename = "bolao_id")]
    pub pool_id: Uuid,
    #[serde(rename = "resultados")]
    pub results: Vec<DrawResult>,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementStatus {
    #[serde(rename = "bolao_id")]
    pub pool_id: Uuid,
    pub status: String,
    #[serde(rename = "concursos_apurados", default)]
    pub settled_draws: Vec<u32>,
    #[serde(rename = "concursos_pendentes", default)]
    pub pending_draws: Vec<u32>,
}

// ===== shares =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuySharesRequest {
    #[serde(rename = "bolao_id")]
    pub pool_id: Uuid,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuySharesResponse {
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "cota_id")]
    pub share_id: Uuid,
    #[serde(rename = "bolao_id")]
    pub pool_id: Uuid,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    #[serde(rename = "valor_total")]
    pub total_price: f64,
    #[serde(rename = "saldo_restante")]
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Share {
    pub id: Uuid,
    #[serde(rename = "bolao_id")]
    pub pool_id: Uuid,
    #[serde(rename = "usuario_id")]
    pub user_id: Uuid,
    #[serde(rename = "valor_pago")]
    pub amount_paid: f64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "bolao_nome", default)]
    pub pool_name: Option<String>,
    #[serde(rename = "bolao_status", default)]
    pub pool_status: Option<String>,
    #[serde(rename = "concurso_numero", default)]
    pub draw_number: Option<u32>,
}

/// Per-pool outcome for the current user after settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPoolResult {
    #[serde(rename = "bolao_id")]
    pub pool_id: Uuid,
    #[serde(rename = "bolao_nome")]
    pub pool_name: String,
    #[serde(rename = "concurso_numero")]
    pub draw_number: u32,
    #[serde(rename = "resultado_dezenas", default)]
    pub result_numbers: Option<Vec<u8>>,
    #[serde(rename = "minhas_cotas")]
    pub my_shares: u32,
    #[serde(rename = "premio", default)]
    pub prize: Option<f64>,
}

// ===== wallet =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSummary {
    #[serde(rename = "saldo_disponivel")]
    pub available: f64,
    #[serde(rename = "saldo_bloqueado")]
    pub blocked: f64,
    #[serde(rename = "saldo_total")]
    pub total: f64,
}

impl WalletSummary {
    /// Empty wallet, shown when the backend has not created one yet.
    pub fn zero() -> Self {
        Self {
            available: 0.0,
            blocked: 0.0,
            total: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "credito")]
    Credit,
    #[serde(rename = "debito")]
    Debit,
}

impl TransactionKind {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::Credit => "credito",
            Self::Debit => "debito",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "origem")]
    pub source: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "saldo_anterior")]
    pub balance_before: f64,
    #[serde(rename = "saldo_posterior")]
    pub balance_after: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsSide {
    pub total: f64,
    #[serde(rename = "quantidade")]
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsSummary {
    #[serde(rename = "credito")]
    pub credit: TransactionsSide,
    #[serde(rename = "debito")]
    pub debit: TransactionsSide,
    #[serde(rename = "saldo_movimentado")]
    pub net: f64,
}

// ===== payments =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixChargeRequest {
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixCharge {
    pub id: Uuid,
    #[serde(rename = "usuario_id", default)]
    pub user_id: Option<Uuid>,
    pub status: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    pub qr_code: String,
    pub qr_code_base64: String,
    #[serde(rename = "expira_em")]
    pub expires_at: DateTime<Utc>,
    pub external_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ===== auth =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub access_token: String,
    #[serde(rename = "nova_senha")]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "mensagem")]
    pub message: String,
}

// ===== admin =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "concurso_numero")]
    pub draw_number: u32,
    #[serde(rename = "total_cotas")]
    pub total_shares: u32,
    #[serde(rename = "valor_cota")]
    pub share_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "data_fechamento", skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolUpdate {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "concurso_numero", skip_serializing_if = "Option::is_none")]
    pub draw_number: Option<u32>,
    #[serde(rename = "total_cotas", skip_serializing_if = "Option::is_none")]
    pub total_shares: Option<u32>,
    #[serde(rename = "valor_cota", skip_serializing_if = "Option::is_none")]
    pub share_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "data_fechamento", skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvImportReport {
    #[serde(rename = "total_importados")]
    pub imported: u32,
    #[serde(rename = "erros", default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickStats {
    #[serde(rename = "boloes_ativos")]
    pub active_pools: u32,
    #[serde(rename = "total_cotas_vendidas")]
    pub shares_sold: u32,
    #[serde(rename = "receita_total")]
    pub total_revenue: f64,
    #[serde(rename = "total_usuarios")]
    pub user_count: u32,
    #[serde(rename = "pagamentos_pendentes")]
    pub pending_payments: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePoint {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "receita")]
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "compra_cota")]
    SharePurchase,
    #[serde(rename = "pagamento")]
    Payment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "tipo")]
    pub kind: ActivityKind,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "usuario_id")]
    pub user_id: Uuid,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_deserializes_from_wire_names() {
        let raw = r#"{
            "id": "0b54cbb8-58cb-4b4f-a6a1-5e5e1e2a2b3c",
            "nome": "Lotofácil da Virada",
            "descricao": null,
            "total_cotas": 100,
            "cotas_disponiveis": 40,
            "valor_cota": 5.0,
            "concurso_numero": 3000,
            "status": "aberto",
            "data_fechamento": null,
            "created_at": "2026-08-01T12:00:00Z"
        }"#;
        let pool: Pool = serde_json::from_str(raw).unwrap();
        assert_eq!(pool.name, "Lotofácil da Virada");
        assert_eq!(pool.status, PoolStatus::Open);
        assert_eq!(pool.sold(), 60);
        assert!((pool.percent_sold() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn buy_response_deserializes() {
        let raw = r#"{
            "mensagem": "Compra realizada com sucesso.",
            "cota_id": "f0e94a88-0b1f-45e2-9e7e-0a1b2c3d4e5f",
            "bolao_id": "0b54cbb8-58cb-4b4f-a6a1-5e5e1e2a2b3c",
            "quantidade": 2,
            "valor_total": 10.0,
            "saldo_restante": 35.5
        }"#;
        let resp: BuySharesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.quantity, 2);
        assert_eq!(resp.total_price, 10.0);
    }

    #[test]
    fn transaction_kind_uses_wire_labels() {
        let tx: TransactionKind = serde_json::from_str(r#""credito""#).unwrap();
        assert_eq!(tx, TransactionKind::Credit);
        assert_eq!(serde_json::to_string(&TransactionKind::Debit).unwrap(), r#""debito""#);
    }

    #[test]
    fn settlement_summary_maps_hits_to_counts() {
        let raw = r#"{
            "bolao_id": "0b54cbb8-58cb-4b4f-a6a1-5e5e1e2a2b3c",
            "concurso_numero": 3000,
            "resultado_dezenas": [1,2,3,4,5,6,7,8,9,10,11,12,13,14,15],
            "jogos_resultado": [],
            "resumo": {"11": 3, "15": 1}
        }"#;
        let result: SettlementResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.summary.get(&15), Some(&1));
        assert_eq!(result.result_numbers.len(), 15);
    }

    #[test]
    fn pool_update_omits_unset_fields() {
        let update = PoolUpdate {
            name: Some("Novo nome".into()),
            ..Default::default()
        };
        let raw = serde_json::to_string(&update).unwrap();
        assert_eq!(raw, r#"{"nome":"Novo nome"}"#);
    }

    #[test]
    fn wallet_zero_is_all_zeroes() {
        let wallet = WalletSummary::zero();
        assert_eq!(wallet.available, 0.0);
        assert_eq!(wallet.total, 0.0);
    }
}
