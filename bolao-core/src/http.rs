//! Authenticated request dispatcher.
//!
//! Every API call goes through [`ApiClient`]: it attaches the session's
//! bearer credential, and on an unauthorized response clears the session
//! before surfacing [`BolaoError::SessionExpired`], so callers and the
//! session store can never disagree about authentication state. Other error
//! statuses are decoded into [`BolaoError::Api`] carrying the server's
//! optional `detail` message. Failures are terminal: no retries, no backoff.

use crate::config::ClientConfig;
use crate::error::{BolaoError, Result};
use crate::session::SessionStore;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    session: Arc<SessionStore>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, self.config.endpoint(path));
        if let Some(token) = self.session.bearer_token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Maps a non-success response to an error. Unauthorized clears the
    /// session unconditionally, whatever endpoint produced it.
    fn handle_failure(&self, status: StatusCode, body: &str) -> BolaoError {
        if status == StatusCode::UNAUTHORIZED {
            tracing::info!("credential rejected by server; clearing session");
            if let Err(e) = self.session.logout() {
                tracing::warn!("failed to clear persisted session: {e}");
            }
            return BolaoError::SessionExpired;
        }
        Self::decode_error(status.as_u16(), body)
    }

    /// Parses the server's structured error body; a body that is not JSON
    /// or carries no `detail` still yields a typed error.
    fn decode_error(status: u16, body: &str) -> BolaoError {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail);
        BolaoError::Api { status, detail }
    }

    async fn dispatch(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(self.handle_failure(status, &body))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.dispatch(self.request(Method::GET, path)).await?;
        Ok(resp.json().await?)
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let resp = self
            .dispatch(self.request(Method::GET, path).query(query))
            .await?;
        Ok(resp.json().await?)
    }

    /// GET where a 404 means "not there yet" rather than an error, e.g. the
    /// result of a pool that has not been settled.
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(BolaoError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .dispatch(self.request(Method::POST, path).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    /// POST without a body, used by trigger-style endpoints.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.dispatch(self.request(Method::POST, path)).await?;
        Ok(resp.json().await?)
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .dispatch(self.request(Method::PUT, path).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.dispatch(self.request(Method::PATCH, path)).await?;
        Ok(resp.json().await?)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.dispatch(self.request(Method::DELETE, path)).await?;
        Ok(resp.json().await?)
    }

    /// DELETE for endpoints that answer with an empty body.
    pub async fn delete_no_content(&self, path: &str) -> Result<()> {
        self.dispatch(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    /// Streams a file as multipart form data; the content is not parsed
    /// client-side.
    pub async fn post_multipart_file<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        file: &Path,
    ) -> Result<T> {
        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")?;
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);
        let resp = self
            .dispatch(self.request(Method::POST, path).multipart(form))
            .await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    fn client_with_session() -> ApiClient {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
        let config = ClientConfig::new("http://localhost:8000/api/v1");
        ApiClient::new(&config, session).unwrap()
    }

    fn make_token() -> String {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine as _;
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD
            .encode(br#"{"sub":"user-1","email":"user@example.com","is_admin":false}"#);
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn decode_error_extracts_detail() {
        let err = ApiClient::decode_error(400, r#"{"detail":"Bolão fechado"}"#);
        match err {
            BolaoError::Api { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("Bolão fechado"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_error_tolerates_non_json_bodies() {
        for body in ["", "<html>oops</html>", r#"{"unexpected":true}"#] {
            match ApiClient::decode_error(500, body) {
                BolaoError::Api { status: 500, detail: None } => {}
                other => panic!("unexpected error for {body:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn unauthorized_clears_the_session() {
        let client = client_with_session();
        client.session().login(&make_token(), Some("Maria")).unwrap();
        assert!(client.session().is_authenticated());

        let err = client.handle_failure(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(err, BolaoError::SessionExpired));
        assert!(!client.session().is_authenticated());
        assert_eq!(client.session().current().display_name, None);
    }

    #[test]
    fn other_statuses_leave_the_session_alone() {
        let client = client_with_session();
        client.session().login(&make_token(), None).unwrap();

        let err = client.handle_failure(StatusCode::FORBIDDEN, r#"{"detail":"sem permissão"}"#);
        assert!(matches!(err, BolaoError::Api { status: 403, .. }));
        assert!(client.session().is_authenticated());
    }
}
