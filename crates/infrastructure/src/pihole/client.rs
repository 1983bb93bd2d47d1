use super::payload::{decode_auth, decode_summary, AuthRequest};
use async_trait::async_trait;
use netscene_application::ports::PiholeGateway;
use netscene_domain::config::PiholeConfig;
use netscene_domain::{DomainError, PiholeApi, PiholeHost, PiholeStats, SessionCredential};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

const V6_AUTH_PATH: &str = "/api/auth";
const V6_SUMMARY_PATH: &str = "/api/stats/summary";
const V6_SID_HEADER: &str = "X-FTL-SID";
const LEGACY_API_PATH: &str = "/admin/api.php";
const LEGACY_SUMMARY_QUERY: &str = "summaryRaw";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Pi-hole API client speaking either the v6 FTL API or the legacy
/// `api.php`. Holds no session state between calls.
pub struct HttpPiholeClient {
    client: reqwest::Client,
    api: PiholeApi,
    timeout: Duration,
}

impl HttpPiholeClient {
    pub fn new(config: &PiholeConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build configured HTTP client, using minimal settings");
                reqwest::Client::builder()
                    .timeout(timeout)
                    .build()
                    .unwrap_or_default()
            });

        Self {
            client,
            api: config.api,
            timeout,
        }
    }

    fn endpoint(&self, host: &PiholeHost, path: &str) -> Result<Url, DomainError> {
        let mut url = Url::parse(host.base_url())
            .map_err(|e| DomainError::Validation(format!("Invalid host '{}': {}", host, e)))?;
        if url.host_str().is_none() {
            return Err(DomainError::Validation(format!("Invalid host '{}'", host)));
        }
        url.set_path(path);
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    fn summary_url(
        &self,
        host: &PiholeHost,
        credential: Option<&SessionCredential>,
    ) -> Result<Url, DomainError> {
        match self.api {
            PiholeApi::V6 => self.endpoint(host, V6_SUMMARY_PATH),
            PiholeApi::Legacy => {
                let mut url = self.endpoint(host, LEGACY_API_PATH)?;
                url.set_query(Some(LEGACY_SUMMARY_QUERY));
                if let Some(token) = credential {
                    url.query_pairs_mut().append_pair("auth", token.expose());
                }
                Ok(url)
            }
        }
    }

    fn transport_error(&self, host: &PiholeHost, error: reqwest::Error) -> DomainError {
        // The URL may carry the legacy API token.
        let error = error.without_url();
        let message = if error.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs())
        } else if error.is_connect() {
            format!("connection failed: {}", error)
        } else {
            error.to_string()
        };
        DomainError::network(host.to_string(), message)
    }

    async fn read_body(
        &self,
        host: &PiholeHost,
        response: reqwest::Response,
    ) -> Result<String, DomainError> {
        response
            .text()
            .await
            .map_err(|e| self.transport_error(host, e))
    }

    async fn authenticate_v6(
        &self,
        host: &PiholeHost,
        password: &str,
    ) -> Result<Option<SessionCredential>, DomainError> {
        let url = self.endpoint(host, V6_AUTH_PATH)?;
        let body = serde_json::to_vec(&AuthRequest { password })
            .map_err(|e| DomainError::Decode(format!("failed to encode auth request: {}", e)))?;

        debug!(url = %url, "Sending Pi-hole auth request");

        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error(host, e))?;

        let status = response.status();
        if is_auth_status(status) {
            debug!(status = status.as_u16(), "Pi-hole rejected the password");
            return Err(DomainError::Auth("password rejected".to_string()));
        }
        if !status.is_success() {
            return Err(DomainError::http_status(
                host.to_string(),
                status.as_u16(),
                status.canonical_reason(),
            ));
        }

        let auth = decode_auth(&self.read_body(host, response).await?)?;
        if !auth.session.valid {
            return Err(DomainError::Auth(
                auth.session
                    .message
                    .unwrap_or_else(|| "password rejected".to_string()),
            ));
        }

        match auth.session.sid.filter(|sid| !sid.is_empty()) {
            Some(sid) => {
                debug!("Pi-hole session established");
                Ok(Some(SessionCredential::new(sid)))
            }
            None => {
                debug!("Pi-hole does not require a session");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl PiholeGateway for HttpPiholeClient {
    async fn authenticate(
        &self,
        host: &PiholeHost,
        password: &str,
    ) -> Result<Option<SessionCredential>, DomainError> {
        match self.api {
            PiholeApi::V6 => self.authenticate_v6(host, password).await,
            // api.php takes the API token directly on the stats request
            PiholeApi::Legacy => Ok(Some(SessionCredential::new(password))),
        }
    }

    async fn fetch_summary(
        &self,
        host: &PiholeHost,
        credential: Option<&SessionCredential>,
    ) -> Result<PiholeStats, DomainError> {
        let url = self.summary_url(host, credential)?;

        debug!(
            host = %host,
            api = %self.api,
            authenticated = credential.is_some(),
            "Requesting Pi-hole summary"
        );

        // Per request as well, so a fallback client cannot hang.
        let mut request = self
            .client
            .get(url)
            .timeout(self.timeout)
            .header(ACCEPT, JSON_CONTENT_TYPE);
        if let (PiholeApi::V6, Some(sid)) = (self.api, credential) {
            request = request.header(V6_SID_HEADER, sid.expose());
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(host, e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Pi-hole summary response");

        if is_auth_status(status) {
            return Err(DomainError::Auth(format!(
                "server answered HTTP {}",
                status.as_u16()
            )));
        }
        if !status.is_success() {
            return Err(DomainError::http_status(
                host.to_string(),
                status.as_u16(),
                status.canonical_reason(),
            ));
        }

        let body = self.read_body(host, response).await?;
        debug!(body_len = body.len(), "Pi-hole summary body received");

        decode_summary(&body)
    }
}

fn is_auth_status(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}
