use std::time::Duration;

use async_trait::async_trait;
use herald_core::ObservedRecipient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::alert::{Alert, AlertKind, AlertSpec};
use crate::error::ClientError;
use crate::source::RecipientSource;

pub const API_KEY_HEADER: &str = "X-Herald-Team";

pub struct HeraldClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HeraldClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/1/{}", self.base_url, path)
    }

    fn alert_url(&self, kind: AlertKind, dataset: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => self.api_url(&format!("{}/{dataset}/{id}", kind.path_segment())),
            None => self.api_url(&format!("{}/{dataset}", kind.path_segment())),
        }
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, url);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        req.header("Accept", "application/json")
    }

    /// Every recipient known to the team.
    pub async fn list_recipients(&self) -> Result<Vec<ObservedRecipient>, ClientError> {
        let url = self.api_url("recipients");
        debug!(%url, "listing recipients");
        let resp = self.request(reqwest::Method::GET, &url).send().await?;
        handle_response(resp).await
    }

    pub async fn get_alert(
        &self,
        kind: AlertKind,
        dataset: &str,
        id: &str,
    ) -> Result<Alert, ClientError> {
        let url = self.alert_url(kind, dataset, Some(id));
        debug!(%url, "reading alert");
        let resp = self.request(reqwest::Method::GET, &url).send().await?;
        handle_response(resp).await
    }

    pub async fn create_alert(
        &self,
        kind: AlertKind,
        dataset: &str,
        spec: &AlertSpec,
    ) -> Result<Alert, ClientError> {
        let url = self.alert_url(kind, dataset, None);
        debug!(%url, recipients = spec.recipients.len(), "creating alert");
        let resp = self
            .request(reqwest::Method::POST, &url)
            .json(spec)
            .send()
            .await?;
        handle_response(resp).await
    }

    pub async fn update_alert(
        &self,
        kind: AlertKind,
        dataset: &str,
        id: &str,
        spec: &AlertSpec,
    ) -> Result<Alert, ClientError> {
        let url = self.alert_url(kind, dataset, Some(id));
        debug!(%url, recipients = spec.recipients.len(), "updating alert");
        let resp = self
            .request(reqwest::Method::PUT, &url)
            .json(spec)
            .send()
            .await?;
        handle_response(resp).await
    }
}

#[async_trait]
impl RecipientSource for HeraldClient {
    fn name(&self) -> &str {
        "recipients"
    }

    async fn fetch_recipients(&self) -> Result<Vec<ObservedRecipient>, ClientError> {
        self.list_recipients().await
    }
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|json| json.get("error").and_then(|v| v.as_str()).map(str::to_string))
            .unwrap_or(body);
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
