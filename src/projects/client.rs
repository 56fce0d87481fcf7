use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use super::models::Project;
use super::{ProjectSource, ProjectsError};
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::platforms::Platform;

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Read-only client for the hosted projects table (Supabase / PostgREST).
#[derive(Clone)]
pub struct SupabaseProjects {
    client: Client,
    endpoint: Url,
    anon_key: String,
}

impl SupabaseProjects {
    /// Create a client for `{base_url}/rest/v1/{table}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        anon_key: &str,
        table: &str,
        timeout: Duration,
    ) -> Result<Self, ProjectsError> {
        let raw = format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table);
        let endpoint = Url::parse(&raw).map_err(|e| ProjectsError::InvalidUrl {
            url: raw.clone(),
            source: e,
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            anon_key: anon_key.to_string(),
        })
    }

    /// Create a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self, ProjectsError> {
        Self::new(
            &config.supabase_url,
            &config.supabase_anon_key,
            &config.projects_table,
            config.http_timeout,
        )
    }

    /// Endpoint queried by this client.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn get_rows(&self, url: Url) -> Result<Vec<Project>, ProjectsError> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ProjectsError::Decode)
    }
}

#[async_trait]
impl ProjectSource for SupabaseProjects {
    async fn fetch_by_platform(&self, platform: Platform) -> Result<Vec<Project>, ProjectsError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("platform", &format!("eq.{}", platform.as_str()))
            .append_pair("order", "year.desc,order_index.asc");

        debug!(platform = %platform, "Fetching projects");

        match self.get_rows(url).await {
            Ok(rows) => {
                info!(platform = %platform, count = rows.len(), "Fetched projects");
                Ok(rows)
            }
            Err(e) => {
                warn!(platform = %platform, error = %e, "Failed to fetch projects");
                Err(e)
            }
        }
    }

    async fn sample(&self, limit: usize) -> Result<Vec<Project>, ProjectsError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("limit", &limit.to_string());

        self.get_rows(url).await
    }
}

fn api_error(status: StatusCode, body: &str) -> ProjectsError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    ProjectsError::Api {
        status: status.as_u16(),
        message,
    }
}
