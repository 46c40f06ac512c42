//! Clearbit logo CDN.
//!
//! A `HEAD` against `{base}/{domain}` answers whether the CDN holds an image;
//! the URL itself is the logo. No credential is needed.

use crate::domain::model::{LogoSourceKind, SourceOutcome};
use crate::domain::ports::{LogoSource, LookupRequest};
use crate::utils::error::{LogoError, Result};
use async_trait::async_trait;
use reqwest::{redirect, Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_CLEARBIT_BASE_URL: &str = "https://logo.clearbit.com";

pub struct ClearbitSource {
    client: Client,
    base_url: String,
}

impl ClearbitSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for existence checks. A redirect from the CDN means it has no
    /// image for that domain, so redirects are not followed.
    pub fn head_client(timeout: Duration) -> Result<Client> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(client)
    }

    pub fn logo_url(&self, domain: &str) -> String {
        format!("{}/{}", self.base_url, domain)
    }

    async fn check(&self, domain: &str) -> Result<String> {
        let url = self.logo_url(domain);
        tracing::debug!("Checking Clearbit logo: {}", url);

        let response = self.client.head(&url).send().await?;
        let status = response.status();
        tracing::debug!("Clearbit response status: {}", status);

        if status != StatusCode::OK {
            return Err(LogoError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(url)
    }
}

#[async_trait]
impl LogoSource for ClearbitSource {
    fn kind(&self) -> LogoSourceKind {
        LogoSourceKind::Clearbit
    }

    async fn lookup(&self, request: LookupRequest<'_>) -> SourceOutcome {
        match self.check(request.domain).await {
            Ok(url) => SourceOutcome::Found(url),
            Err(e) => {
                tracing::debug!("Clearbit has no logo for {}: {}", request.domain, e);
                SourceOutcome::Unavailable
            }
        }
    }
}
