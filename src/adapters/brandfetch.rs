//! Brandfetch brand search.
//!
//! `GET {base}/search/{name}` with a bearer key returns a list of brands;
//! the first format of the first logo of the first brand is taken.

use crate::domain::model::{LogoSourceKind, SourceOutcome};
use crate::domain::ports::{LogoSource, LookupRequest};
use crate::utils::error::{LogoError, Result};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use url::Url;

pub const DEFAULT_BRANDFETCH_BASE_URL: &str = "https://api.brandfetch.io/v2";

pub struct BrandfetchSource {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl BrandfetchSource {
    pub fn new(client: Client, base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
        })
    }

    /// The name becomes a single escaped path segment.
    pub fn search_url(&self, company_name: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LogoError::UnexpectedShape {
                message: format!("base URL cannot take a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .push("search")
            .push(company_name);
        Ok(url)
    }

    async fn search(&self, company_name: &str) -> Result<String> {
        let url = self.search_url(company_name)?;
        tracing::debug!("Searching Brandfetch: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Brandfetch response status: {}", status);
        if status != StatusCode::OK {
            return Err(LogoError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let brands: Vec<Value> = serde_json::from_str(&body)?;
        first_logo_src(&brands)
    }
}

/// Only the first brand, first logo, first format path has to be well formed.
fn first_logo_src(brands: &[Value]) -> Result<String> {
    let brand = brands.first().ok_or_else(|| shape("no brands"))?;
    let logo = brand["logos"]
        .as_array()
        .and_then(|logos| logos.first())
        .ok_or_else(|| shape("brand has no logos"))?;
    let format = logo["formats"]
        .as_array()
        .and_then(|formats| formats.first())
        .ok_or_else(|| shape("logo has no formats"))?;
    format["src"]
        .as_str()
        .filter(|src| !src.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| shape("logo format has no src"))
}

fn shape(message: &str) -> LogoError {
    LogoError::UnexpectedShape {
        message: message.to_string(),
    }
}

#[async_trait]
impl LogoSource for BrandfetchSource {
    fn kind(&self) -> LogoSourceKind {
        LogoSourceKind::Brandfetch
    }

    async fn lookup(&self, request: LookupRequest<'_>) -> SourceOutcome {
        match self.search(request.company_name).await {
            Ok(url) => SourceOutcome::Found(url),
            Err(e) => {
                tracing::debug!("Brandfetch has no logo for {}: {}", request.company_name, e);
                SourceOutcome::Unavailable
            }
        }
    }
}
