use crate::adapters::{BrandfetchSource, ClearbitSource};
use crate::config::LogoConfig;
use crate::core::domain_mapper::DomainMapper;
use crate::core::placeholder::{company_initials, PlaceholderGenerator};
use crate::domain::model::{LogoResult, LogoSourceKind, SourceOutcome};
use crate::domain::ports::{LogoSource, LookupRequest};
use crate::utils::error::{LogoError, Result};
use reqwest::Client;

/// Runs the fallback chain: primary source, optional secondary source,
/// then a generated placeholder.
pub struct LogoResolver {
    mapper: DomainMapper<'static>,
    primary: Box<dyn LogoSource>,
    secondary: Option<Box<dyn LogoSource>>,
    placeholder: PlaceholderGenerator,
}

impl LogoResolver {
    pub fn new(config: &LogoConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        let primary = ClearbitSource::new(
            ClearbitSource::head_client(config.request_timeout)?,
            config.clearbit_base_url.as_str(),
        );
        let secondary = match &config.brandfetch_api_key {
            Some(api_key) => Some(Box::new(BrandfetchSource::new(
                client,
                &config.brandfetch_base_url,
                api_key.as_str(),
            )?) as Box<dyn LogoSource>),
            None => None,
        };
        let placeholder = PlaceholderGenerator::new(&config.avatar_base_url)?;

        Ok(Self::with_sources(Box::new(primary), secondary, placeholder))
    }

    pub fn with_sources(
        primary: Box<dyn LogoSource>,
        secondary: Option<Box<dyn LogoSource>>,
        placeholder: PlaceholderGenerator,
    ) -> Self {
        Self {
            mapper: DomainMapper::default(),
            primary,
            secondary,
            placeholder,
        }
    }

    pub fn secondary_enabled(&self) -> bool {
        self.secondary.is_some()
    }

    /// Resolves a logo for `company_name`. Only empty or whitespace-only
    /// names are rejected; every other name yields a result.
    pub async fn get_company_logo(&self, company_name: &str) -> Result<LogoResult> {
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return Err(LogoError::EmptyCompanyName);
        }

        let domain = self.mapper.map(company_name);
        tracing::debug!("Resolved '{}' to domain {}", company_name, domain);

        let request = LookupRequest {
            company_name,
            domain: &domain,
        };

        let sources = std::iter::once(&self.primary).chain(self.secondary.as_ref());
        for source in sources {
            if let SourceOutcome::Found(url) = source.lookup(request).await {
                return Ok(self.finish(company_name, url, source.kind()));
            }
        }

        let url = self.placeholder.generate(company_name);
        Ok(self.finish(company_name, url, LogoSourceKind::Initials))
    }

    fn finish(&self, company_name: &str, url: String, source: LogoSourceKind) -> LogoResult {
        tracing::info!("Logo for '{}' from {}", company_name, source);
        LogoResult {
            url,
            source,
            initials: company_initials(company_name),
        }
    }
}
