use crate::domain::model::{LogoSourceKind, SourceOutcome};
use async_trait::async_trait;

/// The name being resolved, together with its guessed domain.
#[derive(Debug, Clone, Copy)]
pub struct LookupRequest<'a> {
    pub company_name: &'a str,
    pub domain: &'a str,
}

/// A remote provider that may know a logo for a company.
#[async_trait]
pub trait LogoSource: Send + Sync {
    fn kind(&self) -> LogoSourceKind;

    async fn lookup(&self, request: LookupRequest<'_>) -> SourceOutcome;
}
