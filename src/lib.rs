pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::LogoConfig;
pub use self::core::domain_mapper::{get_company_domain, DomainMapper};
pub use self::core::placeholder::{company_initials, generate_initials_avatar, PlaceholderGenerator};
pub use self::core::resolver::LogoResolver;
pub use domain::model::{LogoResult, LogoSourceKind, SourceOutcome};
pub use utils::error::{LogoError, Result};
