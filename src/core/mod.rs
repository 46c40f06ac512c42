pub mod domain_mapper;
pub mod placeholder;
pub mod resolver;

pub use crate::domain::model::{LogoResult, LogoSourceKind, SourceOutcome};
pub use crate::domain::ports::{LogoSource, LookupRequest};
pub use crate::utils::error::Result;
