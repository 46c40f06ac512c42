use clap::Parser;

/// Command-line surface: one positional company name, nothing else.
#[derive(Debug, Clone, Parser)]
#[command(name = "logo-resolver")]
#[command(about = "Resolve a company name to a displayable logo URL")]
#[command(version)]
pub struct CliArgs {
    /// Company name to resolve, e.g. "Acme Rockets"
    #[arg(allow_hyphen_values = true)]
    pub company_name: String,
}
