use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use logo_resolver::utils::{logger, validation::Validate};
use logo_resolver::{CliArgs, LogoConfig, LogoError, LogoResolver, LogoResult};

const USAGE_ERROR_JSON: &str = r#"{"error": "Company name required"}"#;

async fn run(company_name: &str) -> anyhow::Result<LogoResult> {
    let config = LogoConfig::from_env();
    config.validate().context("invalid logo configuration")?;

    if config.secondary_enabled() {
        tracing::debug!("Brandfetch API key present, secondary source enabled");
    }

    let resolver = LogoResolver::new(&config).context("failed to build logo resolver")?;
    let result = resolver.get_company_logo(company_name).await?;
    Ok(result)
}

#[tokio::main]
async fn main() {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", USAGE_ERROR_JSON);
            std::process::exit(1);
        }
    };

    logger::init_cli_logger();
    tracing::debug!("CLI args: {:?}", args);

    match run(&args.company_name).await {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to serialize logo result: {}", e);
                std::process::exit(3);
            }
        },
        Err(e) => match e.downcast_ref::<LogoError>() {
            Some(LogoError::EmptyCompanyName) => {
                println!("{}", USAGE_ERROR_JSON);
                std::process::exit(1);
            }
            Some(err) if err.is_config_error() => {
                tracing::error!("{:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(2);
            }
            _ => {
                tracing::error!("Logo resolution failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(3);
            }
        },
    }
}
