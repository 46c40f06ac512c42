#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use logo_resolver::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use logo_resolver::{LogoConfig, LogoResolver, LogoResult};
#[cfg(feature = "lambda")]
use serde::Deserialize;

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    pub company_name: String,
}

#[cfg(feature = "lambda")]
async fn function_handler(
    resolver: &LogoResolver,
    event: LambdaEvent<Request>,
) -> Result<LogoResult, Error> {
    tracing::info!("Resolving logo for '{}'", event.payload.company_name);

    let result = resolver
        .get_company_logo(&event.payload.company_name)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(result)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LogoConfig::from_env();
    config.validate()?;
    let resolver = LogoResolver::new(&config)?;
    let resolver = &resolver;

    run(service_fn(move |event: LambdaEvent<Request>| async move {
        function_handler(resolver, event).await
    }))
    .await
}

