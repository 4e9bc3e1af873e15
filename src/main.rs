use clap::Parser;
use std::io::Read;
use verification_notifier::utils::{logger, validation::Validate};
use verification_notifier::{CliConfig, HttpRequest, LogNotifier, VerificationNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let body = match config.body {
        Some(body) => body,
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        }
    };

    let handler = VerificationNotifier::new(LogNotifier::new());
    let response = handler.handle(HttpRequest::new(config.method, body)).await;

    println!("HTTP {}", response.status);
    for (name, value) in &response.headers {
        println!("{}: {}", name, value);
    }
    println!();
    println!("{}", response.body);

    if !response.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
