use clap::Parser;
use weather_cep::utils::logger;
use weather_cep::{app, CliArgs, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_logger(args.verbose, args.json_logs);

    tracing::info!("Starting weather-cep");

    let settings = match Settings::load(&args) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if args.verbose {
        tracing::debug!(
            "Settings: bind={}, viacep={}, weather={}, timeout={}s, api_key_set={}",
            settings.bind_address(),
            settings.viacep_base_url,
            settings.weather_base_url,
            settings.request_timeout_seconds,
            settings.weather_api_key.is_some()
        );
    }

    app::serve(&settings).await?;

    Ok(())
}
