use busca_cnpj::app::session::{self, run_session};
use busca_cnpj::config::toml_config::TomlConfig;
use busca_cnpj::utils::{logger, validation::Validate};
use busca_cnpj::{BrasilApiClient, CliConfig, CnpjError, LookupService, Settings};
use clap::Parser;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting busca-cnpj");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!("Effective settings: {:?}", settings);

    let service = LookupService::new(BrasilApiClient::from_config(&settings));
    let options = settings.render_options();

    match cli.cnpj.as_deref() {
        Some(raw) => {
            let screen = service.handle(raw).await;
            print!("{}", session::render(&screen, &options)?);

            let exit_code = screen.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
        None => {
            let input = BufReader::new(tokio::io::stdin());
            run_session(&service, &options, input, tokio::io::stdout()).await?;
        }
    }

    Ok(())
}

fn load_settings(cli: &CliConfig) -> Result<Settings, CnpjError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    let settings = Settings::from_toml(&file)?.apply_cli(cli);
    settings.validate()?;
    Ok(settings)
}
