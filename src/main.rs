use clap::Parser;
use concert_catalog::utils::{logger, validation::Validate};
use concert_catalog::{
    CatalogError, CatalogReader, CliConfig, Command, ConcertRepository, ConfigProvider, Source,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Err(e) = config.apply_config_file() {
        exit_with(&e);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let source = match Source::from_config(&config) {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };
    let reader = CatalogReader::with_document_path(source, config.document_path());

    match run(&reader, &config.command).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Catalog query failed: {}", e);
            exit_with(&e);
        }
    }

    Ok(())
}

async fn run<R: ConcertRepository>(reader: &R, command: &Command) -> concert_catalog::Result<String> {
    let output = match command {
        Command::List => serde_json::to_string_pretty(&reader.list().await?)?,
        Command::Get { id } => match reader.get_by_id(id).await? {
            Some(concert) => serde_json::to_string_pretty(&concert)?,
            None => {
                eprintln!("No concert with id '{}'", id);
                std::process::exit(1);
            }
        },
        Command::Artist { name } => {
            serde_json::to_string_pretty(&reader.get_by_artist_name(name).await?)?
        }
    };
    Ok(output)
}

fn exit_with(e: &CatalogError) -> ! {
    eprintln!("❌ {}", e);
    let exit_code = if e.is_transport() { 2 } else { 1 };
    std::process::exit(exit_code);
}
