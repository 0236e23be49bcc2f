use clap::Parser;
use record_gen::utils::error::GenError;
use record_gen::utils::{logger, validation::Validate};
use record_gen::{
    registered_schemas, CliConfig, GenerationSettings, GeneratorEngine, LocalStorage, TomlConfig,
};

fn load_settings(cli: &CliConfig) -> Result<GenerationSettings, GenError> {
    let base = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?.into_settings(),
        None => GenerationSettings::default(),
    };
    let settings = cli.apply(base);
    settings.validate()?;
    Ok(settings)
}

fn report(e: &GenError) {
    tracing::error!(
        "Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is configured from settings, so only stderr is available here.
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    logger::init_cli_logger(settings.verbose, settings.json_logs);
    tracing::info!("Starting record-gen");
    tracing::debug!("Settings: {:?}", settings);

    let storage = LocalStorage::new(settings.output_path.clone());
    let engine = GeneratorEngine::new(settings.build_generator(), storage);
    let schemas = registered_schemas();

    let outcome = if cli.dry_run {
        engine.render(&schemas).map(|header| {
            print!("{}", header);
        })
    } else {
        engine.run(&schemas, &settings.file_name).map(|path| {
            println!("Header written to {}", path);
        })
    };

    if let Err(e) = outcome {
        report(&e);
        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}
