use clap::Parser;
use runway_check::core::ConfigProvider;
use runway_check::utils::{logger, validation::Validate};
use runway_check::{
    AnalysisEngine, AnalysisPipeline, AnalysisRun, CliConfig, LocalStorage, TomlConfig,
};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting runway-check CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = if let Some(path) = cli.config.clone() {
        TomlConfig::from_file(&path).and_then(run_analysis)
    } else {
        run_analysis(cli)
    };

    match result {
        Ok(run) => {
            println!("{}", run.outcome.text_output);
            println!();
            println!("✅ Report saved to: {}", run.output_location);
        }
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn run_analysis<C>(config: C) -> runway_check::Result<AnalysisRun>
where
    C: ConfigProvider + Validate + std::fmt::Debug,
{
    config.validate()?;
    tracing::debug!("Effective config: {:?}", config);

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = AnalysisPipeline::new(storage, config);
    let engine = AnalysisEngine::new(pipeline);

    engine.run()
}
