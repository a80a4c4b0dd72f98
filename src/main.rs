use clap::Parser;
use devjobs_stats::utils::{logger, validation::Validate};
use devjobs_stats::{
    render, AppConfig, CliConfig, HeadHunterBoard, JobBoard, StatsEngine, SuperJobBoard,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting devjobs-stats");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("Run failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let headhunter = HeadHunterBoard::new(config)?;
    let superjob = SuperJobBoard::new(config)?;
    let engine = StatsEngine::new(config.languages.clone(), config.max_pages);

    // Collect everything before printing: a failed source invalidates the
    // whole run and no partial tables should appear.
    let boards: [&dyn JobBoard; 2] = [&headhunter, &superjob];
    let mut reports = Vec::with_capacity(boards.len());
    for board in boards {
        reports.push(engine.run_source(board).await?);
    }

    for report in &reports {
        println!("{}", render::render_table(report));
    }

    tracing::info!("Done, {} tables rendered", reports.len());
    Ok(())
}
