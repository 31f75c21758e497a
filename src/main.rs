use clap::Parser;
use llm_patterns::utils::error::ErrorSeverity;
use llm_patterns::utils::{logger, validation::Validate};
use llm_patterns::{CliConfig, DemoConfig, DemoEngine, PatternError};

fn exit_code(e: &PatternError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: PatternError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting llm-patterns");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading demo configuration from: {}", path.display());
            DemoConfig::from_file(path).unwrap_or_else(|e| fail(e))
        }
        None => DemoConfig::default(),
    };

    if let Err(e) = config.validate() {
        fail(e);
    }

    let engine = DemoEngine::new(config);
    let reports = match engine.run(&cli.selected_patterns()) {
        Ok(reports) => reports,
        Err(e) => fail(e),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("== {} ==", report.pattern);
            for line in &report.lines {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
