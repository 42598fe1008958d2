use anyhow::Context;
use biz_insights::core::ConfigProvider;
use biz_insights::utils::error::{ErrorSeverity, InsightsError};
use biz_insights::utils::{logger, validation::Validate};
use biz_insights::{
    CliConfig, DashboardEngine, DashboardSnapshot, InsightsService, SampleCatalog, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting biz-insights");
    tracing::debug!("CLI config: {:?}", cli);

    let outcome = match &cli.config {
        Some(path) => {
            let mut file_config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            cli.apply_overrides(&mut file_config);
            exit_on_invalid(&file_config);
            let catalog = file_config.catalog()?;
            run_session(DashboardEngine::new(file_config, catalog), &cli).await
        }
        None => {
            exit_on_invalid(&cli);
            run_session(DashboardEngine::new(cli.clone(), SampleCatalog::default()), &cli).await
        }
    };

    let rendered = match outcome {
        Ok(snapshot) if cli.json => snapshot.to_json().map(|json| println!("{}", json)),
        Ok(snapshot) => {
            print_dashboard(&snapshot);
            Ok(())
        }
        Err(e) => Err(e),
    };

    if let Err(e) = rendered {
        tracing::error!(
            "Session failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn exit_on_invalid<V: Validate>(config: &V) {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

async fn run_session<C: ConfigProvider>(
    engine: DashboardEngine<C>,
    cli: &CliConfig,
) -> Result<DashboardSnapshot, InsightsError> {
    for raw in &cli.searches {
        let (name, location) = raw.split_once(',').unwrap_or((raw.as_str(), ""));

        match engine.search(name, location).await {
            Ok(_) => {}
            // 驗證失敗只提示，不中斷後續搜尋
            Err(e @ InsightsError::ValidationError { .. }) => {
                eprintln!("⚠️  '{}': {}", raw, e.user_friendly_message());
            }
            Err(e) => return Err(e),
        }
    }

    for _ in 0..cli.regenerate {
        engine.regenerate_headline().await?;
    }

    Ok(engine.snapshot().await)
}

fn print_dashboard(snapshot: &DashboardSnapshot) {
    let business = &snapshot.business;
    if let Some(query) = &snapshot.last_query {
        println!("🔎 Last search: {}", query.label());
    }
    println!("📍 {} ({})", business.name, business.location);
    println!(
        "⭐ {:.1} from {} reviews",
        business.rating, business.review_count
    );
    println!();
    println!("📰 {}", snapshot.headline);
    for option in &snapshot.other_headlines {
        println!("   [{}] {}", option.index, option.text);
    }
    println!();
    println!("📊 Total searches: {}", snapshot.stats.total_searches);
    println!("📊 Average rating: {:.1}", snapshot.stats.average_rating);
    if let Some(best) = &snapshot.stats.highest_rated {
        println!("🏆 Highest rated: {} ({:.1})", best.name, best.rating);
    }

    if snapshot.recent_searches.is_empty() {
        println!("🕘 No recent searches");
    } else {
        println!("🕘 Recent searches:");
        for entry in &snapshot.recent_searches {
            println!("   - {}", entry);
        }
    }
}
