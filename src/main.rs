//! SentimentEdge command-line interface
//!
//! Enter a political/economic event and see its projected market impact.

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sentiment_edge::{
    analysis::ImpactAnalyzer,
    config::Config,
    narrative::LlmNarrative,
    report,
    showcase::{DemoComponent, LiveTradingSnapshot, PerformanceDashboard, PerformanceSimulator},
    storage::AnalysisStore,
    types::{Country, EventType, ImpactHorizon, PoliticalEvent},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sentiment-edge")]
#[command(about = "Political & economic event analysis with market impact predictions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the market impact of an event
    Analyze {
        /// Event description, e.g. "Fed announces 0.5% interest rate cut"
        description: String,
        /// Primary country
        #[arg(long, default_value = "USA")]
        country: Country,
        /// Event type (e.g. "Monetary Policy", trade-policy)
        #[arg(short = 't', long, default_value = "Monetary Policy")]
        event_type: EventType,
        /// Event date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Event certainty between 0.1 and 1.0
        #[arg(long, default_value_t = PoliticalEvent::DEFAULT_CERTAINTY)]
        certainty: f64,
        /// Impact timeline (immediate, short-term, medium-term, long-term)
        #[arg(long, default_value = "immediate")]
        horizon: ImpactHorizon,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Do not store the report in the history database
        #[arg(long)]
        no_save: bool,
    },
    /// Show a demo component
    Demo {
        /// Component (interactive, global, impact-mapping, backtesting, live-trading, performance)
        component: DemoComponent,
        /// Seed for the simulated performance curves
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List demo components
    Components,
    /// Show recently stored analyses
    History {
        /// Number of records to show
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Show a stored analysis
    Show {
        /// Report ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Analyze {
            description,
            country,
            event_type,
            date,
            certainty,
            horizon,
            json,
            no_save,
        } => {
            let event = PoliticalEvent::new(description, country, event_type)
                .with_date(date.unwrap_or_else(|| Utc::now().date_naive()))
                .with_certainty(certainty)
                .with_horizon(horizon);
            analyze_event(config, event, json, !no_save).await
        }
        Commands::Demo { component, seed } => show_component(component, seed),
        Commands::Components => {
            list_components();
            Ok(())
        }
        Commands::History { limit } => show_history(config, limit).await,
        Commands::Show { id } => show_analysis(config, &id).await,
    }
}

fn build_analyzer(config: &Config) -> anyhow::Result<ImpactAnalyzer> {
    let analyzer = ImpactAnalyzer::new(config.analysis.clone());

    match &config.llm {
        Some(llm_config) => {
            let llm = LlmNarrative::from_config(llm_config)?;
            let analyzer = analyzer.with_narrator(Box::new(llm));
            tracing::info!("Using {} for event assessments", analyzer.narrator_name());
            Ok(analyzer)
        }
        None => Ok(analyzer),
    }
}

async fn analyze_event(
    config: Config,
    event: PoliticalEvent,
    json: bool,
    save: bool,
) -> anyhow::Result<()> {
    let analyzer = build_analyzer(&config)?;

    if !json {
        println!("\n🎯 SentimentEdge™ Political & Economic Analysis\n");
        println!("🚀 Analyzing event impact...");
    }

    let impact = analyzer.analyze(&event).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&impact)?);
    } else {
        print!("{}", report::render_report(&impact));
    }

    if save {
        let path = config.database.resolved_path();
        let store = AnalysisStore::connect(&path)
            .await
            .with_context(|| format!("opening history database {}", path.display()))?;
        store.save(&impact).await?;
        store.close().await;
        tracing::info!(id = %impact.id, "Analysis stored");
    }

    Ok(())
}

fn show_component(component: DemoComponent, seed: Option<u64>) -> anyhow::Result<()> {
    match component {
        DemoComponent::InteractiveEventAnalysis => {
            println!("\n{}\n", component.title());
            println!("Enter a political/economic event and see real-time market impact analysis:");
            println!("  sentiment-edge analyze \"Fed announces 0.5% interest rate cut due to inflation concerns\" \\");
            println!("      --country USA --event-type \"Monetary Policy\" --horizon short-term");
            println!("\nEvent types:");
            for t in EventType::ALL {
                println!("  - {}", t);
            }
            println!("\nCountries: {}", join(Country::ALL.iter()));
            println!("Impact timelines: {}", join(ImpactHorizon::ALL.iter()));
        }
        DemoComponent::LiveTradingIntegration => {
            print!("{}", report::render_live_trading(&LiveTradingSnapshot::default()));
        }
        DemoComponent::PerformanceAnalytics => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let dashboard = PerformanceDashboard::build(&PerformanceSimulator::default(), &mut rng)?;
            print!("{}", report::render_performance(&dashboard));
        }
        _ => {
            print!("{}", report::render_descriptive(component));
        }
    }

    println!();
    print!("{}", report::render_footer());
    Ok(())
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

fn list_components() {
    println!("\n🎯 SentimentEdge™ Demo Components\n");
    for component in DemoComponent::ALL {
        println!("{:<16} {}", component.slug(), component.title());
    }
}

async fn show_history(config: Config, limit: u32) -> anyhow::Result<()> {
    let store = AnalysisStore::connect(config.database.resolved_path()).await?;
    let reports = store.recent(limit).await?;
    let total = store.count().await?;

    if reports.is_empty() {
        println!("📭 No stored analyses");
        return Ok(());
    }

    println!("\n📈 Recent Analyses ({} of {})\n", reports.len(), total);
    println!(
        "{:<36} {:<16} {:<45} {:>7} {:<8} {:>3}",
        "ID", "Created", "Event", "Impact", "Call", "Sig"
    );
    println!("{}", "-".repeat(120));
    for r in &reports {
        println!("{}", report::render_history_row(r));
    }

    Ok(())
}

async fn show_analysis(config: Config, id: &str) -> anyhow::Result<()> {
    let store = AnalysisStore::connect(config.database.resolved_path()).await?;
    let stored = store
        .get(id)
        .await?
        .ok_or_else(|| sentiment_edge::error::EdgeError::NotFound(id.to_string()))?;

    print!("{}", report::render_report(&stored));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_limit_defaults_to_ten() {
        let cli = Cli::try_parse_from(["sentiment-edge", "history"]).unwrap();
        assert!(matches!(cli.command, Commands::History { limit: 10 }));
    }

    #[test]
    fn test_history_rejects_negative_limit() {
        assert!(Cli::try_parse_from(["sentiment-edge", "history", "--limit", "-1"]).is_err());
        assert!(Cli::try_parse_from(["sentiment-edge", "history", "--limit=-5"]).is_err());
    }
}
