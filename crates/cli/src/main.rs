//! Tango CLI - operator entry point for the vocabulary portal
//! Applies migrations, loads seed data, and prints dashboard statistics

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tango_core::application::{DashboardService, GroupService, StudyActivityService, WordService};
use tango_core::domain::{GroupFields, StudyActivityFields, WordFields};
use tango_core::port::time_provider::SystemTimeProvider;
use tango_infra_sqlite::{
    create_pool, run_migrations, SqliteDashboard, SqliteGroupRepository,
    SqliteStudyActivityRepository, SqliteWordRepository,
};

#[derive(Parser)]
#[command(name = "tango")]
#[command(about = "Tango vocabulary portal CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database path (defaults to the per-user data directory)
    #[arg(long, env = "TANGO_DB_PATH")]
    db_path: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,

    /// Load the starter vocabulary
    Seed,

    /// Show dashboard statistics
    Stats,
}

fn default_db_path() -> Result<String> {
    let dirs = directories::ProjectDirs::from("", "", "tango")
        .context("Cannot determine a data directory for this platform")?;
    let dir = dirs.data_dir();
    std::fs::create_dir_all(dir)?;
    Ok(dir.join("tango.db").to_string_lossy().into_owned())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging: pretty for development, JSON for production
    let log_format = std::env::var("TANGO_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("tango=info"))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    let cli = Cli::parse();

    let db_path = match cli.db_path {
        Some(path) => path,
        None => default_db_path()?,
    };

    info!(db_path = %db_path, "Opening database");

    let pool = create_pool(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // DI wiring: one shared pool, one clock
    let time_provider = Arc::new(SystemTimeProvider);

    match cli.command {
        Commands::Migrate => {
            println!("{}", "Database is up to date.".green());
        }
        Commands::Seed => {
            let words = WordService::new(Arc::new(SqliteWordRepository::new(
                pool.clone(),
                time_provider.clone(),
            )));
            let groups = GroupService::new(Arc::new(SqliteGroupRepository::new(
                pool.clone(),
                time_provider.clone(),
            )));
            let activities = StudyActivityService::new(Arc::new(
                SqliteStudyActivityRepository::new(pool.clone(), time_provider.clone()),
            ));

            seed(&words, &groups, &activities).await?;
            println!("{}", "Seed data loaded.".green());
        }
        Commands::Stats => {
            let dashboard = DashboardService::new(Arc::new(SqliteDashboard::new(pool.clone())));
            show_stats(&dashboard).await?;
        }
    }

    Ok(())
}

/// Starter vocabulary: two thematic groups and one activity
async fn seed(
    words: &WordService,
    groups: &GroupService,
    activities: &StudyActivityService,
) -> Result<()> {
    let verbs = groups
        .create(GroupFields {
            name: "Core Verbs".to_string(),
            description: Some("Everyday actions".to_string()),
        })
        .await?;
    let food = groups
        .create(GroupFields {
            name: "Food & Drink".to_string(),
            description: None,
        })
        .await?;

    let entries: [(&str, &str, &str, Option<&str>, i64); 6] = [
        ("食べる", "taberu", "to eat", Some("寿司を食べる"), verbs.id),
        ("飲む", "nomu", "to drink", Some("水を飲む"), verbs.id),
        ("行く", "iku", "to go", None, verbs.id),
        ("水", "mizu", "water", None, food.id),
        ("茶", "cha", "tea", None, food.id),
        ("寿司", "sushi", "sushi", None, food.id),
    ];

    for (kanji, romaji, english, example, group_id) in entries {
        let word = words
            .create(WordFields {
                kanji: kanji.to_string(),
                romaji: romaji.to_string(),
                english: english.to_string(),
                example: example.map(str::to_string),
            })
            .await?;
        groups.add_word(group_id, word.id).await?;
    }

    activities
        .create(StudyActivityFields {
            name: "Flashcards".to_string(),
            url: "http://localhost:8081".to_string(),
        })
        .await?;

    info!("Seeded {} words", entries.len());
    Ok(())
}

#[derive(Tabled)]
struct StatRow {
    metric: String,
    value: String,
}

async fn show_stats(dashboard: &DashboardService) -> Result<()> {
    let progress = dashboard.study_progress().await?;
    let stats = dashboard.quick_stats().await?;

    let rows = vec![
        StatRow {
            metric: "Total words".to_string(),
            value: progress.total_words.to_string(),
        },
        StatRow {
            metric: "Studied words".to_string(),
            value: progress.studied_words.to_string(),
        },
        StatRow {
            metric: "Remaining words".to_string(),
            value: progress.remaining_words.to_string(),
        },
        StatRow {
            metric: "Progress".to_string(),
            value: format!("{:.1}%", progress.progress_percentage),
        },
        StatRow {
            metric: "Total sessions".to_string(),
            value: stats.total_sessions.to_string(),
        },
        StatRow {
            metric: "Active groups".to_string(),
            value: stats.active_groups.to_string(),
        },
        StatRow {
            metric: "Total reviews".to_string(),
            value: stats.total_reviews.to_string(),
        },
        StatRow {
            metric: "Success rate".to_string(),
            value: format!("{:.1}%", stats.success_rate),
        },
    ];

    println!("{}", "Dashboard".bold());
    println!("{}", Table::new(rows));

    match dashboard.last_session().await? {
        Some(last) => {
            println!(
                "Last session: #{} (group {}) started {} - {} correct / {} incorrect",
                last.session_id,
                last.group_id,
                last.start_time,
                last.correct_count,
                last.incorrect_count
            );
        }
        None => println!("No study sessions recorded yet."),
    }

    Ok(())
}
