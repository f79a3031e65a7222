//! Dashboard aggregation over a populated database, driven through the
//! application services

use std::sync::Arc;

use tango_core::application::{
    DashboardService, GroupService, StudySessionService, WordService,
};
use tango_core::domain::{GroupFields, WordFields};
use tango_core::port::time_provider::SystemTimeProvider;
use tango_core::port::TimeProvider;
use tango_infra_sqlite::{
    create_pool, run_migrations, SqliteDashboard, SqliteGroupRepository,
    SqliteStudySessionRepository, SqliteWordRepository,
};

struct Services {
    words: WordService,
    groups: GroupService,
    sessions: StudySessionService,
    dashboard: DashboardService,
}

async fn setup() -> Services {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);

    Services {
        words: WordService::new(Arc::new(SqliteWordRepository::new(
            pool.clone(),
            time_provider.clone(),
        ))),
        groups: GroupService::new(Arc::new(SqliteGroupRepository::new(
            pool.clone(),
            time_provider.clone(),
        ))),
        sessions: StudySessionService::new(Arc::new(SqliteStudySessionRepository::new(
            pool.clone(),
            time_provider,
        ))),
        dashboard: DashboardService::new(Arc::new(SqliteDashboard::new(pool))),
    }
}

fn word_fields(kanji: &str, romaji: &str, english: &str) -> WordFields {
    WordFields {
        kanji: kanji.to_string(),
        romaji: romaji.to_string(),
        english: english.to_string(),
        example: None,
    }
}

#[tokio::test]
async fn test_empty_database_all_zero() {
    let services = setup().await;

    assert!(services.dashboard.last_session().await.unwrap().is_none());

    let progress = services.dashboard.study_progress().await.unwrap();
    assert_eq!(
        (
            progress.total_words,
            progress.studied_words,
            progress.remaining_words,
        ),
        (0, 0, 0)
    );
    assert_eq!(progress.progress_percentage, 0.0);

    let stats = services.dashboard.quick_stats().await.unwrap();
    assert_eq!(
        (stats.total_sessions, stats.active_groups, stats.total_reviews),
        (0, 0, 0)
    );
    assert_eq!(stats.success_rate, 0.0);
}

#[tokio::test]
async fn test_aggregates_over_populated_database() {
    let services = setup().await;

    let eat = services
        .words
        .create(word_fields("食べる", "taberu", "to eat"))
        .await
        .unwrap();
    let drink = services
        .words
        .create(word_fields("飲む", "nomu", "to drink"))
        .await
        .unwrap();
    services
        .words
        .create(word_fields("行く", "iku", "to go"))
        .await
        .unwrap();

    let verbs = services
        .groups
        .create(GroupFields {
            name: "Verbs".to_string(),
            description: None,
        })
        .await
        .unwrap();
    let motion = services
        .groups
        .create(GroupFields {
            name: "Motion".to_string(),
            description: None,
        })
        .await
        .unwrap();
    // A third group that never hosts a session
    services
        .groups
        .create(GroupFields {
            name: "Idle".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let first = services.sessions.start(verbs.id, 1).await.unwrap();
    services
        .sessions
        .record_review(first.id, eat.id, true)
        .await
        .unwrap();
    services
        .sessions
        .record_review(first.id, eat.id, false)
        .await
        .unwrap();

    let second = services.sessions.start(motion.id, 1).await.unwrap();
    services
        .sessions
        .record_review(second.id, drink.id, true)
        .await
        .unwrap();

    // Two of three words studied
    let progress = services.dashboard.study_progress().await.unwrap();
    assert_eq!(progress.total_words, 3);
    assert_eq!(progress.studied_words, 2);
    assert_eq!(progress.remaining_words, 1);

    // Two groups hosted sessions, the idle one does not count
    let stats = services.dashboard.quick_stats().await.unwrap();
    assert_eq!(stats.total_sessions, 2);
    assert_eq!(stats.active_groups, 2);
    assert_eq!(stats.total_reviews, 3);
    assert!((stats.success_rate - 200.0 / 3.0).abs() < 1e-9);

    // Latest start time wins
    let last = services.dashboard.last_session().await.unwrap().unwrap();
    assert_eq!(last.session_id, second.id);
    assert_eq!(last.correct_count, 1);
    assert_eq!(last.incorrect_count, 0);
}

#[tokio::test]
async fn test_last_session_survives_session_end() {
    let services = setup().await;

    let word = services
        .words
        .create(word_fields("水", "mizu", "water"))
        .await
        .unwrap();
    let group = services
        .groups
        .create(GroupFields {
            name: "Nouns".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let session = services.sessions.start(group.id, 1).await.unwrap();
    services
        .sessions
        .record_review(session.id, word.id, true)
        .await
        .unwrap();
    services.sessions.end(session.id).await.unwrap();

    let last = services.dashboard.last_session().await.unwrap().unwrap();
    assert_eq!(last.session_id, session.id);
    assert!(last.end_time.is_some());
    assert_eq!(last.correct_count, 1);
}
