use phone_blocklist_application::ports::BlockedPhoneRepository;
use phone_blocklist_application::use_cases::AddBlockedPhoneUseCase;
use phone_blocklist_domain::config::DatabaseConfig;
use phone_blocklist_domain::{DomainError, NewBlock};
use phone_blocklist_infrastructure::database::create_pool;
use phone_blocklist_infrastructure::repositories::SqliteBlockedPhoneRepository;
use std::sync::Arc;
use tempfile::TempDir;

const CONCURRENT_ADDS: usize = 32;

async fn create_file_repo() -> (Arc<SqliteBlockedPhoneRepository>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("blocklist.db").display());
    let cfg = DatabaseConfig {
        max_connections: 8,
        ..DatabaseConfig::default()
    };

    let pool = create_pool(&url, &cfg).await.unwrap();
    (Arc::new(SqliteBlockedPhoneRepository::new(pool)), dir)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_adds_create_exactly_one_active_record() {
    let (repo, _dir) = create_file_repo().await;
    let use_case = Arc::new(AddBlockedPhoneUseCase::new(repo.clone()));

    let handles: Vec<_> = (0..CONCURRENT_ADDS)
        .map(|i| {
            let use_case = use_case.clone();
            let raw = if i % 2 == 0 { "123-456-7890" } else { "(123) 456 7890" };
            tokio::spawn(async move { use_case.execute(raw, Some("Spam"), None).await })
        })
        .collect();

    let mut blocked = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(record) => {
                assert!(record.is_active);
                blocked += 1;
            }
            Err(DomainError::AlreadyBlocked(number)) => {
                assert_eq!(number, "(123) 456-7890");
                conflicts += 1;
            }
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(blocked, 1);
    assert_eq!(conflicts, CONCURRENT_ADDS - 1);

    let history = repo.list_history("(123) 456-7890").await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].is_active);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_reblock_cycles_keep_one_active_record() {
    let (repo, _dir) = create_file_repo().await;
    let rounds = 5;

    for round in 1..=rounds {
        let handles: Vec<_> = (0..CONCURRENT_ADDS)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let block = NewBlock::new("5551234567", None, None).unwrap();
                    repo.insert_if_not_active(&block).await
                })
            })
            .collect();

        let mut winners = Vec::new();
        for handle in handles {
            if let Some(record) = handle.await.unwrap().unwrap() {
                winners.push(record);
            }
        }

        assert_eq!(winners.len(), 1, "round {round}");

        let active = repo
            .find_active_by_number("(555) 123-4567")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(active.id, winners[0].id);

        let history = repo.list_history("(555) 123-4567").await.unwrap();
        assert_eq!(history.len(), round);
        assert_eq!(history.iter().filter(|r| r.is_active).count(), 1);

        assert!(repo.deactivate(active.id).await.unwrap());
    }

    assert!(repo.list_active().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_adds_for_different_numbers_all_succeed() {
    let (repo, _dir) = create_file_repo().await;
    let use_case = Arc::new(AddBlockedPhoneUseCase::new(repo.clone()));

    let handles: Vec<_> = (0..CONCURRENT_ADDS)
        .map(|i| {
            let use_case = use_case.clone();
            tokio::spawn(async move {
                let number = format!("555000{:04}", i);
                use_case.execute(&number, None, None).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.list_active().await.unwrap().len(), CONCURRENT_ADDS);
}
