use std::sync::Arc;

use crate::application::ports::favorite_ports::{
    FavoriteOutputPort, ToggleFavoriteOutcome, ToggleFavoriteRequest, ToggleFavoriteUseCase,
};
use crate::application::ports::output_port::OutputPort;
use crate::application::services::toggle_favorite_service::ToggleFavoriteService;
use crate::common::errors::{DomainError, ErrorKind};
use crate::domain::entities::favorite::Favorite;
use crate::domain::repositories::favorite_repository::{
    FavoriteRepository, FavoriteRepositoryError, MockFavoriteRepository,
};
use crate::infrastructure::repositories::memory::FavoriteMemoryRepository;

const REQUEST: ToggleFavoriteRequest = ToggleFavoriteRequest { user_id: 1, post_id: 10 };

#[derive(Default)]
struct RecordingPresenter {
    calls: Vec<&'static str>,
}

impl OutputPort for RecordingPresenter {
    fn failure(&mut self, _error: DomainError) {
        self.calls.push("failure");
    }
}

impl FavoriteOutputPort for RecordingPresenter {
    fn success_add(&mut self) {
        self.calls.push("add");
    }

    fn success_remove(&mut self) {
        self.calls.push("remove");
    }
}

#[tokio::test]
async fn sequential_toggles_alternate() {
    let repo = Arc::new(FavoriteMemoryRepository::new());
    let service = ToggleFavoriteService::new(repo.clone());

    for n in 1..=6 {
        let outcome = service.execute(REQUEST).await;
        if n % 2 == 1 {
            assert!(matches!(outcome, ToggleFavoriteOutcome::Added), "toggle {n}");
        } else {
            assert!(matches!(outcome, ToggleFavoriteOutcome::Removed), "toggle {n}");
        }
        assert_eq!(repo.is_favorited(1, 10).await.unwrap(), n % 2 == 1);
        assert_eq!(repo.count_by_post(10).await.unwrap(), (n % 2) as u64);
    }
}

#[tokio::test]
async fn toggles_of_different_users_are_independent() {
    let repo = Arc::new(FavoriteMemoryRepository::new());
    let service = ToggleFavoriteService::new(repo.clone());

    service.execute(REQUEST).await.present(&mut RecordingPresenter::default());
    let other = ToggleFavoriteRequest { user_id: 2, post_id: 10 };
    assert!(matches!(service.execute(other).await, ToggleFavoriteOutcome::Added));

    assert_eq!(repo.count_by_post(10).await.unwrap(), 2);
}

#[tokio::test]
async fn presenter_receives_exactly_one_call_per_toggle() {
    let service = ToggleFavoriteService::new(Arc::new(FavoriteMemoryRepository::new()));
    let mut presenter = RecordingPresenter::default();

    service.execute(REQUEST).await.present(&mut presenter);
    service.execute(REQUEST).await.present(&mut presenter);

    assert_eq!(presenter.calls, vec!["add", "remove"]);
}

#[tokio::test]
async fn lost_race_on_add_becomes_failure() {
    let mut repo = MockFavoriteRepository::new();
    repo.expect_is_favorited().times(1).returning(|_, _| Ok(false));
    repo.expect_add()
        .withf(|fav: &Favorite| fav.user_id() == 1 && fav.post_id() == 10)
        .times(1)
        .returning(|_| Err(FavoriteRepositoryError::AlreadyExists { user_id: 1, post_id: 10 }));
    repo.expect_remove().never();

    let service = ToggleFavoriteService::new(Arc::new(repo));
    match service.execute(REQUEST).await {
        ToggleFavoriteOutcome::Failed(err) => assert_eq!(err.kind, ErrorKind::AlreadyExists),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn lost_race_on_remove_becomes_failure() {
    let mut repo = MockFavoriteRepository::new();
    repo.expect_is_favorited().returning(|_, _| Ok(true));
    repo.expect_remove()
        .withf(|user_id, post_id| *user_id == 1 && *post_id == 10)
        .times(1)
        .returning(|user_id, post_id| Err(FavoriteRepositoryError::NotFound { user_id, post_id }));
    repo.expect_add().never();

    let service = ToggleFavoriteService::new(Arc::new(repo));
    let mut presenter = RecordingPresenter::default();
    service.execute(REQUEST).await.present(&mut presenter);

    assert_eq!(presenter.calls, vec!["failure"]);
}

#[tokio::test]
async fn lookup_failure_skips_writes() {
    let mut repo = MockFavoriteRepository::new();
    repo.expect_is_favorited()
        .returning(|_, _| Err(FavoriteRepositoryError::DatabaseError("gone".to_string())));
    repo.expect_add().never();
    repo.expect_remove().never();

    let service = ToggleFavoriteService::new(Arc::new(repo));
    match service.execute(REQUEST).await {
        ToggleFavoriteOutcome::Failed(err) => assert_eq!(err.kind, ErrorKind::Persistence),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_toggles_never_duplicate_a_favorite() {
    let repo = Arc::new(FavoriteMemoryRepository::new());
    let service = Arc::new(ToggleFavoriteService::new(repo.clone()));

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.execute(REQUEST).await })
        })
        .collect();

    let (mut adds, mut removes) = (0u64, 0u64);
    for handle in handles {
        match handle.await.unwrap() {
            ToggleFavoriteOutcome::Added => adds += 1,
            ToggleFavoriteOutcome::Removed => removes += 1,
            ToggleFavoriteOutcome::Failed(_) => {}
        }
    }

    let count = repo.count_by_post(10).await.unwrap();
    assert!(count <= 1);
    assert_eq!(count, adds - removes);
}
