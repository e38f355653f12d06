use std::sync::Arc;

use crate::application::ports::post_ports::{CreatePostOutcome, CreatePostRequest, CreatePostUseCase};
use crate::application::services::create_post_service::CreatePostService;
use crate::common::errors::{DomainError, ErrorKind};
use crate::domain::repositories::post_repository::{MockPostRepository, PostRepository, PostRepositoryError};
use crate::infrastructure::repositories::memory::PostMemoryRepository;

fn request(user_id: i64, message: &str) -> CreatePostRequest {
    CreatePostRequest {
        user_id,
        message: message.to_string(),
    }
}

fn expect_failure(outcome: CreatePostOutcome) -> DomainError {
    match outcome {
        CreatePostOutcome::Failed(err) => err,
        CreatePostOutcome::Created(response) => panic!("expected failure, got {:?}", response),
    }
}

#[tokio::test]
async fn creates_post_with_assigned_id() {
    let repo = Arc::new(PostMemoryRepository::new());
    let service = CreatePostService::new(repo.clone());

    match service.execute(request(1, "hello")).await {
        CreatePostOutcome::Created(response) => {
            assert_eq!(response.post.id, 1);
            assert_eq!(response.post.user_id, 1);
            assert_eq!(response.post.message, "hello");
        }
        CreatePostOutcome::Failed(err) => panic!("unexpected failure: {}", err),
    }
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn message_bounds() {
    let service = CreatePostService::new(Arc::new(PostMemoryRepository::new()));

    let empty = expect_failure(service.execute(request(1, "")).await);
    assert_eq!(empty.message, "Message is required");
    assert_eq!(empty.kind, ErrorKind::InvalidInput);

    let too_long = expect_failure(service.execute(request(1, &"a".repeat(281))).await);
    assert_eq!(too_long.message, "Message must be 280 characters or less");

    assert!(service.execute(request(1, &"a".repeat(280))).await.is_success());
    assert!(service.execute(request(1, "a")).await.is_success());
}

#[tokio::test]
async fn invalid_message_is_never_saved() {
    let mut repo = MockPostRepository::new();
    repo.expect_save().never();

    let service = CreatePostService::new(Arc::new(repo));
    assert!(!service.execute(request(1, "")).await.is_success());
}

#[tokio::test]
async fn persistence_failure_becomes_failure_outcome() {
    let mut repo = MockPostRepository::new();
    repo.expect_save()
        .times(1)
        .returning(|_| Err(PostRepositoryError::DatabaseError("disk full".to_string())));

    let service = CreatePostService::new(Arc::new(repo));
    let err = expect_failure(service.execute(request(1, "hello")).await);
    assert_eq!(err.kind, ErrorKind::Persistence);
    assert!(err.message.contains("disk full"));
}
