use tapcard_backend::dto::quote_dto::NewQuote;
use tapcard_backend::model::quote::ServiceKind;
use tapcard_backend::repository::quote_repo::{InMemoryQuoteRepository, QuoteRepository};
use tapcard_backend::repository::repository_error::RepositoryError;
use tapcard_backend::util::error::ServiceError;

fn new_quote(name: &str) -> NewQuote {
    NewQuote {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        service: ServiceKind::DigitalBusinessCards,
        description: "a quote".to_string(),
    }
}

#[tokio::test]
async fn test_create_assigns_sequential_ids_and_timestamps() {
    let repo = InMemoryQuoteRepository::new();

    let first = repo.create(new_quote("Alice")).await.expect("create");
    let second = repo.create(new_quote("Bob")).await.expect("create");

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(first.name, "Alice");
    assert_eq!(first.email, "alice@example.com");
    assert!(first.created_at.is_some());
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn test_list_all_preserves_insertion_order() {
    let repo = InMemoryQuoteRepository::new();
    for name in ["Alice", "Bob", "Carla"] {
        repo.create(new_quote(name)).await.expect("create");
    }

    let quotes = repo.list_all().await.expect("list");
    let names: Vec<&str> = quotes.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carla"]);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let repo = InMemoryQuoteRepository::new();
    let created = repo.create(new_quote("Alice")).await.expect("create");

    repo.delete_by_id(created.id.unwrap()).await.expect("delete");
    let quotes = repo.list_all().await.expect("list");
    assert!(quotes.is_empty());
}

#[tokio::test]
async fn test_delete_absent_id_is_not_found() {
    let repo = InMemoryQuoteRepository::new();
    let err = repo.delete_by_id(999).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_ids_are_never_reused_after_delete() {
    let repo = InMemoryQuoteRepository::new();
    repo.create(new_quote("Alice")).await.expect("create");
    let second = repo.create(new_quote("Bob")).await.expect("create");

    repo.delete_by_id(second.id.unwrap()).await.expect("delete");
    let third = repo.create(new_quote("Carla")).await.expect("create");
    assert_eq!(third.id, Some(3));
}

#[test]
fn test_repository_errors_map_to_service_errors() {
    let err = ServiceError::from(RepositoryError::not_found("missing"));
    assert!(matches!(err, ServiceError::NotFound(_)));

    // The storage failure message survives the mapping verbatim.
    let err = ServiceError::from(RepositoryError::storage("disk on fire"));
    match err {
        ServiceError::InternalError(msg) => assert_eq!(msg, "disk on fire"),
        other => panic!("unexpected mapping: {:?}", other),
    }
}
