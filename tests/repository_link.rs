mod common;

use std::sync::Arc;
use tinyurl::domain::entities::NewLink;
use tinyurl::domain::repositories::LinkRepository;
use tinyurl::error::StoreError;
use tinyurl::infrastructure::persistence::SqliteLinkRepository;

fn new_link(slug: &str, url: &str) -> NewLink {
    NewLink {
        slug: slug.to_string(),
        url: url.to_string(),
    }
}

async fn create_repo() -> SqliteLinkRepository {
    SqliteLinkRepository::new(Arc::new(common::create_test_pool().await))
}

#[tokio::test]
async fn test_create_link() {
    let repo = create_repo().await;

    let result = repo.create(new_link("test1", "https://example.com")).await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert_eq!(link.id, 1);
    assert_eq!(link.slug, "test1");
    assert_eq!(link.url, "https://example.com");
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let repo = create_repo().await;

    let first = repo.create(new_link("aaaaa", "https://one.example")).await.unwrap();
    let second = repo.create(new_link("bbbbb", "https://two.example")).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_create_duplicate_slug() {
    let repo = create_repo().await;
    repo.create(new_link("dupli", "https://one.example")).await.unwrap();

    let result = repo.create(new_link("dupli", "https://two.example")).await;

    match result {
        Err(StoreError::DuplicateSlug(slug)) => assert_eq!(slug, "dupli"),
        other => panic!("expected DuplicateSlug, got {:?}", other),
    }

    let links = repo.list_all().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, "https://one.example");
}

#[tokio::test]
async fn test_failed_insert_does_not_reuse_id() {
    let repo = create_repo().await;

    let first = repo.create(new_link("aaaaa", "https://one.example")).await.unwrap();
    let _ = repo.create(new_link("aaaaa", "https://dup.example")).await;
    let second = repo.create(new_link("bbbbb", "https://two.example")).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_find_by_slug() {
    let repo = create_repo().await;
    repo.create(new_link("abc12", "https://example.com")).await.unwrap();

    let result = repo.find_by_slug("abc12").await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert!(link.is_some());
    assert_eq!(link.unwrap().url, "https://example.com");
}

#[tokio::test]
async fn test_find_by_slug_is_case_sensitive() {
    let repo = create_repo().await;
    repo.create(new_link("AbCdE", "https://example.com")).await.unwrap();

    assert!(repo.find_by_slug("abcde").await.unwrap().is_none());
    assert!(repo.find_by_slug("AbCdE").await.unwrap().is_some());
}

#[tokio::test]
async fn test_find_by_slug_not_found() {
    let repo = create_repo().await;

    let result = repo.find_by_slug("nope0").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = create_repo().await;
    let created = repo.create(new_link("byid1", "https://example.com")).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_all_in_insertion_order() {
    let repo = create_repo().await;
    for slug in ["zzzzz", "aaaaa", "mmmmm"] {
        repo.create(new_link(slug, &format!("https://{}.example", slug)))
            .await
            .unwrap();
    }

    let links = repo.list_all().await.unwrap();

    let slugs: Vec<&str> = links.iter().map(|link| link.slug.as_str()).collect();
    assert_eq!(slugs, vec!["zzzzz", "aaaaa", "mmmmm"]);
}

#[tokio::test]
async fn test_list_all_empty() {
    let repo = create_repo().await;

    assert!(repo.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let repo = create_repo().await;

    assert!(repo.health_check().await.is_ok());
}
