use relief_geocoder_application::ports::{CacheStore, LanguageModel};
use relief_geocoder_application::services::{cache_key, CacheAside, CachePolicy};
use relief_geocoder_application::use_cases::ExtractLocationUseCase;
use relief_geocoder_domain::{DomainError, ExtractionResult};
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(2);

mod helpers;
use helpers::{MockCacheStore, MockLanguageModel};

fn build(store: Arc<MockCacheStore>, model: Arc<MockLanguageModel>) -> ExtractLocationUseCase {
    let cache = Arc::new(CacheAside::new(
        store as Arc<dyn CacheStore>,
        CachePolicy::default(),
    ));
    ExtractLocationUseCase::new(cache, model as Arc<dyn LanguageModel>, TIMEOUT)
}

#[tokio::test]
async fn test_extracts_and_trims_location() {
    let store = Arc::new(MockCacheStore::new());
    let model = Arc::new(MockLanguageModel::replying("  Lower East Side, Manhattan \n"));
    let extract = build(store, model.clone());

    let result = extract
        .execute("Flooding near Lower East Side, Manhattan")
        .await
        .unwrap();

    assert_eq!(
        result,
        ExtractionResult::Location("Lower East Side, Manhattan".to_string())
    );
    let prompt = model.last_prompt().await.unwrap();
    assert!(prompt.contains("Flooding near Lower East Side, Manhattan"));
    assert!(prompt.contains("UNKNOWN"));
}

#[tokio::test]
async fn test_result_is_cached_for_extraction_ttl() {
    let store = Arc::new(MockCacheStore::new());
    let model = Arc::new(MockLanguageModel::replying("Dhaka, Bangladesh"));
    let extract = build(store.clone(), model.clone());

    extract.execute("Cyclone hitting Dhaka").await.unwrap();
    let second = extract.execute("Cyclone hitting Dhaka").await.unwrap();

    assert_eq!(second.location(), Some("Dhaka, Bangladesh"));
    assert_eq!(model.call_count(), 1);
    assert_eq!(
        store
            .ttl_for(&cache_key::extraction_key("Cyclone hitting Dhaka"))
            .await,
        Some(Duration::from_secs(3_600))
    );
}

#[tokio::test]
async fn test_sentinel_reply_means_no_location() {
    let store = Arc::new(MockCacheStore::new());
    let model = Arc::new(MockLanguageModel::replying("UNKNOWN"));
    let extract = build(store, model);

    let result = extract.execute("send help now").await.unwrap();

    assert_eq!(result, ExtractionResult::NoLocation);
}

#[tokio::test]
async fn test_model_failure_returns_and_caches_sentinel() {
    // Arrange - model errors
    let store = Arc::new(MockCacheStore::new());
    let model = Arc::new(MockLanguageModel::failing());
    let extract = build(store.clone(), model.clone());

    // Act
    let first = extract.execute("Earthquake downtown").await;

    // Assert - no error surfaced, sentinel cached
    assert_eq!(first.unwrap(), ExtractionResult::NoLocation);
    let cached = store
        .raw(&cache_key::extraction_key("Earthquake downtown"))
        .await
        .unwrap();
    assert_eq!(cached, serde_json::json!("UNKNOWN"));

    // Recovery inside the TTL does not trigger a new call
    model.set_should_fail(false);
    model.set_reply("Downtown").await;
    let second = extract.execute("Earthquake downtown").await.unwrap();
    assert_eq!(second, ExtractionResult::NoLocation);
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_slow_model_is_treated_as_no_location() {
    tokio::time::pause();

    // Arrange - model would answer, but only after an hour
    let store = Arc::new(MockCacheStore::new());
    let model = Arc::new(
        MockLanguageModel::replying("Paris").with_delay(Duration::from_secs(3_600)),
    );
    let extract = build(store.clone(), model.clone());

    // Act
    let started = tokio::time::Instant::now();
    let result = extract.execute("Flooding in Paris").await.unwrap();

    // Assert - bounded by the provider timeout, sentinel cached at extraction TTL
    assert!(started.elapsed() <= TIMEOUT + Duration::from_millis(100));
    assert_eq!(result, ExtractionResult::NoLocation);
    assert_eq!(model.call_count(), 1);
    let key = cache_key::extraction_key("Flooding in Paris");
    assert_eq!(store.raw(&key).await, Some(serde_json::json!("UNKNOWN")));
    assert_eq!(store.ttl_for(&key).await, Some(Duration::from_secs(3_600)));
}

#[tokio::test]
async fn test_disabled_model_skips_cache_and_call() {
    let store = Arc::new(MockCacheStore::new());
    let model = Arc::new(MockLanguageModel::disabled());
    let extract = build(store.clone(), model.clone());

    let result = extract.execute("Wildfire near Paradise").await.unwrap();

    assert_eq!(result, ExtractionResult::NoLocation);
    assert_eq!(model.call_count(), 0);
    assert_eq!(store.set_count(), 0);
}

#[tokio::test]
async fn test_empty_description_is_rejected() {
    let store = Arc::new(MockCacheStore::new());
    let model = Arc::new(MockLanguageModel::replying("x"));
    let extract = build(store.clone(), model.clone());

    let result = extract.execute("").await;

    assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    assert_eq!(store.get_count(), 0);
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_oversized_description_is_rejected() {
    let store = Arc::new(MockCacheStore::new());
    let model = Arc::new(MockLanguageModel::replying("x"));
    let extract = build(store, model.clone());

    let result = extract.execute(&"flood ".repeat(2_000)).await;

    assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    assert_eq!(model.call_count(), 0);
}
