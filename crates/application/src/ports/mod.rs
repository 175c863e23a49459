mod cache_store;
mod clock;
mod geocoding_provider;
mod language_model;

pub use cache_store::CacheStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use geocoding_provider::GeocodingProvider;
pub use language_model::LanguageModel;
