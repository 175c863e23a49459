use relief_geocoder_application::ports::{CacheStore, LanguageModel};
use relief_geocoder_application::services::{CacheAside, CachePolicy};
use relief_geocoder_application::use_cases::{
    ExtractLocationUseCase, InvalidateLocationUseCase, LocateDescriptionUseCase,
    ResolveLocationUseCase, SweepExpiredCacheUseCase,
};
use relief_geocoder_domain::Config;
use relief_geocoder_infrastructure::extraction::GeminiLanguageModel;
use relief_geocoder_infrastructure::geocoding::build_geocoders;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct UseCases {
    pub locate: Arc<LocateDescriptionUseCase>,
    pub resolve: Arc<ResolveLocationUseCase>,
    pub extract: Arc<ExtractLocationUseCase>,
    pub invalidate: Arc<InvalidateLocationUseCase>,
    pub sweep: Arc<SweepExpiredCacheUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, store: Arc<dyn CacheStore>) -> Self {
        let cache = Arc::new(CacheAside::new(
            store.clone(),
            CachePolicy::from(&config.cache),
        ));

        let geocoders = build_geocoders(&config.providers);

        let model: Arc<dyn LanguageModel> =
            Arc::new(GeminiLanguageModel::new(&config.providers.gemini));
        if model.is_enabled() {
            info!(model = %config.providers.gemini.model, "Location extraction enabled");
        } else {
            warn!("No language model configured; descriptions are geocoded verbatim");
        }

        let provider_timeout = Duration::from_millis(config.providers.timeout_ms);
        let resolve = Arc::new(ResolveLocationUseCase::new(
            cache.clone(),
            geocoders,
            provider_timeout,
        ));
        let extract = Arc::new(ExtractLocationUseCase::new(
            cache.clone(),
            model,
            provider_timeout,
        ));

        Self {
            locate: Arc::new(LocateDescriptionUseCase::new(extract.clone(), resolve.clone())),
            resolve,
            extract,
            invalidate: Arc::new(InvalidateLocationUseCase::new(cache)),
            sweep: Arc::new(SweepExpiredCacheUseCase::new(store)),
        }
    }
}
