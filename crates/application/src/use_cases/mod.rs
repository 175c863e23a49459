pub mod cache;
pub mod extraction;
pub mod geocoding;

// Re-export use cases
pub use cache::SweepExpiredCacheUseCase;
pub use extraction::ExtractLocationUseCase;
pub use geocoding::{
    InvalidateLocationUseCase, LocateDescriptionUseCase, Located, Resolution,
    ResolveLocationUseCase,
};
