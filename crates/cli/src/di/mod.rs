pub mod store;
pub mod use_cases;

pub use store::build_store;
pub use use_cases::UseCases;
