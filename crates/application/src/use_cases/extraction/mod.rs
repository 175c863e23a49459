mod extract_location;

pub use extract_location::{ExtractLocationUseCase, EXTRACTION_INSTRUCTION};
