pub mod gemini;

pub use gemini::GeminiLanguageModel;
