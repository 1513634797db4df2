pub mod client;
pub mod interface;
pub mod mock;
pub mod orchestrator;
pub mod prompt;
pub mod sections;

pub use client::{GenerationBackend, GraniteClient};
pub use interface::{TranslationRequest, TranslationResult};
pub use orchestrator::TranslationOrchestrator;
