mod name_catalog;
mod name_generation_service;
mod transcription_service;

pub use name_catalog::{CatalogError, NameCatalog};
pub use name_generation_service::{
    NameGenerationError, NameGenerationService, SYSTEM_PROMPT, build_name_prompt,
};
pub use transcription_service::TranscriptionService;
