use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::{NameCatalog, NameGenerationService, TranscriptionService};

pub struct AppState<L>
where
    L: LlmClient,
{
    pub name_generation_service: Arc<NameGenerationService<L>>,
    pub transcription_service: Arc<TranscriptionService>,
    pub name_catalog: NameCatalog,
    pub max_upload_bytes: usize,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            name_generation_service: Arc::clone(&self.name_generation_service),
            transcription_service: Arc::clone(&self.transcription_service),
            name_catalog: self.name_catalog,
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
