use shared::{AnalysisResponse, InvocationEvent};
use std::sync::Arc;
use uuid::Uuid;

use super::AnalysisError;
use super::formatter::{format_results, response_body};
use crate::config::AnalysisConfig;
use crate::fetch::ImageSource;
use crate::translation::{LabelTranslator, TranslationProvider};
use crate::vision::{LabelDetector, filter_labels};

/// Runs fetch, detect, filter, translate and format for one invocation.
#[derive(Clone)]
pub struct ImageAnalysisHandler {
    image_source: Arc<dyn ImageSource>,
    detector: Arc<dyn LabelDetector>,
    translator: LabelTranslator,
    confidence_threshold: f64,
}

impl ImageAnalysisHandler {
    pub fn new(
        image_source: Arc<dyn ImageSource>,
        detector: Arc<dyn LabelDetector>,
        translation_provider: Arc<dyn TranslationProvider>,
        config: &AnalysisConfig,
    ) -> Self {
        Self {
            image_source,
            detector,
            translator: LabelTranslator::new(translation_provider, config),
            confidence_threshold: config.confidence_threshold,
        }
    }

    /// Never fails: any stage error is logged and answered with a generic 500.
    pub async fn handle(&self, event: &InvocationEvent) -> AnalysisResponse {
        let request_id = Uuid::new_v4();

        match self.run(request_id, event).await {
            Ok(body) => {
                log::info!("[{}] Analysis finished", request_id);
                AnalysisResponse::ok(body)
            }
            Err(e) => {
                log::error!("[{}] Image analysis failed: {:?}", request_id, e);
                AnalysisResponse::internal_error()
            }
        }
    }

    async fn run(&self, request_id: Uuid, event: &InvocationEvent) -> Result<String, AnalysisError> {
        let image_url = event
            .image_url()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(AnalysisError::MissingInput)?;

        log::info!("[{}] Downloading image from {}", request_id, image_url);
        let image = self.image_source.fetch(image_url).await?;

        log::info!("[{}] Detecting labels in {} bytes", request_id, image.len());
        let labels = self.detector.detect(&image).await?;

        let filtered = filter_labels(&labels, self.confidence_threshold);
        log::info!(
            "[{}] {} of {} labels above {}%",
            request_id,
            filtered.len(),
            labels.len(),
            self.confidence_threshold
        );

        if filtered.is_empty() {
            return Ok(response_body(""));
        }

        log::info!("[{}] Translating label names", request_id);
        let names: Vec<String> = filtered.iter().map(|label| label.name.clone()).collect();
        let translated = self.translator.translate(&names).await?;

        let formatted = format_results(&translated, &filtered)?;
        Ok(response_body(&formatted))
    }
}
