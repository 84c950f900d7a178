use aws_config::SdkConfig;
use aws_sdk_rekognition::Client as RekognitionClient;
use aws_sdk_translate::Client as TranslateClient;
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;

use crate::analysis::handler::ImageAnalysisHandler;
use crate::config::AppConfig;
use crate::fetch::http_fetcher::HttpImageFetcher;
use crate::translation::translate_service::AwsTranslateProvider;
use crate::vision::rekognition_service::RekognitionDetector;

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Builds the long-lived clients once and wires them into the handler.
pub fn build_handler(
    config: &AppConfig,
    aws_config: &SdkConfig,
) -> Result<ImageAnalysisHandler, FactoryError> {
    let mut http_builder = HttpClient::builder();
    if let Some(timeout_secs) = config.fetch.timeout_secs {
        http_builder = http_builder.timeout(Duration::from_secs(timeout_secs));
    }
    let http_client = http_builder.build()?;

    let image_source = HttpImageFetcher::new(http_client, config.fetch.body_encoding);
    let detector = RekognitionDetector::new(RekognitionClient::new(aws_config));
    let translator = AwsTranslateProvider::new(TranslateClient::new(aws_config));

    log::info!(
        "Image analysis handler ready ({} -> {}, {:?} translation, threshold {}%)",
        config.analysis.source_language,
        config.analysis.target_language,
        config.analysis.translation_mode,
        config.analysis.confidence_threshold
    );

    Ok(ImageAnalysisHandler::new(
        Arc::new(image_source),
        Arc::new(detector),
        Arc::new(translator),
        &config.analysis,
    ))
}
