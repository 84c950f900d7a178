use async_trait::async_trait;
use aws_sdk_translate::Client;

use super::{TranslationError, TranslationProvider};

#[derive(Clone)]
pub struct AwsTranslateProvider {
    client: Client,
}

impl AwsTranslateProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranslationProvider for AwsTranslateProvider {
    async fn translate_text(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let output = self
            .client
            .translate_text()
            .source_language_code(source_language)
            .target_language_code(target_language)
            .text(text)
            .send()
            .await
            .map_err(|e| TranslationError::Provider(e.to_string()))?;

        Ok(output.translated_text().to_string())
    }
}
