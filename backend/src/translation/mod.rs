pub mod translate_service;

use async_trait::async_trait;
use futures::future::try_join_all;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;

use crate::config::{AnalysisConfig, TranslationMode};

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Translation provider error: {0}")]
    Provider(String),
}

/// External text translation capability.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate_text(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError>;
}

/// Translates label names so that the Nth output name belongs to the Nth input name.
#[derive(Clone)]
pub struct LabelTranslator {
    provider: Arc<dyn TranslationProvider>,
    source_language: String,
    target_language: String,
    mode: TranslationMode,
    join_separator: String,
    split_separator: String,
}

impl LabelTranslator {
    pub fn new(provider: Arc<dyn TranslationProvider>, config: &AnalysisConfig) -> Self {
        Self {
            provider,
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
            mode: config.translation_mode,
            join_separator: config.join_separator.clone(),
            split_separator: config.split_separator.clone(),
        }
    }

    pub async fn translate(&self, names: &[String]) -> Result<Vec<String>, TranslationError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        match self.mode {
            TranslationMode::PerLabel => self.translate_each(names).await,
            TranslationMode::Joined => self.translate_joined(names).await,
        }
    }

    async fn translate_each(&self, names: &[String]) -> Result<Vec<String>, TranslationError> {
        let requests = names.iter().map(|name| {
            self.provider
                .translate_text(name, &self.source_language, &self.target_language)
        });
        try_join_all(requests).await
    }

    async fn translate_joined(&self, names: &[String]) -> Result<Vec<String>, TranslationError> {
        let joined = names.join(self.join_separator.as_str());
        let translated = self
            .provider
            .translate_text(&joined, &self.source_language, &self.target_language)
            .await?;

        let translated_names: Vec<String> = translated
            .split(self.split_separator.as_str())
            .map(str::to_string)
            .collect();

        if translated_names.len() != names.len() {
            log::warn!(
                "Joined translation returned {} names for {} labels: {:?}",
                translated_names.len(),
                names.len(),
                translated
            );
        }
        Ok(translated_names)
    }
}
