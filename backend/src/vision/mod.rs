pub mod rekognition_service;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use shared::Label;

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Label detection provider error: {0}")]
    Provider(String),
}

/// Detects labels in an image, returned in provider order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LabelDetector: Send + Sync {
    async fn detect(&self, image: &[u8]) -> Result<Vec<Label>, DetectionError>;
}

/// Keeps the labels whose confidence is strictly above `threshold`, in their original order.
pub fn filter_labels(labels: &[Label], threshold: f64) -> Vec<Label> {
    labels
        .iter()
        .filter(|label| label.confidence > threshold)
        .cloned()
        .collect()
}
