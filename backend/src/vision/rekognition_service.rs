use async_trait::async_trait;
use aws_sdk_rekognition::Client;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{Image, Label as RekognitionLabel};
use shared::Label;

use super::{DetectionError, LabelDetector};

#[derive(Clone)]
pub struct RekognitionDetector {
    client: Client,
}

impl RekognitionDetector {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Provider entries without a name or a confidence are dropped.
    pub fn to_labels(provider_labels: &[RekognitionLabel]) -> Vec<Label> {
        provider_labels
            .iter()
            .filter_map(|label| match (label.name(), label.confidence()) {
                (Some(name), Some(confidence)) => Some(Label::new(name, f64::from(confidence))),
                _ => {
                    log::debug!("Skipping incomplete Rekognition label: {:?}", label);
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl LabelDetector for RekognitionDetector {
    async fn detect(&self, image: &[u8]) -> Result<Vec<Label>, DetectionError> {
        let output = self
            .client
            .detect_labels()
            .image(Image::builder().bytes(Blob::new(image.to_vec())).build())
            .send()
            .await
            .map_err(|e| DetectionError::Provider(e.to_string()))?;

        Ok(Self::to_labels(output.labels()))
    }
}
