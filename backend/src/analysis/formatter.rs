use shared::Label;

pub const RESPONSE_PREFIX: &str = "A imagem tem\n";

#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    #[error("Label {name:?} has a non-finite confidence: {confidence}")]
    InvalidConfidence { name: String, confidence: f64 },
}

/// Pairs translated names with label confidences by position, one line per pair.
/// Only the overlapping prefix is formatted when the lengths differ.
pub fn format_results(translated_names: &[String], labels: &[Label]) -> Result<String, FormattingError> {
    if translated_names.len() != labels.len() {
        log::warn!(
            "Formatting {} translated names against {} labels, extra entries are dropped",
            translated_names.len(),
            labels.len()
        );
    }

    let lines = translated_names
        .iter()
        .zip(labels)
        .map(|(name, label)| format_line(name, label))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join("\n"))
}

fn format_line(translated_name: &str, label: &Label) -> Result<String, FormattingError> {
    if !label.confidence.is_finite() {
        return Err(FormattingError::InvalidConfidence {
            name: label.name.clone(),
            confidence: label.confidence,
        });
    }
    Ok(format!(
        "{}% de ser do tipo {}",
        format_confidence(label.confidence),
        translated_name
    ))
}

/// Two decimals, with exact halfway values rounded up instead of to even.
fn format_confidence(confidence: f64) -> String {
    // A binary float sits exactly halfway between two cents only when it is an
    // odd multiple of 1/8, and multiplying by 8 is exact.
    let eighths = confidence * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        return format!("{:.2}", (confidence * 100.0).ceil() / 100.0);
    }
    format!("{:.2}", confidence)
}

pub fn response_body(formatted: &str) -> String {
    format!("{}{}", RESPONSE_PREFIX, formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn pairs_names_and_confidences_by_position() {
        let labels = vec![Label::new("Cat", 95.2), Label::new("Animal", 88.0)];
        let formatted = format_results(&names(&["Gato", "Animal"]), &labels).unwrap();

        assert_eq!(
            formatted,
            "95.20% de ser do tipo Gato\n88.00% de ser do tipo Animal"
        );
    }

    #[test]
    fn confidence_always_has_two_decimals() {
        let cases = [
            (83.0, "83.00"),
            (91.5, "91.50"),
            (99.98765, "99.99"),
            (80.004, "80.00"),
            (100.0, "100.00"),
        ];
        for (confidence, expected) in cases {
            let formatted =
                format_results(&names(&["X"]), &[Label::new("X", confidence)]).unwrap();
            assert_eq!(formatted, format!("{}% de ser do tipo X", expected));
        }
    }

    #[test]
    fn halfway_confidences_round_up() {
        let cases = [
            (80.125, "80.13"),
            (81.625, "81.63"),
            (90.375, "90.38"),
            (99.875, "99.88"),
            (0.125, "0.13"),
        ];
        for (confidence, expected) in cases {
            assert_eq!(format_confidence(confidence), expected);
        }
    }

    #[test]
    fn widened_provider_confidences_round_like_the_provider_value() {
        let cases = [
            (80.125f32, "80.13"),
            (81.625f32, "81.63"),
            (95.2f32, "95.20"),
            (88.0f32, "88.00"),
            (80.12f32, "80.12"),
        ];
        for (confidence, expected) in cases {
            let label = Label::new("Cat", f64::from(confidence));
            let formatted = format_results(&names(&["Gato"]), &[label]).unwrap();
            assert_eq!(formatted, format!("{}% de ser do tipo Gato", expected));
        }
    }

    #[test]
    fn n_pairs_produce_n_lines() {
        let labels: Vec<Label> = (0..7).map(|i| Label::new(format!("l{}", i), 81.0 + i as f64)).collect();
        let translated: Vec<String> = (0..7).map(|i| format!("t{}", i)).collect();

        let formatted = format_results(&translated, &labels).unwrap();

        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 7);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(*line, format!("{:.2}% de ser do tipo t{}", 81.0 + i as f64, i));
        }
    }

    #[test]
    fn length_mismatch_formats_overlapping_prefix() {
        let labels = vec![Label::new("Cat", 95.2), Label::new("Animal", 88.0)];

        let more_names = format_results(&names(&["Gato", "Animal", "Bicho"]), &labels).unwrap();
        assert_eq!(more_names.lines().count(), 2);

        let fewer_names = format_results(&names(&["Gato"]), &labels).unwrap();
        assert_eq!(fewer_names, "95.20% de ser do tipo Gato");
    }

    #[test]
    fn empty_inputs_format_to_empty_text() {
        assert_eq!(format_results(&[], &[]).unwrap(), "");
    }

    #[test]
    fn non_finite_confidence_is_rejected() {
        let result = format_results(&names(&["Gato"]), &[Label::new("Cat", f64::NAN)]);
        assert!(matches!(result, Err(FormattingError::InvalidConfidence { .. })));
    }

    #[test]
    fn body_starts_with_prefix() {
        assert_eq!(response_body("x"), "A imagem tem\nx");
    }
}
