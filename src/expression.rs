// Expression normalization for raw classification results

use crate::models::{Expression, RawInferenceResult};

/// Normalizes a raw inference result to a canonical expression.
///
/// Total over all accepted and malformed inputs: the upstream response
/// shape and vocabulary are not contractually guaranteed, so any shape
/// deviation degrades to `Neutral` instead of propagating an error.
pub fn normalize(result: &RawInferenceResult) -> Expression {
    match result {
        RawInferenceResult::Ranked(entries) => {
            // Select the entry with the highest confidence; entries
            // without a score never beat entries that have one.
            let best = entries.iter().max_by(|a, b| {
                let a = a.score.unwrap_or(f64::NEG_INFINITY);
                let b = b.score.unwrap_or(f64::NEG_INFINITY);
                a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
            });

            match best.and_then(|entry| entry.label.as_deref()) {
                Some(label) => map_label(label),
                None => Expression::Neutral,
            }
        }
        RawInferenceResult::Scores(entries) => {
            // An entry must strictly exceed the running maximum, so
            // scores at or below zero are never selected.
            let mut highest = 0.0f64;
            let mut expression = Expression::Neutral;
            for (name, score) in entries {
                if *score > highest {
                    highest = *score;
                    expression = map_label(name);
                }
            }
            expression
        }
        RawInferenceResult::Unrecognized => Expression::Neutral,
    }
}

/// Maps a model-specific emotion label to the canonical expression set.
///
/// Case-insensitive substring matching against a fixed rule table;
/// first matching rule wins, `Neutral` is the exhaustive fallback.
pub fn map_label(raw: &str) -> Expression {
    let label = raw.to_lowercase();

    if label.contains("happy") || label.contains("joy") {
        Expression::Happy
    } else if label.contains("sad") || label.contains("unhappy") {
        Expression::Sad
    } else if label.contains("angry") || label.contains("anger") {
        Expression::Angry
    } else if label.contains("surprise") || label.contains("surprised") {
        Expression::Surprised
    } else if label.contains("fear") || label.contains("fearful") {
        Expression::Fearful
    } else if label.contains("disgust") || label.contains("disgusted") {
        Expression::Disgusted
    } else {
        Expression::Neutral
    }
}
