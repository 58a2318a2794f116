// Core data models for the Expression Mapper service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a canonical facial expression reported by the service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Happy,
    Sad,
    Angry,
    Surprised,
    Fearful,
    Disgusted,
    Neutral,
}

impl Expression {
    /// Returns the lowercase wire label for this expression
    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Happy => "happy",
            Expression::Sad => "sad",
            Expression::Angry => "angry",
            Expression::Surprised => "surprised",
            Expression::Fearful => "fearful",
            Expression::Disgusted => "disgusted",
            Expression::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single `{label, score}` record from a ranked-list response.
///
/// Both fields are optional on the wire: the upstream vocabulary is not
/// contractually guaranteed, so absence must not abort decoding.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub label: Option<String>,
    pub score: Option<f64>,
}

/// Decoded response from the external classification service.
///
/// The upstream model returns one of two shapes: a ranked list of
/// `{label, score}` records, or a map from emotion name to confidence.
/// Anything else (including a non-JSON body) is `Unrecognized` and
/// degrades to a neutral classification downstream.
#[derive(Clone, Debug, PartialEq)]
pub enum RawInferenceResult {
    /// Ordered sequence of labeled scores, unsorted by confidence
    Ranked(Vec<RankedEntry>),
    /// Emotion name to confidence score, non-numeric values dropped
    Scores(Vec<(String, f64)>),
    /// Any shape this service does not understand
    Unrecognized,
}

impl RawInferenceResult {
    /// Decodes a raw upstream response body.
    ///
    /// Never fails: a body that is not JSON decodes to `Unrecognized`.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => RawInferenceResult::Unrecognized,
        }
    }

    /// Classifies a decoded JSON value into one of the accepted shapes
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => {
                let entries = items
                    .iter()
                    .map(|item| RankedEntry {
                        label: item
                            .get("label")
                            .and_then(Value::as_str)
                            .map(str::to_owned),
                        score: item.get("score").and_then(Value::as_f64),
                    })
                    .collect();
                RawInferenceResult::Ranked(entries)
            }
            Value::Object(map) => {
                let entries = map
                    .iter()
                    .filter_map(|(name, score)| {
                        score.as_f64().map(|score| (name.clone(), score))
                    })
                    .collect();
                RawInferenceResult::Scores(entries)
            }
            _ => RawInferenceResult::Unrecognized,
        }
    }
}

/// Success body returned by the detection endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExpressionResponse {
    pub expression: Expression,
}

/// Failure body returned by the detection endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expression_serializes_lowercase() {
        let body = serde_json::to_string(&ExpressionResponse {
            expression: Expression::Surprised,
        })
        .unwrap();
        assert_eq!(body, r#"{"expression":"surprised"}"#);
    }

    #[test]
    fn test_ranked_list_decodes() {
        let value = json!([
            {"label": "happy", "score": 0.2},
            {"label": "sad", "score": 0.8}
        ]);
        let result = RawInferenceResult::from_value(&value);
        assert_eq!(
            result,
            RawInferenceResult::Ranked(vec![
                RankedEntry {
                    label: Some("happy".to_string()),
                    score: Some(0.2),
                },
                RankedEntry {
                    label: Some("sad".to_string()),
                    score: Some(0.8),
                },
            ])
        );
    }

    #[test]
    fn test_ranked_entries_tolerate_missing_fields() {
        let value = json!([{"score": 0.5}, {"label": "happy"}, "noise"]);
        let result = RawInferenceResult::from_value(&value);
        assert_eq!(
            result,
            RawInferenceResult::Ranked(vec![
                RankedEntry {
                    label: None,
                    score: Some(0.5),
                },
                RankedEntry {
                    label: Some("happy".to_string()),
                    score: None,
                },
                RankedEntry {
                    label: None,
                    score: None,
                },
            ])
        );
    }

    #[test]
    fn test_score_map_drops_non_numeric_values() {
        let value = json!({"happy": 0.9, "sad": "high", "angry": null});
        let result = RawInferenceResult::from_value(&value);
        assert_eq!(
            result,
            RawInferenceResult::Scores(vec![("happy".to_string(), 0.9)])
        );
    }

    #[test]
    fn test_other_shapes_are_unrecognized() {
        for value in [json!("angry"), json!(42), json!(null), json!(true)] {
            assert_eq!(
                RawInferenceResult::from_value(&value),
                RawInferenceResult::Unrecognized
            );
        }
    }

    #[test]
    fn test_non_json_body_is_unrecognized() {
        assert_eq!(
            RawInferenceResult::from_body("<html>rate limited</html>"),
            RawInferenceResult::Unrecognized
        );
    }
}
