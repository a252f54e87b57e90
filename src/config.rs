use std::collections::BTreeMap;

use crate::{
    candidates::DEFAULT_MAX_NGRAM_LENGTH,
    confidence::ConfidenceProfile,
    error::{Error, Result},
};

/// Per-score weights of the confidence calculation. Absent scores have weight 1.
pub type Weights = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub max_ngram_length: isize,
    pub max_suggestions: usize,
    pub weights: Weights,
    pub confidence_profile: ConfidenceProfile,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ngram_length: DEFAULT_MAX_NGRAM_LENGTH,
            max_suggestions: 1,
            weights: Default::default(),
            confidence_profile: Default::default(),
        }
    }
}

/// Parses a weight override of the form `name=value`.
pub fn parse_weight(weight: &str) -> Result<(String, f64)> {
    let (name, value) = weight
        .split_once('=')
        .ok_or_else(|| Error::InvalidWeight(weight.to_string()))?;
    let name = name.trim();
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidWeight(weight.to_string()))?;

    if name.is_empty() || !value.is_finite() {
        return Err(Error::InvalidWeight(weight.to_string()));
    }

    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::{parse_weight, EngineConfig};

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_ngram_length, 3);
        assert_eq!(config.max_suggestions, 1);
        assert!(config.weights.is_empty());
    }

    #[test]
    fn weights() {
        assert_eq!(
            parse_weight("alignmentPosition=0.5").unwrap(),
            ("alignmentPosition".to_string(), 0.5)
        );
        assert_eq!(parse_weight(" a = 2 ").unwrap(), ("a".to_string(), 2.0));

        for invalid in ["alignmentPosition", "=1", "a=b", "a=NaN"] {
            assert!(matches!(parse_weight(invalid), Err(Error::InvalidWeight(_))));
        }
    }
}
