/*! Identification type

A language label along with the model's confidence.
!*/
use fasttext::Prediction;
use log::debug;
use oxilangtag::LanguageTag;
use serde::{Deserialize, Serialize};

/// fasttext labels are prefixed by this string.
const LABEL_PREFIX: &str = "__label__";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identification {
    label: String,
    prob: f32,
}

impl Identification {
    pub fn new(label: &str, prob: f32) -> Self {
        Self {
            label: label.to_string(),
            prob,
        }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }
}

/// Strip the `__label__` prefix and convert the label into BCP-47 when possible.
///
/// `zh_Hans` becomes `zh-Hans`. Labels that are not valid language tags are kept verbatim.
pub(crate) fn normalize_label(label: &str) -> String {
    let label = label.strip_prefix(LABEL_PREFIX).unwrap_or(label);
    match LanguageTag::parse_and_normalize(&label.replace('_', "-")) {
        Ok(tag) => tag.as_str().to_string(),
        Err(e) => {
            debug!("keeping non bcp47 label {label}: {e:?}");
            label.to_string()
        }
    }
}

impl From<Prediction> for Identification {
    fn from(prediction: Prediction) -> Self {
        Self {
            label: normalize_label(&prediction.label),
            prob: prediction.prob,
        }
    }
}

#[cfg(test)]
mod tests {
    use fasttext::Prediction;

    use super::{normalize_label, Identification};

    #[test]
    fn test_from_pred() {
        let prob = 0.93f32;
        let label = "__label__ca".to_string();
        let p = Prediction { prob, label };

        let id = Identification::from(p.clone());
        assert_eq!(id.label(), "ca");
        assert_eq!(id.prob(), &p.prob);
    }

    #[test]
    fn test_normalize_script() {
        assert_eq!(normalize_label("__label__zh_Hans"), "zh-Hans");
        assert_eq!(normalize_label("__label__EN"), "en");
    }

    #[test]
    fn test_normalize_not_a_tag() {
        assert_eq!(normalize_label("__label__not a tag"), "not a tag");
    }

    #[test]
    fn test_serialize() {
        let id = Identification::new("oc", 0.5);
        let s = serde_json::to_string(&id).unwrap();
        assert_eq!(s, r#"{"label":"oc","prob":0.5}"#);
    }
}
