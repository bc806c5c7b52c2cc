/*! Identifier trait

All identifiers should implement [Identifier] to be useable in the classification pipeline.

[LanguageGate] decides whether a sentence is in the target language with enough confidence.
!*/
use log::trace;

use crate::error::Error;

use super::Identification;

/// Default confidence threshold for the Catalan gate.
pub const DEFAULT_THRESHOLD: f32 = 0.7;

pub trait Identifier {
    /// returns the top language identification of `sentence`,
    /// or `None` if the underlying model did not give any.
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error>;
}

impl<I: Identifier + ?Sized> Identifier for &I {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        (**self).identify(sentence)
    }
}

/// Accepts sentences identified as [LanguageGate::language]
/// with a confidence strictly above [LanguageGate::threshold].
#[derive(Debug, Clone)]
pub struct LanguageGate {
    language: String,
    threshold: f32,
}

impl LanguageGate {
    pub fn new(language: &str, threshold: f32) -> Self {
        Self {
            language: language.to_string(),
            threshold,
        }
    }

    /// Catalan gate with the default threshold.
    pub fn catalan() -> Self {
        Self::new("ca", DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns `true` if `sentence` passes the gate.
    pub fn accepts<I: Identifier>(&self, identifier: &I, sentence: &str) -> Result<bool, Error> {
        let accepted = match identifier.identify(sentence)? {
            Some(id) => id.label() == self.language && *id.prob() > self.threshold,
            None => false,
        };

        if !accepted {
            trace!("rejected sentence: {sentence:?}");
        }
        Ok(accepted)
    }
}

impl Default for LanguageGate {
    fn default() -> Self {
        Self::catalan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always returns the same identification.
    struct Fixed(Option<Identification>);

    impl Identifier for Fixed {
        fn identify(&self, _: &str) -> Result<Option<Identification>, Error> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_accepts_catalan() {
        let gate = LanguageGate::catalan();
        let id = Fixed(Some(Identification::new("ca", 0.95)));
        assert!(gate.accepts(&id, "Bon dia.").unwrap());
    }

    #[test]
    fn test_threshold_is_strict() {
        let gate = LanguageGate::catalan();
        let id = Fixed(Some(Identification::new("ca", 0.7)));
        assert!(!gate.accepts(&id, "Bon dia.").unwrap());
    }

    #[test]
    fn test_rejects_other_language() {
        let gate = LanguageGate::catalan();
        let id = Fixed(Some(Identification::new("en", 0.99)));
        assert!(!gate.accepts(&id, "Hello, how are you?").unwrap());
    }

    #[test]
    fn test_rejects_no_prediction() {
        let gate = LanguageGate::catalan();
        assert!(!gate.accepts(&Fixed(None), "").unwrap());
    }

    #[test]
    fn test_custom_threshold() {
        let gate = LanguageGate::catalan().with_threshold(0.5);
        let id = Fixed(Some(Identification::new("ca", 0.6)));
        assert!(gate.accepts(&id, "Bon dia.").unwrap());
        assert_eq!(gate.threshold(), 0.5);
    }

    #[test]
    fn test_catalan_defaults() {
        let gate = LanguageGate::catalan();
        assert_eq!(gate.language(), "ca");
        assert_eq!(gate.threshold(), DEFAULT_THRESHOLD);
        assert_eq!(gate.threshold(), 0.7);
    }
}
