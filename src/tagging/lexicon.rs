/*! Lexicon-based tagger.

Words are split on Unicode word boundaries, then looked up (lowercased) in a form → tag lexicon.

The lexicon is a tab-separated file with a `form` and a `pos` column:

```text
form	pos
llibre	NOUN
preferisc	VERB
```

Lines starting with `#` are ignored.
!*/
use std::{collections::HashMap, path::Path, str::FromStr};

use log::{debug, info, warn};
use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

use super::{Pos, Tagger, Token};

/// Elided clitics that stay glued to the next word with Unicode word boundaries (`l'home`).
const ELIDED: [&str; 6] = ["l", "d", "m", "t", "s", "n"];

#[derive(Debug, Deserialize)]
struct Entry {
    form: String,
    pos: String,
}

#[derive(Debug, Default, Clone)]
pub struct LexiconTagger {
    lexicon: HashMap<String, Pos>,
}

impl LexiconTagger {
    /// Build a tagger from `(form, tag)` pairs.
    /// When a form appears more than once, the first tag is kept.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, Pos)>) -> Self {
        let mut lexicon = HashMap::new();
        for (form, pos) in entries {
            lexicon.entry(form.to_lowercase()).or_insert(pos);
        }
        Self { lexicon }
    }

    /// Load a lexicon from a tab-separated file.
    ///
    /// Entries with an unknown tag are skipped with a warning.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .comment(Some(b'#'))
            .flexible(true)
            .from_path(path)?;

        let mut lexicon = HashMap::new();
        for (idx, entry) in reader.deserialize::<Entry>().enumerate() {
            let entry = entry?;
            match Pos::from_str(&entry.pos) {
                Ok(pos) => {
                    lexicon.entry(entry.form.to_lowercase()).or_insert(pos);
                }
                Err(e) => warn!("{:?} entry {}: {}", path, idx, e),
            }
        }

        info!("loaded {} lexicon entries from {:?}", lexicon.len(), path);
        Ok(Self { lexicon })
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Split a sentence into words and punctuation, dropping whitespace.
    pub fn tokenize(sentence: &str) -> Vec<&str> {
        sentence
            .split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .flat_map(Self::split_elision)
            .collect()
    }

    /// `l'home` -> `l'`, `home`
    fn split_elision(word: &str) -> Vec<&str> {
        if let Some(pos) = word.find(|c: char| c == '\'' || c == '’') {
            let apostrophe_len = word[pos..].chars().next().map_or(1, char::len_utf8);
            let (clitic, rest) = word.split_at(pos + apostrophe_len);
            let stem = &clitic[..pos];
            if !rest.is_empty() && ELIDED.contains(&stem.to_lowercase().as_str()) {
                return vec![clitic, rest];
            }
        }
        vec![word]
    }

    /// Tag for words missing from the lexicon, guessed from their shape.
    fn guess(word: &str) -> Pos {
        if !word.chars().any(char::is_alphanumeric) {
            Pos::Punct
        } else if word.chars().any(|c| c.is_ascii_digit())
            && word
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            Pos::Num
        } else {
            Pos::X
        }
    }

    fn lookup(&self, word: &str) -> Pos {
        match self.lexicon.get(&word.to_lowercase()) {
            Some(pos) => *pos,
            None => Self::guess(word),
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        let tokens: Vec<Token> = Self::tokenize(sentence)
            .into_iter()
            .map(|word| Token::new(word, self.lookup(word)))
            .collect();
        debug!("tagged {} tokens", tokens.len());
        Ok(tokens)
    }
}
