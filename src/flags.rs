//! Splits raw command tokens into positionals and flags.
//!
//! A flag is any token that starts with `-` and is at least two characters
//! long. The dash is dropped and `-key=value` splits on the first `=`:
//!
//! ```text
//! fpair create widget -hpp      => positionals [create, widget], flags {hpp}
//! class dog -p=animals/animal   => positionals [dog], flags {p: animals/animal}
//! ```

use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub positionals: Vec<String>,
    flags: BTreeMap<String, Option<String>>,
}

impl ParsedArgs {
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = ParsedArgs::default();

        for token in tokens {
            let token = token.as_ref();
            match token.strip_prefix('-') {
                Some(flag) if !flag.is_empty() => {
                    let (name, value) = match flag.split_once('=') {
                        Some((name, value)) => (name, Some(value.to_string())),
                        None => (flag, None),
                    };
                    parsed.flags.insert(name.to_string(), value);
                }
                _ => parsed.positionals.push(token.to_string()),
            }
        }

        parsed
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Value of `-name=value`; `None` if the flag is absent or carries no value.
    pub fn flag_value(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(|v| v.as_deref())
    }

    /// First non-empty value among several spellings of the same flag.
    pub fn flag_value_any(&self, names: &[&str]) -> Option<&str> {
        names
            .iter()
            .find_map(|name| self.flag_value(name))
            .filter(|value| !value.is_empty())
    }

    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }
}
