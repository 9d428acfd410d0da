//! # Parameter Values
//!
//! [`ParamValues`] is the key → values multimap behind query and form lookups. Keys
//! keep first-seen order and values keep source order.

use crate::error::FormError;

/// An ordered multimap of decoded `application/x-www-form-urlencoded` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamValues {
    entries: Vec<(String, Vec<String>)>,
}

impl ParamValues {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Decodes `input` leniently: a pair holding a `;` or a malformed escape is
    /// dropped, the rest are kept.
    pub fn parse(input: impl AsRef<[u8]>) -> Self {
        input
            .as_ref()
            .split(|&byte| byte == b'&')
            .filter(|pair| validate_encoded(pair).is_ok())
            .flat_map(url::form_urlencoded::parse)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Decodes `input`, rejecting semicolon separators and malformed percent escapes.
    pub fn parse_strict(input: impl AsRef<[u8]>) -> Result<Self, FormError> {
        let input = input.as_ref();
        validate_encoded(input)?;
        Ok(Self::parse(input))
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Appends every value of `other` after the values already held.
    pub fn extend(&mut self, other: ParamValues) {
        for (key, values) in other.entries {
            for value in values {
                self.append(key.clone(), value);
            }
        }
    }

    /// First value stored under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.all(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value stored under `key`, in order.
    pub fn all(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = ParamValues::new();
        for (key, value) in iter {
            values.append(key, value);
        }
        values
    }
}

fn validate_encoded(input: &[u8]) -> Result<(), FormError> {
    for (i, byte) in input.iter().enumerate() {
        match byte {
            b';' => return Err(FormError::Semicolon),
            b'%' => {
                let escape = input.get(i + 1..i + 3);
                if !matches!(escape, Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
                {
                    let end = (i + 3).min(input.len());
                    return Err(FormError::InvalidEscape(
                        String::from_utf8_lossy(&input[i..end]).into_owned(),
                    ));
                }
            }
            _ => {}
        }
    }
    Ok(())
}
