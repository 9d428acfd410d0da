//! # Key Resolver Contract
//!
//! A [`Resolver`] answers one question for the engine: "what does the source hold for
//! key K?". Headers, query strings and form bodies all hide behind it, so the engine
//! stays ignorant of where values come from.

/// Result of a key lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The source holds no usable value for the key.
    Missing,
    /// First value for the key (single-value request).
    Single(String),
    /// Every value for the key, in source order (array request).
    Multi(Vec<String>),
}

impl Lookup {
    /// Builds a single-value result; `None` and the empty string are both absence.
    pub fn single<S: Into<String>>(value: Option<S>) -> Self {
        match value.map(Into::into) {
            Some(value) if !value.is_empty() => Lookup::Single(value),
            _ => Lookup::Missing,
        }
    }

    /// Builds a multi-value result; `None` and an empty sequence are both absence.
    pub fn multi<I, S>(values: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values
            .map(|values| values.into_iter().map(Into::into).collect())
            .unwrap_or_default();
        if values.is_empty() {
            Lookup::Missing
        } else {
            Lookup::Multi(values)
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Lookup::Missing)
    }
}

/// Source of raw parameter values for one bind call.
///
/// `want_array` is true only for text-sequence fields. A resolver that cannot produce
/// sequences returns [`Lookup::Missing`] for array requests and reports
/// `supports_multi() == false`; it never wraps a single value in a sequence.
///
/// Any `Fn(&str, bool) -> Lookup` closure is a multi-capable resolver.
pub trait Resolver {
    fn lookup(&self, key: &str, want_array: bool) -> Lookup;

    fn supports_multi(&self) -> bool {
        true
    }

    /// Short source name ("headers", "query", "form", ...) used in diagnostics.
    fn source(&self) -> &'static str;
}

impl<F> Resolver for F
where
    F: Fn(&str, bool) -> Lookup,
{
    fn lookup(&self, key: &str, want_array: bool) -> Lookup {
        self(key, want_array)
    }

    fn source(&self) -> &'static str {
        "custom"
    }
}
