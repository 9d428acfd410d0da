//! # Mock Resolver & Testing Guide
//!
//! [`MockResolver`] implements [`Resolver`] from a queue of expectations. It answers
//! lookups in the order they were declared and panics on anything unexpected, which
//! makes it the right tool for asserting *which* keys the engine asks for, and in
//! which order.
//!
//! ## When to use the mock vs a real source
//!
//! | Feature | MockResolver | Header/query/form resolver |
//! |---------|--------------|----------------------------|
//! | **Call order** | Asserted | Not observable |
//! | **Skipped fields** | Provable (no call recorded) | Only via unchanged values |
//! | **Misbehaving sources** | Easy (`return_single` for an array request) | Impossible |
//! | **Use case** | Engine semantics | End-to-end extraction |
//!
//! ## Example
//!
//! ```rust
//! use paramex_core::mock::MockResolver;
//! use paramex_core::{bind, param_record};
//!
//! param_record! {
//!     #[derive(Debug, Default)]
//!     struct Person {
//!         name: String => "name",
//!         nick: String => "-",
//!         age: i64 => "age",
//!     }
//! }
//!
//! let mut mock = MockResolver::new();
//! mock.expect_lookup("name", false).return_single("Alice");
//! mock.expect_lookup("age", false).return_missing();
//!
//! let mut person = Person::default();
//! bind(&mut person, &mock).unwrap();
//!
//! assert_eq!(person.name, "Alice");
//! assert_eq!(mock.calls(), vec![("name".to_string(), false), ("age".to_string(), false)]);
//! mock.verify();
//! ```

use crate::resolver::{Lookup, Resolver};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One expected lookup and the answer to give.
#[derive(Debug, Clone)]
struct Expectation {
    key: String,
    want_array: bool,
    response: Lookup,
}

/// A resolver driven by expectations.
#[derive(Debug)]
pub struct MockResolver {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Mutex<Vec<(String, bool)>>,
    supports_multi: bool,
    source: &'static str,
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResolver {
    /// Creates a multi-capable mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Mutex::new(Vec::new()),
            supports_multi: true,
            source: "mock",
        }
    }

    /// Creates a mock that, like a header source, cannot supply sequences.
    pub fn single_valued() -> Self {
        Self {
            supports_multi: false,
            ..Self::new()
        }
    }

    /// Expects a lookup of `key` with the given array flag.
    pub fn expect_lookup(&mut self, key: &str, want_array: bool) -> LookupExpectationBuilder {
        LookupExpectationBuilder {
            key: key.to_string(),
            want_array,
            expectations: self.expectations.clone(),
        }
    }

    /// Lookups received so far as `(key, want_array)`.
    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl Resolver for MockResolver {
    fn lookup(&self, key: &str, want_array: bool) -> Lookup {
        self.calls
            .lock()
            .unwrap()
            .push((key.to_string(), want_array));

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.key == key && exp.want_array == want_array => exp.response,
            Some(exp) => panic!(
                "Unexpected lookup ({key:?}, {want_array}), expected ({:?}, {})",
                exp.key, exp.want_array
            ),
            None => panic!("Unexpected lookup ({key:?}, {want_array}), no expectations left"),
        }
    }

    fn supports_multi(&self) -> bool {
        self.supports_multi
    }

    fn source(&self) -> &'static str {
        self.source
    }
}

/// Builder for lookup expectations.
pub struct LookupExpectationBuilder {
    key: String,
    want_array: bool,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl LookupExpectationBuilder {
    /// Answers with a single raw value.
    pub fn return_single(self, value: impl Into<String>) {
        self.push(Lookup::Single(value.into()));
    }

    /// Answers with a sequence of raw values.
    pub fn return_multi<I, S>(self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Lookup::Multi(values.into_iter().map(Into::into).collect()));
    }

    /// Answers "not found".
    pub fn return_missing(self) {
        self.push(Lookup::Missing);
    }

    fn push(self, response: Lookup) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            key: self.key,
            want_array: self.want_array,
            response,
        });
    }
}
