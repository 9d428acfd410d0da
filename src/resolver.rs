//! # Request Resolvers
//!
//! The three [`Resolver`] variants the entry points build. They differ only in where
//! they look and whether they can answer array requests.
//!
//! | Resolver | Source | Multi-value |
//! |----------|--------|-------------|
//! | [`HeaderResolver`] | request headers, case-insensitive | no |
//! | [`QueryResolver`] | URI query string | yes |
//! | [`FormResolver`] | parsed form (body, then query) | yes |

use crate::values::ParamValues;
use http::HeaderMap;
use paramex_core::{Lookup, Resolver};

/// Looks keys up in a header map. Only the first value of a header is visible.
#[derive(Debug, Clone, Copy)]
pub struct HeaderResolver<'a> {
    headers: &'a HeaderMap,
}

impl<'a> HeaderResolver<'a> {
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }
}

impl Resolver for HeaderResolver<'_> {
    fn lookup(&self, key: &str, want_array: bool) -> Lookup {
        if want_array {
            return Lookup::Missing;
        }
        // Keys that are not valid header names are simply absent.
        Lookup::single(
            self.headers
                .get(key)
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned()),
        )
    }

    fn supports_multi(&self) -> bool {
        false
    }

    fn source(&self) -> &'static str {
        "headers"
    }
}

/// Looks keys up in decoded query values.
#[derive(Debug, Clone, Copy)]
pub struct QueryResolver<'a> {
    values: &'a ParamValues,
}

impl<'a> QueryResolver<'a> {
    pub fn new(values: &'a ParamValues) -> Self {
        Self { values }
    }
}

impl Resolver for QueryResolver<'_> {
    fn lookup(&self, key: &str, want_array: bool) -> Lookup {
        lookup_values(self.values, key, want_array)
    }

    fn source(&self) -> &'static str {
        "query"
    }
}

/// Looks keys up in parsed form values.
#[derive(Debug, Clone, Copy)]
pub struct FormResolver<'a> {
    values: &'a ParamValues,
}

impl<'a> FormResolver<'a> {
    pub fn new(values: &'a ParamValues) -> Self {
        Self { values }
    }
}

impl Resolver for FormResolver<'_> {
    fn lookup(&self, key: &str, want_array: bool) -> Lookup {
        lookup_values(self.values, key, want_array)
    }

    fn source(&self) -> &'static str {
        "form"
    }
}

fn lookup_values(values: &ParamValues, key: &str, want_array: bool) -> Lookup {
    if want_array {
        Lookup::multi(values.all(key))
    } else {
        Lookup::single(values.first(key))
    }
}
