//! # Paramex
//!
//! > **Bind HTTP headers, URL query values and form values into tagged records.**
//!
//! Reading request parameters by hand means one lookup, one parse and one error path
//! per field. With Paramex the record declares which key feeds which field, and a
//! single call fills it:
//!
//! ```rust
//! use http::{Method, Request};
//! use paramex::{bind_from_form, param_record};
//!
//! param_record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     struct FormParams {
//!         name: String => "name",
//!         age: isize => "age",
//!         height: f64 => "height",
//!         married: bool => "married",
//!     }
//! }
//!
//! let mut req = Request::builder()
//!     .method(Method::POST)
//!     .uri("https://example.com/people")
//!     .header("content-type", "application/x-www-form-urlencoded")
//!     .body(b"name=form_name&age=50&height=1.72&married=true".to_vec())
//!     .unwrap();
//!
//! let mut params = FormParams::default();
//! bind_from_form(&mut params, &mut req).unwrap();
//! assert_eq!(
//!     params,
//!     FormParams { name: "form_name".into(), age: 50, height: 1.72, married: true }
//! );
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! - **[`extractor`]**: the entry points ([`Extractor`], [`bind_from_headers`],
//!   [`bind_from_query`], [`bind_from_form`]).
//! - **[`resolver`]**: header, query and form [`Resolver`]s over `http::Request`.
//! - **[`form`]**: query decoding and cached form-body parsing.
//! - **[`multipart`]**: text fields of `multipart/form-data` bodies.
//! - **[`values`]**: the [`ParamValues`] multimap.
//! - **[`config`]**: [`ExtractorConfig`].
//! - **[`logging`]**: `tracing` subscriber setup.
//!
//! The engine itself (records, coercion table, error kinds, mock resolver) lives in
//! [`paramex_core`] and is re-exported here.
//!
//! ## Supported field types
//!
//! `String`, `bool`, `i32`, `isize`, `i64`, `f32`, `f64`, [`uuid::Uuid`] and
//! `Vec<String>` (query and form only). Any other declared type fails with
//! [`BindError::UnsupportedParamType`] once a value is found for it.

pub mod config;
pub mod error;
pub mod extractor;
pub mod form;
pub mod logging;
pub mod multipart;
pub mod resolver;
pub mod values;

pub use config::ExtractorConfig;
pub use error::{ExtractError, FormError};
pub use extractor::{bind_from_form, bind_from_headers, bind_from_query, Extractor, ParamExtractor};
pub use resolver::{FormResolver, HeaderResolver, QueryResolver};
pub use values::ParamValues;

pub use paramex_core::{
    bind, bind_record, mock, param_record, BindError, Binding, ErrorKind, Field, Lookup,
    ParamField, ParseDiagnostic, Record, Resolver, Slot, Target, SKIP_TAG,
};
pub use uuid;
