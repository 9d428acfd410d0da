//! # Extractor Entry Points
//!
//! The [`Extractor`] trait exposes one entry point per source. Each builds the matching
//! resolver for the request and hands the target to the binding engine.
//!
//! ```rust
//! use http::Request;
//! use paramex::{param_record, Extractor, ParamExtractor};
//!
//! param_record! {
//!     #[derive(Debug, Default)]
//!     struct HeaderParams {
//!         name: String => "name",
//!         age: i64 => "age",
//!     }
//! }
//!
//! let req = Request::builder()
//!     .header("name", "header_name")
//!     .header("age", "40")
//!     .body(())
//!     .unwrap();
//!
//! let mut params = HeaderParams::default();
//! ParamExtractor::new().extract_headers(&mut params, &req).unwrap();
//! assert_eq!(params.name, "header_name");
//! assert_eq!(params.age, 40);
//! ```

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::form::{parse_form, query_values};
use crate::resolver::{FormResolver, HeaderResolver, QueryResolver};
use http::Request;
use paramex_core::{bind, bind_record, BindError, Target};

/// Binds request headers, URL query values and form values into records.
///
/// Every method takes the record as a [`Target`]: pass `&mut record`. Anything else
/// fails with `NotAssignable` or `UnsupportedType` before a field is read.
pub trait Extractor {
    /// Binds request headers. Lookups are case-insensitive; text-sequence fields
    /// are unsupported for this source.
    fn extract_headers<'a, T, B>(&self, target: T, req: &Request<B>) -> Result<(), BindError>
    where
        T: Target<'a>;

    /// Binds URL query values.
    fn extract_queries<'a, T, B>(&self, target: T, req: &Request<B>) -> Result<(), BindError>
    where
        T: Target<'a>;

    /// Binds form values, parsing the body first if no earlier call did.
    ///
    /// Parse failures are returned unchanged as [`ExtractError::Form`].
    fn extract_forms<'a, T, B>(&self, target: T, req: &mut Request<B>) -> Result<(), ExtractError>
    where
        T: Target<'a>,
        B: AsRef<[u8]>;
}

/// The default [`Extractor`]. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct ParamExtractor {
    config: ExtractorConfig,
}

impl ParamExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }
}

impl Extractor for ParamExtractor {
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(source = "headers", record = std::any::type_name::<T>())
    )]
    fn extract_headers<'a, T, B>(&self, target: T, req: &Request<B>) -> Result<(), BindError>
    where
        T: Target<'a>,
    {
        bind(target, &HeaderResolver::new(req.headers()))
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(source = "query", record = std::any::type_name::<T>())
    )]
    fn extract_queries<'a, T, B>(&self, target: T, req: &Request<B>) -> Result<(), BindError>
    where
        T: Target<'a>,
    {
        let values = query_values(req.uri());
        bind(target, &QueryResolver::new(&values))
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(source = "form", record = std::any::type_name::<T>())
    )]
    fn extract_forms<'a, T, B>(&self, target: T, req: &mut Request<B>) -> Result<(), ExtractError>
    where
        T: Target<'a>,
        B: AsRef<[u8]>,
    {
        let record = target.into_binding().into_record()?;
        let form = parse_form(req, &self.config)?;
        bind_record(record, &FormResolver::new(&form))?;
        Ok(())
    }
}

/// Binds request headers with a default [`ParamExtractor`].
pub fn bind_from_headers<'a, T, B>(target: T, req: &Request<B>) -> Result<(), BindError>
where
    T: Target<'a>,
{
    ParamExtractor::new().extract_headers(target, req)
}

/// Binds URL query values with a default [`ParamExtractor`].
pub fn bind_from_query<'a, T, B>(target: T, req: &Request<B>) -> Result<(), BindError>
where
    T: Target<'a>,
{
    ParamExtractor::new().extract_queries(target, req)
}

/// Binds form values with a default [`ParamExtractor`].
pub fn bind_from_form<'a, T, B>(target: T, req: &mut Request<B>) -> Result<(), ExtractError>
where
    T: Target<'a>,
    B: AsRef<[u8]>,
{
    ParamExtractor::new().extract_forms(target, req)
}
