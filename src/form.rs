//! # Query and Form Parsing
//!
//! Query values come straight from the request URI and are decoded leniently: a pair
//! with a malformed escape or a `;` is dropped and the rest are kept.
//!
//! Form values are parsed on first use and cached in the request's extensions, so
//! binding several records from one request reads the body once:
//!
//! - `POST`, `PUT` and `PATCH` requests with an
//!   `application/x-www-form-urlencoded` body contribute the body pairs first. A
//!   `multipart/form-data` body contributes its text fields; file parts are skipped.
//! - The URI query pairs follow, so a single-value lookup prefers the body.
//! - Both parts are decoded strictly; a malformed escape or a `;` separator is an
//!   error, as is a body above [`ExtractorConfig::max_form_bytes`].
//!
//! A failed parse leaves nothing in the cache. A cached form is re-checked against the
//! body limit of every later call.

use crate::config::ExtractorConfig;
use crate::error::FormError;
use crate::multipart;
use crate::values::ParamValues;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, Method, Request, Uri};
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Parsed form values, cached in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedForm {
    values: Arc<ParamValues>,
    body_len: usize,
}

impl ParsedForm {
    /// Size of the body the values were read from, or zero if the body was not read.
    pub fn body_len(&self) -> usize {
        self.body_len
    }
}

impl Deref for ParsedForm {
    type Target = ParamValues;

    fn deref(&self) -> &ParamValues {
        &self.values
    }
}

/// Decodes the URI query string. Never fails; invalid pairs are dropped.
pub fn query_values(uri: &Uri) -> ParamValues {
    uri.query().map(ParamValues::parse).unwrap_or_default()
}

/// Returns the form values of `req`, parsing and caching them if needed.
///
/// A cached form is still checked against `config`, so a stricter extractor
/// rejects a body an earlier one accepted.
pub fn parse_form<B: AsRef<[u8]>>(
    req: &mut Request<B>,
    config: &ExtractorConfig,
) -> Result<ParsedForm, FormError> {
    if let Some(parsed) = req.extensions().get::<ParsedForm>() {
        check_limit(parsed.body_len, config)?;
        return Ok(parsed.clone());
    }

    let parsed = read_form(req, config)?;
    debug!(keys = parsed.len(), body_len = parsed.body_len, "Form parsed");
    req.extensions_mut().insert(parsed.clone());
    Ok(parsed)
}

fn read_form<B: AsRef<[u8]>>(
    req: &Request<B>,
    config: &ExtractorConfig,
) -> Result<ParsedForm, FormError> {
    let body = req.body().as_ref();
    let body_values = if has_body(req.method()) {
        read_body(req.headers(), body, config)?
    } else {
        None
    };
    let (mut values, body_len) = match body_values {
        Some(values) => (values, body.len()),
        None => (ParamValues::new(), 0),
    };

    if let Some(query) = req.uri().query() {
        values.extend(ParamValues::parse_strict(query)?);
    }
    Ok(ParsedForm {
        values: Arc::new(values),
        body_len,
    })
}

fn has_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

fn check_limit(size: usize, config: &ExtractorConfig) -> Result<(), FormError> {
    if size > config.max_form_bytes {
        return Err(FormError::BodyTooLarge {
            size,
            limit: config.max_form_bytes,
        });
    }
    Ok(())
}

/// Decodes a form body. `None` means the content type carries no form.
fn read_body(
    headers: &HeaderMap,
    body: &[u8],
    config: &ExtractorConfig,
) -> Result<Option<ParamValues>, FormError> {
    let Some(content_type) = content_type(headers)? else {
        return Ok(None);
    };

    match content_type.media_type.as_str() {
        FORM_URLENCODED => {
            check_limit(body.len(), config)?;
            ParamValues::parse_strict(body).map(Some)
        }
        MULTIPART_FORM_DATA => {
            let boundary = content_type
                .boundary
                .filter(|boundary| !boundary.is_empty())
                .ok_or(FormError::MissingBoundary)?;
            check_limit(body.len(), config)?;
            multipart::parse_text_fields(body, &boundary).map(Some)
        }
        _ => Ok(None),
    }
}

struct ContentType {
    /// Lower-cased, without parameters.
    media_type: String,
    boundary: Option<String>,
}

fn content_type(headers: &HeaderMap) -> Result<Option<ContentType>, FormError> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| FormError::InvalidContentType)?;
    let mut parts = value.split(';');
    let media_type = parts
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if media_type.is_empty() {
        return Ok(None);
    }
    if !media_type.contains('/') {
        return Err(FormError::InvalidContentType);
    }

    let boundary = parts
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("boundary"))
        .map(|(_, value)| value.trim().trim_matches('"').to_string());
    Ok(Some(ContentType {
        media_type,
        boundary,
    }))
}
