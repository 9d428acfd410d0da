//! # Multipart Text Fields
//!
//! A `multipart/form-data` body contributes its text fields to the form. File parts
//! (those carrying a `filename`) and parts without a field name are skipped.
//!
//! Parts are separated by `--<boundary>` lines and end at `--<boundary>--`. Text
//! outside the delimiters (preamble, epilogue) is ignored.

use crate::error::FormError;
use crate::values::ParamValues;

const CRLF: &[u8] = b"\r\n";

/// Collects the text fields of a multipart body, in part order.
pub fn parse_text_fields(body: &[u8], boundary: &str) -> Result<ParamValues, FormError> {
    let delimiter = format!("--{boundary}").into_bytes();
    let mut separator = CRLF.to_vec();
    separator.extend_from_slice(&delimiter);

    let start = find(body, &delimiter)
        .ok_or(FormError::InvalidMultipart("missing opening boundary"))?;
    let mut rest = &body[start + delimiter.len()..];
    let mut values = ParamValues::new();

    loop {
        if rest.starts_with(b"--") {
            return Ok(values);
        }
        rest = rest
            .strip_prefix(CRLF)
            .ok_or(FormError::InvalidMultipart("expected line break after boundary"))?;
        let end = find(rest, &separator)
            .ok_or(FormError::InvalidMultipart("unterminated part"))?;
        if let Some((name, value)) = text_field(&rest[..end])? {
            values.append(name, value);
        }
        rest = &rest[end + separator.len()..];
    }
}

fn text_field(part: &[u8]) -> Result<Option<(String, String)>, FormError> {
    let (head, value) = match part.strip_prefix(CRLF) {
        Some(value) => (&part[..0], value),
        None => {
            let split = find(part, b"\r\n\r\n")
                .ok_or(FormError::InvalidMultipart("missing blank line after part headers"))?;
            (&part[..split], &part[split + 4..])
        }
    };
    let head = std::str::from_utf8(head)
        .map_err(|_| FormError::InvalidMultipart("part headers are not UTF-8"))?;

    let mut name = None;
    let mut is_file = false;
    for line in head.split("\r\n").filter(|line| !line.is_empty()) {
        let (header, content) = line
            .split_once(':')
            .ok_or(FormError::InvalidMultipart("malformed part header"))?;
        if !header.trim().eq_ignore_ascii_case("content-disposition") {
            continue;
        }

        let mut params = content.split(';');
        let disposition = params.next().unwrap_or_default().trim();
        if !disposition.eq_ignore_ascii_case("form-data") {
            return Ok(None);
        }
        for (key, val) in params.filter_map(|param| param.split_once('=')) {
            let val = val.trim().trim_matches('"');
            match key.trim().to_ascii_lowercase().as_str() {
                "name" => name = Some(val.to_string()),
                "filename" => is_file = true,
                _ => {}
            }
        }
    }

    Ok(match name {
        Some(name) if !name.is_empty() && !is_file => {
            Some((name, String::from_utf8_lossy(value).into_owned()))
        }
        _ => None,
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
