//! # Paramex Sample
//!
//! Binds the same demo request three ways (headers, query, form), plus a profile
//! request with a UUID and a repeated key, and prints every record as JSON.
//!
//! Each bind runs in its own task with its own record, the way independent request
//! handlers would.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p paramex-sample
//! ```

use http::Request;
use paramex::logging::setup_tracing;
use paramex::{bind_from_headers, Extractor, ParamExtractor};
use paramex_sample::error::SampleError;
use paramex_sample::model::{FormParams, HeaderParams, ProfileParams, QueryParams};
use paramex_sample::requests::{make_request, profile_request};
use serde::Serialize;
use tracing::{error, info, Instrument};
use uuid::Uuid;

fn to_json<T: Serialize>(label: &str, value: &T) -> Result<String, SampleError> {
    Ok(format!("{label}: {}", serde_json::to_string(value)?))
}

async fn bind_headers(req: Request<Vec<u8>>) -> Result<String, SampleError> {
    let mut params = HeaderParams::default();
    bind_from_headers(&mut params, &req)?;
    to_json("headers", &params)
}

async fn bind_queries(
    extractor: ParamExtractor,
    req: Request<Vec<u8>>,
) -> Result<String, SampleError> {
    let mut params = QueryParams::default();
    extractor.extract_queries(&mut params, &req)?;
    to_json("queries", &params)
}

async fn bind_forms(
    extractor: ParamExtractor,
    mut req: Request<Vec<u8>>,
) -> Result<String, SampleError> {
    let mut params = FormParams::default();
    extractor.extract_forms(&mut params, &mut req)?;
    to_json("forms", &params)
}

async fn bind_profile(
    extractor: ParamExtractor,
    mut req: Request<Vec<u8>>,
) -> Result<String, SampleError> {
    let mut params = ProfileParams::default();
    extractor.extract_forms(&mut params, &mut req)?;
    let json = to_json("profile", &params)?;

    // Headers cannot feed a text sequence.
    if let Err(e) = extractor.extract_headers(&mut params, &req) {
        info!(error = %e, "Header bind rejected as expected");
    }
    Ok(json)
}

#[tokio::main]
async fn main() -> Result<(), SampleError> {
    setup_tracing();

    info!("Starting paramex sample");

    let extractor = ParamExtractor::new();

    let handles = [
        tokio::spawn(bind_headers(make_request()?).instrument(tracing::info_span!("headers"))),
        tokio::spawn(
            bind_queries(extractor.clone(), make_request()?)
                .instrument(tracing::info_span!("queries")),
        ),
        tokio::spawn(
            bind_forms(extractor.clone(), make_request()?).instrument(tracing::info_span!("forms")),
        ),
        tokio::spawn(
            bind_profile(extractor, profile_request(Uuid::new_v4())?)
                .instrument(tracing::info_span!("profile")),
        ),
    ];

    for handle in handles {
        match handle.await? {
            Ok(line) => println!("{line}"),
            Err(e) => error!(error = %e, "Bind failed"),
        }
    }

    info!("Sample completed");
    Ok(())
}
