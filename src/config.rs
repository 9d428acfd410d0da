//! # Extractor Configuration
//!
//! Settings that shape how request data is read before binding. The struct
//! deserializes from any serde format, with missing keys taking their defaults, so it
//! can sit inside a larger application config.
//!
//! Log verbosity is not configured here; it follows `RUST_LOG` (see
//! [`logging`](crate::logging)).

use serde::{Deserialize, Serialize};

/// Default cap on urlencoded form bodies (10 MiB).
pub const DEFAULT_MAX_FORM_BYTES: usize = 10 << 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Largest form body, in bytes, that will be parsed. Also applied to a form
    /// cached on the request by an earlier call.
    pub max_form_bytes: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_form_bytes: DEFAULT_MAX_FORM_BYTES,
        }
    }
}

impl ExtractorConfig {
    pub fn with_max_form_bytes(mut self, max_form_bytes: usize) -> Self {
        self.max_form_bytes = max_form_bytes;
        self
    }
}
