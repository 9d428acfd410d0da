//! # Binding Engine
//!
//! Walks the fields of a record, asks the resolver for each tagged field, coerces the
//! raw value(s) to the declared type and writes the result back.
//!
//! ## Algorithm
//!
//! 1. The target argument is checked once ([`Target`]); a read-only handle or a
//!    non-record fails before any field is touched.
//! 2. For each field, in declaration order:
//!     1. No key (absent, empty or `-` tag): skip, without consulting the resolver.
//!     2. A text-sequence field against a resolver that cannot produce sequences
//!        fails with `UnsupportedParamType`.
//!     3. Look the key up. `Missing`, `Single("")` and `Multi([])` skip the field,
//!        leaving its previous value in place.
//!     4. Coerce and write. The first failure aborts the call. Fields written before
//!        it stay written; fields after it are not visited.
//!
//! The engine keeps no state between calls and never holds on to the record.

use crate::coerce;
use crate::error::{BindError, ParseDiagnostic};
use crate::field::{Field, Slot};
use crate::resolver::{Lookup, Resolver};
use crate::target::{Record, Target};
use tracing::{debug, trace};

/// Binds `target` from `resolver`.
///
/// ```rust
/// use paramex_core::{bind, param_record, Lookup};
///
/// param_record! {
///     #[derive(Debug, Default)]
///     struct Paging {
///         page: i32 => "page",
///         size: i64 => "size",
///     }
/// }
///
/// let source = |key: &str, _want_array: bool| match key {
///     "page" => Lookup::Single("3".into()),
///     _ => Lookup::Missing,
/// };
///
/// let mut paging = Paging::default();
/// bind(&mut paging, &source).unwrap();
/// assert_eq!(paging.page, 3);
/// assert_eq!(paging.size, 0);
/// ```
pub fn bind<'a, T: Target<'a>>(target: T, resolver: &dyn Resolver) -> Result<(), BindError> {
    let record = target.into_binding().into_record()?;
    bind_record(record, resolver)
}

/// Binds an already-checked record.
pub fn bind_record(record: &mut dyn Record, resolver: &dyn Resolver) -> Result<(), BindError> {
    let record_name = record.record_name();
    let source = resolver.source();

    for field in record.fields() {
        let Some(key) = field.key() else {
            trace!(source, record = record_name, field = field.name, "No binding key");
            continue;
        };

        if let Err(e) = bind_field(field, key, resolver) {
            debug!(source, record = record_name, key, error = %e, "Bind failed");
            return Err(e);
        }
    }

    Ok(())
}

fn bind_field(field: Field<'_>, key: &str, resolver: &dyn Resolver) -> Result<(), BindError> {
    let Field { name, slot, .. } = field;
    let want_array = slot.wants_array();

    if want_array && !resolver.supports_multi() {
        return Err(BindError::UnsupportedParamType {
            field: name,
            type_name: slot.type_name(),
            reason: "source cannot supply multiple values",
        });
    }

    match resolver.lookup(key, want_array) {
        Lookup::Missing => {
            trace!(field = name, key, "Not found");
            Ok(())
        }
        Lookup::Single(raw) if raw.is_empty() => {
            trace!(field = name, key, "Empty value");
            Ok(())
        }
        Lookup::Multi(values) if values.is_empty() => {
            trace!(field = name, key, "Empty sequence");
            Ok(())
        }
        Lookup::Single(raw) => {
            assign_single(name, slot, raw)?;
            trace!(field = name, key, "Bound");
            Ok(())
        }
        Lookup::Multi(values) => match slot {
            Slot::TextArray(dst) => {
                trace!(field = name, key, count = values.len(), "Bound");
                *dst = values;
                Ok(())
            }
            other => Err(BindError::UnsupportedParamType {
                field: name,
                type_name: other.type_name(),
                reason: "source returned multiple values for a single-value field",
            }),
        },
    }
}

fn assign_single(field: &'static str, slot: Slot<'_>, raw: String) -> Result<(), BindError> {
    let target = slot.type_name();
    let unmarshal = |raw: String| {
        move |source: ParseDiagnostic| BindError::Unmarshal {
            field,
            value: raw,
            target,
            source,
        }
    };

    match slot {
        Slot::Text(dst) => *dst = raw,
        Slot::Bool(dst) => *dst = coerce::parse_bool(&raw).map_err(unmarshal(raw))?,
        Slot::Int32(dst) => *dst = coerce::parse_i32(&raw).map_err(unmarshal(raw))?,
        Slot::Int(dst) => *dst = coerce::parse_isize(&raw).map_err(unmarshal(raw))?,
        Slot::Int64(dst) => *dst = coerce::parse_i64(&raw).map_err(unmarshal(raw))?,
        Slot::Float32(dst) => *dst = coerce::parse_f32(&raw).map_err(unmarshal(raw))?,
        Slot::Float64(dst) => *dst = coerce::parse_f64(&raw).map_err(unmarshal(raw))?,
        Slot::Uuid(dst) => *dst = coerce::parse_uuid(&raw).map_err(unmarshal(raw))?,
        Slot::TextArray(_) => {
            return Err(BindError::UnsupportedParamType {
                field,
                type_name: target,
                reason: "source returned a single value for a sequence field",
            })
        }
        Slot::Unsupported(_) => {
            return Err(BindError::UnsupportedParamType {
                field,
                type_name: target,
                reason: "no coercion for this type",
            })
        }
    }
    Ok(())
}
