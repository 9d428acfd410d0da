//! # Record Declaration Macro

/// Declares a struct together with its [`Record`](crate::Record) implementation.
///
/// Each field may carry a binding key after `=>`. Fields without a key, with the empty
/// key or with `"-"` are never read from a source nor written by the engine.
///
/// For every field an associated constant `<FIELD>_PARAM: Option<&'static str>` holding
/// its key is generated, so requests and tests can refer to keys without repeating them.
///
/// Passing the declared struct *by value* to an entry point yields
/// [`BindError::NotAssignable`](crate::BindError::NotAssignable).
///
/// ```rust
/// use paramex_core::param_record;
/// use uuid::Uuid;
///
/// param_record! {
///     #[derive(Debug, Default, Clone, PartialEq)]
///     pub struct SearchParams {
///         /// Free text.
///         pub query: String => "q",
///         pub page: i32 => "page",
///         pub tags: Vec<String> => "tag",
///         pub session: Uuid => "session",
///         pub internal: bool,
///     }
/// }
///
/// assert_eq!(SearchParams::QUERY_PARAM, Some("q"));
/// assert_eq!(SearchParams::INTERNAL_PARAM, None);
/// ```
#[macro_export]
macro_rules! param_record {
    (@key $key:literal) => {
        ::std::option::Option::Some($key)
    };
    (@key) => {
        ::std::option::Option::None
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty $(=> $key:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::Record for $name {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(
                            ::std::stringify!($field),
                            $crate::param_record!(@key $($key)?),
                            $crate::ParamField::slot(&mut self.$field),
                        ),
                    )*
                ]
            }
        }

        impl<'a> $crate::Target<'a> for $name {
            fn into_binding(self) -> $crate::Binding<'a> {
                $crate::Binding::NotAssignable(::std::any::type_name::<Self>())
            }
        }

        $crate::paste::paste! {
            #[allow(dead_code)]
            impl $name {
                $(
                    pub const [<$field:upper _PARAM>]: ::std::option::Option<&'static str> =
                        $crate::param_record!(@key $($key)?);
                )*
            }
        }
    };
}
