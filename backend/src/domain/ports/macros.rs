//! Helper macro for declaring port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept anything convertible into the field type, so adapters
//! can write `StorageError::io("disk full")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        /// Errors exercised by the macro tests.
        pub enum LinkError {
            /// Unit variant.
            Offline => "link offline",
            /// Single string field.
            Refused { message: String } => "refused: {message}",
            /// Mixed field types.
            Slow { endpoint: String, elapsed_ms: u64 } => "{endpoint} took {elapsed_ms} ms",
        }
    }

    #[test]
    fn unit_constructor_builds_variant() {
        assert_eq!(LinkError::offline(), LinkError::Offline);
        assert_eq!(LinkError::offline().to_string(), "link offline");
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(LinkError::refused("nope").to_string(), "refused: nope");
    }

    #[test]
    fn non_string_fields_keep_their_type() {
        let err = LinkError::slow("/vehicles", 1_500_u64);
        assert_eq!(err.to_string(), "/vehicles took 1500 ms");
    }
}
