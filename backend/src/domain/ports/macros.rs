//! Helper macro for generating port error enums with `impl Into` constructors.

macro_rules! define_port_error {
    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
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
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                #[allow(missing_docs)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant { $($field : $ty),* });
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum LookupError {
            Upstream { message: String } => "upstream failed: {message}",
            Status { status: u16 } => "status {status}",
            Rejected { message: String, status: u16 } => "rejected ({status}): {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = LookupError::upstream("connection reset");
        assert_eq!(err.to_string(), "upstream failed: connection reset");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = LookupError::status(503_u16);
        assert_eq!(err.to_string(), "status 503");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = LookupError::rejected("quota", 429_u16);
        assert_eq!(err, LookupError::Rejected { message: "quota".to_owned(), status: 429 });
        assert_eq!(err.to_string(), "rejected (429): quota");
    }
}
