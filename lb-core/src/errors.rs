pub use anyhow::{
    anyhow,
    ensure,
};
pub use paste::paste;
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

// Declares a thiserror enum plus one snake_case constructor per variant that returns the
// variant already wrapped in an `anyhow::Error`, so call sites can write
// `return Err(StoreError::duplicate_type_name(&name))`.  Variants carry exactly one field;
// `String` fields take a `&str` in the constructor.
#[macro_export]
macro_rules! err_impl {
    (@hidden $errtype:ident, $item:ident, String) => {
        $crate::errors::paste! {
            #[doc = concat!("Builds a `", stringify!($item), "` error.")]
            #[allow(dead_code)]
            pub fn [<$item:snake>](in_: &str) -> anyhow::Error {
                $crate::errors::anyhow!($errtype::$item(in_.into()))
            }
        }
    };

    (@hidden $errtype:ident, $item:ident, $dtype:tt) => {
        $crate::errors::paste! {
            #[doc = concat!("Builds a `", stringify!($item), "` error.")]
            #[allow(dead_code)]
            pub fn [<$item:snake>](in_: $dtype) -> anyhow::Error {
                $crate::errors::anyhow!($errtype::$item(in_))
            }
        }
    };

    ($(#[$meta:meta])* $errtype:ident,
        $($(#[$errinfo:meta])+ $item:ident($dtype:tt),)+
    ) => {
        $(#[$meta])*
        #[derive(Debug, $crate::errors::Error)]
        pub enum $errtype {
            $($(#[$errinfo])+ $item($dtype)),+
        }

        impl $errtype {
            $($crate::err_impl! {@hidden $errtype, $item, $dtype})+
        }
    };
}

err_impl! {
    /// Failures reported by a store engine.
    StoreError,
    #[error("a type named {0} already exists in this family")]
    DuplicateTypeName(String),

    #[error("a node named {0} already exists in this family")]
    DuplicateNodeName(String),

    #[error("node {0} does not reference a type")]
    MissingTypeReference(String),

    #[error("no type with id {0} exists in this family")]
    UnknownTypeId(i64),
}
