pub use anyhow::Result;
#[doc(hidden)]
pub use paste::paste;
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

// Declares a thiserror enum whose variants each carry a single payload, plus a snake_case
// constructor per variant that returns the error already wrapped in `anyhow::Error`:
//
//     err_impl! {ConfigError,
//         #[error("invalid count for {0}")]
//         InvalidCount(String),
//     }
//
//     bail!(ConfigError::invalid_count("n_users"));
#[macro_export]
macro_rules! err_impl {
    (@hidden $errtype:ident, $variant:ident, $ctor:ident, String) => {
        pub fn $ctor(in_: &str) -> anyhow::Error {
            anyhow::anyhow!($errtype::$variant(in_.into()))
        }
    };

    (@hidden $errtype:ident, $variant:ident, $ctor:ident, $($dtype:tt)::+) => {
        pub fn $ctor(in_: &$($dtype)::+) -> anyhow::Error {
            anyhow::anyhow!($errtype::$variant(in_.clone()))
        }
    };

    ($errtype:ident,
        $(#[$errinfo:meta] $item:ident($($dtype:tt)::+),)+
    ) => {
        #[derive(Debug, thiserror::Error)]
        pub enum $errtype {
            $(#[$errinfo] $item($($dtype)::+)),+
        }

        impl $errtype {
            $($crate::errors::paste! {
                $crate::err_impl! {@hidden $errtype, $item, [<$item:snake>], $($dtype)::+}
            })+
        }
    };
}
