// Error handling macros
// Shorthands for the argument checks done by strict constructors

/// Unwrap an `Option`, or return early with an invalid argument error
/// naming the parameter.
#[macro_export]
macro_rules! ensure_present {
    ($value:expr, $name:expr) => {
        match $value {
            ::core::option::Option::Some(value) => value,
            ::core::option::Option::None => {
                return ::core::result::Result::Err($crate::MonadError::invalid_argument($name).into());
            }
        }
    };
}

/// Return early with an invalid operation error
#[macro_export]
macro_rules! bail_operation {
    ($($arg:tt)+) => {
        return ::core::result::Result::Err($crate::MonadError::invalid_operation(format!($($arg)+)).into())
    };
}
