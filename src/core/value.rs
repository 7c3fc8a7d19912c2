//! Context values and their text coercion
//!
//! Log call sites pass heterogeneous values (keys and values alike). Each one
//! is turned into a [`ContextValue`] at the call boundary, so encoding never
//! has to inspect a dynamic type.

use super::error::LoggerError;
use std::borrow::Cow;
use std::error::Error as StdError;

/// Token emitted for values the encoder does not know how to render.
pub const UNKNOWN_TYPE: &str = "unknowntype";

/// A single key or value in a context pair sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    /// Any integral number, rendered in base 10
    Int(i128),
    /// Text, rendered verbatim
    Text(String),
    /// The message of an error value
    ErrorMessage(String),
    /// Anything else; rendered as [`UNKNOWN_TYPE`]
    Unsupported,
}

impl ContextValue {
    /// Capture the descriptive message of an error.
    pub fn error(err: &(dyn StdError + '_)) -> Self {
        ContextValue::ErrorMessage(err.to_string())
    }

    /// Text representation used as a key or a value.
    ///
    /// Never fails. Text is not escaped or quoted.
    pub fn coerce(&self) -> Cow<'_, str> {
        match self {
            ContextValue::Int(i) => Cow::Owned(i.to_string()),
            ContextValue::Text(s) => Cow::Borrowed(s),
            ContextValue::ErrorMessage(m) => Cow::Borrowed(m),
            ContextValue::Unsupported => Cow::Borrowed(UNKNOWN_TYPE),
        }
    }

    /// Upper bound on the coerced length, without allocating.
    pub(crate) fn len_hint(&self) -> usize {
        match self {
            // sign plus the 39 digits of i128::MAX
            ContextValue::Int(_) => 40,
            ContextValue::Text(s) | ContextValue::ErrorMessage(s) => s.len(),
            ContextValue::Unsupported => UNKNOWN_TYPE.len(),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for ContextValue {
                #[inline]
                fn from(i: $t) -> Self {
                    ContextValue::Int(i as i128)
                }
            }

            impl From<&$t> for ContextValue {
                #[inline]
                fn from(i: &$t) -> Self {
                    ContextValue::Int(*i as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

// The top half of u128 does not fit an i128; it keeps its decimal digits as text.
impl From<u128> for ContextValue {
    fn from(i: u128) -> Self {
        i128::try_from(i).map_or_else(|_| ContextValue::Text(i.to_string()), ContextValue::Int)
    }
}

impl From<&u128> for ContextValue {
    fn from(i: &u128) -> Self {
        ContextValue::from(*i)
    }
}

macro_rules! impl_from_unsupported {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for ContextValue {
                #[inline]
                fn from(_: $t) -> Self {
                    ContextValue::Unsupported
                }
            }
        )*
    };
}

// Floats and booleans are deliberately not rendered.
impl_from_unsupported!(f32, f64, bool, ());

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        ContextValue::Text(s)
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        ContextValue::Text(s.to_string())
    }
}

impl From<&String> for ContextValue {
    fn from(s: &String) -> Self {
        ContextValue::Text(s.clone())
    }
}

impl From<Cow<'_, str>> for ContextValue {
    fn from(s: Cow<'_, str>) -> Self {
        ContextValue::Text(s.into_owned())
    }
}

impl From<char> for ContextValue {
    fn from(c: char) -> Self {
        ContextValue::Text(c.to_string())
    }
}

impl From<std::io::Error> for ContextValue {
    fn from(err: std::io::Error) -> Self {
        ContextValue::ErrorMessage(err.to_string())
    }
}

impl From<&std::io::Error> for ContextValue {
    fn from(err: &std::io::Error) -> Self {
        ContextValue::ErrorMessage(err.to_string())
    }
}

impl From<LoggerError> for ContextValue {
    fn from(err: LoggerError) -> Self {
        ContextValue::ErrorMessage(err.to_string())
    }
}

impl From<Box<dyn StdError + Send + Sync>> for ContextValue {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        ContextValue::ErrorMessage(err.to_string())
    }
}

/// `None` becomes empty text, which the encoder skips.
impl<T: Into<ContextValue>> From<Option<T>> for ContextValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => ContextValue::Text(String::new()),
        }
    }
}
