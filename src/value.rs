//! Cache Value Module
//!
//! Defines the closed set of scalar types the cache accepts.

use std::fmt;

// == Cache Value ==
/// A value accepted by the cache: text, raw bytes, integer, or float.
///
/// The cache never interprets a value. Each variant has a fixed byte
/// serialization (text as UTF-8, bytes verbatim, numbers as their decimal
/// string), and `get` hands those bytes back unchanged. Any typed
/// interpretation happens through a decode function at read time.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    /// UTF-8 text, stored as its bytes
    Text(String),
    /// Raw bytes, stored verbatim
    Bytes(Vec<u8>),
    /// Signed integer, stored as its decimal string
    Int(i64),
    /// Floating-point number, stored as its decimal string
    Float(f64),
}

impl CacheValue {
    // == Serialization ==
    /// Serializes the value to the exact bytes written to the backing store.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            CacheValue::Text(s) => s.as_bytes().to_vec(),
            CacheValue::Bytes(b) => b.clone(),
            CacheValue::Int(i) => i.to_string().into_bytes(),
            CacheValue::Float(x) => x.to_string().into_bytes(),
        }
    }
}

// == Conversions ==
impl From<&str> for CacheValue {
    fn from(s: &str) -> Self {
        CacheValue::Text(s.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(s: String) -> Self {
        CacheValue::Text(s)
    }
}

impl From<&[u8]> for CacheValue {
    fn from(b: &[u8]) -> Self {
        CacheValue::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for CacheValue {
    fn from(b: Vec<u8>) -> Self {
        CacheValue::Bytes(b)
    }
}

impl From<i64> for CacheValue {
    fn from(i: i64) -> Self {
        CacheValue::Int(i)
    }
}

impl From<f64> for CacheValue {
    fn from(x: f64) -> Self {
        CacheValue::Float(x)
    }
}

// == Display ==
impl fmt::Display for CacheValue {
    /// Lossy text rendering of the serialized bytes, for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheValue::Text(s) => f.write_str(s),
            CacheValue::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            CacheValue::Int(i) => write!(f, "{i}"),
            CacheValue::Float(x) => write!(f, "{x}"),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_bytes() {
        let value = CacheValue::Text("hello".to_string());
        assert_eq!(value.to_bytes(), b"hello".to_vec());
    }

    #[test]
    fn test_bytes_to_bytes_verbatim() {
        let raw = vec![0u8, 159, 146, 150];
        let value = CacheValue::Bytes(raw.clone());
        assert_eq!(value.to_bytes(), raw);
    }

    #[test]
    fn test_int_to_bytes_decimal_string() {
        assert_eq!(CacheValue::Int(42).to_bytes(), b"42".to_vec());
        assert_eq!(CacheValue::Int(-7).to_bytes(), b"-7".to_vec());
    }

    #[test]
    fn test_float_to_bytes_decimal_string() {
        assert_eq!(CacheValue::Float(2.5).to_bytes(), b"2.5".to_vec());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(CacheValue::from("hi"), CacheValue::Text("hi".to_string()));
        assert_eq!(
            CacheValue::from("hi".to_string()),
            CacheValue::Text("hi".to_string())
        );
        assert_eq!(
            CacheValue::from(vec![1u8, 2]),
            CacheValue::Bytes(vec![1, 2])
        );
        assert_eq!(
            CacheValue::from(&[1u8, 2][..]),
            CacheValue::Bytes(vec![1, 2])
        );
        assert_eq!(CacheValue::from(42i64), CacheValue::Int(42));
        assert_eq!(CacheValue::from(2.5f64), CacheValue::Float(2.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(CacheValue::from("hello").to_string(), "hello");
        assert_eq!(CacheValue::from(42i64).to_string(), "42");
        assert_eq!(CacheValue::from(2.5f64).to_string(), "2.5");
        assert_eq!(CacheValue::Bytes(b"raw".to_vec()).to_string(), "raw");
    }
}
