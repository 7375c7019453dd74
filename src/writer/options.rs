//! Writer configuration.

use serde::{Deserialize, Serialize};

/// How a writer reacts to operations issued out of BOF ... EOF order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Write every record as requested. Out-of-order calls are only logged,
    /// and the resulting stream may be malformed as a whole.
    #[default]
    Permissive,
    /// Reject cell and column writes outside BOF ... EOF, a second BOF, and
    /// anything after EOF, without touching the sink.
    Strict,
}

/// Options for [`XlsWriter`](crate::XlsWriter).
///
/// The defaults reproduce the plain streaming behavior: nothing is validated
/// beyond field widths.
///
/// # Examples
///
/// ```
/// use microxls::{OrderingPolicy, WriterOptions};
///
/// let options = WriterOptions::new().with_ordering(OrderingPolicy::Strict);
/// assert_eq!(options, WriterOptions::strict());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterOptions {
    /// Call-order enforcement
    pub ordering: OrderingPolicy,
}

impl WriterOptions {
    /// Default (permissive) options
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with [`OrderingPolicy::Strict`]
    pub fn strict() -> Self {
        Self {
            ordering: OrderingPolicy::Strict,
        }
    }

    /// Set the ordering policy
    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.ordering == OrderingPolicy::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        assert_eq!(WriterOptions::default().ordering, OrderingPolicy::Permissive);
        assert!(!WriterOptions::new().is_strict());
        assert!(WriterOptions::strict().is_strict());
    }

    #[test]
    fn test_deserialize_from_json() {
        let options: WriterOptions = serde_json::from_str(r#"{"ordering":"strict"}"#).unwrap();
        assert_eq!(options, WriterOptions::strict());

        let options: WriterOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, WriterOptions::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<WriterOptions>(r#"{"buffered":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let json = serde_json::to_string(&WriterOptions::strict()).unwrap();
        assert_eq!(json, r#"{"ordering":"strict"}"#);
    }
}
