//! Response payload types shared across endpoints.

use serde::{Deserialize, Serialize};

/// The payload of a count request: `{"count": <integer>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    /// Number of matching history records.
    pub count: i64,
}

impl CountResult {
    /// Wraps a count.
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_payload_shape() {
        let json = serde_json::to_value(CountResult::new(3)).unwrap();
        assert_eq!(json, serde_json::json!({"count": 3}));
    }
}
