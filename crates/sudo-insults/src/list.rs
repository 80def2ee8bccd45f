//! The ordered insult list and its time-seeded accessor.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Index the generated accessor picks for a clock reading.
///
/// Returns `None` for an empty list, otherwise `millis mod len`.
pub fn pick_index(len: usize, millis: u128) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((millis % len as u128) as usize)
}

/// Milliseconds since the Unix epoch, or zero if the clock is before it.
pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Insults in category order, then file-line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsultList {
    insults: Vec<String>,
}

impl InsultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.insults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insults.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.insults.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.insults
    }

    /// Append one category's insults, keeping their order.
    pub fn extend(&mut self, insults: impl IntoIterator<Item = String>) {
        self.insults.extend(insults);
    }

    /// The insult the generated accessor returns at `millis`.
    pub fn pick_at(&self, millis: u128) -> Option<&str> {
        pick_index(self.len(), millis).map(|i| self.insults[i].as_str())
    }

    /// The insult the generated accessor would return right now.
    pub fn pick_now(&self) -> Option<&str> {
        self.pick_at(now_millis())
    }
}

impl From<Vec<String>> for InsultList {
    fn from(insults: Vec<String>) -> Self {
        Self { insults }
    }
}

impl FromIterator<String> for InsultList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            insults: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> InsultList {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pick_index_in_range() {
        for millis in [0u128, 1, 7, 1_700_000_000_123, u128::MAX] {
            let idx = pick_index(5, millis).unwrap();
            assert!(idx < 5);
            assert_eq!(idx as u128, millis % 5);
        }
    }

    #[test]
    fn test_pick_index_empty() {
        assert_eq!(pick_index(0, 12345), None);
    }

    #[test]
    fn test_single_element_always_chosen() {
        let l = list(&["only one"]);
        assert_eq!(l.pick_at(0), Some("only one"));
        assert_eq!(l.pick_at(987_654_321), Some("only one"));
        assert_eq!(l.pick_now(), Some("only one"));
    }

    #[test]
    fn test_pick_at_is_deterministic() {
        let l = list(&["a", "b", "c"]);
        assert_eq!(l.pick_at(4), Some("b"));
        assert_eq!(l.pick_at(4), l.pick_at(4));
        let now = l.pick_now().unwrap();
        assert!(l.iter().any(|i| i == now));
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut l = InsultList::new();
        l.extend(vec!["x".to_string(), "y".to_string()]);
        l.extend(vec!["z".to_string()]);
        assert_eq!(l.iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&list(&["a", "b"])).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
