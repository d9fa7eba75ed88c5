// Bindings is the mapping from hole name to optional captured text that a
// single match attempt produces. It is a small insertion-order-preserving
// map: insertion order matters only so that the CLI's NDJSON output is
// deterministic, not for matching correctness.
//
// A `HashMap` would lose that ordering, and pulling in a third crate like
// `indexmap` for what is, at match-engine scale, a handful of entries would
// be overkill — a linear `Vec<(String, Option<String>)>` is the idiomatic
// choice here.
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: Vec<(String, Option<String>)>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings {
            entries: Vec::new(),
        }
    }

    /// Record a capture, overwriting any previous value for `name` in place
    /// (first-seen position is kept; the last successful capture for a
    /// repeated name wins).
    pub(crate) fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Record `None` for an optional hole that was skipped, but only if the
    /// name isn't already bound — a consuming branch that bound it earlier
    /// in the backtracking search must not be clobbered by a later skip.
    pub(crate) fn set_if_absent(&mut self, name: &str, value: Option<String>) {
        if !self.entries.iter().any(|(n, _)| n == name) {
            self.entries.push((name.to_string(), value));
        }
    }

    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }
}

// Hand-written `Serialize` so that key order follows insertion order
// regardless of whether `serde_json`'s `preserve_order` feature is enabled —
// `serialize_map` writes keys in the order the iterator yields them.
impl Serialize for Bindings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_first_seen_position() {
        let mut b = Bindings::new();
        b.set("x", Some("1".into()));
        b.set("y", Some("2".into()));
        b.set("x", Some("3".into()));
        let collected: Vec<_> = b.iter().collect();
        assert_eq!(collected, vec![("x", Some("3")), ("y", Some("2"))]);
    }

    #[test]
    fn set_if_absent_does_not_clobber() {
        let mut b = Bindings::new();
        b.set("ext", Some("k".into()));
        b.set_if_absent("ext", None);
        assert_eq!(b.get("ext"), Some(Some("k")));
    }

    #[test]
    fn serializes_as_compact_ordered_object() {
        let mut b = Bindings::new();
        b.set("greeting", Some("world".into()));
        b.set("age", None);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"greeting":"world","age":null}"#);
    }
}
