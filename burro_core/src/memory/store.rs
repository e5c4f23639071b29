use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A value stored in a vehicle memory channel.
///
/// The set is closed on purpose: parts across a vehicle only ever exchange
/// these shapes, so the scheduler can move them between channels without
/// knowing anything about the parts themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Explicit marker for a channel that has not been written yet
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to f64.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Convert to a `serde_json::Value` for parts that speak JSON
    /// (web dashboards, record/replay tooling). Bytes become a JSON array
    /// of numbers; `Absent` becomes JSON null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Absent => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Value::from(*f),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => serde_json::Value::from(b.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
        }
    }

    /// Build a `Value` from a `serde_json::Value`. JSON null maps to
    /// `Absent`; numbers become `Int` when they fit, `Float` otherwise.
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(_) => Value::Text(json.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "absent"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{:.3}", v),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::List(items) => write!(f, "<list of {}>", items.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// The shared named-value store for one vehicle.
///
/// All channel traffic between parts goes through here: the drive loop reads
/// each part's declared inputs, runs the part, and writes its declared
/// outputs back. A single lock serializes access, so the store is safe to
/// share between the drive loop and background workers.
///
/// There are no transactional semantics across a `get`/`put` pair; a
/// concurrent writer may change a channel between one caller's `get` and its
/// later `put`.
#[derive(Debug, Default)]
pub struct Memory {
    slots: RwLock<HashMap<String, Value>>,
}

impl Memory {
    /// Create an empty memory.
    pub fn new() -> Self {
        Memory {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Read the given channels, one result per key in request order.
    ///
    /// A channel that has never been written yields [`Value::Absent`].
    pub fn get<K: AsRef<str>>(&self, keys: &[K]) -> Vec<Value> {
        let slots = self.slots.read();
        keys.iter()
            .map(|key| slots.get(key.as_ref()).cloned().unwrap_or(Value::Absent))
            .collect()
    }

    /// Write each value to its corresponding channel, in order.
    ///
    /// Later writes to the same key within one call overwrite earlier ones.
    ///
    /// # Panics
    ///
    /// Panics if `keys.len() != values.len()`. A mismatch means a part
    /// returned the wrong number of outputs for its declared channels, which
    /// is a programming error, not a runtime condition.
    pub fn put<K: AsRef<str>>(&self, keys: &[K], values: Vec<Value>) {
        assert_eq!(
            keys.len(),
            values.len(),
            "memory put: {} keys but {} values",
            keys.len(),
            values.len()
        );
        let mut slots = self.slots.write();
        for (key, value) in keys.iter().zip(values) {
            slots.insert(key.as_ref().to_string(), value);
        }
    }

    /// Read a single channel.
    pub fn read(&self, key: &str) -> Value {
        self.slots
            .read()
            .get(key)
            .cloned()
            .unwrap_or(Value::Absent)
    }

    /// Write a single channel.
    pub fn write(&self, key: &str, value: Value) {
        self.slots.write().insert(key.to_string(), value);
    }

    /// Names of every channel written so far, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.slots.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_put_get_round_trip() {
        let mem = Memory::new();
        mem.put(
            &["throttle", "steering"],
            vec![Value::Float(0.5), Value::Float(-0.1)],
        );
        let values = mem.get(&["throttle", "steering"]);
        assert_eq!(values, vec![Value::Float(0.5), Value::Float(-0.1)]);
    }

    #[test]
    fn test_get_unwritten_returns_absent() {
        let mem = Memory::new();
        let values = mem.get(&["never_written"]);
        assert_eq!(values, vec![Value::Absent]);
    }

    #[test]
    fn test_get_preserves_request_order() {
        let mem = Memory::new();
        mem.put(&["a", "b"], vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(
            mem.get(&["b", "missing", "a"]),
            vec![Value::Int(2), Value::Absent, Value::Int(1)]
        );
    }

    #[test]
    fn test_later_write_wins_within_one_put() {
        let mem = Memory::new();
        mem.put(&["x", "x"], vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(mem.read("x"), Value::Int(2));
    }

    #[test]
    #[should_panic(expected = "memory put")]
    fn test_put_arity_mismatch_panics() {
        let mem = Memory::new();
        mem.put(&["a", "b"], vec![Value::Int(1)]);
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        let mem = Arc::new(Memory::new());
        let mut handles = Vec::new();
        for i in 0..4 {
            let mem = Arc::clone(&mem);
            handles.push(std::thread::spawn(move || {
                for n in 0..100 {
                    mem.write(&format!("chan{}", i), Value::Int(n));
                    let _ = mem.get(&["chan0", "chan1", "chan2", "chan3"]);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(mem.len(), 4);
        for i in 0..4 {
            assert_eq!(mem.read(&format!("chan{}", i)), Value::Int(99));
        }
    }

    #[test]
    fn test_json_round_trip() {
        let value = Value::List(vec![
            Value::Int(3),
            Value::Float(0.25),
            Value::Text("ok".to_string()),
            Value::Bool(true),
        ]);
        assert_eq!(Value::from_json(&value.to_json()), value);
        assert_eq!(Value::from_json(&serde_json::Value::Null), Value::Absent);
    }
}
