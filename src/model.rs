use serde_json::{Map, Value};
use uuid::Uuid;

/// One stored squirrel.
///
/// Records are open JSON objects rather than a closed struct: clients may
/// attach fields beyond `id`, `name` and `size`, and those must survive a
/// load/save round trip untouched.
pub type Record = Map<String, Value>;

/// Build a fresh record with a generated id and the two required fields.
pub fn new_record(name: &str, size: &str) -> Record {
    let mut record = Record::new();
    record.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    record.insert("name".to_string(), Value::String(name.to_string()));
    record.insert("size".to_string(), Value::String(size.to_string()));
    record
}

/// String-typed id comparison. The requested id is never parsed into a
/// number; a stored numeric id matches by its decimal rendering.
pub fn matches_id(record: &Record, id: &str) -> bool {
    match record.get("id") {
        Some(Value::String(stored)) => stored == id,
        Some(Value::Number(stored)) => stored.to_string() == id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn matches_stored_string_id() {
        let r = record(json!({"id": "7", "name": "Nina", "size": "M"}));
        assert!(matches_id(&r, "7"));
        assert!(!matches_id(&r, "8"));
    }

    #[test]
    fn matches_stored_numeric_id_by_decimal_rendering() {
        let r = record(json!({"id": 1, "name": "Nutmeg", "size": "smol"}));
        assert!(matches_id(&r, "1"));
        assert!(!matches_id(&r, "01"));
    }

    #[test]
    fn record_without_id_never_matches() {
        assert!(!matches_id(&Record::new(), "1"));
    }

    #[test]
    fn new_record_carries_required_fields() {
        let r = new_record("Newt", "medium");
        assert_eq!(r.get("name"), Some(&json!("Newt")));
        assert_eq!(r.get("size"), Some(&json!("medium")));
        assert!(r.get("id").and_then(Value::as_str).is_some());
    }
}
