//! Java-style `.properties` codec.
//!
//! Parses flat `key=value` (or `key: value`) lines into an ordered mapping
//! of strings. `#` and `!` comment lines and blank lines are skipped, and a
//! duplicated key keeps its last assignment. Encoding writes one `key=value`
//! line per entry in map order; nested mappings have no representation in
//! this format and are rejected.

use super::scalar_text;
use serde_json::{Map, Value};

pub fn decode(input: &str) -> Result<Value, String> {
    let mut map = Map::new();

    for (number, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let at = match (line.find('='), line.find(':')) {
            (Some(eq), Some(colon)) => eq.min(colon),
            (Some(eq), None) => eq,
            (None, Some(colon)) => colon,
            (None, None) => {
                return Err(format!("line {}: expected 'key=value'", number + 1));
            }
        };

        let key = line[..at].trim_end();
        if key.is_empty() {
            return Err(format!("line {}: empty property key", number + 1));
        }
        let value = line[at + 1..].trim_start();
        map.insert(key.to_string(), Value::String(value.to_string()));
    }

    Ok(Value::Object(map))
}

pub fn encode(value: &Value) -> Result<String, String> {
    let Value::Object(map) = value else {
        return Err("properties documents must be a mapping of keys to values".to_string());
    };

    let mut out = String::new();
    for (key, value) in map {
        let text = scalar_text(value).ok_or_else(|| {
            format!("key '{key}' holds a nested value, which .properties cannot represent")
        })?;
        out.push_str(key);
        out.push('=');
        out.push_str(&text);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_basic_pairs() {
        let doc = decode("host=localhost\nport=5432\n").unwrap();
        assert_eq!(doc, json!({"host": "localhost", "port": "5432"}));
    }

    #[test]
    fn test_decode_preserves_line_order() {
        let doc = decode("zebra=1\napple=2\nmango=3\n").unwrap();
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_decode_colon_separator() {
        let doc = decode("host: localhost\n").unwrap();
        assert_eq!(doc, json!({"host": "localhost"}));
    }

    #[test]
    fn test_decode_first_separator_wins() {
        // '=' before ':' splits on '='; the rest stays in the value.
        let doc = decode("url=jdbc:postgresql://db:5432/app\n").unwrap();
        assert_eq!(doc, json!({"url": "jdbc:postgresql://db:5432/app"}));
    }

    #[test]
    fn test_decode_skips_comments_and_blank_lines() {
        let input = "# database settings\n\n! legacy comment\nhost=localhost\n";
        let doc = decode(input).unwrap();
        assert_eq!(doc, json!({"host": "localhost"}));
    }

    #[test]
    fn test_decode_trims_around_separator() {
        let doc = decode("  host =  localhost  \n").unwrap();
        assert_eq!(doc, json!({"host": "localhost"}));
    }

    #[test]
    fn test_decode_dotted_keys_stay_flat() {
        let doc = decode("db.host=localhost\ndb.port=5432\n").unwrap();
        assert_eq!(doc, json!({"db.host": "localhost", "db.port": "5432"}));
    }

    #[test]
    fn test_decode_duplicate_key_last_assignment_wins() {
        let doc = decode("host=first\nhost=second\n").unwrap();
        assert_eq!(doc, json!({"host": "second"}));
    }

    #[test]
    fn test_decode_empty_value_allowed() {
        let doc = decode("flag=\n").unwrap();
        assert_eq!(doc, json!({"flag": ""}));
    }

    #[test]
    fn test_decode_rejects_line_without_separator() {
        let err = decode("host=localhost\ngarbage\n").unwrap_err();
        assert!(err.contains("line 2"));
    }

    #[test]
    fn test_decode_rejects_empty_key() {
        let err = decode("=value\n").unwrap_err();
        assert!(err.contains("empty property key"));
    }

    #[test]
    fn test_encode_writes_lines_in_map_order() {
        let doc = json!({"zebra": "1", "apple": "2"});
        assert_eq!(encode(&doc).unwrap(), "zebra=1\napple=2\n");
    }

    #[test]
    fn test_encode_renders_scalars_as_text() {
        let doc = json!({"port": 8080, "debug": true, "empty": null});
        assert_eq!(encode(&doc).unwrap(), "port=8080\ndebug=true\nempty=\n");
    }

    #[test]
    fn test_encode_rejects_nested_mapping() {
        let doc = json!({"db": {"host": "localhost"}});
        let err = encode(&doc).unwrap_err();
        assert!(err.contains("db"));
    }

    #[test]
    fn test_encode_rejects_non_mapping_document() {
        assert!(encode(&json!(["a", "b"])).is_err());
    }

    #[test]
    fn test_round_trip() {
        let input = "host=localhost\nport=5432\ndb.name=app\n";
        let doc = decode(input).unwrap();
        assert_eq!(encode(&doc).unwrap(), input);
    }
}
