// Bracketed key flattening for nested composites
//
// RFC 6570 only defines one level of lists and associative arrays. When an
// exploded associative value holds another composite, it is written in the
// form-encoding style instead: `more[0]=fun&more[1]=ice%20cream`.

use super::encoding::encode;
use super::value::Value;

/// Flatten `value` under `key` into `&`-joined `key[..]=value` pairs
pub fn flatten_pairs(key: &str, value: &Value) -> String {
    let mut pairs = Vec::new();
    collect_pairs(key.to_string(), value, &mut pairs);
    pairs.join("&")
}

fn collect_pairs(key: String, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Scalar(scalar) => {
            pairs.push(format!("{}={}", encode(&key), encode(&scalar.to_string())));
        }
        Value::List(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_pairs(format!("{}[{}]", key, index), item, pairs);
            }
        }
        Value::Assoc(entries) => {
            for (sub_key, item) in entries {
                collect_pairs(format!("{}[{}]", key, sub_key), item, pairs);
            }
        }
    }
}
