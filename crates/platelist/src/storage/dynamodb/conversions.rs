//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting DynamoDB AttributeValue maps into
//! restaurant records. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Number, Value};

use platelist_core::restaurant::Restaurant;
use platelist_core::storage::StoreError;

/// Convert a DynamoDB item to a Restaurant.
pub fn item_to_restaurant(
    item: &HashMap<String, AttributeValue>,
) -> Result<Restaurant, StoreError> {
    let mut fields = Map::with_capacity(item.len());
    for (name, value) in item {
        fields.insert(name.clone(), attribute_to_value(value)?);
    }
    Ok(Restaurant(fields))
}

/// Convert a single AttributeValue to a JSON value.
///
/// Strings stay strings, numbers become numeric, nested lists and maps
/// recurse. Binary payloads are base64-encoded strings, matching the
/// JSON-safe form most clients expect.
fn attribute_to_value(value: &AttributeValue) -> Result<Value, StoreError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(list) => list.iter().map(attribute_to_value).collect(),
        AttributeValue::M(map) => {
            let mut object = Map::with_capacity(map.len());
            for (name, nested) in map {
                object.insert(name.clone(), attribute_to_value(nested)?);
            }
            Ok(Value::Object(object))
        }
        AttributeValue::Ss(strings) => Ok(Value::Array(
            strings.iter().map(|s| Value::String(s.clone())).collect(),
        )),
        AttributeValue::Ns(numbers) => numbers.iter().map(|n| parse_number(n)).collect(),
        AttributeValue::B(blob) => Ok(Value::String(STANDARD.encode(blob.as_ref()))),
        AttributeValue::Bs(blobs) => Ok(Value::Array(
            blobs
                .iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        )),
        other => Err(StoreError::InvalidData(format!(
            "Unsupported attribute value: {:?}",
            other
        ))),
    }
}

/// Parse a DynamoDB number string into a JSON number.
///
/// DynamoDB transmits numbers as strings. Integers that fit i64/u64 stay
/// integral; everything else goes through f64.
fn parse_number(n: &str) -> Result<Value, StoreError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::Number(Number::from(i)));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::Number(Number::from(u)));
    }

    let f: f64 = n
        .parse()
        .map_err(|_| StoreError::InvalidData(format!("Invalid number: {}", n)))?;
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| StoreError::InvalidData(format!("Invalid number: {}", n)))
}
