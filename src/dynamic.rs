//! Loosely typed entry points over [`serde_json::Value`].
//!
//! Callers that receive arrays from JSON (the CLI, scripting bridges) cannot
//! rely on the type system to guarantee an array-like input.  These helpers
//! reject anything but a JSON array with an `InvalidArgument` error
//! before the generator state is touched.

use serde_json::Value;

use crate::error::{PseudoRandomError, Result};
use crate::generator::PseudoRandom;

fn as_array(value: &Value) -> Result<&[Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(PseudoRandomError::not_array)
}

/// Parses `text` as an arbitrary JSON value.
pub fn parse_value(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|err| PseudoRandomError::Decode(err.to_string()))
}

/// [`PseudoRandom::shuffle`] for a JSON value.
pub fn shuffle_value(random: &mut PseudoRandom, value: &Value) -> Result<Value> {
    let items = as_array(value)?;
    Ok(Value::Array(random.shuffle(items)))
}

/// [`PseudoRandom::shuffle_from_current`] for a JSON value.
pub fn shuffle_from_current_value(random: &mut PseudoRandom, value: &Value) -> Result<Value> {
    let items = as_array(value)?;
    Ok(Value::Array(random.shuffle_from_current(items)))
}

/// [`PseudoRandom::seed_sort`] for a JSON value.
pub fn seed_sort_value(random: &mut PseudoRandom, value: &Value) -> Result<Value> {
    let items = as_array(value)?;
    Ok(Value::Array(random.seed_sort(items)))
}

/// [`PseudoRandom::seed_unsort`] for a JSON value.
pub fn seed_unsort_value(random: &mut PseudoRandom, value: &Value) -> Result<Value> {
    let items = as_array(value)?;
    Ok(Value::Array(random.seed_unsort(items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_non_arrays_without_touching_seed() {
        let mut random = PseudoRandom::new(123).unwrap();
        random.next_f64();
        let before = random.seed();
        for value in [json!(null), json!(42), json!("x"), json!({"a": 1})] {
            assert_eq!(
                shuffle_value(&mut random, &value).unwrap_err(),
                PseudoRandomError::not_array()
            );
            assert!(shuffle_from_current_value(&mut random, &value).is_err());
            assert!(seed_sort_value(&mut random, &value).is_err());
            assert!(seed_unsort_value(&mut random, &value).is_err());
        }
        assert_eq!(random.seed(), before);
    }

    #[test]
    fn test_mixed_value_round_trip() {
        let mut random = PseudoRandom::new(123).unwrap();
        let original = json!([1, "two", null, {"four": 4}, [5]]);
        let sorted = seed_sort_value(&mut random, &original).unwrap();
        assert_eq!(sorted, json!([null, [5], 1, {"four": 4}, "two"]));
        assert_eq!(seed_unsort_value(&mut random, &sorted).unwrap(), original);
    }

    #[test]
    fn test_shuffle_value_fixture() {
        let mut random = PseudoRandom::new(123).unwrap();
        let shuffled = shuffle_value(&mut random, &json!([1, 2, 3, 4, 5])).unwrap();
        assert_eq!(shuffled, json!([3, 5, 1, 4, 2]));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("[1, 2]").unwrap(), json!([1, 2]));
        let scalar = parse_value("42").unwrap();
        let mut random = PseudoRandom::new(1).unwrap();
        assert_eq!(
            seed_sort_value(&mut random, &scalar).unwrap_err(),
            PseudoRandomError::not_array()
        );
        assert!(matches!(
            parse_value("[1,").unwrap_err(),
            PseudoRandomError::Decode(_)
        ));
    }

    #[test]
    fn test_shuffle_from_current_value_advances() {
        let mut random = PseudoRandom::new(99).unwrap();
        let value = json!([1, 2, 3, 4, 5, 6]);
        let first = shuffle_from_current_value(&mut random, &value).unwrap();
        let second = shuffle_from_current_value(&mut random, &value).unwrap();
        assert_eq!(first, json!([6, 3, 4, 1, 5, 2]));
        assert_eq!(second, json!([5, 2, 6, 4, 1, 3]));
    }
}
