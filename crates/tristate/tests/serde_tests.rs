// Serialization tests, only built with the `serde` feature
#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use tristate::{Either, ErrorCode, Maybe, MonadError, Unit};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    nickname: Maybe<String>,
    balance: Either<String, i64>,
}

#[test]
fn test_maybe_json_shape() {
    let some = serde_json::to_value(Maybe::some(3)).unwrap();
    assert_eq!(some, serde_json::json!({ "Some": 3 }));

    let none = serde_json::to_value(Maybe::<i32>::none()).unwrap();
    assert_eq!(none, serde_json::json!("None"));
}

#[test]
fn test_struct_round_trip() {
    let profile = Profile {
        name: "ada".to_string(),
        nickname: Maybe::none(),
        balance: Either::Right(120),
    };

    let encoded = serde_json::to_string(&profile).unwrap();
    let decoded: Profile = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, profile);
}

#[test]
fn test_neither_decodes() {
    let decoded: Either<String, i64> = serde_json::from_str("\"Neither\"").unwrap();
    assert!(decoded.is_neither());
}

#[test]
fn test_error_code_and_unit_serialize() {
    let code = serde_json::to_value(MonadError::invalid_argument("value").code()).unwrap();
    assert_eq!(code, serde_json::json!(1001));
    assert_eq!(serde_json::from_value::<ErrorCode>(code).unwrap(), ErrorCode(1001));

    assert_eq!(serde_json::to_value(Unit).unwrap(), serde_json::Value::Null);
}
