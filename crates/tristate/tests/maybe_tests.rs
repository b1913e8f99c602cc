// Maybe integration tests
// Construction, combinators and equality as seen from outside the crate

mod common;

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tristate::{Either, Maybe, MonadError, Unit};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_map_then_unwrap() {
    common::ensure_test_tracing();

    let doubled = Maybe::<i32>::new(5).map(|x| x * 2).some_or_default(0);
    assert_eq!(doubled, 10);
}

#[test]
fn test_present_input_is_some() {
    common::ensure_test_tracing();

    for value in [0, 1, -7, i64::MAX] {
        let maybe = Maybe::<i64>::new(value);
        assert!(maybe.is_some());
        assert_eq!(maybe.some_or_default(42), value);
    }
}

#[test]
fn test_absent_input_is_none() {
    common::ensure_test_tracing();

    let from_none = Maybe::<String>::new(None);
    let from_option: Maybe<String> = Option::<String>::None.into();

    assert!(from_none.is_none());
    assert!(from_option.is_none());
    assert_eq!(from_none, Maybe::default());
}

#[test]
fn test_strict_constructor_rejects_absent_input() {
    common::ensure_test_tracing();

    let err = Maybe::<u8>::try_some(None).unwrap_err();
    assert!(matches!(err, MonadError::InvalidArgument(_)));
    assert_eq!(err.error_code(), "TRISTATE_INVALID_ARGUMENT");
}

#[test]
fn test_shared_object_equality_and_hashing() {
    common::ensure_test_tracing();

    let shared = Arc::new(String::from("shared"));
    let other = Arc::new(String::from("other"));

    let first = Maybe::some(Arc::clone(&shared));
    let second = Maybe::some(Arc::clone(&shared));
    let third = Maybe::some(other);

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
    assert_ne!(first, third);

    let set: HashSet<Maybe<Arc<String>>> = [first, second, third].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_none_values_are_equal() {
    let a: Maybe<Vec<u8>> = Maybe::none();
    let b: Maybe<Vec<u8>> = Maybe::default();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_conversions_to_either() {
    common::ensure_test_tracing();

    let right: Either<&str, i32> = Maybe::some(1).to_either("absent");
    let left: Either<&str, i32> = Maybe::none().to_either("absent");
    assert_eq!(right, Either::Right(1));
    assert_eq!(left, Either::Left("absent"));

    let left_view = Maybe::some("value").to_left_either_unit();
    assert_eq!(left_view, Either::<&str, Unit>::Left("value"));
    assert_eq!(Maybe::<&str>::none().to_left_either_unit(), Either::Right(Unit));
}

#[test]
fn test_select_many_projection_without_value_fails() {
    common::ensure_test_tracing();

    let result: tristate::Result<Maybe<String>> =
        Maybe::some("a").select_many(|_| Maybe::some("b"), |_, _| Option::<String>::None);
    let err = result.unwrap_err();
    assert!(matches!(err, MonadError::InvalidOperation(_)));
}
