#![cfg(test)]

use std::any::Any;

use super::*;

#[test]
fn test_cast() {
    let value: Box<dyn Any> = Box::new(42_i32);
    assert_eq!(cast::<i32>(value.as_ref()), Ok(42));
    assert_eq!(
        cast::<i64>(value.as_ref()),
        Err(ClassCastError {
            expected: "i64"
        }),
        "Casts shouldn't widen numbers."
    );

    let text: &dyn Any = &String::from("text");
    assert_eq!(cast::<String>(text).as_deref(), Ok("text"));
    assert!(
        cast::<bool>(text)
            .unwrap_err()
            .to_string()
            .ends_with("bool")
    );
}

#[test]
fn test_is_instance() {
    let value: &dyn Any = &'x';
    assert!(is_instance::<char>(value));
    assert!(!is_instance::<String>(value));
}

#[test]
fn test_primitives() {
    assert_eq!(primitive_name::<u8>(), Some("u8"));
    assert_eq!(primitive_name::<f64>(), Some("f64"));
    assert_eq!(primitive_name::<()>(), Some("()"));
    assert_eq!(primitive_name::<String>(), None);
    assert!(is_primitive::<bool>());
    assert!(!is_primitive::<str>());
    assert!(!is_primitive::<Vec<u8>>());
}
