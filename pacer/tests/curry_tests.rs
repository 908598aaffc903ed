// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::{curry2, curry3, curry4};

fn add3(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

fn volume(l: u64, w: u64, h: u64) -> u64 {
    l * w * h
}

#[test]
fn test_curry3_unary_chain() {
    assert_eq!(curry3(add3)(1)(2)(3), 6);
}

#[test]
fn test_curry3_matches_uncurried_call() {
    assert_eq!(volume(2, 3, 4), curry3(volume)(2)(3)(4));
}

#[test]
fn test_partial_application_is_reusable() {
    // Arrange
    let volume_with_2 = curry3(volume)(2);
    let volume_with_2_and_3 = volume_with_2(3);

    // Act & Assert
    assert_eq!(volume_with_2_and_3(4), 24);
    assert_eq!(volume_with_2_and_3(5), 30);
    assert_eq!(volume_with_2(10)(1), 20);
}

#[test]
fn test_arguments_applied_in_call_order() {
    // Arrange
    let join = curry4(|a: &str, b: &str, c: &str, d: &str| format!("{a}{b}{c}{d}"));

    // Act & Assert
    assert_eq!(join("w")("x")("y")("z"), "wxyz");
}

#[test]
fn test_curry2_with_owned_arguments() {
    // Arrange
    let greet = curry2(|greeting: String, name: String| format!("{greeting}, {name}!"));
    let hello = greet("Hello".to_string());

    // Act & Assert
    assert_eq!(hello("Alice".to_string()), "Hello, Alice!");
    assert_eq!(hello("Bob".to_string()), "Hello, Bob!");
}

#[test]
fn test_curried_closure_sees_captured_state() {
    // Arrange
    let offset = 100;
    let add_with_offset = curry2(move |a: i32, b: i32| a + b + offset);

    // Act & Assert
    assert_eq!(add_with_offset(1)(2), 103);
}
