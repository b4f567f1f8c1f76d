//! Tests for the public prelude.
//!
//! Exercises every export through `rotated::prelude::*` the way a downstream
//! user would, without the `dev` feature.

use rotated::prelude::*;

/// Test the builder workflow through the prelude alias.
#[test]
fn test_prelude_builder_workflow() {
    let finder = Pivot::new()
        .verify_rotation()
        .return_min()
        .build()
        .expect("build ok");

    let result = finder.find(&[5, 7, 9, 1, 2, 3]).expect("find ok");
    assert_eq!(result.pivot, 3);
    assert_eq!(result.min, Some(1));
}

/// Test that every free function is reachable and coherent.
#[test]
fn test_prelude_free_functions() {
    let values = [3, 4, 5, 1, 2];

    let pivot = find_pivot(&values).expect("pivot ok");
    assert_eq!(pivot, 3);
    assert_eq!(min_index(&values).expect("min ok"), pivot);
    assert_eq!(max_index(&values).expect("max ok"), 2);

    assert_eq!(search_rotated(&values, &4).expect("search ok"), Some(1));
    assert_eq!(search_ascending(&[1, 2, 3], &2), Some(1));
    assert_eq!(linear_search(&values, &1), Some(3));

    let mut buf = [1, 2, 3];
    reverse_in_place(&mut buf);
    assert_eq!(buf, [3, 2, 1]);
    running_sum_in_place(&mut buf);
    assert_eq!(buf, [3, 5, 6]);
    assert_eq!(running_sum(&[1, 2, 3, 4]), vec![1, 3, 6, 10]);

    assert_eq!(reverse_digits(-120i32).expect("digits ok"), -21);
    assert!(is_palindrome_number(1221i64));
    assert_eq!(factorial(6u64).expect("factorial ok"), 720);
    assert_eq!(binomial(6u64, 2u64).expect("binomial ok"), 15);
}

/// Test that errors are the shared crate error type.
#[test]
fn test_prelude_error_type() {
    let empty: [i32; 0] = [];
    let err: RotatedError = find_pivot(&empty).unwrap_err();
    assert_eq!(err, RotatedError::EmptyInput);
    assert_eq!(format!("{err}"), "Input sequence is empty");
}
