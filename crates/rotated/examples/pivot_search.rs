//! Comprehensive Pivot Search Examples
//!
//! This example demonstrates the rotated-sequence toolkit:
//! - Basic pivot search with minimal configuration
//! - Opt-in shape verification and probe diagnostics
//! - Searching for values across the rotation point
//! - The linear scan companions (extrema, reversal, running sums)
//! - Digit tricks and combinatorics
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use rotated::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), RotatedError> {
    println!("{}", "=".repeat(80));
    println!("rotated - Pivot Search Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_basic_pivot()?;
    example_2_verification_and_probes()?;
    example_3_rotated_search()?;
    example_4_scan_companions()?;
    example_5_digits_and_combinatorics()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Pivot Search
/// Demonstrates the simplest usage with minimal configuration
fn example_1_basic_pivot() -> Result<(), RotatedError> {
    println!("Example 1: Basic Pivot Search");
    println!("{}", "-".repeat(80));

    let finder = Pivot::new().return_min().build()?;

    for values in [
        vec![7, 9, 1, 2, 3],
        vec![3, 4, 5, 1, 2],
        vec![1, 2, 3, 4, 5],
        vec![5, 1, 2, 3, 4],
    ] {
        let result = finder.find(&values)?;
        println!(
            "  {:?} -> pivot {} (min {:?})",
            values, result.pivot, result.min
        );
    }

    /* Expected Output:
      [7, 9, 1, 2, 3] -> pivot 2 (min Some(1))
      [3, 4, 5, 1, 2] -> pivot 3 (min Some(1))
      [1, 2, 3, 4, 5] -> pivot 0 (min Some(1))
      [5, 1, 2, 3, 4] -> pivot 1 (min Some(1))
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Shape Verification and Probe Diagnostics
/// Pays O(n) up front to reject malformed input, and counts comparisons
fn example_2_verification_and_probes() -> Result<(), RotatedError> {
    println!("Example 2: Shape Verification and Probe Diagnostics");
    println!("{}", "-".repeat(80));

    let finder = Pivot::new()
        .verify_rotation()
        .return_min()
        .return_probes()
        .build()?;

    let values: Vec<i64> = (500..1000).chain(0..500).collect();
    let result = finder.find(&values)?;
    println!("{}", result);

    // Malformed input is rejected instead of silently missearched.
    match finder.find(&[2, 2, 1, 2]) {
        Err(e) => println!("  Rejected [2, 2, 1, 2]: {}", e),
        Ok(_) => unreachable!(),
    }

    /* Expected Output:
    Pivot Summary:
      Sequence length: 1000
      Pivot index:     500
      Rotated:         yes
      Minimum:         0
      Probes:          11
      Shape verified:  yes

      Rejected [2, 2, 1, 2]: Duplicate values at index 1: pivot search requires distinct elements
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Searching Across the Rotation
/// O(log n) lookup without un-rotating the data
fn example_3_rotated_search() -> Result<(), RotatedError> {
    println!("Example 3: Searching Across the Rotation");
    println!("{}", "-".repeat(80));

    let values = [50, 70, 90, 10, 20, 30];
    for target in [90, 20, 55] {
        println!(
            "  search_rotated({:?}, {}) = {:?}",
            values,
            target,
            search_rotated(&values, &target)?
        );
    }

    /* Expected Output:
      search_rotated([50, 70, 90, 10, 20, 30], 90) = Some(2)
      search_rotated([50, 70, 90, 10, 20, 30], 20) = Some(4)
      search_rotated([50, 70, 90, 10, 20, 30], 55) = None
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Linear Scan Companions
/// Extrema, linear search, reversal, and running sums
fn example_4_scan_companions() -> Result<(), RotatedError> {
    println!("Example 4: Linear Scan Companions");
    println!("{}", "-".repeat(80));

    let values = [23, 45, 12, 67, 34, 9, 56];
    println!("  values:       {:?}", values);
    println!("  min at index: {}", min_index(&values)?);
    println!("  max at index: {}", max_index(&values)?);
    println!("  find 67:      {:?}", linear_search(&values, &67));

    let mut reversed = values;
    reverse_in_place(&mut reversed);
    println!("  reversed:     {:?}", reversed);
    println!("  running sums: {:?}", running_sum(&[1, 2, 3, 4]));

    /* Expected Output:
      values:       [23, 45, 12, 67, 34, 9, 56]
      min at index: 5
      max at index: 3
      find 67:      Some(3)
      reversed:     [56, 9, 34, 67, 12, 45, 23]
      running sums: [1, 3, 6, 10]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Digits and Combinatorics
/// Checked integer drills from the same collection
fn example_5_digits_and_combinatorics() -> Result<(), RotatedError> {
    println!("Example 5: Digits and Combinatorics");
    println!("{}", "-".repeat(80));

    println!("  reverse_digits(121)  = {}", reverse_digits(121i32)?);
    println!("  reverse_digits(-450) = {}", reverse_digits(-450i32)?);
    println!("  121 palindrome?        {}", is_palindrome_number(121i32));
    println!("  5C2  = {}", binomial(5u64, 2u64)?);
    println!("  10C3 = {}", binomial(10u64, 3u64)?);
    match binomial(10u64, 20u64) {
        Err(e) => println!("  10C20 rejected: {}", e),
        Ok(_) => unreachable!(),
    }

    /* Expected Output:
      reverse_digits(121)  = 121
      reverse_digits(-450) = -54
      121 palindrome?        true
      5C2  = 10
      10C3 = 120
      10C20 rejected: Invalid combination: r=20 exceeds n=10
    */

    println!();
    Ok(())
}
