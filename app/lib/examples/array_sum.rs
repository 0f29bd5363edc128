//! Sort, search, and SIMD-add a handful of values.
//!
//! Run with: cargo run --example array_sum --release

use simd_practice::{binary_search, SimdDispatcher, SortAlgorithm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = SimdDispatcher::detect();
    println!("=== SIMD Array Sum ===\n");
    println!("  SIMD level:  {}", dispatcher.level());

    let mut values: Vec<u16> = vec![4_821, 17, 60_002, 903, 17, 33_333, 2, 12_345, 777, 5_150];
    SortAlgorithm::Merge.sort(&mut values);
    println!("  Sorted:      {:?}", values);

    let target = values[values.len() / 2];
    match binary_search(&values, &target) {
        Some(index) => println!("  Found {} at index {}", target, index),
        None => println!("  {} not found", target),
    }

    let src1 = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0];
    let src2 = [10, 20, 30, 40, 50, 60, 70, 80, 0, 0];
    let mut dst = [0; 10];
    let written = dispatcher.vector_add(&src1, &src2, &mut dst, 8)?;

    let sums: Vec<String> = dst[..written].iter().map(|v| v.to_string()).collect();
    println!("  Sums:        {}", sums.join(" "));

    Ok(())
}
