//! End-to-end container walkthrough.
//!
//! Demonstrates: push → insert → erase → pop → front/back → reserve →
//! resize → shrink_to_fit → clear, printing contents and counts after each
//! step. Set `RUST_LOG=ferrovec_buffer=trace` to see reallocations.

use std::error::Error;

use ferrovec_bench::summary;
use ferrovec_buffer::Vector;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut vec: Vector<i32> = Vector::new();
    println!("Initial vector:");
    println!("Size: {}, Capacity: {}", vec.len(), vec.capacity());

    vec.push(1);
    vec.push(2);
    vec.push(3);
    println!("Vector after push operations:\n{}", summary(&vec)?);

    vec.insert(1, 10);
    println!("Vector after insert at index 1:\n{}", summary(&vec)?);

    vec.erase(2);
    println!("Vector after erase at index 2:\n{}", summary(&vec)?);

    vec.pop();
    println!("Vector after pop:\n{}", summary(&vec)?);

    if let (Some(front), Some(back)) = (vec.front(), vec.back()) {
        println!("Front element: {front}");
        println!("Back element: {back}");
    }

    vec.reserve(10);
    println!("Vector after reserving capacity 10:");
    println!("Size: {}, Capacity: {}", vec.len(), vec.capacity());

    vec.resize(6);
    println!("Vector after resize to 6 elements:\n{}", summary(&vec)?);

    vec.shrink_to_fit();
    println!("Vector after shrink_to_fit:");
    println!("Size: {}, Capacity: {}", vec.len(), vec.capacity());

    match vec.at(42) {
        Ok(value) => println!("Element 42: {value}"),
        Err(err) => println!("Checked access failed: {err}"),
    }

    vec.clear();
    println!("Vector after clear:");
    println!("Size: {}, Capacity: {}", vec.len(), vec.capacity());

    if vec.is_empty() {
        println!("Vector is now empty.");
    }
    Ok(())
}
