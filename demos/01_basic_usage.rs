//! Example 01: Basic Usage
//!
//! This example walks through the store operations: add, toggle, edit,
//! remove, plus the duplicate-title rejection.
//!
//! Run with: cargo run --example 01_basic_usage

use eyre::Result;
use tasklist::{EditTask, Renderer, StoreError, TaskStore};

fn main() -> Result<()> {
    let renderer = Renderer::new(true);
    let mut store = TaskStore::new();

    println!("TaskList Basic Usage Example");
    println!("============================\n");

    // ADD: Two new tasks
    println!("1. ADD - Adding tasks...");
    let milk = store.add("Buy milk")?;
    store.add("Water plants")?;
    println!("   Added task with ID: {}\n", milk);
    print!("{}", renderer.list(&store));
    println!();

    // DUPLICATE: Same title is rejected
    println!("2. DUPLICATE - Adding \"Buy milk\" again...");
    match store.add("Buy milk") {
        Ok(_) => println!("   Unexpectedly accepted!"),
        Err(StoreError::DuplicateTitle { title }) => {
            println!("   Rejected: \"{}\" already exists", title);
        }
    }
    println!("   Count is still {}\n", store.count());

    // TOGGLE: Mark done
    println!("3. TOGGLE - Marking \"Buy milk\" done...");
    store.toggle_done(milk);
    print!("{}", renderer.list(&store));
    println!();

    // EDIT: Rename, done flag is kept
    println!("4. EDIT - Renaming to \"Buy oat milk\"...");
    store.edit(EditTask::new(milk, "Buy oat milk"));
    print!("{}", renderer.list(&store));
    println!();

    // REMOVE: Drop the task
    println!("5. REMOVE - Removing the task...");
    store.remove(milk);
    print!("{}", renderer.list(&store));
    println!();

    println!("Example complete!");
    Ok(())
}
