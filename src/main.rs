//! Contact table demo program
//!
//! Replays the reference contact scenario and prints the table after each step.

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use contact_table::{Contact, HashTable, HashTableBuilder, TableResult};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn describe(result: Option<&Contact>) -> String {
    match result {
        Some(contact) => contact.to_string(),
        None => "Not found".to_string(),
    }
}

fn print_table(table: &HashTable) {
    println!("\n{}", table.dump());
}

fn run() -> TableResult<()> {
    println!("--- Starting Hash Table Tests ---");
    let mut table = HashTableBuilder::new().bucket_count(10).try_build()?;
    print_table(&table);

    println!("\n--- Inserting John and Rebecca ---");
    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");
    print_table(&table);

    println!("\nSearch result for 'John': {}", describe(table.search("John")));

    // "Amy" and "May" are anagrams, so both land in bucket 5
    println!("\n--- Inserting Amy and May (Collision Test) ---");
    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");
    print_table(&table);

    println!("\n--- Updating Rebecca's Number ---");
    table.insert("Rebecca", "999-444-9999");
    print_table(&table);

    println!(
        "\nSearch result for updated 'Rebecca': {}",
        describe(table.search("Rebecca"))
    );
    println!(
        "\nSearch result for 'Chris' (Not Found): {}",
        describe(table.search("Chris"))
    );

    match serde_json::to_string_pretty(&table.snapshot()) {
        Ok(json) => println!("\n--- Snapshot ---\n{}", json),
        Err(err) => tracing::warn!("failed to serialize snapshot: {}", err),
    }

    info!(contacts = table.len(), "demo finished");
    Ok(())
}

fn main() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("contact-table: {}", err);
        std::process::exit(1);
    }
}
