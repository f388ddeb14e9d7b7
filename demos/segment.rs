use std::io::Read;

use segrule::{query, FieldSchema, InMemoryStore, Segmenter};
use tracing_subscriber::EnvFilter;

const CATALOG: &str = r#"[
    {"id": 101, "title": "Galaxy S24", "price": 6499, "stock_status": "instock",
     "stock_quantity": 12, "category": "Smartphones", "tags": ["featured"], "on_sale": true},
    {"id": 102, "title": "Pixel 8a", "price": 3999, "stock_status": "instock",
     "stock_quantity": 3, "category": "Smartphones"},
    {"id": 103, "title": "Studio Headphones", "price": 1299, "stock_status": "outofstock",
     "category": "Audio", "tags": ["summer"]},
    {"id": 104, "title": "Ultrabook 14", "price": 8999, "stock_status": "onbackorder",
     "stock_quantity": 0, "category": "Laptops", "created_at": "2024-03-01T09:30:00Z"}
]"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Rules come from stdin, one per line; try `echo "price > 5000" | cargo run --example segment`.
    let mut rules = String::new();
    std::io::stdin()
        .read_to_string(&mut rules)
        .expect("failed to read rules from stdin");

    let store = InMemoryStore::from_json_str(CATALOG).expect("invalid demo catalog");
    let segmenter = Segmenter::new(FieldSchema::catalog(), store);
    println!("{segmenter}");

    let predicate = match segmenter.compile(&rules) {
        Ok(predicate) => predicate,
        Err(err) => {
            eprintln!("{}: {err}", err.kind());
            std::process::exit(1);
        }
    };
    println!("Query: {}", query::to_document(&predicate));

    match segmenter.evaluate_predicate(&predicate) {
        Ok(result) => {
            println!("Result: {result}");
            for product in result.products() {
                println!("  #{} {}", product.id, product.title);
            }
        }
        Err(err) => {
            eprintln!("{}: {err}", err.kind());
            std::process::exit(1);
        }
    }
}
