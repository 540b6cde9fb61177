//! Dumping a derived struct.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use std::error::Error;
use var_dumper::dump_serialize;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: Option<String>,
    scores: Vec<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: Some("alice@example.com".to_string()),
            scores: vec![9.5, 7.0],
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: None,
            scores: vec![],
        },
    ];

    println!("{}", dump_serialize(&users)?);

    Ok(())
}
