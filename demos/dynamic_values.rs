//! Building value graphs by hand, cycles and styling included.
//!
//! Run with: cargo run --example dynamic_values

use var_dumper::{
    dump, value, Ansi, DumpOptions, Dumper, Function, Mapping, Pattern, Sequence, Value,
};

fn main() {
    // Literal construction with the value! macro
    let config = value!({
        "host": "localhost",
        "port": 8080,
        "ratio": 0.75,
        "features": ["auth", "logging"],
        "10": "numeric-looking key",
        "proxy": null
    });
    println!("Config:\n{}\n", dump(&config));

    // Opaque values carry no content beyond their kind
    let handlers = Mapping::new();
    handlers.insert("on_click", Function::new("on_click", 1));
    handlers.insert("matcher", Pattern::new("^/api/v[0-9]+", "i"));
    handlers.insert("missing", Value::Undefined);
    println!("Handlers:\n{}\n", dump(&Value::from(handlers)));

    // A tree whose nodes point back at their parent
    let root = Mapping::new();
    let children = Sequence::new();
    for name in ["left", "right"] {
        let child = Mapping::new();
        child.insert("name", name);
        child.insert("parent", root.clone());
        children.push(child);
    }
    root.insert("name", "root");
    root.insert("children", children.clone());

    let dumper = Dumper::with_style(DumpOptions::new().with_indent(2), Ansi);
    println!("Tree:\n{}", dumper.dump(&Value::from(root.clone())));

    // Break the cycles so the nodes are freed
    children.clear();
}
