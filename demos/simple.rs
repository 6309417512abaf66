//! Basic Premark parsing.
//!
//! Run with: cargo run --example simple

use premark::parse;

fn main() {
    let source = r#"Remember to call person id="7"<Alice> about the deadline<Friday>."#;

    let tree = parse(source);

    println!("Source:\n{}\n", source);
    println!("Parsed {} top-level nodes:", tree.len());
    for node in &tree {
        match node.as_element() {
            Some(element) => {
                println!(
                    "  element <{}> with {} attribute(s), {} child(ren)",
                    element.tag,
                    element.attributes.len(),
                    element.children.len()
                );
            }
            None => println!("  text {:?}", node.as_text().unwrap()),
        }
    }
}
