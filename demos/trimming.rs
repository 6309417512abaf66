//! Boundary-preserving whitespace trimming.
//!
//! Run with: cargo run --example trimming

use premark::{parse, parse_with_options, to_xml, ParseOptions};

fn main() {
    let source = "   label<   hi there   >   ";

    let verbatim = parse(source);
    let trimmed = parse_with_options(source, ParseOptions::trimmed());

    println!("Source:    {:?}", source);
    println!("Verbatim:  {:?}", to_xml(&verbatim));
    println!("Trimmed:   {:?}", to_xml(&trimmed));

    // Whitespace-only fragments vanish under trim; interior fragments keep a
    // single representative space on each edge that had whitespace.
    assert_eq!(to_xml(&trimmed), "<label> hi there </label>");
}
