//! Building a tree by hand and rendering it.
//!
//! Run with: cargo run --example render_xml

use premark::{to_xml, tree, Element};

fn main() {
    let forest = tree![
        "see ",
        Element::new("a")
            .with_attr("href", "/docs")
            .with_attr("target", "_blank")
            .with_child("the docs"),
        " and ",
        Element::new("hr"),
    ];

    let xml = to_xml(&forest);
    println!("{}", xml);
    assert_eq!(
        xml,
        r#"see <a href="/docs" target="_blank">the docs</a> and <hr/>"#
    );

    // Trees also serialize as data via serde.
    let json = serde_json::to_string_pretty(&forest).unwrap();
    println!("{}", json);
}
