/// Builds a [`Tree`](crate::Tree) from a comma-separated list of nodes.
///
/// Each item is converted via `Node::from`, so string literals become text
/// nodes and [`Element`](crate::Element) values become element nodes.
///
/// # Examples
///
/// ```rust
/// use premark::{tree, Element};
///
/// let forest = tree![
///     "intro ",
///     Element::new("note").with_attr("type", "warn").with_child("careful"),
/// ];
/// assert_eq!(forest.len(), 2);
/// ```
#[macro_export]
macro_rules! tree {
    () => {
        $crate::Tree::new()
    };
    ($($node:expr),+ $(,)?) => {
        vec![$($crate::Node::from($node)),+]
    };
}
