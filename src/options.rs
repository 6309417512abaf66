//! Configuration options for Premark parsing.
//!
//! This module provides [`ParseOptions`], which controls how text fragments
//! are handled as they are attached to the tree.
//!
//! ## Examples
//!
//! ```rust
//! use premark::{parse_with_options, ParseOptions};
//!
//! // Whitespace-trimmed parsing
//! let options = ParseOptions::trimmed();
//! let tree = parse_with_options("  label<  hi  >", options);
//! assert_eq!(tree.len(), 1);
//! ```

/// Configuration options for parsing.
///
/// The only knob today is the whitespace-trim policy, but the struct is the
/// extension point for future parsing behavior.
///
/// # Examples
///
/// ```rust
/// use premark::ParseOptions;
///
/// // Default: keep text fragments exactly as written
/// let options = ParseOptions::new();
/// assert!(!options.trim);
///
/// // Boundary-preserving trim
/// let options = ParseOptions::trimmed();
/// assert!(options.trim);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// When set, every text fragment is boundary-trimmed before it becomes a
    /// text node: interior content is trimmed, at most one space survives on
    /// each side where the fragment had leading/trailing whitespace, and
    /// fragments that trim to nothing are dropped entirely.
    pub trim: bool,
}

impl ParseOptions {
    /// Creates default options (no trimming).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::ParseOptions;
    ///
    /// let options = ParseOptions::new();
    /// assert!(!options.trim);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with boundary-preserving trimming enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::{parse_with_options, ParseOptions};
    ///
    /// let tree = parse_with_options("   ", ParseOptions::trimmed());
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub fn trimmed() -> Self {
        ParseOptions { trim: true }
    }

    /// Sets the trim flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_trim(true);
    /// assert!(options.trim);
    /// ```
    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}
