//! Backward tag-signature recognition.
//!
//! A Premark tag signature sits immediately *before* its opening bracket:
//!
//! ```text
//! some prose note type="warn"<Be careful>
//!            \__________________/
//!             remainder | signature
//! ```
//!
//! When the parser reaches an unescaped `<`, everything buffered since the
//! previous tag boundary is handed to [`recognize`], which scans it from the
//! end **backward** and splits it into the tag name, the ordered attribute
//! map, and the remainder text lying before the signature. The grammar,
//! anchored at the end of the buffer, is:
//!
//! ```text
//! SIGNATURE := TAGNAME (WS KEY '=' '"' VALUE '"')*
//! ```
//!
//! where `TAGNAME` and `KEY` are maximal runs of non-whitespace characters
//! and `VALUE` is any run of characters up to an unescaped quote.
//!
//! Recognition is total: malformed input degrades instead of failing. An
//! unterminated quote swallows the rest of the buffer as its value (and the
//! unfinished pair is dropped), a buffer with no whitespace boundary yields a
//! tag spanning the whole buffer with an empty remainder, and a buffer that
//! is entirely attribute-shaped yields an empty tag name.

use crate::AttrMap;

/// Result of recognizing the tail of a buffered run of characters.
///
/// `remainder` borrows from the input buffer; the parser turns it into a text
/// node (or drops it) before the buffer is cleared.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Signature<'a> {
    /// The recognized tag name. Empty when the buffer held no tag token.
    pub tag: String,
    /// Attributes in document order, rightmost occurrence of a key winning.
    pub attributes: AttrMap,
    /// Everything before the signature, up to and including the whitespace
    /// that terminated the tag name. Empty when the signature spans the
    /// whole buffer.
    pub remainder: &'a str,
}

/// What the scanner is accumulating at the current (right-to-left) position.
///
/// The quoted-value overlay and the tag accumulator are tracked outside this
/// enum: a quote suspends any state until its partner is found, and the tag
/// buffer is sticky so accumulation resumes if an intervening `key="value"`
/// pair completes. Both follow from the fixed precedence of the character
/// classes: value-close, then key boundary, then `=`, then tag boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Between tokens; nothing attribute-shaped in progress.
    Scanning,
    /// An `=` was seen; the key lies further left.
    SeekingKey,
    /// Accumulating a key name.
    InKey,
}

/// Scans `buffer` from the end backward and extracts the trailing tag
/// signature. Never fails.
pub(crate) fn recognize(buffer: &str) -> Signature<'_> {
    // All accumulators collect characters in reverse scan order and are
    // reversed on finalization.
    let mut tag: Vec<char> = Vec::new();
    let mut key: Vec<char> = Vec::new();
    let mut value: Vec<char> = Vec::new();
    // Pairs complete rightmost-first; they are replayed in reverse (document
    // order) into the map at the end.
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut state = State::Scanning;
    let mut in_value = false;
    let mut remainder = "";

    for (idx, ch) in buffer.char_indices().rev() {
        // A quote suspends everything else until its partner; quotes never
        // escape a quote internally.
        if in_value {
            if ch == '"' {
                in_value = false;
            } else {
                value.push(ch);
            }
            continue;
        }
        if ch == '"' {
            in_value = true;
            continue;
        }
        match state {
            State::InKey => {
                if ch.is_whitespace() {
                    pairs.push((drain_reversed(&mut key), drain_reversed(&mut value)));
                    state = State::Scanning;
                } else {
                    key.push(ch);
                }
            }
            State::SeekingKey => {
                if !ch.is_whitespace() {
                    key.push(ch);
                    state = State::InKey;
                }
            }
            State::Scanning => {
                if ch == '=' {
                    state = State::SeekingKey;
                } else if !tag.is_empty() {
                    if ch.is_whitespace() {
                        // Tag name finalized; everything up to and including
                        // this whitespace is the remainder.
                        remainder = &buffer[..idx + ch.len_utf8()];
                        break;
                    }
                    tag.push(ch);
                } else if !ch.is_whitespace() {
                    tag.push(ch);
                }
            }
        }
    }

    // Replay completed pairs in document order; IndexMap keeps the first
    // occurrence's position while the later insert overwrites the value,
    // which is exactly "rightmost wins". A pair still unfinished when the
    // buffer ran out is dropped.
    let mut attributes = AttrMap::new();
    for (k, v) in pairs.into_iter().rev() {
        attributes.insert(k, v);
    }

    Signature {
        tag: tag.into_iter().rev().collect(),
        attributes,
        remainder,
    }
}

fn drain_reversed(chars: &mut Vec<char>) -> String {
    chars.drain(..).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::{recognize, Signature};
    use crate::AttrMap;

    fn attrs(pairs: &[(&str, &str)]) -> AttrMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_buffer() {
        let sig = recognize("");
        assert_eq!(
            sig,
            Signature {
                tag: String::new(),
                attributes: AttrMap::new(),
                remainder: "",
            }
        );
    }

    #[test]
    fn test_bare_tag_spans_whole_buffer() {
        let sig = recognize("hello");
        assert_eq!(sig.tag, "hello");
        assert!(sig.attributes.is_empty());
        assert_eq!(sig.remainder, "");
    }

    #[test]
    fn test_tag_is_last_token() {
        let sig = recognize("some prose note");
        assert_eq!(sig.tag, "note");
        assert_eq!(sig.remainder, "some prose ");
    }

    #[test]
    fn test_single_attribute() {
        let sig = recognize(r#"note type="warn""#);
        assert_eq!(sig.tag, "note");
        assert_eq!(sig.attributes, attrs(&[("type", "warn")]));
        assert_eq!(sig.remainder, "");
    }

    #[test]
    fn test_multiple_attributes_in_document_order() {
        let sig = recognize(r#"intro a img width="10" height="20""#);
        assert_eq!(sig.tag, "img");
        assert_eq!(sig.remainder, "intro a ");
        let keys: Vec<_> = sig.attributes.keys().cloned().collect();
        assert_eq!(keys, vec!["width", "height"]);
        assert_eq!(sig.attributes.get("height"), Some("20"));
    }

    #[test]
    fn test_duplicate_key_rightmost_wins() {
        let sig = recognize(r#"e a="1" a="2""#);
        assert_eq!(sig.tag, "e");
        assert_eq!(sig.attributes, attrs(&[("a", "2")]));
    }

    #[test]
    fn test_value_may_contain_anything_but_quote() {
        let sig = recognize(r#"e msg="a <b> = c""#);
        assert_eq!(sig.tag, "e");
        assert_eq!(sig.attributes.get("msg"), Some("a <b> = c"));
    }

    #[test]
    fn test_empty_value() {
        let sig = recognize(r#"e a="""#);
        assert_eq!(sig.attributes, attrs(&[("a", "")]));
    }

    #[test]
    fn test_unterminated_quote_swallows_buffer() {
        // Scanning backward, `1` starts the tag and the lone quote then opens
        // a value that runs to the buffer start; no pair ever completes.
        let sig = recognize(r#"e a="1"#);
        assert_eq!(sig.tag, "1");
        assert!(sig.attributes.is_empty());
        assert_eq!(sig.remainder, "");
    }

    #[test]
    fn test_attribute_only_buffer_has_empty_tag() {
        let sig = recognize(r#" a="1""#);
        assert_eq!(sig.tag, "");
        assert_eq!(sig.attributes, attrs(&[("a", "1")]));
        assert_eq!(sig.remainder, "");
    }

    #[test]
    fn test_unfinished_pair_at_buffer_start_is_dropped() {
        // No whitespace ever terminates the key, so the pair never completes.
        let sig = recognize(r#"a="1""#);
        assert_eq!(sig.tag, "");
        assert!(sig.attributes.is_empty());
    }

    #[test]
    fn test_whitespace_boundary_included_in_remainder() {
        let sig = recognize("x\they");
        assert_eq!(sig.tag, "hey");
        assert_eq!(sig.remainder, "x\t");
    }

    #[test]
    fn test_multibyte_remainder_boundary() {
        let sig = recognize("héllo wörld");
        assert_eq!(sig.tag, "wörld");
        assert_eq!(sig.remainder, "héllo ");
    }

    #[test]
    fn test_tag_resumes_after_intervening_pair() {
        // Degenerate but deterministic: the tag accumulator is sticky, so a
        // completed pair wedged against the tag token glues the outer runs
        // together.
        let sig = recognize(r#"e a="1"x"#);
        assert_eq!(sig.tag, "ex");
        assert_eq!(sig.attributes, attrs(&[("a", "1")]));
    }

    #[test]
    fn test_whitespace_only_buffer() {
        let sig = recognize("   ");
        assert_eq!(sig.tag, "");
        assert!(sig.attributes.is_empty());
        assert_eq!(sig.remainder, "");
    }
}
