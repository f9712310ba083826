//! Text codec for generator state.
//!
//! Format: `#` + tag + backtick + `~`-separated upper-case hexadecimal words
//! + closing backtick. A three-word generator tagged `TriR` serialises as
//! `` #TriR`1A2B~0~FFFFFFFFFFFFFFFF` ``.
//!
//! Parsing is positional: the tag runs from after `#` to the first backtick,
//! and the payload runs from there to the final backtick, which must end the
//! text (surrounding whitespace is ignored).

use crate::types::{GeneratorError, Result};

const TAG_PREFIX: char = '#';
const DELIMITER: char = '`';
const SEPARATOR: &str = "~";

/// Encodes `tag` and `words` into the serialised text form.
pub fn encode<I>(tag: &str, words: I) -> String
where
    I: IntoIterator<Item = u64>,
{
    let body = words
        .into_iter()
        .map(|word| format!("{:X}", word))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    format!("{}{}{}{}{}", TAG_PREFIX, tag, DELIMITER, body, DELIMITER)
}

/// Extracts the tag from serialised text without decoding the payload.
///
/// # Errors
///
/// `MalformedState` if the text lacks the `#` prefix, the opening backtick,
/// or a non-empty tag.
pub fn parse_tag(text: &str) -> Result<&str> {
    let text = text.trim_start();
    let rest = text
        .strip_prefix(TAG_PREFIX)
        .ok_or_else(|| malformed("expected leading '#'"))?;
    let end = rest
        .find(DELIMITER)
        .ok_or_else(|| malformed("missing opening backtick"))?;
    let tag = &rest[..end];
    if tag.is_empty() {
        return Err(malformed("empty tag"));
    }
    Ok(tag)
}

/// Decodes serialised text into its tag and state words.
///
/// # Errors
///
/// `MalformedState` on any structural problem or a word that is not 1 to 16
/// hexadecimal digits.
pub fn decode(text: &str) -> Result<(&str, Vec<u64>)> {
    let text = text.trim();
    let tag = parse_tag(text)?;
    // '#' + tag, then the opening backtick.
    let open = TAG_PREFIX.len_utf8() + tag.len();
    let close = text.len() - DELIMITER.len_utf8();
    if !text.ends_with(DELIMITER) || close <= open {
        return Err(malformed("missing closing backtick"));
    }

    let words = text[open + 1..close]
        .split(SEPARATOR)
        .map(parse_word)
        .collect::<Result<Vec<_>>>()?;
    Ok((tag, words))
}

/// Decodes `text` and checks it against the target type.
///
/// # Errors
///
/// `MalformedState` if decoding fails, the tag differs from `expected_tag`,
/// or the word count differs from `expected_count`.
pub fn decode_for(text: &str, expected_tag: &str, expected_count: usize) -> Result<Vec<u64>> {
    let (tag, words) = decode(text)?;
    if tag != expected_tag {
        return Err(GeneratorError::MalformedState(format!(
            "tag {} cannot be decoded as {}",
            tag, expected_tag
        )));
    }
    if words.len() != expected_count {
        return Err(GeneratorError::MalformedState(format!(
            "{} expects {} state words, found {}",
            expected_tag,
            expected_count,
            words.len()
        )));
    }
    Ok(words)
}

fn parse_word(hex: &str) -> Result<u64> {
    if hex.is_empty() || hex.len() > 16 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(GeneratorError::MalformedState(format!(
            "'{}' is not a hexadecimal state word",
            hex
        )));
    }
    u64::from_str_radix(hex, 16)
        .map_err(|e| GeneratorError::MalformedState(format!("'{}': {}", hex, e)))
}

fn malformed(reason: &str) -> GeneratorError {
    GeneratorError::MalformedState(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_format() {
        let text = encode("TriR", [0x1A2B, 0, u64::MAX]);
        assert_eq!(text, "#TriR`1A2B~0~FFFFFFFFFFFFFFFF`");
    }

    #[test]
    fn test_decode_accepts_lower_case() {
        let (tag, words) = decode("#DisR`deadbeef`").unwrap();
        assert_eq!(tag, "DisR");
        assert_eq!(words, vec![0xDEAD_BEEF]);
    }

    #[test]
    fn test_decode_tolerates_surrounding_whitespace() {
        let (tag, words) = decode("  #TriR`1~2~3`\n").unwrap();
        assert_eq!(tag, "TriR");
        assert_eq!(words, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag("#TriR`1~2~3`").unwrap(), "TriR");
        assert!(parse_tag("TriR`1~2~3`").is_err());
        assert!(parse_tag("#TriR").is_err());
        assert!(parse_tag("#`1`").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_payloads() {
        for text in [
            "#TriR`1~2~3",
            "#TriR`",
            "#TriR`1~~3`",
            "#TriR`1~xyz~3`",
            "#TriR`+1~2~3`",
            "#TriR`1~2~10000000000000000`",
            "#TriR`1~2~3`trailing",
        ] {
            let result = decode(text);
            assert!(
                matches!(result, Err(GeneratorError::MalformedState(_))),
                "expected malformed error for {:?}, got {:?}",
                text,
                result
            );
        }
    }

    #[test]
    fn test_decode_for_checks_tag_and_count() {
        assert_eq!(decode_for("#TriR`1~2~3`", "TriR", 3).unwrap(), vec![1, 2, 3]);

        let err = decode_for("#DisR`1`", "TriR", 3).unwrap_err();
        assert!(err.to_string().contains("cannot be decoded as TriR"));

        let err = decode_for("#TriR`1~2`", "TriR", 3).unwrap_err();
        assert!(err.to_string().contains("expects 3 state words, found 2"));
    }
}
