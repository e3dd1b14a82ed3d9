//! Tokenizer and typed argument parsing.
//!
//! Command arguments arrive as a whitespace-delimited token list. The rule
//! used throughout the ledger: when a command's last token is meant to be
//! numeric, all preceding tokens join with single spaces to form the name;
//! when no numeric token is expected, all tokens join to form the name.

use crate::error::ArgError;
use crate::types::ScoreName;

/// Split raw command text into argument tokens.
///
/// Runs of whitespace collapse into token boundaries, matching how chat
/// transports deliver arguments.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Parse an argument list where every token belongs to the name.
pub fn parse_name(tokens: &[String]) -> Result<ScoreName, ArgError> {
    ScoreName::join(tokens).ok_or(ArgError::MissingName)
}

/// Parse an argument list of the shape `<name...> <delta>`.
///
/// All tokens but the last form the name; the last must parse as `i64`.
pub fn parse_name_delta(tokens: &[String]) -> Result<(ScoreName, i64), ArgError> {
    if tokens.len() < 2 {
        return Err(ArgError::MissingDelta);
    }
    let (last, name_tokens) = tokens.split_last().expect("len checked above");
    let delta: i64 = last
        .parse()
        .map_err(|_| ArgError::InvalidDelta(last.clone()))?;
    let name = ScoreName::join(name_tokens).expect("at least one name token");
    Ok((name, delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn toks(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  Alice   Lee  5 "), toks(&["Alice", "Lee", "5"]));
    }

    #[test]
    fn test_parse_name_joins_all_tokens() {
        let name = parse_name(&toks(&["Alice", "Lee"])).unwrap();
        assert_eq!(name.as_str(), "Alice Lee");
    }

    #[test]
    fn test_parse_name_empty() {
        assert_eq!(parse_name(&[]), Err(ArgError::MissingName));
    }

    #[test]
    fn test_parse_name_delta() {
        let (name, delta) = parse_name_delta(&toks(&["Alice", "Lee", "-10"])).unwrap();
        assert_eq!(name.as_str(), "Alice Lee");
        assert_eq!(delta, -10);
    }

    #[test]
    fn test_parse_name_delta_too_few_tokens() {
        assert_eq!(parse_name_delta(&[]), Err(ArgError::MissingDelta));
        assert_eq!(parse_name_delta(&toks(&["Alice"])), Err(ArgError::MissingDelta));
    }

    #[test]
    fn test_parse_name_delta_non_numeric() {
        assert_eq!(
            parse_name_delta(&toks(&["Alice", "abc"])),
            Err(ArgError::InvalidDelta("abc".to_string()))
        );
    }

    #[test]
    fn test_numeric_name_token_stays_in_name() {
        // Only the final token is the delta; earlier numeric tokens are name.
        let (name, delta) = parse_name_delta(&toks(&["7", "of", "9", "3"])).unwrap();
        assert_eq!(name.as_str(), "7 of 9");
        assert_eq!(delta, 3);
    }

    proptest! {
        #[test]
        fn parse_name_delta_accepts_any_i64(delta in any::<i64>(), name in "[A-Za-z]{1,12}") {
            let tokens = vec![name.clone(), delta.to_string()];
            let (parsed_name, parsed_delta) = parse_name_delta(&tokens).unwrap();
            prop_assert_eq!(parsed_name.as_str(), name.as_str());
            prop_assert_eq!(parsed_delta, delta);
        }

        #[test]
        fn tokenize_then_join_is_single_spaced(raw in "[A-Za-z ]{0,30}") {
            let tokens = tokenize(&raw);
            if let Some(name) = ScoreName::join(&tokens) {
                prop_assert!(!name.as_str().contains("  "));
            }
        }
    }
}
