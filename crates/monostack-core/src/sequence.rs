use crate::error::{MonoError, MonoResult};

/// Parses a sequence such as `1 4 3 2`, `1,4,3,2` or `[1, 4, 3, 2]`.
///
/// Blank input is the empty sequence.
pub fn parse_sequence(input: &str) -> MonoResult<Vec<i64>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| MonoError::Parse {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}
