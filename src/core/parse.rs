//! Grid references such as `"C7"`: a row letter followed by a 1-based column.

use alloc::string::{String, ToString};

use super::common::ParseError;
use super::coordinate::Coordinate;

/// Parse a grid reference against `alphabet`, where the n-th letter names
/// row n. Letters match case-insensitively. The result is not bounds
/// checked against any grid.
pub fn parse_coordinate(input: &str, alphabet: &str) -> Result<Coordinate, ParseError> {
    let input = input.trim();
    let mut chars = input.chars();
    let row_ch = chars.next().ok_or(ParseError::Empty)?;
    let row = alphabet
        .chars()
        .position(|a| a.eq_ignore_ascii_case(&row_ch))
        .ok_or(ParseError::InvalidRow(row_ch))?;

    let col_str = chars.as_str();
    let digits_only = col_str.bytes().all(|b| b.is_ascii_digit());
    let col: i32 = match col_str.parse() {
        Ok(n) if digits_only && n > 0 => n,
        _ => return Err(ParseError::InvalidColumn(col_str.to_string())),
    };
    Ok(Coordinate::new(row as i32, col - 1))
}

/// Inverse of [`parse_coordinate`]. Returns `None` when the row has no
/// letter in `alphabet` or either index is negative.
pub fn format_coordinate(point: Coordinate, alphabet: &str) -> Option<String> {
    let row = usize::try_from(point.row).ok()?;
    if point.col < 0 {
        return None;
    }
    let letter = alphabet.chars().nth(row)?;
    Some(alloc::format!("{}{}", letter, point.col + 1))
}
