// src/parse/credits.rs

use crate::error::ExtractError;

/// Decode the credit value hidden in a credits cell.
///
/// The visible cell text is a placeholder; the portal writes the number with
/// `<!-- document.write(Math.round(X*10)/10); //-->`. Splitting that markup
/// on `.` gives `["... document", "write(Math", "round(X", ...]`, and the last
/// character of the third segment is the value. Only single-digit integer
/// values survive this; `10` decodes as `0`.
pub fn decode_credits(raw: &str) -> Result<u32, ExtractError> {
    raw.split('.')
        .nth(2)
        .and_then(|segment| segment.chars().last())
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| ExtractError::InvalidCredits(raw.to_string()))
}
