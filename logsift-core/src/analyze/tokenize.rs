/// Whitespace stand-in used while splitting; cannot occur in log text.
const SENTINEL: char = '\0';

/// Splits one raw, newline-stripped log line into its field tokens.
///
/// Whitespace inside `"…"`-quoted and `[…]`-bracketed spans must not split a
/// field, so the line is rewritten in three passes: mask inner whitespace
/// with a sentinel, split on the whitespace that is left, then restore the
/// sentinel and drop the quote decoration. Brackets stay on the timestamp
/// token; the record parser expects them literally.
///
/// Malformed lines simply yield fewer tokens than the record parser wants.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut masked = String::with_capacity(line.len());
    let mut in_quotes = false;
    let mut in_brackets = false;

    for ch in line.chars() {
        match ch {
            '"' if !in_brackets => {
                in_quotes = !in_quotes;
                masked.push(ch);
            }
            '[' if !in_quotes => {
                in_brackets = true;
                masked.push(ch);
            }
            ']' if !in_quotes => {
                in_brackets = false;
                masked.push(ch);
            }
            ch if ch.is_whitespace() && (in_quotes || in_brackets) => {
                masked.push(SENTINEL);
            }
            ch => masked.push(ch),
        }
    }

    masked
        .split_whitespace()
        .map(|token| token.replace(SENTINEL, " ").replace('"', ""))
        .collect()
}
