//! Terminal output sanitization utilities
//!
//! # Security: Terminal Injection Prevention
//!
//! Prompt content comes straight out of JSONL session logs, so it is
//! user-controlled data. Echoing it back unsanitized would let a stored ANSI
//! escape sequence clear the screen, move the cursor, or restyle the terminal.
//! Commands that print stored content (`search`) render it through
//! [`snippet`], which strips escape codes and flattens the text to one line.

/// Strips ANSI escape codes from a string
///
/// Removes ANSI CSI (Control Sequence Introducer) escape codes that could
/// affect terminal display, plus other control characters like bell (\x07)
/// and backspace (\x08).
///
/// # Examples
///
/// ```
/// use ai_prompt_archive::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    // Remove ANSI CSI sequences: ESC [ ... (letter)
    // Pattern: \x1b\[([0-9;]*)[A-Za-z]
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // Check for CSI sequence: ESC [
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we find a letter (end of CSI sequence)
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        // Filter out other control characters (except tab, newline, carriage return)
        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Renders stored prompt content as a single safe display line
///
/// Takes the first non-blank line of the prompt, strips ANSI escape codes,
/// and truncates to `max_chars` characters with a `...` marker. Truncation
/// counts characters rather than bytes so multi-byte content never gets cut
/// mid-codepoint.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    let clean = strip_ansi_codes(first_line.trim());

    let mut result: String = clean.chars().take(max_chars).collect();
    if clean.chars().count() > max_chars {
        result.push_str("...");
    }
    result
}
