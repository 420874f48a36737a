use log::warn;

/// A line-breaking policy for paragraph text.
///
/// The template wraps by character count rather than by measured text width;
/// [`CharWrap`] implements that policy. Callers that want width-aware
/// wrapping can supply their own implementation to
/// [`Engine::with_line_breaker`](crate::Engine::with_line_breaker) as a
/// drop-in replacement.
pub trait LineBreaker {
    /// Split `text` into display lines of at most `max_chars` characters.
    /// Blank input produces no lines.
    fn break_lines(&self, text: &str, max_chars: usize) -> Vec<String>;
}

/// The default character-count wrapping policy.
///
/// Words are accumulated into a line buffer; when appending the next word
/// would push the line past `max_chars`, the line is flushed and the word
/// starts the next line. A single word longer than `max_chars` is truncated
/// to `max_chars` characters and the clipped remainder is logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharWrap;

impl LineBreaker for CharWrap {
    fn break_lines(&self, text: &str, max_chars: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();
        let mut line_chars = 0usize;

        for word in text.split_whitespace() {
            let mut word_chars = word.chars().count();
            let mut word = word;
            if word_chars > max_chars {
                let clip = word
                    .char_indices()
                    .nth(max_chars)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                warn!(
                    "clipping over-long word at {} characters, losing {:?}",
                    max_chars,
                    &word[clip..]
                );
                word = &word[..clip];
                word_chars = max_chars;
            }

            if line.is_empty() {
                line.push_str(word);
                line_chars = word_chars;
            } else if line_chars + 1 + word_chars > max_chars {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_chars = word_chars;
            } else {
                line.push(' ');
                line.push_str(word);
                line_chars += 1 + word_chars;
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_word_is_a_single_line() {
        let lines = CharWrap.break_lines("hello", 20);
        assert_eq!(lines, vec!["hello".to_string()]);
    }

    #[test]
    fn blank_input_produces_no_lines() {
        assert!(CharWrap.break_lines("", 20).is_empty());
        assert!(CharWrap.break_lines("   \t  ", 20).is_empty());
    }

    #[test]
    fn lines_never_exceed_the_threshold() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        for max in [8, 12, 20, 40] {
            for line in CharWrap.break_lines(text, max) {
                assert!(
                    line.chars().count() <= max,
                    "line {line:?} exceeds {max} chars"
                );
            }
        }
    }

    #[test]
    fn wrapping_preserves_word_order() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let lines = CharWrap.break_lines(text, 13);
        let rejoined = lines.join(" ");
        let words: Vec<&str> = rejoined.split_whitespace().collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(words, original);
    }

    #[test]
    fn over_long_word_is_truncated_to_the_threshold() {
        let lines = CharWrap.break_lines("ab pneumonoultramicroscopic cd", 10);
        assert_eq!(lines[0], "ab");
        assert_eq!(lines[1], "pneumonoul");
        assert_eq!(lines[2], "cd");
    }
}
