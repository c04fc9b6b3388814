//! Word-count and read-time estimation for blog posts.

/// Reading speed used for read-time estimation.
pub const WORDS_PER_MINUTE: i32 = 200;

/// Number of whitespace-delimited tokens in `content`.
pub fn word_count(content: &str) -> i32 {
    content.split_whitespace().count() as i32
}

/// Estimated reading time in minutes: `ceil(word_count / 200)`.
pub fn read_time(word_count: i32) -> i32 {
    word_count.max(0).div_ceil(WORDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_whitespace_delimited_tokens() {
        assert_eq!(word_count("a slate bed plays true"), 5);
        assert_eq!(word_count("  tabs\tand\nnewlines  count "), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn four_hundred_words_read_in_two_minutes() {
        let content = "word ".repeat(400);
        let words = word_count(&content);
        assert_eq!(words, 400);
        assert_eq!(read_time(words), 2);
    }

    #[test]
    fn read_time_rounds_up() {
        assert_eq!(read_time(0), 0);
        assert_eq!(read_time(1), 1);
        assert_eq!(read_time(200), 1);
        assert_eq!(read_time(201), 2);
        assert_eq!(read_time(399), 2);
    }
}
