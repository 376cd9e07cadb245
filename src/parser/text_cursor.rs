/// Character cursor over the puzzle source. The text always ends with a newline.
pub struct TextCursor {
    chars: Vec<char>,
    position: usize,
}

impl TextCursor {
    pub fn new(source: &str) -> Self {
        let mut chars: Vec<char> = source.chars().collect();
        if chars.last() != Some(&'\n') {
            chars.push('\n');
        }
        Self { chars, position: 0 }
    }

    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    /// Consumes characters while `predicate` holds and returns them.
    pub fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            taken.push(c);
            self.position += 1;
        }
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_trailing_newline() {
        let mut cursor = TextCursor::new("ab");
        assert_eq!(cursor.next_char(), Some('a'));
        assert_eq!(cursor.peek_at(1), Some('\n'));
        assert_eq!(cursor.next_char(), Some('b'));
        assert_eq!(cursor.next_char(), Some('\n'));
        assert_eq!(cursor.next_char(), None);
    }

    #[test]
    fn test_empty_source_is_a_single_newline() {
        let cursor = TextCursor::new("");
        assert_eq!(cursor.peek(), Some('\n'));
    }

    #[test]
    fn test_take_while() {
        let mut cursor = TextCursor::new("abc12 rest");
        assert_eq!(cursor.take_while(|c| c.is_alphanumeric()), "abc12");
        assert_eq!(cursor.peek(), Some(' '));
    }
}
