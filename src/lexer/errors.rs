use std::fmt;
use thiserror::Error;

/// 1-based line and column of a character in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn start() -> Self {
        Self::new(1, 1)
    }

    /// Step past `ch`. A newline moves to the first column of the next line.
    pub fn step(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexer error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unrecognized input '{fragment}' at {pos}")]
    UnrecognizedInput { fragment: String, pos: Position },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_tracks_lines_and_columns() {
        let mut pos = Position::default();
        for ch in "ab\ncd".chars() {
            pos.step(ch);
        }
        assert_eq!(pos, Position::new(2, 3));
        assert_eq!(pos.to_string(), "2:3");
    }
}
