//! Token and token-kind definitions for the ROOT/theory surface syntax.

/// The nine punctuation symbols plus the four composite kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    StringLiteral,
    NumberLiteral,
    Comment,
    Equal,
    Plus,
    LeftParen,
    RightParen,
    LeftSquareParen,
    RightSquareParen,
    Comma,
    Hash,
    Asterisk,
}

impl TokenKind {
    /// Human-readable name used in parse error messages, matching the
    /// vocabulary the grammar itself uses (quoted punctuation, bare names
    /// for composite kinds).
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::NumberLiteral => "NumberLiteral",
            TokenKind::Comment => "Comment",
            TokenKind::Equal => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::LeftSquareParen => "'['",
            TokenKind::RightSquareParen => "']'",
            TokenKind::Comma => "','",
            TokenKind::Hash => "'#'",
            TokenKind::Asterisk => "'*'",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single lexed token: its kind, its decoded lexeme, and the 0-indexed
/// line its first character appeared on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self { kind, lexeme: lexeme.into(), line }
    }

    /// True for tokens that can stand in for a "name" in the grammar
    /// (identifier or string literal).
    pub fn is_name(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::StringLiteral)
    }
}

/// Maps a single-character punctuation rune onto its token kind, mirroring
/// the fixed symbol table the lexer dispatches punctuation through.
pub fn punctuation_kind(c: char) -> Option<TokenKind> {
    match c {
        '=' => Some(TokenKind::Equal),
        '+' => Some(TokenKind::Plus),
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '[' => Some(TokenKind::LeftSquareParen),
        ']' => Some(TokenKind::RightSquareParen),
        ',' => Some(TokenKind::Comma),
        '#' => Some(TokenKind::Hash),
        '*' => Some(TokenKind::Asterisk),
        _ => None,
    }
}
