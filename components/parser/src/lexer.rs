//! JavaScript Lexer - tokenizes source code into tokens
//!
//! Tokens are produced lazily, one per call to [`Lexer::next_token`].
//! Comments and significant line breaks are emitted as "extra" tokens; the
//! parser decides whether a line break terminates a statement.

use crate::error::LexErrorKind;
use core_types::{SourcePosition, Span};
use serde::Serialize;

/// JavaScript keyword types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    /// await keyword
    Await,
    /// break keyword
    Break,
    /// case keyword
    Case,
    /// catch keyword
    Catch,
    /// class keyword
    Class,
    /// const keyword
    Const,
    /// continue keyword
    Continue,
    /// default keyword
    Default,
    /// delete keyword
    Delete,
    /// do keyword
    Do,
    /// else keyword
    Else,
    /// export keyword
    Export,
    /// extends keyword
    Extends,
    /// false keyword
    False,
    /// finally keyword
    Finally,
    /// for keyword
    For,
    /// function keyword
    Function,
    /// if keyword
    If,
    /// import keyword
    Import,
    /// in keyword
    In,
    /// instanceof keyword
    Instanceof,
    /// let keyword
    Let,
    /// new keyword
    New,
    /// null keyword
    Null,
    /// return keyword
    Return,
    /// super keyword
    Super,
    /// switch keyword
    Switch,
    /// this keyword
    This,
    /// throw keyword
    Throw,
    /// true keyword
    True,
    /// try keyword
    Try,
    /// typeof keyword
    Typeof,
    /// undefined is reserved in this dialect
    Undefined,
    /// var keyword
    Var,
    /// void keyword
    Void,
    /// while keyword
    While,
    /// yield keyword
    Yield,
}

impl Keyword {
    /// Look up a reserved word. Contextual words (`async`, `get`, `of`, ...)
    /// are not keywords.
    pub fn lookup(word: &str) -> Option<Keyword> {
        let keyword = match word {
            "await" => Keyword::Await,
            "break" => Keyword::Break,
            "case" => Keyword::Case,
            "catch" => Keyword::Catch,
            "class" => Keyword::Class,
            "const" => Keyword::Const,
            "continue" => Keyword::Continue,
            "default" => Keyword::Default,
            "delete" => Keyword::Delete,
            "do" => Keyword::Do,
            "else" => Keyword::Else,
            "export" => Keyword::Export,
            "extends" => Keyword::Extends,
            "false" => Keyword::False,
            "finally" => Keyword::Finally,
            "for" => Keyword::For,
            "function" => Keyword::Function,
            "if" => Keyword::If,
            "import" => Keyword::Import,
            "in" => Keyword::In,
            "instanceof" => Keyword::Instanceof,
            "let" => Keyword::Let,
            "new" => Keyword::New,
            "null" => Keyword::Null,
            "return" => Keyword::Return,
            "super" => Keyword::Super,
            "switch" => Keyword::Switch,
            "this" => Keyword::This,
            "throw" => Keyword::Throw,
            "true" => Keyword::True,
            "try" => Keyword::Try,
            "typeof" => Keyword::Typeof,
            "undefined" => Keyword::Undefined,
            "var" => Keyword::Var,
            "void" => Keyword::Void,
            "while" => Keyword::While,
            "yield" => Keyword::Yield,
            _ => return None,
        };
        Some(keyword)
    }

    /// Source text of the keyword
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Await => "await",
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Class => "class",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Default => "default",
            Keyword::Delete => "delete",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Export => "export",
            Keyword::Extends => "extends",
            Keyword::False => "false",
            Keyword::Finally => "finally",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::In => "in",
            Keyword::Instanceof => "instanceof",
            Keyword::Let => "let",
            Keyword::New => "new",
            Keyword::Null => "null",
            Keyword::Return => "return",
            Keyword::Super => "super",
            Keyword::Switch => "switch",
            Keyword::This => "this",
            Keyword::Throw => "throw",
            Keyword::True => "true",
            Keyword::Try => "try",
            Keyword::Typeof => "typeof",
            Keyword::Undefined => "undefined",
            Keyword::Var => "var",
            Keyword::Void => "void",
            Keyword::While => "while",
            Keyword::Yield => "yield",
        }
    }
}

/// JavaScript punctuators (operators and delimiters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Punctuator {
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Opening brace
    LBrace,
    /// Closing brace
    RBrace,
    /// Opening bracket
    LBracket,
    /// Closing bracket
    RBracket,
    /// Semicolon
    Semicolon,
    /// Comma
    Comma,
    /// Dot
    Dot,
    /// Colon
    Colon,
    /// Question mark
    Question,
    /// Assignment
    Assign,
    /// Arrow function
    Arrow,
    /// Plus
    Plus,
    /// Minus
    Minus,
    /// Multiply
    Star,
    /// Divide
    Slash,
    /// Modulo
    Percent,
    /// Equality
    EqEq,
    /// Strict equality
    EqEqEq,
    /// Inequality
    NotEq,
    /// Strict inequality
    NotEqEq,
    /// Less than
    Lt,
    /// Less than or equal
    LtEq,
    /// Greater than
    Gt,
    /// Greater than or equal
    GtEq,
    /// Logical AND
    AndAnd,
    /// Logical OR
    OrOr,
    /// Logical NOT
    Not,
    /// Bitwise AND
    And,
    /// Bitwise OR
    Or,
    /// Bitwise XOR
    Xor,
    /// Bitwise NOT
    Tilde,
    /// Left shift
    LtLt,
    /// Right shift
    GtGt,
    /// Plus equals
    PlusEq,
    /// Minus equals
    MinusEq,
    /// Multiply equals
    StarEq,
    /// Divide equals
    SlashEq,
    /// Increment
    PlusPlus,
    /// Decrement
    MinusMinus,
}

impl Punctuator {
    /// Source text of the punctuator
    pub fn as_str(self) -> &'static str {
        match self {
            Punctuator::LParen => "(",
            Punctuator::RParen => ")",
            Punctuator::LBrace => "{",
            Punctuator::RBrace => "}",
            Punctuator::LBracket => "[",
            Punctuator::RBracket => "]",
            Punctuator::Semicolon => ";",
            Punctuator::Comma => ",",
            Punctuator::Dot => ".",
            Punctuator::Colon => ":",
            Punctuator::Question => "?",
            Punctuator::Assign => "=",
            Punctuator::Arrow => "=>",
            Punctuator::Plus => "+",
            Punctuator::Minus => "-",
            Punctuator::Star => "*",
            Punctuator::Slash => "/",
            Punctuator::Percent => "%",
            Punctuator::EqEq => "==",
            Punctuator::EqEqEq => "===",
            Punctuator::NotEq => "!=",
            Punctuator::NotEqEq => "!==",
            Punctuator::Lt => "<",
            Punctuator::LtEq => "<=",
            Punctuator::Gt => ">",
            Punctuator::GtEq => ">=",
            Punctuator::AndAnd => "&&",
            Punctuator::OrOr => "||",
            Punctuator::Not => "!",
            Punctuator::And => "&",
            Punctuator::Or => "|",
            Punctuator::Xor => "^",
            Punctuator::Tilde => "~",
            Punctuator::LtLt => "<<",
            Punctuator::GtGt => ">>",
            Punctuator::PlusEq => "+=",
            Punctuator::MinusEq => "-=",
            Punctuator::StarEq => "*=",
            Punctuator::SlashEq => "/=",
            Punctuator::PlusPlus => "++",
            Punctuator::MinusMinus => "--",
        }
    }
}

/// Kind of a lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Identifier, including contextual words such as `async` or `of`
    Identifier,
    /// Reserved word
    Keyword(Keyword),
    /// Operator or delimiter
    Punctuator(Punctuator),
    /// Single- or double-quoted string, escapes kept verbatim
    String,
    /// Back-tick delimited raw text
    TemplateString,
    /// `/pattern/flags`
    Regex,
    /// Hexadecimal or decimal number
    Number,
    /// Line or block comment (extra)
    Comment,
    /// Statement-terminating line break (extra)
    LineBreak,
    /// Run of characters outside the lexical grammar
    Invalid,
    /// End of input
    EOF,
}

impl TokenKind {
    /// Comments and line breaks sit between grammar tokens
    pub fn is_extra(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::LineBreak)
    }

    /// True if an expression may end with this token. A `/` after such a
    /// token is division, otherwise it starts a regex.
    pub fn can_end_expression(self) -> bool {
        match self {
            TokenKind::Identifier
            | TokenKind::String
            | TokenKind::TemplateString
            | TokenKind::Regex
            | TokenKind::Number => true,
            TokenKind::Punctuator(p) => matches!(
                p,
                Punctuator::RParen
                    | Punctuator::RBracket
                    | Punctuator::PlusPlus
                    | Punctuator::MinusMinus
            ),
            TokenKind::Keyword(k) => matches!(
                k,
                Keyword::This
                    | Keyword::Super
                    | Keyword::True
                    | Keyword::False
                    | Keyword::Null
                    | Keyword::Undefined
            ),
            _ => false,
        }
    }

    /// True if a statement may end with this token, making a following
    /// newline a candidate terminator
    pub fn can_end_statement(self) -> bool {
        self.can_end_expression()
            || matches!(
                self,
                TokenKind::Punctuator(Punctuator::RBrace)
                    | TokenKind::Keyword(Keyword::Break)
                    | TokenKind::Keyword(Keyword::Continue)
                    | TokenKind::Keyword(Keyword::Return)
                    | TokenKind::Keyword(Keyword::Yield)
            )
    }
}

/// Token produced by the lexer. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// Token kind
    pub kind: TokenKind,
    /// Raw source text
    pub text: &'a str,
    /// Byte range in the source
    pub span: Span,
    /// Line/column of the first byte
    pub position: SourcePosition,
    /// Set when this is a best-effort token for malformed input
    pub error: Option<LexErrorKind>,
}

impl Token<'_> {
    /// True if this token is the given punctuator
    pub fn is_punctuator(&self, p: Punctuator) -> bool {
        self.kind == TokenKind::Punctuator(p)
    }

    /// True if this token is the given keyword
    pub fn is_keyword(&self, k: Keyword) -> bool {
        self.kind == TokenKind::Keyword(k)
    }

    /// True if this token is the identifier `name` (contextual words)
    pub fn is_word(&self, name: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == name
    }
}

/// Lexer for JavaScript source code
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    column: u32,
    /// Last significant (non-extra) token kind
    previous: Option<TokenKind>,
    /// A line break was already emitted since `previous`
    break_emitted: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            previous: None,
            break_emitted: false,
            finished: false,
        }
    }

    /// Current position (start of the next unscanned character)
    pub fn cursor_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Get the next token from the source, including extras. Never fails:
    /// malformed input yields a best-effort token with `error` set.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return self.make_token(TokenKind::EOF, self.cursor_position(), None),
                Some('\n') => {
                    let start = self.cursor_position();
                    self.advance();
                    if self.line_break_is_significant() {
                        self.break_emitted = true;
                        return self.make_token(TokenKind::LineBreak, start, None);
                    }
                }
                Some(_) => break,
            }
        }

        let start = self.cursor_position();
        let (kind, error) = self.scan_token(start.offset);
        let token = self.make_token(kind, start, error);
        if !kind.is_extra() {
            // a reserved word after `.` is a property name
            let after_dot = self.previous == Some(TokenKind::Punctuator(Punctuator::Dot));
            self.previous = Some(match kind {
                TokenKind::Keyword(_) if after_dot => TokenKind::Identifier,
                _ => kind,
            });
            self.break_emitted = false;
        }
        token
    }

    /// Re-scan a `/` or `/=` token as a regex literal. Used by the parser
    /// when the token sits where an operand is expected.
    pub fn rescan_regex(&mut self, token: &Token<'a>) -> Token<'a> {
        self.offset = token.span.start;
        self.line = token.position.line;
        self.column = token.position.column;
        self.advance(); // '/'
        let error = self.scan_regex().err();
        self.previous = Some(TokenKind::Regex);
        self.break_emitted = false;
        self.make_token(TokenKind::Regex, token.position, error)
    }

    fn scan_token(&mut self, start: usize) -> (TokenKind, Option<LexErrorKind>) {
        let ch = self.advance();

        let punct = |p| (TokenKind::Punctuator(p), None);
        match ch {
            '(' => punct(Punctuator::LParen),
            ')' => punct(Punctuator::RParen),
            '{' => punct(Punctuator::LBrace),
            '}' => punct(Punctuator::RBrace),
            '[' => punct(Punctuator::LBracket),
            ']' => punct(Punctuator::RBracket),
            ';' => punct(Punctuator::Semicolon),
            ',' => punct(Punctuator::Comma),
            '.' => punct(Punctuator::Dot),
            ':' => punct(Punctuator::Colon),
            '?' => punct(Punctuator::Question),
            '~' => punct(Punctuator::Tilde),
            '^' => punct(Punctuator::Xor),
            '%' => punct(Punctuator::Percent),

            '=' => {
                if self.match_char('>') {
                    punct(Punctuator::Arrow)
                } else if self.match_char('=') {
                    if self.match_char('=') {
                        punct(Punctuator::EqEqEq)
                    } else {
                        punct(Punctuator::EqEq)
                    }
                } else {
                    punct(Punctuator::Assign)
                }
            }

            '+' => {
                if self.match_char('+') {
                    punct(Punctuator::PlusPlus)
                } else if self.match_char('=') {
                    punct(Punctuator::PlusEq)
                } else {
                    punct(Punctuator::Plus)
                }
            }

            '-' => {
                if self.match_char('-') {
                    punct(Punctuator::MinusMinus)
                } else if self.match_char('=') {
                    punct(Punctuator::MinusEq)
                } else {
                    punct(Punctuator::Minus)
                }
            }

            '*' => {
                if self.match_char('=') {
                    punct(Punctuator::StarEq)
                } else {
                    punct(Punctuator::Star)
                }
            }

            '!' => {
                if self.match_char('=') {
                    if self.match_char('=') {
                        punct(Punctuator::NotEqEq)
                    } else {
                        punct(Punctuator::NotEq)
                    }
                } else {
                    punct(Punctuator::Not)
                }
            }

            '<' => {
                if self.match_char('<') {
                    punct(Punctuator::LtLt)
                } else if self.match_char('=') {
                    punct(Punctuator::LtEq)
                } else {
                    punct(Punctuator::Lt)
                }
            }

            '>' => {
                if self.match_char('>') {
                    punct(Punctuator::GtGt)
                } else if self.match_char('=') {
                    punct(Punctuator::GtEq)
                } else {
                    punct(Punctuator::Gt)
                }
            }

            '&' => {
                if self.match_char('&') {
                    punct(Punctuator::AndAnd)
                } else {
                    punct(Punctuator::And)
                }
            }

            '|' => {
                if self.match_char('|') {
                    punct(Punctuator::OrOr)
                } else {
                    punct(Punctuator::Or)
                }
            }

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                    (TokenKind::Comment, None)
                } else if self.match_char('*') {
                    (TokenKind::Comment, self.scan_block_comment().err())
                } else if self.regex_allowed() {
                    (TokenKind::Regex, self.scan_regex().err())
                } else if self.match_char('=') {
                    punct(Punctuator::SlashEq)
                } else {
                    punct(Punctuator::Slash)
                }
            }

            '"' | '\'' => (TokenKind::String, self.scan_string(ch).err()),

            '`' => (TokenKind::TemplateString, self.scan_template().err()),

            _ if ch.is_ascii_digit() => {
                self.scan_number(ch);
                (TokenKind::Number, None)
            }

            _ if is_id_start(ch) => {
                self.scan_identifier();
                let word = &self.source[start..self.offset];
                match Keyword::lookup(word) {
                    Some(k) => (TokenKind::Keyword(k), None),
                    None => (TokenKind::Identifier, None),
                }
            }

            _ => {
                while let Some(next) = self.peek() {
                    if starts_token(next) {
                        break;
                    }
                    self.advance();
                }
                (TokenKind::Invalid, Some(LexErrorKind::UnexpectedCharacter(ch)))
            }
        }
    }

    /// A `/` starts a regex unless the previous significant token can end
    /// an expression
    fn regex_allowed(&self) -> bool {
        !self.previous.is_some_and(TokenKind::can_end_expression)
    }

    fn line_break_is_significant(&self) -> bool {
        !self.break_emitted
            && self.previous.is_some_and(TokenKind::can_end_statement)
            && !self.continues_with_member_access()
    }

    /// True if the next non-blank character is a `.` starting a member
    /// access, as in a leading-dot method chain
    fn continues_with_member_access(&self) -> bool {
        let rest = self.source[self.offset..].trim_start_matches(|c: char| c.is_whitespace());
        let mut chars = rest.chars();
        chars.next() == Some('.') && !chars.next().is_some_and(|c| c.is_ascii_digit())
    }

    fn scan_string(&mut self, quote: char) -> Result<(), LexErrorKind> {
        loop {
            match self.peek() {
                None | Some('\n') => return Err(LexErrorKind::UnterminatedString),
                Some('\\') => {
                    self.advance();
                    if self.peek().is_some() {
                        self.advance();
                    }
                }
                Some(c) => {
                    self.advance();
                    if c == quote {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn scan_template(&mut self) -> Result<(), LexErrorKind> {
        let mut first_line_end = None;
        loop {
            match self.peek() {
                None => {
                    self.rewind_to(first_line_end);
                    return Err(LexErrorKind::UnterminatedTemplate);
                }
                Some('`') => {
                    self.advance();
                    return Ok(());
                }
                Some('\\') => {
                    self.advance();
                    if let Some(c) = self.peek() {
                        if c == '\n' && first_line_end.is_none() {
                            first_line_end = Some(self.cursor_position());
                        }
                        self.advance();
                    }
                }
                Some(c) => {
                    if c == '\n' && first_line_end.is_none() {
                        first_line_end = Some(self.cursor_position());
                    }
                    self.advance();
                }
            }
        }
    }

    /// Body and flags of a regex; the opening `/` is already consumed
    fn scan_regex(&mut self) -> Result<(), LexErrorKind> {
        let mut in_class = false;
        loop {
            match self.peek() {
                None | Some('\n') => return Err(LexErrorKind::UnterminatedRegex),
                Some('\\') => {
                    self.advance();
                    if self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                Some('[') => {
                    in_class = true;
                    self.advance();
                }
                Some(']') => {
                    in_class = false;
                    self.advance();
                }
                Some('/') if !in_class => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        // Flags: lowercase letters only
        while self.peek().is_some_and(|c| c.is_ascii_lowercase()) {
            self.advance();
        }
        Ok(())
    }

    fn scan_number(&mut self, first: char) {
        if first == '0'
            && matches!(self.peek(), Some('x' | 'X'))
            && self.peek_next().is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.advance(); // x
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.advance();
            }
            return;
        }

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(is_id_continue) {
            self.advance();
        }
    }

    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Body of a block comment; `/*` is already consumed
    fn scan_block_comment(&mut self) -> Result<(), LexErrorKind> {
        let mut first_line_end = None;
        loop {
            match self.peek() {
                None => {
                    self.rewind_to(first_line_end);
                    return Err(LexErrorKind::UnterminatedComment);
                }
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                Some(c) => {
                    if c == '\n' && first_line_end.is_none() {
                        first_line_end = Some(self.cursor_position());
                    }
                    self.advance();
                }
            }
        }
    }

    /// Resynchronize at the end of the line an unterminated construct
    /// started on
    fn rewind_to(&mut self, position: Option<SourcePosition>) {
        if let Some(pos) = position {
            self.offset = pos.offset;
            self.line = pos.line;
            self.column = pos.column;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if matches!(c, ' ' | '\t' | '\r' | '\u{000B}' | '\u{000C}' | '\u{00A0}' | '\u{FEFF}') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn make_token(
        &self,
        kind: TokenKind,
        start: SourcePosition,
        error: Option<LexErrorKind>,
    ) -> Token<'a> {
        let span = Span::new(start.offset, self.offset);
        Token {
            kind,
            text: &self.source[span.start..span.end],
            span,
            position: start,
            error,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.offset..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> char {
        let ch = self.peek().unwrap_or('\0');
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token including extras, ending with a single `EOF`
    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_id_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_id_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Characters that begin some token or separate tokens
fn starts_token(ch: char) -> bool {
    is_id_continue(ch)
        || ch.is_whitespace()
        || matches!(
            ch,
            '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | '.' | ':' | '?' | '~' | '^' | '%'
                | '=' | '+' | '-' | '*' | '!' | '<' | '>' | '&' | '|' | '/' | '"' | '\''
                | '`'
        )
}
