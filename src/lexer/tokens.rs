use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Tables shared by scanners that don't bring their own.
    pub static ref DEFAULT_TABLES: ClassifierTables = ClassifierTables::new();
}

/// Fixed spelling-to-kind mappings consulted by the scanner.
///
/// Built once and handed to each [`Lexer`](super::lexer::Lexer) by reference.
#[derive(Debug, Clone)]
pub struct ClassifierTables {
    reserved: HashMap<&'static str, TokenKind>,
    operators: HashMap<&'static str, TokenKind>,
    punctuation: HashMap<char, TokenKind>,
}

impl ClassifierTables {
    pub fn new() -> Self {
        let mut reserved = HashMap::new();
        reserved.insert("bool", TokenKind::Bool);
        reserved.insert("break", TokenKind::Break);
        reserved.insert("continue", TokenKind::Continue);
        reserved.insert("else", TokenKind::Else);
        reserved.insert("extern", TokenKind::Extern);
        reserved.insert("false", TokenKind::BoolLiteral);
        reserved.insert("for", TokenKind::For);
        reserved.insert("func", TokenKind::Func);
        reserved.insert("if", TokenKind::If);
        reserved.insert("int", TokenKind::Int);
        reserved.insert("null", TokenKind::Null);
        reserved.insert("package", TokenKind::Package);
        reserved.insert("return", TokenKind::Return);
        reserved.insert("string", TokenKind::StringType);
        reserved.insert("true", TokenKind::BoolLiteral);
        reserved.insert("var", TokenKind::Var);
        reserved.insert("void", TokenKind::Void);
        reserved.insert("while", TokenKind::While);
        reserved.insert("Print", TokenKind::Print);

        let mut operators = HashMap::new();
        operators.insert("&&", TokenKind::And);
        operators.insert("=", TokenKind::Assign);
        operators.insert("==", TokenKind::Equal);
        operators.insert(">=", TokenKind::GreaterEqual);
        operators.insert(">", TokenKind::Greater);
        operators.insert("<=", TokenKind::LessEqual);
        operators.insert("<", TokenKind::Less);
        operators.insert("!=", TokenKind::NotEqual);
        operators.insert("!", TokenKind::Not);
        operators.insert("||", TokenKind::Or);
        operators.insert("+", TokenKind::Plus);
        operators.insert("-", TokenKind::Minus);
        operators.insert("*", TokenKind::Star);
        operators.insert("/", TokenKind::Slash);
        operators.insert("%", TokenKind::Percent);
        operators.insert("<<", TokenKind::LeftShift);
        operators.insert(">>", TokenKind::RightShift);

        let mut punctuation = HashMap::new();
        punctuation.insert(',', TokenKind::Comma);
        punctuation.insert('.', TokenKind::Dot);
        punctuation.insert(';', TokenKind::Semicolon);
        punctuation.insert('{', TokenKind::OpenCurly);
        punctuation.insert('}', TokenKind::CloseCurly);
        punctuation.insert('(', TokenKind::OpenParen);
        punctuation.insert(')', TokenKind::CloseParen);
        punctuation.insert('[', TokenKind::OpenBracket);
        punctuation.insert(']', TokenKind::CloseBracket);

        ClassifierTables {
            reserved,
            operators,
            punctuation,
        }
    }

    pub fn reserved_kind(&self, word: &str) -> Option<TokenKind> {
        self.reserved.get(word).copied()
    }

    /// Longest operator spelling at the start of `remaining`, two characters
    /// before one. Returns the kind and the matched byte length.
    pub fn match_operator(&self, remaining: &str) -> Option<(TokenKind, usize)> {
        let mut chars = remaining.char_indices();
        let first = chars.next()?;
        let one = first.0 + first.1.len_utf8();

        if let Some((second, c)) = chars.next() {
            let two = second + c.len_utf8();
            if let Some(kind) = self.operators.get(&remaining[..two]) {
                return Some((*kind, two));
            }
        }

        self.operators.get(&remaining[..one]).map(|kind| (*kind, one))
    }

    pub fn punctuation_kind(&self, c: char) -> Option<TokenKind> {
        self.punctuation.get(&c).copied()
    }

    pub fn reserved_words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reserved.keys().copied()
    }
}

impl Default for ClassifierTables {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    IntLiteral,
    StringLiteral,
    BoolLiteral,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
    Dot,

    Assign,   // =
    Equal,    // ==
    Not,      // !
    NotEqual, // !=

    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    LeftShift,
    RightShift,

    Or,
    And,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Reserved
    Bool,
    Break,
    Continue,
    Else,
    Extern,
    For,
    Func,
    If,
    Int,
    Null,
    Package,
    Print,
    Return,
    StringType,
    Var,
    Void,
    While,
}

impl TokenKind {
    /// The symbol an operator or punctuation kind is spelled with.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::Not => "!",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LeftShift => "<<",
            TokenKind::RightShift => ">>",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::EOF
            | TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::StringLiteral
            | TokenKind::BoolLiteral
            | TokenKind::Bool
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Else
            | TokenKind::Extern
            | TokenKind::For
            | TokenKind::Func
            | TokenKind::If
            | TokenKind::Int
            | TokenKind::Null
            | TokenKind::Package
            | TokenKind::Print
            | TokenKind::Return
            | TokenKind::StringType
            | TokenKind::Var
            | TokenKind::Void
            | TokenKind::While => return None,
        };

        Some(symbol)
    }

    /// Human readable type label used by the token dump.
    pub fn label(&self) -> String {
        let label = match self {
            TokenKind::EOF => "T_EOF",
            TokenKind::Identifier => "T_Identifier",
            TokenKind::IntLiteral => "T_IntConstant",
            TokenKind::StringLiteral => "T_StringConstant",
            TokenKind::BoolLiteral => "T_BoolConstant",
            TokenKind::Bool => "T_Bool",
            TokenKind::Break => "T_Break",
            TokenKind::Continue => "T_Continue",
            TokenKind::Else => "T_Else",
            TokenKind::Extern => "T_Extern",
            TokenKind::For => "T_For",
            TokenKind::Func => "T_Func",
            TokenKind::If => "T_If",
            TokenKind::Int => "T_Int",
            TokenKind::Null => "T_Null",
            TokenKind::Package => "T_Package",
            TokenKind::Print => "T_Print",
            TokenKind::Return => "T_Return",
            TokenKind::StringType => "T_String",
            TokenKind::Var => "T_Var",
            TokenKind::Void => "T_Void",
            TokenKind::While => "T_While",
            TokenKind::OpenBracket
            | TokenKind::CloseBracket
            | TokenKind::OpenCurly
            | TokenKind::CloseCurly
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Dot
            | TokenKind::Assign
            | TokenKind::Equal
            | TokenKind::Not
            | TokenKind::NotEqual
            | TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::LeftShift
            | TokenKind::RightShift
            | TokenKind::Or
            | TokenKind::And
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent => {
                return format!("'{}'", self.symbol().unwrap_or_default());
            }
        };

        label.to_string()
    }

    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Bool | TokenKind::StringType | TokenKind::Void
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Decoded payload of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    None,
    Identifier(String),
    Int(i64),
    Str(String),
    Bool(bool),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Identifier(name) => write!(f, "{}", name),
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Str(value) => write!(f, "\"{}\"", value),
            TokenValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn col_start(&self) -> u32 {
        self.span.start.column
    }

    /// Inclusive column of the last character of the lexeme.
    pub fn col_end(&self) -> u32 {
        self.span.end.column.saturating_sub(1).max(self.span.start.column)
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Type label with the decoded value appended for constants.
    pub fn label(&self) -> String {
        let has_value = self.is_one_of_many(&[
            TokenKind::IntLiteral,
            TokenKind::StringLiteral,
            TokenKind::BoolLiteral,
        ]);

        if has_value && self.value != TokenValue::None {
            format!("{} (value= {})", self.kind.label(), self.value)
        } else {
            self.kind.label()
        }
    }
}

/// One line of the token dump.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\tline {} cols {}-{} is {}",
            self.lexeme,
            self.line(),
            self.col_start(),
            self.col_end(),
            self.label()
        )
    }
}
