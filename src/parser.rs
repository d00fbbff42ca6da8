//! Tokenizer and recursive-descent parser for the expression notation.
//!
//! The grammar, loosest binding first:
//!
//! ```text
//! expr          := biconditional
//! biconditional := implication ( "<-->" implication )*
//! implication   := disjunction ( "-->" disjunction )*
//! disjunction   := conjunction ( "v" conjunction )*
//! conjunction   := unary ( "y" unary )*
//! unary         := "~" unary | primary
//! primary       := variable | "(" expr ")"
//! variable      := single alphabetic character, excluding "y" and "v"
//! ```
//!
//! Whitespace is insignificant and stripped before tokenizing, so it may
//! appear anywhere, including inside `-->` and `<-->`. The lowercase letters
//! `y` (AND) and `v` (OR)
//! are reserved words of the grammar and can never name a variable; the
//! uppercase `Y` and `V` are ordinary variables. All binary connectives are
//! left-associative; `~` is prefix and binds tightest; parentheses override
//! precedence.
//!
//! The parser produces an [`Expr`] tree directly. Expression text is never
//! rewritten into host-language code and executed.

use log::trace;

use crate::error::ParseError;
use crate::expr::Expr;

/// A lexical token of the notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// A single-character variable.
    Var(char),
    /// `~`
    Not,
    /// `y`
    And,
    /// `v`
    Or,
    /// `-->`
    Imply,
    /// `<-->`
    Iff,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Var(name) => write!(f, "{}", name),
            Token::Not => write!(f, "~"),
            Token::And => write!(f, "y"),
            Token::Or => write!(f, "v"),
            Token::Imply => write!(f, "-->"),
            Token::Iff => write!(f, "<-->"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Splits the input into tokens.
///
/// Whitespace is insignificant and stripped before tokenizing, so spaces may
/// fall anywhere — even inside the multi-character arrows. A stray `-` or `<`
/// that does not start `-->` or `<-->` is a [`ParseError::UnexpectedChar`];
/// reported positions refer to the whitespace-stripped text.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = input.chars().filter(|ch| !ch.is_whitespace()).collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '~' => {
                tokens.push(Token::Not);
                i += 1;
            }
            'y' => {
                tokens.push(Token::And);
                i += 1;
            }
            'v' => {
                tokens.push(Token::Or);
                i += 1;
            }
            '-' => {
                if chars[i..].starts_with(&['-', '-', '>']) {
                    tokens.push(Token::Imply);
                    i += 3;
                } else {
                    return Err(ParseError::UnexpectedChar { ch, pos: i });
                }
            }
            '<' => {
                if chars[i..].starts_with(&['<', '-', '-', '>']) {
                    tokens.push(Token::Iff);
                    i += 4;
                } else {
                    return Err(ParseError::UnexpectedChar { ch, pos: i });
                }
            }
            c if c.is_alphabetic() => {
                tokens.push(Token::Var(c));
                i += 1;
            }
            c => {
                return Err(ParseError::UnexpectedChar { ch: c, pos: i });
            }
        }
    }

    Ok(tokens)
}

/// Parses the input into an [`Expr`].
///
/// Fails with a [`ParseError`] when the text does not reduce to exactly one
/// expression under the grammar: unknown characters, a dangling operator, an
/// unclosed parenthesis, or leftover tokens after a complete expression.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    trace!("tokenized {:?} into {} tokens", input, tokens.len());

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.biconditional()?;

    if let Some(token) = parser.peek() {
        return Err(ParseError::TrailingInput {
            found: token.to_string(),
        });
    }

    Ok(expr)
}

/// Scans the raw text for variables: every alphabetic character that is not a
/// reserved operator letter, sorted ascending and deduplicated.
///
/// This is a purely lexical operation and succeeds on any input, well-formed
/// or not; an empty result is permitted here and rejected later by callers
/// that require at least one variable (Karnaugh rendering).
///
/// ```rust
/// use kmap_rs::parser::extract_variables;
///
/// assert_eq!(extract_variables("(P y Q) v (~S <--> T)"), vec!['P', 'Q', 'S', 'T']);
/// ```
pub fn extract_variables(input: &str) -> Vec<char> {
    let mut vars = std::collections::BTreeSet::new();
    for ch in input.chars() {
        if ch.is_alphabetic() && ch != 'y' && ch != 'v' {
            vars.insert(ch);
        }
    }
    vars.into_iter().collect()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it equals `expected`.
    fn eat(&mut self, expected: Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn biconditional(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.implication()?;
        while self.eat(Token::Iff) {
            let rhs = self.implication()?;
            lhs = Expr::iff(lhs, rhs);
        }
        Ok(lhs)
    }

    fn implication(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.disjunction()?;
        while self.eat(Token::Imply) {
            let rhs = self.disjunction()?;
            lhs = Expr::imply(lhs, rhs);
        }
        Ok(lhs)
    }

    fn disjunction(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.conjunction()?;
        while self.eat(Token::Or) {
            let rhs = self.conjunction()?;
            lhs = Expr::or(lhs, rhs);
        }
        Ok(lhs)
    }

    fn conjunction(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        while self.eat(Token::And) {
            let rhs = self.unary()?;
            lhs = Expr::and(lhs, rhs);
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(Token::Not) {
            let inner = self.unary()?;
            return Ok(Expr::not(inner));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.bump() {
            Some(Token::Var(name)) => Ok(Expr::var(name)),
            Some(Token::LParen) => {
                let inner = self.biconditional()?;
                if !self.eat(Token::RParen) {
                    return Err(ParseError::MissingClosingParen);
                }
                Ok(inner)
            }
            Some(token) => Err(ParseError::ExpectedOperand {
                found: token.to_string(),
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
