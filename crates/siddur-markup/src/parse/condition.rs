//! Condition expressions: `rosh_chodesh`, `pesach | sukkot`, `!shabbat & (purim or chanukah)`.
//!
//! Precedence from loosest to tightest is `|`, `&`, `!`. The keywords `or`,
//! `and` and `not` are accepted as well. Offsets in errors are byte offsets
//! into the expression text.

use siddur_luach::Flag;

use super::error::{ParseError, ParseResult};
use crate::model::BooleanExpr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Or,
    And,
    Not,
    Open,
    Close,
    Name(&'a str),
}

/// ## Summary
/// Parses a condition expression into a [`BooleanExpr`].
///
/// ## Errors
/// Returns `UnknownFlag` for names outside the vocabulary and
/// `InvalidCondition` for malformed syntax.
pub fn parse_condition(input: &str) -> ParseResult<BooleanExpr> {
    let tokens = tokenize(input)?;
    let mut parser = ConditionParser {
        tokens: &tokens,
        position: 0,
        end: input.len(),
    };
    let expr = parser.or()?;
    match parser.peek() {
        None => Ok(expr),
        Some((offset, token)) => Err(ParseError::invalid_condition(
            offset,
            format!("unexpected {token:?} after expression"),
        )),
    }
}

fn tokenize(input: &str) -> ParseResult<Vec<(usize, Token<'_>)>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '|' => Token::Or,
            '&' => Token::And,
            '!' => Token::Not,
            '(' => Token::Open,
            ')' => Token::Close,
            c if c.is_ascii_alphabetic() => {
                let mut end = offset + c.len_utf8();
                while let Some((next, n)) = chars.peek().copied() {
                    if n.is_ascii_alphanumeric() || n == '_' || n == '-' {
                        end = next + n.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                match &input[offset..end] {
                    "or" => Token::Or,
                    "and" => Token::And,
                    "not" => Token::Not,
                    name => Token::Name(name),
                }
            }
            other => {
                return Err(ParseError::invalid_condition(
                    offset,
                    format!("unexpected character '{other}'"),
                ));
            }
        };
        tokens.push((offset, token));
    }

    Ok(tokens)
}

struct ConditionParser<'t, 'a> {
    tokens: &'t [(usize, Token<'a>)],
    position: usize,
    end: usize,
}

impl<'a> ConditionParser<'_, 'a> {
    fn peek(&self) -> Option<(usize, Token<'a>)> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<(usize, Token<'a>)> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn eat(&mut self, expected: Token<'a>) -> bool {
        if self.peek().is_some_and(|(_, token)| token == expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn or(&mut self) -> ParseResult<BooleanExpr> {
        let mut operands = vec![self.and()?];
        while self.eat(Token::Or) {
            operands.push(self.and()?);
        }
        Ok(collapse(operands, BooleanExpr::Any))
    }

    fn and(&mut self) -> ParseResult<BooleanExpr> {
        let mut operands = vec![self.unary()?];
        while self.eat(Token::And) {
            operands.push(self.unary()?);
        }
        Ok(collapse(operands, BooleanExpr::All))
    }

    fn unary(&mut self) -> ParseResult<BooleanExpr> {
        match self.advance() {
            Some((_, Token::Not)) => Ok(self.unary()?.negate()),
            Some((offset, Token::Open)) => {
                let inner = self.or()?;
                if self.eat(Token::Close) {
                    Ok(inner)
                } else {
                    Err(ParseError::invalid_condition(
                        offset,
                        "unclosed parenthesis",
                    ))
                }
            }
            Some((offset, Token::Name(name))) => Flag::from_name(name)
                .map(BooleanExpr::Flag)
                .ok_or_else(|| ParseError::unknown_flag(offset, name)),
            Some((offset, token)) => Err(ParseError::invalid_condition(
                offset,
                format!("expected a flag name, found {token:?}"),
            )),
            None => Err(ParseError::invalid_condition(
                self.end,
                "expected a flag name, found end of condition",
            )),
        }
    }
}

fn collapse(
    mut operands: Vec<BooleanExpr>,
    combine: fn(Vec<BooleanExpr>) -> BooleanExpr,
) -> BooleanExpr {
    if operands.len() == 1 {
        operands.remove(0)
    } else {
        combine(operands)
    }
}

impl std::str::FromStr for BooleanExpr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_condition(s)
    }
}
