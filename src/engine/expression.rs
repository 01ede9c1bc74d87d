//! Arithmetic expression evaluation.
//!
//! Input goes through three stages before a value comes out:
//!
//! 1. [`sanitize`] rewrites display symbols (`×`, `÷`, `π`, `e`) and strips
//!    whitespace.
//! 2. The sanitized text is checked against a fixed character class and the
//!    literal `/0` guard.
//! 3. A small recursive-descent parser computes the value over numeric
//!    literals, `+ - * /`, unary sign and parentheses.
//!
//! Nothing here executes code; the grammar has no identifiers or calls.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{EngineError, Result};

static ALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-*/.() ]+$").expect("valid expression character class"));

const PI_LITERAL: &str = "3.141592653589793";
const E_LITERAL: &str = "2.718281828459045";

/// Parentheses and unary signs may nest at most this deep.
const MAX_DEPTH: usize = 64;

const ERR_INVALID_CHARACTERS: &str = "Invalid characters in expression";
const ERR_MALFORMED: &str = "Invalid mathematical expression";

/// Rewrite display-only symbols into evaluable text and drop whitespace.
pub fn sanitize(raw: &str) -> String {
    raw.replace('×', "*")
        .replace('÷', "/")
        .replace('π', PI_LITERAL)
        .replace('e', E_LITERAL)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Evaluate an already sanitized expression.
pub fn evaluate_sanitized(expression: &str) -> Result<f64> {
    if !ALLOWED_CHARS.is_match(expression) {
        return Err(EngineError::invalid_expression(ERR_INVALID_CHARACTERS));
    }

    if expression.contains("/0") {
        return Err(EngineError::DivisionByZero);
    }

    let tokens = tokenize(expression)?;
    let value = Parser::new(&tokens).parse()?;

    if !value.is_finite() {
        return Err(EngineError::NonFiniteResult);
    }

    Ok(value)
}

/// Sanitize and evaluate raw user input.
pub fn evaluate(raw: &str) -> Result<f64> {
    evaluate_sanitized(&sanitize(raw))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn malformed() -> EngineError {
    EngineError::invalid_expression(ERR_MALFORMED)
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        let token = match c {
            // `++` and `--` are increment/decrement, never two signs.
            '+' if tokens.last() == Some(&Token::Plus) => return Err(malformed()),
            '-' if tokens.last() == Some(&Token::Minus) => return Err(malformed()),
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ' ' => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => {
                let mut end = start;
                let mut seen_dot = false;
                while let Some(&(idx, d)) = chars.peek() {
                    match d {
                        '0'..='9' => {}
                        '.' if !seen_dot => seen_dot = true,
                        '.' => return Err(malformed()),
                        _ => break,
                    }
                    end = idx + d.len_utf8();
                    chars.next();
                }
                let literal = &input[start..end];
                if literal == "." || has_leading_zero(literal) {
                    return Err(malformed());
                }
                let value = literal.parse::<f64>().map_err(|_| malformed())?;
                tokens.push(Token::Number(value));
                continue;
            }
            _ => return Err(malformed()),
        };
        tokens.push(token);
        chars.next();
    }

    Ok(tokens)
}

/// `010` and `00.5` are legacy octal forms, not decimals.
fn has_leading_zero(literal: &str) -> bool {
    let mut digits = literal.chars();
    digits.next() == Some('0') && digits.next().is_some_and(|c| c.is_ascii_digit())
}

/// Grammar:
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/') unary)*
/// unary   := ('+' | '-') unary | primary
/// primary := NUMBER | '(' expr ')'
/// ```
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn parse(mut self) -> Result<f64> {
        let value = self.expr()?;
        if self.pos != self.tokens.len() {
            return Err(malformed());
        }
        Ok(value)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(malformed());
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    value /= self.unary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                self.descend()?;
                let value = -self.unary()?;
                self.depth -= 1;
                Ok(value)
            }
            Some(Token::Plus) => {
                self.advance();
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(value)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                self.descend()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(malformed()),
                }
            }
            _ => Err(malformed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_operator_precedence() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("100/10/5"), Ok(2.0));
    }

    #[test]
    fn supports_unary_minus() {
        assert_eq!(evaluate("-3+5"), Ok(2.0));
        assert_eq!(evaluate("2*-3"), Ok(-6.0));
        assert_eq!(evaluate("-(2+3)"), Ok(-5.0));
        assert_eq!(evaluate("2-+3"), Ok(-1.0));
        assert_eq!(evaluate("2+-3"), Ok(-1.0));
        assert_eq!(evaluate("-(-3)"), Ok(3.0));
    }

    #[test]
    fn rejects_doubled_signs() {
        for input in ["2--3", "--3", "2++3", "2 - -3", "1+--2"] {
            assert_eq!(
                evaluate(input),
                Err(EngineError::invalid_expression(ERR_MALFORMED)),
                "input: {input}"
            );
        }
    }

    #[test]
    fn rejects_leading_zero_literals() {
        for input in ["010+1", "08", "00.5", "1+007"] {
            assert_eq!(
                evaluate(input),
                Err(EngineError::invalid_expression(ERR_MALFORMED)),
                "input: {input}"
            );
        }
        assert_eq!(evaluate("0"), Ok(0.0));
        assert_eq!(evaluate("0.25*4"), Ok(1.0));
        assert_eq!(evaluate("10+100"), Ok(110.0));
    }

    #[test]
    fn parses_decimal_literals() {
        assert_eq!(evaluate(".5+1."), Ok(1.5));
        assert_eq!(evaluate("1.25*4"), Ok(5.0));
    }

    #[test]
    fn sanitize_substitutes_display_symbols() {
        assert_eq!(sanitize("6 × 2 ÷ 3"), "6*2/3");
        assert_eq!(sanitize("2π"), "23.141592653589793");
        assert_eq!(sanitize("e"), "2.718281828459045");
    }

    #[test]
    fn evaluates_symbol_substitutions() {
        assert_eq!(evaluate("6 × 2 ÷ 3"), Ok(4.0));
        assert_eq!(evaluate("π"), Ok(std::f64::consts::PI));
        assert_eq!(evaluate("e"), Ok(std::f64::consts::E));
    }

    #[test]
    fn rejects_letters() {
        assert!(matches!(
            evaluate("2+a"),
            Err(EngineError::InvalidExpression(_))
        ));
        assert!(matches!(
            evaluate("alert(1)"),
            Err(EngineError::InvalidExpression(_))
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            evaluate("   "),
            Err(EngineError::InvalidExpression(_))
        ));
    }

    #[test]
    fn rejects_literal_division_by_zero() {
        assert_eq!(evaluate("5/0"), Err(EngineError::DivisionByZero));
        assert_eq!(evaluate("5 / 0"), Err(EngineError::DivisionByZero));
        assert_eq!(evaluate("1/0.5"), Err(EngineError::DivisionByZero));
    }

    #[test]
    fn computed_zero_denominator_is_not_finite() {
        assert_eq!(evaluate("5/(2-2)"), Err(EngineError::NonFiniteResult));
    }

    #[test]
    fn rejects_malformed_syntax() {
        for input in ["2+", "(2+3", "2+3)", "()", "1..2", "1.2.3", "2(3)", "*2", "."] {
            assert_eq!(
                evaluate(input),
                Err(EngineError::invalid_expression(ERR_MALFORMED)),
                "input: {input}"
            );
        }
    }

    #[test]
    fn rejects_excessive_nesting() {
        let deep = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        assert!(matches!(
            evaluate(&deep),
            Err(EngineError::InvalidExpression(_))
        ));
    }
}
