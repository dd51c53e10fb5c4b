//! Strict front pass over expression text.
//!
//! `symb_anafis` parses generously: it inserts implicit multiplication, closes
//! unbalanced parentheses, and splits unknown multi-letter names into
//! products. A root finder must never guess what the user meant, so this pass
//! rejects all of that before the text reaches the parser. It also bounds the
//! depth of the tree the parser will build and hands it a canonical rendering
//! of the same tokens (`^` for power, plain decimal numbers).

use crate::ExprError;

/// Maximum depth of the expression tree.
///
/// Every binary operator and every unary sign can add a level, as can every
/// pair of parentheses, so a flat chain of 300 terms is as deep as 300 nested
/// groups.
pub const MAX_DEPTH: usize = 256;

/// Functions accepted in expressions. All take one argument.
pub const FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "cot", "sec", "csc", "asin", "acos", "atan", "sinh", "cosh", "tanh",
    "asinh", "acosh", "atanh", "exp", "ln", "log", "sqrt", "cbrt", "abs",
];

/// Named constants accepted in expressions.
pub const CONSTANTS: &[&str] = &["pi", "E"];

/// Names the parser always reads as constants, whatever the variable is.
pub(crate) const RESERVED: &[&str] = &["pi", "PI", "Pi", "e", "E"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Number(f64),
    Ident(&'a str),
    Op(Op),
    LeftParen,
    RightParen,
}

impl Token<'_> {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {n}"),
            Token::Ident(name) => format!("'{name}'"),
            Token::Op(op) => format!("'{}'", op.symbol()),
            Token::LeftParen => "'('".to_string(),
            Token::RightParen => "')'".to_string(),
        }
    }
}

#[derive(Debug)]
struct Spanned<'a> {
    token: Token<'a>,
    pos: usize,
}

/// Depth accounting for one parenthesized group.
#[derive(Debug, Default)]
struct Group {
    /// Operators and unary signs directly inside the group.
    ops: usize,
    /// Deepest closed subgroup.
    inner: usize,
}

impl Group {
    fn depth(&self) -> usize {
        self.ops + self.inner + 1
    }
}

/// Checks `text` against the accepted grammar and returns it in canonical
/// form for the parser.
pub(crate) fn screen(text: &str, variable: &str) -> Result<String, ExprError> {
    let tokens = lex(text)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }

    let mut out = String::with_capacity(text.len() + tokens.len() * 2);
    let mut groups = vec![Group::default()];
    let mut expect_operand = true;

    for (i, spanned) in tokens.iter().enumerate() {
        let pos = spanned.pos;
        // The outermost group is never popped.
        let top = groups.len() - 1;

        match spanned.token {
            Token::Number(_) | Token::Ident(_) | Token::LeftParen if !expect_operand => {
                return Err(ExprError::UnexpectedToken {
                    expected: "an operator",
                    found: spanned.token.describe(),
                    pos,
                });
            }
            Token::Number(value) => {
                out.push_str(&value.to_string());
                expect_operand = false;
            }
            Token::Ident(name) => {
                let calls = matches!(
                    tokens.get(i + 1),
                    Some(Spanned {
                        token: Token::LeftParen,
                        ..
                    })
                );
                if name == variable || CONSTANTS.contains(&name) {
                    expect_operand = false;
                } else if FUNCTIONS.contains(&name) {
                    if !calls {
                        return Err(match tokens.get(i + 1) {
                            Some(next) => ExprError::UnexpectedToken {
                                expected: "'(' after a function name",
                                found: next.token.describe(),
                                pos: next.pos,
                            },
                            None => ExprError::UnexpectedEnd {
                                expected: "'(' after a function name",
                            },
                        });
                    }
                } else if calls {
                    return Err(ExprError::UnknownFunction {
                        name: name.to_string(),
                        pos,
                    });
                } else {
                    return Err(ExprError::UnknownSymbol {
                        name: name.to_string(),
                        variable: variable.to_string(),
                        pos,
                    });
                }
                out.push_str(name);
            }
            Token::Op(op) if expect_operand => match op {
                Op::Sub => {
                    groups[top].ops += 1;
                    out.push_str("- ");
                }
                Op::Add => groups[top].ops += 1,
                _ => {
                    return Err(ExprError::UnexpectedToken {
                        expected: "an operand",
                        found: spanned.token.describe(),
                        pos,
                    });
                }
            },
            Token::Op(op) => {
                groups[top].ops += 1;
                out.push(' ');
                out.push_str(op.symbol());
                out.push(' ');
                expect_operand = true;
            }
            Token::LeftParen => {
                groups.push(Group::default());
                if groups.len() > MAX_DEPTH {
                    return Err(ExprError::TooDeep { limit: MAX_DEPTH });
                }
                out.push('(');
            }
            Token::RightParen => {
                if expect_operand {
                    return Err(ExprError::UnexpectedToken {
                        expected: "an operand",
                        found: spanned.token.describe(),
                        pos,
                    });
                }
                if groups.len() == 1 {
                    return Err(ExprError::UnexpectedToken {
                        expected: "an operator or the end of the expression",
                        found: spanned.token.describe(),
                        pos,
                    });
                }
                let closed = groups.pop().map_or(0, |g| g.depth());
                if let Some(parent) = groups.last_mut() {
                    parent.inner = parent.inner.max(closed);
                }
                out.push(')');
            }
        }

        if groups.last().is_some_and(|g| g.depth() > MAX_DEPTH) {
            return Err(ExprError::TooDeep { limit: MAX_DEPTH });
        }
    }

    if expect_operand {
        return Err(ExprError::UnexpectedEnd {
            expected: "an operand",
        });
    }
    if groups.len() > 1 {
        return Err(ExprError::UnexpectedEnd { expected: "')'" });
    }

    Ok(out)
}

/// Splits expression text into tokens.
///
/// Power may be written as `**` or `^`. Numbers accept an optional fraction
/// and exponent (`1`, `.5`, `2.5e-3`); an `e`/`E` that is not followed by
/// exponent digits ends the number instead, so `2E` lexes as `2` then `E`.
fn lex(input: &str) -> Result<Vec<Spanned<'_>>, ExprError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::with_capacity(input.len() / 2 + 1);
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        let start = pos;

        let token = match byte {
            b' ' | b'\t' | b'\n' | b'\r' => {
                pos += 1;
                continue;
            }
            b'0'..=b'9' | b'.' => {
                pos = scan_number(bytes, pos);
                let text = &input[start..pos];
                match text.parse::<f64>() {
                    Ok(value) if value.is_finite() => Token::Number(value),
                    _ => {
                        return Err(ExprError::InvalidNumber {
                            text: text.to_string(),
                            pos: start,
                        });
                    }
                }
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                Token::Ident(&input[start..pos])
            }
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 2;
                Token::Op(Op::Pow)
            }
            b'+' | b'-' | b'*' | b'/' | b'^' | b'(' | b')' => {
                pos += 1;
                match byte {
                    b'+' => Token::Op(Op::Add),
                    b'-' => Token::Op(Op::Sub),
                    b'*' => Token::Op(Op::Mul),
                    b'/' => Token::Op(Op::Div),
                    b'^' => Token::Op(Op::Pow),
                    b'(' => Token::LeftParen,
                    _ => Token::RightParen,
                }
            }
            _ => {
                let ch = input[start..].chars().next().unwrap_or('\u{fffd}');
                return Err(ExprError::UnexpectedChar { ch, pos: start });
            }
        };

        tokens.push(Spanned { token, pos: start });
    }

    Ok(tokens)
}

/// Returns the end offset of the number starting at `start`.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    let digits = |pos: &mut usize| {
        while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
            *pos += 1;
        }
    };

    digits(&mut pos);
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        digits(&mut pos);
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            pos = exp;
            digits(&mut pos);
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of(terms: usize) -> String {
        let mut text = "x".to_string();
        text.push_str(&" + x".repeat(terms - 1));
        text
    }

    #[test]
    fn canonical_form() {
        assert_eq!(screen("x**2 - 2", "x").unwrap(), "x ^ 2 - 2");
        assert_eq!(screen("-x^2", "x").unwrap(), "- x ^ 2");
        assert_eq!(screen("sin(x)*E", "x").unwrap(), "sin(x) * E");
        assert_eq!(screen("+x", "x").unwrap(), "x");
    }

    #[test]
    fn numbers_are_written_in_plain_decimal() {
        assert_eq!(screen(".5", "x").unwrap(), "0.5");
        assert_eq!(screen("2.5e-3 * x", "x").unwrap(), "0.0025 * x");
        assert_eq!(screen("1E+2", "x").unwrap(), "100");
    }

    #[test]
    fn juxtaposition_is_rejected() {
        assert_eq!(
            screen("2x - 4", "x"),
            Err(ExprError::UnexpectedToken {
                expected: "an operator",
                found: "'x'".into(),
                pos: 1,
            })
        );
        for text in ["(x + 1)(x - 1)", "3(x + 1)", "x(2)", "2 x", "pi x", "2E"] {
            assert!(
                matches!(screen(text, "x"), Err(ExprError::UnexpectedToken { .. })),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn functions_need_parentheses() {
        assert!(matches!(
            screen("sin x", "x"),
            Err(ExprError::UnexpectedToken { pos: 4, .. })
        ));
        assert!(matches!(
            screen("x + sqrt", "x"),
            Err(ExprError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn parentheses_must_balance() {
        assert_eq!(
            screen("sin(x", "x"),
            Err(ExprError::UnexpectedEnd { expected: "')'" })
        );
        assert!(matches!(
            screen("x)", "x"),
            Err(ExprError::UnexpectedToken { pos: 1, .. })
        ));
        assert!(matches!(
            screen("()", "x"),
            Err(ExprError::UnexpectedToken { pos: 1, .. })
        ));
    }

    #[test]
    fn unknown_names() {
        assert_eq!(
            screen("x + y", "x"),
            Err(ExprError::UnknownSymbol {
                name: "y".into(),
                variable: "x".into(),
                pos: 4,
            })
        );
        assert!(matches!(
            screen("e^x", "x"),
            Err(ExprError::UnknownSymbol { .. })
        ));
        assert!(matches!(
            screen("xy", "x"),
            Err(ExprError::UnknownSymbol { .. })
        ));
        assert_eq!(
            screen("foo(x)", "x"),
            Err(ExprError::UnknownFunction {
                name: "foo".into(),
                pos: 0,
            })
        );
    }

    #[test]
    fn only_single_argument_calls() {
        assert!(matches!(
            screen("log(x, 2)", "x"),
            Err(ExprError::UnexpectedChar { ch: ',', pos: 5 })
        ));
    }

    #[test]
    fn operator_needs_operands() {
        assert!(matches!(
            screen("x^", "x"),
            Err(ExprError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            screen("* x", "x"),
            Err(ExprError::UnexpectedToken { pos: 0, .. })
        ));
        assert_eq!(screen("   ", "x"), Err(ExprError::Empty));
    }

    #[test]
    fn lexer_errors() {
        assert!(matches!(
            screen("x + .", "x"),
            Err(ExprError::InvalidNumber { pos: 4, .. })
        ));
        assert!(matches!(
            screen("1e999 * x", "x"),
            Err(ExprError::InvalidNumber { pos: 0, .. })
        ));
        assert!(matches!(
            screen("x # 2", "x"),
            Err(ExprError::UnexpectedChar { ch: '#', pos: 2 })
        ));
        assert!(matches!(
            screen("x·2", "x"),
            Err(ExprError::UnexpectedChar { ch: '·', pos: 1 })
        ));
    }

    #[test]
    fn flat_chain_depth_is_bounded() {
        assert!(screen(&sum_of(MAX_DEPTH), "x").is_ok());
        assert_eq!(
            screen(&sum_of(MAX_DEPTH + 1), "x"),
            Err(ExprError::TooDeep { limit: MAX_DEPTH })
        );
        assert_eq!(
            screen(&sum_of(200_000), "x"),
            Err(ExprError::TooDeep { limit: MAX_DEPTH })
        );
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let nested = |levels: usize| format!("{}x{}", "(".repeat(levels), ")".repeat(levels));
        assert!(screen(&nested(100), "x").is_ok());
        assert_eq!(
            screen(&nested(100_000), "x"),
            Err(ExprError::TooDeep { limit: MAX_DEPTH })
        );
    }

    #[test]
    fn terms_inside_groups_count_toward_depth() {
        let inner = sum_of(200);
        assert!(screen(&format!("({inner})"), "x").is_ok());
        assert_eq!(
            screen(&format!("({inner}) * ({inner})"), "x"),
            Ok(format!("({inner}) * ({inner})"))
        );
        assert_eq!(
            screen(&format!("sin({inner}) + {}", sum_of(60)), "x"),
            Err(ExprError::TooDeep { limit: MAX_DEPTH })
        );
    }
}
