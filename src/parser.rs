// Boolmatch Expression Parser
// Shunting-style conversion to reverse-Polish form and tree reduction

use crate::expr::{Expr, Leaf};
use crate::normalize::normalize;
use crate::tokenize::{tokenize, Token};
use crate::types::ParseError;
use std::collections::VecDeque;

/// Word distance allowed on each side of a `NEAR` pair
const NEAR_DISTANCE: usize = 4;

/// A compiled expression: the tree plus the leaf table its terms index into
#[derive(Debug)]
pub struct ParsedExpression {
    /// Root of the boolean expression tree
    pub root: Expr,

    /// Encoded patterns, indexed by the `LeafId` stored in each `Term`
    pub leaves: Vec<Leaf>,
}

/// Parse a query expression into an evaluation tree and leaf table.
///
/// Conversion runs a shunting-style scan: operators and `(` push onto an
/// operator stack, `)` pops to the matching `(`, terms go straight to the
/// output. Two adjacent operands get an implicit `OR` injected between
/// them; two adjacent operators are rejected. The reverse-Polish form is
/// then reduced over an operand stack, each operator consuming two
/// operands (`NOT` builds an and-not node). Term operands are normalized
/// and encoded as automaton patterns during reduction.
///
/// # Examples
/// ```
/// # use boolmatch::parse;
/// let parsed = parse("hello world").unwrap();
/// assert_eq!(parsed.root.to_string(), "(hello OR world)");
/// assert_eq!(parsed.leaves.len(), 2);
/// ```
pub fn parse(expression: &str) -> Result<ParsedExpression, ParseError> {
    let rpn = to_rpn(expression)?;

    let mut leaves: Vec<Leaf> = Vec::new();
    let mut operands: Vec<Expr> = Vec::new();

    for token in rpn {
        match token {
            Token::Term(raw) => {
                let normalized = normalize(&raw);
                let leaf = leaves.len();
                leaves.push(Leaf::encode(&normalized));
                operands.push(Expr::Term {
                    leaf,
                    raw: normalized,
                });
            }
            op => {
                let right = Box::new(operands.pop().ok_or(ParseError::StackUnderflow)?);
                let left = Box::new(operands.pop().ok_or(ParseError::StackUnderflow)?);
                operands.push(match op {
                    Token::And => Expr::And { left, right },
                    Token::Or => Expr::Or { left, right },
                    Token::Not => Expr::AndNot { left, right },
                    Token::Near => Expr::Near {
                        left,
                        right,
                        left_distance: NEAR_DISTANCE,
                        right_distance: NEAR_DISTANCE,
                    },
                    Token::ONear => Expr::Near {
                        left,
                        right,
                        left_distance: 0,
                        right_distance: NEAR_DISTANCE,
                    },
                    // parentheses never reach the reduced form
                    _ => unreachable!("non-operator token in RPN"),
                });
            }
        }
    }

    let root = operands.pop().ok_or(ParseError::NoTokens)?;
    if !operands.is_empty() {
        return Err(ParseError::MultipleRoots);
    }

    Ok(ParsedExpression { root, leaves })
}

/// Convert the token stream to reverse-Polish order
fn to_rpn(expression: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens: VecDeque<Token> = tokenize(expression).into();
    let mut rpn: Vec<Token> = Vec::new();
    let mut stack: Vec<Token> = Vec::new();

    while let Some(token) = tokens.pop_front() {
        let is_op = token.is_operator();

        if let Some(next) = tokens.front() {
            let next_is_op = next.is_operator();
            if is_op && next_is_op {
                return Err(ParseError::MissingTerm);
            }
            // two adjacent operands mean an implicit OR
            if !is_op
                && token != Token::LParen
                && !next_is_op
                && *next != Token::RParen
            {
                tokens.push_front(Token::Or);
            }
        }

        if is_op || token == Token::LParen {
            stack.push(token);
        } else if token == Token::RParen {
            loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => rpn.push(op),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            }
        } else {
            rpn.push(token);
        }
    }

    while let Some(op) = stack.pop() {
        if op == Token::LParen {
            return Err(ParseError::MismatchedParentheses);
        }
        rpn.push(op);
    }

    Ok(rpn)
}
