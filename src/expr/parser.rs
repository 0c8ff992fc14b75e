//! Infix expression scanner
//!
//! Splits an expression into a flat operand list and a flat operator list:
//! - `2+2*2` -> `[2, 2, 2]` / `[+, *]`
//! - `(2+3)*4` -> `[5, 4]` / `[*]` (parenthesized groups are evaluated
//!   recursively and land as a single operand)

use super::ast::Op;
use crate::error::CalcError;

/// Scan an expression into operands and operators.
///
/// A leading `-` is taken as the sign of the first numeric literal. Unary
/// minus is recognized nowhere else; `3*-2` is rejected as structurally
/// inconsistent rather than parsed as a negation.
pub fn parse(expression: &str) -> Result<(Vec<f64>, Vec<Op>), CalcError> {
    let bytes = expression.as_bytes();
    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<Op> = Vec::new();
    let mut number = String::new();
    let mut i = 0;

    while i < bytes.len() {
        let ch = bytes[i] as char;

        if i == 0 && ch == '-' {
            number.push(ch);
            i += 1;
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            number.push(ch);
        } else if ch == '(' {
            let close = matching_paren(bytes, i)?;
            // Inner errors propagate unchanged; the inner value becomes a
            // single operand.
            let value = super::evaluate(&expression[i + 1..close])?;
            operands.push(value);
            i = close;
        } else if let Some(op) = Op::from_char(ch) {
            if !number.is_empty() {
                operands.push(parse_literal(&number)?);
                number.clear();
            }
            operators.push(op);
        } else {
            return Err(CalcError::InvalidExpression);
        }

        i += 1;
    }

    if !number.is_empty() {
        operands.push(parse_literal(&number)?);
    }

    // A trailing/doubled operator or an empty group leaves the counts
    // inconsistent.
    if operands.is_empty() || operands.len() == operators.len() {
        return Err(CalcError::InvalidExpression);
    }

    Ok((operands, operators))
}

/// Find the index of the `)` matching the `(` at `open`
fn matching_paren(bytes: &[u8], open: usize) -> Result<usize, CalcError> {
    let mut depth = 1;
    let mut j = open + 1;

    while j < bytes.len() {
        match bytes[j] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(j);
                }
            }
            _ => {}
        }
        j += 1;
    }

    Err(CalcError::InvalidExpression)
}

fn parse_literal(number: &str) -> Result<f64, CalcError> {
    number
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidExpression)
}
