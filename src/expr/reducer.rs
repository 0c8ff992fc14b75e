//! Two-pass precedence reduction over flat operand/operator lists

use super::ast::Op;
use crate::error::CalcError;

/// Collapse operands and operators into a single value.
///
/// Pass 1 folds `*` and `/` into the term on their left, left to right.
/// Pass 2 accumulates the surviving terms with `+` and `-`, left to right.
/// Expects the scanner's structural invariant (one more operand than
/// operators, at least one operand).
pub(super) fn reduce(operands: &[f64], operators: &[Op]) -> Result<f64, CalcError> {
    let mut terms: Vec<f64> = vec![operands[0]];
    let mut pending: Vec<Op> = Vec::new();

    for (op, &next) in operators.iter().zip(&operands[1..]) {
        match op {
            Op::Mul => {
                let last = terms.len() - 1;
                terms[last] *= next;
            }
            Op::Div => {
                // Exact-zero test: any nonzero divisor, however small,
                // divides normally.
                if next == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                let last = terms.len() - 1;
                terms[last] /= next;
            }
            Op::Add | Op::Sub => {
                pending.push(*op);
                terms.push(next);
            }
        }
    }

    let mut total = terms[0];
    for (op, &term) in pending.iter().zip(&terms[1..]) {
        if *op == Op::Add {
            total += term;
        } else {
            total -= term;
        }
    }

    Ok(total)
}
