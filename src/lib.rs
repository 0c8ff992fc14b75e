// SPDX-License-Identifier: MIT

//! calc-rs: an infix arithmetic expression evaluator with an HTTP API
//!
//! The [`expr`] module is the core: a pure, re-entrant evaluator for
//! expressions over `+ - * /`, decimal literals, and parentheses. The
//! [`server`] module wraps it in a JSON-over-HTTP endpoint.

pub mod error;
pub mod expr;
pub mod server;
