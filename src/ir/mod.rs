//! Intermediate code module.
//!
//! - `ir` maps tokens to flat opcode/operand instructions
//! - `optimizer` removes redundant loads from an instruction list
//!
//! Instructions carry no control flow and no variable binding.

pub mod ir;
pub mod optimizer;
