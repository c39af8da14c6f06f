//! Semantic analysis module.
//!
//! A single pass over the token stream that reports identifiers which were
//! never defined. There is no scoping and no type information.

pub mod semantic;

#[cfg(test)]
mod tests;
