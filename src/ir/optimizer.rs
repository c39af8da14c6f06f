use super::ir::Instruction;

const REDUNDANT_LOAD: &str = "LOAD 0";

/// Drops every instruction whose text contains `LOAD 0`.
///
/// A literal text filter: `LOAD 0.5` goes too, and nothing is folded.
pub fn optimize(ir: Vec<Instruction>) -> Vec<Instruction> {
    let before = ir.len();
    let optimized: Vec<Instruction> = ir
        .into_iter()
        .filter(|instruction| !instruction.to_string().contains(REDUNDANT_LOAD))
        .collect();

    log::debug!("optimizer removed {} instructions", before - optimized.len());
    optimized
}
