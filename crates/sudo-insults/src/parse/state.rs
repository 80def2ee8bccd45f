//! Flat three-state toggle for the PC / non-PC conditional blocks.

/// Opens the politically correct block.
pub const PC_MARKER: &str = "#ifdef PC_INSULTS";

/// Switches from the PC block to the non-PC block.
pub const ELSE_MARKER: &str = "#else";

/// Closes the non-PC block.
pub const ENDIF_MARKER: &str = "#endif";

/// Where the parser currently is relative to the conditional blocks.
///
/// Transitions only ever go Normal -> PcBlock -> NonPcBlock -> Normal.
/// There is no nesting, and a marker seen in the wrong state is plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    Normal,
    PcBlock,
    NonPcBlock,
}

impl BlockState {
    /// The state a trimmed `line` moves to, if it is the marker expected here.
    pub fn transition(self, line: &str) -> Option<BlockState> {
        match (self, line) {
            (BlockState::Normal, PC_MARKER) => Some(BlockState::PcBlock),
            (BlockState::PcBlock, ELSE_MARKER) => Some(BlockState::NonPcBlock),
            (BlockState::NonPcBlock, ENDIF_MARKER) => Some(BlockState::Normal),
            _ => None,
        }
    }

    /// Whether an insult found in this state is kept for the given PC mode.
    pub fn admits(self, pc: bool) -> bool {
        match self {
            BlockState::Normal => true,
            BlockState::PcBlock => pc,
            BlockState::NonPcBlock => !pc,
        }
    }
}
