use crate::types::BlockRecord;
use serde::Serialize;

/// One displayable block: a chain record paired with its display index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewBlock {
    /// Zero-based position within the filtered view, not the raw chain.
    /// Index `i` is always the `(i+1)`-th non-genesis record.
    pub index: usize,
    pub record: BlockRecord,
}

/// Render-ready projection of the chain: every genesis record dropped, the
/// rest indexed contiguously in received order. Rebuilt whole on every sync
/// and discarded afterwards; nothing carries over between syncs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    blocks: Vec<ViewBlock>,
}

impl ViewModel {
    /// Derive the view from a chain response. Pure: the same chain always
    /// produces the same view.
    pub fn from_chain(chain: &[BlockRecord]) -> Self {
        let blocks = chain
            .iter()
            .filter(|block| !block.is_genesis())
            .cloned()
            .enumerate()
            .map(|(index, record)| ViewBlock { index, record })
            .collect();
        Self { blocks }
    }

    pub fn blocks(&self) -> &[ViewBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
