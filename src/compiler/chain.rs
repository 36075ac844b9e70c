use crate::block::Block;

/// An append-only builder for one statement chain.
///
/// Blocks are collected in order and only threaded into a `next`-linked
/// chain at finalization, so independent branches (the main sequence, a
/// `THEN` branch, an `ELSE` branch) can never alias each other's tail.
#[derive(Debug, Default)]
pub(crate) struct ChainBuilder {
    blocks: Vec<Block>,
}

impl ChainBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Links the collected blocks front to back and returns the head, or
    /// `None` when nothing was appended.
    pub(crate) fn finish(self) -> Option<Block> {
        let mut head: Option<Block> = None;
        for mut block in self.blocks.into_iter().rev() {
            block.next = head.take().map(Box::new);
            head = Some(block);
        }
        head
    }
}
