//! Provides a queue of index blocks that the samplers of the worker
//! threads are positioned from. The queue itself is not changed after
//! creation, we simply work through it with an atomic counter to track
//! the next block to work on.

// std
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
// others
use tracing::warn;
// halton
use crate::core::error::{HaltonError, Result};
use crate::core::halton::Index;

// see github/tray_rust/src/sampler/block_queue.rs

/// One contiguous run of sample numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Position of the block within the queue
    pub number: usize,
    pub samples: Range<Index>,
}

/// The queue of blocks to be worked on shared immutably between worker threads.
pub struct BlockQueue {
    blocks: Vec<Block>,
    /// Number of samples in a full block
    block_size: Index,
    /// Index of the next block to be worked on
    next: AtomicUsize,
}

impl BlockQueue {
    /// Create a block queue covering the first `samples` sample
    /// numbers in blocks of `block_size`. The last block may be shorter.
    pub fn new(samples: Index, block_size: Index) -> Result<BlockQueue> {
        if block_size == 0 {
            return Err(HaltonError::InvalidArgument(
                "block size must be at least 1".to_string(),
            ));
        }
        let num_blocks: Index = samples / block_size + Index::from(samples % block_size != 0);
        let blocks: Vec<Block> = (0..num_blocks)
            .map(|i| {
                let start: Index = i * block_size;
                Block {
                    number: i as usize,
                    samples: start..std::cmp::min(start.saturating_add(block_size), samples),
                }
            })
            .collect();
        if blocks.is_empty() {
            warn!("This block queue is empty!");
        }
        Ok(BlockQueue {
            blocks,
            block_size,
            next: AtomicUsize::new(0),
        })
    }
    pub fn block_size(&self) -> Index {
        self.block_size
    }
    /// Get an iterator to work through the queue
    pub fn iter(&self) -> BlockQueueIterator<'_> {
        BlockQueueIterator { queue: self }
    }
    /// Get the next block in the queue or None if the queue is finished
    pub fn next(&self) -> Option<Block> {
        let i = self.next.fetch_add(1, Ordering::AcqRel);
        self.blocks.get(i).cloned()
    }
    /// Get the length of the queue
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.next.load(Ordering::Acquire) >= self.blocks.len()
    }
}

/// Iterator to work through the queue safely
pub struct BlockQueueIterator<'a> {
    queue: &'a BlockQueue,
}

impl<'a> Iterator for BlockQueueIterator<'a> {
    type Item = Block;
    fn next(&mut self) -> Option<Block> {
        self.queue.next()
    }
}
