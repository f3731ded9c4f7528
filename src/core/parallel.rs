//! Generate long runs of points with all available cores.

// others
use tracing::info;
// halton
use crate::blockqueue::BlockQueue;
use crate::core::each::Point;
use crate::core::error::{HaltonError, Result};
use crate::core::halton::Index;
use crate::core::sampler::Sampler;

/// Finished blocks, slotted by block number.
type Blocks = Vec<Option<Vec<Point>>>;

/// Produce the next `count` points of `sampler` multi-threaded.
///
/// The points are split into blocks of `block_size`. Every worker
/// clones `sampler`, jumps to the start of the block it pulled from
/// the queue and generates the block. The blocks are put back together
/// in order, so the result is the same as calling `get_point()` on
/// `sampler` `count` times. A `num_threads` of 0 uses one thread per
/// core.
pub fn generate(
    sampler: &Sampler,
    count: usize,
    block_size: usize,
    num_threads: u8,
    progress: bool,
) -> Result<Vec<Point>> {
    let block_queue = BlockQueue::new(count as Index, block_size as Index)?;
    let num_cores: usize = if num_threads == 0_u8 {
        num_cpus::get()
    } else {
        num_threads as usize
    };
    info!(
        "Generating {} point(s) in {} block(s) with {:?} thread(s) ...",
        count,
        block_queue.len(),
        num_cores
    );
    let bq = &block_queue;
    let blocks: Blocks = crossbeam::scope(|scope| -> Result<Blocks> {
        let (block_tx, block_rx) = crossbeam_channel::bounded(num_cores);
        // spawn worker threads
        for _ in 0..num_cores {
            let block_tx = block_tx.clone();
            scope.spawn(move |_| {
                while let Some(block) = bq.next() {
                    let mut block_sampler: Sampler = sampler.clone();
                    let n: usize = (block.samples.end - block.samples.start) as usize;
                    let points = block_sampler
                        .skip_samples(block.samples.start)
                        .and_then(|_| block_sampler.get_points(n));
                    // the receiver only hangs up after an error
                    if block_tx.send((block.number, points)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(block_tx);
        // collect the blocks on this thread
        let mut blocks: Blocks = vec![None; bq.len()];
        let mut pb = if progress {
            Some(pbr::ProgressBar::new(bq.len() as u64))
        } else {
            None
        };
        for _ in 0..bq.len() {
            let (number, points) = block_rx
                .recv()
                .map_err(|_| HaltonError::WorkerPanicked)?;
            blocks[number] = Some(points?);
            if let Some(pb) = pb.as_mut() {
                pb.inc();
            }
        }
        if let Some(pb) = pb.as_mut() {
            pb.finish();
        }
        Ok(blocks)
    })
    .map_err(|_| HaltonError::WorkerPanicked)??;
    Ok(blocks.into_iter().flatten().flatten().collect())
}
