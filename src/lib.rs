//! # rs_halton
//!
//! Fast generation of [Halton sequences][halton], a deterministic low
//! discrepancy sequence that appears to be random. The uniform
//! distribution and repeatability make the sequence ideal for choosing
//! sample points or placing objects in 2D or 3D space.
//!
//! The incremental generator [here] is adapted from "Fast, portable,
//! and reliable algorithm for the calculation of Halton numbers" by
//! Miroslav Kolář and Seamus F. O'Shea. Single values can be computed
//! directly with [number], points of several dimensions come from
//! [each].
//!
//! ```
//! use rs_halton::core::each::each;
//! use rs_halton::core::lowdiscrepancy::number;
//!
//! assert_eq!(number(2, 3).unwrap(), 0.75);
//! let third = each(&[2, 3]).unwrap().nth(2).unwrap();
//! assert_eq!(third[0], 0.75);
//! ```
//!
//! [halton]: https://en.wikipedia.org/wiki/Halton_sequence
//! [here]: core/sequence/struct.Sequence.html
//! [number]: core/lowdiscrepancy/fn.number.html
//! [each]: core/each/fn.each.html

pub mod blockqueue;
pub mod core;
pub mod samplers;
