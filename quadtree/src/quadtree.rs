//! Region quadtree for broad-phase rectangle queries.
//!
//! [`QuadNode`] narrows "which stored rectangles might touch this one?" down
//! to a subtree. Results are candidates only; run an exact overlap test on
//! them.

mod config;
mod node;
mod quadrant;

pub use config::Config;
pub use node::{QuadNode, QuadTreeStats};
pub use quadrant::{classify, Classification, Quadrant};
