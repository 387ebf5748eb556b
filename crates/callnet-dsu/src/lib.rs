//! Callnet Disjoint Sets
//!
//! Connectivity over a fixed population of `n` subscribers, numbered
//! `0..n`. Components are tracked with a union-find forest:
//!
//! - **Union by size**: the smaller tree's root hangs under the larger's
//! - **Path compression**: `find` re-points every visited node at the root
//!
//! Together these keep `find` and `union` near-constant amortized.
//!
//! # Invariants
//!
//! - Every component has exactly one representative `r` with `parent[r] == r`
//! - `size[r]` is exact for representatives; sizes stored on other nodes are
//!   stale and never read
//! - Sizes over all representatives sum to `n`
//! - `find(find(x)) == find(x)`

mod forest;

pub use forest::DisjointSets;
