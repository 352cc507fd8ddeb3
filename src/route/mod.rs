//! Route graph construction and path search.
//!
//! `RouteGraph::build(..)` merges decoded alternatives into one
//! undirected weighted graph; `RouteGraph::labels(..)` names its nodes;
//! `all_paths(..)` and `shortest_path(..)` query it.

#[doc(hidden)]
pub mod enumerate;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod graph;
#[doc(hidden)]
pub mod label;
#[doc(hidden)]
pub mod shortest;

#[doc(inline)]
pub use enumerate::{pick_minimum, PathSummary};
#[doc(inline)]
pub use error::RouteError;
#[doc(inline)]
pub use graph::{PathTotals, RouteGraph, Weight};
#[doc(inline)]
pub use label::{alphabetic, labels, rendered, LabelMap};
#[doc(inline)]
pub use shortest::ShortestPath;
