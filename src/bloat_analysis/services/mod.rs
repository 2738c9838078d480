/// Services layer - the dependency graph and closure engine
///
/// Everything here is either a pure function over domain values or an
/// orchestrator that only talks to the outside world through ports.
pub mod chain;
pub mod closure;
pub mod extractor;
pub mod graph_builder;
pub mod ignore_filter;
pub mod ranking;

pub use chain::{heaviest_chain, ChainLink};
pub use closure::ClosureEngine;
pub use extractor::extract_dependencies;
pub use graph_builder::GraphBuilder;
pub use ignore_filter::IgnoreFilter;
pub use ranking::{rank_by_closure_size, top_explicit};
