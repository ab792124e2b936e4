//! League table computation: statistics from fixture results, then ordering.

pub mod aggregator;
pub mod ranker;
