pub mod agent;
pub mod board;
pub mod evaluate;
#[cfg(feature = "instrumentation")]
pub mod instrumentation;
pub mod search;
