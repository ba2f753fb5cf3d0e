pub mod board;
pub mod events;
pub mod rule_set;
pub mod sim;

/// State of a single cell: `0` is dead, `1` is alive. No other values exist.
pub type CellState = u8;
