//! StockTable Core — per-ticker historical price files as in-memory tables.
//!
//! This crate contains the whole data path:
//! - Dynamic tables with a union schema and explicit absent cells
//! - CSV store: resolve a ticker to its file, parse, tag, combine
//! - Config for where the data folder lives

pub mod data;
