//! Parser tests through the public API.
//!
//! - `parser`: accepted and rejected inputs, incremental parsing, telemetry
//! - `properties`: generated round-trip and whitespace properties

mod properties;
