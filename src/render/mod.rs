//! Serialization of canonical documents back to the wire contract.

mod json;
mod wire;

pub use json::{to_json, JsonFormat};
pub use wire::to_wire_value;
