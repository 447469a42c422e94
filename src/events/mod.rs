pub mod global;
pub mod pointer;

pub use global::wire_global_tick;
pub use pointer::{wire_pointer_tracking, PointerWiring};
