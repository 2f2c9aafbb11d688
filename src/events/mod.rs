pub mod pointer;
pub mod scroll;

pub use pointer::{wire_pointer_effects, PointerWiring};
pub use scroll::{wire_scroll_spy, SpyWiring};
