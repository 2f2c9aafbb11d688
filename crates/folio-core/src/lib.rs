pub mod anim;
pub mod connect;
pub mod constants;
pub mod error;
pub mod field;
pub mod pointer;
pub mod reveal;
pub mod section;
pub mod surface;
pub mod tracker;

pub use anim::*;
pub use connect::*;
pub use error::*;
pub use field::*;
pub use pointer::*;
pub use reveal::*;
pub use section::*;
pub use surface::*;
pub use tracker::*;
