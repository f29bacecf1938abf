pub mod counter;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod text;

pub use counter::*;
pub use particles::*;
pub use pointer::*;
pub use reveal::*;
pub use scroll::*;
pub use text::*;
