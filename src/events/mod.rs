pub mod pointer;

pub use pointer::{wire_pointer_sampler, wire_viewport_resize};
