pub mod position;
pub mod tags;

pub use position::extract_position;
pub use tags::*;
