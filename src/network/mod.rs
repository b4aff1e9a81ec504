mod catalog;
mod entities;
mod zone_graph;

pub use catalog::*;
pub use entities::*;
pub use zone_graph::*;
