mod destinations;
mod recommendation;
mod routes;
mod zones;

pub use destinations::*;
pub use recommendation::*;
pub use routes::*;
pub use zones::*;
