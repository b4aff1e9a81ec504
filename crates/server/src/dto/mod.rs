mod route;
mod stop;
mod ticket;

pub use route::*;
pub use stop::*;
pub use ticket::*;
