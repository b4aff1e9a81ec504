mod ids;
pub mod natural;

pub use ids::*;
pub use natural::natural_cmp;
