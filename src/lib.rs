//! Fare engine for Andante occasional tickets.
//!
//! Given stops, route stop sequences and the zone adjacency graph, works out
//! which zones a ride crosses, which ticket covers it, and whether a journey
//! with transfers is best served by one ticket or one per leg.

pub mod fare;
pub mod network;
pub mod prelude;
pub mod shared;
pub mod source;
