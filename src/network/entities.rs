use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use crate::shared::{RouteId, StopId, ZoneId};

/// A physical point where passengers can board or alight from a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Unique external identifier for the stop.
    pub id: StopId,
    /// Human-readable name (e.g., "Trindade").
    pub name: Arc<str>,
    /// Short public code printed on the stop pole, if any.
    pub code: Option<Arc<str>>,
    /// Fare zone the stop belongs to. Unzoned stops cannot be priced.
    pub zone_id: Option<ZoneId>,
}

impl Stop {
    pub fn new(id: impl Into<StopId>, name: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: None,
            zone_id: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_zone(mut self, zone_id: impl Into<ZoneId>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }
}

/// One of the two opposite travel variants of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Direction {
    Zero,
    One,
}

impl Direction {
    /// Zero maps to [`Direction::Zero`], any other value to [`Direction::One`].
    pub fn from_raw(raw: i64) -> Self {
        if raw == 0 { Self::Zero } else { Self::One }
    }

    pub const fn as_raw(&self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        Self::from_raw(value.into())
    }
}

impl From<Direction> for u8 {
    fn from(value: Direction) -> Self {
        value.as_raw()
    }
}

/// Composite key of a route direction, string encoded as `"{route_id}_{direction}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteDirectionId {
    pub route_id: RouteId,
    pub direction: Direction,
}

impl RouteDirectionId {
    pub fn new(route_id: impl Into<RouteId>, direction: Direction) -> Self {
        Self {
            route_id: route_id.into(),
            direction,
        }
    }

    /// Parses the `"{route_id}_{direction}"` form.
    /// Returns `None` unless there are exactly two `_` separated parts
    /// and the second one starts with an integer. Trailing characters after
    /// the integer are ignored, so `"12_1x"` is direction one of route 12.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split('_');
        let route_id = parts.next()?;
        let direction = leading_integer(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(route_id, Direction::from_raw(direction)))
    }
}

/// Integer at the start of `value`, after optional whitespace and sign.
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let sign_len = usize::from(value.starts_with(['+', '-']));
    let digits_len = value[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    value[..sign_len + digits_len].parse().ok()
}

impl fmt::Display for RouteDirectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.route_id, self.direction.as_raw())
    }
}

/// Classification of the vehicle, following the GTFS route_type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteType {
    Tram,
    Metro,
    Rail,
    Bus,
}

impl RouteType {
    /// Unknown codes are treated as buses.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::Tram,
            1 => Self::Metro,
            2 => Self::Rail,
            _ => Self::Bus,
        }
    }

    pub const fn as_raw(&self) -> u8 {
        match self {
            Self::Tram => 0,
            Self::Metro => 1,
            Self::Rail => 2,
            Self::Bus => 3,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Tram => "Tram",
            Self::Metro => "Metro",
            Self::Rail => "Rail",
            Self::Bus => "Bus",
        }
    }

    /// Display order of the route catalogue: metro, tram, bus, rail.
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Metro => 0,
            Self::Tram => 1,
            Self::Bus => 2,
            Self::Rail => 3,
        }
    }
}

/// A route travelled in one direction, with its ordered stop sequence.
///
/// The stop order is the only source of truth for "A comes before B";
/// geography plays no part in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDirection {
    pub id: RouteDirectionId,
    pub short_name: Arc<str>,
    pub start_stop: Stop,
    pub end_stop: Stop,
    pub stops: Arc<[Stop]>,
    pub route_type: RouteType,
}

impl RouteDirection {
    /// First position of the stop in this direction's sequence.
    pub fn position_of(&self, stop_id: &str) -> Option<usize> {
        self.stops.iter().position(|stop| stop.id == stop_id)
    }

    /// Positions of `from` and `to` when both are served and `from` comes first.
    pub fn forward_span(&self, from: &str, to: &str) -> Option<(usize, usize)> {
        let from_idx = self.position_of(from)?;
        let to_idx = self.position_of(to)?;
        (from_idx < to_idx).then_some((from_idx, to_idx))
    }
}
