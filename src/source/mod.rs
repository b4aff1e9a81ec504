use std::{io, sync::Arc};
use thiserror::Error;

use crate::network::{RouteDirection, ZoneGraph};

mod cache;
mod config;
mod csv_source;
pub mod models;

pub use cache::*;
pub use config::*;
pub use csv_source::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

/// Provides every route direction of the network.
pub trait RouteSource {
    fn fetch_all_routes(&self) -> Result<Vec<RouteDirection>, self::Error>;
}

/// Provides the zone adjacency graph.
/// Implementations are free to cache, see [`CachedZoneGraph`].
pub trait ZoneGraphSource {
    fn load_graph(&self) -> Result<Arc<ZoneGraph>, self::Error>;
}

impl<T: RouteSource + ?Sized> RouteSource for &T {
    fn fetch_all_routes(&self) -> Result<Vec<RouteDirection>, self::Error> {
        (**self).fetch_all_routes()
    }
}

impl<T: RouteSource + ?Sized> RouteSource for Arc<T> {
    fn fetch_all_routes(&self) -> Result<Vec<RouteDirection>, self::Error> {
        (**self).fetch_all_routes()
    }
}

impl<T: ZoneGraphSource + ?Sized> ZoneGraphSource for &T {
    fn load_graph(&self) -> Result<Arc<ZoneGraph>, self::Error> {
        (**self).load_graph()
    }
}

impl<T: ZoneGraphSource + ?Sized> ZoneGraphSource for Arc<T> {
    fn load_graph(&self) -> Result<Arc<ZoneGraph>, self::Error> {
        (**self).load_graph()
    }
}

/// Routes already held in memory.
impl RouteSource for [RouteDirection] {
    fn fetch_all_routes(&self) -> Result<Vec<RouteDirection>, self::Error> {
        Ok(self.to_vec())
    }
}

impl RouteSource for Vec<RouteDirection> {
    fn fetch_all_routes(&self) -> Result<Vec<RouteDirection>, self::Error> {
        Ok(self.clone())
    }
}

/// A graph already held in memory.
impl ZoneGraphSource for ZoneGraph {
    fn load_graph(&self) -> Result<Arc<ZoneGraph>, self::Error> {
        Ok(Arc::new(self.clone()))
    }
}
