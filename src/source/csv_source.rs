use csv::{ReaderBuilder, Trim};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::{
    collections::HashMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::{
    network::{Direction, RouteDirection, RouteDirectionId, RouteType, Stop, ZoneGraph},
    shared::{StopId, natural_cmp},
    source::{
        self, Config, RouteSource, ZoneGraphSource,
        models::{RouteRow, StopRow, ZoneEdgeRow, non_empty},
    },
};

#[derive(Default, Debug, Clone)]
pub enum StorageType {
    #[default]
    None,
    /// A folder holding the tables as plain files.
    Directory(PathBuf),
    /// A zip archive holding the tables at its root.
    Zip(PathBuf),
}

/// Reads the network from the stops, routes and zone edge tables.
#[derive(Default)]
pub struct CsvSource {
    config: Config,
    storage: StorageType,
}

impl CsvSource {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = StorageType::Directory(path.into());
        self
    }

    pub fn from_zip(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = StorageType::Zip(path.into());
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &StorageType {
        &self.storage
    }

    pub fn stream_stops<F>(&self, f: F) -> Result<(), source::Error>
    where
        F: FnMut((usize, StopRow)),
    {
        self.stream(&self.config.stops_file_name, f)
    }

    pub fn stream_routes<F>(&self, f: F) -> Result<(), source::Error>
    where
        F: FnMut((usize, RouteRow)),
    {
        self.stream(&self.config.routes_file_name, f)
    }

    pub fn stream_zone_edges<F>(&self, f: F) -> Result<(), source::Error>
    where
        F: FnMut((usize, ZoneEdgeRow)),
    {
        self.stream(&self.config.zone_edges_file_name, f)
    }

    fn stream<T, F>(&self, file_name: &str, f: F) -> Result<(), source::Error>
    where
        T: DeserializeOwned,
        F: FnMut((usize, T)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Directory(path) => stream_from_directory(path, file_name, f),
            StorageType::Zip(path) => stream_from_zip(path, file_name, f),
        }
    }

    fn load_stops(&self) -> Result<HashMap<StopId, Stop>, source::Error> {
        debug!("Loading stops...");
        let now = Instant::now();
        let mut stop_lookup: HashMap<StopId, Stop> = HashMap::new();
        self.stream_stops(|(i, row)| {
            if non_empty(row.stop_id.clone()).is_none() {
                warn!("Skipping stop row {i}: missing stop_id");
                return;
            }
            let stop: Stop = row.into();
            stop_lookup.insert(stop.id.clone(), stop);
        })?;
        debug!(
            "Loading {} stops took {:?}",
            stop_lookup.len(),
            now.elapsed()
        );
        Ok(stop_lookup)
    }

    fn load_routes(
        &self,
        stop_lookup: &HashMap<StopId, Stop>,
    ) -> Result<Vec<RouteDirection>, source::Error> {
        debug!("Loading routes...");
        let now = Instant::now();
        let mut routes: Vec<RouteDirection> = Vec::new();
        self.stream_routes(|(i, row)| {
            if let Some(route) = self.route_from_row(i, row, stop_lookup) {
                routes.push(route);
            }
        })?;
        routes.par_sort_by(|a, b| {
            natural_cmp(&a.short_name, &b.short_name)
                .then_with(|| a.id.direction.cmp(&b.id.direction))
        });
        debug!(
            "Loading {} route directions took {:?}",
            routes.len(),
            now.elapsed()
        );
        Ok(routes)
    }

    fn route_from_row(
        &self,
        row_idx: usize,
        row: RouteRow,
        stop_lookup: &HashMap<StopId, Stop>,
    ) -> Option<RouteDirection> {
        let (
            Some(route_id),
            Some(short_name),
            Some(direction),
            Some(start_stop_id),
            Some(end_stop_id),
            Some(sequence),
            Some(route_type),
        ) = (
            non_empty(row.route_id),
            non_empty(row.route_short_name),
            non_empty(row.direction_id),
            non_empty(row.start_stop_id),
            non_empty(row.end_stop_id),
            non_empty(row.stop_sequence),
            non_empty(row.route_type),
        )
        else {
            warn!("Skipping route row {row_idx}: missing required fields");
            return None;
        };

        let Ok(direction) = direction.parse::<i64>() else {
            warn!("Skipping route {route_id}: invalid direction_id {direction:?}");
            return None;
        };
        let Ok(route_type) = route_type.parse::<i64>() else {
            warn!("Skipping route {route_id}: invalid route_type {route_type:?}");
            return None;
        };
        let route_type = RouteType::from_raw(route_type);
        if self.config.excluded_route_types.contains(&route_type) {
            debug!("Skipping {} route {route_id}", route_type.name());
            return None;
        }

        let (Some(start_stop), Some(end_stop)) = (
            stop_lookup.get(start_stop_id.as_str()),
            stop_lookup.get(end_stop_id.as_str()),
        ) else {
            warn!("Skipping route {route_id}: unknown start or end stop");
            return None;
        };

        let stops: Arc<[Stop]> = sequence
            .split('|')
            .filter_map(|stop_id| stop_lookup.get(stop_id.trim()).cloned())
            .collect();

        Some(RouteDirection {
            id: RouteDirectionId::new(route_id, Direction::from_raw(direction)),
            short_name: short_name.into(),
            start_stop: start_stop.clone(),
            end_stop: end_stop.clone(),
            stops,
            route_type,
        })
    }
}

impl RouteSource for CsvSource {
    fn fetch_all_routes(&self) -> Result<Vec<RouteDirection>, source::Error> {
        let stop_lookup = self.load_stops()?;
        self.load_routes(&stop_lookup)
    }
}

impl ZoneGraphSource for CsvSource {
    fn load_graph(&self) -> Result<Arc<ZoneGraph>, source::Error> {
        debug!("Loading zone graph...");
        let now = Instant::now();
        let mut graph = ZoneGraph::new();
        self.stream_zone_edges(|(_, row)| {
            if let (Some(zone), Some(neighbor)) = (non_empty(row.zone), non_empty(row.neighbor)) {
                graph.add_edge(zone, neighbor);
            }
        })?;
        debug!(
            "Loading zone graph with {} zones took {:?}",
            graph.len(),
            now.elapsed()
        );
        Ok(Arc::new(graph))
    }
}

fn stream_from_directory<T, F>(dir: &Path, file_name: &str, f: F) -> Result<(), source::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let path = dir.join(file_name);
    if !path.is_file() {
        return Err(source::Error::FileNotFound(file_name.to_string()));
    }
    let file = File::open(path)?;
    stream_records(file, file_name, f)
}

fn stream_from_zip<T, F>(zip_path: &Path, file_name: &str, f: F) -> Result<(), source::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let index = archive
        .index_for_name(file_name)
        .ok_or_else(|| source::Error::FileNotFound(file_name.to_string()))?;
    let file = archive.by_index(index)?;
    stream_records(file, file_name, f)
}

fn stream_records<R, T, F>(reader: R, file_name: &str, mut f: F) -> Result<(), source::Error>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    for (i, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(record) => f((i, record)),
            Err(err) => warn!("Skipping malformed row {i} in {file_name}: {err}"),
        }
    }
    Ok(())
}
