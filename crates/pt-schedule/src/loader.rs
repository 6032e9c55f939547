//! CSV patrol-path loader.
//!
//! # CSV format
//!
//! One row per vertex, vertices in drawing order:
//!
//! ```csv
//! path,segment,x,y
//! courtyard,0,100,100
//! courtyard,0,400,100
//! courtyard,0,400,400
//! courtyard,0,100,100
//! courtyard,1,600,100
//! courtyard,1,600,300
//! ```
//!
//! Rows sharing `(path, segment)` form one [`PatrolPath`].  Paths are returned
//! in order of first appearance, which is the order multi-path followers
//! patrol them in.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pt_core::Point;

use crate::{PatrolPath, ScheduleError};

#[derive(Deserialize)]
struct PathRecord {
    path:    String,
    segment: u32,
    x:       f32,
    y:       f32,
}

/// Load patrol paths from a CSV file.
pub fn load_paths_csv(path: &Path) -> Result<Vec<PatrolPath>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_paths_reader(file)
}

/// Like [`load_paths_csv`] but accepts any `Read` source.
pub fn load_paths_reader<R: Read>(reader: R) -> Result<Vec<PatrolPath>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut keys: Vec<(String, u32)> = Vec::new();
    let mut paths: Vec<PatrolPath> = Vec::new();

    for result in csv_reader.deserialize::<PathRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        if !(row.x.is_finite() && row.y.is_finite()) {
            return Err(ScheduleError::Parse(format!(
                "non-finite vertex ({}, {}) in path {:?}",
                row.x, row.y, row.path
            )));
        }
        let key = (row.path, row.segment);
        let idx = match keys.iter().position(|k| *k == key) {
            Some(i) => i,
            None => {
                paths.push(PatrolPath::new(key.0.clone(), Vec::new()));
                keys.push(key);
                paths.len() - 1
            }
        };
        paths[idx].vertices.push(Point::new(row.x, row.y));
    }

    Ok(paths)
}
