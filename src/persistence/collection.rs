//! JSON document collection
//!
//! A [`Collection`] wraps one local JSON file holding an array of records
//! addressed by id. Every insert/update/delete rewrites the whole file
//! immediately; there are no transactions and no locking (single-process,
//! single-window access is assumed). A missing or malformed file is an
//! unrecoverable error, no repair is attempted.

use crate::constants::{APP_DATA_DIR, COLLECTION_CREATOR, COLLECTION_FILE_NAME, COLLECTION_VERSION};
use crate::persistence::record::Record;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Header metadata written alongside the records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionMetadata {
    pub created: String,
    pub modified: String,
    pub creator: String,
}

impl Default for CollectionMetadata {
    fn default() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            created: now.clone(),
            modified: now,
            creator: COLLECTION_CREATOR.to_string(),
        }
    }
}

/// On-disk layout of the collection file
///
/// Records are kept as raw JSON values so that a single unreadable record
/// (e.g. an unknown `type` tag) can be skipped instead of failing the whole
/// load. The header fields default when absent, which keeps bare
/// `{"data": [...]}` files loadable.
#[derive(Debug, Serialize, Deserialize)]
struct CollectionFile {
    #[serde(default)]
    version: String,
    #[serde(default)]
    metadata: CollectionMetadata,
    data: Vec<serde_json::Value>,
}

/// Default location of the collection file in the per-user data directory
pub fn default_collection_path() -> Result<PathBuf, String> {
    let data_dir = dirs::data_dir().ok_or_else(|| "could not determine user data directory".to_string())?;
    Ok(data_dir.join(APP_DATA_DIR).join(COLLECTION_FILE_NAME))
}

/// A JSON-backed document collection of primitive records
#[derive(Debug)]
pub struct Collection {
    path: PathBuf,
    records: Vec<Record>,
    created: String,
}

impl Collection {
    /// Create a new empty collection file at `path`, overwriting nothing
    pub fn create(path: &Path) -> Result<Self, String> {
        if path.exists() {
            return Err(format!("collection file already exists: {}", path.display()));
        }
        let collection = Self {
            path: path.to_path_buf(),
            records: Vec::new(),
            created: chrono::Utc::now().to_rfc3339(),
        };
        collection.flush()?;
        Ok(collection)
    }

    /// Open an existing collection file
    ///
    /// Fails if the file is missing or not valid JSON. Individual records
    /// that do not deserialize (unknown type tag, missing id) are logged and
    /// skipped, matching the original editor's behavior.
    pub fn open(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read collection file {}: {}", path.display(), e))?;
        let file: CollectionFile = serde_json::from_str(&content)
            .map_err(|e| format!("malformed collection file {}: {}", path.display(), e))?;

        let mut records = Vec::with_capacity(file.data.len());
        for value in file.data {
            match serde_json::from_value::<Record>(value) {
                Ok(record) if record.id.is_some() => records.push(record),
                Ok(record) => {
                    warn!("skipping record without id: {:?}", record.name);
                }
                Err(e) => {
                    warn!("skipping invalid record in collection: {}", e);
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            records,
            created: file.metadata.created,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every record currently in the collection
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Insert a record, assigning it a fresh id, and flush to disk
    pub fn insert(&mut self, mut record: Record) -> Result<Uuid, String> {
        let id = Uuid::new_v4();
        record.id = Some(id);
        self.records.push(record);
        self.flush()?;
        Ok(id)
    }

    /// Overwrite the record with the same id as `record`, and flush to disk
    pub fn update(&mut self, record: &Record) -> Result<(), String> {
        let id = record
            .id
            .ok_or_else(|| "cannot update a record without an id".to_string())?;
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| format!("no record with id {}", id))?;
        *slot = record.clone();
        self.flush()
    }

    /// Delete the record with `id`, and flush to disk
    pub fn delete(&mut self, id: Uuid) -> Result<(), String> {
        let before = self.records.len();
        self.records.retain(|r| r.id != Some(id));
        if self.records.len() == before {
            return Err(format!("no record with id {}", id));
        }
        self.flush()
    }

    /// Re-home the collection to a new file and flush everything to it
    pub fn save_as(&mut self, path: &Path) -> Result<(), String> {
        self.path = path.to_path_buf();
        self.flush()
    }

    /// Write the whole collection file out, pretty-printed
    fn flush(&self) -> Result<(), String> {
        let data = self
            .records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("failed to serialize records: {}", e))?;

        let file = CollectionFile {
            version: COLLECTION_VERSION.to_string(),
            metadata: CollectionMetadata {
                created: self.created.clone(),
                modified: chrono::Utc::now().to_rfc3339(),
                creator: COLLECTION_CREATOR.to_string(),
            },
            data,
        };

        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| format!("failed to serialize collection: {}", e))?;
        std::fs::write(&self.path, json)
            .map_err(|e| format!("failed to write collection file {}: {}", self.path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::record::{ShapeData, Vec3Data};

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "scenebox-collection-{}-{}.json",
            tag,
            std::process::id()
        ))
    }

    fn sample_record(name: &str) -> Record {
        Record {
            id: None,
            name: name.to_string(),
            position: Vec3Data {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            rotation: Vec3Data {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            color: "#a0a0a4".to_string(),
            shape: ShapeData::Sphere { radius: 2.0 },
        }
    }

    #[test]
    fn insert_assigns_id_and_survives_reopen() {
        let path = temp_path("insert");
        let _ = std::fs::remove_file(&path);

        let mut collection = Collection::create(&path).unwrap();
        let id = collection.insert(sample_record("Sphere 1")).unwrap();

        let reopened = Collection::open(&path).unwrap();
        assert_eq!(reopened.all().len(), 1);
        assert_eq!(reopened.all()[0].id, Some(id));
        assert_eq!(reopened.all()[0].name, "Sphere 1");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn update_overwrites_in_place() {
        let path = temp_path("update");
        let _ = std::fs::remove_file(&path);

        let mut collection = Collection::create(&path).unwrap();
        let id = collection.insert(sample_record("Sphere 1")).unwrap();

        let mut record = collection.all()[0].clone();
        record.name = "Renamed".to_string();
        record.shape = ShapeData::Sphere { radius: 3.5 };
        collection.update(&record).unwrap();

        let reopened = Collection::open(&path).unwrap();
        assert_eq!(reopened.all().len(), 1);
        assert_eq!(reopened.all()[0].id, Some(id));
        assert_eq!(reopened.all()[0].name, "Renamed");
        assert_eq!(reopened.all()[0].shape, ShapeData::Sphere { radius: 3.5 });

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn delete_removes_record() {
        let path = temp_path("delete");
        let _ = std::fs::remove_file(&path);

        let mut collection = Collection::create(&path).unwrap();
        let id = collection.insert(sample_record("Sphere 1")).unwrap();
        collection.delete(id).unwrap();
        assert!(collection.delete(id).is_err());

        let reopened = Collection::open(&path).unwrap();
        assert!(reopened.all().is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn open_missing_file_fails() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        assert!(Collection::open(&path).is_err());
    }

    #[test]
    fn open_malformed_file_fails() {
        let path = temp_path("malformed");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(Collection::open(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unknown_record_type_is_skipped() {
        let path = temp_path("unknown-type");
        let json = format!(
            r##"{{
                "data": [
                    {{
                        "id": "{}",
                        "name": "Sphere 1",
                        "position": {{"x": 0.0, "y": 0.0, "z": 0.0}},
                        "rotation": {{"x": 0.0, "y": 0.0, "z": 0.0}},
                        "color": "#a0a0a4",
                        "type": "sphere",
                        "primitive_specific": {{"radius": 2.0}}
                    }},
                    {{
                        "id": "{}",
                        "name": "Cone 1",
                        "position": {{"x": 0.0, "y": 0.0, "z": 0.0}},
                        "rotation": {{"x": 0.0, "y": 0.0, "z": 0.0}},
                        "color": "#a0a0a4",
                        "type": "cone",
                        "primitive_specific": {{"slant": 1.0}}
                    }}
                ]
            }}"##,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        std::fs::write(&path, json).unwrap();

        let collection = Collection::open(&path).unwrap();
        assert_eq!(collection.all().len(), 1);
        assert_eq!(collection.all()[0].name, "Sphere 1");

        std::fs::remove_file(&path).unwrap();
    }
}
