//! Schema Registry for Version Management
//!
//! Central lookup for record layouts by qualified name (`redis_url_v1`),
//! with version tracking so consumers can ask for the latest layout of a
//! record without hard-coding its version.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::schemas::RecordSchema;
use crate::validation::RecordValidator;
use crate::SchemaError;

/// Thread-safe registry of record layouts
pub struct SchemaRegistry {
    /// Layouts indexed by qualified name
    schemas: RwLock<HashMap<String, RecordSchema>>,

    /// Version mappings (base name -> [versions])
    versions: RwLock<HashMap<String, Vec<String>>>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
            versions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a layout under `name`, e.g. `"imap_url_v1"`.
    ///
    /// The base name and version are taken from the `_v<N>` suffix.
    pub fn register(&self, name: &str, schema: RecordSchema) -> Result<(), SchemaError> {
        let (base_name, version) = split_version(name);

        {
            let mut schemas = self.schemas.write().map_err(|_| poisoned())?;
            if schemas.contains_key(name) {
                return Err(SchemaError::ValidationError(format!(
                    "Schema {} already registered",
                    name
                )));
            }
            schemas.insert(name.to_string(), schema);
        }

        let mut versions = self.versions.write().map_err(|_| poisoned())?;
        versions
            .entry(base_name.to_string())
            .or_default()
            .push(version.to_string());

        Ok(())
    }

    /// Get a layout by qualified name
    pub fn get(&self, name: &str) -> Result<RecordSchema, SchemaError> {
        let schemas = self.schemas.read().map_err(|_| poisoned())?;

        schemas
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Get the highest registered version of a layout
    pub fn get_latest(&self, base_name: &str) -> Result<RecordSchema, SchemaError> {
        let version = self
            .get_versions(base_name)?
            .into_iter()
            .max_by_key(|version| version_number(version))
            .ok_or_else(|| SchemaError::NotFound(format!("No versions of {}", base_name)))?;

        self.get(&format!("{}_{}", base_name, version))
    }

    /// All registered versions of a layout, in registration order
    pub fn get_versions(&self, base_name: &str) -> Result<Vec<String>, SchemaError> {
        let versions = self.versions.read().map_err(|_| poisoned())?;

        Ok(versions.get(base_name).cloned().unwrap_or_default())
    }

    /// Validate a serialized record against the layout `name`
    pub fn validate(&self, name: &str, record: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self.get(name)?;
        RecordValidator::new(&schema).validate(record)?.into_result(name)
    }

    /// Load the layouts for all four protocol records
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        use crate::schemas;

        self.register("imap_url_v1", schemas::imap_url_v1())?;
        self.register("mqtt_url_v1", schemas::mqtt_url_v1())?;
        self.register("redis_url_v1", schemas::redis_url_v1())?;
        self.register("smtp_url_v1", schemas::smtp_url_v1())?;

        Ok(())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> SchemaError {
    SchemaError::ValidationError("Schema registry lock poisoned".to_string())
}

/// Split `"name_v2"` into `("name", "v2")`; unversioned names are `v1`.
fn split_version(name: &str) -> (&str, &str) {
    match name.rfind("_v") {
        Some(pos) if version_number(&name[pos + 1..]).is_some() => (&name[..pos], &name[pos + 1..]),
        _ => (name, "v1"),
    }
}

fn version_number(version: &str) -> Option<u32> {
    version.strip_prefix('v')?.parse().ok()
}

lazy_static::lazy_static! {
    /// Global schema registry with the default layouts loaded
    pub static ref GLOBAL_REGISTRY: SchemaRegistry = {
        let registry = SchemaRegistry::new();
        // A fresh registry can't hold duplicates
        let _ = registry.load_defaults();
        registry
    };
}
