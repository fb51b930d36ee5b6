use crate::{
    config::LaunchpadConfig,
    error::{LaunchpadError, Result},
    model::Launch,
    validation,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/launches.yml");

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    launches: Vec<Launch>,
}

/// Immutable set of launches, ordered newest first.
#[derive(Debug, Clone)]
pub struct LaunchCatalog {
    launches: Vec<Launch>,
    index: HashMap<String, usize>,
}

impl LaunchCatalog {
    pub fn new(mut launches: Vec<Launch>) -> Result<Self> {
        for launch in &launches {
            validation::validate_launch_id(&launch.id)?;
        }
        launches.sort_by(|a, b| b.launch_date.cmp(&a.launch_date));

        let mut index = HashMap::with_capacity(launches.len());
        for (pos, launch) in launches.iter().enumerate() {
            if index.insert(launch.id.clone(), pos).is_some() {
                return Err(LaunchpadError::Storage(format!(
                    "Duplicate launch ID in catalog: {}",
                    launch.id
                )));
            }
        }

        Ok(Self { launches, index })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::new(file.launches)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LaunchpadError::Storage(format!(
                "Failed to read launch catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Load the catalog named in the config, or the built-in one.
    pub fn load(config: &LaunchpadConfig, project_root: &Path) -> Result<Self> {
        let catalog = match config.launches_path(project_root) {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading launch catalog");
                Self::from_file(&path)?
            }
            None => Self::builtin()?,
        };
        tracing::debug!(count = catalog.len(), "Launch catalog ready");
        Ok(catalog)
    }

    pub fn all(&self) -> &[Launch] {
        &self.launches
    }

    pub fn get(&self, id: &str) -> Option<&Launch> {
        self.index.get(id).map(|&pos| &self.launches[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Launches for `ids` in request order; unknown IDs are skipped.
    pub fn get_many<S: AsRef<str>>(&self, ids: &[S]) -> Vec<Launch> {
        ids.iter()
            .filter_map(|id| self.get(id.as_ref()))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.launches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.launches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SMALL_CATALOG: &str = r#"
launches:
  - id: "a"
    launch_date: 2020-01-01T00:00:00Z
  - id: "b"
    site: Somewhere
    launch_date: 2021-01-01T00:00:00Z
    rocket:
      id: r1
"#;

    #[test]
    fn test_builtin_parses_newest_first() {
        let catalog = LaunchCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        let dates: Vec<_> = catalog.all().iter().map(|l| l.launch_date).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_builtin_has_missions_and_rockets() {
        let catalog = LaunchCatalog::builtin().unwrap();
        let first = catalog.get("1").unwrap();
        assert_eq!(first.site.as_deref(), Some("Kwajalein Atoll"));
        let mission = first.mission.as_ref().unwrap();
        assert_eq!(mission.name.as_deref(), Some("FalconSat"));
        assert_eq!(first.rocket.as_ref().unwrap().id, "falcon1");
    }

    #[test]
    fn test_from_yaml_sorts_and_indexes() {
        let catalog = LaunchCatalog::from_yaml(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.all()[0].id, "b");
        assert!(catalog.contains("a"));
        assert!(!catalog.contains("c"));
        assert!(catalog.get("a").unwrap().mission.is_none());
    }

    #[test]
    fn test_get_many_keeps_request_order() {
        let catalog = LaunchCatalog::from_yaml(SMALL_CATALOG).unwrap();
        let found = catalog.get_many(&["a", "zzz", "b"]);
        let ids: Vec<_> = found.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let yaml = r#"
launches:
  - id: "a"
    launch_date: 2020-01-01T00:00:00Z
  - id: "a"
    launch_date: 2021-01-01T00:00:00Z
"#;
        let err = LaunchCatalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("Duplicate launch ID"));
    }

    #[test]
    fn test_load_from_configured_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("launches.yml"), SMALL_CATALOG).unwrap();

        let mut config = LaunchpadConfig::default();
        config.data.launches_file = Some("launches.yml".to_string());

        let catalog = LaunchCatalog::load(&config, temp_dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = LaunchCatalog::from_file(&temp_dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, LaunchpadError::Storage(_)));
    }
}
