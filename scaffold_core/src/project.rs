//! # Project Records
//!
//! A [`Project`] wraps one saved estimate with its identifying metadata:
//! a numeric id, a creation timestamp, a title, and free-text detail. The
//! embedded [`EstimationResult`] is computed once at save time and stored
//! verbatim; readers of the list never re-invoke the engine.
//!
//! [`ProjectStore`] keeps projects in memory for the life of the process.
//! Persistence across restarts is deliberately out of scope.
//!
//! ## Example
//!
//! ```rust
//! use scaffold_core::config::ScaffoldConfig;
//! use scaffold_core::project::ProjectStore;
//!
//! let mut store = ProjectStore::new();
//!
//! let mut config = ScaffoldConfig::default();
//! config.sides.south.width = "9100".to_string();
//! config.sides.south.eave_height = "6200".to_string();
//!
//! let id = store.create("Tanaka residence", "Repaint, south elevation", config);
//! assert!(store.get(id).is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ScaffoldConfig;
use crate::errors::{ScaffoldError, ScaffoldResult};
use crate::estimate::{estimate, EstimationResult};

/// One saved estimate with its identifying metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Numeric identifier assigned by the store
    pub id: u64,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// Project title
    pub title: String,

    /// Free-text detail
    pub detail: String,

    /// The configuration the estimate was computed from
    pub config: ScaffoldConfig,

    /// The estimate, computed once at save time
    pub result: EstimationResult,
}

impl Project {
    /// Pretty JSON form of this record
    pub fn to_json(&self) -> ScaffoldResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScaffoldError::serialization(e.to_string()))
    }
}

/// In-memory project store with sequential numeric ids.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    next_id: u64,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        ProjectStore {
            next_id: 1,
            projects: Vec::new(),
        }
    }

    /// Run the estimate for `config` and store it as a new project.
    ///
    /// Returns the assigned id.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        detail: impl Into<String>,
        config: ScaffoldConfig,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let result = estimate(&config);
        self.projects.push(Project {
            id,
            created: Utc::now(),
            title: title.into(),
            detail: detail.into(),
            config,
            result,
        });
        id
    }

    /// Re-estimate and replace an existing project.
    ///
    /// The id and creation timestamp are preserved; title, detail,
    /// configuration, and the embedded result are replaced.
    pub fn update(
        &mut self,
        id: u64,
        title: impl Into<String>,
        detail: impl Into<String>,
        config: ScaffoldConfig,
    ) -> ScaffoldResult<()> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ScaffoldError::ProjectNotFound { id })?;
        project.title = title.into();
        project.detail = detail.into();
        project.result = estimate(&config);
        project.config = config;
        Ok(())
    }

    /// Get a project by id
    pub fn get(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Remove a project by id, returning it
    pub fn remove(&mut self, id: u64) -> ScaffoldResult<Project> {
        let pos = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(ScaffoldError::ProjectNotFound { id })?;
        Ok(self.projects.remove(pos))
    }

    /// All projects, newest first.
    ///
    /// Ordered by creation time descending; same-instant records fall back
    /// to higher id first, so the ordering is total and stable.
    pub fn list(&self) -> Vec<&Project> {
        let mut items: Vec<&Project> = self.projects.iter().collect();
        items.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        items
    }

    /// Number of stored projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the store holds no projects
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        ProjectStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldType;

    fn south_config(width: &str, eave: &str) -> ScaffoldConfig {
        let mut config = ScaffoldConfig::default();
        config.sides.south.width = width.to_string();
        config.sides.south.eave_height = eave.to_string();
        config
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = ProjectStore::new();
        let first = store.create("First", "", ScaffoldConfig::default());
        let second = store.create("Second", "", ScaffoldConfig::default());
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_embeds_estimate() {
        let mut store = ProjectStore::new();
        let id = store.create("Blank", "", ScaffoldConfig::default());
        let project = store.get(id).unwrap();
        // A blank form still yields the end-closure posts and one layer
        assert_eq!(project.result.posts, 4);
        assert_eq!(project.result.steps, 1);
    }

    #[test]
    fn test_update_preserves_id_and_timestamp() {
        let mut store = ProjectStore::new();
        let id = store.create("Old title", "old", south_config("1000", "2500"));
        let created = store.get(id).unwrap().created;

        store
            .update(id, "New title", "new", south_config("2000", "2500"))
            .unwrap();

        let project = store.get(id).unwrap();
        assert_eq!(project.id, id);
        assert_eq!(project.created, created);
        assert_eq!(project.title, "New title");
        // 2.0 m perimeter → ceil(2/0.45) = 5 bays → 5×2 + 4 posts
        assert_eq!(project.result.posts, 14);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = ProjectStore::new();
        let err = store
            .update(99, "x", "", ScaffoldConfig::default())
            .unwrap_err();
        assert_eq!(err, ScaffoldError::ProjectNotFound { id: 99 });
    }

    #[test]
    fn test_remove() {
        let mut store = ProjectStore::new();
        let id = store.create("Gone", "", ScaffoldConfig::default());
        let removed = store.remove(id).unwrap();
        assert_eq!(removed.title, "Gone");
        assert!(store.is_empty());
        assert!(store.remove(id).is_err());
    }

    #[test]
    fn test_list_newest_first() {
        let mut store = ProjectStore::new();
        store.create("First", "", ScaffoldConfig::default());
        store.create("Second", "", ScaffoldConfig::default());
        store.create("Third", "", ScaffoldConfig::default());

        let titles: Vec<&str> = store.list().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Third", "Second", "First"]);
    }

    #[test]
    fn test_project_json_roundtrip() {
        let mut store = ProjectStore::new();
        let mut config = south_config("1000", "2500");
        config.scaffold_type = ScaffoldType::SingleRow;
        let id = store.create("Site A", "Two-story repaint", config);

        let json = store.get(id).unwrap().to_json().unwrap();
        assert!(json.contains("Site A"));
        assert!(json.contains("posts"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(&roundtrip, store.get(id).unwrap());
    }
}
