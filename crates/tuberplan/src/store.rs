//! Filesystem-backed scenario store.
//!
//! All scenarios live in one `scenarios.yaml` under the data directory.
//! The store is explicit state owned by the CLI and passed into commands;
//! the core stays stateless.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, eyre};
use tuberplan_core::ParameterSet;

use crate::data::{Scenario, ScenarioFile};

const SCENARIOS_FILE: &str = "scenarios.yaml";

pub struct ScenarioStore {
    path: PathBuf,
    file: ScenarioFile,
}

impl ScenarioStore {
    /// Open the store under `data_dir`, starting empty if no file exists.
    pub fn open(data_dir: &Path) -> color_eyre::Result<Self> {
        let path = data_dir.join(SCENARIOS_FILE);
        let file = if path.exists() {
            let yaml = fs::read_to_string(&path)
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            ScenarioFile::from_yaml(&yaml)
                .map_err(|e| eyre!("parsing {}: {e}", path.display()))?
        } else {
            ScenarioFile::default()
        };
        Ok(Self { path, file })
    }

    /// Persist the store back to disk.
    pub fn save(&self) -> color_eyre::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = self
            .file
            .to_yaml()
            .map_err(|e| eyre!("serializing scenarios: {e}"))?;
        fs::write(&self.path, yaml).wrap_err_with(|| format!("writing {}", self.path.display()))
    }

    /// Resolve the parameters to simulate: a named scenario, else the
    /// active one, else the built-in defaults.
    pub fn resolve(&self, name: Option<&str>) -> color_eyre::Result<(String, ParameterSet)> {
        match name {
            Some(n) => self
                .file
                .scenarios
                .get(n)
                .map(|s| (n.to_string(), s.parameters.clone()))
                .ok_or_else(|| eyre!("scenario {n:?} not found")),
            None => {
                let active = self
                    .file
                    .active_scenario
                    .as_deref()
                    .and_then(|n| self.file.scenarios.get(n).map(|s| (n, s)));
                match active {
                    Some((n, s)) => Ok((n.to_string(), s.parameters.clone())),
                    None => Ok(("default".to_string(), ParameterSet::default())),
                }
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.file.scenarios.get(name)
    }

    pub fn insert(&mut self, name: &str, scenario: Scenario) {
        self.file.scenarios.insert(name.to_string(), scenario);
    }

    pub fn remove(&mut self, name: &str) -> Option<Scenario> {
        let removed = self.file.scenarios.remove(name);
        if removed.is_some() && self.file.active_scenario.as_deref() == Some(name) {
            self.file.active_scenario = None;
        }
        removed
    }

    /// Mark a scenario active. Returns false if it does not exist.
    pub fn set_active(&mut self, name: &str) -> bool {
        if self.file.scenarios.contains_key(name) {
            self.file.active_scenario = Some(name.to_string());
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.file.active_scenario.as_deref()
    }

    /// Saved scenario names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.file.scenarios.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = ScenarioStore::open(dir.path()).unwrap();
        store.insert(
            "baseline",
            Scenario::new(ParameterSet::default(), Some("demo".to_string())),
        );
        assert!(store.set_active("baseline"));
        store.save().unwrap();

        let reopened = ScenarioStore::open(dir.path()).unwrap();
        assert_eq!(reopened.names(), ["baseline"]);
        assert_eq!(reopened.active(), Some("baseline"));
        assert_eq!(
            reopened.get("baseline").unwrap().description.as_deref(),
            Some("demo")
        );
    }

    #[test]
    fn test_resolve_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScenarioStore::open(dir.path()).unwrap();

        let (name, params) = store.resolve(None).unwrap();
        assert_eq!(name, "default");
        assert_eq!(params, ParameterSet::default());
    }

    #[test]
    fn test_resolve_unknown_name_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScenarioStore::open(dir.path()).unwrap();

        assert!(store.resolve(Some("nope")).is_err());
    }

    #[test]
    fn test_removing_active_scenario_clears_active() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ScenarioStore::open(dir.path()).unwrap();

        store.insert("a", Scenario::new(ParameterSet::default(), None));
        store.set_active("a");
        store.remove("a");

        assert_eq!(store.active(), None);
        let (name, _) = store.resolve(None).unwrap();
        assert_eq!(name, "default");
    }
}
