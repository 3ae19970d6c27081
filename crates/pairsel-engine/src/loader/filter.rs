//! Record exclusion by project name and file path.

use pairsel_core::config::FilterConfig;
use pairsel_core::errors::ConfigError;
use pairsel_core::types::{FxHashSet, PairRecord};
use regex::RegexSet;

/// Drops a record when either side belongs to an excluded project or
/// either file path matches an excluded rule.
#[derive(Debug, Clone)]
pub struct PairFilter {
    excluded_projects: FxHashSet<String>,
    path_rules: RegexSet,
}

impl PairFilter {
    /// Build a filter from explicit project names and path rules.
    /// Rules are regular expressions matched anywhere in the path.
    pub fn new<P, R>(excluded_projects: P, path_rules: R) -> Result<Self, ConfigError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let path_rules = RegexSet::new(path_rules).map_err(|e| ConfigError::InvalidValue {
            field: "filter.excluded_path_rules".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            excluded_projects: excluded_projects.into_iter().map(Into::into).collect(),
            path_rules,
        })
    }

    pub fn from_config(config: &FilterConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.effective_excluded_projects(),
            config.effective_excluded_path_rules(),
        )
    }

    /// A filter that keeps every record.
    pub fn allow_all() -> Self {
        Self {
            excluded_projects: FxHashSet::default(),
            path_rules: RegexSet::empty(),
        }
    }

    pub fn accepts(&self, record: &PairRecord) -> bool {
        self.project_allowed(&record.project1)
            && self.project_allowed(&record.project2)
            && self.path_allowed(&record.file1)
            && self.path_allowed(&record.file2)
    }

    fn project_allowed(&self, project: &str) -> bool {
        !self.excluded_projects.contains(project)
    }

    fn path_allowed(&self, path: &str) -> bool {
        !self.path_rules.is_match(path)
    }
}
