//! Exclusion filter configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXCLUDED_PATH_RULES, DEFAULT_EXCLUDED_PROJECTS};

/// Which records are dropped before selection.
///
/// `None` means "use the compiled defaults"; an explicit empty list
/// disables that kind of exclusion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterConfig {
    /// Project names excluded on either side of a pair.
    pub excluded_projects: Option<Vec<String>>,
    /// Regular expressions; a file path matching any of them is excluded.
    pub excluded_path_rules: Option<Vec<String>>,
}

impl FilterConfig {
    pub fn effective_excluded_projects(&self) -> Vec<String> {
        match &self.excluded_projects {
            Some(projects) => projects.clone(),
            None => DEFAULT_EXCLUDED_PROJECTS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    pub fn effective_excluded_path_rules(&self) -> Vec<String> {
        match &self.excluded_path_rules {
            Some(rules) => rules.clone(),
            None => DEFAULT_EXCLUDED_PATH_RULES
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}
