use crate::types::tool::Tool;
use std::path::{Path, PathBuf};

/// Source of the tools a user can pick from.
pub trait ToolCatalog {
    /// Tools ordered by category. An unavailable catalog is empty, not an
    /// error.
    fn list_tools(&self) -> Vec<Tool>;
}

/// JSON array of tools on disk. Without a path the catalog is empty.
#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    path: Option<PathBuf>,
}

impl FileCatalog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn read(path: &Path) -> Option<Vec<Tool>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "tool catalog unavailable");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(tools) => Some(tools),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "tool catalog is malformed");
                None
            }
        }
    }
}

impl ToolCatalog for FileCatalog {
    fn list_tools(&self) -> Vec<Tool> {
        let Some(path) = &self.path else {
            return Vec::new();
        };
        let mut tools = Self::read(path).unwrap_or_default();
        tools.sort_by(|a, b| a.category.cmp(&b.category));
        tools
    }
}

/// Tools grouped by category, in catalog order.
pub fn group_by_category(tools: &[Tool]) -> Vec<(&str, Vec<&Tool>)> {
    let mut groups: Vec<(&str, Vec<&Tool>)> = Vec::new();
    for tool in tools {
        if let Some((category, members)) = groups.last_mut() {
            if *category == tool.category {
                members.push(tool);
                continue;
            }
        }
        groups.push((tool.category.as_str(), vec![tool]));
    }
    groups
}
