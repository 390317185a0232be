use crate::types::config::PatternConfig;

const BUILTIN_PATTERNS: &[(&str, &[&str])] = &[
    ("Communication", &["Slack", "Microsoft Teams"]),
    ("Communication", &["Zoom", "Microsoft Teams", "Google Meet"]),
    ("Productivity", &["Google Workspace", "Microsoft 365"]),
    ("Project Management", &["Asana", "Trello", "Monday.com"]),
    ("CRM", &["HubSpot", "Salesforce"]),
    ("Design", &["Canva", "Adobe Creative Suite"]),
];

/// Products that serve the same purpose within one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGroup {
    pub category: String,
    pub names: Vec<String>,
}

impl PatternGroup {
    /// Case-insensitive, unanchored substring match: "SlackBot" matches "Slack".
    pub fn matches(&self, tool_name: &str) -> bool {
        let tool_name = tool_name.to_lowercase();
        self.names
            .iter()
            .any(|name| tool_name.contains(&name.to_lowercase()))
    }
}

#[derive(Debug, Clone)]
pub struct PatternCatalog {
    groups: Vec<PatternGroup>,
}

impl PatternCatalog {
    pub fn builtin() -> Self {
        let groups = BUILTIN_PATTERNS
            .iter()
            .map(|(category, names)| PatternGroup {
                category: (*category).to_string(),
                names: names.iter().map(|name| (*name).to_string()).collect(),
            })
            .collect();
        Self { groups }
    }

    /// Built-in groups followed by configured ones, in declaration order.
    pub fn with_extra(extra: &[PatternConfig]) -> Self {
        let mut catalog = Self::builtin();
        catalog
            .groups
            .extend(extra.iter().map(|pattern| PatternGroup {
                category: pattern.category.trim().to_string(),
                names: pattern
                    .tools
                    .iter()
                    .map(|name| name.trim().to_string())
                    .collect(),
            }));
        catalog
    }

    pub fn patterns_for<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a PatternGroup> {
        self.groups
            .iter()
            .filter(move |group| group.category == category)
    }

    pub fn groups(&self) -> &[PatternGroup] {
        &self.groups
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_two_communication_groups() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.patterns_for("Communication").count(), 2);
        assert_eq!(catalog.patterns_for("CRM").count(), 1);
        assert_eq!(catalog.patterns_for("Accounting").count(), 0);
    }

    #[test]
    fn category_lookup_is_exact() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.patterns_for("communication").count(), 0);
    }

    #[test]
    fn matching_is_case_insensitive_and_unanchored() {
        let group = PatternGroup {
            category: "Communication".to_string(),
            names: vec!["Slack".to_string(), "Microsoft Teams".to_string()],
        };
        assert!(group.matches("slack"));
        assert!(group.matches("SlackBot-Killer"));
        assert!(group.matches("MICROSOFT TEAMS Premium"));
        assert!(!group.matches("Teams"));
    }

    #[test]
    fn extra_patterns_follow_builtin_groups() {
        let catalog = PatternCatalog::with_extra(&[PatternConfig {
            category: " Analytics ".to_string(),
            tools: vec!["Mixpanel".to_string(), "Amplitude".to_string()],
        }]);
        let last = catalog.groups().last().expect("catalog should not be empty");
        assert_eq!(last.category, "Analytics");
        assert_eq!(catalog.groups().len(), BUILTIN_PATTERNS.len() + 1);
        assert_eq!(catalog.patterns_for("Analytics").count(), 1);
    }
}
