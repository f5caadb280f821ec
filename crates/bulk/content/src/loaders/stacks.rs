//! Stack definition table loader.

use std::path::Path;

use bulk_core::StackDefinitions;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Stack table structure for RON/TOML files.
///
/// ```toml
/// replace_defaults = false
///
/// [groups.caltrops]
/// size = 4
/// light_bulk = 1
/// ```
///
/// Groups are layered over the standard table unless `replace_defaults` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackTableFile {
    #[serde(default)]
    pub replace_defaults: bool,
    #[serde(default = "StackDefinitions::empty")]
    pub groups: StackDefinitions,
}

impl StackTableFile {
    /// The effective table this file describes.
    pub fn into_definitions(self) -> StackDefinitions {
        if self.replace_defaults {
            return self.groups;
        }
        let mut definitions = StackDefinitions::default();
        for (name, definition) in self.groups.iter() {
            definitions.insert(name, *definition);
        }
        definitions
    }
}

/// Loader for stack definition tables.
///
/// Files ending in `.ron` are read as RON, everything else as TOML.
pub struct StackTableLoader;

impl StackTableLoader {
    /// Load a stack definition table from a RON or TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file containing a StackTableFile
    pub fn load(path: &Path) -> LoadResult<StackDefinitions> {
        let content = read_file(path)?;
        let is_ron = path.extension().is_some_and(|ext| ext == "ron");
        let file = if is_ron {
            Self::parse_ron(&content)?
        } else {
            Self::parse_toml(&content)?
        };
        let definitions = file.into_definitions();
        tracing::debug!(
            path = %path.display(),
            groups = definitions.iter().count(),
            "loaded stack table"
        );
        Ok(definitions)
    }

    pub fn parse_toml(content: &str) -> LoadResult<StackTableFile> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse stack table TOML: {}", e))
    }

    pub fn parse_ron(content: &str) -> LoadResult<StackTableFile> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse stack table RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulk_core::StackDefinition;

    #[test]
    fn toml_groups_extend_the_standard_table() {
        let file = StackTableLoader::parse_toml(
            "[groups.caltrops]\nsize = 4\nlight_bulk = 1\n\n[groups.arrows]\nsize = 20\nlight_bulk = 1\n",
        )
        .unwrap();
        let definitions = file.into_definitions();
        assert_eq!(definitions.get("caltrops"), Some(&StackDefinition::new(4, 1)));
        assert_eq!(definitions.get("arrows"), Some(&StackDefinition::new(20, 1)));
        assert!(definitions.contains("coins"));
    }

    #[test]
    fn replace_defaults_drops_the_standard_table() {
        let file = StackTableLoader::parse_ron(
            "(replace_defaults: true, groups: { \"pebbles\": (size: 100, light_bulk: 1) })",
        )
        .unwrap();
        let definitions = file.into_definitions();
        assert!(definitions.contains("pebbles"));
        assert!(!definitions.contains("coins"));
    }

    #[test]
    fn empty_file_is_the_standard_table() {
        let definitions = StackTableLoader::parse_toml("").unwrap().into_definitions();
        assert_eq!(definitions, StackDefinitions::default());
    }

    #[test]
    fn picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let ron_path = dir.path().join("stacks.ron");
        std::fs::write(&ron_path, "(groups: { \"caltrops\": (size: 4, light_bulk: 1) })").unwrap();
        let toml_path = dir.path().join("stacks.toml");
        std::fs::write(&toml_path, "[groups.caltrops]\nsize = 4\nlight_bulk = 1\n").unwrap();

        assert_eq!(
            StackTableLoader::load(&ron_path).unwrap(),
            StackTableLoader::load(&toml_path).unwrap()
        );
    }
}
