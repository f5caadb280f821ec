//! Carried inventory loader.

use std::path::Path;

use bulk_core::ItemRecord;
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Inventory structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFile {
    pub items: Vec<ItemRecord>,
}

/// Loader for flat item records from RON files.
///
/// Optional fields may be written bare (`weight: "L"`) or as `Some("L")`.
pub struct InventoryLoader;

impl InventoryLoader {
    /// Load item records from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an InventoryFile
    ///
    /// # Returns
    ///
    /// Returns the records in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemRecord>> {
        let content = read_file(path)?;
        let items = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), items = items.len(), "loaded inventory");
        Ok(items)
    }

    /// Parse item records from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemRecord>> {
        let inventory: InventoryFile = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse inventory RON: {}", e))?;

        Ok(inventory.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulk_core::{ItemId, Size};

    const INVENTORY: &str = r#"(
        items: [
            (id: "backpack", weight: "L", capacity: "4", negate_bulk: "2", equipped: true),
            (id: "rope", weight: Some("L"), container_id: "backpack"),
            (id: "arrows", stack_group: "arrows", quantity: 40, size: large),
        ],
    )"#;

    #[test]
    fn parses_records_with_defaults() {
        let items = InventoryLoader::parse(INVENTORY).unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].capacity.as_deref(), Some("4"));
        assert!(items[0].equipped);
        assert_eq!(items[0].quantity, 1);

        assert_eq!(items[1].container_id, Some(ItemId::from("backpack")));
        assert_eq!(items[1].weight.as_deref(), Some("L"));

        assert_eq!(items[2].quantity, 40);
        assert_eq!(items[2].size, Size::Large);
        assert_eq!(items[2].weight, None);
    }

    #[test]
    fn reports_malformed_ron() {
        let err = InventoryLoader::parse("(items: [(id: )])").unwrap_err();
        assert!(err.to_string().contains("inventory RON"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.ron");
        std::fs::write(&path, INVENTORY).unwrap();

        let items = InventoryLoader::load(&path).unwrap();
        assert_eq!(items[2].id.as_str(), "arrows");
    }
}
