use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::TaxofetchError;

/// Immutable table mapping casual group names ("weeds", "insects") to the
/// canonical directory keys NCBI uses under `genomes/{refseq,genbank}/`.
/// Passed explicitly into the loader instead of living as a process-wide
/// constant, so tests and callers can substitute their own table.
#[derive(Debug, Clone)]
pub struct GroupAliases {
    map: HashMap<String, String>,
}

impl Default for GroupAliases {
    fn default() -> Self {
        let pairs = [
            ("plant", "plant"),
            ("plants", "plant"),
            ("weed", "plant"),
            ("weeds", "plant"),
            ("invertebrate", "invertebrate"),
            ("insect", "invertebrate"),
            ("insects", "invertebrate"),
            ("vertebrate", "vertebrate_other"),
            ("mammal", "vertebrate_mammalian"),
            ("mammals", "vertebrate_mammalian"),
            ("fungi", "fungi"),
            ("bacteria", "bacteria"),
            ("virus", "viral"),
            ("viral", "viral"),
            ("protozoa", "protozoa"),
        ];
        let map = pairs
            .into_iter()
            .map(|(alias, group)| (alias.to_string(), group.to_string()))
            .collect();
        Self { map }
    }
}

impl GroupAliases {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    /// Loads a `{ "alias": "ncbi_group", ... }` JSON object.
    pub fn from_json_file(path: &Path) -> Result<Self, TaxofetchError> {
        let content = fs::read_to_string(path)
            .map_err(|_| TaxofetchError::AliasRead(path.to_path_buf()))?;
        let map: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|err| TaxofetchError::AliasParse(err.to_string()))?;
        Ok(Self { map })
    }

    /// Case-insensitive lookup; unknown groups pass through lowercased so
    /// callers can name an NCBI directory directly.
    pub fn resolve(&self, group: &str) -> String {
        let key = group.to_lowercase();
        self.map.get(&key).cloned().unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_aliases_map_to_canonical_groups() {
        let aliases = GroupAliases::default();
        assert_eq!(aliases.resolve("weeds"), "plant");
        assert_eq!(aliases.resolve("Insects"), "invertebrate");
        assert_eq!(aliases.resolve("MAMMALS"), "vertebrate_mammalian");
        assert_eq!(aliases.resolve("virus"), "viral");
    }

    #[test]
    fn unknown_group_passes_through_lowercased() {
        let aliases = GroupAliases::default();
        assert_eq!(aliases.resolve("Archaea"), "archaea");
    }

    #[test]
    fn custom_table_overrides_defaults() {
        let mut map = HashMap::new();
        map.insert("weeds".to_string(), "fungi".to_string());
        let aliases = GroupAliases::new(map);
        assert_eq!(aliases.resolve("weeds"), "fungi");
        assert_eq!(aliases.resolve("plant"), "plant");
    }
}
