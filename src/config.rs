use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment override for the config directory, used by tests.
pub const CONFIG_DIR_ENV: &str = "TIDY_CONFIG_DIR";

/// Organization rules for one target directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Destination folder -> file extensions routed there (lowercase, no dot)
    pub extensions: BTreeMap<String, Vec<String>>,
    /// Destination folder -> filename keywords routed there
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl Rules {
    /// Names of every destination folder these rules can move files into.
    pub fn destination_dirs(&self) -> Vec<String> {
        let mut dirs: Vec<String> = self
            .extensions
            .keys()
            .chain(self.keywords.keys())
            .cloned()
            .collect();
        dirs.sort();
        dirs.dedup();
        dirs
    }
}

/// Where the rules for one target directory live on disk.
///
/// One JSON file per target, under the per-user config directory, named by
/// a digest of the canonical target path so unrelated directories never
/// share rules.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn for_dir(target: &Path) -> io::Result<Self> {
        Self::in_config_dir(target, &config_dir()?)
    }

    fn in_config_dir(target: &Path, config_dir: &Path) -> io::Result<Self> {
        let canonical = fs::canonicalize(target)?;
        let key = blake3::hash(canonical.to_string_lossy().as_bytes());
        let hex = key.to_hex();
        let file = format!("{}.json", &hex.as_str()[..16]);

        Ok(Self {
            path: config_dir.join(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored rules. A missing file means "never set up" and is not
    /// an error; an unparseable file is, so user edits are never clobbered
    /// silently.
    pub fn load(&self) -> io::Result<Option<Rules>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let rules = serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(rules))
    }

    pub fn save(&self, rules: &Rules) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(rules).map_err(io::Error::other)?;
        fs::write(&self.path, json)
    }
}

fn config_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let dirs = ProjectDirs::from("", "", "tidy")
        .ok_or_else(|| io::Error::other("could not determine the user config directory"))?;
    Ok(dirs.config_dir().to_path_buf())
}
