//! JSON build manifest.
//!
//! The manifest carries everything the build knows about the constants to
//! generate:
//!
//! ```json
//! {
//!   "language": "C#",
//!   "namespace": "MyApp",
//!   "typeName": "BuildConstants",
//!   "includeDefaults": true,
//!   "output": "obj/BuildConstants.g.cs",
//!   "project": { "assemblyName": "MyApp", "version": "1.2.3" },
//!   "constants": [ { "name": "IsDebug", "value": "true", "type": "bool" } ],
//!   "remove": [ "Copyright" ]
//! }
//! ```
//!
//! Every key is optional; unknown keys are rejected.

use std::path::{Path, PathBuf};

use crate::csharp::SUPPORTED_LANGUAGE;
use crate::generator::DEFAULT_TYPE_NAME;
use crate::item::{Item, ItemList};
use crate::project::{ProjectMetadata, ResolveOptions, resolve_items};

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest")]
    Parse(#[from] serde_json::Error),
}

fn default_language() -> String {
    SUPPORTED_LANGUAGE.to_owned()
}

fn default_type_name() -> String {
    DEFAULT_TYPE_NAME.to_owned()
}

fn default_true() -> bool {
    true
}

/// The deserialized build manifest.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manifest {
    /// Project language marker.
    #[serde(default = "default_language")]
    pub language: String,

    /// Namespace for the generated class.
    #[serde(default)]
    pub namespace: String,

    /// Name of the generated class.
    #[serde(default = "default_type_name")]
    pub type_name: String,

    /// Whether default constants from `project` are emitted.
    #[serde(default = "default_true")]
    pub include_defaults: bool,

    /// Output file. Without one, the source is printed instead.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Project metadata for the default constants.
    #[serde(default)]
    pub project: ProjectMetadata,

    /// Declared constants, in order.
    #[serde(default)]
    pub constants: Vec<Item>,

    /// Names of default constants to remove.
    ///
    /// Applied to the default items only, before declared constants are
    /// appended, so a declared constant is never removed by this list.
    #[serde(default)]
    pub remove: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            language: default_language(),
            namespace: String::new(),
            type_name: default_type_name(),
            include_defaults: true,
            output: None,
            project: ProjectMetadata::default(),
            constants: Vec::new(),
            remove: Vec::new(),
        }
    }
}

impl Manifest {
    /// Parses a manifest from JSON text.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, ManifestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let file = std::fs::File::open(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Builds the ordered item list: defaults, declared constants, removals.
    pub fn items(&self) -> ItemList {
        resolve_items(
            &self.project,
            &ResolveOptions {
                include_defaults: self.include_defaults,
            },
            self.constants.iter().cloned(),
            &self.remove,
        )
    }
}
