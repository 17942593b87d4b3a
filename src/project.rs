//! Default constants derived from project metadata.
//!
//! Before generation, the build supplies a set of well-known constants
//! (assembly name, version, product, ...) taken from the project's metadata.
//! Removals are applied to that default set, then user-declared constants
//! are appended. To override a default, remove it and declare the replacement.

use crate::item::{Item, ItemList};

/// Parsed version components from a semver string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionParts<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
}

impl<'a> VersionParts<'a> {
    /// Parses version components from a version string like "1.2.3" or "1.2.3-alpha".
    pub fn parse(version: &'a str) -> Self {
        // Build metadata never takes part in the numeric version
        let version = version.split('+').next().unwrap_or(version);
        let mut parts = version.split('.');
        let major = parts.next().filter(|s| !s.is_empty()).unwrap_or("0");
        let minor = parts.next().unwrap_or("0");
        let patch_full = parts.next().unwrap_or("0");
        // Strip any pre-release suffix from patch (e.g., "0-alpha" -> "0")
        let patch = patch_full.split('-').next().unwrap_or("0");
        Self {
            major,
            minor: minor.split('-').next().unwrap_or("0"),
            patch,
        }
    }

    /// Four-part assembly version, `major.minor.patch.0`.
    pub fn assembly_version(&self) -> String {
        format!("{}.{}.{}.0", self.major, self.minor, self.patch)
    }
}

/// Project metadata the default constants are populated from.
///
/// Every property is optional. Unset properties still produce a default item,
/// but with no value, so the generator skips it without a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectMetadata {
    pub assembly_name: Option<String>,
    pub version: Option<String>,
    pub product: Option<String>,
    pub company: Option<String>,
    pub copyright: Option<String>,
    pub description: Option<String>,
    pub configuration: Option<String>,
    pub assembly_version: Option<String>,
    pub file_version: Option<String>,
    pub informational_version: Option<String>,
}

/// Options for [`resolve_items`].
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Whether default constants from project metadata are emitted.
    pub include_defaults: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            include_defaults: true,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ProjectMetadata {
    /// Reads metadata from the variables Cargo sets for build scripts.
    ///
    /// `CARGO_PKG_NAME` fills both the assembly name and the product,
    /// `CARGO_PKG_AUTHORS` the company and `PROFILE` the configuration.
    pub fn from_cargo_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_cargo_env`], with a custom variable lookup.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let name = var("CARGO_PKG_NAME");
        Self {
            product: name.clone(),
            assembly_name: name,
            version: var("CARGO_PKG_VERSION"),
            company: var("CARGO_PKG_AUTHORS").map(|a| a.replace(':', ", ")),
            description: var("CARGO_PKG_DESCRIPTION"),
            configuration: var("PROFILE"),
            ..Default::default()
        }
    }

    /// Fills every unset property of `self` from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            assembly_name: self.assembly_name.or(fallback.assembly_name),
            version: self.version.or(fallback.version),
            product: self.product.or(fallback.product),
            company: self.company.or(fallback.company),
            copyright: self.copyright.or(fallback.copyright),
            description: self.description.or(fallback.description),
            configuration: self.configuration.or(fallback.configuration),
            assembly_version: self.assembly_version.or(fallback.assembly_version),
            file_version: self.file_version.or(fallback.file_version),
            informational_version: self.informational_version.or(fallback.informational_version),
        }
    }

    /// Returns the default constants, in their fixed order.
    ///
    /// Derived values: `Product` falls back to the assembly name,
    /// `AssemblyVersion` and `FileVersion` to `major.minor.patch.0` of the
    /// version, and `InformationalVersion` to the version itself.
    pub fn default_items(&self) -> Vec<Item> {
        let version = non_empty(&self.version);
        let numeric = version.map(|v| VersionParts::parse(v).assembly_version());

        let product = non_empty(&self.product).or(non_empty(&self.assembly_name));
        let assembly_version = non_empty(&self.assembly_version)
            .map(str::to_owned)
            .or_else(|| numeric.clone());
        let file_version = non_empty(&self.file_version)
            .map(str::to_owned)
            .or(numeric);
        let informational_version = non_empty(&self.informational_version).or(version);

        let defaults: [(&str, Option<String>, &str); 10] = [
            (
                "AssemblyName",
                self.assembly_name.clone(),
                "The name of the assembly.",
            ),
            ("Version", self.version.clone(), "The project version."),
            ("Product", product.map(str::to_owned), "The product name."),
            ("Company", self.company.clone(), "The company name."),
            ("Copyright", self.copyright.clone(), "The copyright notice."),
            (
                "Description",
                self.description.clone(),
                "The project description.",
            ),
            (
                "Configuration",
                self.configuration.clone(),
                "The build configuration.",
            ),
            ("AssemblyVersion", assembly_version, "The assembly version."),
            ("FileVersion", file_version, "The file version."),
            (
                "InformationalVersion",
                informational_version.map(str::to_owned),
                "The informational version.",
            ),
        ];

        defaults
            .into_iter()
            .map(|(name, value, summary)| Item {
                name: name.to_owned(),
                value,
                type_tag: None,
                summary: Some(summary.to_owned()),
                is_default: true,
            })
            .collect()
    }
}

/// Builds the item list handed to the generator.
///
/// Order of operations: defaults are populated, removals applied by name,
/// default-marked items dropped when defaults are disabled, and finally the
/// declared items appended.
pub fn resolve_items(
    metadata: &ProjectMetadata,
    options: &ResolveOptions,
    declared: impl IntoIterator<Item = Item>,
    removals: &[String],
) -> ItemList {
    let mut items: ItemList = metadata.default_items().into_iter().collect();

    for name in removals {
        let removed = items.remove(name);
        tracing::debug!(%name, removed, "removed constant");
    }

    items.retain_defaults(options.include_defaults);
    items.extend(declared);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(items: &'a [Item], name: &str) -> Option<&'a str> {
        items
            .iter()
            .find(|i| i.name == name)
            .and_then(|i| i.value.as_deref())
    }

    #[test]
    fn test_version_parts() {
        let vp = VersionParts::parse("1.2.3");
        assert_eq!((vp.major, vp.minor, vp.patch), ("1", "2", "3"));

        let vp = VersionParts::parse("1.2.3-alpha.1");
        assert_eq!(vp.patch, "3");

        let vp = VersionParts::parse("4.5");
        assert_eq!(vp.assembly_version(), "4.5.0.0");

        let vp = VersionParts::parse("1.0.0+build.7");
        assert_eq!(vp.assembly_version(), "1.0.0.0");

        assert_eq!(VersionParts::parse("").assembly_version(), "0.0.0.0");
    }

    #[test]
    fn test_default_items_order() {
        let names: Vec<_> = ProjectMetadata::default()
            .default_items()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(
            names,
            [
                "AssemblyName",
                "Version",
                "Product",
                "Company",
                "Copyright",
                "Description",
                "Configuration",
                "AssemblyVersion",
                "FileVersion",
                "InformationalVersion",
            ]
        );
    }

    #[test]
    fn test_default_items_are_marked_and_documented() {
        let items = ProjectMetadata::default().default_items();
        assert!(items.iter().all(|i| i.is_default));
        assert!(items.iter().all(|i| i.summary.is_some()));
        assert!(items.iter().all(|i| i.non_empty_value().is_none()));
    }

    #[test]
    fn test_derived_defaults() {
        let metadata = ProjectMetadata {
            assembly_name: Some("MyApp".into()),
            version: Some("1.4.2-beta".into()),
            ..Default::default()
        };
        let items = metadata.default_items();

        assert_eq!(value_of(&items, "Product"), Some("MyApp"));
        assert_eq!(value_of(&items, "AssemblyVersion"), Some("1.4.2.0"));
        assert_eq!(value_of(&items, "FileVersion"), Some("1.4.2.0"));
        assert_eq!(value_of(&items, "InformationalVersion"), Some("1.4.2-beta"));
        assert_eq!(value_of(&items, "Company"), None);
    }

    #[test]
    fn test_explicit_values_beat_derived() {
        let metadata = ProjectMetadata {
            assembly_name: Some("MyApp".into()),
            product: Some("My Product".into()),
            version: Some("1.0.0".into()),
            assembly_version: Some("1.0.0.42".into()),
            ..Default::default()
        };
        let items = metadata.default_items();

        assert_eq!(value_of(&items, "Product"), Some("My Product"));
        assert_eq!(value_of(&items, "AssemblyVersion"), Some("1.0.0.42"));
        assert_eq!(value_of(&items, "FileVersion"), Some("1.0.0.0"));
    }

    #[test]
    fn test_from_env_with() {
        let env = |key: &str| {
            let value = match key {
                "CARGO_PKG_NAME" => Some("my-app"),
                "CARGO_PKG_VERSION" => Some("0.3.1"),
                "CARGO_PKG_AUTHORS" => Some("Ann:Bob"),
                "CARGO_PKG_DESCRIPTION" => Some(""),
                "PROFILE" => Some("release"),
                _ => None,
            };
            value.map(str::to_owned)
        };
        let metadata = ProjectMetadata::from_env_with(env);

        assert_eq!(metadata.assembly_name.as_deref(), Some("my-app"));
        assert_eq!(metadata.product.as_deref(), Some("my-app"));
        assert_eq!(metadata.version.as_deref(), Some("0.3.1"));
        assert_eq!(metadata.company.as_deref(), Some("Ann, Bob"));
        assert_eq!(metadata.description, None);
        assert_eq!(metadata.configuration.as_deref(), Some("release"));
    }

    #[test]
    fn test_or_prefers_self() {
        let primary = ProjectMetadata {
            version: Some("2.0.0".into()),
            ..Default::default()
        };
        let fallback = ProjectMetadata {
            version: Some("1.0.0".into()),
            company: Some("Acme".into()),
            ..Default::default()
        };
        let merged = primary.or(fallback);
        assert_eq!(merged.version.as_deref(), Some("2.0.0"));
        assert_eq!(merged.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_resolve_items_appends_declared_after_defaults() {
        let metadata = ProjectMetadata {
            version: Some("1.0.0".into()),
            ..Default::default()
        };
        let items = resolve_items(
            &metadata,
            &ResolveOptions::default(),
            [Item::new("Custom", "x")],
            &[],
        );

        assert_eq!(items.len(), 11);
        assert_eq!(items.as_slice().first().map(|i| i.name.as_str()), Some("AssemblyName"));
        assert_eq!(items.as_slice().last().map(|i| i.name.as_str()), Some("Custom"));
    }

    #[test]
    fn test_resolve_items_applies_removals() {
        let metadata = ProjectMetadata {
            version: Some("1.0.0".into()),
            ..Default::default()
        };
        let items = resolve_items(
            &metadata,
            &ResolveOptions::default(),
            [Item::new("Extra", "x")],
            &["Version".to_owned(), "Extra".to_owned()],
        );

        assert!(items.iter().all(|i| i.name != "Version"));
        // removals only see the defaults
        assert!(items.iter().any(|i| i.name == "Extra"));
    }

    #[test]
    fn test_resolve_items_override_default() {
        let metadata = ProjectMetadata {
            version: Some("1.0.0".into()),
            ..Default::default()
        };
        let items = resolve_items(
            &metadata,
            &ResolveOptions::default(),
            [Item::new("Version", "2.0.0-custom")],
            &["Version".to_owned()],
        );

        let versions: Vec<_> = items.iter().filter(|i| i.name == "Version").collect();
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].value.as_deref(), Some("2.0.0-custom"));
        assert!(!versions[0].is_default);
    }

    #[test]
    fn test_resolve_items_without_defaults() {
        let metadata = ProjectMetadata {
            assembly_name: Some("MyApp".into()),
            ..Default::default()
        };
        let items = resolve_items(
            &metadata,
            &ResolveOptions {
                include_defaults: false,
            },
            [Item::new("Custom", "x")],
            &[],
        );

        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Custom"]);
    }
}
