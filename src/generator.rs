//! C# constant class generation.
//!
//! The generator makes a single pass over the items: it validates each one,
//! collects diagnostics for the ones it rejects, and renders the survivors as
//! `const` members of a `partial class`. Validation never stops at the first
//! problem, so every bad item is reported together.

use std::fmt::Write as _;
use std::sync::LazyLock;

use crate::constant::{ConstantEntry, ValueKind};
use crate::csharp::{doc_lines, escape_xml_doc};
use crate::diagnostic::{self, Diagnostic};
use crate::item::Item;

/// Pattern every constant name must match.
pub const NAME_PATTERN: &str = "^[A-Z][A-Za-z0-9]*$";

/// Default name of the generated class.
pub const DEFAULT_TYPE_NAME: &str = "BuildConstants";

static NAME_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"));

/// Returns whether `name` is an acceptable constant name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Configuration for the constant generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Namespace for the generated class. Empty means the global namespace.
    pub namespace: String,

    /// Name of the generated partial class.
    pub type_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            type_name: DEFAULT_TYPE_NAME.to_owned(),
        }
    }
}

/// The entries accepted by validation, with everything reported on the way.
#[derive(Debug, Default)]
pub struct Collected<'a> {
    pub entries: Vec<ConstantEntry<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of a full generation pass.
#[derive(Debug)]
pub struct Generation {
    /// Rendered source. `None` when any error was reported.
    pub text: Option<String>,

    /// Every error and warning, in item order.
    pub diagnostics: Vec<Diagnostic>,

    /// Number of constants that passed validation.
    pub constants: usize,
}

impl Generation {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// Generates a C# constants class from build items.
pub struct ConstantGenerator {
    config: GeneratorConfig,
}

impl ConstantGenerator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Validates and renders `items`.
    pub fn generate(&self, items: &[Item]) -> Generation {
        let collected = Self::collect(items);
        let text = if collected.diagnostics.iter().any(Diagnostic::is_error) {
            None
        } else {
            Some(self.render(&collected.entries))
        };

        Generation {
            text,
            diagnostics: collected.diagnostics,
            constants: collected.entries.len(),
        }
    }

    /// Runs validation over `items` in order.
    ///
    /// Checks, per item: empty value (skipped without a diagnostic), name
    /// pattern, duplicate name (first occurrence wins), then type tag.
    pub fn collect(items: &[Item]) -> Collected<'_> {
        let mut collected = Collected {
            entries: Vec::with_capacity(items.len()),
            diagnostics: Vec::new(),
        };
        let mut seen: rustc_hash::FxHashSet<&str> = rustc_hash::FxHashSet::default();

        for item in items {
            let Some(value) = item.non_empty_value() else {
                tracing::debug!(name = %item.name, "skipping constant without a value");
                continue;
            };

            if !is_valid_name(&item.name) {
                collected.diagnostics.push(Diagnostic::error(
                    diagnostic::INVALID_NAME,
                    format!(
                        "Invalid constant name '{}'. Names must match the pattern {NAME_PATTERN}.",
                        item.name
                    ),
                ));
                continue;
            }

            if !seen.insert(item.name.as_str()) {
                collected.diagnostics.push(Diagnostic::warning(
                    diagnostic::DUPLICATE_NAME,
                    format!(
                        "Duplicate constant name '{}'; the later definition is ignored.",
                        item.name
                    ),
                ));
                continue;
            }

            let kind = match ValueKind::resolve(item.type_tag.as_deref()) {
                Ok(kind) => kind,
                Err(rejected) => {
                    collected.diagnostics.push(Diagnostic::error(
                        diagnostic::UNSUPPORTED_TYPE,
                        format!(
                            "Unsupported type '{}' for constant '{}'. Allowed types: {}.",
                            rejected.0,
                            item.name,
                            ValueKind::ALLOWED.join(", ")
                        ),
                    ));
                    continue;
                }
            };

            collected.entries.push(ConstantEntry {
                name: &item.name,
                value,
                summary: item.summary.as_deref().filter(|s| !s.is_empty()),
                kind,
            });
        }

        collected
    }

    /// Renders validated entries as a C# source file.
    pub fn render(&self, entries: &[ConstantEntry<'_>]) -> String {
        // ~120 bytes of boilerplate plus ~80 bytes per member
        let mut out = String::with_capacity(120 + entries.len() * 80);

        out.push_str("// <auto-generated />\n\n");

        if !self.config.namespace.is_empty() {
            let _ = writeln!(out, "namespace {};\n", self.config.namespace);
        }

        let _ = writeln!(out, "partial class {} {{", self.config.type_name);

        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }

            if let Some(summary) = entry.summary {
                out.push_str("    /// <summary>\n");
                for line in doc_lines(summary) {
                    out.push_str("    /// ");
                    out.push_str(&escape_xml_doc(line));
                    out.push('\n');
                }
                out.push_str("    /// </summary>\n");
            }

            let _ = writeln!(
                out,
                "    public const {} {} = {};",
                entry.kind.keyword(),
                entry.name,
                entry.kind.literal(entry.value)
            );
        }

        out.push_str("}\n");
        out
    }
}

/// One-shot form of [`ConstantGenerator::generate`].
pub fn generate(items: &[Item], namespace: &str, type_name: &str) -> Generation {
    ConstantGenerator::new(GeneratorConfig {
        namespace: namespace.to_owned(),
        type_name: type_name.to_owned(),
    })
    .generate(items)
}
