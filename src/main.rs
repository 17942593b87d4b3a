use std::path::PathBuf;

use build_constants::generator::{ConstantGenerator, GeneratorConfig};
use build_constants::logging::{self, LogFormat};
use build_constants::manifest::Manifest;
use build_constants::project::ProjectMetadata;
use build_constants::task::{self, GenerateTask, TaskError};
use color_eyre::eyre::WrapErr as _;

#[derive(clap::Parser)]
#[command(name = "build-constants")]
#[command(about = "Generate a C# class of compile-time build constants")]
struct Cli {
    /// Build manifest (JSON). Read from stdin when omitted
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// File to write. Without one, the generated source is printed to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Namespace of the generated class (empty for the global namespace)
    #[arg(short, long)]
    namespace: Option<String>,

    /// Name of the generated class
    #[arg(short, long)]
    type_name: Option<String>,

    /// Project language marker
    #[arg(short, long)]
    language: Option<String>,

    /// Do not emit the default constants from project metadata
    #[arg(long)]
    no_defaults: bool,

    /// Remove a default constant by name (repeatable); declared constants are unaffected
    #[arg(short, long = "remove", value_name = "NAME")]
    remove: Vec<String>,

    /// Fill unset project metadata from CARGO_PKG_* variables
    #[arg(long)]
    cargo_env: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

impl Cli {
    /// Applies command-line overrides on top of the manifest.
    fn apply(self, manifest: &mut Manifest) {
        if let Some(output) = self.output {
            manifest.output = Some(output);
        }
        if let Some(namespace) = self.namespace {
            manifest.namespace = namespace;
        }
        if let Some(type_name) = self.type_name {
            manifest.type_name = type_name;
        }
        if let Some(language) = self.language {
            manifest.language = language;
        }
        if self.no_defaults {
            manifest.include_defaults = false;
        }
        manifest.remove.extend(self.remove);
        if self.cargo_env {
            let project = std::mem::take(&mut manifest.project);
            manifest.project = project.or(ProjectMetadata::from_cargo_env());
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    use clap::Parser as _;
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let mut manifest = match &cli.manifest {
        Some(path) => Manifest::load(path)?,
        None => Manifest::from_reader(std::io::stdin().lock())
            .wrap_err("reading manifest from stdin")?,
    };
    cli.apply(&mut manifest);

    let items = manifest.items();
    if items.is_empty() {
        tracing::warn!("no constants to generate; the class will be empty");
    }

    match manifest.output {
        Some(output_path) => {
            let task = GenerateTask {
                language: manifest.language,
                output_path,
                namespace: manifest.namespace,
                type_name: manifest.type_name,
            };
            match task.execute(items.as_slice()) {
                Ok(output) => {
                    logging::report_all(&output.diagnostics);
                    println!("{}", output.path.display());
                }
                Err(
                    err @ (TaskError::UnsupportedLanguage { .. }
                    | TaskError::Validation { .. }),
                ) => {
                    logging::report_all(&err.diagnostics());
                    color_eyre::eyre::bail!(err);
                }
                Err(err) => return Err(err.into()),
            }
        }
        None => {
            if let Err(err) = task::check_language(&manifest.language) {
                logging::report_all(&err.diagnostics());
                color_eyre::eyre::bail!(err);
            }
            let generator = ConstantGenerator::new(GeneratorConfig {
                namespace: manifest.namespace,
                type_name: manifest.type_name,
            });
            let generation = generator.generate(items.as_slice());
            logging::report_all(&generation.diagnostics);
            match generation.text {
                Some(text) => print!("{text}"),
                None => color_eyre::eyre::bail!(TaskError::Validation {
                    diagnostics: generation.diagnostics,
                }),
            }
        }
    }

    Ok(())
}
