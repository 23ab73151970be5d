//! Command-line surface and command handlers.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use xrm2ts_metadata::EntityMetadata;
use xrm2ts_render::template::scan;
use xrm2ts_render::{GenerationConfig, Generator, LoggingLevel, Node, TemplateDocument};

/// Generate TypeScript from CRM entity metadata and an XML template.
#[derive(Parser, Debug)]
#[command(name = "xrm2ts", version)]
pub struct Cli {
    /// Show debug diagnostics on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a template over a metadata dump
    Generate(GenerateArgs),

    /// Write the default configuration as YAML
    Init(InitArgs),

    /// Parse a template and list its structure and slugs
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Entity metadata as JSON: an array, a Web API `{"value": [...]}` envelope, or one entity
    #[arg(short, long)]
    pub metadata: PathBuf,

    /// Configuration file (.yaml, .yml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template file, overriding the configured one
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Write generated output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the diagnostic log here instead of stderr
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Logging level, overriding the configured one
    #[arg(long, value_parser = parse_level)]
    pub logging_level: Option<LoggingLevel>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Write the configuration here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Template file to inspect
    pub template: PathBuf,
}

fn parse_level(s: &str) -> std::result::Result<LoggingLevel, String> {
    s.parse()
}

/// Shapes a metadata dump may come in.
#[derive(Deserialize)]
#[serde(untagged)]
enum MetadataDump {
    List(Vec<EntityMetadata>),
    Envelope { value: Vec<EntityMetadata> },
    Single(Box<EntityMetadata>),
}

impl MetadataDump {
    fn into_entities(self) -> Vec<EntityMetadata> {
        match self {
            MetadataDump::List(entities) | MetadataDump::Envelope { value: entities } => entities,
            MetadataDump::Single(entity) => vec![*entity],
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Init(args) => init(args),
        Command::Check(args) => check(args),
    }
}

/// Loads a configuration file, choosing the format by extension.
///
/// A relative template path in the file is taken relative to the file.
pub fn load_config(path: &Path) -> Result<GenerationConfig> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;

    let mut config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => GenerationConfig::from_json(&source),
        Some("yaml" | "yml") | None => GenerationConfig::from_yaml(&source),
        Some(other) => bail!("unsupported config format '.{}': {}", other, path.display()),
    }
    .with_context(|| format!("parsing config {}", path.display()))?;

    if config.script_template.is_relative() {
        if let Some(dir) = path.parent() {
            config.script_template = dir.join(&config.script_template);
        }
    }
    Ok(config)
}

pub fn load_metadata(path: &Path) -> Result<Vec<EntityMetadata>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("reading metadata {}", path.display()))?;
    let dump: MetadataDump = serde_json::from_str(&source)
        .with_context(|| format!("parsing metadata {}", path.display()))?;
    Ok(dump.into_entities())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(template) = args.template {
        config.script_template = template;
    }
    if let Some(level) = args.logging_level {
        config.logging_level = level;
    }

    let entities = load_metadata(&args.metadata)?;
    tracing::debug!(
        entities = entities.len(),
        template = %config.script_template.display(),
        "generating"
    );

    let mut generator = Generator::new(&config);
    let outcome = generator.generate(&entities);

    // The log is written whether or not the run succeeded.
    write_log(args.log.as_deref(), config.logging_level, generator.log().text())?;
    let result = outcome.context("generation failed")?;

    match &args.output {
        Some(path) => fs::write(path, &result.output)
            .with_context(|| format!("writing output {}", path.display()))?,
        None => print!("{}", result.output),
    }
    Ok(())
}

fn write_log(path: Option<&Path>, level: LoggingLevel, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing log {}", path.display()))
        }
        None if level != LoggingLevel::None => {
            eprint!("{}", text);
            Ok(())
        }
        None => Ok(()),
    }
}

fn init(args: InitArgs) -> Result<()> {
    let yaml = GenerationConfig::default().to_yaml()?;
    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            fs::write(path, yaml).with_context(|| format!("writing {}", path.display()))?;
        }
        None => print!("{}", yaml),
    }
    Ok(())
}

fn check(args: CheckArgs) -> Result<()> {
    let document = TemplateDocument::load(&args.template)?;
    print!("{}", outline(&document));
    Ok(())
}

/// Renders the node tree of a template, one node per line, with the slugs
/// each literal contains.
pub fn outline(document: &TemplateDocument) -> String {
    let mut out = String::new();
    write_nodes(&mut out, document.nodes(), 0);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node], depth: usize) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        let _ = writeln!(out, "{}{}", indent, node.name());
        match node {
            Node::Literal(text) => write_slugs(out, text, depth + 1),
            Node::AttributeList {
                fragment: Some(fragment),
            } => write_slugs(out, fragment, depth + 1),
            Node::Entity(children) | Node::Container(children) => {
                write_nodes(out, children, depth + 1)
            }
            Node::AttributeList { fragment: None } | Node::Ignored(_) => {}
        }
    }
}

fn write_slugs(out: &mut String, text: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    for slug in scan(text) {
        let _ = writeln!(
            out,
            "{}{} -> {} {} [{}]",
            indent,
            slug.raw,
            slug.scope,
            slug.property,
            match slug.modifier.keyword() {
                "" => "none",
                keyword => keyword,
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "xrm2ts",
            "generate",
            "--metadata",
            "dump.json",
            "--template",
            "t.xml",
            "--logging-level",
            "verbose",
        ])
        .unwrap();

        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.metadata, PathBuf::from("dump.json"));
                assert_eq!(args.template, Some(PathBuf::from("t.xml")));
                assert_eq!(args.logging_level, Some(LoggingLevel::Verbose));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_logging_level() {
        assert!(Cli::try_parse_from([
            "xrm2ts",
            "generate",
            "--metadata",
            "dump.json",
            "--logging-level",
            "chatty",
        ])
        .is_err());
    }

    #[test]
    fn metadata_dump_shapes() {
        let list: MetadataDump = serde_json::from_str(r#"[{"LogicalName": "account"}]"#).unwrap();
        assert_eq!(list.into_entities()[0].logical_name, "account");

        let envelope: MetadataDump =
            serde_json::from_str(r#"{"value": [{"LogicalName": "a"}, {"LogicalName": "b"}]}"#)
                .unwrap();
        assert_eq!(envelope.into_entities().len(), 2);

        let single: MetadataDump = serde_json::from_str(r#"{"LogicalName": "contact"}"#).unwrap();
        assert_eq!(single.into_entities()[0].logical_name, "contact");
    }

    #[test]
    fn outline_lists_nodes_and_slugs() {
        let doc = TemplateDocument::parse(
            "<template><![CDATA[{#module_name#}]]><entity><![CDATA[{#ent title(logicalname)#}]]>\
             <attribute_list><![CDATA[{#attr api(schemaname)#}]]></attribute_list><notes/></entity></template>",
        )
        .unwrap();

        assert_eq!(
            outline(&doc),
            "#cdata-section\n\
             entity\n\
             \x20 #cdata-section\n\
             \x20   {#ent title(logicalname)#} -> entity logicalname [title]\n\
             \x20 attribute_list\n\
             \x20   {#attr api(schemaname)#} -> attribute schemaname [api]\n\
             \x20 notes\n"
        );
    }
}
