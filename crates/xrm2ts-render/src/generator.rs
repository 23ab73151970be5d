//! Generation entry points.
//!
//! [`generate`] covers the common case: load the configured template, run
//! it over the metadata list and hand back output plus log. [`Generator`]
//! exposes the same run in steps, for callers that keep a parsed template
//! around, want to cancel from another thread, or need the log of a run
//! that failed.
//!
//! ```rust
//! use xrm2ts_metadata::EntityMetadata;
//! use xrm2ts_render::{GenerationConfig, Generator, TemplateDocument};
//!
//! let template: TemplateDocument =
//!     "<entity><![CDATA[export const {#ent (logicalname)#} = 1;]]></entity>".parse()?;
//! let entities = vec![EntityMetadata {
//!     logical_name: "account".into(),
//!     ..Default::default()
//! }];
//!
//! let config = GenerationConfig::default();
//! let result = Generator::new(&config).generate_with(&template, &entities)?;
//! assert_eq!(result.output, "export const account = 1;");
//! # Ok::<(), xrm2ts_render::GenerateError>(())
//! ```

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use xrm2ts_metadata::EntityMetadata;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::log::GenerationLog;
use crate::template::interpreter::Interpreter;
use crate::template::TemplateDocument;

/// Output of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// The generated text.
    pub output: String,
    /// Diagnostic log text, gated by the configured logging level.
    pub log: String,
}

/// Runs the configured template over `entities`.
pub fn generate(config: &GenerationConfig, entities: &[EntityMetadata]) -> Result<GenerationResult> {
    Generator::new(config).generate(entities)
}

/// A generation run over one configuration.
pub struct Generator<'c> {
    config: &'c GenerationConfig,
    log: GenerationLog,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'c> Generator<'c> {
    pub fn new(config: &'c GenerationConfig) -> Self {
        Generator {
            config,
            log: GenerationLog::new(config.logging_level),
            cancel: None,
        }
    }

    /// Checks `flag` before each entity; once it is set the run stops with
    /// [`GenerateError::Cancelled`](crate::GenerateError::Cancelled).
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Loads the template named by the configuration.
    pub fn load_template(&mut self) -> Result<TemplateDocument> {
        let config = self.config;
        let path = &config.script_template;
        self.log
            .information(format_args!("Loading template: {}", path.display()));
        TemplateDocument::load(path).inspect_err(|e| {
            self.log.exception(format_args!("{}", e));
        })
    }

    /// Loads the configured template and runs it.
    pub fn generate(&mut self, entities: &[EntityMetadata]) -> Result<GenerationResult> {
        self.reset_log();
        let template = self.load_template()?;
        self.run(&template, entities)
    }

    /// Runs an already parsed template.
    ///
    /// Every run starts a fresh log. [`Generator::log`] keeps the log of
    /// the most recent run readable, including one that failed.
    pub fn generate_with(
        &mut self,
        template: &TemplateDocument,
        entities: &[EntityMetadata],
    ) -> Result<GenerationResult> {
        self.reset_log();
        self.run(template, entities)
    }

    fn reset_log(&mut self) {
        self.log = GenerationLog::new(self.config.logging_level);
    }

    fn run(&mut self, template: &TemplateDocument, entities: &[EntityMetadata]) -> Result<GenerationResult> {
        let span = tracing::debug_span!(
            "generate",
            module = %self.config.module_name,
            entities = entities.len()
        );
        let _guard = span.enter();

        self.log.information(format_args!(
            "Generating {} for {} entities",
            self.config.module_name,
            entities.len()
        ));

        let cancel = self.cancel.as_deref();
        let output = Interpreter::new(self.config, entities, &mut self.log, cancel)
            .run(template.nodes())
            .inspect_err(|e| tracing::warn!(error = %e, "generation failed"));

        match output {
            Ok(output) => {
                self.log.information(format_args!("Generation complete"));
                Ok(GenerationResult {
                    output,
                    log: self.log.text().to_string(),
                })
            }
            Err(e) => {
                self.log.exception(format_args!("{}", e));
                Err(e)
            }
        }
    }

    /// The log of the current or most recent run.
    pub fn log(&self) -> &GenerationLog {
        &self.log
    }
}
