//! # xrm2ts-render - Template-Driven Script Generation
//!
//! Turns CRM entity metadata into script source by walking an XML
//! template. The template's structure decides what repeats (once per
//! entity, once per attribute); slugs inside its literal blocks pull in
//! property values.
//!
//! ## Quick Start
//!
//! ```rust
//! use xrm2ts_metadata::{AttributeMetadata, AttributeTypeCode, EntityMetadata};
//! use xrm2ts_render::{GenerationConfig, Generator, TemplateDocument};
//!
//! let entities = vec![EntityMetadata {
//!     logical_name: "account".into(),
//!     attributes: vec![AttributeMetadata {
//!         schema_name: "Name".into(),
//!         attribute_type: Some(AttributeTypeCode::String),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! }];
//!
//! let template: TemplateDocument = r#"<template>
//!   <entity>
//!     <![CDATA[interface {#ent title(logicalname)#} {
//! ]]>
//!     <attribute_list><![CDATA[  {#attr api(schemaname)#}: {#attr dt(attributetype)#};
//! ]]></attribute_list>
//!     <![CDATA[}
//! ]]>
//!   </entity>
//! </template>"#
//!     .parse()?;
//!
//! let config = GenerationConfig::default();
//! let result = Generator::new(&config).generate_with(&template, &entities)?;
//! assert_eq!(result.output, "interface Account {\n  name: string;\n}\n");
//! # Ok::<(), xrm2ts_render::GenerateError>(())
//! ```
//!
//! ## Modules
//!
//! - [`template`]: document parsing and the slug language
//! - [`generator`]: the run itself
//! - [`config`]: run settings, loadable from YAML or JSON
//! - [`log`]: the level-gated diagnostic log returned with the output

pub mod config;
mod error;
pub mod generator;
pub mod log;
pub mod template;

pub use config::{ConfigError, EntityTypes, GenerationConfig};
pub use error::{GenerateError, Result};
pub use generator::{generate, GenerationResult, Generator};
pub use log::{GenerationLog, LoggingLevel};
pub use template::{Node, TemplateDocument};
