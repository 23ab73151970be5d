//! Walks a template tree against the metadata list.
//!
//! Scopes are passed down the recursion as parameters: an entity scope
//! lives exactly as long as the children of one `<entity>` iteration, an
//! attribute scope as long as one fragment expansion.

use std::sync::atomic::{AtomicBool, Ordering};

use xrm2ts_metadata::EntityMetadata;

use super::document::Node;
use super::scope::{AttributeScope, EntityScope};
use super::slug::{scan, Modifier, Slug, SlugScope, MODULE_NAME_SLUG, MODULE_NOTES_SLUG};
use crate::config::GenerationConfig;
use crate::error::{GenerateError, Result};
use crate::log::GenerationLog;

pub(crate) struct Interpreter<'a> {
    config: &'a GenerationConfig,
    entities: &'a [EntityMetadata],
    log: &'a mut GenerationLog,
    cancel: Option<&'a AtomicBool>,
    out: String,
}

impl<'a> Interpreter<'a> {
    pub(crate) fn new(
        config: &'a GenerationConfig,
        entities: &'a [EntityMetadata],
        log: &'a mut GenerationLog,
        cancel: Option<&'a AtomicBool>,
    ) -> Self {
        Interpreter {
            config,
            entities,
            log,
            cancel,
            out: String::new(),
        }
    }

    /// Processes `nodes` as the children of the document root and returns
    /// the generated text.
    pub(crate) fn run(mut self, nodes: &[Node]) -> Result<String> {
        self.process_nodes(nodes, None)?;
        Ok(self.out)
    }

    fn process_nodes(&mut self, nodes: &[Node], entity: Option<&EntityScope<'a>>) -> Result<()> {
        for node in nodes {
            self.process_node(node, entity)?;
        }
        Ok(())
    }

    fn process_node(&mut self, node: &Node, entity: Option<&EntityScope<'a>>) -> Result<()> {
        tracing::debug!(node = node.name(), "processing node");
        self.log
            .information(format_args!("Process node: {}", node.name()));

        match node {
            Node::Literal(text) => {
                let expanded = self.expand(text, entity, None)?;
                self.out.push_str(&expanded);
            }
            Node::Entity(children) => self.process_entities(children)?,
            Node::AttributeList { fragment } => match entity {
                Some(entity) => {
                    if let Some(fragment) = fragment {
                        self.process_attributes(fragment, entity)?;
                    }
                }
                None => self.log.information(format_args!(
                    "Skipping attribute_list outside of an entity"
                )),
            },
            Node::Container(children) => self.process_nodes(children, entity)?,
            Node::Ignored(name) => {
                tracing::debug!(element = %name, "ignoring unknown element");
            }
        }
        Ok(())
    }

    fn process_entities(&mut self, children: &[Node]) -> Result<()> {
        let entities = self.entities;
        for entity in entities {
            if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return Err(GenerateError::Cancelled {
                    entity: entity.logical_name.clone(),
                });
            }
            if self.config.filter_entity(&entity.logical_name) {
                self.log.information(format_args!(
                    "Skipping filtered entity: {}",
                    entity.logical_name
                ));
                continue;
            }
            if !self.config.entity_types.includes(entity) {
                self.log.information(format_args!(
                    "Skipping entity outside of {:?} scope: {}",
                    self.config.entity_types, entity.logical_name
                ));
                continue;
            }

            self.log
                .information(format_args!("Processing entity: {}", entity.logical_name));
            let scope = EntityScope::new(entity, self.config.language_code);
            for (name, value) in scope.iter() {
                self.log.verbose(format_args!(
                    "Property Name: {}, Property Value: {}",
                    name, value
                ));
            }

            self.process_nodes(children, Some(&scope))?;
        }
        Ok(())
    }

    fn process_attributes(&mut self, fragment: &str, entity: &EntityScope<'a>) -> Result<()> {
        for attribute in &entity.record().attributes {
            if self.config.filter_attribute(&attribute.schema_name) {
                continue;
            }
            if attribute.is_virtual() && !self.config.include_virtual_attributes {
                continue;
            }

            let scope = AttributeScope::new(attribute, self.config.language_code);
            let expanded = self.expand(fragment, Some(entity), Some(&scope))?;
            self.out.push_str(&expanded);
        }
        Ok(())
    }

    /// Replaces project slugs, then every entity and attribute slug whose
    /// scope is active. Slugs of an inactive scope are kept as written.
    fn expand(
        &mut self,
        text: &str,
        entity: Option<&EntityScope<'_>>,
        attribute: Option<&AttributeScope<'_>>,
    ) -> Result<String> {
        let text = text
            .replace(MODULE_NAME_SLUG, &self.config.module_name)
            .replace(MODULE_NOTES_SLUG, &self.config.module_notes);

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for slug in scan(&text) {
            let value = match slug.scope {
                SlugScope::Entity => entity.map(|scope| resolve_entity(scope, &slug)),
                SlugScope::Attribute => attribute.map(|scope| resolve_attribute(scope, &slug)),
            };
            let Some(value) = value.transpose()? else {
                continue;
            };

            tracing::trace!(slug = slug.raw, property = %slug.property, value = %value, "resolved slug");
            self.log.verbose(format_args!(
                "Match: {}, Property Name: {}, Property Value: {}",
                slug.raw, slug.property, value
            ));

            out.push_str(&text[last..slug.start]);
            out.push_str(&value);
            last = slug.end;
        }
        out.push_str(&text[last..]);
        Ok(out)
    }
}

fn lookup(value: Option<&str>, slug: &Slug<'_>) -> Result<String> {
    value
        .map(str::to_string)
        .ok_or_else(|| GenerateError::SlugResolution {
            slug: slug.raw.to_string(),
            property: slug.property.clone(),
            scope: slug.scope,
        })
}

fn resolve_entity(scope: &EntityScope<'_>, slug: &Slug<'_>) -> Result<String> {
    let value = lookup(scope.get(&slug.property), slug)?;
    Ok(slug.modifier.apply(value))
}

fn resolve_attribute(scope: &AttributeScope<'_>, slug: &Slug<'_>) -> Result<String> {
    let value = lookup(scope.get(&slug.property), slug)?;
    let attribute = scope.record();
    Ok(match (slug.modifier, slug.property.as_str()) {
        (Modifier::DataType, "attributetype") => attribute.script_type().to_string(),
        (Modifier::WebApi, "schemaname") => attribute.web_api_name(),
        (modifier, _) => modifier.apply(value),
    })
}
