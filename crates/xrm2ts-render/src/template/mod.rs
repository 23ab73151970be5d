//! Template documents and the slug language.
//!
//! A template is an XML document whose structure drives iteration and
//! whose literal blocks carry slugs:
//!
//! ```text
//! <template>
//!     <![CDATA[ module text, {#module_name#} ]]>
//!     <entity>
//!         <![CDATA[ per-entity text, {#ent title(logicalname)#} ]]>
//!         <attribute_list>
//!             <![CDATA[ per-attribute text, {#attr api(schemaname)#} ]]>
//!         </attribute_list>
//!     </entity>
//! </template>
//! ```
//!
//! ## Slugs
//!
//! | Slug | Scope | Result |
//! |------|-------|--------|
//! | `{#ent (prop)#}` | entity | property value |
//! | `{#ent upper(prop)#}` | entity | upper-cased value |
//! | `{#ent lower(prop)#}` | entity | lower-cased value |
//! | `{#ent title(prop)#}` | entity | first character upper-cased |
//! | `{#attr ...(prop)#}` | attribute | same modifiers as entity |
//! | `{#attr dt(attributetype)#}` | attribute | script datatype |
//! | `{#attr api(schemaname)#}` | attribute | Web API field name |
//! | `{#module_name#}`, `{#module_notes#}` | project | configured text |
//!
//! ## Key Types
//!
//! - [`TemplateDocument`]: the parsed node tree
//! - [`Slug`] and [`scan`]: the slug scanner
//! - [`Scope`]: resolved property values of one metadata record

mod document;
pub(crate) mod interpreter;
mod scope;
mod slug;

pub use document::{Node, TemplateDocument};
pub use scope::{AttributeScope, EntityScope, Scope};
pub use slug::{scan, Modifier, Slug, SlugScope, Slugs, MODULE_NAME_SLUG, MODULE_NOTES_SLUG};
