//! Slug scanner.
//!
//! A single forward pass over a literal block finds every well-formed
//! entity or attribute slug. Anything that does not fit the grammar is
//! left for the caller to copy through unchanged.

use std::fmt;

/// Replaced with the configured module name.
pub const MODULE_NAME_SLUG: &str = "{#module_name#}";
/// Replaced with the configured module notes.
pub const MODULE_NOTES_SLUG: &str = "{#module_notes#}";

const OPEN: &str = "{#";
const CLOSE: &str = ")#}";

/// Which metadata record a slug reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugScope {
    Entity,
    Attribute,
}

impl SlugScope {
    fn keyword(self) -> &'static str {
        match self {
            SlugScope::Entity => "ent",
            SlugScope::Attribute => "attr",
        }
    }

    fn modifiers(self) -> &'static [Modifier] {
        match self {
            SlugScope::Entity => &[Modifier::Upper, Modifier::Lower, Modifier::Title],
            SlugScope::Attribute => &[
                Modifier::Upper,
                Modifier::Lower,
                Modifier::Title,
                Modifier::DataType,
                Modifier::WebApi,
            ],
        }
    }
}

impl fmt::Display for SlugScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugScope::Entity => write!(f, "entity"),
            SlugScope::Attribute => write!(f, "attribute"),
        }
    }
}

/// Transform applied to a resolved property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Identity,
    Upper,
    Lower,
    /// Upper-cases the first character only.
    Title,
    /// Script datatype of the current attribute (`attributetype` only).
    DataType,
    /// Web API field name of the current attribute (`schemaname` only).
    WebApi,
}

impl Modifier {
    /// The keyword written in a slug, empty for [`Modifier::Identity`].
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Identity => "",
            Modifier::Upper => "upper",
            Modifier::Lower => "lower",
            Modifier::Title => "title",
            Modifier::DataType => "dt",
            Modifier::WebApi => "api",
        }
    }

    /// Applies the text transforms. `DataType` and `WebApi` need the
    /// attribute record and leave `value` untouched here.
    pub fn apply(self, value: String) -> String {
        match self {
            Modifier::Upper => value.to_uppercase(),
            Modifier::Lower => value.to_lowercase(),
            Modifier::Title => upper_first(&value),
            Modifier::Identity | Modifier::DataType | Modifier::WebApi => value,
        }
    }
}

fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One slug found in a literal block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug<'t> {
    /// The slug exactly as written.
    pub raw: &'t str,
    pub scope: SlugScope,
    pub modifier: Modifier,
    /// Property name, whitespace removed and lower-cased.
    pub property: String,
    /// Byte offset of the opening `{#`.
    pub start: usize,
    /// Byte offset just past the closing `)#}`.
    pub end: usize,
}

/// Iterator over the slugs of a text, in order of appearance.
pub struct Slugs<'t> {
    text: &'t str,
    pos: usize,
}

/// Scans `text` for slugs.
pub fn scan(text: &str) -> Slugs<'_> {
    Slugs { text, pos: 0 }
}

impl<'t> Iterator for Slugs<'t> {
    type Item = Slug<'t>;

    fn next(&mut self) -> Option<Slug<'t>> {
        while let Some(offset) = self.text.get(self.pos..)?.find(OPEN) {
            let start = self.pos + offset;
            match parse_at(self.text, start) {
                Some(slug) => {
                    self.pos = slug.end;
                    return Some(slug);
                }
                None => self.pos = start + OPEN.len(),
            }
        }
        self.pos = self.text.len();
        None
    }
}

/// Parses a slug starting exactly at `start`, which points at `{#`.
fn parse_at(text: &str, start: usize) -> Option<Slug<'_>> {
    let after_open = &text[start + OPEN.len()..];
    let (scope, rest) = [SlugScope::Attribute, SlugScope::Entity]
        .into_iter()
        .find_map(|scope| after_open.strip_prefix(scope.keyword()).map(|rest| (scope, rest)))?;

    let rest = rest.trim_start();
    let (modifier, rest) = scope
        .modifiers()
        .iter()
        .find_map(|m| {
            rest.strip_prefix(m.keyword())
                .map(str::trim_start)
                .filter(|r| r.starts_with('('))
                .map(|r| (*m, r))
        })
        .unwrap_or((Modifier::Identity, rest));

    // Every slice here is a suffix of `text`.
    let body = rest.strip_prefix('(')?;
    let close = body.find(CLOSE)?;
    let inner = &body[..close];
    if inner.contains('\n') {
        return None;
    }
    let end = text.len() - body.len() + close + CLOSE.len();

    Some(Slug {
        raw: &text[start..end],
        scope,
        modifier,
        property: inner
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase(),
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(text: &str) -> Slug<'_> {
        let slugs: Vec<_> = scan(text).collect();
        assert_eq!(slugs.len(), 1, "expected one slug in {:?}", text);
        slugs.into_iter().next().unwrap()
    }

    #[test]
    fn entity_slug_without_modifier() {
        let slug = only("class {#ent (logicalname)#} {");
        assert_eq!(slug.scope, SlugScope::Entity);
        assert_eq!(slug.modifier, Modifier::Identity);
        assert_eq!(slug.property, "logicalname");
        assert_eq!(slug.raw, "{#ent (logicalname)#}");
        assert_eq!(slug.start, 6);
        assert_eq!(slug.end, 6 + slug.raw.len());
    }

    #[test]
    fn attribute_modifiers() {
        assert_eq!(only("{#attr dt(attributetype)#}").modifier, Modifier::DataType);
        assert_eq!(only("{#attr api(schemaname)#}").modifier, Modifier::WebApi);
        assert_eq!(only("{#attr upper(logicalname)#}").modifier, Modifier::Upper);
        assert_eq!(only("{#attrlower(logicalname)#}").modifier, Modifier::Lower);
    }

    #[test]
    fn whitespace_is_flexible() {
        let slug = only("{#ent   title  ( Logical Name )#}");
        assert_eq!(slug.modifier, Modifier::Title);
        assert_eq!(slug.property, "logicalname");
    }

    #[test]
    fn entity_scope_rejects_attribute_only_modifiers() {
        assert_eq!(scan("{#ent dt(attributetype)#}").count(), 0);
        assert_eq!(scan("{#ent api(schemaname)#}").count(), 0);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(scan("{#ENT (logicalname)#}").count(), 0);
        assert_eq!(scan("{#attr UPPER(logicalname)#}").count(), 0);
    }

    #[test]
    fn slug_does_not_span_lines() {
        assert_eq!(scan("{#ent (logical\nname)#}").count(), 0);
    }

    #[test]
    fn unterminated_slug_is_skipped() {
        let slugs: Vec<_> = scan("{#ent (a) {#attr (b)#}").collect();
        // The first `)#}` closes the first slug, swallowing the second opener.
        assert_eq!(slugs.len(), 1);
        assert_eq!(slugs[0].scope, SlugScope::Entity);
        assert_eq!(slugs[0].property, "a){#attr(b");

        let slugs: Vec<_> = scan("{#ent broken {#attr (b)#}").collect();
        assert_eq!(slugs.len(), 1);
        assert_eq!(slugs[0].scope, SlugScope::Attribute);
        assert_eq!(slugs[0].raw, "{#attr (b)#}");
    }

    #[test]
    fn project_slugs_are_not_scanned() {
        assert_eq!(scan("{#module_name#} {#module_notes#}").count(), 0);
    }

    #[test]
    fn multiple_slugs_in_order() {
        let text = "{#attr api(schemaname)#}: {#attr dt(attributetype)#};";
        let slugs: Vec<_> = scan(text).collect();
        assert_eq!(slugs.len(), 2);
        assert_eq!(slugs[0].property, "schemaname");
        assert_eq!(slugs[1].property, "attributetype");
        assert_eq!(&text[slugs[0].end..slugs[1].start], ": ");
    }

    #[test]
    fn title_uppercases_first_character_only() {
        assert_eq!(Modifier::Title.apply("accountnumber".into()), "Accountnumber");
        assert_eq!(Modifier::Title.apply(String::new()), "");
        assert_eq!(Modifier::Upper.apply("account".into()), "ACCOUNT");
        assert_eq!(Modifier::Lower.apply("Account".into()), "account");
        assert_eq!(Modifier::WebApi.apply("Name".into()), "Name");
    }
}
