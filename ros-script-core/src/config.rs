use indexmap::IndexMap;
use serde::Serialize;

/// Section key for free-text comment blocks that carry no section header.
pub const COMMENT_BLOCK: &str = "";

/// An ordered RouterOS configuration fragment.
///
/// Keys are CLI section paths (strings beginning with `/`, or
/// [`COMMENT_BLOCK`] for header-less comment lines); values are ordered
/// command lists. Iteration order is insertion order — emission order is
/// semantically significant on the device, so this must never be backed by an
/// unordered or sorted map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouterConfig {
    sections: IndexMap<String, Vec<String>>,
}

impl RouterConfig {
    /// Create an empty configuration. Identity element of [`merge`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration holding a single section.
    pub fn from_section<C>(section: impl Into<String>, commands: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut out = Self::new();
        out.sections.insert(
            section.into(),
            commands.into_iter().map(Into::into).collect(),
        );
        out
    }

    /// Append one command to a section, creating the section if absent.
    pub fn push(&mut self, section: impl Into<String>, command: impl Into<String>) {
        self.sections
            .entry(section.into())
            .or_default()
            .push(command.into());
    }

    /// Append a comment line to the header-less comment block.
    pub fn push_comment(&mut self, line: impl Into<String>) {
        self.push(COMMENT_BLOCK, line);
    }

    /// Fold another configuration into this one, concatenating command lists
    /// per section in argument order. Never drops or reorders entries.
    pub fn absorb(&mut self, other: RouterConfig) {
        for (section, commands) in other.sections {
            self.sections.entry(section).or_default().extend(commands);
        }
    }

    /// Commands for one section, if present.
    pub fn get(&self, section: &str) -> Option<&[String]> {
        self.sections.get(section).map(Vec::as_slice)
    }

    /// Iterate sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|(section, commands)| (section.as_str(), commands.as_slice()))
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of command lines across all sections.
    pub fn command_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// True when no section holds any command.
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(Vec::is_empty)
    }

    /// Keep only sections accepted by the predicate, preserving order.
    pub fn retain_sections(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.sections.retain(|section, _| keep(section));
    }
}

/// Merge fragments in argument order. Associative, with the empty
/// configuration as identity: per section, command lists concatenate and no
/// entry is ever dropped or reordered.
pub fn merge<I>(fragments: I) -> RouterConfig
where
    I: IntoIterator<Item = RouterConfig>,
{
    let mut out = RouterConfig::new();
    for fragment in fragments {
        out.absorb(fragment);
    }
    out
}

/// Merge fragments, skipping absent and empty ones.
pub fn merge_all<I>(fragments: I) -> RouterConfig
where
    I: IntoIterator<Item = Option<RouterConfig>>,
{
    merge(fragments.into_iter().flatten().filter(|f| !f.is_empty()))
}

/// Post-process a merged configuration before emission: drop repeated
/// commands within a section (first occurrence wins) and drop sections that
/// end up empty. Never reorders and never drops a non-duplicate command.
pub fn shorten(config: RouterConfig) -> RouterConfig {
    let mut out = RouterConfig::new();
    for (section, commands) in config.sections {
        let mut seen: Vec<&str> = Vec::new();
        let mut kept = Vec::new();
        for command in &commands {
            if seen.contains(&command.as_str()) {
                continue;
            }
            seen.push(command.as_str());
            kept.push(command.clone());
        }
        if !kept.is_empty() {
            out.sections.insert(section, kept);
        }
    }
    out
}
