/// A recognized `#define` taken from the source header.
///
/// `value` is kept exactly as captured, quotes and punctuation included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroEntry {
    pub name: String,
    pub value: String,
}

/// Include-guard settings for the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub guard: String,
}

impl HeaderLayout {
    pub const DEFAULT_GUARD: &'static str = "FESTIVAL_CONFIG_H";
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            guard: Self::DEFAULT_GUARD.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub entries: Vec<MacroEntry>,
    pub header: String,
}
