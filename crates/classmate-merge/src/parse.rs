//! Splitting a single class token into modifiers, markers and utility.

/// One class token split into its parts.
///
/// `md:hover:!-mt-2` parses into modifiers `["md", "hover"]`,
/// `important = true`, `negative = true` and utility `mt-2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Variant modifiers in declaration order.
    pub modifiers: Vec<&'a str>,
    /// Whether the utility carries the `!` important marker.
    pub important: bool,
    /// Whether the utility carries a leading `-` (negative value).
    pub negative: bool,
    /// The utility without modifiers or markers.
    pub utility: &'a str,
}

impl ParsedClass<'_> {
    /// Returns the scope in which this class conflicts with others.
    ///
    /// Modifier order does not matter (`hover:md:` equals `md:hover:`).
    pub fn scope(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort_unstable();
        let mut scope = modifiers.join(":");
        if self.important {
            scope.push('!');
        }
        scope
    }
}

/// Parses a class token.
///
/// Colons inside arbitrary values (`[mask-type:luminance]`,
/// `bg-[url(a:b)]`) are not treated as modifier separators.
pub fn parse_class(class: &str) -> ParsedClass<'_> {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, ch) in class.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    let mut utility = &class[start..];
    let mut important = false;
    if let Some(rest) = utility.strip_prefix('!') {
        important = true;
        utility = rest;
    } else if let Some(rest) = utility.strip_suffix('!') {
        important = true;
        utility = rest;
    }

    let mut negative = false;
    if let Some(rest) = utility.strip_prefix('-') {
        if !rest.is_empty() {
            negative = true;
            utility = rest;
        }
    }

    ParsedClass {
        modifiers,
        important,
        negative,
        utility,
    }
}
