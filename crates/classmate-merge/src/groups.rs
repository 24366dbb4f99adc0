//! Default conflict-group table.
//!
//! The table covers the utilities components in this workspace commonly
//! emit. It is a subset of a full utility framework on purpose: anything not
//! listed here is treated as an opaque class and never removed.

/// Resolves the group of a utility whose prefix alone is ambiguous
/// (`text-sm` is a font size, `text-blue-800` is a color).
pub(crate) type Refine = fn(&str) -> &'static str;

/// How a prefix maps to a conflict group.
#[derive(Clone, Copy)]
pub(crate) enum Matcher {
    Group(&'static str),
    Refine(Refine),
}

/// Standalone utilities that match no prefix.
pub(crate) const KEYWORDS: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("contents", "display"),
    ("flow-root", "display"),
    ("list-item", "display"),
    ("table", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("flex-row", "flex-direction"),
    ("flex-row-reverse", "flex-direction"),
    ("flex-col", "flex-direction"),
    ("flex-col-reverse", "flex-direction"),
    ("flex-wrap", "flex-wrap"),
    ("flex-wrap-reverse", "flex-wrap"),
    ("flex-nowrap", "flex-wrap"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("truncate", "text-overflow"),
    ("text-ellipsis", "text-overflow"),
    ("text-clip", "text-overflow"),
    ("pointer-events-none", "pointer-events"),
    ("pointer-events-auto", "pointer-events"),
    ("sr-only", "screen-reader"),
    ("not-sr-only", "screen-reader"),
];

/// Prefix utilities. A class matches a prefix when it equals the prefix or
/// starts with the prefix followed by `-`; the longest match wins.
pub(crate) const PREFIXES: &[(&str, Matcher)] = &[
    ("p", Matcher::Group("p")),
    ("px", Matcher::Group("px")),
    ("py", Matcher::Group("py")),
    ("ps", Matcher::Group("ps")),
    ("pe", Matcher::Group("pe")),
    ("pt", Matcher::Group("pt")),
    ("pr", Matcher::Group("pr")),
    ("pb", Matcher::Group("pb")),
    ("pl", Matcher::Group("pl")),
    ("m", Matcher::Group("m")),
    ("mx", Matcher::Group("mx")),
    ("my", Matcher::Group("my")),
    ("ms", Matcher::Group("ms")),
    ("me", Matcher::Group("me")),
    ("mt", Matcher::Group("mt")),
    ("mr", Matcher::Group("mr")),
    ("mb", Matcher::Group("mb")),
    ("ml", Matcher::Group("ml")),
    ("w", Matcher::Group("w")),
    ("h", Matcher::Group("h")),
    ("size", Matcher::Group("size")),
    ("min-w", Matcher::Group("min-w")),
    ("min-h", Matcher::Group("min-h")),
    ("max-w", Matcher::Group("max-w")),
    ("max-h", Matcher::Group("max-h")),
    ("gap", Matcher::Group("gap")),
    ("gap-x", Matcher::Group("gap-x")),
    ("gap-y", Matcher::Group("gap-y")),
    ("space-x", Matcher::Group("space-x")),
    ("space-y", Matcher::Group("space-y")),
    ("inset", Matcher::Group("inset")),
    ("inset-x", Matcher::Group("inset-x")),
    ("inset-y", Matcher::Group("inset-y")),
    ("top", Matcher::Group("top")),
    ("right", Matcher::Group("right")),
    ("bottom", Matcher::Group("bottom")),
    ("left", Matcher::Group("left")),
    ("z", Matcher::Group("z")),
    ("order", Matcher::Group("order")),
    ("basis", Matcher::Group("basis")),
    ("flex", Matcher::Group("flex")),
    ("grow", Matcher::Group("grow")),
    ("shrink", Matcher::Group("shrink")),
    ("items", Matcher::Group("align-items")),
    ("self", Matcher::Group("align-self")),
    ("justify", Matcher::Group("justify-content")),
    ("justify-items", Matcher::Group("justify-items")),
    ("justify-self", Matcher::Group("justify-self")),
    ("place-items", Matcher::Group("place-items")),
    ("place-content", Matcher::Group("place-content")),
    ("grid-cols", Matcher::Group("grid-cols")),
    ("grid-rows", Matcher::Group("grid-rows")),
    ("col-span", Matcher::Group("col-span")),
    ("row-span", Matcher::Group("row-span")),
    ("overflow", Matcher::Group("overflow")),
    ("overflow-x", Matcher::Group("overflow-x")),
    ("overflow-y", Matcher::Group("overflow-y")),
    ("whitespace", Matcher::Group("whitespace")),
    ("break", Matcher::Group("word-break")),
    ("align", Matcher::Group("vertical-align")),
    ("leading", Matcher::Group("leading")),
    ("tracking", Matcher::Group("tracking")),
    ("text", Matcher::Refine(refine_text)),
    ("font", Matcher::Refine(refine_font)),
    ("bg", Matcher::Refine(refine_bg)),
    ("border", Matcher::Refine(refine_border)),
    ("border-x", Matcher::Refine(refine_border_x)),
    ("border-y", Matcher::Refine(refine_border_y)),
    ("border-t", Matcher::Refine(refine_border_t)),
    ("border-r", Matcher::Refine(refine_border_r)),
    ("border-b", Matcher::Refine(refine_border_b)),
    ("border-l", Matcher::Refine(refine_border_l)),
    ("rounded", Matcher::Group("rounded")),
    ("rounded-t", Matcher::Group("rounded-t")),
    ("rounded-r", Matcher::Group("rounded-r")),
    ("rounded-b", Matcher::Group("rounded-b")),
    ("rounded-l", Matcher::Group("rounded-l")),
    ("rounded-tl", Matcher::Group("rounded-tl")),
    ("rounded-tr", Matcher::Group("rounded-tr")),
    ("rounded-br", Matcher::Group("rounded-br")),
    ("rounded-bl", Matcher::Group("rounded-bl")),
    ("shadow", Matcher::Refine(refine_shadow)),
    ("ring", Matcher::Refine(refine_ring)),
    ("ring-offset", Matcher::Group("ring-offset")),
    ("outline", Matcher::Refine(refine_outline)),
    ("opacity", Matcher::Group("opacity")),
    ("cursor", Matcher::Group("cursor")),
    ("select", Matcher::Group("user-select")),
    ("transition", Matcher::Group("transition")),
    ("duration", Matcher::Group("duration")),
    ("ease", Matcher::Group("ease")),
    ("delay", Matcher::Group("delay")),
    ("animate", Matcher::Group("animate")),
    ("aspect", Matcher::Group("aspect")),
    ("object", Matcher::Group("object-fit")),
    ("scale", Matcher::Group("scale")),
    ("rotate", Matcher::Group("rotate")),
    ("translate-x", Matcher::Group("translate-x")),
    ("translate-y", Matcher::Group("translate-y")),
    ("origin", Matcher::Group("origin")),
    ("fill", Matcher::Group("fill")),
    ("stroke", Matcher::Group("stroke")),
];

/// Groups that a class of the key group overrides when declared later.
pub(crate) const CONFLICTS: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl", "ps", "pe"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml", "ms", "me"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    ("gap", &["gap-x", "gap-y"]),
    (
        "inset",
        &["inset-x", "inset-y", "top", "right", "bottom", "left"],
    ),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    (
        "rounded",
        &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
    ),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    (
        "border-w",
        &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
    ),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "border-color",
        &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
    ),
    ("border-color-x", &["border-color-r", "border-color-l"]),
    ("border-color-y", &["border-color-t", "border-color-b"]),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SHADOW_SIZES: &[&str] = &["", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// Whether a value is a bare number (`2`, `0.5`) or an arbitrary length.
fn is_length(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if let Some(inner) = arbitrary(value) {
        return inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
            || inner.starts_with("length:");
    }
    value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn is_color_literal(value: &str) -> bool {
    match arbitrary(value) {
        Some(inner) => {
            inner.starts_with('#')
                || inner.starts_with("rgb")
                || inner.starts_with("hsl")
                || inner.starts_with("color:")
        }
        None => false,
    }
}

fn arbitrary(value: &str) -> Option<&str> {
    value.strip_prefix('[').and_then(|v| v.strip_suffix(']'))
}

fn refine_text(value: &str) -> &'static str {
    if FONT_SIZES.contains(&value) || (arbitrary(value).is_some() && is_length(value)) {
        "font-size"
    } else if TEXT_ALIGNS.contains(&value) {
        "text-align"
    } else {
        "text-color"
    }
}

fn refine_font(value: &str) -> &'static str {
    if FONT_WEIGHTS.contains(&value) || value.chars().all(|c| c.is_ascii_digit()) {
        "font-weight"
    } else {
        "font-family"
    }
}

fn refine_bg(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "auto" | "cover" | "contain" => "bg-size",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        "none" => "bg-image",
        v if v.starts_with("gradient-to-") => "bg-image",
        v if v.starts_with("opacity-") => "bg-opacity",
        _ => "bg-color",
    }
}

fn border_group(value: &str, width: &'static str, color: &'static str) -> &'static str {
    if value.is_empty() || is_length(value) {
        width
    } else {
        color
    }
}

fn refine_border(value: &str) -> &'static str {
    if BORDER_STYLES.contains(&value) {
        return "border-style";
    }
    border_group(value, "border-w", "border-color")
}

fn refine_border_x(value: &str) -> &'static str {
    border_group(value, "border-w-x", "border-color-x")
}

fn refine_border_y(value: &str) -> &'static str {
    border_group(value, "border-w-y", "border-color-y")
}

fn refine_border_t(value: &str) -> &'static str {
    border_group(value, "border-w-t", "border-color-t")
}

fn refine_border_r(value: &str) -> &'static str {
    border_group(value, "border-w-r", "border-color-r")
}

fn refine_border_b(value: &str) -> &'static str {
    border_group(value, "border-w-b", "border-color-b")
}

fn refine_border_l(value: &str) -> &'static str {
    border_group(value, "border-w-l", "border-color-l")
}

fn refine_shadow(value: &str) -> &'static str {
    if SHADOW_SIZES.contains(&value) || (arbitrary(value).is_some() && !is_color_literal(value)) {
        "shadow"
    } else {
        "shadow-color"
    }
}

fn refine_ring(value: &str) -> &'static str {
    if value.is_empty() || value == "inset" || is_length(value) {
        "ring-w"
    } else {
        "ring-color"
    }
}

fn refine_outline(value: &str) -> &'static str {
    match value {
        "" | "none" | "dashed" | "dotted" | "double" => "outline-style",
        v if is_length(v) => "outline-w",
        v if v.starts_with("offset-") => "outline-offset",
        _ => "outline-color",
    }
}
