//! Supported intrinsic elements.

use std::fmt;
use std::str::FromStr;

use crate::error::ClassmateError;

macro_rules! element_tags {
    ($( $variant:ident => $name:literal ),* $(,)?) => {
        /// An intrinsic element a styled component can render.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ElementTag {
            $( $variant, )*
        }

        impl ElementTag {
            /// Every supported element, in declaration order.
            pub const ALL: &'static [ElementTag] = &[ $( ElementTag::$variant, )* ];

            /// The element's tag name as written in markup.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( ElementTag::$variant => $name, )*
                }
            }
        }

        impl FromStr for ElementTag {
            type Err = ClassmateError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $( $name => Ok(ElementTag::$variant), )*
                    _ => Err(ClassmateError::UnknownElement { name: name.to_string() }),
                }
            }
        }
    };
}

element_tags! {
    A => "a",
    Abbr => "abbr",
    Address => "address",
    Article => "article",
    Aside => "aside",
    Audio => "audio",
    B => "b",
    Blockquote => "blockquote",
    Button => "button",
    Canvas => "canvas",
    Caption => "caption",
    Code => "code",
    Dd => "dd",
    Details => "details",
    Dialog => "dialog",
    Div => "div",
    Dl => "dl",
    Dt => "dt",
    Em => "em",
    Fieldset => "fieldset",
    Figcaption => "figcaption",
    Figure => "figure",
    Footer => "footer",
    Form => "form",
    H1 => "h1",
    H2 => "h2",
    H3 => "h3",
    H4 => "h4",
    H5 => "h5",
    H6 => "h6",
    Header => "header",
    Hr => "hr",
    I => "i",
    Iframe => "iframe",
    Img => "img",
    Input => "input",
    Label => "label",
    Legend => "legend",
    Li => "li",
    Main => "main",
    Mark => "mark",
    Nav => "nav",
    Ol => "ol",
    Optgroup => "optgroup",
    Option => "option",
    P => "p",
    Picture => "picture",
    Pre => "pre",
    Progress => "progress",
    Section => "section",
    Select => "select",
    Small => "small",
    Span => "span",
    Strong => "strong",
    Summary => "summary",
    Svg => "svg",
    Table => "table",
    Tbody => "tbody",
    Td => "td",
    Textarea => "textarea",
    Tfoot => "tfoot",
    Th => "th",
    Thead => "thead",
    Time => "time",
    Tr => "tr",
    U => "u",
    Ul => "ul",
    Video => "video",
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
