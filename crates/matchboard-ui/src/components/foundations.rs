use yew::prelude::*;
use yew::virtual_dom::VTag;

/// Brand color tokens shared by tinted widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Positive,
    Negative,
    Info,
    Warning,
}

impl Tone {
    /// Returns the class suffix (e.g. `"positive"`) for the tone.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// Sizing tokens shared by scalable widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Size {
    /// Returns the suffix used for the selected size.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Adds a prefix (e.g. `mb-chip`) to the size suffix for class composition.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

/// Minimal common props shared by the stateless container widgets.
#[derive(Properties, PartialEq)]
pub struct BasicProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Convenience helper for composing class lists with an optional tone.
#[must_use]
pub fn tone_class(prefix: &str, tone: Option<Tone>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}

/// Utility to merge a base class with any consumer-provided classes.
#[must_use]
pub fn merge_classes(base: &'static str, extra: &Classes) -> Classes {
    if extra.is_empty() {
        Classes::from(base)
    } else {
        let mut classes = Classes::from(base);
        classes.push(extra.clone());
        classes
    }
}

/// Renders a simple tag with a base class and any custom content.
#[must_use]
pub fn render_container(tag: &'static str, base_class: &'static str, props: &BasicProps) -> Html {
    let mut node = VTag::new(tag);
    if let Some(id) = &props.id {
        node.add_attribute("id", id.to_string());
    }
    let classes = merge_classes(base_class, &props.class);
    node.add_attribute("class", classes.to_string());
    for child in props.children.iter() {
        node.add_child(child);
    }
    node.into()
}
