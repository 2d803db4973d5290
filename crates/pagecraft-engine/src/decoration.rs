//! Optional per-block presentation decorations: spacing and entrance
//! animation. Decorations are independent of a block's payload and identity
//! and are optional everywhere; absence means "inherit the system default".

use serde::{Deserialize, Serialize};

/// Closed scale for one spacing edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpacingSize {
    None,
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl SpacingSize {
    pub const ALL: [SpacingSize; 6] = [
        SpacingSize::None,
        SpacingSize::Xs,
        SpacingSize::Sm,
        SpacingSize::Md,
        SpacingSize::Lg,
        SpacingSize::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpacingSize::None => "none",
            SpacingSize::Xs => "xs",
            SpacingSize::Sm => "sm",
            SpacingSize::Md => "md",
            SpacingSize::Lg => "lg",
            SpacingSize::Xl => "xl",
        }
    }
}

/// Per-block margin and padding overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub margin_top: SpacingSize,
    pub margin_bottom: SpacingSize,
    pub padding_top: SpacingSize,
    pub padding_bottom: SpacingSize,
}

impl Spacing {
    /// CSS class fragment for this spacing, e.g. `"mt-md mb-none pt-sm pb-sm"`.
    pub fn css_classes(&self) -> String {
        format!(
            "mt-{} mb-{} pt-{} pb-{}",
            self.margin_top.as_str(),
            self.margin_bottom.as_str(),
            self.padding_top.as_str(),
            self.padding_bottom.as_str()
        )
    }
}

/// Entrance animation applied to a block as it scrolls into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    #[default]
    None,
    Fade,
    SlideUp,
    SlideDown,
    Zoom,
}

impl Animation {
    pub const ALL: [Animation; 5] = [
        Animation::None,
        Animation::Fade,
        Animation::SlideUp,
        Animation::SlideDown,
        Animation::Zoom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Animation::None => "none",
            Animation::Fade => "fade",
            Animation::SlideUp => "slide-up",
            Animation::SlideDown => "slide-down",
            Animation::Zoom => "zoom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Animation::None => "No animation",
            Animation::Fade => "Fade in",
            Animation::SlideUp => "Slide up",
            Animation::SlideDown => "Slide down",
            Animation::Zoom => "Zoom in",
        }
    }

    /// CSS class for this animation; empty for `None`.
    pub fn css_class(self) -> &'static str {
        match self {
            Animation::None => "",
            Animation::Fade => "anim-fade",
            Animation::SlideUp => "anim-slide-up",
            Animation::SlideDown => "anim-slide-down",
            Animation::Zoom => "anim-zoom",
        }
    }
}

/// Combined decoration classes for a block; empty when both decorations are
/// absent (the stylesheet default applies).
pub fn decoration_classes(spacing: Option<&Spacing>, animation: Option<&Animation>) -> String {
    let spacing_part = spacing.map(Spacing::css_classes).unwrap_or_default();
    let animation_part = animation.map(|a| a.css_class()).unwrap_or("");
    match (spacing_part.is_empty(), animation_part.is_empty()) {
        (true, true) => String::new(),
        (false, true) => spacing_part,
        (true, false) => animation_part.to_string(),
        (false, false) => format!("{spacing_part} {animation_part}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn spacing_classes_cover_all_edges() {
        let spacing = Spacing {
            margin_top: SpacingSize::Lg,
            margin_bottom: SpacingSize::None,
            padding_top: SpacingSize::Xs,
            padding_bottom: SpacingSize::Xl,
        };
        assert_eq!(spacing.css_classes(), "mt-lg mb-none pt-xs pb-xl");
    }

    #[test]
    fn absent_decorations_produce_no_classes() {
        assert_eq!(decoration_classes(None, None), "");
    }

    #[test]
    fn none_animation_adds_no_class() {
        assert_eq!(decoration_classes(None, Some(&Animation::None)), "");
    }

    #[test]
    fn both_decorations_are_joined() {
        let spacing = Spacing::default();
        let classes = decoration_classes(Some(&spacing), Some(&Animation::Fade));
        assert_eq!(classes, "mt-md mb-md pt-md pb-md anim-fade");
    }

    #[rstest]
    #[case(SpacingSize::None, "none")]
    #[case(SpacingSize::Xs, "xs")]
    #[case(SpacingSize::Sm, "sm")]
    #[case(SpacingSize::Md, "md")]
    #[case(SpacingSize::Lg, "lg")]
    #[case(SpacingSize::Xl, "xl")]
    fn spacing_size_tags(#[case] size: SpacingSize, #[case] expected: &str) {
        assert_eq!(size.as_str(), expected);
        // The serde form matches the string form: it is the storage contract.
        let json = serde_json::to_value(size).unwrap();
        assert_eq!(json, serde_json::json!(expected));
    }

    #[rstest]
    #[case(Animation::Fade, "fade", "anim-fade")]
    #[case(Animation::SlideUp, "slide-up", "anim-slide-up")]
    #[case(Animation::SlideDown, "slide-down", "anim-slide-down")]
    #[case(Animation::Zoom, "zoom", "anim-zoom")]
    fn animation_tags(#[case] animation: Animation, #[case] tag: &str, #[case] class: &str) {
        assert_eq!(animation.as_str(), tag);
        assert_eq!(animation.css_class(), class);
        let json = serde_json::to_value(animation).unwrap();
        assert_eq!(json, serde_json::json!(tag));
    }
}
