//! Legend options and the compass locations shared with the highlighter.

use cui_jsobject::{JsArray, JsBoolean, JsObject, JsReference, JsString};

use crate::color::ColorProperty;
use crate::plugin::PluginConsumer;

const ENHANCED_LEGEND_RENDERER: &str = "$.jqplot.EnhancedLegendRenderer";
const ENHANCED_LEGEND_PLUGIN: &str = "jqplot.enhancedLegendRenderer.min.js";

/// Compass position relative to the grid or a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Location {
    pub fn constant(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
            Self::NorthWest => "nw",
        }
    }

    pub fn from_constant(value: &str) -> Option<Self> {
        let location = match value {
            "n" => Self::North,
            "ne" => Self::NorthEast,
            "e" => Self::East,
            "se" => Self::SouthEast,
            "s" => Self::South,
            "sw" => Self::SouthWest,
            "w" => Self::West,
            "nw" => Self::NorthWest,
            _ => return None,
        };
        Some(location)
    }
}

/// Where the legend is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    InsideGrid,
    OutsideGrid,
    Outside,
}

impl Placement {
    pub fn constant(self) -> &'static str {
        match self {
            Self::InsideGrid => "insideGrid",
            Self::OutsideGrid => "outsideGrid",
            Self::Outside => "outside",
        }
    }
}

/// The `legend` option, always drawn by the enhanced legend renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    pub show: Option<bool>,
    pub location: Option<Location>,
    pub labels: Vec<String>,
    pub show_labels: Option<bool>,
    pub show_swatch: Option<bool>,
    pub placement: Option<Placement>,
    pub border: Option<String>,
    pub background: Option<String>,
    pub text_color: ColorProperty,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub row_spacing: Option<String>,
    pub predraw: Option<bool>,
    pub margin_top: Option<String>,
    pub margin_right: Option<String>,
    pub margin_bottom: Option<String>,
    pub margin_left: Option<String>,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Adds a series label and turns label display on.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self.show_labels = Some(true);
        self
    }

    #[must_use]
    pub fn with_show_swatch(mut self, show: bool) -> Self {
        self.show_swatch = Some(show);
        self
    }

    #[must_use]
    pub fn with_margins(
        mut self,
        top: impl Into<String>,
        right: impl Into<String>,
        bottom: impl Into<String>,
        left: impl Into<String>,
    ) -> Self {
        self.margin_top = Some(top.into());
        self.margin_right = Some(right.into());
        self.margin_bottom = Some(bottom.into());
        self.margin_left = Some(left.into());
        self
    }

    pub fn to_js_object(&self) -> JsObject {
        let labels = (!self.labels.is_empty()).then(|| {
            self.labels
                .iter()
                .map(|label| JsString::new(label.as_str()))
                .collect::<JsArray<JsString>>()
        });
        JsObject::builder("legend")
            .property("show", JsBoolean::create(self.show))
            .property(
                "location",
                JsString::from(self.location.map(Location::constant)),
            )
            .property("labels", labels)
            .property("showLabels", JsBoolean::create(self.show_labels))
            .property("showSwatch", JsBoolean::create(self.show_swatch))
            .property(
                "placement",
                JsString::from(self.placement.map(Placement::constant)),
            )
            .property("border", JsString::from(self.border.clone()))
            .property("background", JsString::from(self.background.clone()))
            .property("textColor", self.text_color.to_js())
            .property("fontFamily", JsString::from(self.font_family.clone()))
            .property("fontSize", JsString::from(self.font_size.clone()))
            .property("rowSpacing", JsString::from(self.row_spacing.clone()))
            .property("renderer", JsReference::new(ENHANCED_LEGEND_RENDERER))
            .property("predraw", JsBoolean::create(self.predraw))
            .property("marginTop", JsString::from(self.margin_top.clone()))
            .property("marginRight", JsString::from(self.margin_right.clone()))
            .property("marginBottom", JsString::from(self.margin_bottom.clone()))
            .property("marginLeft", JsString::from(self.margin_left.clone()))
            .build()
    }

    pub fn to_notation(&self) -> Option<String> {
        self.to_js_object().to_notation()
    }
}

impl PluginConsumer for Legend {
    fn used_plugins(&self) -> Vec<String> {
        vec![ENHANCED_LEGEND_PLUGIN.to_string()]
    }
}
