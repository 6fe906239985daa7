//! Shared option groups mixed into several chart objects.

use cui_jsobject::{JsBoolean, JsDouble, JsInteger, JsObjectBuilder, JsString};

/// Drop shadow settings shared by grid, series and marker options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shadow {
    pub shadow: Option<bool>,
    /// Opacity, passed through as text (e.g. `"0.07"`).
    pub shadow_alpha: Option<String>,
    pub shadow_angle: Option<f64>,
    pub shadow_depth: Option<i64>,
    pub shadow_offset: Option<i64>,
}

impl Shadow {
    pub fn decorate(&self, builder: JsObjectBuilder) -> JsObjectBuilder {
        builder
            .property("shadow", JsBoolean::create(self.shadow))
            .property("shadowAlpha", JsString::from(self.shadow_alpha.clone()))
            .property("shadowAngle", JsDouble::create(self.shadow_angle))
            .property("shadowDepth", JsInteger::create(self.shadow_depth))
            .property("shadowOffset", JsInteger::create(self.shadow_offset))
    }
}

/// Implemented by objects carrying a [`Shadow`].
pub trait ShadowDecoration: Sized {
    fn shadow_mut(&mut self) -> &mut Shadow;

    #[must_use]
    fn with_shadow(mut self, value: Option<bool>) -> Self {
        self.shadow_mut().shadow = value;
        self
    }

    #[must_use]
    fn with_shadow_alpha(mut self, value: impl Into<String>) -> Self {
        self.shadow_mut().shadow_alpha = Some(value.into());
        self
    }

    #[must_use]
    fn with_shadow_angle(mut self, value: f64) -> Self {
        self.shadow_mut().shadow_angle = Some(value);
        self
    }

    #[must_use]
    fn with_shadow_depth(mut self, value: i64) -> Self {
        self.shadow_mut().shadow_depth = Some(value);
        self
    }

    #[must_use]
    fn with_shadow_offset(mut self, value: i64) -> Self {
        self.shadow_mut().shadow_offset = Some(value);
        self
    }
}
