//! Script fragments rendered after the `$.jqplot(...)` call.

/// Supplies a named piece of script appended to the plot call.
pub trait PlotHookFunctionProvider {
    /// Key under which the hook is registered; a later hook replaces an
    /// earlier one with the same key.
    fn identifier(&self) -> &str;

    fn hook_function_code(&self) -> String;
}

/// A fixed hook: identifier plus ready-made script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JqPlotFunctionHook {
    identifier: String,
    code: String,
}

impl JqPlotFunctionHook {
    pub fn new(identifier: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            code: code.into(),
        }
    }

    /// Disables redrawing of the plot stored in `plot_var`.
    pub fn destroy_redraw(plot_var: &str) -> Self {
        Self::new(
            "destroyRedraw_hook",
            format!("{plot_var}.redraw=function(clear){{return}};"),
        )
    }

    pub fn reset_zoom_event_binding(plot_id: &str, function_body: &str) -> Self {
        Self::new(
            "resetZoomEvent_hook",
            format!("$('#{plot_id}').bind('jqplotResetZoom',function(){{{function_body}}});"),
        )
    }

    pub fn zoom_event_binding(plot_id: &str, function_body: &str) -> Self {
        Self::new(
            "zoomEvent_hook",
            format!(
                "$('#{plot_id}').bind('jqplotZoom',function(ev,gridpos,datapos,plot,cursor){{{function_body}}});"
            ),
        )
    }

    pub fn mouse_down_event_binding(plot_id: &str, function_body: &str) -> Self {
        Self::mouse_binding("mouseDownEvent_hook", "jqplotMouseDown", plot_id, function_body)
    }

    pub fn mouse_up_event_binding(plot_id: &str, function_body: &str) -> Self {
        Self::mouse_binding("mouseUpEvent_hook", "jqplotMouseUp", plot_id, function_body)
    }

    pub fn mouse_dbl_click_event_binding(plot_id: &str, function_body: &str) -> Self {
        Self::mouse_binding(
            "mouseDblClickEvent_hook",
            "jqplotDblClick",
            plot_id,
            function_body,
        )
    }

    fn mouse_binding(identifier: &str, event: &str, plot_id: &str, function_body: &str) -> Self {
        Self::new(
            identifier,
            format!(
                "$('#{plot_id}').bind('{event}',function(ev,seriesIndex,pointIndex,data){{{function_body}}});"
            ),
        )
    }
}

impl PlotHookFunctionProvider for JqPlotFunctionHook {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn hook_function_code(&self) -> String {
        self.code.clone()
    }
}

/// Registered hooks, keyed by identifier, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookFunctionsManager {
    hooks: Vec<(String, String)>,
}

impl HookFunctionsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hook_function(&mut self, provider: &dyn PlotHookFunctionProvider) -> &mut Self {
        let identifier = provider.identifier().to_string();
        let code = provider.hook_function_code();
        match self.hooks.iter_mut().find(|(known, _)| *known == identifier) {
            Some(slot) => slot.1 = code,
            None => self.hooks.push((identifier, code)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Concatenated code of every hook.
    pub fn hooks_function_code(&self) -> String {
        self.hooks.iter().map(|(_, code)| code.as_str()).collect()
    }
}
