//! Tracking of the plugin script files a chart needs.

/// Anything that requires client-side plugin scripts.
pub trait PluginConsumer {
    /// Plugin file names, without duplicates, in first-use order.
    fn used_plugins(&self) -> Vec<String>;
}

impl<T: PluginConsumer> PluginConsumer for Option<T> {
    fn used_plugins(&self) -> Vec<String> {
        self.as_ref().map(PluginConsumer::used_plugins).unwrap_or_default()
    }
}

/// Ordered, duplicate-free collection of plugin file names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginSupport {
    plugins: Vec<String>,
}

impl PluginSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, plugin: &str) -> &mut Self {
        if !plugin.is_empty() && !self.plugins.iter().any(|known| known == plugin) {
            self.plugins.push(plugin.to_string());
        }
        self
    }

    pub fn add(&mut self, consumer: &impl PluginConsumer) -> &mut Self {
        for plugin in consumer.used_plugins() {
            self.add_file(&plugin);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn into_plugins(self) -> Vec<String> {
        self.plugins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_and_blanks_are_ignored() {
        let mut support = PluginSupport::new();
        support
            .add_file("jqplot.cursor.min.js")
            .add_file("")
            .add_file("jqplot.highlighter.min.js")
            .add_file("jqplot.cursor.min.js");
        assert_eq!(
            support.into_plugins(),
            vec!["jqplot.cursor.min.js", "jqplot.highlighter.min.js"]
        );
    }
}
