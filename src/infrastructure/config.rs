use crate::domain::widget::DashboardWidget;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Named widget definitions, in the order they should be rendered.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WidgetConfig {
    pub id: String,
    #[serde(flatten)]
    pub widget: DashboardWidget,
}

impl WidgetsConfig {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let widgets_config: WidgetsConfig =
            toml::from_str(source).context("Failed to parse widgets config")?;
        widgets_config.check_unique_ids()?;
        Ok(widgets_config)
    }

    pub fn get(&self, id: &str) -> Option<&WidgetConfig> {
        self.widgets.iter().find(|w| w.id == id)
    }

    fn check_unique_ids(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for widget in &self.widgets {
            if !seen.insert(widget.id.as_str()) {
                anyhow::bail!("Duplicate widget id '{}'", widget.id);
            }
        }
        Ok(())
    }
}

/// Load `config/widgets.{toml,json,yaml,...}` relative to the working directory.
pub fn load_widgets_config() -> anyhow::Result<WidgetsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/widgets"))
        .build()?;

    finish(settings)
}

/// Load widget definitions from an explicit file; the format follows the extension.
pub fn load_widgets_config_from(path: impl AsRef<Path>) -> anyhow::Result<WidgetsConfig> {
    let path = path.as_ref();
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .with_context(|| format!("Failed to read widgets config {}", path.display()))?;

    finish(settings)
}

fn finish(settings: config::Config) -> anyhow::Result<WidgetsConfig> {
    let widgets_config: WidgetsConfig = settings
        .try_deserialize()
        .context("Failed to parse widgets config")?;
    widgets_config.check_unique_ids()?;
    Ok(widgets_config)
}
