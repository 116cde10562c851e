// Render service - Encode configured widgets into payloads
use crate::domain::error::WidgetError;
use crate::domain::widget::Widget;
use crate::infrastructure::config::{WidgetConfig, WidgetsConfig};
use bytes::Bytes;

/// The outcome of encoding one configured widget.
#[derive(Debug)]
pub struct RenderedWidget {
    pub id: String,
    pub kind: &'static str,
    pub result: Result<Bytes, WidgetError>,
}

#[derive(Debug, Clone)]
pub struct RenderService {
    widgets_config: WidgetsConfig,
}

impl RenderService {
    pub fn new(widgets_config: WidgetsConfig) -> Self {
        Self { widgets_config }
    }

    pub fn widgets_config(&self) -> &WidgetsConfig {
        &self.widgets_config
    }

    /// Encode every configured widget, in configuration order.
    ///
    /// A widget that fails to encode is reported in its own entry; the rest
    /// of the batch is still rendered.
    pub fn render_all(&self) -> Vec<RenderedWidget> {
        let rendered: Vec<RenderedWidget> = self
            .widgets_config
            .widgets
            .iter()
            .map(|widget_config| RenderedWidget {
                id: widget_config.id.clone(),
                kind: widget_config.widget.kind(),
                result: render_widget(widget_config),
            })
            .collect();

        let failed = rendered.iter().filter(|r| r.result.is_err()).count();
        tracing::debug!(
            widgets = rendered.len(),
            failed,
            "rendered widget payloads"
        );

        rendered
    }

    /// Encode a single widget by id; `None` if no widget has that id.
    pub fn render(&self, id: &str) -> Option<Result<Bytes, WidgetError>> {
        self.widgets_config.get(id).map(render_widget)
    }
}

fn render_widget(widget_config: &WidgetConfig) -> Result<Bytes, WidgetError> {
    match widget_config.widget.encode() {
        Ok(payload) => Ok(Bytes::from(payload)),
        Err(e) => {
            tracing::warn!(
                id = %widget_config.id,
                kind = widget_config.widget.kind(),
                "Error encoding widget: {}",
                e
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGETS: &str = r#"
[[widgets]]
id = "meter"
kind = "gauge"
item = 123.4
min = 20
max = 400

[[widgets]]
id = "broken"
kind = "rag"
red = { value = 1, text = "late" }

[[widgets]]
id = "status"
kind = "monitoring"
status = "Up"
response_time = "120 ms"
"#;

    fn service() -> RenderService {
        RenderService::new(WidgetsConfig::from_toml_str(WIDGETS).unwrap())
    }

    #[test]
    fn test_render_all_continues_past_failures() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let rendered = service().render_all();

        let ids: Vec<&str> = rendered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["meter", "broken", "status"]);

        assert_eq!(rendered[0].kind, "gauge");
        assert_eq!(
            rendered[0].result.as_ref().unwrap(),
            &Bytes::from_static(br#"{"item":123.4,"min":{"value":20},"max":{"value":400}}"#)
        );

        assert_eq!(rendered[1].kind, "rag");
        assert_eq!(
            rendered[1].result.as_ref().unwrap_err().to_string(),
            "Amber is required."
        );

        assert_eq!(
            rendered[2].result.as_ref().unwrap(),
            &Bytes::from_static(br#"{"status":"Up","responseTime":"120 ms"}"#)
        );
    }

    #[test]
    fn test_render_by_id() {
        let service = service();

        assert!(service.render("status").unwrap().is_ok());
        assert!(service.render("broken").unwrap().is_err());
        assert!(service.render("missing").is_none());
    }
}
