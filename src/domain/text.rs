// Text carousel widget
use super::error::{MAX_TEXT_PAGES, WidgetError};
use super::widget::Widget;
use crate::infrastructure::wire::Item;
use serde::ser::Error;
use serde::{Deserialize, Serialize, Serializer};

/// Pages of text the dashboard cycles through.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Text {
    pub pages: Vec<TextPage>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextPage {
    pub text: String,
    #[serde(rename(serialize = "type"), default, skip_serializing_if = "TextStyle::is_none")]
    pub style: TextStyle,
}

/// Ornamentation for a text page. Sent as its numeric code; `None` is not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    #[default]
    None,
    Alert,
    Info,
}

impl TextStyle {
    pub fn code(self) -> u8 {
        match self {
            TextStyle::None => 0,
            TextStyle::Alert => 1,
            TextStyle::Info => 2,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == TextStyle::None
    }
}

impl Serialize for TextStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl TextPage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::None,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

impl Text {
    pub fn new(pages: Vec<TextPage>) -> Self {
        Self { pages }
    }

    /// One unstyled page per string.
    pub fn simple<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(texts.into_iter().map(|text| TextPage::new(text)).collect())
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.validate().map_err(S::Error::custom)?;
        Item(&self.pages).serialize(serializer)
    }
}

impl Widget for Text {
    fn kind(&self) -> &'static str {
        "text"
    }

    fn validate(&self) -> Result<(), WidgetError> {
        if self.pages.len() > MAX_TEXT_PAGES {
            return Err(WidgetError::TooManyPages {
                count: self.pages.len(),
                max: MAX_TEXT_PAGES,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_text() {
        let text = Text::simple(["Hello", "World"]);

        assert_eq!(
            text.encode_to_string().unwrap(),
            r#"{"item":[{"text":"Hello"},{"text":"World"}]}"#
        );
    }

    #[test]
    fn test_styles() {
        let text = Text::new(vec![
            TextPage::new("plain"),
            TextPage::new("careful").with_style(TextStyle::Alert),
            TextPage::new("fyi").with_style(TextStyle::Info),
        ]);

        assert_eq!(
            text.encode_to_string().unwrap(),
            r#"{"item":[{"text":"plain"},{"text":"careful","type":1},{"text":"fyi","type":2}]}"#
        );
    }

    #[test]
    fn test_page_limit() {
        let ten = Text::simple((0..10).map(|i| i.to_string()));
        assert!(ten.encode().is_ok());

        let eleven = Text::simple((0..11).map(|i| i.to_string()));
        let err = eleven.encode().unwrap_err();
        assert!(matches!(err, WidgetError::TooManyPages { count: 11, max: 10 }));
        assert_eq!(err.to_string(), "Text widget support at most 10 entries.");
        assert_eq!(
            serde_json::to_vec(&eleven).unwrap_err().to_string(),
            "Text widget support at most 10 entries."
        );
    }

    #[test]
    fn test_style_from_friendly_form() {
        let page: TextPage = serde_json::from_str(r#"{"text":"x","style":"alert"}"#).unwrap();
        assert_eq!(page.style, TextStyle::Alert);

        let page: TextPage = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
        assert_eq!(page.style, TextStyle::None);
    }
}
