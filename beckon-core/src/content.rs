//! Outbound message content.
//!
//! Only the value types live here. How a page of items is turned into an
//! embed is up to the caller's renderer.

/// A single name/value field on an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    /// Field heading.
    pub name: String,
    /// Field body.
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

/// A rich embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    /// Title line.
    pub title: Option<String>,
    /// Main body.
    pub description: Option<String>,
    /// Fields in display order.
    pub fields: Vec<EmbedField>,
    /// Footer line.
    pub footer: Option<String>,
    /// Accent colour as `0xRRGGBB`.
    pub color: Option<u32>,
}

/// Incrementally builds an [`Embed`].
#[derive(Debug, Clone, Default)]
pub struct EmbedBuilder {
    embed: Embed,
}

impl EmbedBuilder {
    /// Start an empty embed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.embed.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.embed.description = Some(description.into());
        self
    }

    /// Append a field.
    pub fn field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> &mut Self {
        self.embed.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Set the footer.
    pub fn footer(&mut self, footer: impl Into<String>) -> &mut Self {
        self.embed.footer = Some(footer.into());
        self
    }

    /// Set the accent colour.
    pub fn color(&mut self, color: u32) -> &mut Self {
        self.embed.color = Some(color);
        self
    }

    /// Finish the embed.
    pub fn build(&self) -> Embed {
        self.embed.clone()
    }
}

/// What gets sent or edited: optional text plus an optional embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageContent {
    /// Plain text.
    pub text: Option<String>,
    /// Rich embed.
    pub embed: Option<Embed>,
}

impl MessageContent {
    /// Text-only content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            embed: None,
        }
    }

    /// Embed-only content.
    pub fn embed(embed: Embed) -> Self {
        Self {
            text: None,
            embed: Some(embed),
        }
    }
}

impl From<Embed> for MessageContent {
    fn from(embed: Embed) -> Self {
        MessageContent::embed(embed)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::text(text)
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::text(text)
    }
}
