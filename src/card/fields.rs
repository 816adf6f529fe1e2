//! The identity fields a card is rendered from.

/// Optional display values for one card.
///
/// Values are opaque display strings: handles are already formatted
/// (`github.com/<handle>`, `x.com/<handle>`) by the time they land here.
/// An empty string is treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub web: Option<String>,
}

impl FieldSet {
    /// Field set with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn tagline(mut self, value: impl Into<String>) -> Self {
        self.tagline = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn github(mut self, value: impl Into<String>) -> Self {
        self.github = Some(value.into());
        self
    }

    pub fn twitter(mut self, value: impl Into<String>) -> Self {
        self.twitter = Some(value.into());
        self
    }

    pub fn web(mut self, value: impl Into<String>) -> Self {
        self.web = Some(value.into());
        self
    }

    pub fn name_value(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn tagline_value(&self) -> Option<&str> {
        present(&self.tagline)
    }

    /// Contact values in card order (email, github, twitter, web), absent
    /// ones skipped.
    pub fn contacts(&self) -> impl Iterator<Item = (Contact, &str)> {
        [
            (Contact::Email, &self.email),
            (Contact::Github, &self.github),
            (Contact::Twitter, &self.twitter),
            (Contact::Web, &self.web),
        ]
        .into_iter()
        .filter_map(|(kind, value)| present(value).map(|v| (kind, v)))
    }
}

/// Contact field kinds, each shown with its own label icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Email,
    Github,
    Twitter,
    Web,
}

impl Contact {
    /// Label icon printed before the value.
    pub const fn icon(self) -> &'static str {
        match self {
            Contact::Email => "📧",
            Contact::Github => "🐙",
            Contact::Twitter => "🐦",
            Contact::Web => "🌐",
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
