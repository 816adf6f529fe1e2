//! Profile type: the caller-side bag of card values

use serde::{Deserialize, Serialize};

use super::error::ProfileError;
use crate::card::FieldSet;
use crate::theme::{resolve, Theme};

/// Card values gathered from config files and command-line flags.
///
/// Every field is optional so partial sources can be layered with
/// [`Profile::merge`]. Unknown keys in config files are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// GitHub username (shown as `github.com/<username>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Twitter/X handle (shown as `x.com/<handle>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    /// Card style name: minimal, box, double, rounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Accent color name: cyan, green, yellow, magenta, red, white
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The identity part of a profile, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileJson<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<&'a str>,
}

impl Profile {
    /// Overlay every value set in `other` onto `self`.
    pub fn merge(mut self, other: Profile) -> Self {
        fn pick(base: &mut Option<String>, over: Option<String>) {
            if over.is_some() {
                *base = over;
            }
        }

        pick(&mut self.name, other.name);
        pick(&mut self.tagline, other.tagline);
        pick(&mut self.email, other.email);
        pick(&mut self.github, other.github);
        pick(&mut self.twitter, other.twitter);
        pick(&mut self.web, other.web);
        pick(&mut self.style, other.style);
        pick(&mut self.color, other.color);
        self
    }

    /// Check that the profile can become a card (a non-empty name).
    pub fn validate(&self) -> Result<&str, ProfileError> {
        non_empty(&self.name).ok_or(ProfileError::MissingName)
    }

    /// Theme named by `style` and `color`, with defaults for anything unknown.
    pub fn theme(&self) -> Theme {
        resolve(self.style.as_deref(), self.color.as_deref())
    }

    /// Display values for the renderer; handles become URL-shaped strings.
    pub fn to_field_set(&self) -> FieldSet {
        FieldSet {
            name: non_empty(&self.name).map(str::to_string),
            tagline: non_empty(&self.tagline).map(str::to_string),
            email: non_empty(&self.email).map(str::to_string),
            github: non_empty(&self.github).map(|h| format!("github.com/{}", h)),
            twitter: non_empty(&self.twitter).map(|h| format!("x.com/{}", h)),
            web: non_empty(&self.web).map(str::to_string),
        }
    }

    /// JSON view of the identity fields. Requires a valid name.
    pub fn to_json(&self) -> Result<ProfileJson<'_>, ProfileError> {
        Ok(ProfileJson {
            name: self.validate()?,
            tagline: non_empty(&self.tagline),
            email: non_empty(&self.email),
            github: non_empty(&self.github),
            twitter: non_empty(&self.twitter),
            web: non_empty(&self.web),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
