//! Presentation state of the page.
//!
//! Nothing here is persisted: the theme and the active tab travel in the query string of every
//! link, the form status lives in [`crate::state::Submissions`].

use std::{fmt, str::FromStr};

use url::form_urlencoded;

use crate::{error::Error, state::SubmissionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Class set on `body`, the stylesheet keys every color on it.
    pub fn body_class(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "theme-dark",
            ThemeMode::Light => "theme-light",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(Error::InvalidQuery("theme", s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Projects,
    Stack,
    Databases,
    About,
}

impl ActiveTab {
    /// Tabs in the order they appear in the tab bar.
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Projects,
        ActiveTab::Stack,
        ActiveTab::Databases,
        ActiveTab::About,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Projects => "projects",
            ActiveTab::Stack => "stack",
            ActiveTab::Databases => "databases",
            ActiveTab::About => "about",
        }
    }
}

impl FromStr for ActiveTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActiveTab::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidQuery("tab", s.to_string()))
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the visitor is looking at, rebuilt from every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub theme: ThemeMode,
    pub tab: ActiveTab,
}

impl ViewState {
    pub fn with_tab(self, tab: ActiveTab) -> Self {
        ViewState { tab, ..self }
    }

    pub fn with_theme_toggled(self) -> Self {
        ViewState {
            theme: self.theme.toggled(),
            ..self
        }
    }

    /// Set `key` from a query or form pair, returns false if the key is not a view key.
    pub(crate) fn apply(&mut self, key: &str, value: &str) -> Result<bool, Error> {
        match key {
            "theme" => self.theme = value.parse()?,
            "tab" => self.tab = value.parse()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serializer(&self) -> form_urlencoded::Serializer<'static, String> {
        let mut ser = form_urlencoded::Serializer::for_suffix(String::from("/?"), 2);
        ser.append_pair("theme", self.theme.as_str())
            .append_pair("tab", self.tab.as_str());
        ser
    }

    /// Link to the home page showing this view.
    pub fn href(&self) -> String {
        self.serializer().finish()
    }

    pub fn href_with_submission(&self, id: SubmissionId) -> String {
        self.serializer()
            .append_pair("submission", &id.to_string())
            .finish()
    }
}

/// Status of the contact form as shown on its submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn start(&mut self) {
        *self = FormStatus::Sending;
    }

    pub fn finish<T>(&mut self, outcome: &Result<T, Error>) {
        *self = match outcome {
            Ok(_) => FormStatus::Success,
            Err(_) => FormStatus::Error,
        };
    }

    pub fn reset(&mut self) {
        *self = FormStatus::Idle;
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, FormStatus::Success | FormStatus::Error)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            FormStatus::Idle => "Send Message",
            FormStatus::Sending => "Sending...",
            FormStatus::Success => "Message Sent Successfully!",
            FormStatus::Error => "Failed to Send",
        }
    }
}
