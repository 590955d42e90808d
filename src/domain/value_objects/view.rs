//! View value object - the page selected by the navigation control

use serde::{Deserialize, Serialize};

/// One of the mutually exclusive pages of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Calculator,
    Blog,
    Chatbot,
}

impl View {
    /// Navigation order
    pub const ALL: [View; 4] = [View::Home, View::Calculator, View::Blog, View::Chatbot];

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Calculator => "Carbon Calculator",
            View::Blog => "Blog",
            View::Chatbot => "Chatbot",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
