//! Platform value object - the hosting providers we can deploy to

use std::str::FromStr;

/// Hosting platform a deployment targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// Vercel (recommended, free tier)
    #[default]
    Vercel,
    /// Heroku (full-stack, git push)
    Heroku,
    /// Railway
    Railway,
    /// Render (blueprint file, dashboard deploy)
    Render,
}

/// Returned when a name does not match any supported platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedPlatform(pub String);

impl std::fmt::Display for UnsupportedPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unsupported platform: {}\nSupported platforms: {}",
            self.0,
            Platform::supported_names()
        )
    }
}

impl std::error::Error for UnsupportedPlatform {}

impl Platform {
    /// All platforms in menu order
    pub const ALL: [Platform; 4] = [
        Platform::Vercel,
        Platform::Heroku,
        Platform::Railway,
        Platform::Render,
    ];

    /// Lowercase identifier accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Vercel => "vercel",
            Platform::Heroku => "heroku",
            Platform::Railway => "railway",
            Platform::Render => "render",
        }
    }

    /// Title-cased name for headers
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Vercel => "Vercel",
            Platform::Heroku => "Heroku",
            Platform::Railway => "Railway",
            Platform::Render => "Render",
        }
    }

    /// Short tagline shown in the interactive menu
    pub fn tagline(&self) -> &'static str {
        match self {
            Platform::Vercel => "Recommended - Free tier",
            Platform::Heroku => "Full-stack",
            Platform::Railway => "Modern",
            Platform::Render => "Simple",
        }
    }

    /// Menu label, e.g. `1. Vercel (Recommended - Free tier)`
    pub fn menu_label(&self) -> String {
        format!(
            "{}. {} ({})",
            self.menu_number(),
            self.display_name(),
            self.tagline()
        )
    }

    /// 1-based position in the interactive menu
    pub fn menu_number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|p| p == self)
            .map(|i| i + 1)
            .unwrap_or(1)
    }

    /// Resolve a menu answer. Anything that is not `1`..`4` picks Vercel.
    pub fn from_menu_choice(choice: &str) -> Platform {
        let choice = choice.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.menu_number().to_string() == choice)
            .unwrap_or_default()
    }

    /// Comma-separated list of accepted names
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Platform {
    type Err = UnsupportedPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| UnsupportedPlatform(s.trim().to_string()))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
