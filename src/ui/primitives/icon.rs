use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Bullet,
    Deploy,
    Link,
    File,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (true, Icon::Deploy) => theme::icons::DEPLOY,
            (true, Icon::Link) => theme::icons::LINK,
            (true, Icon::File) => theme::icons::FILE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
            (false, Icon::Deploy) => theme::icons_ascii::DEPLOY,
            (false, Icon::Link) => theme::icons_ascii::LINK,
            (false, Icon::File) => theme::icons_ascii::FILE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Arrow | Icon::Bullet => theme::colors::DIM,
            Icon::Deploy | Icon::Link | Icon::File => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
