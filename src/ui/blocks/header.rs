use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Width of the rule printed under banners
pub const RULE_WIDTH: usize = 50;

/// Icon + bold title, followed by a rule.
#[derive(Debug, Clone)]
pub struct Banner {
    icon: Icon,
    title: String,
}

impl Banner {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}\n{}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str())
                .bold()
                .render(supports_color),
            BorderChar::rule(RULE_WIDTH, supports_unicode)
        )
    }
}
