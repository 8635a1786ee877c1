use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
}

/// Bordered block of lines, sized to its widest line.
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    lines: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.extend(line.into().lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.lines.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rows: Vec<&str> = self
            .title
            .iter()
            .map(String::as_str)
            .chain(self.lines.iter().map(String::as_str))
            .collect();

        let inner = rows.iter().map(|r| visible_width(r)).max().unwrap_or(0) + 2;
        let h = BorderChar::Horizontal.render(supports_unicode).repeat(inner);
        let v = self.paint(BorderChar::Vertical.render(supports_unicode), supports_color);

        let mut out = String::new();
        out.push_str(&self.paint(
            &format!(
                "{}{}{}",
                BorderChar::TopLeft.render(supports_unicode),
                h,
                BorderChar::TopRight.render(supports_unicode)
            ),
            supports_color,
        ));
        out.push('\n');

        for row in rows {
            let pad = inner - 1 - visible_width(row);
            out.push_str(&format!("{} {}{}{}\n", v, row, " ".repeat(pad), v));
        }

        out.push_str(&self.paint(
            &format!(
                "{}{}{}",
                BorderChar::BottomLeft.render(supports_unicode),
                h,
                BorderChar::BottomRight.render(supports_unicode)
            ),
            supports_color,
        ));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self.style {
            PanelStyle::Info => theme::colors::INFO,
            PanelStyle::Success => theme::colors::SUCCESS,
        };
        format!("{}", s.with(color))
    }
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
