use crate::domain::services::join_url;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

const NEXT_STEPS: [&str; 5] = [
    "Set up your Stripe webhook endpoint",
    "Configure your domain (optional)",
    "Set up monitoring and analytics",
    "Test the payment flow",
    "Launch your marketing campaign!",
];

const MONETIZATION_TIPS: [&str; 5] = [
    "Start with freemium model to build user base",
    "Offer 14-day free trial for paid plans",
    "Add usage-based pricing for API calls",
    "Create enterprise features for institutions",
    "Consider affiliate/referral program",
];

/// Final report for a live deployment
#[derive(Debug, Clone)]
pub struct DeploymentSummary {
    url: String,
}

impl DeploymentSummary {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Labelled links into the deployed app
    pub fn links(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Live URL", self.url.clone()),
            ("Pricing Page", join_url(&self.url, "pricing")),
            ("Dashboard", join_url(&self.url, "dashboard")),
            ("Admin", join_url(&self.url, "auth/profile")),
        ]
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("Deployment Complete!")
                .bold()
                .render(supports_color)
        );
        let mut panel = Panel::with_title(title).style(PanelStyle::Success);
        panel.add_empty();
        for (label, link) in self.links() {
            panel.add_line(format!(
                "{} {}: {}",
                Icon::Link.colored(supports_color, supports_unicode),
                label,
                link
            ));
        }

        let mut out = panel.render(supports_color, supports_unicode);

        out.push('\n');
        out.push_str(&ColoredText::info("Next Steps:").bold().render(supports_color));
        out.push('\n');
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }

        out.push('\n');
        out.push_str(
            &ColoredText::info("Monetization Tips:")
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        for tip in MONETIZATION_TIPS {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Bullet.colored(supports_color, supports_unicode),
                tip
            ));
        }
        out
    }
}
