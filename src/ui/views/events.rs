//! Console rendering of deploy events

use crate::domain::ports::DeployEvent;
use crate::ui::blocks::header::Banner;
use crate::ui::blocks::summary::DeploymentSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn line(ui: &UiContext, icon: Icon, text: impl AsRef<str>) -> String {
    format!(
        "{} {}\n",
        icon.colored(ui.color, ui.unicode),
        text.as_ref()
    )
}

/// Render one event as terminal text (with trailing newline).
pub fn render_event(event: &DeployEvent, ui: &UiContext) -> String {
    match event {
        DeployEvent::Started { platform } => Banner::new(
            Icon::Deploy,
            format!("OptionScope Deployment to {}", platform.display_name()),
        )
        .render(ui.color, ui.unicode),

        DeployEvent::UnsupportedPlatform { name, supported } => format!(
            "{}Supported platforms: {}\n",
            line(
                ui,
                Icon::Error,
                ColoredText::error(format!("Unsupported platform: {}", name)).render(ui.color)
            ),
            supported
        ),

        DeployEvent::Step { message } => line(ui, Icon::Progress, message),

        DeployEvent::ToolMissing { tool, installing } => {
            let text = if *installing {
                format!("{} CLI not found. Installing...", tool)
            } else {
                format!("{} CLI not found. Please install it first.", tool)
            };
            line(ui, Icon::Error, ColoredText::error(text).render(ui.color))
        }

        DeployEvent::SecretSkipped { key } => line(
            ui,
            Icon::Arrow,
            ColoredText::dim(format!("Skipping {} (not set)", key)).render(ui.color),
        ),

        DeployEvent::FileWritten { path } => line(
            ui,
            Icon::Success,
            format!("{} created!", path.display()),
        ),

        DeployEvent::Info { message } => format!("{}\n", message),

        DeployEvent::Warning { message } => line(
            ui,
            Icon::Warning,
            ColoredText::warning(message.as_str()).render(ui.color),
        ),

        DeployEvent::Failed { message } => line(
            ui,
            Icon::Error,
            ColoredText::error(message.as_str()).render(ui.color),
        ),

        DeployEvent::Deployed { platform, url } => {
            let mut out = line(
                ui,
                Icon::Success,
                ColoredText::success("Deployment successful!").render(ui.color),
            );
            match url {
                Some(url) => {
                    out.push_str(&line(
                        ui,
                        Icon::Link,
                        format!("Your OptionScope is live at: {}", url),
                    ));
                }
                None => {
                    out.push_str(&line(
                        ui,
                        Icon::Warning,
                        ColoredText::warning(format!(
                            "Could not determine the live URL; check the {} dashboard",
                            platform.display_name()
                        ))
                        .render(ui.color),
                    ));
                }
            }
            out
        }

        DeployEvent::ManualFollowUp { instructions } => line(ui, Icon::Link, instructions),

        DeployEvent::BillingConfigured { env_lines } => {
            let mut out = line(
                ui,
                Icon::Success,
                ColoredText::success("Stripe products created successfully!").render(ui.color),
            );
            out.push_str(&line(
                ui,
                Icon::File,
                "Add these to your environment variables:",
            ));
            for env_line in env_lines {
                out.push_str(env_line);
                out.push('\n');
            }
            out
        }

        DeployEvent::BillingSkipped => line(
            ui,
            Icon::Warning,
            ColoredText::warning(
                "Skipping Stripe setup. You can do this later in Stripe Dashboard.",
            )
            .render(ui.color),
        ),

        DeployEvent::Completed { url } => {
            format!("\n{}", DeploymentSummary::new(url.as_str()).render(ui.color, ui.unicode))
        }
    }
}
