//! Recover a deployment's live URL from platform CLI output.
//!
//! Structured output is preferred wherever the CLI offers it. Text scanning
//! is kept for Vercel (which prints the URL on stdout and nothing else is
//! machine-readable) and as a fallback for older Heroku CLIs.

use serde_json::Value;

/// Domain suffix of Vercel deployment URLs
pub const VERCEL_DOMAIN: &str = "vercel.app";

/// Label Heroku uses in `heroku info` text output
pub const HEROKU_WEB_URL_LABEL: &str = "Web URL:";

/// First `https://…vercel.app…` URL printed by `vercel --prod`.
pub fn vercel_url(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .filter(|line| line.contains("https://") && line.contains(VERCEL_DOMAIN))
        .find_map(|line| https_token(line).filter(|url| url.contains(VERCEL_DOMAIN)))
}

/// `app.web_url` from `heroku apps:info --json`.
pub fn heroku_url_from_json(stdout: &str) -> Option<String> {
    let value: Value = serde_json::from_str(stdout).ok()?;
    value
        .get("app")
        .and_then(|app| app.get("web_url"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

/// The `Web URL:` field from `heroku info` text output.
pub fn heroku_url_from_info(stdout: &str) -> Option<String> {
    stdout.lines().find_map(|line| {
        let (_, rest) = line.split_once(HEROKU_WEB_URL_LABEL)?;
        let url = rest.trim();
        (!url.is_empty()).then(|| url.to_string())
    })
}

/// The whitespace-delimited token starting at `https://`, minus trailing punctuation.
fn https_token(line: &str) -> Option<String> {
    let start = line.find("https://")?;
    let token = line[start..]
        .split_whitespace()
        .next()?
        .trim_end_matches(|c: char| matches!(c, ',' | '.' | ')' | ']' | '"' | '\''));
    Some(token.to_string())
}

/// Join a path onto a base URL without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
