use axum::response::Html;
use std::path::Path;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// Reads a template and substitutes {{name}} placeholders with escaped values
pub async fn render(config: &Config, name: &str, vars: &[(&str, &str)]) -> AppResult<Html<String>> {
    let path = Path::new(&config.server.templates_dir).join(name);
    let mut html = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::error!("Failed to read template {}: {}", path.display(), e);
        AppError::File(e)
    })?;

    for (key, value) in vars {
        html = html.replace(&format!("{{{{{}}}}}", key), &escape_html(value));
    }
    Ok(Html(html))
}
