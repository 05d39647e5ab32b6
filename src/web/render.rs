//! HTML shell shared by all pages (self-contained, no external resources).

/// Sidebar navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Demo,
    Metrics,
}

impl NavPage {
    pub const ALL: [NavPage; 2] = [NavPage::Demo, NavPage::Metrics];

    pub fn path(&self) -> &'static str {
        match self {
            NavPage::Demo => "/",
            NavPage::Metrics => "/metrics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavPage::Demo => "🧠 Precision Prompt Demo",
            NavPage::Metrics => "📊 Learner Metrics",
        }
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Wrap page `body` (already-escaped HTML) in the document shell.
/// `active` highlights the sidebar entry; `None` for error pages.
pub fn layout(title: &str, active: Option<NavPage>, body: &str) -> String {
    let mut nav = String::new();
    for page in NavPage::ALL {
        let class = if Some(page) == active { " class=\"active\"" } else { "" };
        nav.push_str(&format!(
            "      <li><a href=\"{}\"{class}>{}</a></li>\n",
            page.path(),
            page.label()
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} · {app}</title>
  <style>{PAGE_CSS}</style>
</head>
<body>
  <nav class="sidebar">
    <h2>Navigation</h2>
    <ul>
{nav}    </ul>
  </nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape_html(title),
        app = crate::config::APP_NAME,
    )
}

/// Minimal error page.
pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        "    <h1>{}</h1>\n    <div class=\"info error\">{}</div>\n    <p><a href=\"/\">Back to the demo</a></p>",
        escape_html(title),
        escape_html(message)
    );
    layout(title, None, &body)
}

const PAGE_CSS: &str = r#"
    * { box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
      background: #fafaf9; color: #1c1917; margin: 0; display: flex; min-height: 100vh;
    }
    .sidebar { width: 260px; background: #f0f2f6; padding: 24px 16px; }
    .sidebar h2 { font-size: 14px; color: #57534e; margin: 0 0 12px; }
    .sidebar ul { list-style: none; padding: 0; margin: 0; }
    .sidebar a {
      display: block; padding: 8px 12px; border-radius: 8px;
      color: #1c1917; text-decoration: none;
    }
    .sidebar a.active { background: #ffffff; font-weight: 600; }
    main { flex: 1; max-width: 860px; padding: 32px 48px; }
    h1 { font-size: 32px; margin: 0 0 8px; }
    h2 { font-size: 22px; margin-top: 32px; }
    .lead { color: #57534e; }
    pre {
      background: #f5f5f4; border-radius: 8px; padding: 16px;
      white-space: pre-wrap; word-break: break-word;
    }
    fieldset { border: none; padding: 0; margin: 16px 0; }
    legend { font-weight: 600; margin-bottom: 8px; }
    label.radio { display: inline-block; margin-right: 16px; }
    select { font-size: 16px; padding: 6px; min-width: 240px; }
    button { font-size: 15px; padding: 8px 16px; border-radius: 8px; border: 1px solid #d6d3d1; }
    .answer { background: #ffffff; border: 1px solid #e7e5e4; border-radius: 8px; padding: 16px; }
    .source { font-style: italic; color: #57534e; }
    .info { background: #e0f2fe; color: #075985; border-radius: 8px; padding: 16px; }
    .info.error { background: #fee2e2; color: #991b1b; }
    .entry { border-bottom: 1px solid #e7e5e4; padding: 12px 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("Post-op Day 2 - Colectomy"), "Post-op Day 2 - Colectomy");
    }

    #[test]
    fn layout_marks_active_page() {
        let html = layout("Learner Metrics", Some(NavPage::Metrics), "<p>x</p>");
        assert!(html.contains(r#"<a href="/metrics" class="active">"#));
        assert!(html.contains(r#"<a href="/">"#));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn error_page_has_no_active_nav() {
        let html = error_page("Not Found", "gone");
        assert!(!html.contains("class=\"active\""));
        assert!(html.contains("gone"));
    }
}
