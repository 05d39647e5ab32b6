//! Learner Metrics page: this session's interactions, newest first.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Extension;

use crate::core_state::CoreState;
use crate::models::InteractionEntry;
use crate::web::error::PageError;
use crate::web::middleware::session::SessionContext;
use crate::web::render::{escape_html, layout, NavPage};

/// Shown when the session has not viewed the demo yet.
pub const EMPTY_MESSAGE: &str = "No interactions logged yet. Try using the demo first.";

/// `GET /metrics`
pub async fn show(
    State(core): State<Arc<CoreState>>,
    Extension(session): Extension<SessionContext>,
) -> Result<Html<String>, PageError> {
    let history = core.history(&session.id)?;
    Ok(Html(render(&history)))
}

fn render(history: &[InteractionEntry]) -> String {
    let mut body = String::new();
    body.push_str("    <h1>📊 Learner Metrics</h1>\n");
    body.push_str(
        "    <p class=\"lead\">Session-based view of prompt interactions and learner \
         engagement.</p>\n",
    );

    if history.is_empty() {
        body.push_str(&format!("    <div class=\"info\">{EMPTY_MESSAGE}</div>"));
    } else {
        for entry in history {
            body.push_str("    <div class=\"entry\">\n");
            body.push_str(&format!(
                "      <p><strong>{}</strong></p>\n",
                entry.timestamp_display()
            ));
            body.push_str("      <ul>\n");
            body.push_str(&format!(
                "        <li><strong>Patient</strong>: {}</li>\n",
                escape_html(&entry.patient)
            ));
            body.push_str(&format!(
                "        <li><strong>Role</strong>: {}</li>\n",
                escape_html(&entry.role)
            ));
            body.push_str(&format!(
                "        <li><strong>Feedback</strong>: {}</li>\n",
                entry.feedback.label()
            ));
            body.push_str(&format!(
                "        <li><strong>Prompt</strong>: <code>{}</code></li>\n",
                escape_html(&entry.prompt)
            ));
            body.push_str("      </ul>\n    </div>\n");
        }
    }

    layout("Learner Metrics", Some(NavPage::Metrics), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feedback;

    #[test]
    fn empty_history_shows_info_message() {
        let html = render(&[]);
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(!html.contains("class=\"entry\""));
    }

    #[test]
    fn entries_render_in_given_order() {
        let history = vec![
            InteractionEntry::now("Second", "RN", "p2".into(), Feedback::No),
            InteractionEntry::now("First", "RT", "p1".into(), Feedback::Yes),
        ];
        let html = render(&history);

        assert!(!html.contains(EMPTY_MESSAGE));
        let second = html.find("Second").unwrap();
        let first = html.find("First").unwrap();
        assert!(second < first);
        assert!(html.contains("👎 No"));
        assert!(html.contains("<code>p1</code>"));
    }

    #[test]
    fn entry_text_is_escaped() {
        let history = vec![InteractionEntry::now(
            "<b>x</b>",
            "RN",
            "a & b".into(),
            Feedback::Yes,
        )];
        let html = render(&history);
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}
