//! Selector page: patient + role in, engineered prompt and mock answer out.
//!
//! Every view is one interaction and is appended to the session log,
//! including re-renders with unchanged inputs.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Extension;
use serde::Deserialize;

use crate::answer::{select_answer, AnswerBody, MockAnswer};
use crate::core_state::CoreState;
use crate::models::{Feedback, InteractionEntry, PatientRecord, Role};
use crate::prompt::compose_prompt;
use crate::web::error::PageError;
use crate::web::middleware::session::SessionContext;
use crate::web::render::{escape_html, layout, NavPage};

/// Form inputs. Absent fields fall back to the first option of each control.
#[derive(Debug, Default, Deserialize)]
pub struct DemoQuery {
    pub patient: Option<String>,
    pub role: Option<String>,
    pub feedback: Option<String>,
}

/// Everything the page shows for one view.
struct DemoView<'a> {
    patient_name: &'a str,
    patient: &'a PatientRecord,
    role: &'a str,
    prompt: &'a str,
    answer: &'static MockAnswer,
    feedback: Feedback,
}

/// `GET /` — render the demo and log the interaction.
pub async fn show(
    State(core): State<Arc<CoreState>>,
    Extension(session): Extension<SessionContext>,
    Query(query): Query<DemoQuery>,
) -> Result<Html<String>, PageError> {
    let catalog = core.catalog();
    let (patient_name, patient) = match query.patient.as_deref() {
        Some(name) => {
            let record = catalog
                .get(name)
                .ok_or_else(|| PageError::NotFound(format!("Unknown patient: {name}")))?;
            (name, record)
        }
        None => catalog.first(),
    };

    let role = query
        .role
        .as_deref()
        .unwrap_or_else(|| Role::default().as_str());

    let feedback = match query.feedback.as_deref() {
        Some(raw) => raw.parse::<Feedback>()?,
        None => Feedback::default(),
    };

    let prompt = compose_prompt(patient, role);
    let answer = select_answer(&prompt);

    let html = render(
        &core,
        &DemoView {
            patient_name,
            patient,
            role,
            prompt: &prompt,
            answer,
            feedback,
        },
    );

    core.record_interaction(
        session.id,
        InteractionEntry::now(patient_name, role, prompt, feedback),
    )?;
    tracing::info!(
        session = %session.id,
        patient = %patient_name,
        role,
        answer = ?answer.kind,
        "Prompt engineered"
    );

    Ok(Html(html))
}

fn render(core: &CoreState, view: &DemoView<'_>) -> String {
    let mut body = String::new();

    body.push_str("    <h1>📚 Precision Education Demo</h1>\n");
    body.push_str(
        "    <p class=\"lead\">Prototype platform for delivering real-time educational \
         support using patient context and AI.</p>\n",
    );
    body.push_str("    <form method=\"get\" action=\"/\">\n");

    // Patient selector
    body.push_str("      <fieldset>\n        <legend>Select a patient case</legend>\n");
    body.push_str("        <select name=\"patient\" onchange=\"this.form.submit()\">\n");
    for name in core.catalog().names() {
        let selected = if name == view.patient_name { " selected" } else { "" };
        body.push_str(&format!(
            "          <option value=\"{0}\"{selected}>{0}</option>\n",
            escape_html(name)
        ));
    }
    body.push_str("        </select>\n      </fieldset>\n");

    // Role radio
    body.push_str("      <fieldset>\n        <legend>Select your role</legend>\n");
    for role in Role::ALL {
        let checked = if role.as_str() == view.role { " checked" } else { "" };
        body.push_str(&format!(
            "        <label class=\"radio\"><input type=\"radio\" name=\"role\" value=\"{0}\"{checked} \
             onchange=\"this.form.submit()\"> {0}</label>\n",
            escape_html(role.as_str())
        ));
    }
    body.push_str("      </fieldset>\n");

    render_summary(&mut body, view.patient);

    body.push_str("      <h2>🧠 Engineered Prompt</h2>\n");
    body.push_str(&format!(
        "      <pre><code>{}</code></pre>\n",
        escape_html(view.prompt)
    ));

    body.push_str("      <h2>📘 OpenEvidence Mock Output</h2>\n");
    render_answer(&mut body, view.answer);

    body.push_str("      <h2>🗳️ Feedback</h2>\n");
    body.push_str("      <fieldset>\n        <legend>Was this helpful?</legend>\n");
    for option in Feedback::ALL {
        let checked = if *option == view.feedback { " checked" } else { "" };
        body.push_str(&format!(
            "        <label class=\"radio\"><input type=\"radio\" name=\"feedback\" value=\"{}\"{checked} \
             onchange=\"this.form.submit()\"> {}</label>\n",
            option.as_str(),
            option.label()
        ));
    }
    body.push_str("      </fieldset>\n");
    body.push_str("      <p>Thanks for your feedback!</p>\n");
    body.push_str("      <noscript><button type=\"submit\">Update</button></noscript>\n");
    body.push_str("    </form>");

    layout("Precision Prompt Demo", Some(NavPage::Demo), &body)
}

fn render_summary(body: &mut String, patient: &PatientRecord) {
    body.push_str("      <h2>🩺 Patient Summary</h2>\n");
    body.push_str(&format!(
        "      <p><strong>Location:</strong> {}</p>\n",
        escape_html(&patient.location)
    ));
    body.push_str(&format!("      <p><strong>Age:</strong> {}</p>\n", patient.age));
    body.push_str(&format!(
        "      <p><strong>Active Problems:</strong> {}</p>\n",
        escape_html(&patient.active_problems.join(", "))
    ));
    body.push_str("      <p><strong>Labs:</strong></p>\n      <ul>\n");
    for (lab, value) in &patient.labs {
        body.push_str(&format!(
            "        <li>{}: {}</li>\n",
            escape_html(lab),
            escape_html(value)
        ));
    }
    body.push_str("      </ul>\n");
    body.push_str(&format!(
        "      <p><strong>Recent Orders:</strong> {}</p>\n",
        escape_html(&patient.recent_orders.join(", "))
    ));
}

fn render_answer(body: &mut String, answer: &MockAnswer) {
    body.push_str("      <div class=\"answer\">\n");
    body.push_str(&format!(
        "        <p><strong>{}</strong></p>\n",
        escape_html(answer.title)
    ));
    match answer.body {
        AnswerBody::Paragraph(text) => {
            body.push_str(&format!("        <p>{}</p>\n", escape_html(text)));
        }
        AnswerBody::Bullets(items) => {
            body.push_str("        <ul>\n");
            for item in items {
                body.push_str(&format!("          <li>{}</li>\n", escape_html(item)));
            }
            body.push_str("        </ul>\n");
        }
    }
    body.push_str(&format!(
        "        <p class=\"source\">Source: {}</p>\n",
        escape_html(answer.source)
    ));
    body.push_str("      </div>\n");
}
