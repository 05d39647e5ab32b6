//! Prompt composer.
//!
//! The engineered prompt is a base sentence chosen from the patient's
//! active problems plus one addendum sentence chosen by caregiver role.
//! Total over its inputs: unmatched problems and roles fall back to the
//! generic sentences.

use std::str::FromStr;

use crate::models::{PatientRecord, Role};

/// Condition label → base sentence, highest priority first.
pub const CONDITION_PROMPTS: [(&str, &str); 4] = [
    (
        "Sepsis",
        "Summarize current guideline-based management of sepsis, including initial \
         resuscitation, antibiotic timing, and monitoring parameters.",
    ),
    (
        "Chest Pain",
        "Outline the initial evaluation and treatment of chest pain in the emergency \
         setting, including risk stratification and initial orders.",
    ),
    (
        "Pneumonia",
        "Summarize inpatient management of community-acquired pneumonia, including \
         diagnostic workup, antimicrobial selection, and monitoring.",
    ),
    (
        "Post-op Day 2 - Colectomy",
        "Review post-operative care considerations for colectomy, including pain \
         control, wound monitoring, and signs of surgical complications.",
    ),
];

/// Base sentence when no prioritized condition is active.
pub const DEFAULT_PROMPT: &str =
    "Summarize the appropriate evidence-based management for this patient's current \
     clinical conditions.";

/// Addendum for role labels outside the fixed table.
pub const GENERIC_ADDENDUM: &str =
    " Provide general recommendations suitable for a multidisciplinary care team.";

/// Role-specific addendum. Each starts with a space so it can be appended as-is.
pub fn role_addendum(role: Role) -> &'static str {
    match role {
        Role::MedicalStudent => {
            " Provide definitions and foundational concepts appropriate for a learner in \
             early training."
        }
        Role::Resident => " Include diagnostic reasoning and step-by-step clinical decision-making.",
        Role::Fellow => {
            " Provide nuanced recommendations and incorporate emerging evidence for complex \
             scenarios."
        }
        Role::App => {
            " Emphasize role-specific actions including initiating orders, team \
             communication, and coordination of care."
        }
        Role::Attending => " Focus on delegation, oversight, and high-level synthesis of care plans.",
        Role::Rn => {
            " Highlight nursing assessments, monitoring responsibilities, and escalation \
             triggers."
        }
        Role::Rt => " Detail ventilator strategies, oxygenation goals, and weaning parameters.",
    }
}

/// Addendum for an arbitrary role label.
pub fn addendum_for_label(role: &str) -> &'static str {
    Role::from_str(role)
        .map(role_addendum)
        .unwrap_or(GENERIC_ADDENDUM)
}

/// Base sentence for the highest-priority active problem.
pub fn base_prompt(patient: &PatientRecord) -> &'static str {
    CONDITION_PROMPTS
        .iter()
        .find(|(condition, _)| patient.has_problem(condition))
        .map(|(_, sentence)| *sentence)
        .unwrap_or(DEFAULT_PROMPT)
}

/// Build the engineered prompt for `patient` as seen by `role`.
pub fn compose_prompt(patient: &PatientRecord, role: &str) -> String {
    let base = base_prompt(patient);
    let addendum = addendum_for_label(role);

    let mut prompt = String::with_capacity(base.len() + addendum.len());
    prompt.push_str(base);
    prompt.push_str(addendum);
    prompt
}
