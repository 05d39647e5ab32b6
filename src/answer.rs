//! Canned guideline answers.
//!
//! Stands in for a model call: the engineered prompt is scanned for a few
//! keywords and one of four fixed summaries is returned.

/// Which canned summary was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Sepsis,
    ChestPain,
    Pneumonia,
    General,
}

/// Summary content: either one paragraph or a bullet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerBody {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
}

/// A fixed answer block with its source attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAnswer {
    pub kind: AnswerKind,
    pub title: &'static str,
    pub body: AnswerBody,
    pub source: &'static str,
}

pub const SEPSIS_ANSWER: MockAnswer = MockAnswer {
    kind: AnswerKind::Sepsis,
    title: "Sepsis Management Summary",
    body: AnswerBody::Paragraph(
        "In summary, immediate resuscitation with 30 mL/kg balanced crystalloids, early \
         empiric antibiotics (within 1 hour for shock), dynamic monitoring of fluid \
         responsiveness, and individualized MAP targets (potentially higher in elderly \
         hypertensive patients with AKI) are the cornerstones of guideline-based sepsis \
         management in the ICU. Ongoing assessment and adaptation of therapy are essential, \
         particularly in complex scenarios involving advanced age, hypertension, and renal \
         dysfunction.[1-4][6-8]",
    ),
    source: "Open Evidence, Surviving Sepsis Campaign 2021",
};

pub const CHEST_PAIN_ANSWER: MockAnswer = MockAnswer {
    kind: AnswerKind::ChestPain,
    title: "Chest Pain Management Summary",
    body: AnswerBody::Bullets(&[
        "Immediate EKG and troponin assessment.",
        "Administer aspirin.",
        "Risk stratify based on clinical history and EKG changes.",
        "Consult cardiology for ongoing ST changes.",
    ]),
    source: "AHA/ACC Guidelines 2020",
};

pub const PNEUMONIA_ANSWER: MockAnswer = MockAnswer {
    kind: AnswerKind::Pneumonia,
    title: "Pneumonia Management Summary",
    body: AnswerBody::Bullets(&[
        "Obtain chest X-ray and sputum cultures.",
        "Initiate empiric antibiotics per CAP guidelines.",
        "Monitor respiratory status and consider escalation of care as needed.",
    ]),
    source: "IDSA/ATS CAP Guidelines 2019",
};

pub const GENERAL_ANSWER: MockAnswer = MockAnswer {
    kind: AnswerKind::General,
    title: "General Management Summary",
    body: AnswerBody::Bullets(&[
        "Review condition-specific guidelines.",
        "Follow institution protocols and reassess regularly.",
        "Consult specialists as needed.",
    ]),
    source: "Internal Reference",
};

/// Keyword → answer, checked in order. First hit wins.
const KEYWORD_ANSWERS: [(&str, &MockAnswer); 3] = [
    ("sepsis", &SEPSIS_ANSWER),
    ("chest pain", &CHEST_PAIN_ANSWER),
    ("pneumonia", &PNEUMONIA_ANSWER),
];

/// Pick the canned answer for an engineered prompt (case-insensitive).
pub fn select_answer(prompt: &str) -> &'static MockAnswer {
    let lowered = prompt.to_lowercase();
    KEYWORD_ANSWERS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, answer)| *answer)
        .unwrap_or(&GENERAL_ANSWER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PatientRecord;
    use crate::prompt::compose_prompt;

    #[test]
    fn sepsis_wins_over_other_keywords() {
        let prompt = "Chest pain with PNEUMONIA progressing to Sepsis";
        assert_eq!(select_answer(prompt).kind, AnswerKind::Sepsis);
    }

    #[test]
    fn chest_pain_before_pneumonia() {
        assert_eq!(
            select_answer("pneumonia and chest pain").kind,
            AnswerKind::ChestPain
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(select_answer("SEPSIS").kind, AnswerKind::Sepsis);
        assert_eq!(select_answer("Chest Pain").kind, AnswerKind::ChestPain);
        assert_eq!(select_answer("pNeUmOnIa").kind, AnswerKind::Pneumonia);
    }

    #[test]
    fn no_keyword_falls_back_to_general() {
        assert_eq!(select_answer("").kind, AnswerKind::General);
        assert_eq!(select_answer("chest  pain").kind, AnswerKind::General);
        assert_eq!(select_answer("colectomy recovery").kind, AnswerKind::General);
    }

    #[test]
    fn composed_prompts_map_to_their_answers() {
        let cases = [
            ("Sepsis", AnswerKind::Sepsis),
            ("Chest Pain", AnswerKind::ChestPain),
            ("Pneumonia", AnswerKind::Pneumonia),
            ("Post-op Day 2 - Colectomy", AnswerKind::General),
            ("Hypertension", AnswerKind::General),
        ];
        for (problem, expected) in cases {
            let patient = PatientRecord {
                location: "Ward".into(),
                age: 50,
                active_problems: vec![problem.to_string()],
                labs: Vec::new(),
                recent_orders: Vec::new(),
            };
            let prompt = compose_prompt(&patient, "RT");
            assert_eq!(select_answer(&prompt).kind, expected, "problem: {problem}");
        }
    }

    #[test]
    fn sources_are_attributed() {
        assert_eq!(SEPSIS_ANSWER.source, "Open Evidence, Surviving Sepsis Campaign 2021");
        assert_eq!(GENERAL_ANSWER.source, "Internal Reference");
        match CHEST_PAIN_ANSWER.body {
            AnswerBody::Bullets(items) => assert_eq!(items.len(), 4),
            AnswerBody::Paragraph(_) => panic!("Expected bullets"),
        }
    }
}
