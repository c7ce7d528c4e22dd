use super::domain::{NumericRange, Question, QuestionKind, Section};
use serde::Serialize;

/// Ordered, immutable question list a session walks through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The fifteen-question performance marketing assessment.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_in(&self, section: Section) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .collect()
    }

    pub fn view(&self) -> Vec<QuestionView> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionView::new(index, question))
            .collect()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Serializable shape of a question for API clients.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub position: usize,
    pub id: &'static str,
    pub section: Section,
    pub section_label: &'static str,
    pub kind: &'static str,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<NumericRange>,
}

impl QuestionView {
    fn new(index: usize, question: &Question) -> Self {
        let range = match question.kind {
            QuestionKind::NumericScale(range) => Some(range),
            _ => None,
        };

        Self {
            position: index + 1,
            id: question.id,
            section: question.section,
            section_label: question.section.label(),
            kind: question.kind.label(),
            prompt: question.prompt,
            choices: question.choices(),
            range,
        }
    }
}

fn agreement(id: &'static str, section: Section, prompt: &'static str) -> Question {
    Question {
        id,
        section,
        kind: QuestionKind::Agreement,
        prompt,
    }
}

fn single_choice(
    id: &'static str,
    section: Section,
    prompt: &'static str,
    options: Vec<&'static str>,
) -> Question {
    Question {
        id,
        section,
        kind: QuestionKind::SingleChoice { options },
        prompt,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        agreement(
            "interest_analytics",
            Section::Psychometric,
            "How interested are you in analyzing data to drive marketing decisions?",
        ),
        agreement(
            "interest_campaigns",
            Section::Psychometric,
            "How excited would you be to optimize paid advertising campaigns daily?",
        ),
        agreement(
            "personality_detail",
            Section::Psychometric,
            "I pay close attention to details and rarely make careless mistakes.",
        ),
        agreement(
            "personality_stress",
            Section::Psychometric,
            "I remain calm and composed when campaigns aren't performing well.",
        ),
        agreement(
            "cognitive_analytical",
            Section::Psychometric,
            "I prefer making decisions based on data rather than intuition.",
        ),
        agreement(
            "grit_persistence",
            Section::Psychometric,
            "I continue working on difficult problems even when progress is slow.",
        ),
        single_choice(
            "math_roi",
            Section::Technical,
            "If you spend $1000 on ads and generate $3000 in revenue, what's your ROI?",
            vec!["200%", "300%", "33%", "66%"],
        ),
        single_choice(
            "logic_optimization",
            Section::Technical,
            "Your campaign has a high click-through rate but low conversions. What should you focus on first?",
            vec![
                "Increase ad spend",
                "Improve landing page",
                "Change ad creative",
                "Target new audiences",
            ],
        ),
        Question {
            id: "tools_familiarity",
            section: Section::Technical,
            kind: QuestionKind::NumericScale(NumericRange {
                min: 0,
                max: 10,
                step: 1,
            }),
            prompt: "Rate your familiarity with digital advertising tools (Google Ads, Facebook Ads, etc.)",
        },
        single_choice(
            "analytics_knowledge",
            Section::Technical,
            "What does CPA stand for in performance marketing?",
            vec![
                "Cost Per Action",
                "Customer Profile Analysis",
                "Campaign Performance Analytics",
                "Conversion Path Attribution",
            ],
        ),
        agreement(
            "will_determination",
            Section::Wiscar,
            "I'm willing to spend weeks testing and iterating to improve campaign performance.",
        ),
        agreement(
            "skill_learning",
            Section::Wiscar,
            "I can quickly learn new marketing tools and platforms.",
        ),
        single_choice(
            "cognitive_attribution",
            Section::Wiscar,
            "A customer sees your ad on Facebook, clicks it, but converts 3 days later via Google search. Using last-click attribution, which channel gets credit?",
            vec!["Facebook", "Google Search", "Both equally", "Neither"],
        ),
        agreement(
            "ability_feedback",
            Section::Wiscar,
            "I actively seek feedback and use it to improve my performance.",
        ),
        agreement(
            "real_world_testing",
            Section::Wiscar,
            "I would enjoy running A/B tests and analyzing which variations perform better.",
        ),
    ]
}
