use serde::Serialize;

/// One fixed audit dimension scored on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

/// Free-text discovery question captured alongside the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResearchQuestion {
    pub key: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const CATEGORIES: [AuditCategory; 6] = [
    AuditCategory {
        key: "strategy",
        label: "AI Strategy & Leadership",
        prompt: "Does leadership have a clear AI strategy and business goals?",
    },
    AuditCategory {
        key: "governance",
        label: "Governance, Ethics & POPIA Readiness",
        prompt: "Are data governance, ethics, and POPIA compliance controls in place for AI use?",
    },
    AuditCategory {
        key: "data",
        label: "Data Quality & Accessibility",
        prompt: "Is business data accurate, secure, and accessible for AI projects?",
    },
    AuditCategory {
        key: "technology",
        label: "Technology Stack",
        prompt: "Can current systems integrate with modern AI solutions and automation tools?",
    },
    AuditCategory {
        key: "skills",
        label: "People & Skills",
        prompt: "Do staff have the skills to adopt and govern AI responsibly?",
    },
    AuditCategory {
        key: "comms",
        label: "Communication & Change Management",
        prompt: "Is there a communication plan to support AI adoption and stakeholder trust?",
    },
];

pub const RESEARCH_QUESTIONS: [ResearchQuestion; 6] = [
    ResearchQuestion {
        key: "currentTools",
        label: "Current AI Tools",
        prompt: "Which AI or automation tools are already in use, formally or informally?",
    },
    ResearchQuestion {
        key: "painPoints",
        label: "Operational Pain Points",
        prompt: "Which repetitive or time-consuming tasks slow the team down the most?",
    },
    ResearchQuestion {
        key: "dataSources",
        label: "Key Data Sources",
        prompt: "Where does the business keep the documents and data AI would need to use?",
    },
    ResearchQuestion {
        key: "riskConcerns",
        label: "Risk & Compliance Concerns",
        prompt: "What privacy, POPIA, or reputational risks worry leadership about AI?",
    },
    ResearchQuestion {
        key: "successMeasures",
        label: "Success Measures",
        prompt: "How would the business measure a successful AI initiative in 12 months?",
    },
    ResearchQuestion {
        key: "budgetTimeline",
        label: "Budget & Timeline",
        prompt: "What budget and timeline are realistic for a first AI project?",
    },
];

pub const USE_CASE_CATALOG: [&str; 19] = [
    "Internal knowledge search",
    "Document triage and summarisation",
    "Contract and policy review support",
    "Client intake and FAQ assistant",
    "Email drafting and reply suggestions",
    "Meeting transcription and minutes",
    "Proposal and tender drafting",
    "Marketing copy generation",
    "Social media content planning",
    "Customer support ticket routing",
    "Sales lead qualification",
    "Financial report commentary",
    "HR policy and onboarding assistant",
    "Training and learning content creation",
    "Translation and localisation",
    "Market and competitor research",
    "POPIA compliance monitoring",
    "Code and spreadsheet formula assistance",
    "Image and presentation design",
];

pub fn category(key: &str) -> Option<&'static AuditCategory> {
    CATEGORIES.iter().find(|category| category.key == key)
}

pub fn research_question(key: &str) -> Option<&'static ResearchQuestion> {
    RESEARCH_QUESTIONS.iter().find(|question| question.key == key)
}

pub fn is_known_use_case(label: &str) -> bool {
    USE_CASE_CATALOG.contains(&label)
}

/// Catalog position used to keep selected use cases in a stable order.
pub(crate) fn use_case_position(label: &str) -> Option<usize> {
    USE_CASE_CATALOG.iter().position(|entry| *entry == label)
}
