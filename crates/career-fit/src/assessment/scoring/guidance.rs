use super::Recommendation;

const STRONG_PROFILE_THRESHOLD: u8 = 70;

pub(crate) fn strengths(overall: u8) -> Vec<&'static str> {
    if overall > STRONG_PROFILE_THRESHOLD {
        vec![
            "Data-driven mindset",
            "Strong analytical skills",
            "Good technical foundation",
        ]
    } else {
        vec!["Growing interest in analytics", "Willingness to learn"]
    }
}

/// Note the strict `<`: a score of exactly 70 gets the advanced list here
/// while [`strengths`] still gives the developing list.
pub(crate) fn improvements(overall: u8) -> Vec<&'static str> {
    if overall < STRONG_PROFILE_THRESHOLD {
        vec![
            "Develop technical skills",
            "Learn marketing tools",
            "Practice data analysis",
        ]
    } else {
        vec!["Advanced attribution modeling", "Cross-channel optimization"]
    }
}

pub(crate) fn next_steps(recommendation: Recommendation) -> Vec<&'static str> {
    match recommendation {
        Recommendation::Positive => vec![
            "Complete Google Ads certification",
            "Learn SQL for marketing analytics",
            "Practice with real campaign data",
        ],
        Recommendation::Neutral | Recommendation::Negative => vec![
            "Start with digital marketing fundamentals",
            "Explore Excel/Google Sheets for analysis",
            "Consider marketing operations roles",
        ],
    }
}

pub(crate) fn alternative_roles(recommendation: Recommendation) -> Vec<&'static str> {
    match recommendation {
        Recommendation::Negative => vec![
            "Marketing Operations Specialist",
            "SEO Analyst",
            "Content Marketing Analyst",
            "Social Media Manager",
        ],
        Recommendation::Positive | Recommendation::Neutral => Vec::new(),
    }
}
