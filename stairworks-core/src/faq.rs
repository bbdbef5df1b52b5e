//! FAQ page content

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Entries shown when config does not provide its own `[[faq]]` list
pub fn default_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "How long does it take to build a custom staircase?",
            "Most staircases ship six to ten weeks after the final site measurement. \
             Spiral and steel-stringer designs sit at the longer end of that range.",
        ),
        FaqEntry::new(
            "Which woods and finishes can I choose from?",
            "Oak, ash and walnut treads are available in natural, smoked and stained finishes. \
             Steel parts come powder-coated or as raw steel with a clear lacquer. \
             The configurator shows which finishes suit each stair model.",
        ),
        FaqEntry::new(
            "Do you measure on site?",
            "Yes. A technician measures the opening, floor-to-floor height and wall \
             conditions before production starts, so the drawings match your building.",
        ),
        FaqEntry::new(
            "Is installation included?",
            "Installation by our own crew is included within our service area. \
             Outside it we ship a pre-assembled kit with drawings and phone support.",
        ),
        FaqEntry::new(
            "What warranty do you offer?",
            "Structural parts carry a ten-year warranty. Surface finishes are covered \
             for two years under normal domestic use.",
        ),
        FaqEntry::new(
            "Can I see a staircase before ordering?",
            "Our showroom has full-size samples of every model. Book a visit through \
             the contact page, or start with the online configurator.",
        ),
    ]
}
