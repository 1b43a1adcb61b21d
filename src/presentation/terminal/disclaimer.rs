pub const MEDICAL_DISCLAIMER: &str = "Medical Disclaimer: This is NOT medical advice. \
MedMentor RAG provides educational information only. Always consult a licensed healthcare \
professional before making decisions about medications, dosages, or drug interactions. \
Never self-medicate or change prescribed treatments without medical supervision.";

pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "Can I take ibuprofen with amoxicillin?",
    "What side effects should I watch for with metformin and atenolol?",
    "Why can't I mix alcohol with acetaminophen?",
    "Is it safe to combine warfarin and aspirin?",
];

/// Header, disclaimer and the numbered example questions.
pub fn welcome_banner(assistant_name: &str) -> String {
    let mut banner = format!(
        "{}\nAI Drug Interaction & Safety Advisor\n\n{}\n\nTry asking:\n",
        assistant_name, MEDICAL_DISCLAIMER
    );
    for (idx, question) in EXAMPLE_QUESTIONS.iter().enumerate() {
        banner.push_str(&format!("  /example {}  {}\n", idx + 1, question));
    }
    banner.push_str("\nType /quit to leave.\n");
    banner
}

/// Looks up an example question by its 1-based number.
pub fn example_question(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|idx| EXAMPLE_QUESTIONS.get(idx))
        .copied()
}
