// LLM prompt constants for interview preparation.

/// System prompt for interview question generation.
pub const INTERVIEW_SYSTEM: &str = "You are an experienced technical \
    interview coach. You reply with questions only, one per line, with no \
    numbering and no commentary.";

/// Interview question prompt. Replace `{companies}` and `{role}` before
/// sending. The reply is parsed as one question per non-empty line.
pub const INTERVIEW_Q_TEMPLATE: &str = "\
You are an interview coach. For companies: {companies}, hiring for role: {role}, \
generate 5 tailored technical interview questions.";
