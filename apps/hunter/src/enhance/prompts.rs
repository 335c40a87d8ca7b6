// LLM prompt constants for the enhancement module.

/// System prompt for resume rewriting and gap analysis.
pub const ENHANCE_SYSTEM: &str = "You are an experienced career advisor and \
    resume expert. You give direct, concrete, professionally worded answers \
    with no preamble.";

/// Resume improvement prompt. Replace `{role}` and `{resume}` before sending.
pub const IMPROVE_RESUME_TEMPLATE: &str = "\
You are a resume expert. Rewrite the following resume to improve clarity and alignment \
with the role of {role}. Use a professional tone. Enhance formatting, but keep the same content.

Resume:
{resume}";

/// Gap detection prompt. Replace `{resume}` and `{job}` before sending.
/// The reply is parsed as one gap per non-empty line.
pub const DETECT_GAPS_TEMPLATE: &str = "\
You are a career advisor. Compare the resume to the job description. \
List clearly what skills/experience/certifications are missing in the resume, \
one item per line, with no numbering and no commentary:

Resume:
{resume}

Job Description:
{job}";

/// Upskill suggestion prompt. Replace `{skills}` before sending.
/// Paired with `JSON_ONLY_SYSTEM`; the reply must be a JSON object.
pub const SUGGEST_SUBFIELDS_TEMPLATE: &str = r#"You are a learning guide. Given these missing skills: {skills},
return for each skill a list of 3-5 key subtopics or subfields the candidate should learn.

Return a JSON object with this EXACT schema (no extra fields):
{
  "skill name": ["subtopic 1", "subtopic 2", "subtopic 3"]
}

Use each missing skill verbatim as a key."#;
