// Prompt constants for cold email generation.

/// System instruction for cold email drafting.
pub const EMAIL_SYSTEM: &str = "You are an assistant that writes personalized cold emails. \
    Write in plain text with no markdown. \
    Do NOT invent experience that is not present in the resume.";

/// Email prompt template.
/// Replace: {resume_text}, {job_description}, {matched_skills}
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"Given the following:

Resume content:
{resume_text}

Job description:
{job_description}

Matched skills:
{matched_skills}

Write a short, professional, and polite cold email that clearly connects the candidate's experience and strengths to the job.
Avoid buzzwords and exaggeration. Keep it natural, concise, and engaging."#;

/// Renders the email prompt. Matched skills are listed comma-separated, or
/// `None` when nothing matched.
pub fn build_email_prompt(
    resume_text: &str,
    job_description: &str,
    matched_skills: &[String],
) -> String {
    let skills = if matched_skills.is_empty() {
        "None".to_string()
    } else {
        matched_skills.join(", ")
    };

    // Substitute skills and job text before the resume so placeholder-looking
    // text inside the resume is left alone.
    EMAIL_PROMPT_TEMPLATE
        .replace("{matched_skills}", &skills)
        .replace("{job_description}", job_description)
        .replacen("{resume_text}", resume_text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_all_inputs() {
        let prompt = build_email_prompt(
            "Rust engineer at Acme",
            "Hiring a backend engineer",
            &["Rust".to_string(), "AWS".to_string()],
        );
        assert!(prompt.contains("Rust engineer at Acme"));
        assert!(prompt.contains("Hiring a backend engineer"));
        assert!(prompt.contains("Matched skills:\nRust, AWS"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_no_matches_render_as_none() {
        let prompt = build_email_prompt("resume", "job", &[]);
        assert!(prompt.contains("Matched skills:\nNone"));
    }
}
