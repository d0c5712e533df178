//! Prompt construction for the AI resume review

/// Cap the resume text sent to the model. Anything beyond this adds latency
/// and cost without changing the review.
const MAX_RESUME_CHARS: usize = 12_000;

pub const SYSTEM_PROMPT: &str =
    "You are an expert resume reviewer and career coach. Respond with valid JSON only.";

/// Build the user prompt asking for a structured JSON review of the resume.
pub fn analysis_prompt(resume_text: &str) -> String {
    let truncated: String = resume_text.chars().take(MAX_RESUME_CHARS).collect();

    format!(
        r#"You are an expert resume reviewer and career coach. Analyze the following resume and respond with a JSON object containing exactly these keys:

- "overallScore": integer 0-100 rating the resume overall
- "summary": one-paragraph assessment of the resume
- "strengths": array of strings, the resume's strongest points
- "improvements": array of strings, the most impactful things to fix
- "scores": object mapping category names (formatting, content, experience, skills, education, impact) to integer scores 0-100
- "recommendations": array of strings, concrete next actions for the candidate

Resume:
{}

Provide only the JSON response, no additional text."#,
        truncated
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_resume() {
        let prompt = analysis_prompt("Jane Doe, Software Engineer, Python and React.");
        assert!(prompt.contains("Jane Doe, Software Engineer"));
        assert!(prompt.contains("overallScore"));
        assert!(prompt.contains("no additional text"));
    }

    #[test]
    fn test_prompt_truncates_long_resumes() {
        let long_text = "x".repeat(50_000);
        let prompt = analysis_prompt(&long_text);
        assert!(prompt.len() < 20_000);
    }
}
