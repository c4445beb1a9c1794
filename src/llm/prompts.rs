use crate::models::PostLength;

/// Prompt for the research stage
pub fn build_research_prompt(topic: &str, tone: &str, length: PostLength) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are a research agent. Research the topic: \"{}\"\n\n",
        topic
    ));
    prompt.push_str("Provide:\n");
    prompt.push_str("1. Key points to cover\n");
    prompt.push_str("2. Important facts and statistics\n");
    prompt.push_str(&format!(
        "3. Structured outline for a {} blog post\n",
        length
    ));
    prompt.push_str("4. Relevant angles and perspectives\n\n");
    prompt.push_str(&format!("Tone: {}\n", tone));

    prompt
}

/// Prompt for the writing stage
pub fn build_writer_prompt(research: &str, topic: &str, tone: &str, length: PostLength) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are a professional blog writer. Write a complete blog post based on the following research:\n\n",
    );
    prompt.push_str("Research:\n");
    prompt.push_str(research);
    prompt.push_str("\n\n");

    prompt.push_str("Requirements:\n");
    prompt.push_str(&format!("- Topic: {}\n", topic));
    prompt.push_str(&format!("- Tone: {}\n", tone));
    prompt.push_str(&format!("- Length: {} words\n", length.word_range()));
    prompt.push_str("- Engaging introduction, clear headings, strong conclusion, SEO-friendly.\n");

    prompt
}

/// Prompt for the review stage
pub fn build_review_prompt(draft: &str, tone: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are an editorial reviewer. Review and polish this draft:\n\n");
    prompt.push_str("Draft:\n");
    prompt.push_str(draft);
    prompt.push_str("\n\n");

    prompt.push_str("Check for:\n");
    prompt.push_str("1. Grammar and spelling\n");
    prompt.push_str("2. Flow and readability\n");
    prompt.push_str(&format!("3. Tone consistency ({})\n", tone));
    prompt.push_str("4. SEO optimization\n\n");
    prompt.push_str("Return the final polished version.\n");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_prompt() {
        let prompt = build_research_prompt("Cloud Computing Trends", "casual", PostLength::Long);

        assert!(prompt.starts_with("You are a research agent."));
        assert!(prompt.contains("\"Cloud Computing Trends\""));
        assert!(prompt.contains("outline for a long blog post"));
        assert!(prompt.trim_end().ends_with("Tone: casual"));
    }

    #[test]
    fn test_writer_prompt_uses_word_range() {
        let prompt = build_writer_prompt("- point one", "AI", "technical", PostLength::Short);

        assert!(prompt.contains("Research:\n- point one"));
        assert!(prompt.contains("- Topic: AI"));
        assert!(prompt.contains("- Tone: technical"));
        assert!(prompt.contains("- Length: 500-700 words"));
    }

    #[test]
    fn test_review_prompt() {
        let prompt = build_review_prompt("My draft", "friendly");

        assert!(prompt.contains("Draft:\nMy draft"));
        assert!(prompt.contains("3. Tone consistency (friendly)"));
        assert!(prompt.contains("Return the final polished version."));
    }
}
