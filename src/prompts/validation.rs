//! Validation prompt builder for topic appropriateness screening.
//!
//! The rubric names exactly four disqualifying categories and five
//! categories that must be accepted even though they superficially resemble
//! conflict. The model is constrained to answer with a single verdict token.

/// Verdict token the model emits for an acceptable topic.
pub const AFFIRMATIVE_TOKEN: &str = "APPROPRIATE";

/// Verdict token the model emits for an unacceptable topic.
///
/// Note that this token textually contains [`AFFIRMATIVE_TOKEN`]; verdict
/// matching must check for the negative token first.
pub const NEGATIVE_TOKEN: &str = "INAPPROPRIATE";

/// Rubric template for topic screening.
const VALIDATION_PROMPT_TEMPLATE: &str = r#"Judge whether the following topic is suitable for elementary-school educational content:

Topic: "{topic}"

Treat ONLY the following as unsuitable:
- Mentions of real-world politicians or political parties
- Severe violence, killing, or torture
- Sexual or obscene content
- Profanity or hate speech

Treat ALL of the following as suitable:
- Quarrels or competition between cartoon/animation characters
- Characters from folk tales and traditional stories
- Disagreements or rivalry between friends
- Sports matches and game contests
- Adventure and exploration stories

Answer with exactly one word: APPROPRIATE or INAPPROPRIATE."#;

/// Builds the screening prompt for a topic.
///
/// The caller guarantees `topic` is non-empty after trimming; this builder
/// performs no input checks of its own.
///
/// # Examples
///
/// ```
/// use eduprompt::prompts::build_validation_prompt;
///
/// let prompt = build_validation_prompt("Friends exploring a coral reef");
/// assert!(prompt.contains("Friends exploring a coral reef"));
/// assert!(prompt.contains("INAPPROPRIATE"));
/// ```
pub fn build_validation_prompt(topic: &str) -> String {
    VALIDATION_PROMPT_TEMPLATE.replace("{topic}", topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_topic() {
        let prompt = build_validation_prompt("A robot learning to garden");
        assert!(prompt.contains("A robot learning to garden"));
    }

    #[test]
    fn test_prompt_names_disqualifying_categories() {
        let prompt = build_validation_prompt("topic");
        assert!(prompt.contains("politicians"));
        assert!(prompt.contains("torture"));
        assert!(prompt.contains("Sexual"));
        assert!(prompt.contains("hate speech"));
    }

    #[test]
    fn test_prompt_names_acceptable_categories() {
        let prompt = build_validation_prompt("topic");
        assert!(prompt.contains("cartoon/animation characters"));
        assert!(prompt.contains("folk tales"));
        assert!(prompt.contains("rivalry between friends"));
        assert!(prompt.contains("game contests"));
        assert!(prompt.contains("exploration stories"));
    }

    #[test]
    fn test_prompt_constrains_reply_to_verdict_tokens() {
        let prompt = build_validation_prompt("topic");
        assert!(prompt.contains(AFFIRMATIVE_TOKEN));
        assert!(prompt.contains(NEGATIVE_TOKEN));
        assert!(prompt.contains("exactly one word"));
    }

    #[test]
    fn test_negative_token_contains_affirmative_token() {
        // The property that forces negative-first matching in the validator.
        assert!(NEGATIVE_TOKEN.contains(AFFIRMATIVE_TOKEN));
    }
}
