//! Turns a prompt into the raw HTML of a single-file website.

use crate::generator::{GenerationError, TextGenerator};

pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert web developer AI. Your task is to generate a complete, functional, and visually appealing website based on a user's prompt.

You MUST follow these rules:
1. Generate a SINGLE HTML file.
2. ALL CSS must be included inside a `<style>` tag in the `<head>`. Do not link to external stylesheets.
3. ALL JavaScript must be included inside a `<script>` tag at the end of the `<body>`. Do not link to external scripts.
4. The website must be fully functional. If the user asks for a button, it should have a JavaScript function attached to it. If they ask for a form, it should have basic validation.
5. Use modern and clean design principles. Use placeholder text and images where appropriate.
6. The code must be complete and ready to be saved into an .html file and opened in a browser.
7. Do not include any explanations, comments, or markdown formatting like ```html. Only output the raw HTML code.
";

const OPENING_FENCE: &str = "```html";
const CLOSING_FENCE: &str = "```";

/// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Removes a leading ```html and a trailing ``` marker, then trims.
pub fn strip_code_fences(raw: &str) -> String {
    let text = raw.trim_matches(is_strippable);
    let text = text.strip_prefix(OPENING_FENCE).unwrap_or(text);
    let text = text.strip_suffix(CLOSING_FENCE).unwrap_or(text);
    text.trim_matches(is_strippable).to_string()
}

pub async fn generate_website(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<String, GenerationError> {
    let raw = generator.generate(SYSTEM_INSTRUCTION, prompt).await?;
    Ok(strip_code_fences(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[test]
    fn strips_both_fences() {
        let raw = "  ```html\n<html><body>hi</body></html>\n```  \n";
        assert_eq!(strip_code_fences(raw), "<html><body>hi</body></html>");
    }

    #[test]
    fn unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fences("\n <p>a ``` b</p> \t"), "<p>a ``` b</p>");
    }

    #[test]
    fn strips_each_fence_independently() {
        assert_eq!(strip_code_fences("```html\n<p>x</p>"), "<p>x</p>");
        assert_eq!(strip_code_fences("<p>x</p>\n```"), "<p>x</p>");
    }

    #[test]
    fn other_language_fence_is_kept_at_start() {
        assert_eq!(strip_code_fences("```xml\n<a/>\n```"), "```xml\n<a/>");
    }

    #[test]
    fn separator_controls_are_trimmed_like_whitespace() {
        assert_eq!(strip_code_fences("\u{1f}```html\n<p/>\n```\u{1f}"), "<p/>");
        assert_eq!(strip_code_fences("\u{1c}\u{1d}<p/>\u{1e}"), "<p/>");
    }

    #[test]
    fn bare_fences_collapse_to_empty() {
        assert_eq!(strip_code_fences("```html```"), "");
        assert_eq!(strip_code_fences("```"), "");
    }

    struct Fixed(&'static str);

    #[async_trait]
    impl TextGenerator for Fixed {
        async fn generate(&self, system: &str, prompt: &str) -> Result<String, GenerationError> {
            assert_eq!(system, SYSTEM_INSTRUCTION);
            assert_eq!(prompt, "a button that shows an alert");
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn generate_website_cleans_model_output() {
        let generator = Fixed("```html\n<html>...</html>\n```");
        let code = generate_website(&generator, "a button that shows an alert")
            .await
            .unwrap();
        assert_eq!(code, "<html>...</html>");
    }
}
