//! Analysis report rendering
//!
//! The report has four fixed sections. Only "Primary Findings" depends on
//! the input; the other three are static text.

use serde::Serialize;

const TECHNICAL_CONSIDERATIONS: &str = "\
2. Technical Considerations:
   - Analysis based on content context
   - Relevant information extraction
   - Pattern matching and relevance scoring";

const PRACTICAL_IMPLICATIONS: &str = "\
3. Practical Implications:
   - Direct application to the question
   - Context-specific insights
   - Related considerations";

const RECOMMENDATIONS: &str = "\
4. Recommendations:
   - Key takeaways from analysis
   - Suggested actions or next steps
   - Areas for further investigation";

/// Findings for one question, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub question: String,
    /// Matching sentences, trimmed, in source order
    pub findings: Vec<String>,
}

impl AnalysisReport {
    pub fn new(question: impl Into<String>, findings: Vec<String>) -> Self {
        Self {
            question: question.into(),
            findings,
        }
    }

    pub fn render(&self) -> String {
        let findings: Vec<String> = self
            .findings
            .iter()
            .map(|f| format!("   - {}", f.trim()))
            .collect();

        format!(
            "Based on the provided content, here's a detailed analysis regarding your question about \"{question}\":\n\
             \n\
             1. Primary Findings:\n\
             {findings}\n\
             \n\
             {TECHNICAL_CONSIDERATIONS}\n\
             \n\
             {PRACTICAL_IMPLICATIONS}\n\
             \n\
             {RECOMMENDATIONS}",
            question = self.question,
            findings = findings.join("\n"),
        )
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_layout() {
        let report = AnalysisReport::new("cats like sleeping", vec!["Cats sleep a lot".to_string()]);
        let expected = "\
Based on the provided content, here's a detailed analysis regarding your question about \"cats like sleeping\":

1. Primary Findings:
   - Cats sleep a lot

2. Technical Considerations:
   - Analysis based on content context
   - Relevant information extraction
   - Pattern matching and relevance scoring

3. Practical Implications:
   - Direct application to the question
   - Context-specific insights
   - Related considerations

4. Recommendations:
   - Key takeaways from analysis
   - Suggested actions or next steps
   - Areas for further investigation";
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_no_findings_keeps_static_sections() {
        let rendered = AnalysisReport::new("why", vec![]).render();
        assert!(rendered.contains("1. Primary Findings:\n\n\n2. Technical Considerations:"));
        assert!(rendered.contains("3. Practical Implications:"));
        assert!(rendered.ends_with("   - Areas for further investigation"));
    }

    #[test]
    fn test_multiple_findings_one_bullet_each() {
        let report = AnalysisReport::new(
            "rust",
            vec!["Rust is fast".to_string(), "  Rust is safe ".to_string()],
        );
        assert!(report
            .render()
            .contains("1. Primary Findings:\n   - Rust is fast\n   - Rust is safe\n\n"));
    }
}
