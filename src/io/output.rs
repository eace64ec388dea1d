use crate::common::join_first;
use crate::config::LabelThresholds;
use crate::core::AnalysisResult;
use crate::scoring::QualityLabel;
use colored::*;
use std::io::Write;

const REPORT_TITLE: &str = "Communication Assessment Report";
const NO_ISSUES: &str = "No major issues found";
const ADVANCED_WORDS_SHOWN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

fn score_rows(result: &AnalysisResult) -> [(&'static str, f64); 5] {
    let scores = &result.scores;
    [
        ("Overall", scores.overall),
        ("Grammar", scores.grammar),
        ("Vocabulary", scores.vocabulary),
        ("Fluency", scores.fluency),
        ("Coherence", scores.coherence),
    ]
}

fn cefr_distribution(result: &AnalysisResult) -> String {
    result
        .vocabulary
        .cefr_levels
        .iter()
        .map(|(level, count)| format!("{level}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn advanced_words(result: &AnalysisResult) -> Option<String> {
    let words: Vec<&str> = result
        .vocabulary
        .complex_words
        .iter()
        .map(|w| w.word.as_str())
        .collect();
    (!words.is_empty()).then(|| join_first(&words, ADVANCED_WORDS_SHOWN))
}

fn grammar_summary(result: &AnalysisResult) -> String {
    if result.grammar_issues.is_empty() {
        NO_ISSUES.to_string()
    } else {
        result.grammar_issues.join(", ")
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    labels: LabelThresholds,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, labels: LabelThresholds) -> Self {
        Self { writer, labels }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        self.write_header(result)?;
        if result.no_data {
            writeln!(self.writer, "_No speech detected; nothing was scored._")?;
            return Ok(());
        }
        self.write_scores(result)?;
        self.write_grammar(result)?;
        self.write_vocabulary(result)?;
        self.write_feedback(result)?;
        self.write_suggestion(result)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# {REPORT_TITLE}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", result.text.trim())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Scores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Score | Rating |")?;
        writeln!(self.writer, "|--------|-------|--------|")?;
        for (metric, score) in score_rows(result) {
            let label = QualityLabel::from_score(score, &self.labels);
            writeln!(self.writer, "| {metric} | {score:.2} | {label} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_grammar(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Grammar Corrections")?;
        writeln!(self.writer)?;
        if result.grammar_issues.is_empty() {
            writeln!(self.writer, "{NO_ISSUES}")?;
        } else {
            for issue in &result.grammar_issues {
                writeln!(self.writer, "- {issue}")?;
            }
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "**Corrected version:** {}", result.corrected_text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_vocabulary(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let vocabulary = &result.vocabulary;
        writeln!(self.writer, "## Vocabulary Usage")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Unique words: {}", vocabulary.unique_words.len())?;
        writeln!(
            self.writer,
            "- Lexical diversity: {:.2}",
            vocabulary.lexical_diversity
        )?;
        writeln!(self.writer, "- CEFR distribution: {}", cefr_distribution(result))?;
        if let Some(words) = advanced_words(result) {
            writeln!(self.writer, "- Advanced words: {words}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_feedback(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        if result.feedback.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Feedback")?;
        writeln!(self.writer)?;
        for line in result.feedback.iter() {
            writeln!(self.writer, "- {line}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_suggestion(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        if let Some(suggestion) = &result.suggestion {
            writeln!(self.writer, "## Improvement Suggestion")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{suggestion}")?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    labels: LabelThresholds,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, labels: LabelThresholds) -> Self {
        Self { writer, labels }
    }

    fn colored_label(&self, score: f64) -> ColoredString {
        let label = QualityLabel::from_score(score, &self.labels);
        match label {
            QualityLabel::Excellent => label.label().green(),
            QualityLabel::Good => label.label().yellow(),
            QualityLabel::NeedsImprovement => label.label().red(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", REPORT_TITLE.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(REPORT_TITLE.len()).blue())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{} {}", "You said:".bold(), result.text.trim())?;
        writeln!(self.writer)?;

        if result.no_data {
            writeln!(self.writer, "{}", "No speech detected; nothing was scored.".yellow())?;
            return Ok(());
        }

        writeln!(self.writer, "{}", "Scores:".bold())?;
        for (metric, score) in score_rows(result) {
            writeln!(
                self.writer,
                "  {:<11} {:.2} ({})",
                format!("{metric}:"),
                score,
                self.colored_label(score)
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Grammar Corrections:".bold())?;
        writeln!(self.writer, "  Issues: {}", grammar_summary(result))?;
        writeln!(self.writer, "  Corrected version: {}", result.corrected_text)?;
        writeln!(self.writer)?;

        let vocabulary = &result.vocabulary;
        writeln!(self.writer, "{}", "Vocabulary Usage:".bold())?;
        writeln!(self.writer, "  Unique words: {}", vocabulary.unique_words.len())?;
        writeln!(
            self.writer,
            "  Lexical diversity: {:.2}",
            vocabulary.lexical_diversity
        )?;
        writeln!(self.writer, "  CEFR distribution: {}", cefr_distribution(result))?;
        if let Some(words) = advanced_words(result) {
            writeln!(self.writer, "  Advanced words: {}", words.cyan())?;
        }
        writeln!(self.writer)?;

        if !result.feedback.is_empty() {
            writeln!(self.writer, "{}", "Feedback:".bold())?;
            for line in result.feedback.iter() {
                writeln!(self.writer, "  - {line}")?;
            }
            writeln!(self.writer)?;
        }

        if let Some(suggestion) = &result.suggestion {
            writeln!(self.writer, "{}", "Improvement Suggestion:".bold())?;
            writeln!(self.writer, "  {suggestion}")?;
        }

        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    labels: LabelThresholds,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, labels)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, labels)),
    }
}
