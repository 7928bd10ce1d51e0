//! Output formatters: console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::{PlacementError, Result};
use crate::jobs::JobPosting;
use crate::output::report::*;
use crate::quiz::session::format_time;
use crate::quiz::{NavigatorMark, Question, QuizResult, QuizView};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Renders analysis reports and quiz results in one output format.
pub trait OutputFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String>;
    fn format_quiz(&self, result: &QuizResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Picks the formatter for a requested [`OutputFormat`].
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #007acc; padding-bottom: 20px; }
        .score-badge { display: inline-block; padding: 8px 16px; border-radius: 20px; font-weight: bold; color: white; margin-left: 10px; }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 10px; }
        .score-breakdown { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 15px; }
        .score-item { background: #f8f9fa; padding: 15px; border-radius: 6px; border-left: 4px solid #007acc; }
        .strengths, .improvements { background: #f8f9fa; padding: 15px; border-radius: 6px; }
        .strengths { border-left: 4px solid #28a745; }
        .improvements { border-left: 4px solid #ffc107; }
        .keyword { display: inline-block; padding: 2px 10px; margin: 3px; border-radius: 12px; }
        .present { background: #d4edda; }
        .missing { background: #f8d7da; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Analysis Report</h1>
            <p>{{ resume_file }} | Generated: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Overall Score: {{ score }}/100 <span class="score-badge {{ score_class }}">{{ score_label }}</span></h2>
            <div class="score-breakdown">
                <div class="score-item"><h4>Completeness</h4><p><strong>{{ completeness }}%</strong></p></div>
                <div class="score-item"><h4>ATS Compliance</h4><p><strong>{{ ats_compliance }}%</strong></p></div>
                <div class="score-item"><h4>Keywords</h4><p><strong>{{ keywords }}%</strong></p></div>
                <div class="score-item"><h4>Grammar</h4><p><strong>{{ grammar }}%</strong></p></div>
            </div>
            <p>{{ word_count }} words</p>
        </div>

        <div class="section">
            <h2>Sections</h2>
            <ul>
            {% for row in sections %}
                <li>{% if row.present %}✅{% else %}❌{% endif %} {{ row.name }}</li>
            {% endfor %}
            </ul>
        </div>

        <div class="section">
            <h2>Strengths</h2>
            <div class="strengths"><ul>
            {% for item in strengths %}<li>{{ item }}</li>{% endfor %}
            </ul></div>
        </div>

        <div class="section">
            <h2>Areas for Improvement</h2>
            <div class="improvements"><ul>
            {% for item in improvements %}<li>{{ item }}</li>{% endfor %}
            </ul></div>
        </div>

        <div class="section">
            <h2>Keywords</h2>
            <p>
            {% for k in present_keywords %}<span class="keyword present">{{ k }}</span>{% endfor %}
            </p>
            {% if has_missing %}
            <h3>Consider adding</h3>
            <p>
            {% for k in missing_keywords %}<span class="keyword missing">{{ k }}</span>{% endfor %}
            </p>
            {% endif %}
        </div>

        {% if detailed %}
        <div class="section">
            <h2>ATS Checks</h2>
            <table>
            {% for check in ats_checks %}
                <tr><td>{{ check.criterion }}</td><td>{{ check.awarded }}/{{ check.max }}</td></tr>
            {% endfor %}
            </table>
        </div>
        {% endif %}

        <div class="section">
            <h2>Suggestions</h2>
            <ol>
            {% for item in suggestions %}<li>{{ item }}</li>{% endfor %}
            </ol>
        </div>

        <div class="metadata">
            <p><strong>Generated by placement-prep v{{ version }}</strong> in {{ processing_time }}ms</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct AnalysisHtml {
    include_styles: bool,
    detailed: bool,
    resume_file: String,
    generated_at: String,
    score: u8,
    score_class: &'static str,
    score_label: &'static str,
    completeness: u8,
    ats_compliance: u8,
    keywords: u8,
    grammar: u8,
    word_count: usize,
    sections: Vec<SectionRow>,
    strengths: Vec<String>,
    improvements: Vec<String>,
    present_keywords: Vec<String>,
    missing_keywords: Vec<String>,
    has_missing: bool,
    ats_checks: Vec<AtsCheck>,
    suggestions: Vec<String>,
    version: String,
    processing_time: u64,
}

struct SectionRow {
    name: String,
    present: bool,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Aptitude Test Result</title></head>
<body>
    <h1>Aptitude Test Result</h1>
    <p><strong>{{ score }}/{{ total }}</strong> ({{ percentage }}%): {% if passed %}Passed{% else %}Not passed{% endif %}</p>
    <p>Time taken: {{ time_taken }}</p>
    <table>
        <tr><th>Category</th><th>Correct</th></tr>
        {% for row in categories %}
        <tr><td>{{ row.name }}</td><td>{{ row.correct }}/{{ row.total }}</td></tr>
        {% endfor %}
    </table>
</body>
</html>"#, ext = "html")]
struct QuizHtml {
    score: u32,
    total: u32,
    percentage: String,
    passed: bool,
    time_taken: String,
    categories: Vec<CategoryRow>,
}

struct CategoryRow {
    name: String,
    correct: u32,
    total: u32,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };
        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let band = ScoreBand::of(score);
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::BrightGreen,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().to_uppercase().color(color).bold())
        } else {
            format!("[{}]", band.label().to_uppercase())
        }
    }

    fn format_bar(&self, value: u8) -> String {
        let filled = (value as usize * 20 + 50) / 100;
        let bar = format!("{}{}", "■".repeat(filled), "·".repeat(20 - filled));
        let color = match ScoreBand::of(value) {
            ScoreBand::Excellent | ScoreBand::Good => Color::Green,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        };
        self.colorize(&bar, color)
    }

    /// The question currently on screen during an attempt.
    pub fn format_question(&self, view: &QuizView) -> String {
        let mut output = format!(
            "\nQuestion {} of {} • {} answered    ⏱  {}\n",
            view.index + 1,
            view.total,
            view.answered,
            format_time(view.remaining)
        );
        output.push_str(&format!(
            "{} {}\n",
            self.colorize(&format!("[{}]", view.question.category), Color::Magenta),
            view.question.text
        ));

        for (i, option) in view.question.options.iter().enumerate() {
            let line = format!("  {}) {}", i + 1, option);
            if view.selected == Some(i as u8) {
                output.push_str(&format!("{} ●\n", self.colorize(&line, Color::Cyan)));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }
        output
    }

    /// Ten question numbers per row, marked current, answered or open.
    pub fn format_navigator(&self, marks: &[NavigatorMark]) -> String {
        let mut output = String::new();
        for (row_start, row) in marks.chunks(10).enumerate().map(|(r, row)| (r * 10, row)) {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(offset, mark)| {
                    let number = row_start + offset + 1;
                    match mark {
                        NavigatorMark::Current => self.colorize(&format!("[{:>2}]", number), Color::Blue),
                        NavigatorMark::Answered => self.colorize(&format!(" {:>2}✓", number), Color::Green),
                        NavigatorMark::Unanswered => format!(" {:>2} ", number),
                    }
                })
                .collect();
            output.push_str(&cells.join(" "));
            output.push('\n');
        }
        output
    }

    /// The question catalog without answers.
    pub fn format_catalog(&self, questions: &[Question]) -> String {
        let mut output = self.format_header(&format!("🧠 APTITUDE CATALOG ({} questions)", questions.len()), 1);
        for question in questions {
            output.push_str(&format!(
                "\n{:>2}. {} {}\n",
                question.id,
                self.colorize(&format!("[{}]", question.category), Color::Magenta),
                question.text
            ));
            for (i, option) in question.options.iter().enumerate() {
                output.push_str(&format!("      {}) {}\n", i + 1, option));
            }
        }
        output
    }

    /// Ranked job board listing.
    pub fn format_job_matches(&self, matches: &[(&JobPosting, u8)]) -> String {
        let mut output = self.format_header(&format!("💼 {} MATCHING POSITIONS", matches.len()), 1);

        if matches.is_empty() {
            output.push_str("No jobs found. Try adjusting your search or filters.\n");
            return output;
        }

        for (job, score) in matches {
            output.push_str(&format!(
                "\n{} at {}",
                self.colorize(&job.title, Color::Cyan),
                job.company_name
            ));
            if *score > 0 {
                output.push_str(&format!("  {}", self.colorize(&format!("{}% Match", score), Color::Green)));
            }
            output.push('\n');
            output.push_str(&format!(
                "   📍 {} | {} | {}\n",
                job.location, job.work_mode, job.job_type
            ));
            if job.ctc_max > 0 {
                output.push_str(&format!(
                    "   💰 {:.1}-{:.1} LPA | {} opening(s)\n",
                    job.ctc_min as f64 / 100_000.0,
                    job.ctc_max as f64 / 100_000.0,
                    job.openings
                ));
            }
            if !job.required_skills.is_empty() {
                output.push_str(&format!("   🛠  {}\n", job.required_skills.join(", ")));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("📄 RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "{} | Generated: {}\n",
            report.metadata.resume_file,
            report.generated_at_display()
        ));

        output.push_str(&format!(
            "\nOverall Score: {} {}\n",
            self.colorize(&format!("{}/100", analysis.score), Color::Cyan),
            self.format_score_badge(analysis.score)
        ));

        output.push_str(&self.format_header("📊 SCORE BREAKDOWN", 2));
        for (name, value) in [
            ("Completeness", analysis.completeness),
            ("ATS Compliance", analysis.ats_compliance),
            ("Keywords", analysis.keywords),
            ("Grammar", analysis.grammar),
        ] {
            output.push_str(&format!("  {:<15} {} {:>3}%\n", name, self.format_bar(value), value));
        }
        output.push_str(&format!("  {} words\n", analysis.word_count));

        output.push_str(&self.format_header("🗂  SECTIONS", 2));
        for (section, present) in analysis.sections.iter() {
            let mark = if present {
                self.colorize("✓", Color::Green)
            } else {
                self.colorize("✗", Color::Red)
            };
            output.push_str(&format!("  {} {}\n", mark, section));
        }

        output.push_str(&self.format_header("✅ STRENGTHS", 2));
        for strength in &analysis.strengths {
            output.push_str(&format!("  • {}\n", strength));
        }

        output.push_str(&self.format_header("🎯 AREAS FOR IMPROVEMENT", 2));
        for improvement in &analysis.improvements {
            output.push_str(&format!("  • {}\n", improvement));
        }

        output.push_str(&self.format_header("🔍 KEYWORDS", 2));
        if analysis.present_keywords.is_empty() {
            output.push_str("  None of the tracked keywords were found\n");
        } else {
            output.push_str(&format!(
                "  Found: {}\n",
                self.colorize(&analysis.present_keywords.join(", "), Color::Green)
            ));
        }
        if !analysis.missing_keywords.is_empty() {
            output.push_str(&format!(
                "  Consider adding: {}\n",
                self.colorize(&analysis.missing_keywords.join(", "), Color::Yellow)
            ));
        }

        if self.detailed {
            output.push_str(&self.format_header("🤖 ATS CHECKS", 3));
            for check in &report.ats_checks {
                let mark = if check.passed() {
                    self.colorize("✓", Color::Green)
                } else {
                    self.colorize("✗", Color::Red)
                };
                output.push_str(&format!(
                    "  {} {:<34} {:>2}/{}\n",
                    mark, check.criterion, check.awarded, check.max
                ));
            }
        }

        output.push_str(&self.format_header("💡 SUGGESTIONS", 2));
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }

        if self.detailed {
            output.push_str(&format!(
                "\nProcessed in {}ms by placement-prep v{}\n",
                report.metadata.processing_time_ms, report.metadata.tool_version
            ));
        }

        Ok(output)
    }

    fn format_quiz(&self, result: &QuizResult) -> Result<String> {
        let mut output = self.format_header("🧠 APTITUDE TEST RESULT", 1);

        let verdict = if result.passed {
            self.colorize("PASSED", Color::Green)
        } else {
            self.colorize("NOT PASSED", Color::Red)
        };
        output.push_str(&format!(
            "\nScore: {} ({:.0}%) {}\n",
            self.colorize(&format!("{}/{}", result.score, result.total), Color::Cyan),
            result.percentage,
            verdict
        ));
        output.push_str(&format!("Time taken: {}\n", format_time(result.time_taken)));

        output.push_str(&self.format_header("By category", 2));
        for category in &result.category_breakdown {
            output.push_str(&format!(
                "  {:<18} {}/{}\n",
                category.category.to_string(),
                category.correct,
                category.total
            ));
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_quiz(&self, result: &QuizResult) -> Result<String> {
        self.to_json(result)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn bullet_list(items: &[String]) -> String {
        items.iter().map(|item| format!("- {}\n", item)).collect()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut content = String::new();

        content.push_str("# Resume Analysis Report\n\n");
        if self.include_metadata {
            content.push_str(&format!(
                "**File:** {} | **Generated:** {}\n\n",
                report.metadata.resume_file,
                report.generated_at_display()
            ));
        }

        content.push_str(&format!(
            "## Overall Score: {}/100 ({})\n\n",
            analysis.score,
            ScoreBand::of(analysis.score).label()
        ));
        content.push_str("| Component | Score |\n|-----------|-------|\n");
        content.push_str(&format!("| Completeness | {}% |\n", analysis.completeness));
        content.push_str(&format!("| ATS Compliance | {}% |\n", analysis.ats_compliance));
        content.push_str(&format!("| Keywords | {}% |\n", analysis.keywords));
        content.push_str(&format!("| Grammar | {}% |\n\n", analysis.grammar));

        content.push_str("## Sections\n\n");
        for (section, present) in analysis.sections.iter() {
            content.push_str(&format!("- [{}] {}\n", if present { "x" } else { " " }, section));
        }

        content.push_str("\n## Strengths\n\n");
        content.push_str(&Self::bullet_list(&analysis.strengths));

        content.push_str("\n## Areas for Improvement\n\n");
        content.push_str(&Self::bullet_list(&analysis.improvements));

        content.push_str("\n## Keywords\n\n");
        content.push_str(&format!(
            "**Found:** {}\n\n",
            if analysis.present_keywords.is_empty() {
                "none".to_string()
            } else {
                analysis.present_keywords.join(", ")
            }
        ));
        if !analysis.missing_keywords.is_empty() {
            content.push_str(&format!(
                "**Consider adding:** {}\n",
                analysis.missing_keywords.join(", ")
            ));
        }

        content.push_str("\n## ATS Checks\n\n| Check | Points |\n|-------|--------|\n");
        for check in &report.ats_checks {
            content.push_str(&format!("| {} | {}/{} |\n", check.criterion, check.awarded, check.max));
        }

        content.push_str("\n## Suggestions\n\n");
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            content.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }

        if self.include_metadata {
            content.push_str(&format!(
                "\n---\n*Generated by placement-prep v{} ({} words, {}ms)*\n",
                report.metadata.tool_version, analysis.word_count, report.metadata.processing_time_ms
            ));
        }

        Ok(content)
    }

    fn format_quiz(&self, result: &QuizResult) -> Result<String> {
        let mut content = String::from("# Aptitude Test Result\n\n");
        content.push_str(&format!(
            "**Score:** {}/{} ({:.0}%), {}\n\n",
            result.score,
            result.total,
            result.percentage,
            if result.passed { "passed" } else { "not passed" }
        ));
        content.push_str(&format!("**Time taken:** {}\n\n", format_time(result.time_taken)));
        content.push_str("| Category | Correct |\n|----------|---------|\n");
        for category in &result.category_breakdown {
            content.push_str(&format!(
                "| {} | {}/{} |\n",
                category.category, category.correct, category.total
            ));
        }
        Ok(content)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn analysis_template(&self, report: &AnalysisReport, detailed: bool) -> AnalysisHtml {
        let analysis = &report.analysis;
        let band = ScoreBand::of(analysis.score);

        AnalysisHtml {
            include_styles: self.include_styles,
            detailed,
            resume_file: report.metadata.resume_file.clone(),
            generated_at: report.generated_at_display(),
            score: analysis.score,
            score_class: band.css_class(),
            score_label: band.label(),
            completeness: analysis.completeness,
            ats_compliance: analysis.ats_compliance,
            keywords: analysis.keywords,
            grammar: analysis.grammar,
            word_count: analysis.word_count,
            sections: analysis
                .sections
                .iter()
                .map(|(section, present)| SectionRow {
                    name: section.to_string(),
                    present,
                })
                .collect(),
            strengths: analysis.strengths.clone(),
            improvements: analysis.improvements.clone(),
            present_keywords: analysis.present_keywords.clone(),
            missing_keywords: analysis.missing_keywords.clone(),
            has_missing: !analysis.missing_keywords.is_empty(),
            ats_checks: report.ats_checks.clone(),
            suggestions: analysis.suggestions.clone(),
            version: report.metadata.tool_version.clone(),
            processing_time: report.metadata.processing_time_ms,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        self.analysis_template(report, true)
            .render()
            .map_err(|e| PlacementError::OutputFormatting(e.to_string()))
    }

    fn format_quiz(&self, result: &QuizResult) -> Result<String> {
        let template = QuizHtml {
            score: result.score,
            total: result.total,
            percentage: format!("{:.0}", result.percentage),
            passed: result.passed,
            time_taken: format_time(result.time_taken),
            categories: result
                .category_breakdown
                .iter()
                .map(|c| CategoryRow {
                    name: c.category.to_string(),
                    correct: c.correct,
                    total: c.total,
                })
                .collect(),
        };
        template
            .render()
            .map_err(|e| PlacementError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_analysis(report)
    }

    pub fn generate_quiz_report(&self, result: &QuizResult, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_quiz(result)
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }

    pub fn json(&self) -> &JsonFormatter {
        &self.json_formatter
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}
