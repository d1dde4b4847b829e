//! Results view: derived values, per-metric interpretation, recommendation.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{EvaluationResult, Recommendation};
use crate::tui::styles::LipidTheme;

/// One completed evaluation, as shown on screen.
#[derive(Debug, Clone)]
pub struct ResultsView {
    pub result: EvaluationResult,
    pub evaluated_at: DateTime<Local>,
}

impl ResultsView {
    /// Capture an evaluation at the current local time.
    #[must_use]
    pub fn new(result: EvaluationResult) -> Self {
        Self {
            result,
            evaluated_at: Local::now(),
        }
    }
}

/// Render the results screen
pub fn render_results(f: &mut Frame, area: Rect, view: &ResultsView) {
    let warning_height = if view.result.accuracy_warning { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Length(warning_height), // Accuracy warning banner
            Constraint::Min(0),                 // Values + interpretation
            Constraint::Length(4),              // Recommendation
            Constraint::Length(3),              // Footer
        ])
        .split(area);

    render_results_header(f, chunks[0], view);
    if view.result.accuracy_warning {
        render_warning_banner(f, chunks[1]);
    }
    render_panels(f, chunks[2], &view.result);
    render_recommendation(f, chunks[3], view.result.recommendation);
    render_results_footer(f, chunks[4]);
}

fn render_results_header(f: &mut Frame, area: Rect, view: &ResultsView) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", LipidTheme::text()),
        Span::styled("Your Cholesterol Results", LipidTheme::title()),
        Span::styled(
            format!(" │ {}", view.evaluated_at.format("%Y-%m-%d %H:%M")),
            LipidTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(LipidTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_warning_banner(f: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(Span::styled(
        "Triglycerides above 400 mg/dL: the Friedewald formula may not be accurate. \
         Consult your doctor for more precise testing.",
        LipidTheme::warning(),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(LipidTheme::warning()),
    );

    f.render_widget(banner, area);
}

fn render_panels(f: &mut Frame, area: Rect, result: &EvaluationResult) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_values_panel(f, columns[0], result);
    render_interpretation_panel(f, columns[1], result);
}

fn value_line(label: &'static str, value: f64, style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<18}"), LipidTheme::text_secondary()),
        Span::styled(format!("{value:>7.1} mg/dL"), style),
    ])
}

fn render_values_panel(f: &mut Frame, area: Rect, result: &EvaluationResult) {
    let block = Block::default()
        .title(Span::styled(" Values ", LipidTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(LipidTheme::border());

    // Inputs render neutral; the derived and classified values carry their
    // styling color.
    let lines = vec![
        value_line("Total Cholesterol:", result.total_cholesterol, LipidTheme::text()),
        value_line("HDL (\"Good\"):", result.hdl, LipidTheme::text()),
        value_line(
            "LDL (\"Bad\"):",
            result.ldl,
            LipidTheme::styling(result.ldl_band.styling()),
        ),
        value_line("VLDL:", result.vldl, LipidTheme::text()),
        value_line(
            "Triglycerides:",
            result.triglycerides,
            LipidTheme::styling(result.triglyceride_band.styling()),
        ),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn interpretation_line(label: &'static str, text: &'static str, style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<18}"), LipidTheme::text_secondary()),
        Span::styled(text, style),
    ])
}

fn render_interpretation_panel(f: &mut Frame, area: Rect, result: &EvaluationResult) {
    let block = Block::default()
        .title(Span::styled(" Interpretation ", LipidTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(LipidTheme::border());

    let lines = vec![
        interpretation_line(
            "LDL Cholesterol:",
            result.ldl_band.description(),
            LipidTheme::styling(result.ldl_band.styling()),
        ),
        interpretation_line(
            "HDL Cholesterol:",
            result.hdl_band.description(),
            LipidTheme::styling(result.hdl_band.styling()),
        ),
        interpretation_line(
            "Triglycerides:",
            result.triglyceride_band.description(),
            LipidTheme::styling(result.triglyceride_band.styling()),
        ),
        interpretation_line(
            "Total Cholesterol:",
            result.total_cholesterol_band.description(),
            LipidTheme::styling(result.total_cholesterol_band.styling()),
        ),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_recommendation(f: &mut Frame, area: Rect, recommendation: Recommendation) {
    let style = match recommendation {
        Recommendation::Elevated => LipidTheme::danger(),
        Recommendation::GenerallyHealthy => LipidTheme::styling(crate::domain::Styling::Normal),
    };

    let note = Paragraph::new(vec![Line::from(vec![
        Span::styled("Recommendation: ", LipidTheme::text_secondary()),
        Span::styled(recommendation.description(), style),
    ])])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Left)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(LipidTheme::border()),
    );

    f.render_widget(note, area);
}

fn render_results_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[N] ", LipidTheme::key_hint()),
        Span::styled("New Calculation ", LipidTheme::key_desc()),
        Span::styled("[Esc] ", LipidTheme::key_hint()),
        Span::styled("Back to Form ", LipidTheme::key_desc()),
        Span::styled("[Q] ", LipidTheme::key_hint()),
        Span::styled("Quit", LipidTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(LipidTheme::border()),
    );

    f.render_widget(footer, area);
}
