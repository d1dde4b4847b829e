//! UI module: View components for the TUI.

pub mod form;
pub mod results;

use chrono::{Datelike, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::LipidTheme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: LDL is estimated via the Friedewald formula, not measured. \
             This tool does not replace professional medical evaluation.",
            LipidTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            format!("Lipidscope © {}", Local::now().year()),
            LipidTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(LipidTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
