//! Lipid panel input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{evaluate, EvaluationResult, ValidationError};
use crate::tui::styles::LipidTheme;

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
}

/// Entry form state for the three laboratory values.
pub struct FormState {
    pub fields: [FormField; 3],
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: [
                FormField {
                    label: "Total Cholesterol",
                    hint: "mg/dL",
                    value: String::new(),
                },
                FormField {
                    label: "HDL Cholesterol",
                    hint: "mg/dL (\"good\" fraction)",
                    value: String::new(),
                },
                FormField {
                    label: "Triglycerides",
                    hint: "mg/dL",
                    value: String::new(),
                },
            ],
            selected_field: 0,
            error_message: None,
        }
    }
}

impl FormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current field
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.fields[self.selected_field].value.push(c);
            self.error_message = None;
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        self.fields[self.selected_field].value.pop();
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        self.fields[self.selected_field].value.clear();
    }

    /// Parse and evaluate the current field values.
    ///
    /// Unparseable text becomes NaN so the domain validator is the single
    /// authority on what counts as a bad input; it reports the offending
    /// field either way.
    ///
    /// # Errors
    /// Returns the validation error for the first invalid field.
    pub fn submit(&self) -> Result<EvaluationResult, ValidationError> {
        let [total, hdl, trig] = &self.fields;
        evaluate(
            parse_or_nan(&total.value),
            parse_or_nan(&hdl.value),
            parse_or_nan(&trig.value),
        )
    }

    /// Load sample values (the classic worked example: LDL comes out 120).
    pub fn load_sample_data(&mut self) {
        let sample = ["200", "50", "150"];
        for (field, val) in self.fields.iter_mut().zip(sample) {
            field.value = val.to_string();
        }
        self.error_message = None;
    }
}

fn parse_or_nan(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Render the lipid panel entry form
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Fields
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", LipidTheme::text()),
        Span::styled("Lipid Panel Entry", LipidTheme::title()),
        Span::styled(
            " │ Friedewald LDL Estimation",
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

fn render_form_fields(f: &mut Frame, area: Rect, state: &FormState) {
    let constraints: Vec<Constraint> = state
        .fields
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (i, field) in state.fields.iter().enumerate() {
        let is_selected = i == state.selected_field;
        let border_style = if is_selected {
            LipidTheme::border_focused()
        } else {
            LipidTheme::border()
        };
        let title_style = if is_selected {
            LipidTheme::focused()
        } else {
            LipidTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value_display = if field.value.is_empty() {
            Span::styled(field.hint, LipidTheme::text_muted())
        } else {
            Span::styled(&field.value, LipidTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected {
                Span::styled("▌", LipidTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &FormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", LipidTheme::danger()),
            Span::styled(err.clone(), LipidTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", LipidTheme::key_hint()),
            Span::styled("Navigate ", LipidTheme::key_desc()),
            Span::styled("[Enter] ", LipidTheme::key_hint()),
            Span::styled("Calculate ", LipidTheme::key_desc()),
            Span::styled("[S] ", LipidTheme::key_hint()),
            Span::styled("Sample Values ", LipidTheme::key_desc()),
            Span::styled("[Esc] ", LipidTheme::key_hint()),
            Span::styled("Quit", LipidTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(LipidTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Field, Recommendation};

    #[test]
    fn test_submit_parses_and_evaluates() {
        let mut state = FormState::default();
        state.load_sample_data();

        let result = state.submit().expect("Sample values should evaluate");
        assert_eq!(result.ldl, 120.0);
        assert_eq!(result.recommendation, Recommendation::GenerallyHealthy);
    }

    #[test]
    fn test_submit_reports_unparseable_field() {
        let mut state = FormState::default();
        state.load_sample_data();
        state.fields[1].value = "4..2".to_string();

        let err = state.submit().unwrap_err();
        assert_eq!(err, ValidationError::NotANumber { field: Field::Hdl });
    }

    #[test]
    fn test_submit_reports_empty_field() {
        let mut state = FormState::default();
        state.load_sample_data();
        state.fields[2].value.clear();

        let err = state.submit().unwrap_err();
        assert_eq!(err.field(), Field::Triglycerides);
    }

    #[test]
    fn test_input_char_accepts_numeric_only() {
        let mut state = FormState::default();
        state.input_char('1');
        state.input_char('x');
        state.input_char('.');
        state.input_char('5');
        assert_eq!(state.fields[0].value, "1.5");
    }
}
