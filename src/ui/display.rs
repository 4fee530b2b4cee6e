//! Display formatting functions for the UI

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use crate::app::OutputLine;
use crate::ui::colors::get_base_color;

/// Color each base of a sequence individually
pub fn colored_sequence(sequence: &str) -> Vec<Span<'static>> {
    sequence
        .chars()
        .map(|base| Span::styled(base.to_string(), Style::default().fg(get_base_color(base))))
        .collect()
}

/// Render one transcript entry as a styled line
pub fn transcript_line(entry: &OutputLine) -> Line<'static> {
    match entry {
        OutputLine::Heading(text) => Line::from(vec![
            Span::styled(text.clone(), Style::default().fg(Color::Cyan)),
        ]),
        OutputLine::Text(text) => Line::from(vec![Span::raw(text.clone())]),
        OutputLine::Error(text) => Line::from(vec![
            Span::styled(text.clone(), Style::default().fg(Color::Red)),
        ]),
        OutputLine::Sequence { label, sequence } => {
            let mut spans = vec![Span::raw(format!("{label}: "))];
            spans.extend(colored_sequence(sequence));
            Line::from(spans)
        }
        OutputLine::Echo { prompt, input } => Line::from(vec![
            Span::styled(format!("{prompt}: "), Style::default().fg(Color::DarkGray)),
            Span::styled(input.clone(), Style::default().fg(Color::White)),
        ]),
    }
}

/// Lines from the end of the transcript that fit in `height` rows
pub fn transcript_tail(transcript: &[OutputLine], height: usize) -> Vec<Line<'static>> {
    let start = transcript.len().saturating_sub(height);
    transcript[start..].iter().map(transcript_line).collect()
}
