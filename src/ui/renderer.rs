use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    App,
    sequence::{at_content, find_palindromes, sequence_statistics, DEFAULT_PALINDROME_MIN_LENGTH},
    ui::{get_base_color, get_classification_color, transcript_tail},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let main_horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Percentage(70),
            Constraint::Percentage(30),
        ])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(main_horizontal_split[0]);

    render_title(f, app, chunks[0]);
    render_transcript(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);
    render_sequence_analysis(f, app, main_horizontal_split[1]);
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let spans = vec![
        Span::styled("DnaZap", Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::styled(app.step.title(), Style::default().fg(Color::Green)),
    ];

    let title_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    let visible_rows = area.height.saturating_sub(2) as usize;
    let transcript_widget = Paragraph::new(transcript_tail(&app.transcript, visible_rows))
        .block(Block::default().title("Session").borders(Borders::ALL));
    f.render_widget(transcript_widget, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input_widget = Paragraph::new(vec![Line::from(vec![
        Span::styled(app.input.clone(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ])])
    .block(Block::default().title(app.step.prompt()).borders(Borders::ALL));
    f.render_widget(input_widget, area);
}

fn render_sequence_analysis(f: &mut Frame, app: &App, area: Rect) {
    let Some(sequence) = &app.current_sequence else {
        let empty_widget = Paragraph::new(vec![Line::from(vec![
            Span::styled("No sequence entered yet", Style::default().fg(Color::DarkGray)),
        ])])
        .block(Block::default().title("Sequence Analysis").borders(Borders::ALL));
        f.render_widget(empty_widget, area);
        return;
    };

    let stats = sequence_statistics(sequence);
    let palindrome_count = find_palindromes(sequence, DEFAULT_PALINDROME_MIN_LENGTH).len();
    let classification = stats.classification.label();

    let mut composition_lines = vec![
        Line::from(vec![
            Span::styled("Composition Analysis", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![
            Span::raw("Length: "),
            Span::styled(stats.length.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("GC Content: "),
            Span::styled(format!("{:.1}%", stats.gc_content), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("AT Content: "),
            Span::styled(format!("{:.1}%", at_content(sequence)), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("AT/GC Ratio: "),
            Span::styled(
                stats.at_gc_ratio.value().map_or_else(|| "Undefined".to_string(), |ratio| format!("{ratio:.2}")),
                Style::default().fg(Color::Blue),
            ),
        ]),
        Line::from(vec![
            Span::raw("Classification: "),
            Span::styled(classification, Style::default().fg(get_classification_color(classification))),
        ]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![
            Span::styled("Base Composition:", Style::default().fg(Color::Cyan)),
        ]),
    ];

    for base in &stats.base_composition {
        composition_lines.push(Line::from(vec![
            Span::styled(format!("{}: ", base.base), Style::default().fg(get_base_color(base.base))),
            Span::raw(format!("{} ({:.2}%)", base.count, base.percentage)),
        ]));
    }

    composition_lines.push(Line::from(vec![Span::raw("")]));
    composition_lines.push(Line::from(vec![
        Span::raw("Palindromes: "),
        Span::styled(palindrome_count.to_string(), Style::default().fg(Color::Magenta)),
    ]));

    let composition_widget = Paragraph::new(composition_lines)
        .block(Block::default().title("Sequence Analysis").borders(Borders::ALL));
    f.render_widget(composition_widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = if app.is_running() {
        "Type and press Enter to submit. Esc returns to the main menu, Ctrl-C quits."
    } else {
        "Session ended."
    };

    let status_widget = Paragraph::new(vec![Line::from(vec![
        Span::styled(status_text, Style::default().fg(Color::White)),
    ])])
    .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}
