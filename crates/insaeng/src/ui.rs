//! Screen rendering for the insaeng TUI.

use insaeng_core::{FontScale, weeks_remaining};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Renders the banner screen: art, date entry, reminder, intro animation.
pub(crate) fn render_home(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let banner_height = app.banner.lines().count() as u16;

    let chunks = Layout::vertical([
        Constraint::Length(1),             // title
        Constraint::Length(banner_height), // banner art
        Constraint::Length(1),             // spacing
        Constraint::Length(1),             // date prompt + entry
        Constraint::Length(1),             // reminder
        Constraint::Fill(1),               // intro animation
        Constraint::Length(1),             // message line
        Constraint::Length(1),             // help
    ])
    .split(area);

    render_title(app, frame, chunks[0]);
    let banner = Paragraph::new(app.banner).alignment(Alignment::Center);
    frame.render_widget(banner, chunks[1]);
    render_entry(app, frame, chunks[3]);
    render_reminder(app, frame, chunks[4]);
    app.intro.render(frame, chunks[5]);
    render_message(app, frame, chunks[6]);
    render_help(app, frame, chunks[7]);
}

/// Renders the life grid screen for a submitted birth date.
pub(crate) fn render_grid(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // result line
        Constraint::Length(1), // reminder
        Constraint::Fill(1),   // the life grid
        Constraint::Length(1), // message line
        Constraint::Length(1), // help
    ])
    .split(area);

    render_title(app, frame, chunks[0]);

    let lived = app.weeks_lived.unwrap_or(0);
    let result = Paragraph::new(app.language.result_text(lived, weeks_remaining(lived)))
        .style(emphasis(app.font_scale))
        .alignment(Alignment::Center);
    frame.render_widget(result, chunks[1]);

    render_reminder(app, frame, chunks[2]);
    insaeng_grid::render_weeks(frame, chunks[3], lived);
    render_message(app, frame, chunks[4]);
    render_help(app, frame, chunks[5]);
}

fn render_title(app: &App, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(app.language.title())
        .style(Style::new().bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_entry(app: &App, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw(app.language.birth_prompt()),
        Span::raw(" "),
        Span::styled(app.input.clone(), Style::new().fg(Color::Yellow)),
        Span::styled("▏", Style::new().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line).style(emphasis(app.font_scale)), area);
}

/// The reminder line: italic blue while rotating, bold red while paused.
fn render_reminder(app: &App, frame: &mut Frame, area: Rect) {
    let style = if app.reminder_paused {
        Style::new().fg(Color::Red).bold()
    } else {
        Style::new().fg(Color::Blue).italic()
    };
    let reminder = Paragraph::new(app.reminder)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(reminder, area);
}

/// The inline invalid-date message, blank unless the last submit failed.
fn render_message(app: &App, frame: &mut Frame, area: Rect) {
    if !app.invalid_input {
        return;
    }
    let message = Paragraph::new(app.language.invalid_date())
        .style(Style::new().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

fn render_help(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.language;
    let help = Line::from(vec![
        "enter".bold(),
        format!(" {}  ", lang.submit_label()).dark_gray(),
        "h".bold(),
        format!(" {}  ", lang.home_label()).dark_gray(),
        "l".bold(),
        format!(" {}  ", lang.language_label()).dark_gray(),
        "f".bold(),
        format!(" {}  ", lang.font_label()).dark_gray(),
        "p".bold(),
        format!(" {}  ", lang.pause_label()).dark_gray(),
        "q".bold(),
        format!(" {}", lang.quit_label()).dark_gray(),
    ])
    .centered();
    frame.render_widget(Paragraph::new(help), area);
}

/// Map the font-size toggle onto text emphasis.
fn emphasis(scale: FontScale) -> Style {
    match scale {
        FontScale::Small => Style::new().dim(),
        FontScale::Medium => Style::new(),
        FontScale::Large => Style::new().bold(),
    }
}
