use std::ops::Range;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use water_survey::{Choice, Field, NPS_MAX, Phase, RATING_MAX, Step, SurveyResponse, SurveyView};

use crate::backend::Theme;
use crate::input::{Control, WizardUi, controls};

/// Everything needed to draw one frame.
pub(crate) struct Screen<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
    pub view: &'a SurveyView,
    pub ui: &'a WizardUi,
}

pub(crate) fn draw(frame: &mut Frame, screen: &Screen<'_>) {
    if screen.view.phase == Phase::Submitted {
        draw_thank_you(frame, screen);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(8),    // Content
            Constraint::Length(2), // Save error
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let theme = screen.theme;
    let header = Paragraph::new(screen.title)
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    draw_progress(frame, screen, chunks[1]);

    match screen.view.phase {
        Phase::Editing(Step::Review) => draw_review(frame, screen, chunks[2]),
        Phase::Editing(step) => draw_step(frame, screen, step, chunks[2]),
        Phase::Submitting => draw_saving(frame, screen, chunks[2]),
        Phase::Submitted => {}
    }

    if let Some(error) = &screen.view.wizard.save_error {
        let error_widget = Paragraph::new(error.as_str())
            .style(Style::default().fg(theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, chunks[3]);
    }

    let help = Paragraph::new(help_text(screen))
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[4]);
}

fn draw_progress(frame: &mut Frame, screen: &Screen<'_>, area: Rect) {
    let theme = screen.theme;
    let bar_width = area.width.saturating_sub(2);
    let bar_x = area.x + 1;
    let filled_width = ((screen.view.progress_percent / 100.0) * f64::from(bar_width)) as u16;

    let track = "─".repeat(bar_width as usize);
    let track_widget = Paragraph::new(track).style(Style::default().fg(theme.border));
    frame.render_widget(track_widget, Rect::new(bar_x, area.y, bar_width, 1));

    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        let filled_widget = Paragraph::new(filled).style(Style::default().fg(theme.primary));
        frame.render_widget(filled_widget, Rect::new(bar_x, area.y, filled_width, 1));
    }

    let caption = format!(" {} ", screen.view.wizard.step.caption());
    let caption_width = (caption.chars().count() as u16).min(bar_width);
    let caption_x = bar_x + bar_width.saturating_sub(caption_width) / 2;
    let caption_widget = Paragraph::new(caption).style(Style::default().fg(theme.secondary));
    frame.render_widget(
        caption_widget,
        Rect::new(caption_x, area.y + 1, caption_width, 1),
    );
}

fn draw_step(frame: &mut Frame, screen: &Screen<'_>, step: Step, area: Rect) {
    let theme = screen.theme;
    let focus = screen.ui.focus();
    let mut lines = Vec::new();
    let mut focused_rows = 0..0;

    for (index, control) in controls(step).into_iter().enumerate() {
        let focused = index == focus;
        let first_row = lines.len();
        let marker = if focused { "► " } else { "  " };
        let label_style = if focused {
            Style::default().fg(theme.highlight).bold()
        } else {
            Style::default().fg(theme.text)
        };
        let mut value = control_value(&screen.view.response, control);
        if focused && matches!(control, Control::Text(_)) {
            value.push('▏');
        }

        lines.push(Line::from(Span::styled(
            format!("{marker}{}", control.label()),
            label_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {value}"),
            Style::default().fg(theme.secondary),
        )));

        if let Some(hint) = screen.view.hint(control.field()) {
            lines.push(Line::from(Span::styled(
                format!("    {hint}"),
                Style::default().fg(theme.error),
            )));
        }
        if focused {
            focused_rows = first_row..lines.len();
        }
    }

    if step == Step::Comments && !screen.view.can_advance {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "    Tell us a little more before continuing.",
            Style::default().fg(theme.border),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(format!(" {} ", step.label()))
        .title_style(Style::default().fg(theme.highlight));
    let visible = area.height.saturating_sub(2);
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset(focused_rows, visible), 0));
    frame.render_widget(widget, area);
}

/// First row to show so that the focused control fits in `visible` rows.
fn scroll_offset(focused_rows: Range<usize>, visible: u16) -> u16 {
    let visible = usize::from(visible);
    let offset = if focused_rows.end > visible {
        (focused_rows.end - visible).min(focused_rows.start)
    } else {
        0
    };
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn control_value(response: &SurveyResponse, control: Control) -> String {
    match control {
        Control::Text(field) => response
            .get(field)
            .as_str()
            .unwrap_or_default()
            .to_string(),
        Control::Choice(Field::Zone) => format!("◀ {} ▶", response.zone().label()),
        Control::Choice(Field::Purpose) => format!("◀ {} ▶", response.purpose().label()),
        Control::Choice(_) => format!("◀ {} ▶", response.experience().label()),
        Control::Nps => format!("◀ {} / {NPS_MAX} ▶", response.nps()),
        Control::Topic(topic) => {
            let rating = response.topics().get(topic);
            format!(
                "{}{} {rating} / {RATING_MAX}",
                "★".repeat(usize::from(rating)),
                "☆".repeat(usize::from(RATING_MAX - rating)),
            )
        }
        Control::Toggle(field) => {
            if response.get(field).as_bool().unwrap_or_default() {
                "[✓] Yes".to_string()
            } else {
                "[ ] No".to_string()
            }
        }
    }
}

fn draw_review(frame: &mut Frame, screen: &Screen<'_>, area: Rect) {
    let theme = screen.theme;
    let lines: Vec<Line> = screen
        .view
        .review_rows()
        .into_iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(format!("  {:<22}", row.label), Style::default().fg(theme.text)),
                Span::styled(row.value, Style::default().fg(theme.secondary)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(" Review your answers ")
        .title_style(Style::default().fg(theme.highlight));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_saving(frame: &mut Frame, screen: &Screen<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(screen.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(inner);
    let text = Paragraph::new("Saving your response...")
        .style(Style::default().fg(screen.theme.highlight))
        .alignment(Alignment::Center);
    frame.render_widget(text, centered[1]);
}

fn draw_thank_you(frame: &mut Frame, screen: &Screen<'_>) {
    let area = frame.area();
    let theme = screen.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(" Thank you ")
        .title_style(Style::default().fg(theme.success).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = format!(
        "{}\n\nEnter: start a new survey  Esc: quit",
        screen.view.thank_you_message()
    );
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(6),
            Constraint::Percentage(30),
        ])
        .split(inner);
    frame.render_widget(paragraph, centered[1]);
}

fn help_text(screen: &Screen<'_>) -> &'static str {
    let step = match screen.view.phase {
        Phase::Editing(step) => step,
        Phase::Submitting => return "Please wait",
        Phase::Submitted => return "Enter: New survey  Esc: Quit",
    };
    match screen.ui.focused(step) {
        None => "Enter: Submit survey  Esc: Back  Ctrl+C: Quit",
        Some(Control::Text(_)) => "Type to edit  ↑/↓: Move  Enter: Continue  Esc: Back",
        Some(Control::Choice(_) | Control::Nps) => {
            "←/→: Change  ↑/↓: Move  Enter: Continue  Esc: Back"
        }
        Some(Control::Topic(_)) => "←/→ or 1-5: Rate  ↑/↓: Move  Enter: Continue  Esc: Back",
        Some(Control::Toggle(_)) => "Space: Toggle  ↑/↓: Move  Enter: Continue  Esc: Back",
    }
}
