//! Keyboard handling for the wizard.
//!
//! Keys are mapped onto `SurveyStore` operations here, without a terminal, so
//! the mapping can be tested directly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;
use water_survey::{
    Advance, Choice, Field, NPS_MAX, NPS_MIN, Phase, RATING_MAX, RATING_MIN, Step, SurveyStore,
    Topic, Transport,
};

/// One editable row on a step screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Free text, edited by typing.
    Text(Field),
    /// One of a closed set of options, cycled with Left/Right.
    Choice(Field),
    /// The 1..=10 recommendation score.
    Nps,
    /// A 1..=5 topic rating.
    Topic(Topic),
    /// A yes/no switch.
    Toggle(Field),
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Text(field) | Control::Choice(field) | Control::Toggle(field) => field.label(),
            Control::Nps => Field::Nps.label(),
            Control::Topic(topic) => topic.label(),
        }
    }

    /// The field whose hint belongs under this control.
    pub fn field(self) -> Field {
        match self {
            Control::Text(field) | Control::Choice(field) | Control::Toggle(field) => field,
            Control::Nps => Field::Nps,
            Control::Topic(_) => Field::Topics,
        }
    }
}

/// The controls shown on a step, top to bottom.
pub fn controls(step: Step) -> Vec<Control> {
    step.fields()
        .iter()
        .flat_map(|&field| match field {
            Field::Nps => vec![Control::Nps],
            Field::Topics => Topic::ALL.iter().copied().map(Control::Topic).collect(),
            Field::FollowUp => vec![Control::Toggle(field)],
            field if field.is_text() => vec![Control::Text(field)],
            field => vec![Control::Choice(field)],
        })
        .collect()
}

/// What the run loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Redraw and wait for the next key.
    Continue,
    /// Draw the saving screen, then send the response.
    Submit,
    /// Leave the wizard.
    Quit,
}

/// Per-session UI state that is not part of the survey itself.
#[derive(Debug, Clone, Default)]
pub struct WizardUi {
    focus: usize,
}

impl WizardUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the focused control on the current step.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self, step: Step) -> Option<Control> {
        controls(step).get(self.focus).copied()
    }

    pub fn handle_key<T: Transport>(
        &mut self,
        store: &mut SurveyStore<T>,
        key: KeyEvent,
    ) -> UiCommand {
        if key.kind != KeyEventKind::Press {
            return UiCommand::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return UiCommand::Quit;
        }

        match store.wizard().phase() {
            Phase::Submitting => UiCommand::Continue,
            Phase::Submitted => match key.code {
                KeyCode::Enter => {
                    if store.reset() {
                        self.focus = 0;
                    }
                    UiCommand::Continue
                }
                KeyCode::Esc => UiCommand::Quit,
                _ => UiCommand::Continue,
            },
            Phase::Editing(step) => self.handle_step_key(store, step, key.code),
        }
    }

    fn handle_step_key<T: Transport>(
        &mut self,
        store: &mut SurveyStore<T>,
        step: Step,
        code: KeyCode,
    ) -> UiCommand {
        let count = controls(step).len();
        match code {
            KeyCode::Esc if step.prev().is_none() => return UiCommand::Quit,
            KeyCode::Esc => {
                if store.back() {
                    self.focus = 0;
                }
            }
            KeyCode::Enter if step.is_last() => {
                if store.can_advance() {
                    return UiCommand::Submit;
                }
            }
            KeyCode::Enter => match store.advance() {
                Advance::Moved(_) => self.focus = 0,
                outcome => debug!(?outcome, %step, "step not advanced"),
            },
            KeyCode::Up | KeyCode::BackTab => self.focus = self.focus.saturating_sub(1),
            KeyCode::Down | KeyCode::Tab => {
                if self.focus + 1 < count {
                    self.focus += 1;
                }
            }
            code => {
                if let Some(control) = self.focused(step) {
                    edit(store, control, code);
                }
            }
        }
        UiCommand::Continue
    }
}

fn edit<T: Transport>(store: &mut SurveyStore<T>, control: Control, code: KeyCode) {
    let response = store.response();
    let result = match (control, code) {
        (Control::Text(field), KeyCode::Char(c)) => {
            let mut text = response.get(field).as_str().unwrap_or_default().to_string();
            text.push(c);
            store.update_field(field, text)
        }
        (Control::Text(field), KeyCode::Backspace) => {
            let mut text = response.get(field).as_str().unwrap_or_default().to_string();
            if text.pop().is_none() {
                return;
            }
            store.update_field(field, text)
        }
        (Control::Choice(field), KeyCode::Left | KeyCode::Right) => {
            let forward = code == KeyCode::Right;
            let next = match field {
                Field::Zone => cycle(response.zone(), forward),
                Field::Purpose => cycle(response.purpose(), forward),
                Field::Experience => cycle(response.experience(), forward),
                _ => return,
            };
            store.update_field(field, next)
        }
        (Control::Nps, KeyCode::Left | KeyCode::Right) => {
            let nps = nudge(response.nps(), code == KeyCode::Right, NPS_MIN, NPS_MAX);
            store.update_field(Field::Nps, nps)
        }
        (Control::Topic(topic), KeyCode::Left | KeyCode::Right) => {
            let rating = response.topics().get(topic);
            let rating = nudge(rating, code == KeyCode::Right, RATING_MIN, RATING_MAX);
            store.update_topic(topic, rating)
        }
        (Control::Topic(topic), KeyCode::Char(c)) => match c.to_digit(10) {
            Some(digit) => store.update_topic(topic, digit as u8),
            None => return,
        },
        (Control::Toggle(field), KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) => {
            let on = response.get(field).as_bool().unwrap_or_default();
            store.update_field(field, !on)
        }
        _ => return,
    };

    if let Err(err) = result {
        debug!(error = %err, ?control, "edit rejected");
    }
}

fn cycle<C: Choice>(current: C, forward: bool) -> &'static str {
    if forward {
        current.next().as_str()
    } else {
        current.prev().as_str()
    }
}

fn nudge(value: u8, up: bool, min: u8, max: u8) -> u8 {
    if up {
        value.saturating_add(1).min(max)
    } else {
        value.saturating_sub(1).max(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use water_survey::{CollectorConfig, Experience, SubmissionClient, TestTransport, Zone};

    fn store(transport: &TestTransport) -> SurveyStore<TestTransport> {
        SurveyStore::new(SubmissionClient::new(
            CollectorConfig::new("http://collector.test/exec"),
            transport.clone(),
        ))
    }

    fn press(ui: &mut WizardUi, store: &mut SurveyStore<TestTransport>, code: KeyCode) -> UiCommand {
        ui.handle_key(store, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(ui: &mut WizardUi, store: &mut SurveyStore<TestTransport>, text: &str) {
        for c in text.chars() {
            press(ui, store, KeyCode::Char(c));
        }
    }

    /// Fill name and email on the account step, leaving focus on email.
    fn fill_account(ui: &mut WizardUi, store: &mut SurveyStore<TestTransport>) {
        type_text(ui, store, "Avery");
        for _ in 0..3 {
            press(ui, store, KeyCode::Down);
        }
        type_text(ui, store, "avery@email.com");
    }

    #[test]
    fn step_controls() {
        assert_eq!(
            controls(Step::Account),
            vec![
                Control::Text(Field::Name),
                Control::Text(Field::Phone),
                Control::Text(Field::AccountNumber),
                Control::Text(Field::Email),
                Control::Choice(Field::Zone),
                Control::Choice(Field::Purpose),
            ]
        );
        assert_eq!(controls(Step::Ratings).len(), 4);
        assert!(controls(Step::Review).is_empty());
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut store = store(&TestTransport::new());
        let mut ui = WizardUi::new();
        type_text(&mut ui, &mut store, "Avry");
        press(&mut ui, &mut store, KeyCode::Backspace);
        press(&mut ui, &mut store, KeyCode::Backspace);
        type_text(&mut ui, &mut store, "ery");
        assert_eq!(store.response().name(), "Avery");
    }

    #[test]
    fn focus_stays_in_range() {
        let mut store = store(&TestTransport::new());
        let mut ui = WizardUi::new();
        press(&mut ui, &mut store, KeyCode::Up);
        assert_eq!(ui.focus(), 0);
        for _ in 0..10 {
            press(&mut ui, &mut store, KeyCode::Down);
        }
        assert_eq!(ui.focus(), controls(Step::Account).len() - 1);
    }

    #[test]
    fn enter_advances_only_when_valid() {
        let mut store = store(&TestTransport::new());
        let mut ui = WizardUi::new();
        press(&mut ui, &mut store, KeyCode::Enter);
        assert_eq!(store.step(), Step::Account);

        fill_account(&mut ui, &mut store);
        assert_eq!(press(&mut ui, &mut store, KeyCode::Enter), UiCommand::Continue);
        assert_eq!(store.step(), Step::Service);
        assert_eq!(ui.focus(), 0);
    }

    #[test]
    fn left_right_cycle_choices_and_scores() {
        let mut store = store(&TestTransport::new());
        let mut ui = WizardUi::new();
        fill_account(&mut ui, &mut store);
        press(&mut ui, &mut store, KeyCode::Down);
        press(&mut ui, &mut store, KeyCode::Right);
        assert_eq!(store.response().zone(), Zone::North);
        press(&mut ui, &mut store, KeyCode::Left);
        press(&mut ui, &mut store, KeyCode::Left);
        assert_eq!(store.response().zone(), Zone::West);

        press(&mut ui, &mut store, KeyCode::Enter);
        press(&mut ui, &mut store, KeyCode::Left);
        assert_eq!(store.response().experience(), Experience::Excellent);

        press(&mut ui, &mut store, KeyCode::Down);
        press(&mut ui, &mut store, KeyCode::Right);
        press(&mut ui, &mut store, KeyCode::Right);
        press(&mut ui, &mut store, KeyCode::Right);
        assert_eq!(store.response().nps(), NPS_MAX);
    }

    #[test]
    fn digits_set_topic_rating() {
        let mut store = store(&TestTransport::new());
        let mut ui = WizardUi::new();
        fill_account(&mut ui, &mut store);
        press(&mut ui, &mut store, KeyCode::Enter);
        press(&mut ui, &mut store, KeyCode::Enter);
        assert_eq!(store.step(), Step::Ratings);

        press(&mut ui, &mut store, KeyCode::Char('2'));
        press(&mut ui, &mut store, KeyCode::Down);
        press(&mut ui, &mut store, KeyCode::Char('9'));
        press(&mut ui, &mut store, KeyCode::Right);
        assert_eq!(store.response().topics().get(Topic::Pressure), 2);
        assert_eq!(store.response().topics().get(Topic::Quality), 5);
    }

    #[test]
    fn esc_goes_back_then_quits() {
        let mut store = store(&TestTransport::new());
        let mut ui = WizardUi::new();
        fill_account(&mut ui, &mut store);
        press(&mut ui, &mut store, KeyCode::Enter);

        assert_eq!(press(&mut ui, &mut store, KeyCode::Esc), UiCommand::Continue);
        assert_eq!(store.step(), Step::Account);
        assert_eq!(press(&mut ui, &mut store, KeyCode::Esc), UiCommand::Quit);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut store = store(&TestTransport::new());
        let mut ui = WizardUi::new();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ui.handle_key(&mut store, key), UiCommand::Quit);
        assert_eq!(store.response().name(), "");
    }

    #[test]
    fn review_enter_requests_submit_then_thank_you_resets() {
        let transport = TestTransport::new();
        let mut store = store(&transport);
        let mut ui = WizardUi::new();
        fill_account(&mut ui, &mut store);
        press(&mut ui, &mut store, KeyCode::Enter);
        press(&mut ui, &mut store, KeyCode::Enter);
        press(&mut ui, &mut store, KeyCode::Enter);

        press(&mut ui, &mut store, KeyCode::Down);
        press(&mut ui, &mut store, KeyCode::Char(' '));
        assert!(!store.response().follow_up());
        press(&mut ui, &mut store, KeyCode::Up);
        type_text(&mut ui, &mut store, "Low pressure at night");
        press(&mut ui, &mut store, KeyCode::Enter);
        assert_eq!(store.step(), Step::Review);

        assert_eq!(press(&mut ui, &mut store, KeyCode::Enter), UiCommand::Submit);
        assert_eq!(transport.request_count(), 0);

        let pending = store.begin_submission().unwrap();
        assert_eq!(press(&mut ui, &mut store, KeyCode::Enter), UiCommand::Continue);
        assert_eq!(press(&mut ui, &mut store, KeyCode::Esc), UiCommand::Continue);
        assert_eq!(store.complete_submission(pending), Advance::Submitted);

        assert_eq!(press(&mut ui, &mut store, KeyCode::Enter), UiCommand::Continue);
        assert_eq!(store.step(), Step::Account);
        assert_eq!(store.response().name(), "");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut store = store(&TestTransport::new());
        let mut ui = WizardUi::new();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        ui.handle_key(&mut store, key);
        assert_eq!(store.response().name(), "");
    }
}
