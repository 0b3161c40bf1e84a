use crate::config::UiConfig;
use crate::locale::Locale;
use crate::ui::form::{FormIntent, FormPhase, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::view::{render, FormView};

/// Share of the remaining distance the marker covers per tick.
const MARKER_EASING: f64 = 0.3;
const MARKER_SNAP: f64 = 0.002;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Focus {
    #[default]
    Height,
    Weight,
    Calculate,
    Reset,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Height => Focus::Weight,
            Focus::Weight => Focus::Calculate,
            Focus::Calculate => Focus::Reset,
            Focus::Reset => Focus::Height,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Height => Focus::Reset,
            Focus::Weight => Focus::Height,
            Focus::Calculate => Focus::Weight,
            Focus::Reset => Focus::Calculate,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    locale: Locale,
    animate_marker: bool,
    /// Form state (MVI pattern).
    form: FormState,
    /// Marker position currently on screen; trails the result on ticks.
    marker: f64,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            locale: config.locale,
            animate_marker: config.animate_marker,
            form: FormState::default(),
            marker: 0.0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Screen content, with the marker at its eased position.
    pub fn view(&self) -> FormView {
        let mut view = render(&self.form, self.locale);
        if let Some(result) = view.result.as_mut() {
            result.marker = self.marker;
        }
        view
    }

    pub fn type_char(&mut self, ch: char) {
        match self.focus {
            Focus::Height => {
                let mut text = self.form.inputs.height.clone();
                text.push(ch);
                dispatch_mvi!(self, form, FormReducer, FormIntent::EditHeight(text));
            }
            Focus::Weight => {
                let mut text = self.form.inputs.weight.clone();
                text.push(ch);
                dispatch_mvi!(self, form, FormReducer, FormIntent::EditWeight(text));
            }
            Focus::Calculate | Focus::Reset => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Height => {
                let mut text = self.form.inputs.height.clone();
                text.pop();
                dispatch_mvi!(self, form, FormReducer, FormIntent::EditHeight(text));
            }
            Focus::Weight => {
                let mut text = self.form.inputs.weight.clone();
                text.pop();
                dispatch_mvi!(self, form, FormReducer, FormIntent::EditWeight(text));
            }
            Focus::Calculate | Focus::Reset => {}
        }
    }

    pub fn calculate(&mut self) {
        if !self.form.can_calculate() {
            tracing::debug!("Calculate ignored: a field is empty");
            return;
        }
        let had_result = self.form.result().is_some();
        dispatch_mvi!(self, form, FormReducer, FormIntent::Calculate);

        match (self.form.phase(), self.form.result(), self.form.error()) {
            (FormPhase::Computed, Some(result), _) => {
                tracing::info!(
                    height = %self.form.inputs.height,
                    weight = %self.form.inputs.weight,
                    bmi = result.value,
                    category = ?result.category,
                    "BMI calculated"
                );
                let target = result.scale_position();
                if !self.animate_marker {
                    self.marker = target;
                } else if !had_result {
                    self.marker = 0.0;
                }
            }
            (_, _, Some(error)) => {
                tracing::debug!(reason = error.reason(), "Validation failed");
            }
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Reset);
        self.marker = 0.0;
        self.focus = Focus::Height;
        tracing::info!("Form reset");
    }

    /// Enter: press the focused button, or calculate from a field.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Reset => self.reset(),
            Focus::Height | Focus::Weight | Focus::Calculate => self.calculate(),
        }
    }

    pub fn on_tick(&mut self) {
        let Some(target) = self.form.result().map(|result| result.scale_position()) else {
            return;
        };
        let remaining = target - self.marker;
        if remaining.abs() < MARKER_SNAP {
            self.marker = target;
        } else {
            self.marker += remaining * MARKER_EASING;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::{Outcome, RawInputs};

    fn app(animate_marker: bool) -> App {
        App::new(&UiConfig {
            animate_marker,
            ..UiConfig::default()
        })
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.type_char(ch);
        }
    }

    fn marker(app: &App) -> Option<f64> {
        app.view().result.map(|result| result.marker)
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut app = app(true);
        type_str(&mut app, "170");
        app.focus_next();
        type_str(&mut app, "70");
        assert_eq!(app.form().inputs.height, "170");
        assert_eq!(app.form().inputs.weight, "70");

        app.backspace();
        assert_eq!(app.form().inputs.weight, "7");
    }

    #[test]
    fn typing_on_buttons_is_ignored() {
        let mut app = app(true);
        app.focus_prev();
        assert_eq!(app.focus(), Focus::Reset);
        type_str(&mut app, "12");
        app.backspace();
        assert_eq!(app.form().inputs, RawInputs::default());
    }

    #[test]
    fn marker_eases_towards_target() {
        let mut app = app(true);
        type_str(&mut app, "150");
        app.focus_next();
        type_str(&mut app, "45");
        app.activate();

        assert_eq!(marker(&app), Some(0.0));
        app.on_tick();
        let first = marker(&app).unwrap();
        assert!(first > 0.0 && first < 0.5);
        for _ in 0..100 {
            app.on_tick();
        }
        assert_eq!(marker(&app), Some(0.5));
    }

    #[test]
    fn marker_jumps_without_animation() {
        let mut app = app(false);
        type_str(&mut app, "150");
        app.focus_next();
        type_str(&mut app, "45");
        app.calculate();
        assert_eq!(marker(&app), Some(0.5));
    }

    #[test]
    fn reset_button_clears_everything() {
        let mut app = app(true);
        type_str(&mut app, "99");
        app.focus_next();
        type_str(&mut app, "70");
        app.calculate();
        assert!(matches!(app.form().outcome, Outcome::Error(_)));

        app.focus_next();
        app.focus_next();
        assert_eq!(app.focus(), Focus::Reset);
        app.activate();
        assert_eq!(app.form(), &FormState::default());
        assert_eq!(app.focus(), Focus::Height);
        assert_eq!(marker(&app), None);
    }
}
