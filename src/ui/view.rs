//! Pure projection of [`FormState`] into what the screen shows.
//!
//! Drawing code only ever sees a [`FormView`]; it never looks at the
//! form state directly.

use crate::bmi::Category;
use crate::locale::Locale;
use crate::ui::form::FormState;

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub height: String,
    pub weight: String,
    pub calculate_enabled: bool,
    pub error: Option<&'static str>,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub value: String,
    pub category: Category,
    pub label: &'static str,
    pub tip: &'static str,
    /// Marker position on the scale, `0.0..=1.0`. `render` places it at
    /// the result; the app moves it while the marker animates.
    pub marker: f64,
}

pub fn render(state: &FormState, locale: Locale) -> FormView {
    FormView {
        height: state.inputs.height.clone(),
        weight: state.inputs.weight.clone(),
        calculate_enabled: state.can_calculate(),
        error: state.error().map(|error| error.message(locale)),
        result: state.result().map(|result| ResultView {
            value: format_bmi(result.value),
            category: result.category,
            label: result.category.label(locale),
            tip: result.tip(locale),
            marker: result.scale_position(),
        }),
    }
}

/// Formats a rounded BMI the way a plain number prints: `20.0` becomes `20`.
pub fn format_bmi(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::ValidationError;
    use crate::ui::form::{FormIntent, FormReducer};
    use crate::ui::mvi::Reducer;

    fn state_with(height: &str, weight: &str) -> FormState {
        let state = FormReducer::reduce(
            FormState::default(),
            FormIntent::EditHeight(height.to_string()),
        );
        FormReducer::reduce(state, FormIntent::EditWeight(weight.to_string()))
    }

    #[test]
    fn idle_view_has_no_error_or_result() {
        let view = render(&FormState::default(), Locale::Ru);
        assert!(!view.calculate_enabled);
        assert!(view.error.is_none());
        assert!(view.result.is_none());
    }

    #[test]
    fn computed_view_carries_value_label_and_marker() {
        let state = FormReducer::reduce(state_with("170", "70"), FormIntent::Calculate);
        let view = render(&state, Locale::Ru);
        let result = view.result.expect("result");
        assert_eq!(result.value, "24.2");
        assert_eq!(result.category, Category::Normal);
        assert_eq!(result.label, "Нормальный вес");
        assert_eq!(result.tip, "Отличный результат! Поддерживайте текущий образ жизни");
        assert!((result.marker - 24.2 / 40.0).abs() < 1e-12);
        assert!(view.error.is_none());
    }

    #[test]
    fn error_view_is_localized() {
        let state = FormReducer::reduce(state_with("99", "70"), FormIntent::Calculate);
        assert_eq!(state.error(), Some(ValidationError::HeightOutOfRange));
        let view = render(&state, Locale::En);
        assert_eq!(view.error, Some("Height must be between 100 and 250 cm"));
        assert!(view.result.is_none());
    }

    #[test]
    fn whole_numbers_drop_the_decimal() {
        assert_eq!(format_bmi(20.0), "20");
        assert_eq!(format_bmi(15.4), "15.4");
        assert_eq!(format_bmi(35.2), "35.2");
    }
}
