use crate::bmi::{compute, validate};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormState, Outcome, RawInputs};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::EditHeight(height) => FormState {
                inputs: RawInputs {
                    height,
                    ..state.inputs
                },
                outcome: state.outcome,
            },
            FormIntent::EditWeight(weight) => FormState {
                inputs: RawInputs {
                    weight,
                    ..state.inputs
                },
                outcome: state.outcome,
            },
            FormIntent::Calculate if !state.can_calculate() => state,
            FormIntent::Calculate => {
                let outcome = match validate(&state.inputs.height, &state.inputs.weight) {
                    Ok(inputs) => Outcome::Computed(compute(inputs)),
                    Err(error) => Outcome::Error(error),
                };
                FormState {
                    inputs: state.inputs,
                    outcome,
                }
            }
            FormIntent::Reset => FormState::default(),
        }
    }
}
