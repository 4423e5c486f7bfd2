use crate::{request_spec, ConsoleState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ConsoleState, msg: Msg) -> (ConsoleState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldEdited {
            panel,
            field,
            value,
        } => {
            state.edit_field(panel, field, value);
            Vec::new()
        }
        Msg::RenderToggled(render) => {
            state.set_render(render);
            Vec::new()
        }
        Msg::Submitted(panel) => {
            // The request is built before the transition so it captures the
            // form exactly as it was at submission time.
            let spec = request_spec(panel, state.forms());
            let token = state.begin_request(panel);
            vec![Effect::Dispatch {
                panel,
                token,
                spec,
            }]
        }
        Msg::RequestCompleted {
            panel,
            token,
            result,
        } => {
            state.apply_completion(panel, token, result);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
