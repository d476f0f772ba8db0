use yew::prelude::*;

use super::{AskPanel, Celebration};
use crate::card::{CardEvent, LetterBody, LetterView};

#[derive(Properties, PartialEq, Clone)]
pub struct LetterProps {
    pub view: LetterView,
    pub on_event: Callback<CardEvent>,
}

/// Letter panel. Mounts at the start pose and settles after the first render
/// so the browser animates the rise.
#[function_component(Letter)]
pub fn letter(p: &LetterProps) -> Html {
    let entered = use_state(|| false);
    {
        let entered = entered.clone();
        use_effect_with((), move |_| {
            entered.set(true);
            || ()
        });
    }

    let body = match &p.view.body {
        LetterBody::Asking(view) => html! {
            <AskPanel view={view.clone()} on_event={p.on_event.clone()} />
        },
        LetterBody::Accepted(view) => html! {
            <Celebration view={view.clone()} on_event={p.on_event.clone()} />
        },
    };

    html! {
        <section
            class="letter"
            style={p.view.transition.style(*entered)}
            data-testid="letter"
        >
            { body }
        </section>
    }
}
