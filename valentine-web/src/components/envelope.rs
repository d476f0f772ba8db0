use yew::prelude::*;

use crate::card::{CardEvent, EnvelopeView};
use crate::input::is_activation_key;

#[derive(Properties, PartialEq, Clone)]
pub struct EnvelopeProps {
    pub view: EnvelopeView,
    pub on_event: Callback<CardEvent>,
}

#[function_component(Envelope)]
pub fn envelope(p: &EnvelopeProps) -> Html {
    let interactive = p.view.interactive;

    let onclick = {
        let on = p.on_event.clone();
        Callback::from(move |_: MouseEvent| {
            if interactive {
                on.emit(CardEvent::OpenEnvelope);
            }
        })
    };

    let onkeydown = {
        let on = p.on_event.clone();
        Callback::from(move |e: KeyboardEvent| {
            if interactive && is_activation_key(&e.key()) {
                e.prevent_default();
                on.emit(CardEvent::OpenEnvelope);
            }
        })
    };

    html! {
        <div
            role="button"
            class={classes!("envelope", (!interactive).then_some("envelope-opened"))}
            aria-label={p.view.aria_label}
            aria-disabled={(!interactive).then_some("true")}
            tabindex={if interactive { "0" } else { "-1" }}
            style={p.view.transition.style(true)}
            data-testid="envelope"
            {onclick}
            {onkeydown}
        >
            <img
                class="envelope-stamp"
                src={p.view.stamp_url.clone()}
                alt={p.view.stamp_alt.clone()}
            />
            <p class="envelope-year">{ p.view.stamp_caption.clone() }</p>
            <p class="envelope-label">{ p.view.label.clone() }</p>
        </div>
    }
}
