use std::rc::Rc;

use yew::prelude::*;

use crate::a11y;
use crate::card::{CardConfig, CardEvent};
use crate::components::{Envelope, Letter};

pub mod state;
pub mod test_bridge;

pub use state::CardStore;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| crate::config::load_card_config());
    let seed = *use_memo((), |_| crate::config::entropy_seed());
    html! { <CardApp config={config} seed={seed} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CardAppProps {
    pub config: Rc<CardConfig>,
    pub seed: u64,
}

#[function_component(CardApp)]
pub fn card_app(p: &CardAppProps) -> Html {
    let store = {
        let config = p.config.clone();
        let seed = p.seed;
        use_reducer(move || CardStore::new((*config).clone(), seed))
    };
    test_bridge::use_test_bridge(&store);

    {
        let outcome = store.last_outcome();
        let recipient = store.config().content.recipient.clone();
        use_effect_with(store.revision(), move |_| {
            if let Some(message) = outcome.as_ref().and_then(|o| a11y::announcement(o, &recipient)) {
                a11y::set_status(&message);
            }
            || ()
        });
    }

    let on_event = {
        let dispatcher = store.dispatcher();
        Callback::from(move |event: CardEvent| dispatcher.dispatch(event))
    };

    let scene = store.scene();
    let letter = scene.letter.map_or_else(
        || html! {},
        |view| html! { <Letter view={view} on_event={on_event.clone()} /> },
    );

    html! {
        <main class="card-page" data-mode={store.state().evasion_mode.label()}>
            <style>{ a11y::visible_focus_css() }</style>
            <div class="card-stage">
                <Envelope view={scene.envelope} on_event={on_event.clone()} />
                { letter }
            </div>
            <p id={a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite"></p>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn card_app_starts_with_closed_envelope() {
        let props = CardAppProps {
            config: Rc::new(CardConfig::default()),
            seed: 7,
        };
        let html = block_on(LocalServerRenderer::<CardApp>::with_props(props).render());
        assert!(html.contains("For Josie"), "envelope label missing: {html}");
        assert!(html.contains("Click to open envelope"));
        assert!(html.contains("data-mode=\"spawn\""));
        assert!(!html.contains("Reject and click No"));
        assert!(html.contains("aria-live=\"polite\""));
    }
}
