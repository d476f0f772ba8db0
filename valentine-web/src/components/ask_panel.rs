use yew::prelude::*;

use super::{Button, DecoyLayer, RejectButton};
use crate::card::{AskView, CardEvent};

#[derive(Properties, PartialEq, Clone)]
pub struct AskPanelProps {
    pub view: AskView,
    pub on_event: Callback<CardEvent>,
}

#[function_component(AskPanel)]
pub fn ask_panel(p: &AskPanelProps) -> Html {
    let view = &p.view;
    let on_accept = {
        let on = p.on_event.clone();
        Callback::from(move |_: MouseEvent| on.emit(CardEvent::ACCEPT_PRIMARY))
    };
    let accept_style = format!("position: relative; z-index: {};", view.accept.stack_order);

    html! {
        <div class="ask-panel" data-testid="ask-panel">
            <img class="letter-image" src={view.image_url.clone()} alt={view.image_alt.clone()} />
            <h1 class="letter-question">{ view.question.clone() }</h1>
            <div class="letter-controls">
                <Button
                    label={view.accept.label.clone()}
                    aria_label={AttrValue::Static(view.accept.aria_label)}
                    class={classes!("accept", "primary")}
                    style={AttrValue::from(accept_style)}
                    testid={AttrValue::Static("accept")}
                    onclick={on_accept}
                />
                <RejectButton view={view.reject.clone()} on_event={p.on_event.clone()} />
            </div>
            <DecoyLayer decoys={view.decoys.clone()} on_event={p.on_event.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardConfig, CardSession};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn panel_shows_question_and_decoys() {
        let mut session = CardSession::new(CardConfig::default(), 3);
        session.dispatch(CardEvent::OpenEnvelope);
        session.dispatch(CardEvent::Reject);
        session.dispatch(CardEvent::Reject);
        let view = session.scene().ask().cloned().expect("still asking");
        assert_eq!(view.decoys.len(), 3);

        let html = block_on(
            LocalServerRenderer::<AskPanel>::with_props(AskPanelProps {
                view,
                on_event: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("accept primary"), "{html}");
        assert!(html.contains("z-index: 10;"));
        assert_eq!(html.matches("accept decoy").count(), 3);
        assert!(html.contains("Reject and click No"));
    }
}
