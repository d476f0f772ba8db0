use yew::prelude::*;

use super::Button;
use crate::card::{CardEvent, CelebrationView};

#[derive(Properties, PartialEq, Clone)]
pub struct CelebrationProps {
    pub view: CelebrationView,
    pub on_event: Callback<CardEvent>,
}

#[function_component(Celebration)]
pub fn celebration(p: &CelebrationProps) -> Html {
    let on_restart = {
        let on = p.on_event.clone();
        Callback::from(move |_: MouseEvent| on.emit(CardEvent::Restart))
    };
    html! {
        <div class="celebration" data-testid="celebration">
            <img class="letter-image" src={p.view.image_url.clone()} alt={p.view.image_alt.clone()} />
            <h1 class="letter-message">{ p.view.message.clone() }</h1>
            <Button
                label={p.view.restart_label.clone()}
                aria_label={AttrValue::Static(p.view.restart_aria_label)}
                class={classes!("restart")}
                testid={AttrValue::Static("restart")}
                onclick={on_restart}
            />
        </div>
    }
}
