use yew::prelude::*;

use super::Button;
use crate::card::{CardEvent, DecoyView};

#[derive(Properties, PartialEq, Clone)]
pub struct DecoyLayerProps {
    pub decoys: Vec<DecoyView>,
    pub on_event: Callback<CardEvent>,
}

#[must_use]
pub fn decoy_style(view: &DecoyView) -> String {
    format!(
        "position: absolute; {} z-index: {};",
        view.position.to_css(),
        view.stack_order
    )
}

/// Extra accept buttons scattered over the letter, later ones on top.
#[function_component(DecoyLayer)]
pub fn decoy_layer(p: &DecoyLayerProps) -> Html {
    p.decoys
        .iter()
        .map(|decoy| {
            let index = decoy.index;
            let onclick = {
                let on = p.on_event.clone();
                Callback::from(move |_: MouseEvent| on.emit(CardEvent::accept_decoy(index)))
            };
            html! {
                <Button
                    key={index}
                    label={decoy.label.clone()}
                    aria_label={AttrValue::Static(decoy.aria_label)}
                    class={classes!("accept", "decoy")}
                    style={AttrValue::from(decoy_style(decoy))}
                    {onclick}
                />
            }
        })
        .collect::<Html>()
}
