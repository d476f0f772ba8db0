use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub testid: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub onpointerenter: Callback<PointerEvent>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    let onpointerenter = p.onpointerenter.clone();
    let label = p.label.clone();
    html! {
        <button
            type="button"
            class={classes!("card-btn", p.class.clone())}
            style={p.style.clone()}
            aria-label={p.aria_label.clone()}
            data-testid={p.testid.clone()}
            {onclick}
            {onpointerenter}
        >
            <strong>{ label }</strong>
        </button>
    }
}
