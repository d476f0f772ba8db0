use yew::prelude::*;

use super::Button;
use crate::card::{CardEvent, RejectView};

#[derive(Properties, PartialEq, Clone)]
pub struct RejectButtonProps {
    pub view: RejectView,
    pub on_event: Callback<CardEvent>,
}

/// Inline style: in flow until the control has been relocated.
#[must_use]
pub fn reject_style(view: &RejectView) -> String {
    match view.placement {
        Some(position) => format!(
            "position: absolute; {} z-index: {};",
            position.to_css(),
            view.stack_order
        ),
        None => format!("position: relative; z-index: {};", view.stack_order),
    }
}

#[function_component(RejectButton)]
pub fn reject_button(p: &RejectButtonProps) -> Html {
    let onclick = {
        let on = p.on_event.clone();
        Callback::from(move |_: MouseEvent| on.emit(CardEvent::Reject))
    };
    let onpointerenter = {
        let on = p.on_event.clone();
        let evasive = p.view.evasive;
        Callback::from(move |_: PointerEvent| {
            if evasive {
                on.emit(CardEvent::PointerEnterReject);
            }
        })
    };

    html! {
        <Button
            label={p.view.label.clone()}
            aria_label={AttrValue::Static(p.view.aria_label)}
            class={classes!("reject", p.view.evasive.then_some("evasive"))}
            style={AttrValue::from(reject_style(&p.view))}
            testid={AttrValue::Static("reject")}
            {onclick}
            {onpointerenter}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Position, REJECT_ARIA};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn view(placement: Option<Position>, evasive: bool) -> RejectView {
        RejectView {
            label: "No!".into(),
            aria_label: REJECT_ARIA,
            stack_order: 0,
            placement,
            evasive,
        }
    }

    #[test]
    fn style_follows_placement() {
        assert_eq!(
            reject_style(&view(None, false)),
            "position: relative; z-index: 0;"
        );
        assert_eq!(
            reject_style(&view(Some(Position::new(12.5, 80.0)), true)),
            "position: absolute; top: 12.50%; left: 80.00%; z-index: 0;"
        );
    }

    #[test]
    fn evasive_reject_is_marked() {
        let html = block_on(
            LocalServerRenderer::<RejectButton>::with_props(RejectButtonProps {
                view: view(Some(Position::new(40.0, 40.0)), true),
                on_event: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("reject evasive"), "{html}");
        assert!(html.contains("position: absolute"));
        assert!(html.contains("No!"));
    }
}
