//! `window.__valentineTest` hooks for browser automation, enabled with `?test=1`.
use yew::prelude::*;

use crate::app::state::CardStore;
use crate::card::CardEvent;

/// Parse the event names accepted by `__valentineTest.dispatch(name)`.
///
/// Names follow [`CardEvent::label`]; decoys take an index suffix such as
/// `accept-decoy:3`.
#[must_use]
pub fn parse_bridge_event(name: &str) -> Option<CardEvent> {
    let name = name.trim();
    if let Some(index) = name.strip_prefix("accept-decoy:") {
        return index.parse().ok().map(CardEvent::accept_decoy);
    }
    match name {
        "open" => Some(CardEvent::OpenEnvelope),
        "accept" => Some(CardEvent::ACCEPT_PRIMARY),
        "reject" => Some(CardEvent::Reject),
        "hover-reject" => Some(CardEvent::PointerEnterReject),
        "restart" => Some(CardEvent::Restart),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_test_bridge(store: &UseReducerHandle<CardStore>) {
    let _ = store;
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_test_bridge(store: &UseReducerHandle<CardStore>) {
    wasm::use_test_bridge(store);
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::parse_bridge_event;
    use crate::app::state::CardStore;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use yew::prelude::*;

    struct BridgeBindings {
        _state: Closure<dyn FnMut() -> JsValue>,
        _scene: Closure<dyn FnMut() -> JsValue>,
        _dispatch: Closure<dyn FnMut(JsValue) -> bool>,
    }

    #[hook]
    pub fn use_test_bridge(store: &UseReducerHandle<CardStore>) {
        let latest = use_mut_ref(|| store.clone());
        *latest.borrow_mut() = store.clone();
        let bindings = use_mut_ref(|| None::<BridgeBindings>);
        let dispatcher = store.dispatcher();

        use_effect_with((), move |_| {
            if crate::config::test_mode_enabled(&crate::config::location_search()) {
                match install(&latest, dispatcher) {
                    Ok(installed) => *bindings.borrow_mut() = Some(installed),
                    Err(err) => log::error!("test bridge unavailable: {err:?}"),
                }
            }
            || ()
        });
    }

    fn install(
        latest: &std::rc::Rc<std::cell::RefCell<UseReducerHandle<CardStore>>>,
        dispatcher: UseReducerDispatcher<CardStore>,
    ) -> Result<BridgeBindings, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from("no window"))?;
        let bridge = js_sys::Object::new();

        let state_source = latest.clone();
        let state = Closure::wrap(Box::new(move || {
            serde_wasm_bindgen::to_value(state_source.borrow().state()).unwrap_or(JsValue::NULL)
        }) as Box<dyn FnMut() -> JsValue>);

        let scene_source = latest.clone();
        let scene = Closure::wrap(Box::new(move || {
            serde_wasm_bindgen::to_value(&scene_source.borrow().scene()).unwrap_or(JsValue::NULL)
        }) as Box<dyn FnMut() -> JsValue>);

        let dispatch = Closure::wrap(Box::new(move |name: JsValue| {
            let Some(event) = name.as_string().as_deref().and_then(parse_bridge_event) else {
                return false;
            };
            dispatcher.dispatch(event);
            true
        }) as Box<dyn FnMut(JsValue) -> bool>);

        js_sys::Reflect::set(&bridge, &"state".into(), state.as_ref().unchecked_ref())?;
        js_sys::Reflect::set(&bridge, &"scene".into(), scene.as_ref().unchecked_ref())?;
        js_sys::Reflect::set(&bridge, &"dispatch".into(), dispatch.as_ref().unchecked_ref())?;
        js_sys::Reflect::set(&window, &"__valentineTest".into(), &bridge)?;

        Ok(BridgeBindings {
            _state: state,
            _scene: scene,
            _dispatch: dispatch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_event_names_map_to_events() {
        assert_eq!(parse_bridge_event("open"), Some(CardEvent::OpenEnvelope));
        assert_eq!(parse_bridge_event(" reject "), Some(CardEvent::Reject));
        assert_eq!(
            parse_bridge_event("hover-reject"),
            Some(CardEvent::PointerEnterReject)
        );
        assert_eq!(
            parse_bridge_event("accept-decoy:12"),
            Some(CardEvent::accept_decoy(12))
        );
        assert_eq!(parse_bridge_event("accept-decoy:x"), None);
        assert_eq!(parse_bridge_event("dance"), None);
    }

    #[test]
    fn labels_parse_back() {
        for event in [
            CardEvent::OpenEnvelope,
            CardEvent::ACCEPT_PRIMARY,
            CardEvent::Reject,
            CardEvent::PointerEnterReject,
            CardEvent::Restart,
        ] {
            assert_eq!(parse_bridge_event(event.label()), Some(event));
        }
    }
}
