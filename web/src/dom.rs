use std::rc::Rc;

use anyhow::Result;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Element;
use web_sys::Event;
use web_sys::HtmlElement;
use web_sys::HtmlInputElement;
use web_sys::KeyboardEvent;

use crate::delegate::TreeNode;
use crate::login::LoginHandler;
use crate::logout::LogoutHandler;
use crate::page::Page;

pub fn js_error(value: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{value:?}")
}

/// The live document, through `web-sys`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

impl BrowserPage {
    fn element(&self, id: &str) -> Option<Element> {
        gloo_utils::document().get_element_by_id(id)
    }

    pub fn origin(&self) -> Result<String> {
        gloo_utils::window().location().origin().map_err(js_error)
    }
}

impl Page for BrowserPage {
    fn pathname(&self) -> Option<String> {
        gloo_utils::window().location().pathname().ok()
    }

    fn input_value(&self, id: &str) -> Option<String> {
        let input = self.element(id)?.dyn_into::<HtmlInputElement>().ok()?;
        Some(input.value())
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            match element.dyn_into::<HtmlElement>() {
                Ok(element) => element.set_inner_text(text),
                Err(element) => element.set_text_content(Some(text)),
            }
        }
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.element(id)
            .is_some_and(|element| element.has_attribute("disabled"))
    }

    // The logout control is an anchor, so this works on the attribute
    // rather than a button property.
    fn set_disabled(&self, id: &str, disabled: bool) -> Result<()> {
        let Some(element) = self.element(id) else {
            anyhow::bail!("no element with id \"{id}\"");
        };
        let toggled = if disabled {
            element.set_attribute("disabled", "")
        } else {
            element.remove_attribute("disabled")
        };
        toggled.map_err(js_error)
    }

    fn navigate(&self, route: &str) {
        if let Err(e) = gloo_utils::window().location().set_href(route) {
            log::error!("failed to navigate to {route}: {e:?}");
        }
    }
}

impl TreeNode for Element {
    fn tree_id(&self) -> Option<String> {
        let id = self.id();
        (!id.is_empty()).then_some(id)
    }

    fn tree_parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

fn target_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(element) => Some(element),
        // text nodes
        Err(target) => target.dyn_into::<web_sys::Node>().ok()?.parent_element(),
    }
}

fn listen(
    event_type: &str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
) -> Result<()> {
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    gloo_utils::document()
        .add_event_listener_with_callback_and_bool(event_type, function, capture)
        .map_err(js_error)?;
    // lives as long as the page
    callback.forget();
    Ok(())
}

/// Wire the login form up. Does nothing off the login page.
pub fn install_login<P: Page + 'static>(handler: LoginHandler<P>) -> Result<()> {
    let Some(handler) = handler.attach() else {
        return Ok(());
    };
    let handler = Rc::new(handler);

    let on_click = {
        let handler = handler.clone();
        Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = target_element(&event) else {
                return;
            };
            if !handler.claims(target) {
                return;
            }
            event.prevent_default();
            let handler = handler.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = handler.submit().await;
                log::debug!("login settled: {outcome:?}");
            });
        }) as Box<dyn FnMut(Event)>)
    };
    listen("click", true, on_click)?;

    let on_keydown = Closure::wrap(Box::new(move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let document = gloo_utils::document();
        let focused = document.active_element().map(|element| element.id());
        if !handler.is_submit_key(&event.key(), focused.as_deref()) {
            return;
        }
        event.prevent_default();
        // goes through the click listener above
        if let Some(submit) = document
            .get_element_by_id(&handler.ids().login_submit)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            submit.click();
        }
    }) as Box<dyn FnMut(Event)>);
    listen("keydown", false, on_keydown)?;

    log::debug!("login handler installed");
    Ok(())
}

pub fn install_logout<P: Page + 'static>(handler: LogoutHandler<P>) -> Result<()> {
    let handler = Rc::new(handler);
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = target_element(&event) else {
            return;
        };
        if !handler.claims(target) {
            return;
        }
        event.prevent_default();
        let handler = handler.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = handler.logout().await;
            log::debug!("logout settled: {outcome:?}");
        });
    }) as Box<dyn FnMut(Event)>);
    listen("click", true, on_click)?;

    log::debug!("logout handler installed");
    Ok(())
}
