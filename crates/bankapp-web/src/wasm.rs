//! `wasm-bindgen` exports and DOM wiring for the page behaviors.
//!
//! Each `wire_*` function attaches one independent rule to the elements its
//! selector matches at init time. Handlers live for the page lifetime, so
//! listener closures are leaked with `Closure::forget`. Timers carry no
//! cancellation token (a resubmit inside the restore window races with the
//! stale restore; known quirk, kept).

use core::time::Duration;

use bankapp_core::filters::{filter_phone_chars, filter_pin_digits, is_negative_number};
use bankapp_core::timing;
use bankapp_core::validate::{
    AMOUNT_EXCEEDS_BALANCE, RequiredState, amount_within_balance, classify_required,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Clipboard, Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement,
    HtmlFormElement, HtmlInputElement,
};

use crate::{markup, selectors};

fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let global = js_sys::global();
            if let Ok(console) = js_sys::Reflect::get(&global, &"console".into()) {
                if let Ok(error) = js_sys::Reflect::get(&console, &"error".into()) {
                    if let Ok(f) = error.dyn_into::<js_sys::Function>() {
                        let _ = f.call1(&console, &JsValue::from_str(&format!("{info}")));
                    }
                }
            }
        }));
    });
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no window.document available"))
}

/// Run `callback` once after `delay` via `setTimeout`.
fn after<F>(delay: Duration, callback: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(callback);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        delay.as_millis() as i32,
    );
}

/// Run `callback` every `period` via `setInterval`, for the page lifetime.
fn every<F>(period: Duration, callback: F)
where
    F: FnMut() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::<dyn FnMut()>::new(callback);
    let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        period.as_millis() as i32,
    );
    cb.forget();
}

/// Attach `handler` to `target` for events of `kind`, for the page lifetime.
fn listen<F>(target: &EventTarget, kind: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
    cb.forget();
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for idx in 0..nodes.length() {
        if let Some(element) = nodes
            .item(idx)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            out.push(element);
        }
    }
    Ok(out)
}

fn select_inputs(document: &Document, selector: &str) -> Result<Vec<HtmlInputElement>, JsValue> {
    Ok(select_all(document, selector)?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

/// Rule 1: alerts present at init fade after 5s and are removed 300ms later.
/// Alerts added later are not covered; there is no mutation observer.
fn wire_alert_autodismiss(document: &Document) -> Result<usize, JsValue> {
    let alerts = select_all(document, selectors::ALERTS)?;
    let count = alerts.len();
    for element in alerts {
        let Ok(alert) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        after(timing::ALERT_DISMISS_DELAY, move || {
            let _ = alert.style().set_property("opacity", "0");
            after(timing::ALERT_FADE_DURATION, move || alert.remove());
        });
    }
    Ok(count)
}

/// Rule 2: PIN fields accept decimal digits only. The value is reassigned
/// on every input event; cursor movement is the side effect of that.
fn wire_pin_filter(document: &Document) -> Result<usize, JsValue> {
    let inputs = select_inputs(document, selectors::PIN_INPUTS)?;
    let count = inputs.len();
    for input in inputs {
        let field = input.clone();
        listen(input.as_ref(), "input", move |_| {
            field.set_value(&filter_pin_digits(&field.value()));
        });
    }
    Ok(count)
}

/// Rule 3: number fields are floored at zero.
fn wire_non_negative_filter(document: &Document) -> Result<usize, JsValue> {
    let inputs = select_inputs(document, selectors::NUMBER_INPUTS)?;
    let count = inputs.len();
    for input in inputs {
        let field = input.clone();
        listen(input.as_ref(), "input", move |_| {
            if is_negative_number(&field.value()) {
                field.set_value("0");
            }
        });
    }
    Ok(count)
}

/// Rule 4: phone fields keep digits and `'+'` only.
fn wire_phone_filter(document: &Document) -> Result<usize, JsValue> {
    let inputs = select_inputs(document, selectors::PHONE_INPUTS)?;
    let count = inputs.len();
    for input in inputs {
        let field = input.clone();
        listen(input.as_ref(), "input", move |_| {
            field.set_value(&filter_phone_chars(&field.value()));
        });
    }
    Ok(count)
}

/// Rule 6: capture every submit button's rendered label before any submit
/// can occur, so the feedback rule has a restore target.
fn capture_submit_labels(document: &Document) -> Result<usize, JsValue> {
    let buttons = select_all(document, selectors::SUBMIT_BUTTONS)?;
    for button in &buttons {
        button.set_attribute(markup::ORIGINAL_TEXT_ATTR, &button.inner_html())?;
    }
    Ok(buttons.len())
}

/// Rule 5: on submit, disable the button and show the processing label;
/// unconditionally restore after 3s whether or not the submission finished.
fn wire_submit_feedback(document: &Document) -> Result<usize, JsValue> {
    let forms = select_all(document, selectors::FORMS)?;
    let count = forms.len();
    for element in forms {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let form_ref = form.clone();
        listen(form.as_ref(), "submit", move |_| {
            let Some(button) = form_ref
                .query_selector(selectors::SUBMIT_BUTTONS)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
            else {
                return;
            };
            button.set_disabled(true);
            button.set_inner_html(markup::PROCESSING_LABEL);
            after(timing::SUBMIT_RESTORE_DELAY, move || {
                button.set_disabled(false);
                let label = button
                    .get_attribute(markup::ORIGINAL_TEXT_ATTR)
                    .unwrap_or_else(|| markup::FALLBACK_SUBMIT_LABEL.to_string());
                button.set_inner_html(&label);
            });
        });
    }
    Ok(count)
}

/// Apply one balance pulse: scale up immediately, revert after the hold
/// window. Purely cosmetic; the underlying text is never touched.
pub fn pulse_balance(balance: &HtmlElement) {
    let _ = balance.style().set_property("transform", "scale(1.05)");
    let balance = balance.clone();
    after(timing::BALANCE_PULSE_HOLD, move || {
        let _ = balance.style().set_property("transform", "scale(1)");
    });
}

/// Rule 7: cosmetic scale pulse on the balance display every 30s. Never
/// refetches the balance; the displayed text is the only source here.
fn wire_balance_pulse(document: &Document) -> Result<bool, JsValue> {
    let Some(balance) = document
        .query_selector(selectors::BALANCE_DISPLAY)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(false);
    };
    every(timing::BALANCE_PULSE_PERIOD, move || pulse_balance(&balance));
    Ok(true)
}

/// Rule 8: notifications dim to 70% opacity on click, one-way.
fn wire_notification_dim(document: &Document) -> Result<usize, JsValue> {
    let items = select_all(document, selectors::NOTIFICATION_ITEMS)?;
    let count = items.len();
    for element in items {
        let Ok(item) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let target = item.clone();
        listen(item.as_ref(), "click", move |_| {
            let _ = target.style().set_property("opacity", "0.7");
        });
    }
    Ok(count)
}

/// Rule 9: copy the `data-copy` payload to the clipboard; only a resolved
/// write shows feedback. Rejection and a missing clipboard API stay silent.
fn wire_copy_buttons(document: &Document) -> Result<usize, JsValue> {
    let buttons = select_all(document, selectors::COPY_BUTTONS)?;
    let count = buttons.len();
    for button in buttons {
        let btn = button.clone();
        listen(button.as_ref(), "click", move |_| {
            let Some(payload) = btn.get_attribute(markup::COPY_SOURCE_ATTR) else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            // navigator.clipboard is undefined on insecure origins.
            let clipboard: JsValue = window.navigator().clipboard().into();
            if clipboard.is_undefined() || clipboard.is_null() {
                debug!("clipboard API unavailable; copy skipped");
                return;
            }
            let clipboard: Clipboard = clipboard.unchecked_into();
            let promise = clipboard.write_text(&payload);
            let target = btn.clone();
            spawn_local(async move {
                if JsFuture::from(promise).await.is_err() {
                    debug!("clipboard write rejected; no feedback shown");
                    return;
                }
                // Restore target is the label at success time, not init.
                let original = target.inner_html();
                target.set_inner_html(markup::COPIED_LABEL);
                let _ = target.class_list().add_1(markup::COPY_SUCCESS_CLASS);
                after(timing::COPY_FEEDBACK_DURATION, move || {
                    target.set_inner_html(&original);
                    let _ = target.class_list().remove_1(markup::COPY_SUCCESS_CLASS);
                });
            });
        });
    }
    Ok(count)
}

/// Rule 10: classify required fields on blur. The invalid branch only adds
/// the invalid class; a previously earned valid class stays until the field
/// validates again.
fn wire_required_blur(document: &Document) -> Result<usize, JsValue> {
    let inputs = select_inputs(document, selectors::REQUIRED_INPUTS)?;
    let count = inputs.len();
    for input in inputs {
        let field = input.clone();
        listen(input.as_ref(), "blur", move |_| {
            let classes = field.class_list();
            match classify_required(&field.value()) {
                RequiredState::Invalid => {
                    let _ = classes.add_1(markup::INVALID_CLASS);
                }
                RequiredState::Valid => {
                    let _ = classes.remove_1(markup::INVALID_CLASS);
                    let _ = classes.add_1(markup::VALID_CLASS);
                }
            }
        });
    }
    Ok(count)
}

/// Rule 11: on transaction forms, flag an amount that exceeds the displayed
/// balance. Both sides default to 0 when unparsable; skipped entirely when
/// no balance display exists.
fn wire_amount_guard(document: &Document) -> Result<usize, JsValue> {
    let Some(balance) = document.query_selector(selectors::BALANCE_DISPLAY)? else {
        return Ok(0);
    };
    let mut wired = 0;
    for form in select_all(document, selectors::TRANSACTION_FORMS)? {
        let Some(amount) = form
            .query_selector(selectors::AMOUNT_FIELD)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let field = amount.clone();
        let balance = balance.clone();
        listen(amount.as_ref(), "input", move |_| {
            let balance_text = balance.text_content().unwrap_or_default();
            if amount_within_balance(&field.value(), &balance_text) {
                let _ = field.class_list().remove_1(markup::INVALID_CLASS);
                field.set_custom_validity("");
            } else {
                let _ = field.class_list().add_1(markup::INVALID_CLASS);
                field.set_custom_validity(AMOUNT_EXCEEDS_BALANCE);
            }
        });
        wired += 1;
    }
    Ok(wired)
}

fn attach_behaviors(document: &Document) -> Result<(), JsValue> {
    let alerts = wire_alert_autodismiss(document)?;
    let pin_inputs = wire_pin_filter(document)?;
    let number_inputs = wire_non_negative_filter(document)?;
    let phone_inputs = wire_phone_filter(document)?;
    let submit_buttons = capture_submit_labels(document)?;
    let forms = wire_submit_feedback(document)?;
    let balance_pulse = wire_balance_pulse(document)?;
    let notifications = wire_notification_dim(document)?;
    let copy_buttons = wire_copy_buttons(document)?;
    let required_inputs = wire_required_blur(document)?;
    let guarded_forms = wire_amount_guard(document)?;
    debug!(
        alerts,
        pin_inputs,
        number_inputs,
        phone_inputs,
        submit_buttons,
        forms,
        balance_pulse,
        notifications,
        copy_buttons,
        required_inputs,
        guarded_forms,
        "page behaviors attached"
    );
    Ok(())
}

/// Attach every page behavior to the current document immediately.
///
/// `start` calls this once the document is parsed; hosts that control
/// timing themselves (or tests building fixtures) call it directly.
#[wasm_bindgen(js_name = initPageBehaviors)]
pub fn init_page_behaviors() -> Result<(), JsValue> {
    attach_behaviors(&document()?)
}

/// Module entry point: wire behaviors once the page structure is ready.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install_panic_hook();
    let document = document()?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        listen(document.as_ref(), "DOMContentLoaded", move |_| {
            if let Err(err) = attach_behaviors(&doc) {
                warn!(?err, "page behavior init failed");
            }
        });
    } else {
        attach_behaviors(&document)?;
    }
    Ok(())
}

/// Append the full-page loading overlay. Intentionally no existence check:
/// a second call appends a duplicate node, matching the page this replaces.
#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading() -> Result<(), JsValue> {
    let document = document()?;
    let overlay = document.create_element("div")?;
    overlay.set_class_name(markup::LOADING_OVERLAY_CLASS);
    overlay.set_inner_html(markup::LOADING_OVERLAY_HTML);
    overlay.set_id(markup::LOADING_OVERLAY_ID);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document.body available"))?;
    body.append_child(&overlay)?;
    Ok(())
}

/// Remove the loading overlay; a no-op when none is present.
#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(overlay) = document.get_element_by_id(markup::LOADING_OVERLAY_ID) {
            overlay.remove();
        }
    }
}

/// Format a numeric value as en-US US-dollar text.
#[wasm_bindgen(js_name = formatCurrency)]
#[must_use]
pub fn format_currency(amount: f64) -> String {
    bankapp_core::format_currency(amount)
}

/// Advisory phone-shape check; see `bankapp_core::validate`.
#[wasm_bindgen(js_name = validatePhoneNumber)]
#[must_use]
pub fn validate_phone_number(phone: &str) -> bool {
    bankapp_core::validate_phone_number(phone)
}

/// Advisory amount check; positive, finite, and within `max_amount` if given.
#[wasm_bindgen(js_name = validateAmount)]
#[must_use]
pub fn validate_amount(amount: &str, max_amount: Option<f64>) -> bool {
    bankapp_core::validate_amount(amount, max_amount)
}

/// Advisory PIN strength check: 4 digits, not all-same, not a known-weak PIN.
#[wasm_bindgen(js_name = validatePin)]
#[must_use]
pub fn validate_pin(pin: &str) -> bool {
    bankapp_core::validate_pin(pin)
}
