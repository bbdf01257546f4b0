#![forbid(unsafe_code)]

//! `bankapp-web` wires the BankApp page behaviors to the DOM.
//!
//! The crate attaches independent, stateless rules to elements that already
//! exist in the page: alerts auto-dismiss, inputs filter their characters,
//! submit buttons show transient feedback, the balance display pulses, copy
//! buttons write to the clipboard, and required/amount fields get advisory
//! validation styling. Every decision those rules make lives in
//! [`bankapp_core`]; this crate is selector contract plus wiring.
//!
//! Design notes:
//! - **Re-derivable state only**: nothing is cached outside element
//!   attributes and classes, so a reload resets everything.
//! - **Host-visible contract**: the selectors and markup fragments below are
//!   the whole interface to the HTML collaborator; they are `pub const` so
//!   hosts and tests can pin them.
//! - The DOM glue itself is `wasm32`-only; everything else in the crate
//!   builds and tests natively.

#[cfg(target_arch = "wasm32")]
pub mod wasm;

/// CSS selectors the page behaviors expect their HTML collaborator to match.
pub mod selectors {
    /// Transient page notices, removed 5.3s after init.
    pub const ALERTS: &str = ".alert";
    /// 4-digit PIN entry fields.
    pub const PIN_INPUTS: &str = r#"input[type="password"][maxlength="4"]"#;
    /// Numeric entry fields, floored at zero.
    pub const NUMBER_INPUTS: &str = r#"input[type="number"]"#;
    /// Phone entry fields, matched by name substring.
    pub const PHONE_INPUTS: &str = r#"input[name*="phone"]"#;
    /// Every form gets submit feedback.
    pub const FORMS: &str = "form";
    /// Submit buttons, whose labels are captured at init.
    pub const SUBMIT_BUTTONS: &str = r#"button[type="submit"]"#;
    /// The element showing the current balance as text (`$…`).
    pub const BALANCE_DISPLAY: &str = ".balance-amount";
    /// Notification rows that dim when clicked.
    pub const NOTIFICATION_ITEMS: &str = ".notification-item";
    /// Buttons carrying a `data-copy` payload.
    pub const COPY_BUTTONS: &str = ".copy-btn";
    /// Inputs the form refuses to submit while empty.
    pub const REQUIRED_INPUTS: &str = "input[required]";
    /// Forms whose action path is a send-money or bill-payment endpoint.
    pub const TRANSACTION_FORMS: &str = r#"form[action*="send"], form[action*="bill"]"#;
    /// The amount field inside a transaction form.
    pub const AMOUNT_FIELD: &str = r#"input[name="amount"]"#;
}

/// Markup fragments, attribute names, and class names the rules write.
pub mod markup {
    /// Submit-button label while a submission is in flight.
    pub const PROCESSING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;
    /// Copy-button label after a successful clipboard write.
    pub const COPIED_LABEL: &str = r#"<i class="fas fa-check"></i> Copied!"#;
    /// Restore target when no label was captured at init.
    pub const FALLBACK_SUBMIT_LABEL: &str = "Submit";
    /// Attribute holding a submit button's label captured at init.
    pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
    /// Attribute holding a copy button's clipboard payload.
    pub const COPY_SOURCE_ATTR: &str = "data-copy";
    /// Id of the full-page loading overlay.
    pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
    /// Inner markup of the loading overlay.
    pub const LOADING_OVERLAY_HTML: &str = r#"<div class="spinner"></div><p>Processing...</p>"#;
    /// Class of the loading overlay container.
    pub const LOADING_OVERLAY_CLASS: &str = "text-center";
    /// Success styling applied to a copy button during feedback.
    pub const COPY_SUCCESS_CLASS: &str = "btn-success";
    /// Advisory invalid styling for inputs.
    pub const INVALID_CLASS: &str = "is-invalid";
    /// Advisory valid styling for inputs.
    pub const VALID_CLASS: &str = "is-valid";
}
