use dioxus::prelude::*;

use mockview_core::model::CookieConsent;

use crate::context::AppContext;

/// Shown until the user accepts or declines; the choice is stored.
#[component]
pub fn CookieBanner() -> Element {
    let ctx = use_context::<AppContext>();
    let store = ctx.session_store();
    let mut decided = use_signal(|| true);

    let loader = store.clone();
    use_future(move || {
        let store = loader.clone();
        async move {
            match store.cookie_consent().await {
                Ok(consent) => decided.set(consent.is_some()),
                Err(err) => tracing::warn!(error = %err, "failed to read cookie consent"),
            }
        }
    });

    let on_choice = use_callback(move |consent: CookieConsent| {
        let store = store.clone();
        decided.set(true);
        spawn(async move {
            if let Err(err) = store.set_cookie_consent(consent).await {
                tracing::warn!(error = %err, "failed to store cookie consent");
            }
        });
    });

    if decided() {
        return rsx! {};
    }

    rsx! {
        div { class: "cookie-banner", role: "dialog", aria_label: "Cookie consent",
            p { "We store your session and preferences on this device." }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_choice.call(CookieConsent::Accepted),
                "Accept"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_choice.call(CookieConsent::Declined),
                "Decline"
            }
        }
    }
}
