use dioxus::prelude::*;

use mockview_core::forms::{Field, FormErrors};

/// Inline validation message under an input.
#[component]
pub fn FieldErrorText(errors: FormErrors, field: Field) -> Element {
    match errors.message(field) {
        Some(message) => rsx! {
            p { class: "field-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}

#[component]
pub fn Pager(
    page: usize,
    total_pages: usize,
    total_items: usize,
    on_page: EventHandler<usize>,
) -> Element {
    let has_previous = page > 1;
    let has_next = page < total_pages;
    let shown_total = total_pages.max(1);

    rsx! {
        div { class: "pager",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: !has_previous,
                onclick: move |_| on_page.call(page.saturating_sub(1).max(1)),
                "Previous"
            }
            span { class: "pager__label", "Page {page} of {shown_total} ({total_items} results)" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: !has_next,
                onclick: move |_| on_page.call(page + 1),
                "Next"
            }
        }
    }
}
