use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::UiSession;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context_provider(UiSession::new);

    // Publish the stored session once; guards wait until then.
    let _loaded = use_resource(move || {
        let auth = ctx.auth();
        let store = ctx.session_store();
        async move {
            let record = match auth.current().await {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to load session; starting signed out");
                    Default::default()
                }
            };
            let font = store.font().await.unwrap_or_default();
            session.set_font(font);
            session.publish(record);
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Mockview" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
