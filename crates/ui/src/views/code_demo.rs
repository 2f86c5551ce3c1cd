use dioxus::prelude::*;

use services::{CodeExecutionError, ExecutionOutcome, Language};

use crate::context::AppContext;
use crate::views::{Notice, NoticeBar};

fn describe_execution_error(err: &CodeExecutionError) -> String {
    match err {
        CodeExecutionError::Disabled => {
            "Code execution is not configured. Set MOCKVIEW_CODE_EXEC_URL to enable it.".into()
        }
        CodeExecutionError::EmptySource => "Write some code first.".into(),
        other => format!("Could not run your code: {other}"),
    }
}

/// Editor plus runner. Reports every finished run through `on_run`.
#[component]
pub fn CodeRunner(on_run: Option<EventHandler<(Language, ExecutionOutcome)>>) -> Element {
    let ctx = use_context::<AppContext>();
    let executor = ctx.code_execution();
    let enabled = executor.enabled();

    let mut language = use_signal(|| Language::Python);
    let mut source = use_signal(|| Language::Python.template().to_string());
    let mut stdin = use_signal(String::new);
    let outcome = use_signal(|| None::<ExecutionOutcome>);
    let notice = use_signal(|| None::<Notice>);
    let running = use_signal(|| false);

    let on_execute = use_callback(move |()| {
        if running() {
            return;
        }
        let executor = executor.clone();
        let chosen = language();
        let code = source();
        let input = stdin();
        let mut outcome = outcome;
        let mut notice = notice;
        let mut running = running;
        spawn(async move {
            running.set(true);
            notice.set(None);
            match executor.execute(chosen, &code, &input).await {
                Ok(result) => {
                    if let Some(handler) = on_run {
                        handler.call((chosen, result.clone()));
                    }
                    outcome.set(Some(result));
                }
                Err(err) => {
                    outcome.set(None);
                    notice.set(Some(Notice::Error(describe_execution_error(&err))));
                }
            }
            running.set(false);
        });
    });

    let busy = running();
    let selected = language().slug();
    let result = outcome();

    rsx! {
        div { class: "code-runner",
            if !enabled {
                p { class: "notice notice--info",
                    "Running code is disabled in this build. You can still edit and save drafts."
                }
            }
            NoticeBar { notice: notice() }
            div { class: "code-runner__toolbar",
                label { r#for: "runner-language", "Language" }
                select {
                    id: "runner-language",
                    value: "{selected}",
                    onchange: move |evt| {
                        if let Some(next) = Language::from_slug(&evt.value()) {
                            language.set(next);
                            source.set(next.template().to_string());
                        }
                    },
                    for option_language in Language::ALL {
                        option {
                            key: "{option_language.slug()}",
                            value: "{option_language.slug()}",
                            "{option_language.label()}"
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy || !enabled,
                    onclick: move |_| on_execute.call(()),
                    if busy { "Running..." } else { "Run" }
                }
            }
            textarea {
                class: "code-runner__source",
                spellcheck: "false",
                rows: "14",
                value: "{source}",
                oninput: move |evt| source.set(evt.value()),
            }
            label { r#for: "runner-stdin", "Input" }
            textarea {
                id: "runner-stdin",
                class: "code-runner__stdin",
                rows: "3",
                value: "{stdin}",
                oninput: move |evt| stdin.set(evt.value()),
            }
            if let Some(result) = result {
                div { class: if result.is_accepted() { "code-runner__result ok" } else { "code-runner__result fail" },
                    p { class: "code-runner__status", "{result.status}" }
                    pre { "{result.display_output()}" }
                }
            }
        }
    }
}

#[component]
pub fn CodeDemoView() -> Element {
    rsx! {
        div { class: "page code-demo",
            h2 { "Code playground" }
            p { "Try the editor used in coding interviews." }
            CodeRunner {}
        }
    }
}
