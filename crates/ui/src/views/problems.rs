use dioxus::prelude::*;
use dioxus_router::Link;

use mockview_core::catalog::ProblemFilter;
use mockview_core::model::{Difficulty, ProblemId, ProblemStatus};
use services::ExecutionOutcome;
use services::Language;
use services::data::problem_tags;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::code_demo::CodeRunner;
use crate::views::components::Pager;
use crate::views::{Notice, NoticeBar, ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    ProblemRowVm, difficulty_class, map_problem_rows, markdown_to_html, status_class,
};

const ALL: &str = "All";

#[derive(Clone, Debug, PartialEq)]
struct ProblemsPageData {
    rows: Vec<ProblemRowVm>,
    page: usize,
    total_pages: usize,
    total_items: usize,
}

#[component]
pub fn ProblemsView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut filter = use_signal(ProblemFilter::all);
    let mut page = use_signal(|| 1_usize);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let filter = filter();
        let page = page();
        async move {
            let served = catalog
                .problems_page(&filter, page)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(ProblemsPageData {
                rows: map_problem_rows(&served.items),
                page: served.page,
                total_pages: served.total_pages,
                total_items: served.total_items,
            })
        }
    });
    let state = view_state_from_resource(resource);

    // Any filter change starts over at the first page.
    let mut update_filter = move |change: &dyn Fn(&mut ProblemFilter)| {
        change(&mut filter.write());
        page.set(1);
    };

    let current = filter();
    let difficulty_value = current.difficulty.map_or(ALL, Difficulty::label);
    let status_value = current.status.map_or(ALL, ProblemStatus::label);
    let tag_value = current.tag.clone().unwrap_or_else(|| ALL.to_string());
    let tags = problem_tags();

    rsx! {
        div { class: "page problems",
            h2 { "Problems" }
            div { class: "filters",
                input {
                    r#type: "search",
                    placeholder: "Search by title, number or topic",
                    value: "{current.query}",
                    oninput: move |evt| {
                        let query = evt.value();
                        update_filter(&|filter| filter.query.clone_from(&query));
                    },
                }
                select {
                    value: "{difficulty_value}",
                    onchange: move |evt| {
                        let level = Difficulty::from_label(&evt.value());
                        update_filter(&|filter| filter.difficulty = level);
                    },
                    option { value: ALL, "All difficulties" }
                    for level in Difficulty::ALL {
                        option { key: "{level.label()}", value: "{level.label()}", "{level.label()}" }
                    }
                }
                select {
                    value: "{tag_value}",
                    onchange: move |evt| {
                        let raw = evt.value();
                        let tag = (raw != ALL).then_some(raw);
                        update_filter(&|filter| filter.tag.clone_from(&tag));
                    },
                    option { value: ALL, "All topics" }
                    for tag in tags {
                        option { key: "{tag}", value: "{tag}", "{tag}" }
                    }
                }
                select {
                    value: "{status_value}",
                    onchange: move |evt| {
                        let status = ProblemStatus::from_label(&evt.value());
                        update_filter(&|filter| filter.status = status);
                    },
                    option { value: ALL, "Any status" }
                    for status in ProblemStatus::ALL {
                        option { key: "{status.label()}", value: "{status.label()}", "{status.label()}" }
                    }
                }
                if current.is_active() {
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| update_filter(&|filter| *filter = ProblemFilter::all()),
                        "Clear filters"
                    }
                }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { class: "empty", "No problems match these filters." }
                    } else {
                        table { class: "problems-table",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Title" }
                                    th { "Difficulty" }
                                    th { "Topics" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for row in data.rows.iter() {
                                    tr { key: "{row.id}",
                                        td { "{row.number}" }
                                        td {
                                            Link { to: Route::ProblemDetail { id: row.id }, "{row.title}" }
                                        }
                                        td { span { class: "{row.difficulty_class}", "{row.difficulty}" } }
                                        td { class: "muted", "{row.tags}" }
                                        td { span { class: "{row.status_class}", "{row.status}" } }
                                    }
                                }
                            }
                        }
                    }
                    Pager {
                        page: data.page,
                        total_pages: data.total_pages,
                        total_items: data.total_items,
                        on_page: move |next| page.set(next),
                    }
                },
            }
        }
    }
}

#[component]
pub fn ProblemDetailView(id: u64) -> Element {
    // Keyed so hooks start fresh when navigating between problems.
    rsx! {
        ProblemDetail { key: "{id}", id }
    }
}

#[component]
fn ProblemDetail(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let store = ctx.session_store();
    let problem_id = ProblemId::new(id);
    let notice = use_signal(|| None::<Notice>);

    let history = use_resource(move || {
        let store = store.clone();
        async move {
            store
                .problem_history(problem_id)
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });

    let recorder = catalog.clone();
    let record_attempt = use_callback(move |(language, passed): (Language, bool)| {
        let catalog = recorder.clone();
        let mut history = history;
        let mut notice = notice;
        spawn(async move {
            match catalog.record_attempt(problem_id, language.slug(), passed).await {
                Ok(_) => {
                    let text = if passed {
                        "Solved. Nice work."
                    } else {
                        "Attempt recorded."
                    };
                    notice.set(Some(Notice::Success(text.into())));
                    history.restart();
                }
                Err(err) => notice.set(Some(Notice::Error(err.to_string()))),
            }
        });
    });

    let Some(problem) = catalog.problem(problem_id) else {
        return rsx! {
            div { class: "page problem-detail",
                h2 { "Problem not found" }
                p { "{ViewError::NotFound.message()}" }
                Link { to: Route::Problems {}, "Back to problems" }
            }
        };
    };

    let content_html = markdown_to_html(problem.content);
    let status = match view_state_from_resource(history) {
        ViewState::Ready(history) => history.status(),
        _ => ProblemStatus::Todo,
    };
    let tags = problem.tags.join(", ");

    rsx! {
        div { class: "page problem-detail",
            Link { to: Route::Problems {}, "← All problems" }
            h2 { "{problem.number}. {problem.title}" }
            p {
                span { class: difficulty_class(problem.difficulty), "{problem.difficulty.label()}" }
                " "
                span { class: status_class(status), "{status.label()}" }
                " "
                span { class: "muted", "{tags}" }
            }
            div { class: "problem-statement", dangerous_inner_html: "{content_html}" }
            NoticeBar { notice: notice() }
            CodeRunner {
                on_run: move |(language, outcome): (Language, ExecutionOutcome)| {
                    record_attempt.call((language, outcome.is_accepted()));
                },
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| record_attempt.call((Language::Python, true)),
                "Mark as solved"
            }
        }
    }
}
