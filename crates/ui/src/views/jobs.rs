use dioxus::prelude::*;

use mockview_core::catalog::JobFilter;
use mockview_core::model::JobCategory;
use services::data::job_locations;

use crate::context::AppContext;
use crate::views::components::Pager;

const ALL: &str = "All";

#[component]
pub fn JobsView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut filter = use_signal(JobFilter::default);
    let mut page = use_signal(|| 1_usize);

    let served = use_memo(move || catalog.jobs_page(&filter.read(), page()));

    let mut update_filter = move |change: &dyn Fn(&mut JobFilter)| {
        change(&mut filter.write());
        page.set(1);
    };

    let current = filter();
    let category_value = current.category.map_or(ALL, JobCategory::label);
    let location_value = current.location.clone().unwrap_or_else(|| ALL.to_string());
    let jobs = served();

    rsx! {
        div { class: "page jobs",
            h2 { "Jobs" }
            div { class: "filters",
                input {
                    r#type: "search",
                    placeholder: "Search roles, companies or skills",
                    value: "{current.query}",
                    oninput: move |evt| {
                        let query = evt.value();
                        update_filter(&|filter| filter.query.clone_from(&query));
                    },
                }
                select {
                    value: "{category_value}",
                    onchange: move |evt| {
                        let category = JobCategory::from_label(&evt.value());
                        update_filter(&|filter| filter.category = category);
                    },
                    option { value: ALL, "All categories" }
                    for category in JobCategory::ALL {
                        option { key: "{category.label()}", value: "{category.label()}", "{category.label()}" }
                    }
                }
                select {
                    value: "{location_value}",
                    onchange: move |evt| {
                        let raw = evt.value();
                        let location = (raw != ALL).then_some(raw);
                        update_filter(&|filter| filter.location.clone_from(&location));
                    },
                    option { value: ALL, "All locations" }
                    for location in job_locations() {
                        option { key: "{location}", value: "{location}", "{location}" }
                    }
                }
            }
            if jobs.is_empty() {
                p { class: "empty", "No openings match these filters." }
            } else {
                ul { class: "job-list",
                    for job in jobs.items.iter() {
                        li { key: "{job.id}", class: "job-card",
                            h3 { "{job.title}" }
                            p { class: "job-card__meta", "{job.company} · {job.location} · {job.category.label()}" }
                            p { class: "muted", {job.tags.join(", ")} }
                        }
                    }
                }
            }
            Pager {
                page: jobs.page,
                total_pages: jobs.total_pages,
                total_items: jobs.total_items,
                on_page: move |next| page.set(next),
            }
        }
    }
}
