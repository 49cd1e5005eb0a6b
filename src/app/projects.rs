use leptos::{html, prelude::*};
use leptos_use::{use_element_bounding, use_window_size, UseElementBoundingReturn, UseWindowSizeReturn};

use crate::{
    content::{Project, SiteContent},
    scroll::{card_frame, scroll_progress},
};

use super::{reveal::use_reduced_motion, slider::ImageSlider, SectionHeading};

#[component]
pub fn Projects() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let meta = content.sections.projects.clone();
    let projects = &content.projects;
    let (selected, set_selected) = signal(None::<String>);

    let stack = NodeRef::<html::Div>::new();
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(stack);
    let UseWindowSizeReturn {
        height: viewport, ..
    } = use_window_size();
    let progress = Signal::derive(move || scroll_progress(top.get(), height.get(), viewport.get()));
    let reduced = use_reduced_motion();

    let filter_button = move |label: String, tag: Option<String>| {
        let active = {
            let tag = tag.clone();
            Signal::derive(move || selected.with(|s| *s == tag))
        };
        view! {
            <button
                type="button"
                aria-pressed=move || active.get().to_string()
                class=move || {
                    if active.get() {
                        "px-4 py-1.5 rounded-full text-sm bg-white text-black transition-colors"
                    } else {
                        "px-4 py-1.5 rounded-full text-sm bg-white/5 text-gray-300 hover:bg-white/10 transition-colors"
                    }
                }
                on:click=move |_| set_selected(tag.clone())
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="projects" class="py-20 bg-[#1a1a1a]">
            <div class="container mx-auto px-4">
                <SectionHeading title=meta.title subtitle=meta.subtitle />
                <div class="flex flex-wrap justify-center gap-2 mb-12" role="group" aria-label="Filter projects by technology">
                    {filter_button("All".to_string(), None)}
                    {projects
                        .tags()
                        .into_iter()
                        .map(|tag| filter_button(tag.clone(), Some(tag)))
                        .collect_view()}
                </div>
                <div node_ref=stack class="max-w-5xl mx-auto flex flex-col gap-10">
                    {move || {
                        let shown = selected.with(|tag| projects.filtered(tag.as_deref()));
                        let count = shown.len();
                        if count == 0 {
                            return view! {
                                <p class="text-center text-gray-400">"No projects use that technology yet."</p>
                            }
                                .into_any();
                        }
                        shown
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! { <ProjectCard project index count progress reduced /> }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    index: usize,
    count: usize,
    progress: Signal<f64>,
    reduced: Signal<bool>,
) -> impl IntoView {
    let style = move || {
        if reduced.get() {
            String::new()
        } else {
            card_frame(index, count, progress.get()).style()
        }
    };
    let Project {
        title,
        description,
        tags,
        live_url,
        source_url,
        slides,
        slider,
    } = project;

    view! {
        <article
            class="bg-[#232323] rounded-xl overflow-hidden shadow-2xl grid md:grid-cols-2 will-change-transform"
            class:sticky=move || !reduced.get()
            style=style
        >
            <ImageSlider slides title=title.clone() config=slider class="rounded-none md:rounded-l-xl" />
            <div class="p-6 md:p-8 flex flex-col">
                <h3 class="text-2xl font-semibold mb-3">{title}</h3>
                <p class="text-gray-400 mb-6">{description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="text-sm px-3 py-1 bg-white/5 rounded-full">{tag}</span> })
                        .collect_view()}
                </div>
                <div class="mt-auto flex gap-4">
                    {live_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-2 bg-white/10 px-4 py-2 rounded-full hover:bg-white/20 transition-colors"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                    {source_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-2 border border-white/20 px-4 py-2 rounded-full hover:bg-white/10 transition-colors"
                                >
                                    "Source"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
