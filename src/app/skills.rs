use leptos::{html, prelude::*};

use crate::{
    content::{SiteContent, SkillCategory},
    motion::stagger,
};

use super::{
    reveal::{use_reduced_motion, use_revealed, Reveal},
    SectionHeading,
};

#[component]
pub fn Skills() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let meta = content.sections.skills.clone();

    view! {
        <section id="skills" class="py-20 bg-[#121212]">
            <div class="container mx-auto px-4">
                <SectionHeading title=meta.title subtitle=meta.subtitle />
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {content
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, category)| view! { <Category category index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Category(category: &'static SkillCategory, index: usize) -> impl IntoView {
    let bars = NodeRef::<html::Div>::new();
    let revealed = use_revealed(bars);
    let reduced = use_reduced_motion();
    let base = stagger(0, 200, index);

    view! {
        <Reveal delay_ms=base class="bg-[#232323] rounded-lg p-6">
            <h3 class="text-xl font-semibold mb-6">{category.title.clone()}</h3>
            <div class="space-y-4" node_ref=bars>
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(j, skill)| {
                        let level = skill.level();
                        let width = move || {
                            if revealed.get() || reduced.get() {
                                format!("{level}%")
                            } else {
                                "0%".to_string()
                            }
                        };
                        view! {
                            <div>
                                <div class="flex justify-between mb-1">
                                    <span class="text-gray-300">{skill.name.clone()}</span>
                                    <span class="text-gray-400">{format!("{level}%")}</span>
                                </div>
                                <div
                                    class="h-2 bg-[#2a2a2a] rounded-full overflow-hidden"
                                    role="progressbar"
                                    aria-label=skill.name.clone()
                                    aria-valuemin="0"
                                    aria-valuemax="100"
                                    aria-valuenow=level.to_string()
                                >
                                    <div
                                        class="h-full bg-white transition-[width] duration-1000 ease-out"
                                        style:width=width
                                        style:transition-delay=format!("{}ms", stagger(base, 100, j))
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}
