use leptos::prelude::*;

use crate::{
    content::SiteContent,
    motion::{stagger, Entrance},
};

use super::{reveal::Reveal, SectionHeading};

#[component]
pub fn Services() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let meta = content.sections.services.clone();
    let services = &content.services;

    view! {
        <section id="services" class="py-20 bg-[#080807]">
            <div class="container mx-auto px-4">
                <SectionHeading title=meta.title subtitle=meta.subtitle />
                <div class="max-w-6xl mx-auto grid md:grid-cols-12 gap-12">
                    <div class="md:col-span-7 grid md:grid-cols-2 gap-5">
                        {services
                            .items
                            .iter()
                            .enumerate()
                            .map(|(i, service)| {
                                view! {
                                    <Reveal
                                        entrance=Entrance::FromLeft
                                        delay_ms=stagger(200, 150, i)
                                        duration_ms=600
                                        class="bg-[#232323] rounded-lg p-5 hover:bg-[#2a2a2a] hover:-translate-y-1 transition-all max-w-xs"
                                    >
                                        <div
                                            class="mb-4 inline-flex w-14 h-14 items-center justify-center rounded-full"
                                            style=format!("background-color: {}20", service.color)
                                            aria-hidden="true"
                                        >
                                            <span
                                                class="w-6 h-6 rounded-md"
                                                style=format!("background-color: {}", service.color)
                                            ></span>
                                        </div>
                                        <h3 class="text-xl text-[#D1D1C7] font-semibold mb-2">
                                            {service.title.clone()}
                                        </h3>
                                        <p class="text-[#D1D1C7] text-sm mb-3">
                                            {service.description.clone()}
                                        </p>
                                        <div class="mt-3 pt-3 border-t border-gray-700">
                                            <p class="text-xs font-medium uppercase tracking-wider text-[#D1D1C7] mb-2">
                                                "Tools & Technologies"
                                            </p>
                                            <p class="text-[#D1D1C7] text-xs">{service.tools.join(", ")}</p>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="md:col-span-5 flex flex-col justify-center">
                        <Reveal entrance=Entrance::FromRight delay_ms=400 duration_ms=600>
                            <h3 class="text-2xl font-bold mb-6 text-[#D1D1C7]">
                                {services.pitch_title.clone()}
                            </h3>
                        </Reveal>
                        {services
                            .pitch
                            .iter()
                            .enumerate()
                            .map(|(i, paragraph)| {
                                view! {
                                    <Reveal
                                        entrance=Entrance::FromRight
                                        delay_ms=stagger(550, 150, i)
                                        duration_ms=600
                                    >
                                        <p class="mb-5 text-[#D1D1C7]">{paragraph.clone()}</p>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                        <Reveal
                            entrance=Entrance::FromRight
                            delay_ms=stagger(550, 150, services.pitch.len())
                            duration_ms=600
                            class="mt-3"
                        >
                            <a
                                href=services.cta.href.clone()
                                class="inline-flex items-center bg-gradient-to-r from-orange-600 to-orange-400 text-white px-6 py-3 rounded-full font-medium hover:from-orange-400 hover:to-orange-600 transition-all"
                            >
                                {services.cta.label.clone()}
                            </a>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
