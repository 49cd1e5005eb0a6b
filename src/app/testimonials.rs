use leptos::prelude::*;

use crate::content::{SiteContent, Testimonial};

use super::{
    slider::{use_slider, LiveRegion, SliderArrows, SliderIndicators, SliderViewport},
    SectionHeading,
};

#[component]
pub fn Testimonials() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let meta = content.sections.testimonials.clone();
    let testimonials = &content.testimonials;
    let items = &testimonials.items;
    let handle = use_slider(items.len(), testimonials.slider.clone());

    let announcement = Signal::derive(move || {
        handle.state.with(|s| {
            items.get(s.current()).map(|t| {
                format!("Testimonial {} of {}: {}", s.current() + 1, s.len(), t.name)
            })
        })
    });

    view! {
        <section id="testimonials" class="py-20 bg-[#1a1a1a]">
            <div class="container mx-auto px-4">
                <SectionHeading title=meta.title subtitle=meta.subtitle />
                <div class="max-w-3xl mx-auto">
                    <SliderViewport handle label="Client testimonials" class="overflow-hidden rounded-lg px-12 md:px-16">
                        <div class="grid">
                            {items
                                .iter()
                                .enumerate()
                                .map(|(i, testimonial)| {
                                    let current = move || handle.state.with(|s| s.current() == i);
                                    view! {
                                        <div
                                            class="[grid-area:1/1] transition-all duration-500 ease-in-out"
                                            style:opacity=move || if current() { "1" } else { "0" }
                                            style:transform=move || {
                                                if current() { "none" } else { "translateY(12px)" }
                                            }
                                            aria-hidden=move || (!current()).then_some("true")
                                            inert=move || !current()
                                        >
                                            <Card testimonial />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <SliderArrows handle item="testimonial" />
                        <LiveRegion text=announcement />
                    </SliderViewport>
                    <SliderIndicators handle item="testimonial" class="mt-6" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Card(testimonial: &'static Testimonial) -> impl IntoView {
    let stars = testimonial.stars();

    view! {
        <figure class="bg-[#232323] rounded-lg p-8 text-center">
            <div class="flex justify-center mb-4" role="img" aria-label=format!("Rated {stars} out of 5")>
                {(0..stars)
                    .map(|_| {
                        view! {
                            <svg class="w-5 h-5 text-yellow-500" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                                <path d="M12 2.25l2.92 6.26 6.83.74-5.1 4.63 1.43 6.74L12 17.2l-6.08 3.42 1.43-6.74-5.1-4.63 6.83-.74L12 2.25z" />
                            </svg>
                        }
                    })
                    .collect_view()}
            </div>
            <blockquote class="text-gray-300 text-lg mb-6">
                {format!("\u{201c}{}\u{201d}", testimonial.content)}
            </blockquote>
            <figcaption class="flex items-center justify-center gap-4">
                {match testimonial.avatar.clone() {
                    Some(src) => {
                        view! { <img src=src alt=testimonial.name.clone() class="w-12 h-12 rounded-full object-cover" /> }
                            .into_any()
                    }
                    None => {
                        view! {
                            <span
                                class="w-12 h-12 rounded-full bg-white/10 flex items-center justify-center font-semibold"
                                aria-hidden="true"
                            >
                                {testimonial.initials()}
                            </span>
                        }
                            .into_any()
                    }
                }}
                <div class="text-left">
                    <p class="font-semibold">{testimonial.name.clone()}</p>
                    <p class="text-gray-400 text-sm">{testimonial.role.clone()}</p>
                </div>
            </figcaption>
        </figure>
    }
}
