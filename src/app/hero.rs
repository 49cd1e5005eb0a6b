use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::SiteContent,
    motion::{particles, stagger, Entrance},
    rotation::Rotator,
};

use super::{
    browser::BrowserClock,
    reveal::{use_reduced_motion, Reveal},
};

const PARTICLE_COUNT: usize = 20;
const PARTICLE_SEED: u64 = 0x5d1;

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let hero = &content.hero;

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden bg-black"
        >
            <div class="absolute inset-0 opacity-10 hero-grid" aria-hidden="true"></div>
            <Particles />
            <Shapes />
            <div class="container mx-auto px-4 py-32 relative z-10">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 items-center">
                    <div class="space-y-6 text-left">
                        <Reveal delay_ms=stagger(0, 300, 0)>
                            <div class="inline-block mb-4 px-4 py-2 bg-[#232323] rounded-full border border-gray-600/50">
                                <span class="text-sm bg-gradient-to-r from-red-300 to-pink-300 bg-clip-text text-transparent font-medium">
                                    {hero.badge.clone()}
                                </span>
                            </div>
                            <h1 class="text-4xl md:text-7xl lg:text-8xl font-bold mb-6 leading-tight text-white">
                                {hero.greeting.clone()}
                                " "
                                <span class="aurora-text">{hero.name.clone()}</span>
                            </h1>
                            <p class="text-2xl md:text-4xl font-bold mb-6 leading-tight text-white min-h-[1.5em]">
                                <RotatingText
                                    words=hero.roles.clone()
                                    interval=Duration::from_millis(hero.rotation_ms)
                                />
                            </p>
                        </Reveal>
                        <Reveal delay_ms=stagger(0, 300, 1)>
                            <p class="text-gray-300 text-lg md:text-xl mb-8 max-w-2xl">
                                {hero.summary.clone()}
                            </p>
                        </Reveal>
                        <Reveal delay_ms=stagger(0, 300, 2) class="flex flex-wrap gap-4">
                            <a
                                href=hero.primary.href.clone()
                                class="inline-flex items-center gap-2 bg-orange-700 text-white px-8 py-3 rounded-full font-medium shadow-lg transition-all duration-300 hover:bg-orange-600 hover:scale-105 active:scale-95"
                            >
                                <span>{hero.primary.label.clone()}</span>
                                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" class="size-6">
                                    <path stroke-linecap="round" stroke-linejoin="round" d="M13.5 4.5 21 12m0 0-7.5 7.5M21 12H3" />
                                </svg>
                            </a>
                            <a
                                href=hero.secondary.href.clone()
                                class="inline-flex items-center gap-2 border-2 border-gray-600/50 text-gray-300 px-8 py-3 rounded-full font-medium hover:bg-[#232323] hover:border-gray-500 hover:scale-105 active:scale-95 transition-all duration-300"
                            >
                                {hero.secondary.label.clone()}
                            </a>
                        </Reveal>
                    </div>
                    <Reveal
                        entrance=Entrance::FromRight
                        delay_ms=1200
                        duration_ms=700
                        class="flex justify-center md:justify-end"
                    >
                        <div class="relative w-full max-w-md aspect-square" aria-hidden="true">
                            <div class="absolute inset-0 bg-gray-800/40 blur-2xl rounded-full -translate-y-4 animate-pulse"></div>
                            <div class="absolute inset-0 bg-gray-700/30 blur-xl rounded-full translate-x-2 translate-y-2"></div>
                            <div
                                class="absolute inset-0 border-2 border-gray-600/30 animate-spin-slow"
                                style="clip-path: polygon(50% 0%, 100% 25%, 100% 75%, 50% 100%, 0% 75%, 0% 25%)"
                            ></div>
                            <div class="absolute -top-4 -left-4 w-8 h-8 bg-gray-700 rounded-full shadow-lg animate-pulse"></div>
                            <div class="absolute -bottom-4 -right-4 w-6 h-6 bg-gray-600 rounded-full shadow-lg animate-pulse"></div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Cycles through `words`, one at a time.
#[component]
fn RotatingText(words: Vec<String>, interval: Duration) -> impl IntoView {
    let reduced = use_reduced_motion();
    let (index, set_index) = signal(0usize);
    let rotator = StoredValue::new_local(Rotator::new(words.len(), interval, BrowserClock));
    let label = words.join(", ");

    Effect::new(move |_| {
        let reduced = reduced.get();
        rotator.try_with_value(|r| {
            if reduced {
                r.stop();
                set_index(0);
            } else {
                r.set_listener(move |i| set_index(i));
            }
            r.start(reduced);
        });
    });
    on_cleanup(move || {
        rotator.try_with_value(Rotator::stop);
    });

    view! {
        <span class="inline-block" aria-label=label>
            {move || {
                words
                    .get(index.get())
                    .cloned()
                    .map(|word| {
                        view! {
                            <span class="inline-block animate-word-in" aria-hidden="true">
                                {word}
                            </span>
                        }
                    })
            }}
        </span>
    }
}

#[component]
fn Particles() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {particles(PARTICLE_COUNT, PARTICLE_SEED, 1200.0, 800.0)
                .into_iter()
                .map(|p| {
                    view! {
                        <span
                            class="particle absolute top-0 left-0 w-2 h-2 bg-gray-600 rounded-full opacity-60"
                            style=p.style()
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Shapes() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute top-20 left-10 w-32 h-32 border-2 border-gray-700/20 rounded-full animate-spin-slow"></div>
            <div class="absolute bottom-32 right-20 w-24 h-24 border-2 border-gray-600/20 rounded-full animate-spin-slow-reverse"></div>
            <div class="absolute top-1/3 right-1/4 w-8 h-8 bg-gray-700/30 animate-float"></div>
            <div
                class="absolute bottom-1/4 left-1/3 w-6 h-6 bg-gray-600/30 animate-float"
                style="animation-delay: 2s; animation-duration: 8s"
            ></div>
            <div class="absolute top-1/2 left-20 w-4 h-4 bg-gray-500/50 rounded-full animate-ping"></div>
            <div class="absolute top-1/4 right-1/3 w-3 h-3 bg-gray-600/50 rounded-full animate-pulse"></div>
            <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-gray-800/20 rounded-full blur-3xl animate-pulse"></div>
            <div class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-gray-700/20 rounded-full blur-3xl animate-pulse"></div>
        </div>
    }
}
