use leptos::{prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::content::get_page;
use crate::{
    content::{About, SiteContent},
    motion::{stagger, Entrance},
};

use super::{reveal::Reveal, SectionHeading};

#[server(input = GetUrl)]
pub async fn fetch_about() -> Result<About, ServerFnError> {
    get_page("about").map_err(|e| {
        tracing::error!("couldn't load about page: {e}");
        ServerFnError::new(e)
    })
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let meta = content.sections.about.clone();
    let about = Resource::new(|| (), |_| fetch_about());

    view! {
        <section id="about" class="py-20 bg-[#080807] text-[#D1D1C7]">
            <div class="container mx-auto px-4">
                <SectionHeading title=meta.title subtitle=meta.subtitle />
                <div class="max-w-6xl mx-auto">
                    <Suspense fallback=|| {
                        view! {
                            <div class="grid md:grid-cols-2 gap-12 items-center">
                                <div class="aspect-square rounded-xl bg-[#232323] animate-pulse"></div>
                                <div class="space-y-4">
                                    <div class="h-8 rounded bg-[#232323] animate-pulse w-2/3"></div>
                                    <div class="h-24 rounded bg-[#232323] animate-pulse"></div>
                                    <div class="h-24 rounded bg-[#232323] animate-pulse"></div>
                                </div>
                            </div>
                        }
                    }>
                        {move || Suspend::new(async move {
                            match about.await {
                                Ok(about) => view! { <Profile about /> }.into_any(),
                                Err(err) => {
                                    log::warn!("about section unavailable: {err}");
                                    view! {
                                        <p class="text-center text-gray-400">
                                            "This section couldn't be loaded."
                                        </p>
                                    }
                                        .into_any()
                                }
                            }
                        })}
                    </Suspense>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Profile(about: About) -> impl IntoView {
    let (portrait_failed, set_portrait_failed) = signal(false);
    let About {
        headline,
        portrait,
        portrait_fallback,
        resume,
        html,
    } = about;
    let src = move || {
        if portrait_failed() {
            portrait_fallback.clone()
        } else {
            portrait.clone()
        }
    };

    view! {
        <div class="grid md:grid-cols-2 gap-12 items-center">
            <Reveal entrance=Entrance::FromLeft delay_ms=200 duration_ms=800>
                <img
                    src=src
                    alt="Developer Profile"
                    class="w-full h-auto rounded-xl object-cover"
                    on:error=move |_| {
                        if !portrait_failed.get_untracked() {
                            set_portrait_failed(true);
                        }
                    }
                />
            </Reveal>
            <div class="space-y-6">
                <Reveal delay_ms=stagger(300, 200, 0)>
                    <h3 class="text-2xl md:text-3xl font-bold bg-gradient-to-r from-orange-400 to-blue-500 bg-clip-text text-transparent">
                        {headline}
                    </h3>
                </Reveal>
                <Reveal delay_ms=stagger(300, 200, 1)>
                    <div class="space-y-4 text-lg [&_strong]:text-white" inner_html=html></div>
                </Reveal>
                <Reveal delay_ms=stagger(300, 200, 2) class="flex flex-wrap gap-4 pt-2">
                    <a
                        href="#contact"
                        class="inline-flex items-center gap-2 bg-orange-700 text-white px-8 py-3 rounded-full font-medium hover:bg-orange-600 transition-colors"
                    >
                        "Ready to get started?"
                    </a>
                    <a
                        href=resume
                        class="px-6 py-3 bg-white/10 rounded-full font-medium text-white hover:bg-white/15 transition-colors"
                    >
                        "View Resume"
                    </a>
                </Reveal>
            </div>
        </div>
    }
}
