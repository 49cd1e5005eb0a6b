mod about;
mod browser;
mod contact;
mod footer;
mod hero;
mod homepage;
mod navbar;
mod projects;
mod reveal;
mod services;
mod skills;
mod slider;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site, SiteContent};

use footer::Footer;
use homepage::HomePage;
use navbar::Navbar;
use reveal::Reveal;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="theme-color" content="#121212" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-[#121212] text-white font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match site() {
        Ok(content) => {
            provide_context::<&'static SiteContent>(content);
            let owner = content.profile.name.clone();
            let description = content.profile.description.clone();
            view! {
                <Title formatter=move |title| format!("{owner} - {title}") />
                <Meta name="description" content=description />
                <Router>
                    <Navbar />
                    <main>
                        <Routes fallback=NotFound>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                </Router>
            }
            .into_any()
        }
        Err(err) => {
            log::error!("{err}");
            view! {
                <Title text="Unavailable" />
                <main class="min-h-screen flex flex-col items-center justify-center gap-4">
                    <h1 class="text-3xl font-bold">"Something went wrong"</h1>
                    <p class="text-gray-400">{err.to_string()}</p>
                </main>
            }
            .into_any()
        }
    }
}

/// Shared heading used by every section below the hero.
#[component]
fn SectionHeading(title: String, subtitle: String) -> impl IntoView {
    view! {
        <Reveal class="max-w-4xl mx-auto text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold mb-4 text-[#D1D1C7]">{title}</h2>
            <p class="text-gray-400 text-lg">{subtitle}</p>
        </Reveal>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <section class="min-h-screen flex flex-col items-center justify-center gap-6 px-4 text-center">
            <p class="text-8xl font-bold aurora-text">"404"</p>
            <h1 class="text-2xl md:text-3xl font-bold">"This page doesn't exist"</h1>
            <a
                href="/"
                class="inline-flex items-center gap-2 bg-orange-700 text-white px-8 py-3 rounded-full font-medium hover:bg-orange-600 transition-colors"
            >
                "Back home"
            </a>
        </section>
    }
}
