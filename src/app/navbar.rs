use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{content::SiteContent, scroll::is_scrolled};

#[component]
pub fn Navbar() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || is_scrolled(scroll_y.get());
    let (menu_open, set_menu_open) = signal(false);

    let links = &content.navigation;

    view! {
        <header class=move || {
            if scrolled() || menu_open() {
                "fixed top-0 inset-x-0 z-50 transition-colors duration-300 bg-[#121212]/80 backdrop-blur-md"
            } else {
                "fixed top-0 inset-x-0 z-50 transition-colors duration-300 bg-transparent"
            }
        }>
            <div class="container mx-auto px-4 py-4">
                <nav class="flex items-center justify-between" aria-label="Main">
                    <a href="#home" class="text-xl font-bold hover:scale-105 transition-transform">
                        {content.profile.initials.clone()}
                    </a>
                    <ul class="hidden md:flex items-center gap-8">
                        {links
                            .iter()
                            .map(|link| {
                                view! {
                                    <li class="hover:-translate-y-0.5 transition-transform">
                                        <a
                                            href=link.href.clone()
                                            class="text-gray-300 hover:text-white transition-colors"
                                        >
                                            {link.label.clone()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button
                        type="button"
                        class="md:hidden text-gray-300 hover:text-white"
                        aria-label=move || if menu_open() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || menu_open().to_string()
                        aria-controls="mobile-nav"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" class="w-6 h-6">
                            {move || {
                                if menu_open() {
                                    view! { <path stroke-linecap="round" stroke-linejoin="round" d="M6 18 18 6M6 6l12 12" /> }
                                        .into_any()
                                } else {
                                    view! { <path stroke-linecap="round" stroke-linejoin="round" d="M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5" /> }
                                        .into_any()
                                }
                            }}
                        </svg>
                    </button>
                </nav>
            </div>
            <Show when=menu_open>
                <ul id="mobile-nav" class="md:hidden flex flex-col gap-4 px-6 pb-6">
                    {links
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a
                                        href=link.href.clone()
                                        class="block text-lg text-gray-300 hover:text-white"
                                        on:click=move |_| set_menu_open(false)
                                    >
                                        {link.label.clone()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </header>
    }
}
