use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::AboutSection, contact::Contact, hero::Hero, projects::Projects, services::Services,
    skills::Skills, testimonials::Testimonials,
};

/// The whole site is one scrolling page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <AboutSection />
        <Services />
        <Skills />
        <Projects />
        <Testimonials />
        <Contact />
    }
}
