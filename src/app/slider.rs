use leptos::{ev, html, prelude::*};

use crate::slider::{
    Direction, Slide, SlideStatus, SliderConfig, SliderController, SliderState, SwipeTracker,
};

use super::browser::BrowserClock;

/// Reactive handle over one [`SliderController`], shared by the slider's
/// sub-components.
#[derive(Clone, Copy)]
pub struct SliderHandle {
    pub state: ReadSignal<SliderState>,
    config: StoredValue<SliderConfig>,
    controller: StoredValue<SliderController<BrowserClock>, LocalStorage>,
    swipe: StoredValue<SwipeTracker>,
}

/// Creates a slider over `len` items. Timers are armed once the owning
/// component is mounted in the browser and cancelled when it is torn down.
pub fn use_slider(len: usize, config: SliderConfig) -> SliderHandle {
    let controller = SliderController::new(len, config.clone(), BrowserClock);
    let (state, set_state) = signal(controller.state());
    controller.set_listener(move |s| set_state.set(s.clone()));

    let handle = SliderHandle {
        state,
        config: StoredValue::new(config),
        controller: StoredValue::new_local(controller),
        swipe: StoredValue::new(SwipeTracker::default()),
    };

    Effect::new(move |_| handle.with(SliderController::start));
    on_cleanup(move || handle.with(SliderController::shutdown));

    handle
}

impl SliderHandle {
    fn with(&self, f: impl FnOnce(&SliderController<BrowserClock>)) {
        self.controller.try_with_value(f);
    }

    pub fn next(&self) {
        self.with(SliderController::next);
    }

    pub fn previous(&self) {
        self.with(SliderController::previous);
    }

    pub fn go_to(&self, index: usize) {
        self.with(|c| c.go_to(index));
    }

    pub fn loaded(&self, index: usize) {
        self.with(|c| c.slide_loaded(index));
    }

    pub fn failed(&self, index: usize) {
        self.with(|c| c.slide_failed(index));
    }

    fn on_key(&self, ev: ev::KeyboardEvent) {
        if !self.config.with_value(|c| c.keyboard) {
            return;
        }
        if let Some(direction) = Direction::from_key(&ev.key()) {
            ev.prevent_default();
            self.with(|c| c.step(direction));
        }
    }

    fn on_pointer_down(&self, ev: ev::PointerEvent) {
        if self.config.with_value(|c| c.touch) {
            self.swipe.update_value(|s| s.begin(ev.client_x() as f64));
        }
    }

    fn on_pointer_move(&self, ev: ev::PointerEvent) {
        self.swipe.update_value(|s| s.track(ev.client_x() as f64));
    }

    fn on_pointer_up(&self) {
        let threshold = self.config.with_value(|c| c.swipe_threshold);
        let direction = self
            .swipe
            .try_update_value(|s| s.finish(threshold))
            .flatten();
        if let Some(direction) = direction {
            self.with(|c| c.step(direction));
        }
    }

    fn on_enter(&self) {
        self.with(SliderController::pause);
    }

    fn on_leave(&self) {
        self.swipe.update_value(SwipeTracker::cancel);
        self.with(SliderController::resume);
    }
}

/// Focusable carousel region carrying the keyboard, swipe and hover inputs.
#[component]
pub fn SliderViewport(
    handle: SliderHandle,
    #[prop(into)] label: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            role="region"
            aria-roledescription="carousel"
            aria-label=label
            tabindex="0"
            class=format!("relative touch-pan-y select-none focus:outline-none focus-visible:ring-2 focus-visible:ring-orange-500 {class}")
            on:keydown=move |ev| handle.on_key(ev)
            on:mouseenter=move |_| handle.on_enter()
            on:mouseleave=move |_| handle.on_leave()
            on:pointerdown=move |ev| handle.on_pointer_down(ev)
            on:pointermove=move |ev| handle.on_pointer_move(ev)
            on:pointerup=move |_| handle.on_pointer_up()
            on:pointercancel=move |_| handle.swipe.update_value(SwipeTracker::cancel)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SliderArrows(
    handle: SliderHandle,
    #[prop(default = "image")] item: &'static str,
) -> impl IntoView {
    let shown = move || {
        handle.config.with_value(|c| c.show_navigation)
            && handle.state.with(SliderState::is_navigable)
    };
    let button = "absolute top-1/2 -translate-y-1/2 z-20 p-2 rounded-full bg-black/50 text-white opacity-70 hover:opacity-100 hover:bg-black/70 transition-opacity focus:outline-none focus-visible:ring-2 focus-visible:ring-orange-500";

    view! {
        <Show when=shown>
            <button
                type="button"
                class=format!("{button} left-3")
                aria-label=format!("Previous {item}")
                on:click=move |_| handle.previous()
            >
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="2" stroke="currentColor" class="w-5 h-5">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M15.75 19.5 8.25 12l7.5-7.5" />
                </svg>
            </button>
            <button
                type="button"
                class=format!("{button} right-3")
                aria-label=format!("Next {item}")
                on:click=move |_| handle.next()
            >
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="2" stroke="currentColor" class="w-5 h-5">
                    <path stroke-linecap="round" stroke-linejoin="round" d="m8.25 4.5 7.5 7.5-7.5 7.5" />
                </svg>
            </button>
        </Show>
    }
}

#[component]
pub fn SliderIndicators(
    handle: SliderHandle,
    #[prop(default = "image")] item: &'static str,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let len = handle.state.with_untracked(SliderState::len);
    let shown = move || {
        handle.config.with_value(|c| c.show_indicators)
            && handle.state.with(SliderState::is_navigable)
    };

    view! {
        <Show when=shown>
            <div class=format!("flex justify-center gap-2 {class}")>
                {(0..len)
                    .map(|i| {
                        let active = move || handle.state.with(|s| s.current() == i);
                        view! {
                            <button
                                type="button"
                                aria-label=format!("Go to {item} {}", i + 1)
                                aria-current=move || active().then_some("true")
                                class=move || {
                                    if active() {
                                        "h-2 w-6 rounded-full bg-white transition-all"
                                    } else {
                                        "h-2 w-2 rounded-full bg-white/40 hover:bg-white/70 transition-all"
                                    }
                                }
                                on:click=move |_| handle.go_to(i)
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}

#[component]
pub fn LiveRegion(#[prop(into)] text: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="sr-only" aria-live="polite" aria-atomic="true">
            {move || text.get().unwrap_or_default()}
        </div>
    }
}

/// Gallery of screenshots with lazy neighbours, load fallbacks and the
/// shared slider inputs.
#[component]
pub fn ImageSlider(
    slides: Vec<Slide>,
    #[prop(into)] title: String,
    #[prop(optional)] config: SliderConfig,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let transition_ms = config.transition_ms;
    let handle = use_slider(slides.len(), config);
    let label = format!("{title} image gallery");

    if slides.is_empty() {
        return view! {
            <div class=format!("relative aspect-video rounded-lg bg-[#1a1a1a] flex items-center justify-center text-gray-500 {class}")>
                "No images available"
            </div>
        }
        .into_any();
    }

    let announcement = {
        let (title, slides) = (title.clone(), slides.clone());
        Signal::derive(move || handle.state.with(|s| s.announcement(&title, &slides)))
    };

    let frames = slides
        .into_iter()
        .enumerate()
        .map(|(i, slide)| {
            let alt = slide.alt_text(&title, i);
            let current = move || handle.state.with(|s| s.current() == i);
            view! {
                <div
                    class="absolute inset-0 transition-opacity ease-in-out"
                    style:transition-duration=format!("{transition_ms}ms")
                    style:opacity=move || if current() { "1" } else { "0" }
                    style:z-index=move || if current() { "10" } else { "0" }
                    aria-hidden=move || (!current()).then_some("true")
                >
                    <Show when=move || handle.state.with(|s| s.visible(i))>
                        <SlideImage handle index=i src=slide.src.clone() alt=alt.clone() />
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <SliderViewport handle label class=format!("aspect-video overflow-hidden rounded-lg bg-[#1a1a1a] {class}")>
            {frames}
            <SliderArrows handle />
            <SliderIndicators handle class="absolute bottom-3 inset-x-0 z-20" />
            <LiveRegion text=announcement />
        </SliderViewport>
    }
    .into_any()
}

#[component]
fn SlideImage(handle: SliderHandle, index: usize, src: String, alt: String) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let status = move || handle.state.with(|s| s.status(index)).unwrap_or_default();
    let eager = handle.state.with_untracked(|s| s.current() == index);

    // the image may have settled before hydration attached the listeners
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if img.complete() {
                if img.natural_width() > 0 {
                    handle.loaded(index);
                } else {
                    handle.failed(index);
                }
            }
        }
    });

    view! {
        {move || match status() {
            SlideStatus::Failed => {
                view! {
                    <div class="absolute inset-0 flex flex-col items-center justify-center gap-2 text-gray-400">
                        <span class="text-4xl" aria-hidden="true">"📷"</span>
                        <span class="text-sm">"Image failed to load"</span>
                    </div>
                }
                .into_any()
            }
            SlideStatus::Loading => {
                view! {
                    <div class="absolute inset-0 flex items-center justify-center">
                        <div class="w-8 h-8 rounded-full border-2 border-white/20 border-t-white animate-spin" />
                    </div>
                }
                .into_any()
            }
            SlideStatus::Loaded => ().into_any(),
        }}
        <Show when=move || status() != SlideStatus::Failed>
            <img
                node_ref=img_ref
                src=src.clone()
                alt=alt.clone()
                loading=if eager { "eager" } else { "lazy" }
                draggable="false"
                class="w-full h-full object-cover"
                on:load=move |_| handle.loaded(index)
                on:error=move |_| handle.failed(index)
            />
        </Show>
    }
}
