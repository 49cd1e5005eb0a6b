use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer, use_media_query};

use crate::motion::{Entrance, DEFAULT_DURATION_MS};

pub fn use_reduced_motion() -> Signal<bool> {
    use_media_query("(prefers-reduced-motion: reduce)")
}

/// Flips to `true` the first time `target` scrolls into view and stays there.
pub fn use_revealed(target: NodeRef<html::Div>) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    use_intersection_observer(target, move |entries, _| {
        if !revealed.get_untracked() && entries.iter().any(|e| e.is_intersecting()) {
            set_revealed(true);
        }
    });
    revealed.into()
}

/// Wrapper that animates its children in once they enter the viewport.
#[component]
pub fn Reveal(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] delay_ms: u32,
    #[prop(default = DEFAULT_DURATION_MS)] duration_ms: u32,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);
    let reduced = use_reduced_motion();

    let style = move || {
        if reduced.get() {
            String::new()
        } else if revealed.get() {
            entrance.shown_style(duration_ms, delay_ms)
        } else {
            entrance.hidden_style()
        }
    };

    view! {
        <div node_ref=target class=class style=style>
            {children()}
        </div>
    }
}
