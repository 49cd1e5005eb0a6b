use leptos::prelude::*;

use crate::{
    contact::{
        ContactMessage, FieldError, FieldErrors, FormStatus, EMAIL_MAX, MESSAGE_MAX, NAME_MAX,
    },
    content::{ContactInfo, Scheduling, SiteContent},
    embed::{EmbedLease, EmbedRegistry, EmbedStatus},
    motion::Entrance,
};

use super::{browser::ScriptTagInjector, reveal::Reveal, SectionHeading};

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    let msg = ContactMessage {
        name,
        email,
        message,
    };
    if let Err(errors) = msg.validate() {
        tracing::warn!("rejected contact request: {errors}");
        return Err(ServerFnError::new(errors));
    }
    let msg = msg.trimmed();
    tracing::info!(
        name = %msg.name,
        email = %msg.email,
        chars = msg.message.chars().count(),
        "contact request received"
    );
    Ok(())
}

#[component]
pub fn Contact() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let meta = content.sections.contact.clone();

    view! {
        <section id="contact" class="py-20 bg-[#121212]">
            <div class="container mx-auto px-4">
                <SectionHeading title=meta.title subtitle=meta.subtitle />
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12">
                    <Reveal entrance=Entrance::FromLeft class="bg-[#232323] rounded-lg p-6">
                        <ContactForm />
                    </Reveal>
                    <Reveal entrance=Entrance::FromRight class="space-y-8">
                        <Details info=&content.contact />
                        <ScheduleCall scheduling=&content.scheduling />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    let status = move || {
        let pending = submit.pending().get();
        submit.value().with(|v| FormStatus::resolve(pending, v.as_ref()))
    };

    Effect::new(move |_| {
        if status() == FormStatus::Sent {
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let msg = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match msg.validate() {
            Ok(()) => {
                errors.set(FieldErrors::default());
                let msg = msg.trimmed();
                submit.dispatch(SubmitContact {
                    name: msg.name,
                    email: msg.email,
                    message: msg.message,
                });
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <form class="space-y-6" novalidate=true on:submit=on_submit>
            <Field
                id="contact-name"
                label="Name"
                value=name
                max=NAME_MAX
                error=Signal::derive(move || errors.with(|e| e.name))
            />
            <Field
                id="contact-email"
                label="Email"
                kind="email"
                value=email
                max=EMAIL_MAX
                error=Signal::derive(move || errors.with(|e| e.email))
            />
            <Field
                id="contact-message"
                label="Message"
                value=message
                max=MESSAGE_MAX
                multiline=true
                error=Signal::derive(move || errors.with(|e| e.message))
            />
            <button
                type="submit"
                class="w-full bg-white text-black py-3 rounded-lg font-medium hover:bg-gray-200 transition-colors disabled:opacity-60 disabled:cursor-not-allowed"
                disabled=move || status() == FormStatus::Submitting
            >
                {move || status().label()}
            </button>
            <p class="text-sm text-center" aria-live="polite">
                {move || match status() {
                    FormStatus::Sent => "Thanks! I'll get back to you soon.",
                    FormStatus::Failed => "Something went wrong. Please try again or email me directly.",
                    _ => "",
                }}
            </p>
        </form>
    }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    max: usize,
    error: Signal<Option<FieldError>>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let class = move || {
        if error.get().is_some() {
            "w-full bg-[#1a1a1a] border border-red-500 rounded-lg px-4 py-2 focus:outline-none focus:border-red-400"
        } else {
            "w-full bg-[#1a1a1a] border border-gray-700 rounded-lg px-4 py-2 focus:outline-none focus:border-white"
        }
    };
    let invalid = move || error.get().is_some().to_string();

    let input = if multiline {
        view! {
            <textarea
                id=id
                name=id
                rows="5"
                maxlength=max.to_string()
                class=class
                aria-invalid=invalid
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                name=id
                type=kind
                maxlength=max.to_string()
                class=class
                aria-invalid=invalid
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2">{label}</label>
            {input}
            <p id=error_id class="mt-1 text-sm text-red-400 min-h-[1.25rem]">
                {move || error.get().map(|e| e.to_string())}
            </p>
        </div>
    }
}

#[component]
fn Details(info: &'static ContactInfo) -> impl IntoView {
    let rows = [
        ("Email", info.email.clone(), Some(format!("mailto:{}", info.email))),
        (
            "Phone",
            info.phone.clone(),
            Some(format!("tel:{}", info.phone.replace([' ', '(', ')', '-'], ""))),
        ),
        ("Location", info.location.clone(), None),
    ];

    view! {
        <dl class="space-y-6">
            {rows
                .into_iter()
                .map(|(label, value, href)| {
                    view! {
                        <div class="flex items-start gap-4">
                            <div class="bg-[#232323] p-3 rounded-lg w-12 h-12" aria-hidden="true"></div>
                            <div>
                                <dt class="font-medium mb-1">{label}</dt>
                                <dd class="text-gray-400">
                                    {match href {
                                        Some(href) => {
                                            view! { <a href=href class="hover:text-white transition-colors">{value}</a> }
                                                .into_any()
                                        }
                                        None => value.into_any(),
                                    }}
                                </dd>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
}

/// Inline booking widget. Falls back to a plain link while the script is
/// loading or when it can't be loaded.
#[component]
fn ScheduleCall(scheduling: &'static Scheduling) -> impl IntoView {
    let (status, set_status) = signal(EmbedStatus::Loading);
    let lease = StoredValue::new(None::<EmbedLease<'static>>);

    Effect::new(move |_| {
        let acquired = EmbedRegistry::global().acquire(
            &scheduling.script_url,
            &ScriptTagInjector,
            move |s| set_status.set(s.clone()),
        );
        lease.set_value(Some(acquired));
    });
    on_cleanup(move || {
        lease.try_update_value(Option::take);
    });

    let link = move || {
        view! {
            <a
                href=scheduling.url.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 bg-orange-700 text-white px-6 py-3 rounded-full font-medium hover:bg-orange-600 transition-colors"
            >
                {scheduling.label.clone()}
            </a>
        }
    };

    view! {
        <div class="bg-[#232323] rounded-lg p-6 space-y-4">
            <h3 class="font-medium">"Prefer a call?"</h3>
            {move || match status.get() {
                EmbedStatus::Degraded(_) => {
                    view! {
                        <p class="text-gray-400 text-sm">
                            "The booking calendar couldn't be loaded here, but you can still pick a time directly."
                        </p>
                        {link()}
                    }
                        .into_any()
                }
                EmbedStatus::Loading => {
                    view! {
                        <p class="text-gray-400 text-sm">"Loading the booking calendar…"</p>
                        {link()}
                    }
                        .into_any()
                }
                EmbedStatus::Ready => ().into_any(),
            }}
            <div
                class="calendly-inline-widget rounded-lg overflow-hidden"
                class:hidden=move || status.get() != EmbedStatus::Ready
                data-url=scheduling.url.clone()
                style="min-width: 320px; height: 630px"
            ></div>
        </div>
    }
}
