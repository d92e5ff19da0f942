use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::config::{SiteConfig, DEFAULT_CONTACT_EMAIL};
use crate::contact::{
    ContactError, ContactForm, ContactPayload, ContactSubmitter, FormRelay, HttpFormRelay,
    MailComposer, MailtoLink, SubmitOutcome,
};
use crate::content::{ContactInfo, SocialKind, CONTACT_BLURB, CONTACT_INFO, SOCIAL_LINKS};
use crate::motion::Threshold;

use super::hero::social_glyph;
use super::motion::{reveal_class, use_reveal};

/// Opens `mailto:` links through `window.open`.
#[derive(Clone, Copy, Default)]
pub struct WindowComposer;

impl MailComposer for WindowComposer {
    fn open(&self, link: &MailtoLink) {
        if let Err(err) = window().open_with_url(link.as_str()) {
            log::error!("couldn't open mail client: {err:?}");
        }
    }
}

/// Stands in when no relay endpoint is configured, so every message goes
/// straight to the mail client.
struct NoRelay;

impl FormRelay for NoRelay {
    async fn deliver(&self, _payload: &ContactPayload) -> Result<(), ContactError> {
        Err(ContactError::Transport("no form relay configured".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Sent,
    MailClient,
    Failed(String),
}

impl Notice {
    fn title(&self) -> &'static str {
        match self {
            Notice::Sent => "Message sent successfully!",
            Notice::MailClient => "Email client opened!",
            Notice::Failed(_) => "Couldn't send your message",
        }
    }

    fn description(&self) -> String {
        match self {
            Notice::Sent => "Thank you for reaching out. I'll get back to you soon.".to_string(),
            Notice::MailClient => {
                "Your default email client should open with the message pre-filled.".to_string()
            }
            Notice::Failed(reason) => reason.clone(),
        }
    }
}

async fn submit(
    config: Option<SiteConfig>,
    form: &mut ContactForm,
) -> Result<SubmitOutcome, ContactError> {
    match config {
        Some(config) => {
            let relay = HttpFormRelay::new(config.form_relay);
            ContactSubmitter::new(relay, WindowComposer, config.contact_email)
                .submit(form)
                .await
        }
        None => {
            ContactSubmitter::new(NoRelay, WindowComposer, DEFAULT_CONTACT_EMAIL)
                .submit(form)
                .await
        }
    }
}

fn info_row(info: &'static ContactInfo) -> impl IntoView {
    let icon = match info.label {
        "Email" => "✉",
        _ => "⌖",
    };
    view! {
        <a
            href=info.href.unwrap_or("#")
            class="flex items-center gap-4 p-4 rounded-lg hover:bg-surface-elevated transition-colors duration-300 group"
        >
            <div class="p-3 rounded-lg bg-accent/10 text-accent group-hover:bg-accent group-hover:text-white transition-colors">
                {icon}
            </div>
            <div>
                <p class="font-medium">{info.label}</p>
                <p class="text-text-subtle text-sm">{info.value}</p>
            </div>
        </a>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, Threshold::SECTION);

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);
    let config = use_context::<SiteConfig>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let mut form = ContactForm::new(
            name.get_untracked(),
            email.get_untracked(),
            subject.get_untracked(),
            message.get_untracked(),
        );
        set_submitting.set(true);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = submit(config, &mut form).await;
            if form.is_empty() {
                for setter in [set_name, set_email, set_subject, set_message] {
                    setter.set(String::new());
                }
            }
            set_notice.set(Some(match result {
                Ok(SubmitOutcome::Sent) => Notice::Sent,
                Ok(SubmitOutcome::ComposedMail(_)) => Notice::MailClient,
                Err(err) => Notice::Failed(err.to_string()),
            }));
            set_submitting.set(false);
        });
    };

    let field = "w-full px-4 py-2 rounded-md bg-surface border border-border focus:outline-none focus:ring-2 focus:ring-accent";

    view! {
        <section id="contact" node_ref=section class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal_class(visible.get(), "mb-16 text-center", "translate-y-12")>
                    <div class="flex items-center justify-center mb-4">
                        <span class="section-number">"08"</span>
                        <div class="w-16 h-0.5 bg-accent ml-4"></div>
                    </div>
                    <h2 class="section-title">"Let's Work Together"</h2>
                    <p class="text-lg text-text-subtle max-w-2xl mx-auto">{CONTACT_BLURB}</p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class=move || reveal_class(visible.get(), "delay-300", "-translate-x-12")>
                        <div class="card p-8">
                            <form class="space-y-6" on:submit=on_submit>
                                <div class="grid sm:grid-cols-2 gap-4">
                                    <div class="space-y-2">
                                        <label for="name" class="text-sm font-medium">"Name"</label>
                                        <input id="name" name="name" placeholder="Your name" required class=field bind:value=(name, set_name) />
                                    </div>
                                    <div class="space-y-2">
                                        <label for="email" class="text-sm font-medium">"Email"</label>
                                        <input id="email" name="email" type="email" placeholder="your@email.com" required class=field bind:value=(email, set_email) />
                                    </div>
                                </div>
                                <div class="space-y-2">
                                    <label for="subject" class="text-sm font-medium">"Subject"</label>
                                    <input id="subject" name="subject" placeholder="Project inquiry" required class=field bind:value=(subject, set_subject) />
                                </div>
                                <div class="space-y-2">
                                    <label for="message" class="text-sm font-medium">"Message"</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="5"
                                        placeholder="Tell me about your project..."
                                        required
                                        class=format!("{field} resize-none")
                                        bind:value=(message, set_message)
                                    ></textarea>
                                </div>
                                <button type="submit" class="btn-accent btn-lg w-full" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                                </button>
                            </form>

                            {move || {
                                notice
                                    .get()
                                    .map(|n| {
                                        let class = match n {
                                            Notice::Failed(_) => "mt-6 p-4 rounded-md border border-red-500/40 bg-red-500/10",
                                            _ => "mt-6 p-4 rounded-md border border-accent/40 bg-accent/10",
                                        };
                                        view! {
                                            <div class=class role="status">
                                                <p class="font-semibold">{n.title()}</p>
                                                <p class="text-sm text-text-subtle">{n.description()}</p>
                                            </div>
                                        }
                                    })
                            }}
                        </div>
                    </div>

                    <div class=move || reveal_class(visible.get(), "space-y-8 delay-500", "translate-x-12")>
                        <div>
                            <h3 class="text-2xl font-bold mb-6">"Get In Touch"</h3>
                            <div class="space-y-2">
                                {CONTACT_INFO.iter().map(info_row).collect_view()}
                            </div>
                        </div>
                        <div>
                            <h3 class="text-xl font-semibold mb-4">"Follow Me"</h3>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .filter(|link| link.kind != SocialKind::Email)
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class="p-3 rounded-lg border border-border font-mono font-bold hover:bg-accent hover:text-white transition-colors duration-300"
                                            >
                                                {social_glyph(link.kind)}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="card p-6 bg-accent/5">
                            <p class="text-text-subtle text-sm">
                                "Usually replies within a day. For anything urgent, email works best."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
