use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use crate::{
    contact::{Field, SubmitError},
    i18n::TranslationKey,
    mailer::EmailJsSender,
    scroll::Section,
};

use super::{tr, use_controller};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-lg bg-gray-800 border border-gray-700 focus:outline-none focus:border-blue-500 text-white";

const SOCIAL_LINKS: [(&str, &str, &str); 6] = [
    ("Facebook", "f", "https://www.facebook.com/JavaSwing/"),
    ("GitHub", "gh", "https://github.com/marianoj8"),
    ("X", "𝕏", "https://x.com/MJavaswing"),
    ("Telegram", "tg", "https://t.me/marianoj8"),
    ("Instagram", "ig", "https://www.instagram.com/marianojavaswing/"),
    ("LinkedIn", "in", "https://ao.linkedin.com/in/mariano-javaswing-a44763180"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    let controller = use_controller();

    let value = move |field: Field| controller.with(|c| c.draft().get(field).to_string());
    let on_input = move |field: Field| {
        move |ev: Event| {
            let v = event_target_value(&ev);
            controller.update(|c| c.set_field(field, v));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let pending = controller.try_maybe_update(|c| {
            let res = c.begin_submit();
            (res.is_ok(), res)
        });
        let pending = match pending {
            Some(Ok(p)) => p,
            Some(Err(SubmitError::Validation(e))) => {
                log::debug!("{e}");
                let notice = controller.with_untracked(|c| c.t(TranslationKey::FillAllFields));
                if let Err(e) = window().alert_with_message(notice) {
                    log::warn!("couldn't show notice: {e:?}");
                }
                return;
            }
            Some(Err(e)) => {
                log::debug!("{e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let outcome = pending.send(&EmailJsSender).await;
            // None when the page was torn down mid-flight
            match controller.try_update(|c| c.finish_submit(&pending, outcome)) {
                Some(Ok(())) => {}
                // already logged by the submitter; the draft stays for a retry
                Some(Err(_)) => {}
                None => log::debug!("contact form gone before delivery resolved"),
            }
        });
    };

    view! {
        <section id=Section::Contact.id() class="py-20 bg-[#1A1A2E] text-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-12 text-center">
                    {tr(controller, TranslationKey::GetInTouch)}
                </h2>
                <div class="max-w-2xl mx-auto">
                    <form class="space-y-6" on:submit=on_submit>
                        <div>
                            <label for="name" class="block text-sm font-medium mb-2">
                                {tr(controller, TranslationKey::NameLabel)}
                            </label>
                            <input
                                type="text"
                                id="name"
                                class=INPUT_CLASS
                                placeholder=tr(controller, TranslationKey::NamePlaceholder)
                                prop:value=move || value(Field::Name)
                                on:input=on_input(Field::Name)
                            />
                        </div>
                        <div>
                            <label for="email" class="block text-sm font-medium mb-2">
                                {tr(controller, TranslationKey::EmailLabel)}
                            </label>
                            <input
                                type="email"
                                id="email"
                                class=INPUT_CLASS
                                placeholder=tr(controller, TranslationKey::EmailPlaceholder)
                                prop:value=move || value(Field::Email)
                                on:input=on_input(Field::Email)
                            />
                        </div>
                        <div>
                            <label for="message" class="block text-sm font-medium mb-2">
                                {tr(controller, TranslationKey::MessageLabel)}
                            </label>
                            <textarea
                                id="message"
                                rows=4
                                class=INPUT_CLASS
                                placeholder=tr(controller, TranslationKey::MessagePlaceholder)
                                prop:value=move || value(Field::Message)
                                on:input=on_input(Field::Message)
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-60 disabled:cursor-wait transition-colors duration-200"
                            disabled=move || controller.with(|c| c.is_sending())
                        >
                            {move || controller.with(|c| c.submit_label())}
                        </button>
                    </form>

                    <div class="mt-12 flex justify-center space-x-6">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|(name, glyph, href)| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=name
                                        class="text-gray-400 hover:text-white transition-colors font-bold"
                                    >
                                        {glyph}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
