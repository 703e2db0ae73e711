mod contact;
mod header;
mod homepage;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    config::EmailConfig,
    controller::ViewController,
    i18n::TranslationKey,
    theme::{BrowserStorage, DARK_MODE_KEY},
};

use header::Header;
use homepage::HomePage;

/// Page state shared with every component through context.
pub type Controller = RwSignal<ViewController<BrowserStorage>>;

pub fn use_controller() -> Controller {
    expect_context::<Controller>()
}

/// Reactive translation of `key`.
pub fn tr(
    controller: Controller,
    key: TranslationKey,
) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    move || controller.with(|c| c.t(key))
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let storage = BrowserStorage::new(DARK_MODE_KEY);
    let controller: Controller = RwSignal::new(ViewController::new(
        storage,
        EmailConfig::from_build_env(),
    ));
    provide_context(controller);

    // the stored value only arrives after hydration; follow it from then on
    Effect::watch(
        move || storage.raw(),
        move |_, _, _| {
            controller.maybe_update(|c| {
                let was_dark = c.is_dark();
                c.sync_theme() != was_dark
            });
        },
        true,
    );

    #[cfg(feature = "hydrate")]
    track_scroll(controller);

    view! {
        // root marker classes for the dark variant, and the document language
        <Html
            {..}
            class=move || controller.with(|c| c.theme_class())
            lang=move || controller.with(|c| c.language().code())
        />
        <Title formatter=|title| format!("Mariano JavaSwing - {title}") />

        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-gray-100 transition-colors">
                <Header />
                <main>
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Recomputes the active section on mount and on every scroll event.
#[cfg(feature = "hydrate")]
fn track_scroll(controller: Controller) {
    use leptos::ev;

    use crate::scroll::{Section, SectionBounds};

    let observe = move || {
        let offset = window().scroll_y().unwrap_or_default();
        let doc = document();
        let measure = |s: Section| {
            doc.get_element_by_id(s.id()).map(|el| {
                let rect = el.get_bounding_client_rect();
                SectionBounds::new(rect.top(), rect.bottom())
            })
        };
        controller.maybe_update(|c| c.on_scroll(offset, measure));
    };

    Effect::new(move |_| observe());
    let handle = window_event_listener(ev::scroll, move |_| observe());
    on_cleanup(move || handle.remove());
}

#[component]
fn NotFound() -> impl IntoView {
    let controller = use_controller();
    view! {
        <Title text="404" />
        <section class="pt-40 pb-20 text-center">
            <h1 class="text-3xl font-bold mb-6">"404"</h1>
            <p class="text-lg mb-8">{tr(controller, TranslationKey::PageNotFound)}</p>
            <a href="/" class="text-blue-600 hover:text-blue-700 dark:text-blue-400">
                "Mariano JavaSwing"
            </a>
        </section>
    }
}
