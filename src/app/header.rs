use leptos::{either::Either, prelude::*};

use crate::i18n::{Language, TranslationKey};

use super::{tr, use_controller};

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "text-blue-400 font-semibold transition-colors"
    } else {
        "hover:text-blue-400 transition-colors"
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let controller = use_controller();
    let menu_open = move || controller.with(|c| c.is_menu_open());

    view! {
        <header class=move || controller.with(|c| c.header_class())>
            <nav class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <a href="#" class="text-2xl font-bold">
                        "Mariano JavaSwing"
                    </a>

                    // mobile controls
                    <div class="flex items-center gap-4 md:hidden">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="text-2xl leading-none"
                            aria-label=tr(controller, TranslationKey::ToggleMenu)
                            aria-expanded=move || menu_open().to_string()
                            on:click=move |_| controller.update(|c| c.toggle_menu())
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>

                    // desktop navigation
                    <div class="hidden md:flex items-center space-x-8">
                        <NavLinks close_menu=false />
                        <LanguagePicker />
                        <ThemeToggle />
                    </div>
                </div>

                <div class=move || controller.with(|c| c.menu_class())>
                    <div class="flex flex-col space-y-4">
                        <NavLinks close_menu=true />
                        <LanguagePicker />
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn NavLinks(close_menu: bool) -> impl IntoView {
    let controller = use_controller();
    move || {
        controller
            .with(|c| c.nav_items())
            .into_iter()
            .map(|item| {
                view! {
                    <a
                        href=item.href
                        class=nav_link_class(item.active)
                        aria-current=if item.active { Some("location") } else { None }
                        on:click=move |_| {
                            if close_menu {
                                controller.update(|c| c.close_menu());
                            }
                        }
                    >
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    }
}

#[component]
fn LanguagePicker() -> impl IntoView {
    let controller = use_controller();
    view! {
        <select
            class="bg-transparent border border-gray-600 rounded-md px-2 py-1 focus:outline-none focus:border-blue-500"
            aria-label=tr(controller, TranslationKey::LanguagePicker)
            prop:value=move || controller.with(|c| c.language().code())
            on:change=move |ev| {
                let code = event_target_value(&ev);
                controller.maybe_update(|c| c.set_language(&code));
            }
        >
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    view! {
                        <option value=lang.code() class="text-black">
                            {lang.native_name()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let controller = use_controller();
    view! {
        <button
            type="button"
            class="text-xl leading-none hover:text-blue-400 transition-colors"
            aria-label=tr(controller, TranslationKey::ToggleTheme)
            on:click=move |_| {
                controller
                    .update(|c| {
                        c.toggle_theme();
                    })
            }
        >
            {move || {
                if controller.with(|c| c.is_dark()) {
                    Either::Left(view! { <span>"☀"</span> })
                } else {
                    Either::Right(view! { <span>"☾"</span> })
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_is_highlighted() {
        assert!(nav_link_class(true).contains("text-blue-400"));
        assert!(!nav_link_class(false).starts_with("text-blue-400"));
    }
}
