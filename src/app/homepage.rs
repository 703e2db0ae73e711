use leptos::prelude::*;
use leptos_meta::Title;

use crate::{i18n::TranslationKey, scroll::Section};

use super::{contact::ContactSection, projects::ProjectsSection, tr, use_controller};

const AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/43576446?v=4";

/// Skills shown as-is in every language; the rest are translated.
const SKILLS: [&str; 9] = [
    "Java",
    "Spring Boot",
    "Dart",
    "MySQL",
    "PostgreSQL",
    "Kafka",
    "Flutter",
    "Docker",
    "Kubernetes",
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <ProjectsSection />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let controller = use_controller();
    view! {
        <section class="pt-32 pb-20 bg-[#1A1A2E] text-white">
            <div class="container mx-auto px-4">
                <h1 class="text-4xl md:text-6xl font-bold mb-4">
                    {tr(controller, TranslationKey::HeroTitle)}
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-4">
                    {tr(controller, TranslationKey::HeroExperience)}
                </p>
                <p class="text-lg md:text-xl text-gray-400 mb-8">
                    {tr(controller, TranslationKey::HeroSpecialty)}
                </p>
                <a
                    href=Section::Contact.href()
                    class="inline-flex items-center px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors duration-200"
                >
                    {tr(controller, TranslationKey::GetInTouch)}
                    <span class="ml-2">"›"</span>
                </a>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let controller = use_controller();
    view! {
        <section id=Section::About.id() class="py-20">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center gap-12">
                    <div class="w-full md:w-1/3">
                        <img
                            src=AVATAR_URL
                            alt="Mariano JavaSwing"
                            class="rounded-2xl shadow-lg w-full"
                        />
                    </div>
                    <div class="w-full md:w-2/3">
                        <h2 class="text-3xl font-bold mb-6">
                            {tr(controller, TranslationKey::AboutMe)}
                        </h2>
                        <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed">
                            {tr(controller, TranslationKey::AboutMeContent)}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let controller = use_controller();
    let skill_card = |label: AnyView| {
        view! {
            <div class="bg-gray-50 dark:bg-gray-700 rounded-xl p-6 text-center shadow-md hover:shadow-lg transition-shadow duration-200">
                <h3 class="text-lg font-semibold text-gray-800 dark:text-gray-100">{label}</h3>
            </div>
        }
    };
    view! {
        <section id=Section::Skills.id() class="py-20 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-12 text-center">
                    {tr(controller, TranslationKey::TechnicalSkills02)}
                </h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    {SKILLS.into_iter().map(|s| skill_card(s.into_any())).collect_view()}
                    {skill_card(tr(controller, TranslationKey::Microservices).into_any())}
                    {skill_card(tr(controller, TranslationKey::RestfulApis).into_any())}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let controller = use_controller();
    view! {
        <footer class="bg-[#1A1A2E] text-gray-400 py-8">
            <div class="container mx-auto px-4 text-center">
                <p>
                    {format!("© {} Mariano J8. ", env!("BUILD_YEAR"))}
                    {tr(controller, TranslationKey::RightsReserved)}
                </p>
            </div>
        </footer>
    }
}
