use leptos::prelude::*;

use crate::{i18n::TranslationKey, scroll::Section};

use super::{tr, use_controller};

#[derive(Debug, Clone, Copy)]
enum Accent {
    Blue,
    Green,
    Purple,
}

impl Accent {
    fn banner(self) -> &'static str {
        match self {
            Self::Blue => "h-48 bg-gradient-to-r from-blue-500 to-blue-700",
            Self::Green => "h-48 bg-gradient-to-r from-green-500 to-green-700",
            Self::Purple => "h-48 bg-gradient-to-r from-purple-500 to-purple-700",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Blue => "px-3 py-1 bg-blue-100 text-blue-800 rounded-full text-sm",
            Self::Green => "px-3 py-1 bg-green-100 text-green-800 rounded-full text-sm",
            Self::Purple => "px-3 py-1 bg-purple-100 text-purple-800 rounded-full text-sm",
        }
    }

    fn link(self) -> &'static str {
        match self {
            Self::Blue => "inline-flex items-center text-blue-600 hover:text-blue-700",
            Self::Green => "inline-flex items-center text-green-600 hover:text-green-700",
            Self::Purple => "inline-flex items-center text-purple-600 hover:text-purple-700",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Project {
    title: TranslationKey,
    description: TranslationKey,
    tags: &'static [&'static str],
    link: Option<&'static str>,
    accent: Accent,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: TranslationKey::Project1Title,
        description: TranslationKey::Project1Description,
        tags: &["Flutter", "Kafka", "PostgreSQL"],
        link: Some("https://wasp-bm24.web.app/#/login"),
        accent: Accent::Blue,
    },
    Project {
        title: TranslationKey::Project2Title,
        description: TranslationKey::Project2Description,
        tags: &["Java", "Spring Boot", "MySQL"],
        link: None,
        accent: Accent::Green,
    },
    Project {
        title: TranslationKey::Project3Title,
        description: TranslationKey::Project3Description,
        tags: &["Java", "Docker", "Kubernetes"],
        link: None,
        accent: Accent::Purple,
    },
    Project {
        title: TranslationKey::Project4Title,
        description: TranslationKey::Project4Description,
        tags: &["Dart", "Flutter", "Firebase"],
        link: Some("https://async-energy.web.app/"),
        accent: Accent::Green,
    },
];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let controller = use_controller();
    view! {
        <section id=Section::Projects.id() class="py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-12 text-center">
                    {tr(controller, TranslationKey::HighlightKeyProjects)}
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS.into_iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let controller = use_controller();
    let Project {
        title,
        description,
        tags,
        link,
        accent,
    } = project;
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-lg overflow-hidden">
            <div class=accent.banner()></div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{tr(controller, title)}</h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4">{tr(controller, description)}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .iter()
                        .map(|t| view! { <span class=accent.tag()>{*t}</span> })
                        .collect_view()}
                </div>
                // external demos open in a new tab
                <a
                    href=link.unwrap_or("#")
                    target=link.map(|_| "_blank")
                    rel=link.map(|_| "noopener noreferrer")
                    class=accent.link()
                >
                    {tr(controller, TranslationKey::SeeDetails)}
                    <span class="ml-1">"↗"</span>
                </a>
            </div>
        </div>
    }
}
