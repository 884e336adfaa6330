use leptos::prelude::*;

use crate::{
    catalog::{InternshipEntry, ProjectEntry},
    render::ProjectsView,
};

#[component]
pub fn ProjectsSection(projects: ProjectsView) -> impl IntoView {
    let has_internships = !projects.internships.is_empty();
    view! {
        <div class="space-y-12">
            <section>
                <h2 class="text-3xl font-bold text-cyan-400 font-mono text-center mb-8">
                    "> ls ~/projects"
                </h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {projects
                        .projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </section>
            {has_internships
                .then(|| {
                    view! {
                        <section>
                            <h2 class="text-3xl font-bold text-cyan-400 font-mono text-center mb-8">
                                "> cat ~/internships"
                            </h2>
                            <div class="space-y-6">
                                {projects
                                    .internships
                                    .into_iter()
                                    .map(|internship| view! { <InternshipCard internship /> })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })}
        </div>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 border border-cyan-500/30 rounded-lg p-6 hover:border-cyan-400 transition-colors duration-200">
            <div class="flex justify-between items-start mb-3">
                <h3 class="text-cyan-400 font-bold text-xl">{project.title}</h3>
                <span class="bg-green-500/20 text-green-400 px-2 py-1 rounded text-xs font-mono">
                    {project.status}
                </span>
            </div>
            <p class="text-gray-300 mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-3">
                {project
                    .tech
                    .into_iter()
                    .map(|t| {
                        view! {
                            <span class="bg-cyan-500/10 text-cyan-300 px-2 py-1 rounded text-xs font-mono">
                                {t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            {project
                .achievement
                .map(|a| {
                    view! {
                        <p class="text-yellow-400 text-sm flex items-center space-x-2">
                            <i class="icon-trophy" />
                            <span>{a}</span>
                        </p>
                    }
                })}
        </div>
    }
}

#[component]
fn InternshipCard(internship: InternshipEntry) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 border-l-4 border-cyan-500 rounded-lg p-6">
            <div class="flex flex-col md:flex-row md:justify-between md:items-center mb-2">
                <h3 class="text-white font-bold text-lg">
                    {internship.role} <span class="text-cyan-400">" @ " {internship.organization}</span>
                </h3>
                <span class="text-gray-400 font-mono text-sm">{internship.period}</span>
            </div>
            <p class="text-gray-300 mb-3">{internship.description}</p>
            <ul class="list-disc list-inside text-gray-400 text-sm space-y-1">
                {internship
                    .highlights
                    .into_iter()
                    .map(|h| view! { <li>{h}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
