use leptos::prelude::*;

use crate::render::AboutView;

#[component]
pub fn AboutSection(about: AboutView) -> impl IntoView {
    view! {
        <section class="grid md:grid-cols-2 gap-12">
            <div class="space-y-6">
                <h2 class="text-3xl font-bold text-cyan-400 font-mono">"> whoami"</h2>
                <h3 class="text-xl font-bold">{about.name}</h3>
                {about
                    .paragraphs
                    .into_iter()
                    .map(|p| view! { <p class="text-gray-300 leading-relaxed">{p}</p> })
                    .collect_view()}
                <div class="bg-gray-800/50 border border-cyan-500/30 rounded-lg p-6 space-y-3">
                    {about
                        .contact
                        .into_iter()
                        .map(|line| {
                            let text = line.text;
                            view! {
                                <div class="flex items-center space-x-3">
                                    <i class=format!("text-cyan-400 {}", line.icon) />
                                    {match line.href {
                                        Some(href) => {
                                            view! {
                                                <a
                                                    href=href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-gray-300 hover:text-cyan-400"
                                                >
                                                    {text}
                                                </a>
                                            }
                                                .into_any()
                                        }
                                        None => view! { <span class="text-gray-300">{text}</span> }.into_any(),
                                    }}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <h2 class="text-3xl font-bold text-cyan-400 font-mono mb-6">"> skills --list"</h2>
                {about
                    .skills
                    .into_iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <div class="mb-4" style=format!("animation-delay: {:.1}s", i as f32 * 0.2)>
                                <div class="flex justify-between mb-2">
                                    <div class="flex items-center space-x-2">
                                        <i class=format!("text-cyan-400 {}", skill.icon.class()) />
                                        <span class="text-white font-mono">{skill.name}</span>
                                    </div>
                                    <span class="text-cyan-400 font-mono">{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="w-full bg-gray-800 rounded-full h-2">
                                    <div
                                        class="bg-gradient-to-r from-cyan-500 to-green-400 h-2 rounded-full transition-all duration-1000 ease-out"
                                        style=format!("width: {}%", skill.fill)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
