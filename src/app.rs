mod about;
mod background;
mod certifications;
mod home;
mod nav;
mod projects;
mod viewer;

use std::ops::ControlFlow;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_window_size, UseWindowSizeReturn};
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    catalog::Catalog,
    config::{build_year, Settings},
    content::ContentError,
    render::{self, PageView},
    scheduler::{AnimationTimers, IntervalScheduler},
    session::Session,
};

use about::AboutSection;
use background::Background;
use certifications::CertificationsSection;
use home::HomeSection;
use nav::Nav;
use projects::ProjectsSection;
use viewer::CertificateViewer;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/cyber-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = Catalog::embedded().and_then(|c| Ok((c, Settings::embedded()?)));

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=path!("/")
                    view=move || match content.clone() {
                        Ok((catalog, settings)) => {
                            view! { <Portfolio catalog settings /> }.into_any()
                        }
                        Err(error) => view! { <ContentFault error /> }.into_any(),
                    }
                />
            </Routes>
        </Router>
    }
}

/// Width of the viewport right now, if there is one.
pub(crate) fn current_width(width: Signal<f64>) -> Option<u32> {
    let w = width.get_untracked();
    (w.is_finite() && w > 0.0).then(|| w.round() as u32)
}

#[component]
fn Portfolio(catalog: &'static Catalog, settings: &'static Settings) -> impl IntoView {
    let session = RwSignal::new(Session::new(settings.clone(), &catalog.profile.headline));
    provide_context(session);
    let UseWindowSizeReturn { width, .. } = use_window_size();

    // effects only run in the browser, so timers and the dot layout never exist during SSR
    Effect::new(move |_| {
        let mut rng = SmallRng::from_entropy();
        session.update(|s| s.mount(&mut rng, current_width(width)));
        let timers = AnimationTimers::start(&IntervalScheduler, settings, move |tick| {
            session
                .try_update(|s| s.tick(tick))
                .unwrap_or(ControlFlow::Break(()))
        });
        let timers = StoredValue::new_local(timers);
        on_cleanup(move || {
            timers.try_update_value(|t| t.cancel_all());
        });
    });

    let section = Memo::new(move |_| session.with(|s| s.nav.active));
    // rebuilt on section change or skill reveal, never on animation ticks
    let page_key = Memo::new(move |_| {
        session.with(|s| (s.nav.active, s.animation.skills_revealed))
    });

    view! {
        <Title formatter=move |title| format!("{} - {title}", catalog.profile.name) />
        <Title text=move || section.get().label() />
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-black to-gray-800 text-white relative overflow-hidden">
            <Background />
            <Nav width />
            <main class="relative z-10 max-w-7xl mx-auto p-6 pt-12">
                {move || {
                    page_key.track();
                    match session.with_untracked(|s| render::page(s, catalog)) {
                        PageView::Home(home) => view! { <HomeSection home /> }.into_any(),
                        PageView::About(about) => view! { <AboutSection about /> }.into_any(),
                        PageView::Certifications(certs) => {
                            view! { <CertificationsSection certs /> }.into_any()
                        }
                        PageView::Projects(projects) => {
                            view! { <ProjectsSection projects /> }.into_any()
                        }
                    }
                }}
            </main>
            <footer class="relative z-10 text-center p-6 border-t border-cyan-500/30 mt-12">
                <p class="text-gray-400 font-mono">
                    <span class="text-cyan-400">"[SECURE CONNECTION ESTABLISHED]"</span>
                    " "
                    {render::footer(catalog, build_year())}
                </p>
            </footer>
            <CertificateViewer />
        </div>
    }
}

#[component]
fn ContentFault(error: ContentError) -> impl IntoView {
    log::error!("content failed to load: {error}");
    view! {
        <Title text="Unavailable" />
        <main class="flex flex-col flex-grow justify-center items-center mx-auto w-full max-w-7xl p-6">
            <h1 class="font-bold text-2xl text-center text-red-400">"Site content unavailable"</h1>
            <pre class="mt-4 whitespace-pre-wrap text-gray-400">{error.to_string()}</pre>
        </main>
    }
}
