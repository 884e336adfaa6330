use leptos::prelude::*;

use crate::{render, session::Session};

#[component]
pub fn Background() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let dots = Memo::new(move |_| session.with(render::background));

    view! {
        <div class="absolute inset-0 opacity-10 pointer-events-none z-0" aria-hidden="true">
            <div class="absolute top-0 left-0 w-full h-full">
                {move || {
                    dots.get()
                        .into_iter()
                        .map(|dot| {
                            view! {
                                <div
                                    class="absolute w-1 h-1 bg-cyan-400 rounded-full animate-pulse"
                                    style=dot.style()
                                ></div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
