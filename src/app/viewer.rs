use leptos::prelude::*;

use crate::{render, session::Session};

/// Overlay showing one certificate document; closed by the backdrop or the close button.
#[component]
pub fn CertificateViewer() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let overlay = Memo::new(move |_| session.with(render::viewer));
    let close = move || session.update(|s| s.viewer.close());

    move || {
        overlay.get().map(|v| {
            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |_| close()
                >
                    <div
                        class="relative w-full max-w-4xl h-[80vh] bg-gray-900 border border-cyan-500/50 rounded-lg overflow-hidden"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button
                            aria-label="Close certificate"
                            class="absolute top-2 right-2 z-10 bg-gray-800 hover:bg-gray-700 text-cyan-400 rounded px-3 py-1 font-mono"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                        <iframe src=v.uri class="w-full h-full border-none" title="Certificate"></iframe>
                    </div>
                </div>
            }
        })
    }
}
