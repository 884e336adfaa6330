use leptos::{either::*, prelude::*};

use crate::{
    catalog::ActionKind,
    render::{ActionControl, ActionTarget, CertificateCard, CertificationsView},
    session::Session,
};

fn action_class(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Verify => "bg-green-500/20 text-green-400 hover:bg-green-500/30",
        ActionKind::QrVerify => "bg-blue-500/20 text-blue-400 hover:bg-blue-500/30",
        ActionKind::Certificate => "bg-cyan-500/20 text-cyan-400 hover:bg-cyan-500/30",
        ActionKind::OfferLetter => "bg-purple-500/20 text-purple-400 hover:bg-purple-500/30",
        ActionKind::GroupPhoto => "bg-yellow-500/20 text-yellow-400 hover:bg-yellow-500/30",
    }
}

fn action_icon(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Verify => "icon-shield",
        ActionKind::QrVerify => "icon-qr",
        ActionKind::Certificate => "icon-award",
        ActionKind::OfferLetter => "icon-mail",
        ActionKind::GroupPhoto => "icon-users",
    }
}

#[component]
pub fn CertificationsSection(certs: CertificationsView) -> impl IntoView {
    view! {
        <div class="space-y-12">
            <h2 class="text-3xl font-bold text-cyan-400 font-mono text-center">
                "> ls ~/certs"
            </h2>
            {certs
                .groups
                .into_iter()
                .map(|group| {
                    view! {
                        <section>
                            <h3 class="text-2xl font-bold text-white mb-6">{group.title}</h3>
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {group
                                    .cards
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, card)| view! { <CertificationCard card index /> })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CertificationCard(card: CertificateCard, index: usize) -> impl IntoView {
    let label = card.title.clone();
    view! {
        <div
            class="bg-gray-800/50 border border-cyan-500/30 rounded-lg p-6 hover:border-cyan-400 transition-colors duration-200 hover:bg-gray-800"
            style=format!("animation-delay: {:.1}s", index as f32 * 0.1)
            tabindex="0"
            aria-label=label
        >
            <div class="flex justify-between items-start mb-3">
                <h3 class="text-cyan-400 font-bold text-lg">{card.title}</h3>
                {card.verified.then(|| view! { <i class="icon-shield text-green-400" /> })}
            </div>
            <p class="text-gray-300 font-mono text-sm mb-2">{card.issuer}</p>
            <p class="text-cyan-300 text-sm mb-3">{card.date}</p>
            <p class="text-gray-400 text-sm mb-4">{card.description}</p>
            {card
                .certificate_id
                .map(|id| {
                    view! { <p class="text-xs text-gray-500 font-mono mb-3">"ID: " {id}</p> }
                })}
            <div class="flex flex-wrap gap-2">
                {card
                    .actions
                    .into_iter()
                    .map(|action| view! { <ActionButton action /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ActionButton(action: ActionControl) -> impl IntoView {
    let class = format!(
        "{} px-3 py-1 rounded-full text-xs font-mono transition-colors flex items-center space-x-1",
        action_class(action.kind)
    );
    let inner = view! {
        <i class=action_icon(action.kind) />
        <span>{action.label}</span>
    };
    match (action.target, action.href) {
        (ActionTarget::NewTab, Some(href)) => EitherOf3::A(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=class>
                {inner}
            </a>
        }),
        (ActionTarget::Viewer, Some(href)) => {
            let session = expect_context::<RwSignal<Session>>();
            EitherOf3::B(view! {
                <button
                    class=class
                    on:click=move |_| session.update(|s| s.viewer.open(href.clone()))
                >
                    {inner}
                </button>
            })
        }
        _ => EitherOf3::C(view! {
            <button aria-label="Scan QR code to verify" class=class>
                {inner}
            </button>
        }),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_card_renders_title_and_link() {
        let card = CertificateCard {
            title: "Network Defense".to_string(),
            issuer: "Cisco".to_string(),
            date: "2024".to_string(),
            description: "Packet analysis".to_string(),
            verified: true,
            certificate_id: None,
            actions: vec![ActionControl {
                kind: ActionKind::Verify,
                label: "Verify",
                href: Some("https://verify.example/1".to_string()),
                target: ActionTarget::NewTab,
            }],
        };
        let html = Owner::new().with(|| view! { <CertificationCard card index=0 /> }.to_html());
        assert!(html.contains(r#"aria-label="Network Defense""#));
        assert!(html.contains(">Network Defense<"));
        assert!(html.contains(r#"href="https://verify.example/1""#));
    }
}
