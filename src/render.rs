use serde::Serialize;

use crate::{
    animation::Dot,
    catalog::{
        usable_link, ActionKind, Badge, Catalog, CertificateAction, CertificateEntry,
        CertificateGroupKind, Icon, InternshipEntry, ProjectEntry, Stat,
    },
    session::{Section, Session},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavView {
    pub items: Vec<NavItem>,
    pub mobile_open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PageView {
    Home(HomeView),
    About(AboutView),
    Certifications(CertificationsView),
    Projects(ProjectsView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub tagline: String,
    pub badge: Option<Badge>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLine {
    pub icon: &'static str,
    pub text: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillBar {
    pub name: String,
    pub icon: Icon,
    pub level: u32,
    /// Width of the filled bar; zero until the session has revealed skills.
    pub fill: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub name: String,
    pub paragraphs: Vec<String>,
    pub contact: Vec<ContactLine>,
    pub skills: Vec<SkillBar>,
}

/// Where an action control sends the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionTarget {
    NewTab,
    Viewer,
    Inert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionControl {
    pub kind: ActionKind,
    pub label: &'static str,
    pub href: Option<String>,
    pub target: ActionTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateCard {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub verified: bool,
    pub certificate_id: Option<String>,
    pub actions: Vec<ActionControl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateGroupView {
    pub kind: CertificateGroupKind,
    pub title: &'static str,
    pub cards: Vec<CertificateCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationsView {
    pub groups: Vec<CertificateGroupView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsView {
    pub projects: Vec<ProjectEntry>,
    pub internships: Vec<InternshipEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerView {
    pub uri: String,
}

pub fn nav(session: &Session) -> NavView {
    NavView {
        items: Section::ALL
            .into_iter()
            .map(|section| NavItem {
                section,
                label: section.label(),
                active: section == session.nav.active,
            })
            .collect(),
        mobile_open: session.nav.mobile_nav_open,
    }
}

pub fn page(session: &Session, catalog: &Catalog) -> PageView {
    match session.nav.active {
        Section::Home => PageView::Home(home(catalog)),
        Section::About => PageView::About(about(session, catalog)),
        Section::Certifications => {
            PageView::Certifications(certifications(catalog, session.viewer_enabled()))
        }
        Section::Projects => PageView::Projects(ProjectsView {
            projects: catalog.projects.clone(),
            internships: catalog.internships.clone(),
        }),
    }
}

/// Static part of the hero; the headline and cursor follow the timers separately.
pub fn home(catalog: &Catalog) -> HomeView {
    HomeView {
        tagline: catalog.profile.tagline.clone(),
        badge: catalog.profile.badge.clone(),
        stats: catalog.profile.stats.clone(),
    }
}

pub fn about(session: &Session, catalog: &Catalog) -> AboutView {
    let profile = &catalog.profile;
    let contact = [
        ("icon-map-pin", profile.location.clone(), None),
        (
            "icon-mail",
            profile.email.clone(),
            profile.email.as_ref().map(|e| format!("mailto:{e}")),
        ),
        (
            "icon-phone",
            profile.phone.clone(),
            profile.phone.as_ref().map(|p| format!("tel:{}", p.replace(' ', ""))),
        ),
        ("icon-github", profile.github.clone(), profile.github.clone()),
        ("icon-linkedin", profile.linkedin.clone(), profile.linkedin.clone()),
    ]
    .into_iter()
    .filter_map(|(icon, text, href)| {
        let text = text.filter(|t| usable_link(Some(t.as_str())).is_some())?;
        Some(ContactLine { icon, text, href })
    })
    .collect();

    let revealed = session.animation.skills_revealed;
    AboutView {
        name: profile.name.clone(),
        paragraphs: profile.about.clone(),
        contact,
        skills: catalog
            .skills
            .iter()
            .map(|s| SkillBar {
                name: s.name.clone(),
                icon: s.icon,
                level: s.level,
                fill: if revealed { s.level } else { 0 },
            })
            .collect(),
    }
}

pub fn certifications(catalog: &Catalog, viewer_enabled: bool) -> CertificationsView {
    CertificationsView {
        groups: CertificateGroupKind::ALL
            .into_iter()
            .map(|kind| CertificateGroupView {
                kind,
                title: kind.title(),
                cards: catalog
                    .certifications
                    .group(kind)
                    .iter()
                    .map(|c| card(c, viewer_enabled))
                    .collect(),
            })
            .collect(),
    }
}

fn card(cert: &CertificateEntry, viewer_enabled: bool) -> CertificateCard {
    CertificateCard {
        title: cert.title.clone(),
        issuer: cert.issuer.clone(),
        date: cert.date.clone(),
        description: cert.description.clone(),
        verified: cert.verified,
        certificate_id: cert.certificate_id.clone(),
        actions: cert
            .actions()
            .into_iter()
            .map(|a| control(a, viewer_enabled))
            .collect(),
    }
}

fn control(action: CertificateAction, viewer_enabled: bool) -> ActionControl {
    let target = match (action.kind, &action.href) {
        (_, None) => ActionTarget::Inert,
        (ActionKind::Verify, Some(_)) => ActionTarget::NewTab,
        (_, Some(_)) if viewer_enabled => ActionTarget::Viewer,
        (_, Some(_)) => ActionTarget::NewTab,
    };
    ActionControl {
        kind: action.kind,
        label: action.kind.label(),
        href: action.href,
        target,
    }
}

pub fn background(session: &Session) -> Vec<Dot> {
    session.animation.dots().to_vec()
}

/// The overlay, when open.
pub fn viewer(session: &Session) -> Option<ViewerView> {
    if !session.viewer.is_open() {
        return None;
    }
    session.viewer.target().map(|uri| ViewerView {
        uri: uri.to_string(),
    })
}

pub fn footer(catalog: &Catalog, year: i32) -> String {
    format!("© {year} {}", catalog.profile.copyright)
}
