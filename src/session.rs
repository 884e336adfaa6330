use std::{fmt, ops::ControlFlow, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    animation::{scatter, CursorBlink, Dot, Typewriter},
    config::{Settings, ViewerCloseBehavior},
    scheduler::Tick,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Home,
    About,
    Certifications,
    Projects,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Certifications,
        Section::Projects,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "~/home",
            Section::About => "~/about",
            Section::Certifications => "~/certs",
            Section::Projects => "~/projects",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Certifications => "certifications",
            Section::Projects => "projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Section::Home),
            "about" => Ok(Section::About),
            "certifications" | "certs" | "achievements" => Ok(Section::Certifications),
            "projects" | "internships" => Ok(Section::Projects),
            _ => Err(UnknownSection(s.to_string())),
        }
    }
}

/// Viewport class at the time of a navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Compact,
    Wide,
}

impl Viewport {
    pub fn from_width(width: u32, compact_breakpoint: u32) -> Self {
        if width < compact_breakpoint {
            Viewport::Compact
        } else {
            Viewport::Wide
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Section,
    pub mobile_nav_open: bool,
}

impl NavigationState {
    /// Returns whether the active section changed.
    pub fn select(&mut self, section: Section) -> bool {
        if self.active == section {
            return false;
        }
        log::debug!("section {} -> {}", self.active, section);
        self.active = section;
        true
    }

    /// Selects by name, ignoring anything that isn't a known section.
    pub fn select_named(&mut self, name: &str) -> bool {
        match name.parse::<Section>() {
            Ok(section) => {
                self.select(section);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    pub fn toggle_mobile_nav(&mut self) {
        self.mobile_nav_open = !self.mobile_nav_open;
    }

    pub fn close_mobile_nav(&mut self) {
        self.mobile_nav_open = false;
    }

    /// Nav bar action: select, then collapse the menu on compact layouts.
    pub fn navigate(&mut self, section: Section, viewport: Viewport) {
        self.select(section);
        if viewport == Viewport::Compact {
            self.close_mobile_nav();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateViewer {
    open: bool,
    target: Option<String>,
    on_close: ViewerCloseBehavior,
}

impl CertificateViewer {
    pub fn new(on_close: ViewerCloseBehavior) -> Self {
        Self {
            open: false,
            target: None,
            on_close,
        }
    }

    /// Shows `uri`, replacing whatever was open.
    pub fn open(&mut self, uri: impl Into<String>) {
        let uri = uri.into();
        log::debug!("viewer open {uri}");
        self.open = true;
        self.target = Some(uri);
    }

    pub fn close(&mut self) {
        self.open = false;
        if self.on_close == ViewerCloseBehavior::Clear {
            self.target = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub typewriter: Typewriter,
    pub cursor: CursorBlink,
    dots: Option<Vec<Dot>>,
    pub skills_revealed: bool,
}

impl AnimationState {
    pub fn new(headline: &str) -> Self {
        Self {
            typewriter: Typewriter::new(headline),
            cursor: CursorBlink::default(),
            dots: None,
            skills_revealed: false,
        }
    }

    /// Generated on first call and frozen afterwards.
    pub fn dots_or_scatter<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        settings: &Settings,
        viewport_width: Option<u32>,
    ) -> &[Dot] {
        self.dots.get_or_insert_with(|| {
            scatter(
                rng,
                settings.dot_count,
                viewport_width,
                settings.dot_min_viewport,
            )
        })
    }

    pub fn dots(&self) -> &[Dot] {
        self.dots.as_deref().unwrap_or_default()
    }
}

/// Everything one visitor's page holds, from load to teardown.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub nav: NavigationState,
    pub animation: AnimationState,
    pub viewer: CertificateViewer,
    settings: Settings,
}

impl Session {
    pub fn new(settings: Settings, headline: &str) -> Self {
        Self {
            nav: NavigationState::default(),
            animation: AnimationState::new(headline),
            viewer: CertificateViewer::new(settings.viewer_close),
            settings,
        }
    }

    /// One-time start of the session on the client: background layout and skill reveal.
    pub fn mount<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport_width: Option<u32>) {
        let settings = self.settings.clone();
        let dots = self
            .animation
            .dots_or_scatter(rng, &settings, viewport_width)
            .len();
        self.animation.skills_revealed = true;
        log::debug!("session mounted with {dots} background dots");
    }

    pub fn tick(&mut self, tick: Tick) -> ControlFlow<()> {
        match tick {
            Tick::Typewriter => self.animation.typewriter.tick(),
            Tick::Cursor => self.animation.cursor.tick(),
        }
    }

    pub fn navigate(&mut self, section: Section, viewport_width: Option<u32>) {
        let viewport = viewport_width
            .map(|w| Viewport::from_width(w, self.settings.compact_breakpoint))
            .unwrap_or(Viewport::Wide);
        self.nav.navigate(section, viewport);
    }

    pub fn viewer_enabled(&self) -> bool {
        self.settings.certificate_viewer
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;
    use crate::scheduler::{manual::ManualScheduler, AnimationTimers};

    const HEADLINE: &str = "Jane Doe > Tester";

    fn session() -> Session {
        Session::new(Settings::default(), HEADLINE)
    }

    #[test]
    fn test_fresh_session_starts_home() {
        let s = session();
        assert_eq!(s.nav.active, Section::Home);
        assert!(!s.nav.mobile_nav_open);
        assert!(!s.viewer.is_open());
        assert_eq!(s.animation.typewriter.text(), "");
        assert!(s.animation.cursor.visible());
        assert!(s.animation.dots().is_empty());
    }

    #[test]
    fn test_select_idempotent() {
        let mut nav = NavigationState::default();
        let before = nav;
        assert!(!nav.select(Section::Home));
        assert_eq!(nav, before);
        assert!(nav.select(Section::About));
        assert!(!nav.select(Section::About));
        assert_eq!(nav.active, Section::About);
    }

    #[test]
    fn test_section_aliases() {
        assert_eq!("achievements".parse::<Section>(), Ok(Section::Certifications));
        assert_eq!("internships".parse::<Section>(), Ok(Section::Projects));
        assert_eq!(" About ".parse::<Section>(), Ok(Section::About));
        assert!("contact".parse::<Section>().is_err());
    }

    #[test]
    fn test_unknown_name_ignored() {
        let mut nav = NavigationState::default();
        nav.select(Section::Projects);
        assert!(!nav.select_named("blog"));
        assert_eq!(nav.active, Section::Projects);
        assert!(nav.select_named("certifications"));
        assert_eq!(nav.active, Section::Certifications);
    }

    #[test]
    fn test_mobile_nav() {
        let mut nav = NavigationState::default();
        nav.toggle_mobile_nav();
        assert!(nav.mobile_nav_open);
        nav.navigate(Section::About, Viewport::Wide);
        assert!(nav.mobile_nav_open);
        nav.navigate(Section::Projects, Viewport::Compact);
        assert!(!nav.mobile_nav_open);
        assert_eq!(nav.active, Section::Projects);
        nav.toggle_mobile_nav();
        nav.toggle_mobile_nav();
        assert!(!nav.mobile_nav_open);
    }

    #[test]
    fn test_session_navigate_uses_breakpoint() {
        let mut s = session();
        s.nav.toggle_mobile_nav();
        s.navigate(Section::About, Some(1024));
        assert!(s.nav.mobile_nav_open);
        s.navigate(Section::Home, Some(375));
        assert!(!s.nav.mobile_nav_open);
        assert_eq!(s.nav.active, Section::Home);

        let breakpoint = Settings::default().compact_breakpoint;
        s.nav.toggle_mobile_nav();
        s.navigate(Section::About, Some(breakpoint));
        assert!(s.nav.mobile_nav_open);
        s.navigate(Section::Projects, Some(breakpoint - 1));
        assert!(!s.nav.mobile_nav_open);
        assert_eq!(Viewport::from_width(breakpoint, breakpoint), Viewport::Wide);
        assert_eq!(Viewport::from_width(breakpoint - 1, breakpoint), Viewport::Compact);
    }

    #[test]
    fn test_viewer_last_write_wins() {
        let mut viewer = CertificateViewer::new(ViewerCloseBehavior::KeepLast);
        viewer.open("/a.pdf");
        viewer.open("/b.pdf");
        viewer.close();
        assert!(!viewer.is_open());
        assert_eq!(viewer.target(), Some("/b.pdf"));
    }

    #[test]
    fn test_viewer_clear_on_close() {
        let mut viewer = CertificateViewer::new(ViewerCloseBehavior::Clear);
        viewer.open("/a.pdf");
        assert_eq!(viewer.target(), Some("/a.pdf"));
        viewer.close();
        assert!(!viewer.is_open());
        assert_eq!(viewer.target(), None);
    }

    #[test]
    fn test_dots_frozen_after_mount() {
        let mut s = session();
        s.mount(&mut SmallRng::seed_from_u64(42), Some(1280));
        let first = s.animation.dots().to_vec();
        assert_eq!(first.len(), Settings::default().dot_count);
        s.mount(&mut SmallRng::seed_from_u64(99), Some(1280));
        assert_eq!(s.animation.dots(), first.as_slice());
        assert_eq!(s.animation.dots(), s.animation.dots());
        assert!(s.animation.skills_revealed);
    }

    #[test]
    fn test_dots_skipped_on_narrow_viewport() {
        let settings = Settings {
            dot_min_viewport: Some(768),
            ..Settings::default()
        };
        let mut s = Session::new(settings, HEADLINE);
        s.mount(&mut SmallRng::seed_from_u64(1), Some(400));
        assert!(s.animation.dots().is_empty());
        // the check is made once; a later wide mount doesn't regenerate
        s.mount(&mut SmallRng::seed_from_u64(1), Some(1600));
        assert!(s.animation.dots().is_empty());
    }

    #[test]
    fn test_timers_drive_session() {
        let scheduler = ManualScheduler::default();
        let session = Rc::new(RefCell::new(session()));
        let driven = session.clone();
        let timers = AnimationTimers::start(&scheduler, &Settings::default(), move |tick| {
            driven.borrow_mut().tick(tick)
        });

        scheduler.advance(Duration::from_millis(500));
        {
            let s = session.borrow();
            assert_eq!(s.animation.typewriter.text(), &HEADLINE[..5]);
            assert!(!s.animation.cursor.visible());
        }

        scheduler.advance(Duration::from_millis(100 * HEADLINE.len() as u64));
        {
            let s = session.borrow();
            assert_eq!(s.animation.typewriter.text(), HEADLINE);
        }
        // typewriter has stopped itself, cursor keeps going
        assert_eq!(scheduler.running(), 1);
        let visible = session.borrow().animation.cursor.visible();
        scheduler.advance(Duration::from_millis(500));
        assert_ne!(session.borrow().animation.cursor.visible(), visible);

        drop(timers);
        assert_eq!(scheduler.running(), 0);
        let visible = session.borrow().animation.cursor.visible();
        scheduler.advance(Duration::from_millis(5000));
        assert_eq!(session.borrow().animation.cursor.visible(), visible);
    }
}
