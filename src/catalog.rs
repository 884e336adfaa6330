use std::sync::LazyLock;

use http::Uri;
use serde::{Deserialize, Serialize};

use crate::content::{load_json, ContentError};

pub const CATALOG_FILE: &str = "catalog.json";

/// Placeholder used in content for links that aren't available yet.
pub const UNSET_LINK: &str = "#";

static CATALOG: LazyLock<Result<Catalog, ContentError>> =
    LazyLock::new(|| Catalog::load(CATALOG_FILE));

/// Returns the link only when it points somewhere: absent, empty and `"#"` are all unset.
pub fn usable_link(url: Option<&str>) -> Option<&str> {
    url.map(str::trim)
        .filter(|u| !u.is_empty() && *u != UNSET_LINK)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Award,
    BookOpen,
    Briefcase,
    Code,
    Database,
    Lock,
    Network,
    Shield,
    Star,
    Terminal,
    Trophy,
    User,
    Users,
    Zap,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Award => "icon-award",
            Icon::BookOpen => "icon-book-open",
            Icon::Briefcase => "icon-briefcase",
            Icon::Code => "icon-code",
            Icon::Database => "icon-database",
            Icon::Lock => "icon-lock",
            Icon::Network => "icon-network",
            Icon::Shield => "icon-shield",
            Icon::Star => "icon-star",
            Icon::Terminal => "icon-terminal",
            Icon::Trophy => "icon-trophy",
            Icon::User => "icon-user",
            Icon::Users => "icon-users",
            Icon::Zap => "icon-zap",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u32,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Verify,
    QrVerify,
    Certificate,
    OfferLetter,
    GroupPhoto,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Verify => "Verify",
            ActionKind::QrVerify => "QR Verify",
            ActionKind::Certificate => "Certificate",
            ActionKind::OfferLetter => "Offer Letter",
            ActionKind::GroupPhoto => "Group Photo",
        }
    }
}

/// A control offered on a certificate card. `href` is `None` for controls that aren't links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateAction {
    pub kind: ActionKind,
    pub href: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateEntry {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub certificate_id: Option<String>,
    #[serde(default)]
    pub verify_url: Option<String>,
    #[serde(default)]
    pub certificate_url: Option<String>,
    #[serde(default)]
    pub offer_letter_url: Option<String>,
    #[serde(default)]
    pub group_photo_url: Option<String>,
    #[serde(default = "default_true")]
    pub has_verify: bool,
    #[serde(default)]
    pub has_certificate: bool,
    #[serde(default)]
    pub has_offer_letter: bool,
    #[serde(default)]
    pub has_group_photo: bool,
    #[serde(default)]
    pub has_qr_verify: bool,
}

impl CertificateEntry {
    /// Controls to show for this entry, in display order.
    pub fn actions(&self) -> Vec<CertificateAction> {
        let link = |kind: ActionKind, flag: bool, url: &Option<String>| {
            flag.then(|| usable_link(url.as_deref()))
                .flatten()
                .map(|href| CertificateAction {
                    kind,
                    href: Some(href.to_string()),
                })
        };
        let qr = self.has_qr_verify.then_some(CertificateAction {
            kind: ActionKind::QrVerify,
            href: None,
        });
        [
            link(ActionKind::Verify, self.has_verify, &self.verify_url),
            qr,
            link(ActionKind::Certificate, self.has_certificate, &self.certificate_url),
            link(ActionKind::OfferLetter, self.has_offer_letter, &self.offer_letter_url),
            link(ActionKind::GroupPhoto, self.has_group_photo, &self.group_photo_url),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn links(&self) -> [(&'static str, &Option<String>); 4] {
        [
            ("verify_url", &self.verify_url),
            ("certificate_url", &self.certificate_url),
            ("offer_letter_url", &self.offer_letter_url),
            ("group_photo_url", &self.group_photo_url),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateGroupKind {
    Academic,
    Internships,
    Workshops,
}

impl CertificateGroupKind {
    pub const ALL: [CertificateGroupKind; 3] = [
        CertificateGroupKind::Academic,
        CertificateGroupKind::Internships,
        CertificateGroupKind::Workshops,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CertificateGroupKind::Academic => "Academic Certifications",
            CertificateGroupKind::Internships => "Internship Certificates",
            CertificateGroupKind::Workshops => "Workshops & Events",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateGroups {
    pub academic: Vec<CertificateEntry>,
    pub internships: Vec<CertificateEntry>,
    pub workshops: Vec<CertificateEntry>,
}

impl CertificateGroups {
    pub fn group(&self, kind: CertificateGroupKind) -> &[CertificateEntry] {
        match kind {
            CertificateGroupKind::Academic => &self.academic,
            CertificateGroupKind::Internships => &self.internships,
            CertificateGroupKind::Workshops => &self.workshops,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CertificateEntry> {
        CertificateGroupKind::ALL
            .into_iter()
            .flat_map(move |k| self.group(k).iter())
    }

    /// Entries across all three groups.
    pub fn count(&self) -> usize {
        self.academic.len() + self.internships.len() + self.workshops.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub status: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub achievement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipEntry {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Text revealed by the typewriter on the home section.
    pub headline: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub badge: Option<Badge>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub certifications: CertificateGroups,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub internships: Vec<InternshipEntry>,
}

impl Catalog {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let catalog: Catalog = load_json(name)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Catalog embedded in the binary, parsed and validated once.
    pub fn embedded() -> Result<&'static Catalog, ContentError> {
        CATALOG.as_ref().map_err(Clone::clone)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::InvalidSkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        for cert in self.certifications.iter() {
            for (field, url) in cert.links() {
                check_link(&format!("{} ({field})", cert.title), url.as_deref())?;
            }
        }
        let profile = &self.profile;
        check_link("profile github", profile.github.as_deref())?;
        check_link("profile linkedin", profile.linkedin.as_deref())?;
        if let Some(badge) = &profile.badge {
            check_link("profile badge", Some(&badge.url))?;
        }
        Ok(())
    }
}

fn check_link(context: &str, url: Option<&str>) -> Result<(), ContentError> {
    match usable_link(url) {
        Some(u) if u.parse::<Uri>().is_err() => Err(ContentError::InvalidLink {
            context: context.to_string(),
            url: u.to_string(),
        }),
        _ => Ok(()),
    }
}
