//! Static site record for the landing page.
//!
//! Every string the page composer displays is either a literal here or a
//! dotted translation key resolved against the locale catalogs. Literals
//! double as their own translation key: the Bengali catalog maps the
//! English copy to its translation, and a missing entry falls back to the
//! literal itself.

/// A single entry in the navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Section the link scrolls to on activation.
    pub target: PageSectionId,
}

/// Identifiers for the stacked page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSectionId {
    Hero,
    Pillar(usize),
    Stats,
    UseCases,
    Insights,
    Download,
    Footer,
}

#[derive(Debug, Clone, Copy)]
pub struct HeroContent {
    pub headline: &'static str,
    pub subhead: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

/// One of the three narrative feature pillars. The pillar order defines
/// the section index driving the particle scene.
#[derive(Debug, Clone)]
pub struct Pillar {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: Vec<&'static str>,
    pub cta: &'static str,
    /// Accent colour as a six-digit hex string without the leading '#'.
    pub color_hex: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct StatItem {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct UseCaseItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct InsightItem {
    pub title: &'static str,
    pub date: &'static str,
    pub tag: &'static str,
}

/// Screenshot category shown as a badge above each gallery caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCategory {
    Core,
    Intelligence,
    Onboarding,
}

impl GalleryCategory {
    /// Dotted key resolved against the locale catalogs for display.
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::Core => "gallery.categories.core",
            Self::Intelligence => "gallery.categories.intelligence",
            Self::Onboarding => "gallery.categories.onboarding",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GalleryItem {
    pub title: &'static str,
    pub description: &'static str,
    /// Opaque asset path resolved by the hosting environment.
    pub image: &'static str,
    pub category: GalleryCategory,
}

#[derive(Debug, Clone)]
pub struct FooterColumn {
    pub category: &'static str,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct FooterContent {
    pub links: Vec<FooterColumn>,
    pub blurb: &'static str,
    pub copyright: &'static str,
    pub team: &'static str,
    pub email: &'static str,
}

/// The full language-neutral content record consumed by the page composer.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub nav: Vec<NavItem>,
    pub hero: HeroContent,
    pub pillars: Vec<Pillar>,
    pub stats: Vec<StatItem>,
    pub use_cases: Vec<UseCaseItem>,
    pub insights: Vec<InsightItem>,
    pub gallery: Vec<GalleryItem>,
    pub footer: FooterContent,
}

/// Display labels for the three scene states, indexed by section index.
pub const SECTION_LABELS: [&str; 3] = ["ingestion", "management", "analysis"];

impl SiteContent {
    /// The MedVault AI landing page record.
    pub fn medvault() -> Self {
        Self {
            nav: vec![
                NavItem { label: "Features", target: PageSectionId::Pillar(0) },
                NavItem { label: "Technology", target: PageSectionId::Stats },
                NavItem { label: "Download", target: PageSectionId::Download },
                NavItem { label: "Insights", target: PageSectionId::Insights },
                NavItem { label: "About", target: PageSectionId::Footer },
                NavItem { label: "Contact", target: PageSectionId::Footer },
            ],
            hero: HeroContent {
                headline: "Your personal medical vault, powered by AI.",
                subhead: "Scan prescriptions, analyze lab reports, and manage your health \
                          schedule with a privacy-first AI assistant.",
                primary_cta: "Get Early Access",
                secondary_cta: "View Features",
            },
            pillars: vec![
                Pillar {
                    id: "scanning",
                    title: "Smart Digitization",
                    subtitle: "From paper to intelligence.",
                    description: vec![
                        "Instant camera capture for prescriptions & lab reports.",
                        "Automatic document type detection and cropping.",
                        "Powered by advanced AI for precise extraction.",
                    ],
                    cta: "See Scanning Demo",
                    color_hex: "14b8a6",
                },
                Pillar {
                    id: "management",
                    title: "Active Management",
                    subtitle: "Never miss a dose again.",
                    description: vec![
                        "Visual medication timelines and grid views.",
                        "Smart reminders synced with Google Calendar.",
                        "Track frequency, purpose, and purchase history.",
                    ],
                    cta: "Explore Scheduling",
                    color_hex: "8b5cf6",
                },
                Pillar {
                    id: "analysis",
                    title: "Clinical Insights",
                    subtitle: "Lab results, demystified.",
                    description: vec![
                        "AI analysis of Complete Blood Count (CBC) and reports.",
                        "Instant normal-range comparisons and health summaries.",
                        "Searchable, encrypted history of all your diagnoses.",
                    ],
                    cta: "View Analysis Engine",
                    color_hex: "10b981",
                },
            ],
            stats: vec![
                StatItem { value: "Advanced AI", label: "Core Model" },
                StatItem { value: "AES-256", label: "E2E Encryption" },
                StatItem { value: "100%", label: "Privacy First" },
                StatItem { value: "< 2s", label: "Analysis Time" },
            ],
            use_cases: vec![
                UseCaseItem {
                    title: "Prescription Parser",
                    description: "Extract med names, dosages, and instructions instantly from photos.",
                    icon: "file-text",
                },
                UseCaseItem {
                    title: "Lab Result Analyzer",
                    description: "Understand complex lab metrics with simple AI explanations.",
                    icon: "microscope",
                },
                UseCaseItem {
                    title: "Medication Tracker",
                    description: "Visual grids and timeline views for your daily regimen.",
                    icon: "pill",
                },
                UseCaseItem {
                    title: "Health Summaries",
                    description: "Generate concise summaries of diagnosis documents.",
                    icon: "activity",
                },
                UseCaseItem {
                    title: "Calendar Sync",
                    description: "Seamless integration with Google Calendar for reminders.",
                    icon: "calendar",
                },
                UseCaseItem {
                    title: "Secure Archive",
                    description: "Firebase-backed secure storage for your medical history.",
                    icon: "lock",
                },
            ],
            insights: vec![
                InsightItem {
                    title: "Leveraging AI for Medical Extraction",
                    date: "Dec 02, 2024",
                    tag: "AI Tech",
                },
                InsightItem {
                    title: "The Importance of Normal Range Monitoring",
                    date: "Nov 28, 2024",
                    tag: "Health",
                },
                InsightItem {
                    title: "Privacy-First Architecture in Health Apps",
                    date: "Nov 15, 2024",
                    tag: "Security",
                },
            ],
            gallery: vec![
                GalleryItem {
                    title: "Welcome Screen",
                    description: "Beautiful onboarding experience to get you started.",
                    image: "images/screens/welcome.png",
                    category: GalleryCategory::Onboarding,
                },
                GalleryItem {
                    title: "Home Dashboard",
                    description: "Your health hub with quick access to all features.",
                    image: "images/screens/dashboard.png",
                    category: GalleryCategory::Core,
                },
                GalleryItem {
                    title: "Smart Scan",
                    description: "Instantly detect and analyze medical documents.",
                    image: "images/screens/smart-scan.png",
                    category: GalleryCategory::Core,
                },
                GalleryItem {
                    title: "AI Analysis",
                    description: "Deep insights into dermatology and lab reports.",
                    image: "images/screens/ai-analysis.png",
                    category: GalleryCategory::Intelligence,
                },
                GalleryItem {
                    title: "Medicine Cabinet",
                    description: "A clear, visual grid of your active prescriptions.",
                    image: "images/screens/cabinet.png",
                    category: GalleryCategory::Core,
                },
                GalleryItem {
                    title: "Medication Details",
                    description: "Comprehensive dosage and instruction info.",
                    image: "images/screens/medication-details.png",
                    category: GalleryCategory::Core,
                },
                GalleryItem {
                    title: "Daily Schedule",
                    description: "Timeline view with smart adherence tracking.",
                    image: "images/screens/schedule.png",
                    category: GalleryCategory::Core,
                },
                GalleryItem {
                    title: "Health Reminders",
                    description: "Smart notifications for your medication schedule.",
                    image: "images/screens/reminders.png",
                    category: GalleryCategory::Core,
                },
                GalleryItem {
                    title: "Lab Results",
                    description: "Understand your CBC metrics with normal ranges.",
                    image: "images/screens/lab-results.png",
                    category: GalleryCategory::Intelligence,
                },
                GalleryItem {
                    title: "Report Analysis",
                    description: "AI-powered analysis of your medical reports.",
                    image: "images/screens/report-analysis.png",
                    category: GalleryCategory::Intelligence,
                },
                GalleryItem {
                    title: "Digital Notebook",
                    description: "Searchable archive of all your medical history.",
                    image: "images/screens/notebook.png",
                    category: GalleryCategory::Core,
                },
                GalleryItem {
                    title: "Health Summary",
                    description: "Concise summaries of your health conditions.",
                    image: "images/screens/summary.png",
                    category: GalleryCategory::Intelligence,
                },
                GalleryItem {
                    title: "Calendar Sync",
                    description: "Seamless integration with Google Calendar.",
                    image: "images/screens/calendar-sync.png",
                    category: GalleryCategory::Core,
                },
                GalleryItem {
                    title: "Secure Archive",
                    description: "Firebase-backed secure storage for your records.",
                    image: "images/screens/secure-archive.png",
                    category: GalleryCategory::Core,
                },
                GalleryItem {
                    title: "Profile & Settings",
                    description: "Manage your account and privacy preferences.",
                    image: "images/screens/profile.png",
                    category: GalleryCategory::Core,
                },
            ],
            footer: FooterContent {
                links: vec![
                    FooterColumn {
                        category: "App",
                        items: vec!["Early Access", "Roadmap", "Features", "Pricing"],
                    },
                    FooterColumn {
                        category: "Company",
                        items: vec!["About", "Careers", "Press", "Contact"],
                    },
                    FooterColumn {
                        category: "Legal",
                        items: vec![
                            "Privacy Policy",
                            "Terms of Service",
                            "HIPAA Compliance",
                            "Data Safety",
                        ],
                    },
                ],
                blurb: "Secure medical data infrastructure for the AI era. Protecting \
                        patient privacy while enabling clinical innovation.",
                copyright: "\u{a9} 2024 MedVault AI. All rights reserved.",
                team: "Team MediVault AI",
                email: "ankonahamed@iut-dhaka.edu",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_pillars_with_valid_hex_colors() {
        let site = SiteContent::medvault();
        assert_eq!(site.pillars.len(), 3);
        for pillar in &site.pillars {
            assert_eq!(pillar.color_hex.len(), 6);
            assert!(pillar.color_hex.chars().all(|c| c.is_ascii_hexdigit()));
            assert!(!pillar.description.is_empty());
        }
    }

    #[test]
    fn gallery_lists_fifteen_screens_with_unique_images() {
        let site = SiteContent::medvault();
        assert_eq!(site.gallery.len(), 15);
        let mut images: Vec<_> = site.gallery.iter().map(|g| g.image).collect();
        images.sort_unstable();
        images.dedup();
        assert_eq!(images.len(), site.gallery.len());
    }

    #[test]
    fn navigation_and_footer_are_populated() {
        let site = SiteContent::medvault();
        assert_eq!(site.nav.len(), 6);
        assert_eq!(site.stats.len(), 4);
        assert_eq!(site.use_cases.len(), 6);
        assert_eq!(site.footer.links.len(), 3);
        assert!(site.footer.email.contains('@'));
    }

    #[test]
    fn section_labels_cover_each_scene_state() {
        assert_eq!(SECTION_LABELS, ["ingestion", "management", "analysis"]);
    }
}
