//! Display records for every section of the page.
//!
//! Everything here is a `'static` table built once at compile time. The only
//! runtime state of the page is which entry is selected, never the entries
//! themselves.

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("no section with anchor `{0}`")]
    UnknownSection(String),
    #[error("no project with id {0}")]
    UnknownProject(u32),
    #[error("no skill category at index {0}")]
    UnknownSkillCategory(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Certifications,
    Experience,
    Achievements,
    Contact,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Experience,
        Section::Achievements,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Experience => "experience",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    /// Fraction of the section that must be on screen before it reveals.
    pub fn reveal_threshold(self) -> f64 {
        match self {
            Section::Home => 0.0,
            Section::About | Section::Skills => 0.2,
            _ => 0.1,
        }
    }
}

impl FromStr for Section {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| ContentError::UnknownSection(s.to_string()))
    }
}

/// Tailwind color tokens of a card: icon gradient, tinted background, border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub gradient: &'static str,
    pub bg: &'static str,
    pub border: &'static str,
}

impl Accent {
    const fn new(gradient: &'static str, bg: &'static str, border: &'static str) -> Self {
        Self {
            gradient,
            bg,
            border,
        }
    }
}

const BLUE: Accent = Accent::new("from-blue-500 to-cyan-500", "bg-blue-50", "border-blue-200");
const PINK: Accent = Accent::new("from-pink-500 to-rose-500", "bg-pink-50", "border-pink-200");
const GREEN: Accent = Accent::new(
    "from-green-500 to-emerald-500",
    "bg-green-50",
    "border-green-200",
);
const ORANGE: Accent = Accent::new(
    "from-orange-500 to-yellow-500",
    "bg-orange-50",
    "border-orange-200",
);
const PURPLE: Accent = Accent::new(
    "from-purple-500 to-pink-500",
    "bg-purple-50",
    "border-purple-200",
);

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub full_name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub bio: &'static str,
    pub quote: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_display: &'static str,
    pub photo_url: &'static str,
    pub resume_url: &'static str,
    pub hire_me_url: &'static str,
    pub rotating_words: &'static [&'static str],
}

pub static PROFILE: Profile = Profile {
    first_name: "Chris",
    last_name: "Thomas",
    full_name: "Chris Thomas Abraham",
    role: "Creative Technologist",
    tagline: "Creative Technologist | Frontend Developer",
    intro: "A coder with an eye for design. I merge logic and creativity to build purposeful digital experiences.",
    bio: "I am a creative technologist who speaks both in visuals and in code. Currently pursuing B.Tech in Computer Science at Mar Baselios College of Engineering and Technology.",
    quote: "Design is intelligence made visible, and development is where that intelligence takes shape.",
    location: "Trivandrum, Kerala, India",
    email: "chrisevanthomas736@gmail.com",
    phone: "+919656258080",
    phone_display: "+91 96562 58080",
    photo_url: "https://ik.imagekit.io/cj5ujtn9k/WhatsApp%20Image%202025-06-16%20at%2018.53.10_c24cee17.jpg?updatedAt=1750082545418",
    resume_url: "https://ik.imagekit.io/cj5ujtn9k/WhatsApp%20Image%202025-06-16%20at%2018.53.10_c24cee17.jpg?updatedAt=1750082545418",
    hire_me_url: "mailto:chrisevanthomas736@gmail.com?subject=Let's%20Work%20Together",
    rotating_words: &["DEVELOPER", "DESIGNER", "BUILDER", "INNOVATOR"],
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Section,
    pub offset: f64,
}

pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        label: "Home",
        target: Section::Home,
        offset: 0.0,
    },
    NavItem {
        label: "About",
        target: Section::About,
        offset: -70.0,
    },
    NavItem {
        label: "Skills",
        target: Section::Skills,
        offset: -70.0,
    },
    NavItem {
        label: "Projects",
        target: Section::Projects,
        offset: -70.0,
    },
    NavItem {
        label: "Experience",
        target: Section::Experience,
        offset: -70.0,
    },
    NavItem {
        label: "Contact",
        target: Section::Contact,
        offset: -70.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub glyph: &'static str,
    pub accent: Accent,
}

impl SocialLink {
    /// Profile pages open in a new browsing context; mail and phone links don't.
    pub fn is_external(&self) -> bool {
        self.url.starts_with("https://") || self.url.starts_with("http://")
    }
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/chris-thomas-abraham-411458298",
        glyph: "devicon-linkedin-plain",
        accent: Accent::new("from-blue-500 to-blue-600", "bg-blue-50", "border-blue-200"),
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/ChrisToms14",
        glyph: "devicon-github-original",
        accent: Accent::new("from-gray-700 to-gray-800", "bg-gray-50", "border-gray-200"),
    },
    SocialLink {
        name: "Email",
        url: "mailto:chrisevanthomas736@gmail.com",
        glyph: "✉",
        accent: Accent::new("from-red-500 to-red-600", "bg-red-50", "border-red-200"),
    },
    SocialLink {
        name: "Phone",
        url: "tel:+919656258080",
        glyph: "☎",
        accent: Accent::new(
            "from-green-500 to-green-600",
            "bg-green-50",
            "border-green-200",
        ),
    },
];

pub fn social_link(name: &str) -> Option<&'static SocialLink> {
    SOCIAL_LINKS.iter().find(|link| link.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutMode {
    #[default]
    Developer,
    Designer,
}

pub struct AboutModeContent {
    pub label: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub skills: &'static [&'static str],
    pub active_class: &'static str,
}

static DEVELOPER: AboutModeContent = AboutModeContent {
    label: "Developer",
    title: "Frontend Developer",
    tagline: "Building digital experiences",
    summary: "Frontend Developer who focuses on writing clean, elegant and efficient code that brings designs to life.",
    skills: &[
        "React & JavaScript",
        "Python & FastAPI",
        "HTML5 & CSS3",
        "Node.js & MongoDB",
    ],
    active_class: "bg-blue-600 text-white shadow-lg scale-105",
};

static DESIGNER: AboutModeContent = AboutModeContent {
    label: "Designer",
    title: "UI/UX Designer",
    tagline: "Crafting beautiful interfaces",
    summary: "UI/UX Designer with a passion for designing beautiful and functional user experiences that delight users.",
    skills: &[
        "Figma & Prototyping",
        "Adobe Creative Suite",
        "Photography",
        "Video Editing",
    ],
    active_class: "bg-pink-600 text-white shadow-lg scale-105",
};

impl AboutMode {
    pub const ALL: [AboutMode; 2] = [AboutMode::Developer, AboutMode::Designer];

    pub fn content(self) -> &'static AboutModeContent {
        match self {
            AboutMode::Developer => &DEVELOPER,
            AboutMode::Designer => &DESIGNER,
        }
    }
}

pub struct Counter {
    pub label: &'static str,
    pub value: u32,
    pub color: &'static str,
}

pub static ABOUT_COUNTERS: [Counter; 3] = [
    Counter {
        label: "Projects Completed",
        value: 12,
        color: "text-purple-600",
    },
    Counter {
        label: "Organizations",
        value: 6,
        color: "text-blue-600",
    },
    Counter {
        label: "Certifications",
        value: 4,
        color: "text-green-600",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, 0..=100.
    pub level: u8,
    pub color: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8, color: &'static str) -> Skill {
    Skill { name, level, color }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Technical",
        accent: BLUE,
        skills: &[
            skill("JavaScript", 85, "bg-yellow-500"),
            skill("Python", 80, "bg-green-500"),
            skill("React", 90, "bg-blue-500"),
            skill("Node.js", 75, "bg-green-600"),
            skill("HTML & CSS", 95, "bg-orange-500"),
        ],
    },
    SkillCategory {
        title: "Creative",
        accent: PINK,
        skills: &[
            skill("Figma", 95, "bg-purple-500"),
            skill("Adobe Photoshop", 70, "bg-blue-600"),
            skill("Illustrator", 75, "bg-orange-600"),
            skill("Video Editing", 80, "bg-red-500"),
            skill("Photography", 85, "bg-gray-600"),
        ],
    },
    SkillCategory {
        title: "Leadership",
        accent: GREEN,
        skills: &[
            skill("Team Management", 90, "bg-green-500"),
            skill("Project Coordination", 85, "bg-blue-500"),
            skill("Public Speaking", 80, "bg-purple-500"),
            skill("Strategic Planning", 85, "bg-indigo-500"),
            skill("Mentoring", 80, "bg-pink-500"),
        ],
    },
    SkillCategory {
        title: "Innovation",
        accent: ORANGE,
        skills: &[
            skill("Problem Solving", 95, "bg-red-500"),
            skill("Critical Thinking", 90, "bg-purple-500"),
            skill("Rapid Prototyping", 85, "bg-blue-500"),
            skill("Design Thinking", 80, "bg-pink-500"),
            skill("Innovation Strategy", 75, "bg-green-500"),
        ],
    },
];

pub fn skill_category(index: usize) -> Result<&'static SkillCategory, ContentError> {
    SKILL_CATEGORIES
        .get(index)
        .ok_or(ContentError::UnknownSkillCategory(index))
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: &'static str,
    pub features: &'static [&'static str],
    pub accent: Accent,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "PrintEase",
        description: "A comprehensive digital platform for online printing services with secure file upload, payment integration, and real-time order tracking.",
        glyph: "🖨",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        github_url: "https://github.com/ChrisToms14/printease",
        features: &[
            "Secure file upload system",
            "Real-time order tracking",
            "Payment gateway integration",
            "User authentication and profiles",
            "Admin dashboard for order management",
        ],
        accent: BLUE,
    },
    Project {
        id: 2,
        title: "WeatherShield",
        description: "Real-time weather alert and disaster-rescue application with interactive maps showing nearby shelters and safety zones.",
        glyph: "☁",
        tags: &["Flutter", "Firebase", "Maps API", "Weather API"],
        github_url: "https://github.com/ChrisToms14/weathershield",
        features: &[
            "Real-time weather monitoring",
            "Interactive disaster response maps",
            "Emergency contact system",
            "Offline functionality",
            "Resource locator",
        ],
        accent: GREEN,
    },
    Project {
        id: 3,
        title: "AYUSH AI",
        description: "Multilingual telemedicine platform powered by AI chatbot offering personalized AYUSH-based treatment recommendations.",
        glyph: "🩺",
        tags: &["AI/ML", "React Native", "NLP", "Healthcare"],
        github_url: "https://github.com/ChrisToms14/ayush-ai",
        features: &[
            "Multilingual AI health assistant",
            "AYUSH treatment recommendations",
            "Secure patient data management",
            "Video consultation",
            "Digital health records",
        ],
        accent: PURPLE,
    },
    Project {
        id: 4,
        title: "Smart India Hackathon",
        description: "Disaster management solution developed in 12 hours showcasing rapid prototyping and team leadership skills.",
        glyph: "🛡",
        tags: &["React", "Node.js", "MongoDB", "Real-time"],
        github_url: "https://github.com/ChrisToms14/sih-project",
        features: &[
            "Real-time disaster mapping",
            "Resource coordination system",
            "Emergency response management",
            "Civilian communication",
            "Data analytics dashboard",
        ],
        accent: Accent::new("from-red-500 to-orange-500", "bg-red-50", "border-red-200"),
    },
    Project {
        id: 5,
        title: "Scientific Calculator",
        description: "Advanced scientific calculator with complex mathematical operations and intuitive user interface.",
        glyph: "🧮",
        tags: &["JavaScript", "HTML5", "CSS3", "Math.js"],
        github_url: "https://github.com/ChrisToms14/scientific-calculator",
        features: &[
            "Scientific calculations",
            "Trigonometric functions",
            "Logarithmic operations",
            "Memory functions",
            "History tracking",
        ],
        accent: Accent::new(
            "from-indigo-500 to-blue-500",
            "bg-indigo-50",
            "border-indigo-200",
        ),
    },
    Project {
        id: 6,
        title: "Game Collection",
        description: "Collection of interactive web games including puzzles and arcade-style games built with vanilla JavaScript.",
        glyph: "🎮",
        tags: &["JavaScript", "Canvas API", "Game Dev", "Animation"],
        github_url: "https://github.com/ChrisToms14/web-games",
        features: &[
            "Multiple game types",
            "High score tracking",
            "Responsive controls",
            "Smooth animations",
            "Local storage",
        ],
        accent: Accent::new(
            "from-yellow-500 to-red-500",
            "bg-yellow-50",
            "border-yellow-200",
        ),
    },
];

pub fn project_by_id(id: u32) -> Result<&'static Project, ContentError> {
    PROJECTS
        .iter()
        .find(|p| p.id == id)
        .ok_or(ContentError::UnknownProject(id))
}

/// Which project, if any, is open in the detail overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    selected: Option<u32>,
}

impl ProjectSelection {
    pub fn selected(&self) -> Option<&'static Project> {
        self.selected.and_then(|id| project_by_id(id).ok())
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Unknown ids leave the current selection untouched.
    pub fn open(&mut self, id: u32) -> Result<&'static Project, ContentError> {
        let project = project_by_id(id)?;
        self.selected = Some(id);
        Ok(project)
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}

pub struct CertificationCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub count: &'static str,
    pub glyph: &'static str,
    pub accent: Accent,
}

pub static CERTIFICATION_CATEGORIES: [CertificationCategory; 3] = [
    CertificationCategory {
        title: "Technical Skills",
        description: "Programming, Web Development, and Software Engineering certifications",
        count: "8+",
        glyph: "🏅",
        accent: BLUE,
    },
    CertificationCategory {
        title: "Design & Creative",
        description: "UI/UX Design, Graphic Design, and Creative Tools certifications",
        count: "6+",
        glyph: "★",
        accent: PURPLE,
    },
    CertificationCategory {
        title: "Leadership & Soft Skills",
        description: "Project Management, Team Leadership, and Communication skills",
        count: "4+",
        glyph: "🏆",
        accent: Accent::new(
            "from-emerald-500 to-green-500",
            "bg-green-50",
            "border-green-200",
        ),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceKind {
    Internship,
    Leadership,
    Volunteer,
    CommunityService,
    Competition,
}

impl ExperienceKind {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceKind::Internship => "Internship",
            ExperienceKind::Leadership => "Leadership",
            ExperienceKind::Volunteer => "Volunteer",
            ExperienceKind::CommunityService => "Community Service",
            ExperienceKind::Competition => "Competition",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ExperienceKind::Internship => "💼",
            ExperienceKind::Leadership => "🎯",
            ExperienceKind::Volunteer => "♥",
            ExperienceKind::CommunityService => "👥",
            ExperienceKind::Competition => "🏅",
        }
    }
}

pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub kind: ExperienceKind,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub glyph: &'static str,
    pub accent: Accent,
}

pub static EXPERIENCES: [ExperienceEntry; 6] = [
    ExperienceEntry {
        title: "Graphic Design Intern",
        organization: "GTECH Mulearn",
        period: "Feb 2024 - Aug 2024",
        location: "Trivandrum, Kerala",
        kind: ExperienceKind::Internship,
        description: "Creating visual assets for digital platforms, designing event posters and marketing materials, and supporting the media team with creative solutions.",
        highlights: &[
            "Created branding materials for tech events and workshops",
            "Designed UI mockups for web applications",
            "Collaborated on visual storytelling initiatives",
            "Supported social media campaigns with creative assets",
        ],
        glyph: "🎨",
        accent: PINK,
    },
    ExperienceEntry {
        title: "Mastermind",
        organization: "Mulearn MBCET Campus Chapter",
        period: "2023 - Present",
        location: "MBCET, Trivandrum",
        kind: ExperienceKind::Leadership,
        description: "Leading the campus chapter strategic initiatives, organizing tech meetups, and coordinating between student members and the parent organization.",
        highlights: &[
            "Organized 10+ technical workshops and hackathons",
            "Managed a team of 15+ student volunteers",
            "Increased campus chapter membership by 40%",
            "Established new partnerships with industry professionals",
        ],
        glyph: "🎯",
        accent: Accent::new("from-cyan-500 to-blue-500", "bg-cyan-50", "border-cyan-200"),
    },
    ExperienceEntry {
        title: "Design & Media Volunteer",
        organization: "IEEE",
        period: "2023 - 2024",
        location: "MBCET, Trivandrum",
        kind: ExperienceKind::Volunteer,
        description: "Creating visual content for IEEE events, managing social media communications, and supporting technical workshops with design assets.",
        highlights: &[
            "Designed promotional materials for IEEE conferences",
            "Created technical event documentation",
            "Supported website updates and content management",
            "Collaborated on multi-disciplinary tech projects",
        ],
        glyph: "</>",
        accent: GREEN,
    },
    ExperienceEntry {
        title: "Design Volunteer & Secretary",
        organization: "CSI",
        period: "2023 - 2025",
        location: "MBCET, Trivandrum",
        kind: ExperienceKind::Leadership,
        description: "Initially worked as a design volunteer creating visual assets for events, later elected as Secretary to lead organizational initiatives.",
        highlights: &[
            "Led the design team for annual technical symposium",
            "Coordinated industry-academia collaboration events",
            "Managed documentation and reporting for the chapter",
            "Organized programming competitions and tech talks",
        ],
        glyph: "👥",
        accent: Accent::new(
            "from-purple-500 to-indigo-500",
            "bg-purple-50",
            "border-purple-200",
        ),
    },
    ExperienceEntry {
        title: "NSS Volunteer",
        organization: "National Service Scheme",
        period: "Since 2021",
        location: "MBCET, Trivandrum",
        kind: ExperienceKind::CommunityService,
        description: "Participating in community service projects, environmental initiatives, and social awareness campaigns as part of the National Service Scheme.",
        highlights: &[
            "Participated in rural development projects",
            "Organized blood donation and health camps",
            "Conducted digital literacy workshops",
            "Supported disaster relief coordination efforts",
        ],
        glyph: "♥",
        accent: Accent::new("from-red-500 to-pink-500", "bg-red-50", "border-red-200"),
    },
    ExperienceEntry {
        title: "Team Leader",
        organization: "Smart India Hackathon Prelims 2024",
        period: "Team Eigengrau",
        location: "MBCET, Trivandrum",
        kind: ExperienceKind::Competition,
        description: "Led a cross-functional team in developing innovative solutions for disaster management challenges during the prestigious Smart India Hackathon.",
        highlights: &[
            "Coordinated development of disaster response platform",
            "Managed team of developers, designers and domain experts",
            "Presented technical solution to industry judges",
            "Oversaw rapid prototyping and MVP development",
        ],
        glyph: "🏅",
        accent: ORANGE,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Competition,
    Leadership,
    Community,
    Speaking,
}

impl AchievementCategory {
    pub fn label(self) -> &'static str {
        match self {
            AchievementCategory::Competition => "Competition",
            AchievementCategory::Leadership => "Leadership",
            AchievementCategory::Community => "Community",
            AchievementCategory::Speaking => "Speaking",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            AchievementCategory::Competition => "🏆",
            AchievementCategory::Leadership => "👑",
            AchievementCategory::Community => "👥",
            AchievementCategory::Speaking => "🎤",
        }
    }
}

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub glyph: &'static str,
    pub accent: Accent,
}

pub static ACHIEVEMENTS: [Achievement; 5] = [
    Achievement {
        title: "Second Runner-up, Intra-College Karma Hunt",
        description: "Secured third place in a competitive problem-solving and treasure hunt competition.",
        category: AchievementCategory::Competition,
        glyph: "🏆",
        accent: Accent::new(
            "from-yellow-500 to-orange-500",
            "bg-yellow-50",
            "border-yellow-200",
        ),
    },
    Achievement {
        title: "Selected Team Lead, Smart India Hackathon Prelims",
        description: "Led Team Eigengrau to develop an innovative disaster management solution.",
        category: AchievementCategory::Leadership,
        glyph: "🥇",
        accent: BLUE,
    },
    Achievement {
        title: "Design & Media Head",
        description: "Appointed as the head of design and media for various college events and technical bodies.",
        category: AchievementCategory::Leadership,
        glyph: "💡",
        accent: GREEN,
    },
    Achievement {
        title: "Volunteer Leader",
        description: "Led volunteer teams for multiple events in IEEE, CSI, and MuLearn.",
        category: AchievementCategory::Community,
        glyph: "👥",
        accent: PURPLE,
    },
    Achievement {
        title: "Speaker/Coordinator",
        description: "Served as coordinator at MBCET meetups, MuV Talks, and In50hrs Hackathon.",
        category: AchievementCategory::Speaking,
        glyph: "🎤",
        accent: Accent::new(
            "from-indigo-500 to-purple-500",
            "bg-indigo-50",
            "border-indigo-200",
        ),
    },
];

pub struct AchievementStat {
    pub number: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

pub static ACHIEVEMENT_STATS: [AchievementStat; 4] = [
    AchievementStat {
        number: "5+",
        label: "Major Achievements",
        glyph: "🏆",
    },
    AchievementStat {
        number: "3+",
        label: "Leadership Roles",
        glyph: "👑",
    },
    AchievementStat {
        number: "10+",
        label: "Events Organized",
        glyph: "👥",
    },
    AchievementStat {
        number: "15+",
        label: "Speaking Sessions",
        glyph: "🎤",
    },
];

/// A link button inside a [`Callout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalloutLink {
    pub label: &'static str,
    pub url: &'static str,
}

impl CalloutLink {
    /// Off-site targets open in a new browsing context.
    pub fn is_external(&self) -> bool {
        self.url.starts_with("https://") || self.url.starts_with("http://")
    }
}

/// A standalone highlight card: heading, paragraph, and either a link out
/// or a row of badges.
pub struct Callout {
    pub glyph: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    pub link: Option<CalloutLink>,
    pub badges: &'static [&'static str],
}

/// Featured card above the certification categories.
pub static CERTIFICATIONS_CALLOUT: Callout = Callout {
    glyph: "devicon-linkedin-plain",
    title: "Professional Certifications",
    subtitle: "Verified credentials and achievements",
    body: "Explore my verified certifications and continuous learning journey on LinkedIn. Each certification represents a milestone in my professional development.",
    link: Some(CalloutLink {
        label: "View All Certifications",
        url: "https://linkedin.com/in/chris-thomas-abraham-411458298",
    }),
    badges: &[],
};

/// Closing card of the skills section.
pub static SKILLS_CALLOUT: Callout = Callout {
    glyph: "★",
    title: "Continuous Learning & Growth",
    subtitle: "",
    body: "I believe in the power of continuous learning and staying updated with the latest technologies and design trends. My diverse skill set allows me to bridge the gap between technical implementation and creative vision.",
    link: None,
    badges: &["Always Learning", "Always Growing"],
};

/// A titled paragraph closing a section.
pub struct Principle {
    pub title: &'static str,
    pub body: &'static str,
}

pub static LEARNING_PRINCIPLES: [Principle; 2] = [
    Principle {
        title: "Always Learning",
        body: "Staying ahead of the curve with emerging technologies and industry standards",
    },
    Principle {
        title: "Knowledge Sharing",
        body: "Applying learned concepts in real projects and sharing knowledge with the community",
    },
];

pub static LEADERSHIP_PRINCIPLES: [Principle; 2] = [
    Principle {
        title: "Innovation through Collaboration",
        body: "Building bridges between technical and creative teams to deliver exceptional results",
    },
    Principle {
        title: "Building with Purpose",
        body: "Every project and initiative is driven by the goal to create meaningful impact and value",
    },
];

pub static ACHIEVEMENT_PRINCIPLES: [Principle; 2] = [
    Principle {
        title: "Driven by Impact",
        body: "Every project and initiative is motivated by the desire to create positive change and value",
    },
    Principle {
        title: "Continuous Excellence",
        body: "Striving for excellence in every endeavor while maintaining humility and eagerness to learn",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_section_anchor_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.anchor().parse::<Section>(), Ok(section));
        }
        assert_eq!("#contact".parse::<Section>(), Ok(Section::Contact));
        assert_eq!(
            "blog".parse::<Section>(),
            Err(ContentError::UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_nav_items_target_distinct_sections() {
        let targets = NAV_ITEMS.iter().map(|i| i.target).collect::<HashSet<_>>();
        assert_eq!(targets.len(), NAV_ITEMS.len());
        assert_eq!(NAV_ITEMS[0].offset, 0.0);
        assert!(NAV_ITEMS[1..].iter().all(|i| i.offset == -70.0));
    }

    #[test]
    fn test_skill_category_selection() {
        let creative = skill_category(1).expect("creative category");
        assert_eq!(creative.title, "Creative");
        assert!(creative.skills.iter().any(|s| s.name == "Figma"));
        assert!(!creative.skills.iter().any(|s| s.name == "JavaScript"));

        assert_eq!(
            skill_category(SKILL_CATEGORIES.len()),
            Err(ContentError::UnknownSkillCategory(4))
        );
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in &SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} above 100%", skill.name);
            }
        }
    }

    #[test]
    fn test_project_lookup() {
        let project = project_by_id(2).expect("project 2");
        assert_eq!(project.title, "WeatherShield");
        assert_eq!(project.features.len(), 5);
        assert!(project.tags.contains(&"Flutter"));

        assert_eq!(project_by_id(0), Err(ContentError::UnknownProject(0)));
    }

    #[test]
    fn test_project_ids_unique() {
        let mut ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_project_selection() {
        let mut selection = ProjectSelection::default();
        assert!(!selection.is_open());

        let opened = selection.open(3).expect("project 3");
        assert_eq!(opened.title, "AYUSH AI");
        assert_eq!(selection.selected().map(|p| p.id), Some(3));

        assert_eq!(selection.open(42), Err(ContentError::UnknownProject(42)));
        assert_eq!(selection.selected().map(|p| p.id), Some(3));

        selection.close();
        assert!(selection.selected().is_none());
        selection.close();
        assert!(!selection.is_open());
    }

    #[test]
    fn test_about_modes_disjoint() {
        let dev = AboutMode::Developer.content();
        let design = AboutMode::Designer.content();
        assert_eq!(AboutMode::default(), AboutMode::Developer);
        assert_ne!(dev.title, design.title);
        assert!(dev.skills.iter().all(|s| !design.skills.contains(s)));
    }

    #[test]
    fn test_callouts() {
        let link = CERTIFICATIONS_CALLOUT.link.expect("certifications link");
        assert!(link.is_external());
        assert_eq!(Some(link.url), social_link("LinkedIn").map(|l| l.url));
        assert!(CERTIFICATIONS_CALLOUT.badges.is_empty());

        assert!(SKILLS_CALLOUT.link.is_none());
        assert_eq!(SKILLS_CALLOUT.badges, ["Always Learning", "Always Growing"]);
    }

    #[test]
    fn test_social_links() {
        assert!(social_link("GitHub").is_some_and(SocialLink::is_external));
        assert!(social_link("Email").is_some_and(|l| !l.is_external()));
        assert!(social_link("Phone").is_some_and(|l| l.url.starts_with("tel:")));
        assert!(social_link("Twitter").is_none());
    }
}
