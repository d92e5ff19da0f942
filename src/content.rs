//! Everything the page says about its owner.

use crate::motion::{LineStyle, StyleRule, TerminalScript};

pub const HERO_KICKER: &str = "AI Developer &";
pub const HERO_TITLE: &str = "Technical Consultant";
pub const HERO_BLURB: &str = "Combining AI-driven predictive models with modern web stacks to \
    deliver intelligent, user-centric solutions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Instagram,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: "https://github.com/govindam-lpu",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/govindam-vats/",
    },
    SocialLink {
        kind: SocialKind::Instagram,
        label: "Instagram",
        href: "https://www.instagram.com/govind_umm",
    },
    SocialLink {
        kind: SocialKind::Email,
        label: "Email",
        href: "mailto:govindamvats.32@gmail.com",
    },
];

pub const SOURCE_REPO: &str = "https://github.com/govindam-lpu/portfolio";

const TERMINAL_LINES: [&str; 12] = [
    "$ whoami",
    "govindam-vats",
    "$ cat introduction.txt",
    "Hi! I'm Govindam Vats",
    "You can call me Gova 👋",
    "Welcome to my digital space",
    "AI Developer & Technical Consultant",
    "$ ls skills/",
    "machine-learning/ web-development/ consulting/",
    "$ echo 'Let\\'s build something amazing together!'",
    "Let's build something amazing together!",
    "$ _",
];

/// The hero terminal's script, with the owner's name, skill listing and
/// sign-off highlighted.
pub fn hero_script() -> TerminalScript {
    TerminalScript::new(TERMINAL_LINES).with_rules([
        StyleRule::new("govindam-vats", LineStyle::Identity),
        StyleRule::new("Gova", LineStyle::Identity),
        StyleRule::new("Govindam", LineStyle::Identity),
        StyleRule::new("machine-learning", LineStyle::Listing),
        StyleRule::new("web-development", LineStyle::Listing),
        StyleRule::new("consulting", LineStyle::Listing),
        StyleRule::new("Let's build", LineStyle::Emphasis),
    ])
}

pub static ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a Developer & Technical Consultant at One Profit, where I build machine-learning \
     trade prediction models in Python to guide financial decisions. I've crafted responsive \
     web apps with React, Angular, and WordPress, and integrated chatbots using Voiceflow, \
     Zoho, Whatsapp API and OpenAI.",
    "Outside work, I'm passionate about cinema and TV shows, card magic, music (concerts, \
     guitars, take your pick haha), photography/videography (DaVinci Resolve, Lightroom), \
     and travel, hobbies that fuel my creativity and motivate me to always do the best.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static ABOUT_STATS: [Stat; 3] = [
    Stat { value: "12+", label: "Projects Delivered" },
    Stat { value: "2", label: "Years Experience" },
    Stat { value: "25+", label: "Technologies" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title: "Frontend Development",
        icon: "💻",
        skills: &["React", "Angular", "TypeScript", "Tailwind CSS", "HTML5", "CSS3"],
    },
    SkillCategory {
        title: "Backend & AI",
        icon: "🤖",
        skills: &[
            "Python",
            "Node.js",
            "Firebase",
            "REST APIs",
            "Machine Learning",
            "scikit-learn",
            "Prompt Engineering",
        ],
    },
    SkillCategory {
        title: "Tools & Design",
        icon: "🎨",
        skills: &["Git/GitHub", "Figma", "Adobe Creative", "DaVinci Resolve", "WordPress", "SEO"],
    },
    SkillCategory {
        title: "Database & Cloud",
        icon: "☁️",
        skills: &["MongoDB", "MySQL", "AWS", "Google Cloud", "Supabase", "Vercel"],
    },
    SkillCategory {
        title: "Mobile & Frameworks",
        icon: "📱",
        skills: &["React Native", "Ionic", "Next.js", "Vite", "Express.js", "FastAPI"],
    },
    SkillCategory {
        title: "Analytics & APIs",
        icon: "📊",
        skills: &["Google Analytics", "Pandas", "Data Analytics", "OpenAI", "Voiceflow", "Zoho"],
    },
];

/// `(name, icon)`
pub static CORE_COMPETENCIES: [(&str, &str); 6] = [
    ("React", "⚛️"),
    ("Python", "🐍"),
    ("TypeScript", "📘"),
    ("Node.js", "🟢"),
    ("AI/ML", "🧠"),
    ("Cloud", "☁️"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    Url(&'static str),
    /// Shown as a label instead of a link.
    Status(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub source: &'static str,
    pub live: ProjectLink,
    pub featured: bool,
    pub status: Option<&'static str>,
    /// Renders the live market dashboard in place of the number card.
    pub dashboard: bool,
}

pub static PROJECTS: [Project; 5] = [
    Project {
        number: "01",
        title: "AI Trade Prediction Model",
        description: "Real-time data ingestion and predictive analytics for financial markets \
            at One Profit.",
        tech: &["Python", "scikit-learn", "pandas", "REST APIs"],
        source: "https://github.com",
        live: ProjectLink::Status("Private"),
        featured: true,
        status: Some("Ongoing"),
        dashboard: true,
    },
    Project {
        number: "02",
        title: "AI Chatbot Integration",
        description: "Voiceflow, Zoho and OpenAI chatbot for automated customer service at \
            Mridanga Media.",
        tech: &["Voiceflow", "Zoho", "OpenAI API"],
        source: "https://github.com",
        live: ProjectLink::Status("Private"),
        featured: true,
        status: Some("Completed"),
        dashboard: false,
    },
    Project {
        number: "03",
        title: "Music App",
        description: "Cross-platform Ionic & Angular music streaming with cloud data sync. \
            Previously live on Google Play.",
        tech: &["Ionic", "Angular", "Firebase"],
        source: "https://github.com",
        live: ProjectLink::Status("Discontinued"),
        featured: false,
        status: None,
        dashboard: false,
    },
    Project {
        number: "04",
        title: "Weather Analytics Dashboard",
        description: "Interactive React dashboard visualizing climate data with historical \
            analysis.",
        tech: &["React", "D3.js", "Express", "MongoDB"],
        source: "https://github.com",
        live: ProjectLink::Status("Coming Soon"),
        featured: false,
        status: None,
        dashboard: false,
    },
    Project {
        number: "05",
        title: "Ayurveda Health Coach Website",
        description: "Custom WordPress site for online course delivery, SEO-optimized and \
            self-managed.",
        tech: &["WordPress", "SEO", "Google Analytics"],
        source: "https://github.com",
        live: ProjectLink::Url("https://ayurvedahealthcoach.com"),
        featured: false,
        status: None,
        dashboard: false,
    },
];

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

pub fn other_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| !p.featured)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub period: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub tech: &'static [&'static str],
}

pub static EXPERIENCE: [Job; 3] = [
    Job {
        period: "2022 - Present",
        company: "TechCorp Inc.",
        position: "Senior Full-Stack Developer",
        description: "Lead development of scalable web applications serving 100K+ users. \
            Architect and implement microservices using Node.js and React. Mentor junior \
            developers and drive technical decisions.",
        achievements: &[
            "Reduced application load time by 40% through optimization",
            "Led migration to microservices architecture",
            "Implemented CI/CD pipeline reducing deployment time by 60%",
        ],
        tech: &["React", "Node.js", "AWS", "PostgreSQL"],
    },
    Job {
        period: "2020 - 2022",
        company: "StartupXYZ",
        position: "Full-Stack Developer",
        description: "Developed and maintained multiple client applications. Collaborated \
            with design team to implement pixel-perfect UIs. Built RESTful APIs and managed \
            database architecture.",
        achievements: &[
            "Built 5+ production applications from scratch",
            "Increased user engagement by 35% through UX improvements",
            "Implemented real-time features using WebSocket",
        ],
        tech: &["Vue.js", "Express", "MongoDB", "Docker"],
    },
    Job {
        period: "2019 - 2020",
        company: "WebSolutions Ltd.",
        position: "Frontend Developer",
        description: "Focused on creating responsive and accessible web interfaces. Worked \
            closely with UX designers to translate designs into interactive experiences.",
        achievements: &[
            "Improved accessibility compliance to WCAG 2.1 AA",
            "Reduced bundle size by 30% through optimization",
            "Created reusable component library",
        ],
        tech: &["React", "SCSS", "WordPress", "jQuery"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub period: &'static str,
    pub institution: &'static str,
    pub degree: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub static EDUCATION: [Education; 1] = [Education {
    period: "2015 - 2019",
    institution: "University of Technology",
    degree: "Bachelor of Computer Science",
    description: "Specialized in Software Engineering with focus on web technologies and \
        database systems.",
    achievements: &[
        "Graduated Magna Cum Laude (GPA: 3.8/4.0)",
        "President of Computer Science Society",
        "Published research on web performance optimization",
    ],
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub image: &'static str,
    pub text: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Chandramukhi Mueller",
        position: "Astrosarasvat",
        image: "https://astrosarasvat.com/wp-content/uploads/2024/03/home-banner.jpg?w=150&h=150&fit=crop&crop=face",
        text: "It was an absolute pleasure working with Govindam on my astrology website. I had \
            been wanting to create it for a long time but only had a rough idea of what I \
            wanted. He not only provided excellent website development services, but also \
            truly invested himself in understanding my work and vision. He gave me valuable \
            advice on how to shape the site and guided me through the entire process, from \
            scratch to launch. His dedication, professionalism, and support have been \
            outstanding. I highly recommend Govindam to anyone looking for reliable and \
            insightful website development services.",
    },
    Testimonial {
        name: "Saakshi Prakash",
        position: "Founder, Yofit",
        image: "https://yofit.in/wp-content/uploads/2025/05/saakshi5-scaled.jpeg?w=150&h=150&fit=crop&crop=face",
        text: "Working with Govindam was a truly wonderful experience. He was extremely \
            cooperative and always sincere in everything he did. He kept us in the loop at \
            every step and made sure we were fully informed throughout the process. What \
            touched us the most was how he treated our brand like his own. We've never come \
            across someone who worked with so much dedication and heart.",
    },
    Testimonial {
        name: "Karan Bhatia",
        position: "Founder, Yofit",
        image: "https://yofit.in/wp-content/uploads/2025/08/about_Karan-scaled.jpg?w=150&h=150&fit=crop&crop=face",
        text: "After approaching a few website designers, our path finally led us to Govindam! \
            We are truly thankful to our dear friend who recommended Govindam to us for our \
            website designing. Govindam is absolutely cooperative and suggests the best and \
            most suitable design for our website with which we are very happy! His way of \
            understanding our requirement and approach to our business helped keep our \
            website quite simple yet unique and just the way we wanted it to be. Even though \
            our requirements were little odd, Govindam managed to deliver us just what we \
            wanted! Absolutely grateful to Govindam for our lovely website!",
    },
];

pub static GALLERY_IMAGES: [&str; 15] = [
    "https://images.unsplash.com/photo-1556909114-4f63e8d3eb3a?w=400&h=300&fit=crop",
    "https://images.unsplash.com/photo-1606092195730-5d7b9af1efc5?w=400&h=500&fit=crop",
    "https://images.unsplash.com/photo-1510915361894-db8b60106cb1?w=400&h=600&fit=crop",
    "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?w=500&h=400&fit=crop",
    "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=500&fit=crop",
    "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=500&h=400&fit=crop",
    "https://images.unsplash.com/photo-1471919743851-c4df8b6ee606?w=400&h=600&fit=crop",
    "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?w=400&h=300&fit=crop",
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1527838832700-5059252407fa?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1574169208507-84376144848b?w=600&h=300&fit=crop",
    "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?w=400&h=500&fit=crop",
    "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=500&h=400&fit=crop",
];

const GALLERY_SPANS: [&str; 15] = [
    "col-span-1 row-span-1",
    "col-span-2 row-span-1",
    "col-span-1 row-span-2",
    "col-span-1 row-span-1",
    "col-span-2 row-span-2",
    "col-span-1 row-span-1",
    "col-span-1 row-span-2",
    "col-span-2 row-span-1",
    "col-span-1 row-span-1",
    "col-span-1 row-span-1",
    "col-span-2 row-span-1",
    "col-span-1 row-span-2",
    "col-span-1 row-span-1",
    "col-span-2 row-span-1",
    "col-span-1 row-span-1",
];

/// Collage tile size for the `index`th image; the pattern repeats.
pub fn gallery_span(index: usize) -> &'static str {
    GALLERY_SPANS[index % GALLERY_SPANS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub static CONTACT_INFO: [ContactInfo; 2] = [
    ContactInfo {
        label: "Email",
        value: "govindamvats.32@gmail.com",
        href: Some("mailto:govindamvats.32@gmail.com"),
    },
    ContactInfo {
        label: "Location",
        value: "Delhi, India",
        href: None,
    },
];

pub const CONTACT_BLURB: &str = "So what do you think? Are we a good fit? Whether it's \
    AI-driven or modern web applications, or technical consultation, I'm here to turn your \
    vision into reality. Hit me up!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_script_styles() {
        let script = hero_script();
        assert_eq!(script.len(), 12);
        let styles: Vec<_> = (0..script.len()).map(|i| script.style_of(i)).collect();
        assert_eq!(styles[0], LineStyle::Prompt);
        assert_eq!(styles[1], LineStyle::Identity);
        assert_eq!(styles[3], LineStyle::Identity);
        assert_eq!(styles[4], LineStyle::Identity);
        assert_eq!(styles[5], LineStyle::Output);
        assert_eq!(styles[8], LineStyle::Listing);
        // prompts win over rules
        assert_eq!(styles[9], LineStyle::Prompt);
        assert_eq!(styles[10], LineStyle::Emphasis);
        assert_eq!(styles[11], LineStyle::Prompt);
    }

    #[test]
    fn test_project_split() {
        assert_eq!(featured_projects().count(), 2);
        assert_eq!(other_projects().count(), 3);
        assert_eq!(PROJECTS.iter().filter(|p| p.dashboard).count(), 1);
    }

    #[test]
    fn test_gallery_span_repeats() {
        assert_eq!(gallery_span(1), "col-span-2 row-span-1");
        assert_eq!(gallery_span(16), gallery_span(1));
        assert_eq!(GALLERY_IMAGES.len(), GALLERY_SPANS.len());
    }
}
