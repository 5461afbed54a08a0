//! Everything the page says about its owner.

pub const NAME: &str = "Kedarnath Tattapure";
pub const FIRST_NAME: &str = "Kedarnath";
pub const LAST_NAME: &str = "Tattapure.";
pub const ROLE: &str = "Software Developer";
pub const AVAILABILITY: &str = "Available for Software Roles";
pub const STUDIES: &str = "MCA Final Year Student";
pub const SPECIALIZATION: &str = "Software Development";
pub const SUMMARY: &str = "\"Solving complex problems and translating technical concepts into \
                           clear solutions as a Software Developer.\"";
pub const LOCATION: &str = "Pune, Maharashtra, India";
pub const SHORT_LOCATION: &str = "Pune, MH, India";
pub const EMAIL: &str = "kedart445@gmail.com";
pub const PHONE: &str = "+91 9763761719";
pub const PHONE_HREF: &str = "tel:+919763761719";
pub const WHATSAPP_HREF: &str = "https://wa.me/919763761719";
pub const GITHUB_HREF: &str = "https://github.com/Smartking45";
pub const LINKEDIN_HREF: &str = "https://linkedin.com/in/kedarnath-tattapure-0711561bb";

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub accent: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        label: "Degree",
        value: "MCA Candidate",
        accent: "blue",
    },
    Stat {
        label: "Rank",
        value: "8.5 CGPA",
        accent: "green",
    },
    Stat {
        label: "Core Tech",
        value: "Next.js & Python",
        accent: "purple",
    },
];

pub const DSA_SOLVED: &str = "150+";

pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    /// Rendered as the filled button of a card.
    pub primary: bool,
}

pub struct Project {
    pub title: &'static str,
    pub tag: &'static str,
    pub accent: &'static str,
    pub summary: &'static str,
    pub links: &'static [Link],
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "Data Automation Script",
        tag: "Python / Scripting",
        accent: "blue",
        summary: "Built enterprise-grade scripts to automate repetitive Excel tasks and manage \
                  large datasets, significantly reducing manual processing time.",
        links: &[Link {
            label: "Source",
            href: GITHUB_HREF,
            primary: false,
        }],
    },
    Project {
        title: "Full-Stack Portfolio",
        tag: "Next.js / Tailwind",
        accent: "purple",
        summary: "Developed a highly interactive, responsive personal portfolio utilizing \
                  Next.js, Framer Motion for animations, and a modern Bento Grid UI.",
        links: &[
            Link {
                label: "Source",
                href: GITHUB_HREF,
                primary: false,
            },
            Link {
                label: "Live Demo",
                href: "#",
                primary: true,
            },
        ],
    },
];

pub struct StackGroup {
    pub title: &'static str,
    pub items: &'static str,
}

pub const STACK: [StackGroup; 2] = [
    StackGroup {
        title: "Back-end",
        items: "Node.js, Python, C++",
    },
    StackGroup {
        title: "Front-end",
        items: "Next.js, React, Tailwind",
    },
];

pub struct Database {
    pub name: &'static str,
    pub kind: &'static str,
}

pub const DATABASES: [Database; 2] = [
    Database {
        name: "MongoDB",
        kind: "NoSQL",
    },
    Database {
        name: "MSSQL",
        kind: "SQL",
    },
];

pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

pub const FACTS: [Fact; 6] = [
    Fact {
        label: "Name",
        value: NAME,
    },
    Fact {
        label: "Education",
        value: "MCA Final Year",
    },
    Fact {
        label: "Location",
        value: SHORT_LOCATION,
    },
    Fact {
        label: "Role",
        value: ROLE,
    },
    Fact {
        label: "Email",
        value: EMAIL,
    },
    Fact {
        label: "Phone",
        value: PHONE,
    },
];

pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub color: &'static str,
}

pub const SOCIALS: [Social; 4] = [
    Social {
        label: "LinkedIn",
        href: LINKEDIN_HREF,
        color: "#0077b5",
    },
    Social {
        label: "GitHub",
        href: GITHUB_HREF,
        color: "#333",
    },
    Social {
        label: "WhatsApp",
        href: WHATSAPP_HREF,
        color: "#25D366",
    },
    Social {
        label: "Phone",
        href: PHONE_HREF,
        color: "#3b82f6",
    },
];

/// A way to reach out listed next to the contact form, `href` is `None` for plain text.
pub struct Channel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub accent: &'static str,
}

pub const CHANNELS: [Channel; 4] = [
    Channel {
        label: "Email Me",
        value: EMAIL,
        href: Some("mailto:kedart445@gmail.com"),
        accent: "blue",
    },
    Channel {
        label: "WhatsApp",
        value: PHONE,
        href: Some(WHATSAPP_HREF),
        accent: "green",
    },
    Channel {
        label: "Call Me",
        value: PHONE,
        href: Some(PHONE_HREF),
        accent: "indigo",
    },
    Channel {
        label: "Location",
        value: LOCATION,
        href: None,
        accent: "gray",
    },
];
