//! Static portfolio content
//!
//! Everything the module views show. The interpreter reads the project
//! table for `ls` and `open <n>`; the rest is presentation data.

use std::fmt;

/// Delivery status tag of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Production,
    Active,
    Beta,
    Development,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Production => "Production",
            ProjectStatus::Active => "Active",
            ProjectStatus::Beta => "Beta",
            ProjectStatus::Development => "Development",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub tech: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Neural Network Visualizer",
        tech: "React, Three.js, TensorFlow",
        description: "Real-time 3D visualization of neural network training",
        status: ProjectStatus::Production,
    },
    Project {
        name: "Blockchain Explorer",
        tech: "Next.js, Web3, Ethers.js",
        description: "Decentralized application for blockchain analytics",
        status: ProjectStatus::Active,
    },
    Project {
        name: "AI Code Assistant",
        tech: "Python, FastAPI, GPT-4",
        description: "Intelligent code completion and review system",
        status: ProjectStatus::Beta,
    },
    Project {
        name: "Quantum Simulator",
        tech: "Rust, WebAssembly, React",
        description: "Web-based quantum computing simulator",
        status: ProjectStatus::Development,
    },
];

/// Look up a project by its 1-based position in the listing
pub fn project_by_index(n: usize) -> Option<&'static Project> {
    n.checked_sub(1).and_then(|i| PROJECTS.get(i))
}

/// Number of projects carrying each status, in status order
pub fn project_status_counts() -> [(ProjectStatus, usize); 4] {
    [
        ProjectStatus::Production,
        ProjectStatus::Active,
        ProjectStatus::Beta,
        ProjectStatus::Development,
    ]
    .map(|status| {
        let count = PROJECTS.iter().filter(|p| p.status == status).count();
        (status, count)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        items: &["JavaScript", "TypeScript", "Python", "Rust", "Go"],
    },
    SkillCategory {
        name: "Frontend",
        items: &["React", "Next.js", "Vue", "Three.js", "Tailwind"],
    },
    SkillCategory {
        name: "Backend",
        items: &["Node.js", "FastAPI", "GraphQL", "PostgreSQL", "Redis"],
    },
    SkillCategory {
        name: "DevOps",
        items: &["Docker", "Kubernetes", "AWS", "CI/CD", "Terraform"],
    },
    SkillCategory {
        name: "AI/ML",
        items: &["TensorFlow", "PyTorch", "OpenAI", "Hugging Face"],
    },
];

/// A labelled gauge: `percent` drives the bar, `level` is the caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gauge {
    pub label: &'static str,
    pub percent: u16,
    pub level: &'static str,
}

pub const PROFILE_STATS: &[Gauge] = &[
    Gauge {
        label: "Frontend / UI",
        percent: 92,
        level: "92%",
    },
    Gauge {
        label: "Backend / Systems",
        percent: 88,
        level: "88%",
    },
    Gauge {
        label: "AI / ML",
        percent: 80,
        level: "80%",
    },
];

pub const STACK_OVERVIEW: &[Gauge] = &[
    Gauge {
        label: "Frontend depth",
        percent: 90,
        level: "high",
    },
    Gauge {
        label: "Backend depth",
        percent: 85,
        level: "high",
    },
    Gauge {
        label: "DevOps / Cloud",
        percent: 70,
        level: "medium",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Full Stack Developer with a passion for creating innovative solutions at the \
     intersection of technology and design. Specialized in building scalable web \
     applications, AI integrations, and immersive user experiences.",
    "With 5+ years of experience in software development, I've worked on projects \
     ranging from enterprise applications to cutting-edge AI systems. I believe in \
     writing clean, maintainable code and staying at the forefront of technology.",
];

pub const ABOUT_FACTS: &[(&str, &str)] = &[
    ("Location", "San Francisco, CA"),
    ("Experience", "5+ Years"),
    ("Education", "BS Computer Science"),
    ("Status", "Available for Work"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub period: &'static str,
    pub company: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[Role] = &[
    Role {
        title: "Senior Full Stack Developer",
        period: "2022 - Present",
        company: "TechCorp Inc.",
        highlights: &[
            "Led development of AI-powered analytics platform",
            "Architected microservices infrastructure serving 1M+ users",
            "Mentored team of 5 junior developers",
        ],
    },
    Role {
        title: "Full Stack Developer",
        period: "2020 - 2022",
        company: "StartupXYZ",
        highlights: &[
            "Built real-time collaboration features",
            "Optimized application performance by 60%",
            "Implemented CI/CD pipeline",
        ],
    },
    Role {
        title: "Junior Developer",
        period: "2019 - 2020",
        company: "Digital Agency",
        highlights: &[
            "Developed responsive web applications",
            "Collaborated with design team on UI/UX",
            "Maintained legacy codebases",
        ],
    },
];

pub const CAREER_SUMMARY: &[(&str, &str)] = &[
    ("Years shipping", "5+"),
    ("Teams led", "1–2"),
    ("Systems touched", "enterprise · startups"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub label: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
}

pub const CONTACT_CHANNELS: &[Channel] = &[
    Channel {
        label: "Email",
        handle: "your.email@example.com",
        url: "mailto:your.email@example.com",
    },
    Channel {
        label: "GitHub",
        handle: "github.com/yourusername",
        url: "https://github.com",
    },
    Channel {
        label: "LinkedIn",
        handle: "linkedin.com/in/yourprofile",
        url: "https://linkedin.com",
    },
    Channel {
        label: "Website",
        handle: "yourwebsite.com",
        url: "https://yourwebsite.com",
    },
];

pub const CONTACT_NOTES: &[(&str, &str)] = &[
    ("Avg. response", "< 24h"),
    ("Time zones", "flexible / remote‑friendly"),
];

/// Headline numbers for the HUD sidebar
pub const QUICK_STATS: &[(&str, &str)] = &[
    ("PROJECTS", "24+"),
    ("COMMITS", "5.2K"),
    ("EXPERIENCE", "5Y+"),
    ("SKILLS", "30+"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_by_index_is_one_based() {
        assert_eq!(
            project_by_index(1).map(|p| p.name),
            Some("Neural Network Visualizer")
        );
        assert_eq!(
            project_by_index(PROJECTS.len()).map(|p| p.name),
            Some("Quantum Simulator")
        );
        assert!(project_by_index(0).is_none());
        assert!(project_by_index(PROJECTS.len() + 1).is_none());
    }

    #[test]
    fn test_status_counts_cover_all_projects() {
        let total: usize = project_status_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, PROJECTS.len());
    }
}
