//! Static knowledge tables backing the scoring stages
//!
//! All of these are plain immutable data loaded once at process start. The
//! scoring functions stay pure and can be tested in isolation from the data
//! they reference. Ordering inside each table is meaningful: suggestion and
//! category output preserve it.

use once_cell::sync::Lazy;
use regex::Regex;

// --- Skill taxonomy ---------------------------------------------------------

pub const LANGUAGES: &[&str] = &[
    "Python", "JavaScript", "Java", "C++", "C#", "Ruby", "PHP", "Swift", "Kotlin",
    "Go", "Rust", "TypeScript", "Scala", "R", "MATLAB", "Perl", "Dart", "SQL",
    "HTML", "CSS", "Shell", "Bash", "PowerShell",
];

pub const FRAMEWORKS: &[&str] = &[
    "React", "Angular", "Vue", "Next.js", "Node.js", "Express", "Django", "Flask",
    "FastAPI", "Spring", "Laravel", "Rails", "ASP.NET", "Flutter", "React Native",
    "TensorFlow", "PyTorch", "Keras", "Scikit-learn", "Pandas", "NumPy",
];

pub const DATABASES: &[&str] = &[
    "MySQL", "PostgreSQL", "MongoDB", "Redis", "Oracle", "SQL Server", "SQLite",
    "Cassandra", "DynamoDB", "Firebase", "Elasticsearch", "Neo4j", "MariaDB",
];

pub const CLOUD: &[&str] = &[
    "AWS", "Azure", "Google Cloud", "GCP", "Heroku", "DigitalOcean", "Vercel",
    "Netlify", "Docker", "Kubernetes", "Jenkins", "CI/CD", "Terraform",
];

pub const TOOLS: &[&str] = &[
    "Git", "GitHub", "GitLab", "Jira", "Confluence", "Slack", "VS Code", "IntelliJ",
    "Postman", "Figma", "Adobe XD", "Photoshop", "Illustrator", "Tableau", "Power BI",
];

pub const CONCEPTS: &[&str] = &[
    "Machine Learning", "Deep Learning", "AI", "Data Science", "DevOps", "Agile",
    "Scrum", "REST API", "GraphQL", "Microservices", "Blockchain", "IoT",
    "Cybersecurity", "Cloud Computing", "Big Data", "ETL", "Data Warehousing",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Leadership", "Communication", "Teamwork", "Problem Solving", "Critical Thinking",
    "Time Management", "Adaptability", "Creativity", "Collaboration", "Analytical",
    "Project Management", "Presentation", "Negotiation", "Conflict Resolution",
    "Decision Making", "Strategic Planning", "Mentoring", "Customer Service",
];

// --- Role detection and recommendations -------------------------------------

pub const DEFAULT_ROLE: &str = "Software Engineer";

/// Skills whose presence signals a role, evaluated in this order; the first
/// matching rule wins.
pub const DATA_SCIENTIST_SIGNALS: &[&str] =
    &["TensorFlow", "PyTorch", "Machine Learning", "Data Science"];
pub const DEVOPS_SIGNALS: &[&str] = &["Docker", "Kubernetes", "Jenkins", "Terraform"];
pub const FRONTEND_SIGNALS: &[&str] = &["React", "Vue", "Angular"];

/// Recommended skills per role, in recommendation order.
pub const ROLE_SKILLS: &[(&str, &[&str])] = &[
    (
        "Software Engineer",
        &["Docker", "Kubernetes", "AWS", "React", "Node.js", "Python", "Git", "REST API"],
    ),
    (
        "Data Scientist",
        &["Python", "R", "TensorFlow", "PyTorch", "SQL", "Tableau", "Machine Learning", "Statistics"],
    ),
    (
        "Frontend Developer",
        &["React", "Vue", "Angular", "TypeScript", "CSS", "HTML", "Webpack", "Figma"],
    ),
    (
        "Backend Developer",
        &["Node.js", "Python", "Java", "SQL", "MongoDB", "Redis", "Docker", "Microservices"],
    ),
    (
        "DevOps Engineer",
        &["Docker", "Kubernetes", "AWS", "Jenkins", "Terraform", "Linux", "CI/CD", "Monitoring"],
    ),
    (
        "Full Stack Developer",
        &["React", "Node.js", "Python", "SQL", "MongoDB", "AWS", "Git", "Docker"],
    ),
];

pub fn role_recommended_skills(role: &str) -> &'static [&'static str] {
    ROLE_SKILLS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, skills)| *skills)
        .unwrap_or(ROLE_SKILLS[0].1)
}

// --- Learning resources -----------------------------------------------------

/// A learning resource: name, type label, URL.
pub type ResourceRef = (&'static str, &'static str, &'static str);

/// Per-skill learning plan entry: estimated time, priority label, resources.
pub struct SkillResourceEntry {
    pub skill: &'static str,
    pub time: &'static str,
    pub priority: &'static str,
    pub resources: &'static [ResourceRef],
}

pub const SKILL_RESOURCES: &[SkillResourceEntry] = &[
    SkillResourceEntry {
        skill: "Python",
        time: "3-4 months",
        priority: "High",
        resources: &[
            ("Python.org Official Tutorial", "Documentation", "https://docs.python.org/3/tutorial/"),
            ("Python for Everybody (Coursera)", "Course", "https://www.coursera.org/specializations/python"),
            ("Automate the Boring Stuff", "Book", "https://automatetheboringstuff.com/"),
        ],
    },
    SkillResourceEntry {
        skill: "JavaScript",
        time: "2-3 months",
        priority: "High",
        resources: &[
            ("JavaScript.info", "Tutorial", "https://javascript.info/"),
            ("freeCodeCamp JavaScript", "Interactive", "https://www.freecodecamp.org/"),
            ("Eloquent JavaScript", "Book", "https://eloquentjavascript.net/"),
        ],
    },
    SkillResourceEntry {
        skill: "React",
        time: "2-3 months",
        priority: "High",
        resources: &[
            ("React Official Docs", "Documentation", "https://react.dev/"),
            ("React - The Complete Guide (Udemy)", "Course", "https://www.udemy.com/course/react-the-complete-guide/"),
            ("Scrimba React Course", "Interactive", "https://scrimba.com/learn/learnreact"),
        ],
    },
    SkillResourceEntry {
        skill: "Node.js",
        time: "2-3 months",
        priority: "High",
        resources: &[
            ("Node.js Official Docs", "Documentation", "https://nodejs.org/docs/"),
            ("The Complete Node.js Developer Course", "Course", "https://www.udemy.com/course/the-complete-nodejs-developer-course-2/"),
            ("NodeSchool", "Interactive", "https://nodeschool.io/"),
        ],
    },
    SkillResourceEntry {
        skill: "Docker",
        time: "1-2 months",
        priority: "Medium",
        resources: &[
            ("Docker Official Docs", "Documentation", "https://docs.docker.com/"),
            ("Docker Mastery (Udemy)", "Course", "https://www.udemy.com/course/docker-mastery/"),
            ("Play with Docker", "Interactive", "https://labs.play-with-docker.com/"),
        ],
    },
    SkillResourceEntry {
        skill: "AWS",
        time: "3-4 months",
        priority: "High",
        resources: &[
            ("AWS Training", "Course", "https://aws.amazon.com/training/"),
            ("AWS Certified Solutions Architect", "Certification", "https://aws.amazon.com/certification/"),
            ("A Cloud Guru", "Platform", "https://acloudguru.com/"),
        ],
    },
    SkillResourceEntry {
        skill: "Kubernetes",
        time: "2-3 months",
        priority: "Medium",
        resources: &[
            ("Kubernetes Official Docs", "Documentation", "https://kubernetes.io/docs/"),
            ("Kubernetes for Developers (LFD259)", "Course", "https://training.linuxfoundation.org/"),
            ("Certified Kubernetes Administrator (CKA)", "Certification", "https://www.cncf.io/certification/cka/"),
        ],
    },
    SkillResourceEntry {
        skill: "Machine Learning",
        time: "4-6 months",
        priority: "High",
        resources: &[
            ("Machine Learning by Andrew Ng", "Course", "https://www.coursera.org/learn/machine-learning"),
            ("Fast.ai Practical Deep Learning", "Course", "https://www.fast.ai/"),
            ("Hands-On Machine Learning", "Book", "https://www.oreilly.com/library/view/hands-on-machine-learning/9781492032632/"),
        ],
    },
];

pub fn skill_resource(skill: &str) -> Option<&'static SkillResourceEntry> {
    SKILL_RESOURCES.iter().find(|entry| entry.skill == skill)
}

// --- ATS keyword lists ------------------------------------------------------

pub const SECTION_KEYWORDS: &[&str] =
    &["experience", "education", "skills", "projects", "certifications"];

pub const ACTION_VERBS: &[&str] = &[
    "achieved", "improved", "developed", "created", "managed", "led", "designed",
    "implemented", "increased", "reduced", "optimized", "built", "launched",
    "delivered", "collaborated", "coordinated", "analyzed", "resolved",
];

pub const PROFILE_KEYWORDS: &[&str] = &["linkedin", "github", "portfolio"];

// --- Risk analysis wordlists ------------------------------------------------

pub const SUPERLATIVES: &[&str] = &[
    "best", "greatest", "perfect", "exceptional", "outstanding",
    "unparalleled", "world-class", "top", "leading", "premier",
    "ultimate", "supreme", "optimal", "ideal", "flawless",
];

pub const VAGUE_QUANTIFIERS: &[&str] = &["many", "several", "numerous", "various", "multiple"];

pub const BUZZWORDS: &[&str] = &[
    "synergy", "leverage", "paradigm", "disruptive", "innovative",
    "cutting-edge", "next-generation", "revolutionary", "game-changing",
];

pub const GENERIC_PHRASES: &[&str] =
    &["responsible for", "duties included", "worked on", "helped with"];

pub const UNPROFESSIONAL_EMAIL_TOKENS: &[&str] =
    &["sexy", "hot", "cool", "baby", "69", "420", "party"];

pub const GAP_DISCLOSURE_TOKENS: &[&str] = &["gap", "break", "unemployed"];

// --- Shared contact patterns ------------------------------------------------

pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("Invalid email regex")
});

pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("Invalid phone regex")
});
