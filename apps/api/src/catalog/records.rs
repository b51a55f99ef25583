//! Static career, education, and scholarship records.
//!
//! The catalog is a fixed in-memory dataset, not a database table. Search and
//! recommendation endpoints score these records with the keyword-overlap
//! ranking in [`super::search`], so the field values here are load-bearing:
//! changing a keyword or title changes ranking behavior.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Record types
// ────────────────────────────────────────────────────────────────────────────

/// A career profile: description, pathways, and the keyword list that drives
/// relevance scoring.
#[derive(Debug, Clone, Serialize)]
pub struct Career {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub education: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub salary: &'static str,
    pub outlook: &'static str,
    pub entry_paths: &'static [&'static str],
    pub specializations: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

/// An education program (degree, bootcamp, or certificate).
/// `careers` lists the job titles the program commonly leads to; it links
/// programs to [`Career`] records by title matching.
#[derive(Debug, Clone, Serialize)]
pub struct EducationProgram {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub program_type: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub cost: &'static str,
    pub requirements: &'static str,
    pub careers: &'static [&'static str],
    pub institutions: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

/// A scholarship or grant with eligibility text and covered fields of study.
#[derive(Debug, Clone, Serialize)]
pub struct Scholarship {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub deadline: &'static str,
    pub eligibility: &'static str,
    pub application_process: &'static str,
    pub website: &'static str,
    pub fields_of_study: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Careers
// ────────────────────────────────────────────────────────────────────────────

pub static CAREERS: [Career; 5] = [
    Career {
        id: "software_engineer",
        title: "Software Engineer",
        description: "Develops applications and systems using programming languages and software development principles.",
        education: &[
            "Bachelor's degree in Computer Science, Software Engineering, or related field",
            "Coding bootcamp (alternative path)",
            "Self-taught with strong portfolio (alternative path)",
        ],
        skills: &[
            "Programming languages (JavaScript, Python, Java, etc.)",
            "Data structures and algorithms",
            "Software design patterns",
            "Version control (Git)",
            "Problem-solving",
            "Debugging",
            "Testing methodologies",
        ],
        salary: "$70,000 - $150,000 (varies by location, experience, and specialization)",
        outlook: "Excellent growth potential with 22% projected increase by 2030",
        entry_paths: &[
            "Internships during college",
            "Entry-level developer positions",
            "Open source contributions",
            "Hackathons and coding competitions",
        ],
        specializations: &[
            "Front-end development",
            "Back-end development",
            "Full-stack development",
            "Mobile app development",
            "Game development",
            "DevOps",
            "Machine learning engineering",
        ],
        industries: &[
            "Technology",
            "Finance",
            "Healthcare",
            "Education",
            "Entertainment",
            "E-commerce",
        ],
        keywords: &[
            "coding",
            "programming",
            "developer",
            "software",
            "applications",
            "web development",
            "mobile development",
            "tech",
            "computer science",
        ],
    },
    Career {
        id: "data_scientist",
        title: "Data Scientist",
        description: "Analyzes and interprets complex data to help organizations make better decisions.",
        education: &[
            "Master's or PhD in Data Science, Statistics, Computer Science, or related field",
            "Bachelor's degree with specialized certifications (alternative path)",
        ],
        skills: &[
            "Statistical analysis",
            "Machine learning",
            "Programming (Python, R)",
            "Data visualization",
            "SQL and database knowledge",
            "Big data technologies",
            "Communication and storytelling",
        ],
        salary: "$85,000 - $170,000 (varies by location, experience, and industry)",
        outlook: "Very strong growth with 31% projected increase by 2030",
        entry_paths: &[
            "Graduate research assistantships",
            "Data analyst roles as stepping stones",
            "Kaggle competitions",
            "Industry internships",
        ],
        specializations: &[
            "Machine learning engineer",
            "AI researcher",
            "Business intelligence analyst",
            "Quantitative analyst",
            "Computational linguist",
            "Computer vision engineer",
        ],
        industries: &[
            "Technology",
            "Finance",
            "Healthcare",
            "E-commerce",
            "Marketing",
            "Research",
        ],
        keywords: &[
            "data",
            "analytics",
            "statistics",
            "machine learning",
            "artificial intelligence",
            "AI",
            "big data",
            "analysis",
            "research",
            "math",
        ],
    },
    Career {
        id: "ux_designer",
        title: "UX Designer",
        description: "Creates user-friendly interfaces and experiences for digital products.",
        education: &[
            "Bachelor's degree in Design, Human-Computer Interaction, or related field",
            "UX/UI bootcamps or certification programs (alternative path)",
            "Self-taught with strong portfolio (alternative path)",
        ],
        skills: &[
            "User research",
            "Wireframing and prototyping",
            "Usability testing",
            "Information architecture",
            "Visual design principles",
            "Design tools (Figma, Sketch, Adobe XD)",
            "Empathy and user advocacy",
        ],
        salary: "$65,000 - $130,000 (varies by location, experience, and industry)",
        outlook: "Strong growth with 23% projected increase by 2030",
        entry_paths: &[
            "Internships",
            "Junior designer positions",
            "Design challenges and competitions",
            "Personal projects and portfolio building",
        ],
        specializations: &[
            "Interaction design",
            "Visual design",
            "User research",
            "Information architecture",
            "Accessibility specialist",
            "Product design",
        ],
        industries: &[
            "Technology",
            "E-commerce",
            "Entertainment",
            "Healthcare",
            "Education",
            "Finance",
        ],
        keywords: &[
            "design",
            "user experience",
            "UX",
            "UI",
            "interface",
            "usability",
            "wireframing",
            "prototyping",
            "creative",
            "visual design",
        ],
    },
    Career {
        id: "healthcare_administrator",
        title: "Healthcare Administrator",
        description: "Manages healthcare facilities, services, and staff to ensure efficient operations.",
        education: &[
            "Bachelor's degree in Healthcare Administration, Business, or related field",
            "Master's degree preferred for advancement (MHA, MBA with healthcare focus)",
        ],
        skills: &[
            "Leadership and management",
            "Healthcare regulations knowledge",
            "Financial management",
            "Communication",
            "Strategic planning",
            "Electronic health record systems",
            "Quality improvement methodologies",
        ],
        salary: "$65,000 - $120,000 (varies by location, facility type, and experience)",
        outlook: "Strong growth with 32% projected increase by 2030",
        entry_paths: &[
            "Administrative assistant or coordinator roles",
            "Department-specific management",
            "Graduate administrative fellowships",
            "Internships at healthcare facilities",
        ],
        specializations: &[
            "Hospital administration",
            "Clinical practice management",
            "Health information management",
            "Nursing home administration",
            "Health policy administration",
        ],
        industries: &[
            "Healthcare",
            "Insurance",
            "Government",
            "Non-profit",
            "Consulting",
        ],
        keywords: &[
            "healthcare",
            "hospital",
            "medical",
            "administration",
            "management",
            "health services",
            "clinical",
            "patient care",
            "health policy",
        ],
    },
    Career {
        id: "marketing_manager",
        title: "Marketing Manager",
        description: "Plans and oversees marketing campaigns to promote products, services, or brands.",
        education: &[
            "Bachelor's degree in Marketing, Business, Communications, or related field",
            "MBA or Master's in Marketing for advancement",
        ],
        skills: &[
            "Strategic planning",
            "Market research",
            "Brand management",
            "Digital marketing",
            "Content creation",
            "Analytics and data interpretation",
            "Project management",
        ],
        salary: "$65,000 - $150,000 (varies by industry, company size, and experience)",
        outlook: "Steady growth with 10% projected increase by 2030",
        entry_paths: &[
            "Marketing assistant or coordinator",
            "Social media specialist",
            "Marketing internships",
            "Sales positions as stepping stones",
        ],
        specializations: &[
            "Digital marketing",
            "Content marketing",
            "Brand management",
            "Product marketing",
            "Social media marketing",
            "Marketing analytics",
        ],
        industries: &[
            "Retail",
            "Technology",
            "Entertainment",
            "Consumer goods",
            "Healthcare",
            "Financial services",
        ],
        keywords: &[
            "marketing",
            "advertising",
            "branding",
            "communications",
            "social media",
            "digital marketing",
            "content",
            "promotion",
            "public relations",
            "market research",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Education programs
// ────────────────────────────────────────────────────────────────────────────

pub static EDUCATION_PROGRAMS: [EducationProgram; 3] = [
    EducationProgram {
        id: "cs_bachelors",
        program_type: "Bachelor's Degree",
        name: "Computer Science",
        description: "A four-year undergraduate degree that covers programming, algorithms, data structures, computer systems, and software development.",
        duration: "4 years",
        cost: "$20,000 - $200,000 (varies by institution and residency status)",
        requirements: "High school diploma or equivalent, SAT/ACT scores, application essays",
        careers: &[
            "Software Engineer",
            "Web Developer",
            "Mobile App Developer",
            "Systems Analyst",
            "Database Administrator",
        ],
        institutions: &[
            "Massachusetts Institute of Technology",
            "Stanford University",
            "Carnegie Mellon University",
            "University of California, Berkeley",
            "Georgia Institute of Technology",
        ],
        keywords: &[
            "computer science",
            "CS",
            "programming",
            "software engineering",
            "coding",
            "bachelor's",
            "undergraduate",
            "college",
            "university",
        ],
    },
    EducationProgram {
        id: "data_science_masters",
        program_type: "Master's Degree",
        name: "Data Science",
        description: "A graduate program focusing on statistical analysis, machine learning, data mining, and big data technologies.",
        duration: "1-2 years",
        cost: "$30,000 - $100,000 (varies by institution and residency status)",
        requirements: "Bachelor's degree (preferably in a quantitative field), GRE scores, programming experience",
        careers: &[
            "Data Scientist",
            "Machine Learning Engineer",
            "Data Analyst",
            "Business Intelligence Analyst",
            "Research Scientist",
        ],
        institutions: &[
            "Stanford University",
            "Massachusetts Institute of Technology",
            "University of California, Berkeley",
            "Harvard University",
            "University of Washington",
        ],
        keywords: &[
            "data science",
            "analytics",
            "machine learning",
            "statistics",
            "big data",
            "master's",
            "graduate",
            "MS",
            "advanced degree",
        ],
    },
    EducationProgram {
        id: "coding_bootcamp",
        program_type: "Bootcamp",
        name: "Full-Stack Web Development Bootcamp",
        description: "An intensive, short-term training program that teaches practical web development skills including front-end and back-end technologies.",
        duration: "12-24 weeks",
        cost: "$10,000 - $20,000",
        requirements: "Basic computer literacy, pre-work assignments, interview or assessment",
        careers: &[
            "Web Developer",
            "Front-End Developer",
            "Back-End Developer",
            "Full-Stack Developer",
            "Junior Software Engineer",
        ],
        institutions: &[
            "App Academy",
            "Hack Reactor",
            "General Assembly",
            "Flatiron School",
            "Lambda School",
        ],
        keywords: &[
            "bootcamp",
            "coding bootcamp",
            "web development",
            "programming",
            "full-stack",
            "front-end",
            "back-end",
            "short-term",
            "intensive training",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Scholarships
// ────────────────────────────────────────────────────────────────────────────

pub static SCHOLARSHIPS: [Scholarship; 3] = [
    Scholarship {
        id: "tech_leaders",
        name: "Technology Leaders Scholarship",
        description: "Provides financial support to students pursuing degrees in computer science, engineering, or related technology fields.",
        amount: "$5,000",
        deadline: "2025-06-15",
        eligibility: "Undergraduate or graduate students majoring in computer science, engineering, or related fields. Minimum GPA of 3.5.",
        application_process: "Online application, transcript, two letters of recommendation, personal statement.",
        website: "https://example.com/tech-leaders-scholarship",
        fields_of_study: &[
            "Computer Science",
            "Software Engineering",
            "Information Technology",
            "Computer Engineering",
            "Data Science",
        ],
        keywords: &[
            "technology",
            "computer science",
            "engineering",
            "STEM",
            "tech",
            "programming",
            "software",
            "undergraduate",
            "graduate",
        ],
    },
    Scholarship {
        id: "women_in_stem",
        name: "Women in STEM Scholarship",
        description: "Supports women pursuing education and careers in science, technology, engineering, and mathematics fields.",
        amount: "$7,500",
        deadline: "2025-05-30",
        eligibility: "Female students pursuing undergraduate or graduate degrees in STEM fields. Minimum GPA of 3.2.",
        application_process: "Online application, transcript, resume, essay on career goals in STEM.",
        website: "https://example.com/women-in-stem-scholarship",
        fields_of_study: &[
            "Science",
            "Technology",
            "Engineering",
            "Mathematics",
            "Computer Science",
            "Physics",
            "Chemistry",
            "Biology",
        ],
        keywords: &[
            "women",
            "STEM",
            "science",
            "technology",
            "engineering",
            "mathematics",
            "female",
            "gender diversity",
            "underrepresented",
        ],
    },
    Scholarship {
        id: "future_innovators",
        name: "Future Innovators Grant",
        description: "Provides funding to students who demonstrate innovative thinking and entrepreneurial potential.",
        amount: "$3,000",
        deadline: "2025-07-10",
        eligibility: "Undergraduate or graduate students in any field with demonstrated interest in innovation and entrepreneurship.",
        application_process: "Online application, business plan or innovation proposal, letter of recommendation.",
        website: "https://example.com/future-innovators-grant",
        fields_of_study: &[
            "Business",
            "Entrepreneurship",
            "Engineering",
            "Computer Science",
            "Design",
            "Any field with innovation focus",
        ],
        keywords: &[
            "innovation",
            "entrepreneurship",
            "startup",
            "business",
            "creative",
            "invention",
            "technology",
            "ideas",
            "venture",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Lookups
// ────────────────────────────────────────────────────────────────────────────

pub fn career_by_id(id: &str) -> Option<&'static Career> {
    CAREERS.iter().find(|career| career.id == id)
}

pub fn education_by_id(id: &str) -> Option<&'static EducationProgram> {
    EDUCATION_PROGRAMS.iter().find(|program| program.id == id)
}

pub fn scholarship_by_id(id: &str) -> Option<&'static Scholarship> {
    SCHOLARSHIPS.iter().find(|scholarship| scholarship.id == id)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
