//! The dashboard payload: curated sample career matches, scholarship
//! summaries, and internship postings.
//!
//! These are fixed editorial samples, not derived from the catalog; the
//! dashboard clients render them as-is.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CareerMatch {
    pub title: &'static str,
    /// Match percentage shown next to the career card. Serialized as `match`
    /// for the existing dashboard clients.
    #[serde(rename = "match")]
    pub match_percent: u8,
    pub description: &'static str,
    pub education: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub outlook: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScholarshipSummary {
    pub name: &'static str,
    pub amount: &'static str,
    pub deadline: &'static str,
    pub eligibility: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InternshipPosting {
    pub company: &'static str,
    pub position: &'static str,
    pub location: &'static str,
    pub deadline: &'static str,
}

pub static SAMPLE_RECOMMENDATIONS: [CareerMatch; 3] = [
    CareerMatch {
        title: "Software Engineer",
        match_percent: 92,
        description: "Develops applications and systems using programming languages and software development principles.",
        education: &[
            "Bachelor's degree in Computer Science",
            "Coding bootcamp (alternative)",
        ],
        skills: &["Programming", "Problem-solving", "Debugging", "Software design"],
        outlook: "Excellent growth potential with 22% projected increase by 2030",
    },
    CareerMatch {
        title: "Data Scientist",
        match_percent: 88,
        description: "Analyzes and interprets complex data to help organizations make better decisions.",
        education: &[
            "Master's degree in Data Science",
            "Bachelor's with specialized certifications",
        ],
        skills: &[
            "Statistical analysis",
            "Machine learning",
            "Programming (Python/R)",
            "Data visualization",
        ],
        outlook: "Very strong growth with 31% projected increase by 2030",
    },
    CareerMatch {
        title: "UX/UI Designer",
        match_percent: 85,
        description: "Creates user-friendly interfaces and experiences for digital products.",
        education: &[
            "Bachelor's in Design or related field",
            "UX/UI certification programs",
        ],
        skills: &["User research", "Wireframing", "Prototyping", "Visual design"],
        outlook: "Strong growth with 23% projected increase by 2030",
    },
];

pub static SAMPLE_SCHOLARSHIPS: [ScholarshipSummary; 3] = [
    ScholarshipSummary {
        name: "Technology Leaders Scholarship",
        amount: "$5,000",
        deadline: "2025-06-15",
        eligibility: "Students pursuing degrees in computer science, engineering, or related fields",
    },
    ScholarshipSummary {
        name: "Women in STEM Scholarship",
        amount: "$7,500",
        deadline: "2025-05-30",
        eligibility: "Female students pursuing degrees in science, technology, engineering, or mathematics",
    },
    ScholarshipSummary {
        name: "Future Innovators Grant",
        amount: "$3,000",
        deadline: "2025-07-10",
        eligibility: "Students with demonstrated interest in innovation and entrepreneurship",
    },
];

pub static SAMPLE_INTERNSHIPS: [InternshipPosting; 3] = [
    InternshipPosting {
        company: "TechCorp",
        position: "Software Engineering Intern",
        location: "Remote",
        deadline: "2025-05-20",
    },
    InternshipPosting {
        company: "DataViz Inc.",
        position: "Data Analysis Intern",
        location: "New York, NY",
        deadline: "2025-06-01",
    },
    InternshipPosting {
        company: "DesignHub",
        position: "UX/UI Design Intern",
        location: "San Francisco, CA",
        deadline: "2025-05-15",
    },
];

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub recommendations: &'static [CareerMatch],
    pub scholarships: &'static [ScholarshipSummary],
    pub internships: &'static [InternshipPosting],
}

/// GET /api/v1/dashboard
pub async fn dashboard_handler() -> Json<DashboardResponse> {
    Json(DashboardResponse {
        recommendations: &SAMPLE_RECOMMENDATIONS,
        scholarships: &SAMPLE_SCHOLARSHIPS,
        internships: &SAMPLE_INTERNSHIPS,
    })
}
