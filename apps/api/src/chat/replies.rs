// Canned reply text for the rule-based chat responder.
// These strings are a compatibility surface: existing clients snapshot-test
// against them, so edits here are breaking changes.

use crate::catalog::records::Career;

/// Reply for "help"-style queries.
pub const HELP: &str = r#"I can help you with:

1. Exploring career options based on your interests and skills
2. Understanding educational requirements for specific careers
3. Learning about job market trends and salary expectations
4. Finding information about scholarships and financial aid
5. Discovering internship and early career opportunities

Just let me know what you're interested in!"#;

/// Reply for interest-discovery queries.
pub const INTERESTS: &str = r#"Based on your interests, I can suggest some career paths to explore. To provide better recommendations, could you tell me more specifically:

- What subjects do you enjoy studying?
- What activities do you find engaging?
- Do you prefer working with people, data, things, or ideas?
- Are there any industries you're particularly curious about?

The more details you share, the better I can match you with suitable career options."#;

/// Reply for skill-discovery queries.
pub const SKILLS: &str = r#"Your skills are key to finding the right career fit. Some common skill categories include:

- Technical skills (programming, design, writing, etc.)
- Analytical skills (problem-solving, research, data analysis)
- People skills (communication, leadership, teamwork)
- Creative skills (innovation, artistic abilities)

Which of these resonate with you? Or do you have specific skills you'd like to leverage in your career?"#;

/// Reply for education-pathway queries.
pub const EDUCATION: &str = r#"Educational pathways vary widely depending on your career goals. Some careers require specific degrees, while others value skills and experience more.

Would you like information about:
- Degree programs for specific careers
- Alternative education options (certificates, bootcamps)
- Online learning resources
- Continuing education requirements

Let me know which aspect of education you're interested in exploring."#;

/// Clarifying reply when no trigger matches.
pub const DEFAULT: &str = r#"I'd be happy to help you explore career options. To provide better guidance, could you tell me more about:

- Your interests and passions
- Subjects or activities you enjoy
- Skills you have or would like to develop
- Any specific industries you're curious about

This will help me suggest careers that might be a good fit for you."#;

/// Greeting seeded into a fresh session. Personalized when a (non-blank)
/// user name is known.
pub fn initial_greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!(
            "Hi {name}! I'm your AI career guidance assistant. I can help you explore career \
            options based on your interests and skills. How can I assist you today?"
        ),
        None => "Hi there! I'm your AI career guidance assistant. I can help you explore career \
            options, understand educational requirements, and provide insights on job prospects. \
            How can I assist you today?"
            .to_string(),
    }
}

/// Renders a career record as the structured markdown blurb the responder
/// returns for career-specific triggers.
///
/// Layout quirk kept for compatibility: the "Education Required" header has a
/// trailing space before its newline.
pub fn career_overview(career: &Career) -> String {
    format!(
        "Based on your interest, here's information about becoming a {title}:\n\n\
         **Description:** {description}\n\n\
         **Education Required:** \n{education}\n\n\
         **Key Skills:**\n{skills}\n\n\
         **Salary Range:** {salary}\n\n\
         **Job Outlook:** {outlook}\n\n\
         **Entry Paths:**\n{entry_paths}\n\n\
         **Possible Specializations:**\n{specializations}\n\n\
         Would you like to know more about educational pathways, required skills, or related careers?",
        title = career.title,
        description = career.description,
        education = bullet_list(career.education),
        skills = bullet_list(career.skills),
        salary = career.salary,
        outlook = career.outlook,
        entry_paths = bullet_list(career.entry_paths),
        specializations = bullet_list(career.specializations),
    )
}

fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
