//! Keyword-overlap relevance ranking over the static catalog.
//!
//! Queries are lowercased and split on whitespace; each record is scored
//! additively and the list is sorted by score, descending. The weights are a
//! fixed contract (clients and stored recommendations depend on the ordering):
//!
//! - careers: title word +5, description +3, each keyword +2, each skill +1
//! - education: name word +5, type word +4, description +3, each keyword +2,
//!   each listed career title +1
//! - scholarships: name word +5, description +3, eligibility +3, each field of
//!   study +2, each keyword +2
//!
//! Name/title/type hits require a whole word equal to a query term. Description,
//! eligibility, skill, career-title, and field hits are lowercased substring
//! checks. Keyword hits are bidirectional containment and case-sensitive on the
//! keyword side (terms arrive lowercased, so an all-caps keyword like "STEM"
//! only matches through the containment direction that ignores its casing).
//!
//! The sort is stable: records with equal scores keep their catalog order, and
//! an empty query (no terms, all scores zero) returns the catalog order
//! truncated to `limit`.

use super::records::{
    career_by_id, Career, EducationProgram, Scholarship, CAREERS, EDUCATION_PROGRAMS, SCHOLARSHIPS,
};

/// Default result count for the search endpoints.
pub const DEFAULT_SEARCH_LIMIT: usize = 3;
/// Default result count for career recommendations.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Scoring primitives
// ────────────────────────────────────────────────────────────────────────────

fn query_terms(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// True when any whitespace-separated word of `name` equals a query term.
fn name_word_hit(name: &str, terms: &[String]) -> bool {
    name.to_lowercase()
        .split_whitespace()
        .any(|word| terms.iter().any(|term| term == word))
}

/// True when `text` (lowercased) contains any query term as a substring.
fn substring_hit(text: &str, terms: &[String]) -> bool {
    let text = text.to_lowercase();
    terms.iter().any(|term| text.contains(term.as_str()))
}

/// Counts keywords matching any term by bidirectional containment.
/// Keywords are compared as stored, without lowercasing.
fn keyword_hits(keywords: &[&str], terms: &[String]) -> u32 {
    keywords
        .iter()
        .filter(|keyword| {
            terms
                .iter()
                .any(|term| keyword.contains(term.as_str()) || term.contains(**keyword))
        })
        .count() as u32
}

/// Counts list items whose lowercased text contains any query term.
fn listed_text_hits(items: &[&str], terms: &[String]) -> u32 {
    items
        .iter()
        .filter(|item| {
            let item = item.to_lowercase();
            terms.iter().any(|term| item.contains(term.as_str()))
        })
        .count() as u32
}

fn career_score(career: &Career, terms: &[String]) -> u32 {
    let mut score = 0;
    if name_word_hit(career.title, terms) {
        score += 5;
    }
    if substring_hit(career.description, terms) {
        score += 3;
    }
    score += 2 * keyword_hits(career.keywords, terms);
    score += listed_text_hits(career.skills, terms);
    score
}

fn education_score(program: &EducationProgram, terms: &[String]) -> u32 {
    let mut score = 0;
    if name_word_hit(program.name, terms) {
        score += 5;
    }
    if name_word_hit(program.program_type, terms) {
        score += 4;
    }
    if substring_hit(program.description, terms) {
        score += 3;
    }
    score += 2 * keyword_hits(program.keywords, terms);
    score += listed_text_hits(program.careers, terms);
    score
}

fn scholarship_score(scholarship: &Scholarship, terms: &[String]) -> u32 {
    let mut score = 0;
    if name_word_hit(scholarship.name, terms) {
        score += 5;
    }
    if substring_hit(scholarship.description, terms) {
        score += 3;
    }
    if substring_hit(scholarship.eligibility, terms) {
        score += 3;
    }
    score += 2 * listed_text_hits(scholarship.fields_of_study, terms);
    score += 2 * keyword_hits(scholarship.keywords, terms);
    score
}

/// Scores every record, sorts descending, and keeps the top `limit`.
/// `sort_by` is stable, so ties keep catalog order.
fn top_ranked<T: 'static>(
    records: impl IntoIterator<Item = &'static T>,
    score: impl Fn(&T) -> u32,
    limit: usize,
) -> Vec<&'static T> {
    let mut scored: Vec<(&'static T, u32)> = records.into_iter().map(|r| (r, score(r))).collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(record, _)| record).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Search operations
// ────────────────────────────────────────────────────────────────────────────

pub fn search_careers(query: &str, limit: usize) -> Vec<&'static Career> {
    let terms = query_terms(query);
    top_ranked(CAREERS.iter(), |career| career_score(career, &terms), limit)
}

pub fn search_education(query: &str, limit: usize) -> Vec<&'static EducationProgram> {
    let terms = query_terms(query);
    top_ranked(
        EDUCATION_PROGRAMS.iter(),
        |program| education_score(program, &terms),
        limit,
    )
}

pub fn search_scholarships(query: &str, limit: usize) -> Vec<&'static Scholarship> {
    let terms = query_terms(query);
    top_ranked(
        SCHOLARSHIPS.iter(),
        |scholarship| scholarship_score(scholarship, &terms),
        limit,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Derived operations
// ────────────────────────────────────────────────────────────────────────────

/// Ranks careers against the concatenation of a user's interests and skills.
pub fn recommend_careers(interests: &[String], skills: &[String], limit: usize) -> Vec<&'static Career> {
    let query = interests
        .iter()
        .chain(skills.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    search_careers(&query, limit)
}

/// Finds careers similar to the given one by searching with its own keywords
/// and skills. The seed career is always excluded from the results.
pub fn related_careers(career_id: &str, limit: usize) -> Vec<&'static Career> {
    let Some(career) = career_by_id(career_id) else {
        return Vec::new();
    };

    let query = career
        .keywords
        .iter()
        .chain(career.skills.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    // Fetch one extra so the seed can be dropped without shrinking the
    // result. `limit` comes straight from the query string, so the bump must
    // saturate rather than overflow.
    search_careers(&query, limit.saturating_add(1))
        .into_iter()
        .filter(|candidate| candidate.id != career_id)
        .take(limit)
        .collect()
}

/// Education programs whose listed career titles match the career's title,
/// by equality or substring containment in either direction.
pub fn education_for_career(career_id: &str) -> Vec<&'static EducationProgram> {
    let Some(career) = career_by_id(career_id) else {
        return Vec::new();
    };

    let title = career.title.to_lowercase();
    EDUCATION_PROGRAMS
        .iter()
        .filter(|program| {
            program.careers.iter().any(|listed| {
                let listed = listed.to_lowercase();
                listed.contains(&title) || title.contains(&listed)
            })
        })
        .collect()
}

/// Scholarships covering a field of study, matched by substring containment in
/// either direction.
pub fn scholarships_for_field(field: &str) -> Vec<&'static Scholarship> {
    let field = field.to_lowercase();
    SCHOLARSHIPS
        .iter()
        .filter(|scholarship| {
            scholarship.fields_of_study.iter().any(|listed| {
                let listed = listed.to_lowercase();
                listed.contains(&field) || field.contains(&listed)
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
