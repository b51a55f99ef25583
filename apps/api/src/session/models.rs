//! Session-domain models: chat transcript messages and the user profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::replies::initial_greeting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// One transcript entry. Timestamps round-trip through the persisted JSON
/// documents, so `Message` equality includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationBackground {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub graduation_year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerGoals {
    #[serde(default)]
    pub short_term: String,
    #[serde(default)]
    pub long_term: String,
    #[serde(default)]
    pub preferred_work_environment: String,
    #[serde(default)]
    pub salary_expectations: String,
}

/// Profile data gathered across a session. Everything defaults to empty;
/// `profile_complete` is derived, never set directly by clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: EducationBackground,
    #[serde(default)]
    pub goals: CareerGoals,
    #[serde(default)]
    pub profile_complete: bool,
}

impl UserProfile {
    /// A profile is complete when it can meaningfully personalize guidance:
    /// name, email, and education level set, and at least one interest and
    /// one skill.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.interests.is_empty()
            && !self.skills.is_empty()
            && !self.education.level.is_empty()
    }

    pub fn refresh_completeness(&mut self) {
        self.profile_complete = self.is_complete();
    }

    /// Renders the profile as the bracketed context line injected into LLM
    /// conversations. The format is fixed; clients and prompt tuning depend
    /// on it.
    pub fn context_message(&self) -> String {
        format!(
            "[User Profile Context: Name: {}, Interests: {}, Skills: {}, Education Level: {}, \
             Field of Study: {}, Career Goals: {}]",
            self.name,
            self.interests.join(", "),
            self.skills.join(", "),
            self.education.level,
            or_not_specified(&self.education.field),
            or_not_specified(&self.goals.short_term),
        )
    }
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        "Not specified"
    } else {
        value
    }
}

/// A partial profile update. Present fields replace the stored values
/// wholesale (including the nested education and goals objects); absent
/// fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub location: Option<String>,
    pub interests: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub education: Option<EducationBackground>,
    pub goals: Option<CareerGoals>,
    /// Acknowledged in logs only. Resume contents are never accepted or
    /// stored; see the profile handler.
    pub resume_file_name: Option<String>,
}

impl ProfileUpdate {
    pub fn apply(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(location) = self.location {
            profile.location = location;
        }
        if let Some(interests) = self.interests {
            profile.interests = interests;
        }
        if let Some(skills) = self.skills {
            profile.skills = skills;
        }
        if let Some(education) = self.education {
            profile.education = education;
        }
        if let Some(goals) = self.goals {
            profile.goals = goals;
        }
        profile.refresh_completeness();
    }
}

/// A chat session: transcript plus profile, persisted as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub messages: Vec<Message>,
    pub profile: UserProfile,
}

impl Session {
    /// Creates a session seeded with the assistant greeting. A known (non-empty)
    /// name both pre-fills the profile and personalizes the greeting.
    pub fn new(name: Option<String>) -> Self {
        let mut profile = UserProfile::default();
        if let Some(name) = name {
            profile.name = name;
        }
        let mut session = Session {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            profile,
        };
        session.reset_messages();
        session
    }

    /// Replaces the transcript with a fresh greeting. The profile is kept.
    pub fn reset_messages(&mut self) {
        let name = (!self.profile.name.is_empty()).then_some(self.profile.name.as_str());
        self.messages = vec![Message::new(MessageRole::Assistant, initial_greeting(name))];
    }
}
