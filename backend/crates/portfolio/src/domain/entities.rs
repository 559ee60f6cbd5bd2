//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{ExperienceId, ProfileId, ProjectId};

use crate::domain::value_objects::{ExperienceKind, PublicationStatus};
use crate::error::{PortfolioError, PortfolioResult};

/// Reject empty or whitespace-only required text
fn require_text(field: &str, value: &str) -> PortfolioResult<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::Validation(format!(
            "{} must not be blank",
            field
        )));
    }
    Ok(())
}

// ============================================================================
// Project
// ============================================================================

/// Editable project content
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub tech_stack: Vec<String>,
    pub tags: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub status: PublicationStatus,
}

impl ProjectFields {
    pub fn validate(&self) -> PortfolioResult<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub fields: ProjectFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(fields: ProjectFields) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all content, keeping identity and creation time
    pub fn replace(&mut self, fields: ProjectFields) {
        self.fields = fields;
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Experience
// ============================================================================

/// Editable experience content
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceFields {
    pub title: String,
    pub company: String,
    pub kind: ExperienceKind,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    /// Free-form date text (e.g. `2023-06`), sorted lexically
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub logo_url: Option<String>,
    pub status: PublicationStatus,
}

impl ExperienceFields {
    pub fn validate(&self) -> PortfolioResult<()> {
        require_text("title", &self.title)?;
        require_text("company", &self.company)?;
        require_text("description", &self.description)?;
        require_text("start_date", &self.start_date)
    }
}

#[derive(Debug, Clone)]
pub struct Experience {
    pub id: ExperienceId,
    pub fields: ExperienceFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    pub fn new(fields: ExperienceFields) -> Self {
        let now = Utc::now();
        Self {
            id: ExperienceId::new(),
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn replace(&mut self, fields: ExperienceFields) {
        self.fields = fields;
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Editable profile content
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub skills: Vec<String>,
}

impl ProfileFields {
    pub fn validate(&self) -> PortfolioResult<()> {
        require_text("name", &self.name)?;
        require_text("title", &self.title)?;
        require_text("bio", &self.bio)?;
        require_text("email", &self.email)
    }
}

/// The site owner's profile. At most one exists.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub fields: ProfileFields,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(fields: ProfileFields) -> Self {
        Self {
            id: ProfileId::new(),
            fields,
            updated_at: Utc::now(),
        }
    }

    pub fn replace(&mut self, fields: ProfileFields) {
        self.fields = fields;
        self.updated_at = Utc::now();
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_project_validation() {
        assert!(project("Site", PublicationStatus::Published).validate().is_ok());

        let mut fields = project("Site", PublicationStatus::Published);
        fields.title = "   ".to_string();
        assert!(matches!(fields.validate(), Err(PortfolioError::Validation(_))));
    }

    #[test]
    fn test_experience_validation_requires_start_date() {
        let fields = experience("Engineer", "", PublicationStatus::Published);
        assert!(matches!(fields.validate(), Err(PortfolioError::Validation(msg)) if msg.contains("start_date")));
    }

    #[test]
    fn test_profile_validation() {
        assert!(profile("Jane").validate().is_ok());
        let mut fields = profile("Jane");
        fields.email = String::new();
        assert!(fields.validate().is_err());
    }

    #[test]
    fn test_project_replace_keeps_identity() {
        let mut project = Project::new(project("Old", PublicationStatus::Draft));
        let (id, created_at) = (project.id, project.created_at);

        project.replace(super::fixtures::project("New", PublicationStatus::Published));

        assert_eq!(project.id, id);
        assert_eq!(project.created_at, created_at);
        assert_eq!(project.fields.title, "New");
        assert!(project.updated_at >= created_at);
    }
}
