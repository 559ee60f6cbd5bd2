//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case to match the public site's client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Experience, ExperienceFields, Profile, ProfileFields, Project, ProjectFields,
};
use crate::domain::value_objects::{PublicationStatus, StatusFilter};
use crate::error::{PortfolioError, PortfolioResult};

fn parse_status(raw: Option<String>) -> PortfolioResult<PublicationStatus> {
    raw.as_deref()
        .map(str::parse)
        .transpose()
        .map(Option::unwrap_or_default)
}

// ============================================================================
// Queries
// ============================================================================

/// `?status=draft|published|all`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

impl StatusQuery {
    pub fn filter(&self) -> PortfolioResult<StatusFilter> {
        StatusFilter::from_query(self.status.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Project
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: Option<String>,
}

impl TryFrom<ProjectRequest> for ProjectFields {
    type Error = PortfolioError;

    fn try_from(req: ProjectRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_status(req.status)?,
            title: req.title,
            description: req.description,
            long_description: req.long_description,
            tech_stack: req.tech_stack,
            tags: req.tags,
            github_url: req.github_url,
            live_url: req.live_url,
            image_url: req.image_url,
            featured: req.featured,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub tech_stack: Vec<String>,
    pub tags: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        let f = project.fields;
        Self {
            id: project.id.to_string(),
            title: f.title,
            description: f.description,
            long_description: f.long_description,
            tech_stack: f.tech_stack,
            tags: f.tags,
            github_url: f.github_url,
            live_url: f.live_url,
            image_url: f.image_url,
            featured: f.featured,
            status: f.status.to_string(),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

// ============================================================================
// Experience
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceRequest {
    pub title: String,
    pub company: String,
    /// job, internship or freelance
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TryFrom<ExperienceRequest> for ExperienceFields {
    type Error = PortfolioError;

    fn try_from(req: ExperienceRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: req.kind.parse()?,
            status: parse_status(req.status)?,
            title: req.title,
            company: req.company,
            description: req.description,
            responsibilities: req.responsibilities,
            skills: req.skills,
            start_date: req.start_date,
            end_date: req.end_date,
            current: req.current,
            logo_url: req.logo_url,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub logo_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Experience> for ExperienceResponse {
    fn from(experience: Experience) -> Self {
        let f = experience.fields;
        Self {
            id: experience.id.to_string(),
            title: f.title,
            company: f.company,
            kind: f.kind.to_string(),
            description: f.description,
            responsibilities: f.responsibilities,
            skills: f.skills,
            start_date: f.start_date,
            end_date: f.end_date,
            current: f.current,
            logo_url: f.logo_url,
            status: f.status.to_string(),
            created_at: experience.created_at,
            updated_at: experience.updated_at,
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl From<ProfileRequest> for ProfileFields {
    fn from(req: ProfileRequest) -> Self {
        Self {
            name: req.name,
            title: req.title,
            bio: req.bio,
            email: req.email,
            phone: req.phone,
            location: req.location,
            avatar_url: req.avatar_url,
            resume_url: req.resume_url,
            github: req.github,
            linkedin: req.linkedin,
            twitter: req.twitter,
            website: req.website,
            skills: req.skills,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
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
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let f = profile.fields;
        Self {
            id: profile.id.to_string(),
            name: f.name,
            title: f.title,
            bio: f.bio,
            email: f.email,
            phone: f.phone,
            location: f.location,
            avatar_url: f.avatar_url,
            resume_url: f.resume_url,
            github: f.github,
            linkedin: f.linkedin,
            twitter: f.twitter,
            website: f.website,
            skills: f.skills,
            updated_at: profile.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ExperienceKind;

    #[test]
    fn test_project_request_defaults() {
        let req: ProjectRequest =
            serde_json::from_str(r#"{"title":"Site","description":"My site"}"#).unwrap();
        let fields = ProjectFields::try_from(req).unwrap();

        assert_eq!(fields.status, PublicationStatus::Published);
        assert!(!fields.featured);
        assert!(fields.tech_stack.is_empty());
    }

    #[test]
    fn test_project_request_rejects_unknown_status() {
        let req: ProjectRequest = serde_json::from_str(
            r#"{"title":"Site","description":"My site","status":"archived"}"#,
        )
        .unwrap();
        assert!(matches!(
            ProjectFields::try_from(req),
            Err(PortfolioError::Validation(_))
        ));
    }

    #[test]
    fn test_experience_type_field() {
        let req: ExperienceRequest = serde_json::from_str(
            r#"{"title":"Intern","company":"Acme","type":"internship",
                "description":"Did things","start_date":"2022-06"}"#,
        )
        .unwrap();
        let fields = ExperienceFields::try_from(req).unwrap();
        assert_eq!(fields.kind, ExperienceKind::Internship);

        let json = serde_json::to_value(ExperienceResponse::from(Experience::new(fields))).unwrap();
        assert_eq!(json["type"], "internship");
        assert_eq!(json["status"], "published");
    }

    #[test]
    fn test_status_query_filter() {
        let query = StatusQuery::default();
        assert_eq!(query.filter().unwrap(), StatusFilter::default());

        let query = StatusQuery {
            status: Some("all".to_string()),
        };
        assert_eq!(query.filter().unwrap(), StatusFilter::All);
    }
}
