//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{ExperienceId, ProfileId, ProjectId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{
    Experience, ExperienceFields, Profile, ProfileFields, Project, ProjectFields,
};
use crate::domain::repository::{ExperienceRepository, ProfileRepository, ProjectRepository};
use crate::domain::value_objects::StatusFilter;
use crate::error::{PortfolioError, PortfolioResult};

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgPortfolioRepository {
    pool: PgPool,
}

impl PgPortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn status_param(filter: StatusFilter) -> Option<&'static str> {
    filter.status().map(|s| s.as_str())
}

fn limit_param(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

// ============================================================================
// Project Repository Implementation
// ============================================================================

impl ProjectRepository for PgPortfolioRepository {
    async fn list(&self, filter: StatusFilter, limit: usize) -> PortfolioResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT
                id, title, description, long_description, tech_stack, tags,
                github_url, live_url, image_url, featured, status,
                created_at, updated_at
            FROM projects
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(status_param(filter))
        .bind(limit_param(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProjectRow::into_project).collect()
    }

    async fn find_by_id(&self, id: &ProjectId) -> PortfolioResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT
                id, title, description, long_description, tech_stack, tags,
                github_url, live_url, image_url, featured, status,
                created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProjectRow::into_project).transpose()
    }

    async fn create(&self, project: &Project) -> PortfolioResult<()> {
        let f = &project.fields;
        sqlx::query(
            r#"
            INSERT INTO projects (
                id, title, description, long_description, tech_stack, tags,
                github_url, live_url, image_url, featured, status,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(project.id.as_uuid())
        .bind(&f.title)
        .bind(&f.description)
        .bind(&f.long_description)
        .bind(&f.tech_stack)
        .bind(&f.tags)
        .bind(&f.github_url)
        .bind(&f.live_url)
        .bind(&f.image_url)
        .bind(f.featured)
        .bind(f.status.as_str())
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, project: &Project) -> PortfolioResult<bool> {
        let f = &project.fields;
        let updated = sqlx::query(
            r#"
            UPDATE projects SET
                title = $2,
                description = $3,
                long_description = $4,
                tech_stack = $5,
                tags = $6,
                github_url = $7,
                live_url = $8,
                image_url = $9,
                featured = $10,
                status = $11,
                updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(project.id.as_uuid())
        .bind(&f.title)
        .bind(&f.description)
        .bind(&f.long_description)
        .bind(&f.tech_stack)
        .bind(&f.tags)
        .bind(&f.github_url)
        .bind(&f.live_url)
        .bind(&f.image_url)
        .bind(f.featured)
        .bind(f.status.as_str())
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 1)
    }

    async fn delete(&self, id: &ProjectId) -> PortfolioResult<bool> {
        let deleted = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted == 1)
    }
}

// ============================================================================
// Experience Repository Implementation
// ============================================================================

impl ExperienceRepository for PgPortfolioRepository {
    async fn list(&self, filter: StatusFilter, limit: usize) -> PortfolioResult<Vec<Experience>> {
        let rows = sqlx::query_as::<_, ExperienceRow>(
            r#"
            SELECT
                id, title, company, kind, description, responsibilities, skills,
                start_date, end_date, is_current, logo_url, status,
                created_at, updated_at
            FROM experiences
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY start_date DESC
            LIMIT $2
            "#,
        )
        .bind(status_param(filter))
        .bind(limit_param(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ExperienceRow::into_experience).collect()
    }

    async fn find_by_id(&self, id: &ExperienceId) -> PortfolioResult<Option<Experience>> {
        let row = sqlx::query_as::<_, ExperienceRow>(
            r#"
            SELECT
                id, title, company, kind, description, responsibilities, skills,
                start_date, end_date, is_current, logo_url, status,
                created_at, updated_at
            FROM experiences
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ExperienceRow::into_experience).transpose()
    }

    async fn create(&self, experience: &Experience) -> PortfolioResult<()> {
        let f = &experience.fields;
        sqlx::query(
            r#"
            INSERT INTO experiences (
                id, title, company, kind, description, responsibilities, skills,
                start_date, end_date, is_current, logo_url, status,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(experience.id.as_uuid())
        .bind(&f.title)
        .bind(&f.company)
        .bind(f.kind.as_str())
        .bind(&f.description)
        .bind(&f.responsibilities)
        .bind(&f.skills)
        .bind(&f.start_date)
        .bind(&f.end_date)
        .bind(f.current)
        .bind(&f.logo_url)
        .bind(f.status.as_str())
        .bind(experience.created_at)
        .bind(experience.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, experience: &Experience) -> PortfolioResult<bool> {
        let f = &experience.fields;
        let updated = sqlx::query(
            r#"
            UPDATE experiences SET
                title = $2,
                company = $3,
                kind = $4,
                description = $5,
                responsibilities = $6,
                skills = $7,
                start_date = $8,
                end_date = $9,
                is_current = $10,
                logo_url = $11,
                status = $12,
                updated_at = $13
            WHERE id = $1
            "#,
        )
        .bind(experience.id.as_uuid())
        .bind(&f.title)
        .bind(&f.company)
        .bind(f.kind.as_str())
        .bind(&f.description)
        .bind(&f.responsibilities)
        .bind(&f.skills)
        .bind(&f.start_date)
        .bind(&f.end_date)
        .bind(f.current)
        .bind(&f.logo_url)
        .bind(f.status.as_str())
        .bind(experience.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 1)
    }

    async fn delete(&self, id: &ExperienceId) -> PortfolioResult<bool> {
        let deleted = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted == 1)
    }
}

// ============================================================================
// Profile Repository Implementation
// ============================================================================

impl ProfileRepository for PgPortfolioRepository {
    async fn find(&self) -> PortfolioResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                id, name, title, bio, email, phone, location, avatar_url,
                resume_url, github, linkedin, twitter, website, skills, updated_at
            FROM profiles
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn save(&self, profile: &Profile) -> PortfolioResult<Profile> {
        let f = &profile.fields;
        // conflict target is the singleton column, not the id
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (
                id, name, title, bio, email, phone, location, avatar_url,
                resume_url, github, linkedin, twitter, website, skills, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (singleton) DO UPDATE SET
                name = EXCLUDED.name,
                title = EXCLUDED.title,
                bio = EXCLUDED.bio,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                location = EXCLUDED.location,
                avatar_url = EXCLUDED.avatar_url,
                resume_url = EXCLUDED.resume_url,
                github = EXCLUDED.github,
                linkedin = EXCLUDED.linkedin,
                twitter = EXCLUDED.twitter,
                website = EXCLUDED.website,
                skills = EXCLUDED.skills,
                updated_at = EXCLUDED.updated_at
            RETURNING
                id, name, title, bio, email, phone, location, avatar_url,
                resume_url, github, linkedin, twitter, website, skills, updated_at
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(&f.name)
        .bind(&f.title)
        .bind(&f.bio)
        .bind(&f.email)
        .bind(&f.phone)
        .bind(&f.location)
        .bind(&f.avatar_url)
        .bind(&f.resume_url)
        .bind(&f.github)
        .bind(&f.linkedin)
        .bind(&f.twitter)
        .bind(&f.website)
        .bind(&f.skills)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_profile())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    title: String,
    description: String,
    long_description: Option<String>,
    tech_stack: Vec<String>,
    tags: Vec<String>,
    github_url: Option<String>,
    live_url: Option<String>,
    image_url: Option<String>,
    featured: bool,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectRow {
    fn into_project(self) -> PortfolioResult<Project> {
        let status = self
            .status
            .parse()
            .map_err(|_| PortfolioError::Internal(format!("Invalid project status: {}", self.status)))?;

        Ok(Project {
            id: ProjectId::from_uuid(self.id),
            fields: ProjectFields {
                title: self.title,
                description: self.description,
                long_description: self.long_description,
                tech_stack: self.tech_stack,
                tags: self.tags,
                github_url: self.github_url,
                live_url: self.live_url,
                image_url: self.image_url,
                featured: self.featured,
                status,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ExperienceRow {
    id: Uuid,
    title: String,
    company: String,
    kind: String,
    description: String,
    responsibilities: Vec<String>,
    skills: Vec<String>,
    start_date: String,
    end_date: Option<String>,
    is_current: bool,
    logo_url: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ExperienceRow {
    fn into_experience(self) -> PortfolioResult<Experience> {
        let kind = self
            .kind
            .parse()
            .map_err(|_| PortfolioError::Internal(format!("Invalid experience type: {}", self.kind)))?;
        let status = self.status.parse().map_err(|_| {
            PortfolioError::Internal(format!("Invalid experience status: {}", self.status))
        })?;

        Ok(Experience {
            id: ExperienceId::from_uuid(self.id),
            fields: ExperienceFields {
                title: self.title,
                company: self.company,
                kind,
                description: self.description,
                responsibilities: self.responsibilities,
                skills: self.skills,
                start_date: self.start_date,
                end_date: self.end_date,
                current: self.is_current,
                logo_url: self.logo_url,
                status,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    name: String,
    title: String,
    bio: String,
    email: String,
    phone: Option<String>,
    location: Option<String>,
    avatar_url: Option<String>,
    resume_url: Option<String>,
    github: Option<String>,
    linkedin: Option<String>,
    twitter: Option<String>,
    website: Option<String>,
    skills: Vec<String>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            id: ProfileId::from_uuid(self.id),
            fields: ProfileFields {
                name: self.name,
                title: self.title,
                bio: self.bio,
                email: self.email,
                phone: self.phone,
                location: self.location,
                avatar_url: self.avatar_url,
                resume_url: self.resume_url,
                github: self.github,
                linkedin: self.linkedin,
                twitter: self.twitter,
                website: self.website,
                skills: self.skills,
            },
            updated_at: self.updated_at,
        }
    }
}
