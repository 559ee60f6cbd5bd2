//! Value Objects

use std::fmt;
use std::str::FromStr;

use crate::error::{PortfolioError, PortfolioResult};

/// Whether an item is visible on the public site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PublicationStatus {
    Draft,
    #[default]
    Published,
}

impl PublicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationStatus::Draft => "draft",
            PublicationStatus::Published => "published",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationStatus {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PublicationStatus::Draft),
            "published" => Ok(PublicationStatus::Published),
            other => Err(PortfolioError::Validation(format!(
                "Invalid status '{}': expected draft or published",
                other
            ))),
        }
    }
}

/// Kind of engagement for an experience entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceKind {
    Job,
    Internship,
    Freelance,
}

impl ExperienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceKind::Job => "job",
            ExperienceKind::Internship => "internship",
            ExperienceKind::Freelance => "freelance",
        }
    }
}

impl fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceKind {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job" => Ok(ExperienceKind::Job),
            "internship" => Ok(ExperienceKind::Internship),
            "freelance" => Ok(ExperienceKind::Freelance),
            other => Err(PortfolioError::Validation(format!(
                "Invalid type '{}': expected job, internship or freelance",
                other
            ))),
        }
    }
}

/// Status filter for list queries
///
/// An absent query parameter means published only; `all` or an empty value
/// disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Only(PublicationStatus),
    All,
}

impl StatusFilter {
    pub fn from_query(raw: Option<&str>) -> PortfolioResult<Self> {
        match raw {
            None => Ok(StatusFilter::Only(PublicationStatus::Published)),
            Some("") | Some("all") => Ok(StatusFilter::All),
            Some(status) => status.parse().map(StatusFilter::Only),
        }
    }

    pub fn matches(&self, status: PublicationStatus) -> bool {
        match self {
            StatusFilter::Only(wanted) => *wanted == status,
            StatusFilter::All => true,
        }
    }

    /// Status to bind in SQL, `None` for no filter
    pub fn status(&self) -> Option<PublicationStatus> {
        match self {
            StatusFilter::Only(status) => Some(*status),
            StatusFilter::All => None,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::Only(PublicationStatus::Published)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_status_parse() {
        assert_eq!("draft".parse::<PublicationStatus>().unwrap(), PublicationStatus::Draft);
        assert_eq!(
            "published".parse::<PublicationStatus>().unwrap(),
            PublicationStatus::Published
        );
        assert!("Published".parse::<PublicationStatus>().is_err());
        assert_eq!(PublicationStatus::default(), PublicationStatus::Published);
    }

    #[test]
    fn test_experience_kind_parse() {
        for kind in [ExperienceKind::Job, ExperienceKind::Internship, ExperienceKind::Freelance] {
            assert_eq!(kind.as_str().parse::<ExperienceKind>().unwrap(), kind);
        }
        assert!("contract".parse::<ExperienceKind>().is_err());
    }

    #[test]
    fn test_status_filter_from_query() {
        assert_eq!(
            StatusFilter::from_query(None).unwrap(),
            StatusFilter::Only(PublicationStatus::Published)
        );
        assert_eq!(StatusFilter::from_query(Some("all")).unwrap(), StatusFilter::All);
        assert_eq!(StatusFilter::from_query(Some("")).unwrap(), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_query(Some("draft")).unwrap(),
            StatusFilter::Only(PublicationStatus::Draft)
        );
        assert!(matches!(
            StatusFilter::from_query(Some("archived")),
            Err(PortfolioError::Validation(_))
        ));
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(PublicationStatus::Draft));
        assert!(!StatusFilter::default().matches(PublicationStatus::Draft));
        assert!(StatusFilter::default().matches(PublicationStatus::Published));
    }
}
