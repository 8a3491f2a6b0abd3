use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

use crate::sections::Section;
use crate::variant::Variant;

pub static GLOBAL_PORTFOLIO_CACHE: LazyLock<DashMap<Variant, Arc<Portfolio>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub summary: String,
    /// Recipient of contact form drafts
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub time: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub time: String,
    #[serde(default)]
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HonorEntry {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub sections: Vec<Section>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub honors: Vec<HonorEntry>,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    Missing(String),
    #[error("Couldn't parse content file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{what} of {owner} is empty")]
    EmptySequence { what: &'static str, owner: String },
    #[error("Section {0:?} is listed more than once")]
    DuplicateSection(Section),
}

impl Portfolio {
    pub fn from_json(file: &str, data: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_slice(data).map_err(|source| ContentError::Parse {
                file: file.to_string(),
                source,
            })?;
        portfolio.validate(file)?;
        Ok(portfolio)
    }

    // every displayed sequence must be non-empty
    fn validate(&self, file: &str) -> Result<(), ContentError> {
        let non_empty = |len: usize, what: &'static str, owner: &str| {
            if len == 0 {
                Err(ContentError::EmptySequence {
                    what,
                    owner: owner.to_string(),
                })
            } else {
                Ok(())
            }
        };

        non_empty(self.sections.len(), "sections", file)?;
        for (i, section) in self.sections.iter().enumerate() {
            if self.sections[..i].contains(section) {
                return Err(ContentError::DuplicateSection(*section));
            }
        }
        for category in &self.skills {
            non_empty(category.skills.len(), "skills", &category.name)?;
        }
        for project in &self.projects {
            non_empty(project.bullets.len(), "bullets", &project.name)?;
        }
        for entry in &self.experience {
            non_empty(entry.bullets.len(), "bullets", &entry.role)?;
        }
        Ok(())
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

pub fn load_portfolio(variant: Variant) -> Result<Portfolio, ContentError> {
    let file = variant.content_file();
    let content = Assets::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    Portfolio::from_json(file, &content.data)
}

/// Parsed dataset for `variant`, cached for the lifetime of the process.
pub fn get_portfolio(variant: Variant) -> Result<Arc<Portfolio>, ContentError> {
    let cache = &*GLOBAL_PORTFOLIO_CACHE;
    if let Some(p) = cache.get(&variant) {
        return Ok(p.clone());
    }
    let portfolio = Arc::new(load_portfolio(variant).inspect_err(|e| {
        log::warn!("failed to load {variant:?} content: {e}");
    })?);
    cache.insert(variant, portfolio.clone());
    Ok(portfolio)
}
