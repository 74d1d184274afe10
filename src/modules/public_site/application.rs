// src/modules/public_site/application.rs
//
// Read-only composites for the public pages. Everything here is a
// projection over the resource use cases; no state of its own.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::modules::certification::application::ports::{
    CertificationResult, CertificationStatusFilter, CertificationUseCases,
};
use crate::modules::education::application::ports::{EducationResult, EducationUseCases};
use crate::modules::experience::application::ports::{ExperienceResult, ExperienceUseCases};
use crate::modules::project::application::ports::{ProjectCardView, ProjectUseCases};
use crate::modules::skill::application::ports::{SkillCategoryGroup, SkillUseCases};
use crate::modules::technology::application::ports::{TechnologyResult, TechnologyUseCases};
use crate::modules::testimonial::application::ports::{TestimonialResult, TestimonialUseCases};

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub featured_projects: Vec<ProjectCardView>,
    pub featured_technologies: Vec<TechnologyResult>,
    pub highlighted_skills: Vec<SkillCategoryGroup>,
    pub featured_testimonials: Vec<TestimonialResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub experiences: Vec<ExperienceResult>,
    pub educations: Vec<EducationResult>,
    pub certifications: Vec<CertificationResult>,
    pub years_of_experience: u32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PublicSiteError {
    #[error("Upstream error: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait PublicSiteUseCases: Send + Sync {
    async fn home(&self) -> Result<HomePage, PublicSiteError>;
    async fn about(&self) -> Result<AboutPage, PublicSiteError>;
}

/// Whole years between the earliest recorded start date and today.
pub fn years_of_experience(today: NaiveDate, earliest_start: Option<NaiveDate>) -> u32 {
    earliest_start
        .and_then(|start| today.years_since(start))
        .unwrap_or(0)
}

pub struct PublicSiteService {
    project: Arc<dyn ProjectUseCases>,
    technology: Arc<dyn TechnologyUseCases>,
    skill: Arc<dyn SkillUseCases>,
    testimonial: Arc<dyn TestimonialUseCases>,
    experience: Arc<dyn ExperienceUseCases>,
    education: Arc<dyn EducationUseCases>,
    certification: Arc<dyn CertificationUseCases>,
}

impl PublicSiteService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project: Arc<dyn ProjectUseCases>,
        technology: Arc<dyn TechnologyUseCases>,
        skill: Arc<dyn SkillUseCases>,
        testimonial: Arc<dyn TestimonialUseCases>,
        experience: Arc<dyn ExperienceUseCases>,
        education: Arc<dyn EducationUseCases>,
        certification: Arc<dyn CertificationUseCases>,
    ) -> Self {
        Self {
            project,
            technology,
            skill,
            testimonial,
            experience,
            education,
            certification,
        }
    }
}

fn upstream<E: std::fmt::Display>(e: E) -> PublicSiteError {
    PublicSiteError::Upstream(e.to_string())
}

#[async_trait]
impl PublicSiteUseCases for PublicSiteService {
    async fn home(&self) -> Result<HomePage, PublicSiteError> {
        let featured_projects = self
            .project
            .list_featured_published()
            .await
            .map_err(upstream)?;

        let featured_technologies = self.technology.list_featured().await.map_err(upstream)?;

        let highlighted_skills: Vec<SkillCategoryGroup> = self
            .skill
            .grouped_by_category()
            .await
            .map_err(upstream)?
            .into_iter()
            .filter_map(|group| {
                let skills: Vec<_> = group
                    .skills
                    .into_iter()
                    .filter(|s| s.is_highlighted)
                    .collect();
                if skills.is_empty() {
                    None
                } else {
                    Some(SkillCategoryGroup {
                        category: group.category,
                        skills,
                    })
                }
            })
            .collect();

        let featured_testimonials: Vec<TestimonialResult> = self
            .testimonial
            .list_published()
            .await
            .map_err(upstream)?
            .into_iter()
            .filter(|t| t.is_featured)
            .collect();

        Ok(HomePage {
            featured_projects,
            featured_technologies,
            highlighted_skills,
            featured_testimonials,
        })
    }

    async fn about(&self) -> Result<AboutPage, PublicSiteError> {
        let experiences = self.experience.list().await.map_err(upstream)?;
        let educations = self.education.list().await.map_err(upstream)?;
        let certifications = self
            .certification
            .list(CertificationStatusFilter::All)
            .await
            .map_err(upstream)?;

        let earliest_start = experiences.iter().map(|e| e.start_date).min();
        let years = years_of_experience(Utc::now().date_naive(), earliest_start);

        Ok(AboutPage {
            experiences,
            educations,
            certifications,
            years_of_experience: years,
        })
    }
}
