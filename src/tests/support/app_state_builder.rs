// src/tests/support/app_state_builder.rs
//
// Builds an AppState for route tests: every use case defaults to a
// panicking stub, tests override the one they exercise.

use actix_web::web;
use std::sync::Arc;

use crate::modules::certification::application::ports::CertificationUseCases;
use crate::modules::contact::application::ports::ContactUseCases;
use crate::modules::dashboard::application::ports::DashboardUseCases;
use crate::modules::education::application::ports::EducationUseCases;
use crate::modules::experience::application::ports::ExperienceUseCases;
use crate::modules::project::application::ports::ProjectUseCases;
use crate::modules::public_site::application::PublicSiteUseCases;
use crate::modules::skill::application::ports::SkillUseCases;
use crate::modules::technology::application::ports::TechnologyUseCases;
use crate::modules::testimonial::application::ports::TestimonialUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

#[derive(Default)]
pub struct TestAppStateBuilder {
    project: Option<Arc<dyn ProjectUseCases>>,
    technology: Option<Arc<dyn TechnologyUseCases>>,
    skill: Option<Arc<dyn SkillUseCases>>,
    experience: Option<Arc<dyn ExperienceUseCases>>,
    education: Option<Arc<dyn EducationUseCases>>,
    certification: Option<Arc<dyn CertificationUseCases>>,
    testimonial: Option<Arc<dyn TestimonialUseCases>>,
    contact: Option<Arc<dyn ContactUseCases>>,
    dashboard: Option<Arc<dyn DashboardUseCases>>,
    public_site: Option<Arc<dyn PublicSiteUseCases>>,
}

impl TestAppStateBuilder {
    pub fn with_project(mut self, use_cases: Arc<dyn ProjectUseCases>) -> Self {
        self.project = Some(use_cases);
        self
    }

    pub fn with_technology(mut self, use_cases: Arc<dyn TechnologyUseCases>) -> Self {
        self.technology = Some(use_cases);
        self
    }

    pub fn with_skill(mut self, use_cases: Arc<dyn SkillUseCases>) -> Self {
        self.skill = Some(use_cases);
        self
    }

    pub fn with_experience(mut self, use_cases: Arc<dyn ExperienceUseCases>) -> Self {
        self.experience = Some(use_cases);
        self
    }

    pub fn with_education(mut self, use_cases: Arc<dyn EducationUseCases>) -> Self {
        self.education = Some(use_cases);
        self
    }

    pub fn with_certification(mut self, use_cases: Arc<dyn CertificationUseCases>) -> Self {
        self.certification = Some(use_cases);
        self
    }

    pub fn with_testimonial(mut self, use_cases: Arc<dyn TestimonialUseCases>) -> Self {
        self.testimonial = Some(use_cases);
        self
    }

    pub fn with_contact(mut self, use_cases: Arc<dyn ContactUseCases>) -> Self {
        self.contact = Some(use_cases);
        self
    }

    pub fn with_dashboard(mut self, use_cases: Arc<dyn DashboardUseCases>) -> Self {
        self.dashboard = Some(use_cases);
        self
    }

    pub fn with_public_site(mut self, use_cases: Arc<dyn PublicSiteUseCases>) -> Self {
        self.public_site = Some(use_cases);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project.unwrap_or_else(|| Arc::new(StubProjectUseCases)),
            technology: self
                .technology
                .unwrap_or_else(|| Arc::new(StubTechnologyUseCases)),
            skill: self.skill.unwrap_or_else(|| Arc::new(StubSkillUseCases)),
            experience: self
                .experience
                .unwrap_or_else(|| Arc::new(StubExperienceUseCases)),
            education: self
                .education
                .unwrap_or_else(|| Arc::new(StubEducationUseCases)),
            certification: self
                .certification
                .unwrap_or_else(|| Arc::new(StubCertificationUseCases)),
            testimonial: self
                .testimonial
                .unwrap_or_else(|| Arc::new(StubTestimonialUseCases)),
            contact: self.contact.unwrap_or_else(|| Arc::new(StubContactUseCases)),
            dashboard: self
                .dashboard
                .unwrap_or_else(|| Arc::new(StubDashboardUseCases)),
            public_site: self
                .public_site
                .unwrap_or_else(|| Arc::new(StubPublicSiteUseCases)),
        })
    }
}
