// src/tests/support/stubs.rs
//
// Default use-case stubs for TestAppStateBuilder. Every method panics;
// a test overrides exactly the use case it exercises.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::ports::{
    CertificationError, CertificationResult, CertificationStatusFilter, CertificationUseCases,
    CreateCertificationInput, PatchCertificationInput,
};
use crate::modules::contact::application::ports::{
    ContactError, ContactMessageResult, ContactStatus, ContactUseCases, CreateContactMessageData,
};
use crate::modules::dashboard::application::ports::{
    DashboardError, DashboardSummary, DashboardUseCases,
};
use crate::modules::education::application::ports::{
    CreateEducationInput, EducationError, EducationResult, EducationUseCases, PatchEducationInput,
};
use crate::modules::experience::application::ports::{
    CreateExperienceInput, ExperienceError, ExperienceResult, ExperienceUseCases,
    PatchExperienceInput,
};
use crate::modules::project::application::ports::{
    CreateProjectInput, PatchProjectInput, ProjectCardView, ProjectError, ProjectListFilter,
    ProjectSort, ProjectUseCases, ProjectView,
};
use crate::modules::public_site::application::{
    AboutPage, HomePage, PublicSiteError, PublicSiteUseCases,
};
use crate::modules::skill::application::ports::{
    CreateSkillData, PatchSkillData, SkillCategoryGroup, SkillError, SkillListFilter, SkillResult,
    SkillUseCases,
};
use crate::modules::technology::application::ports::{
    CreateTechnologyInput, PatchTechnologyData, TechnologyError, TechnologyListFilter,
    TechnologyResult, TechnologyUseCases,
};
use crate::modules::testimonial::application::ports::{
    CreateTestimonialInput, PatchTestimonialInput, TestimonialError, TestimonialListFilter,
    TestimonialResult, TestimonialUseCases,
};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::page::{PageRequest, PageResult};

pub struct StubExperienceUseCases;

#[async_trait]
impl ExperienceUseCases for StubExperienceUseCases {
    async fn list(&self) -> Result<Vec<ExperienceResult>, ExperienceError> {
        unimplemented!("stubbed experience use case")
    }
    async fn get(&self, _id: Uuid) -> Result<ExperienceResult, ExperienceError> {
        unimplemented!("stubbed experience use case")
    }
    async fn create(
        &self,
        _input: CreateExperienceInput,
    ) -> Result<ExperienceResult, ExperienceError> {
        unimplemented!("stubbed experience use case")
    }
    async fn patch(
        &self,
        _id: Uuid,
        _input: PatchExperienceInput,
    ) -> Result<ExperienceResult, ExperienceError> {
        unimplemented!("stubbed experience use case")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), ExperienceError> {
        unimplemented!("stubbed experience use case")
    }
    async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), ExperienceError> {
        unimplemented!("stubbed experience use case")
    }
}

pub struct StubEducationUseCases;

#[async_trait]
impl EducationUseCases for StubEducationUseCases {
    async fn list(&self) -> Result<Vec<EducationResult>, EducationError> {
        unimplemented!("stubbed education use case")
    }
    async fn get(&self, _id: Uuid) -> Result<EducationResult, EducationError> {
        unimplemented!("stubbed education use case")
    }
    async fn create(
        &self,
        _input: CreateEducationInput,
    ) -> Result<EducationResult, EducationError> {
        unimplemented!("stubbed education use case")
    }
    async fn patch(
        &self,
        _id: Uuid,
        _input: PatchEducationInput,
    ) -> Result<EducationResult, EducationError> {
        unimplemented!("stubbed education use case")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), EducationError> {
        unimplemented!("stubbed education use case")
    }
    async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), EducationError> {
        unimplemented!("stubbed education use case")
    }
}

pub struct StubCertificationUseCases;

#[async_trait]
impl CertificationUseCases for StubCertificationUseCases {
    async fn list(
        &self,
        _filter: CertificationStatusFilter,
    ) -> Result<Vec<CertificationResult>, CertificationError> {
        unimplemented!("stubbed certification use case")
    }
    async fn get(&self, _id: Uuid) -> Result<CertificationResult, CertificationError> {
        unimplemented!("stubbed certification use case")
    }
    async fn create(
        &self,
        _input: CreateCertificationInput,
    ) -> Result<CertificationResult, CertificationError> {
        unimplemented!("stubbed certification use case")
    }
    async fn patch(
        &self,
        _id: Uuid,
        _input: PatchCertificationInput,
    ) -> Result<CertificationResult, CertificationError> {
        unimplemented!("stubbed certification use case")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), CertificationError> {
        unimplemented!("stubbed certification use case")
    }
    async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), CertificationError> {
        unimplemented!("stubbed certification use case")
    }
}

pub struct StubSkillUseCases;

#[async_trait]
impl SkillUseCases for StubSkillUseCases {
    async fn list(&self, _filter: SkillListFilter) -> Result<Vec<SkillResult>, SkillError> {
        unimplemented!("stubbed skill use case")
    }
    async fn grouped_by_category(&self) -> Result<Vec<SkillCategoryGroup>, SkillError> {
        unimplemented!("stubbed skill use case")
    }
    async fn get(&self, _id: Uuid) -> Result<SkillResult, SkillError> {
        unimplemented!("stubbed skill use case")
    }
    async fn create(&self, _data: CreateSkillData) -> Result<SkillResult, SkillError> {
        unimplemented!("stubbed skill use case")
    }
    async fn patch(&self, _id: Uuid, _data: PatchSkillData) -> Result<SkillResult, SkillError> {
        unimplemented!("stubbed skill use case")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), SkillError> {
        unimplemented!("stubbed skill use case")
    }
    async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), SkillError> {
        unimplemented!("stubbed skill use case")
    }
    async fn toggle_highlighted(&self, _id: Uuid) -> Result<SkillResult, SkillError> {
        unimplemented!("stubbed skill use case")
    }
}

pub struct StubTechnologyUseCases;

#[async_trait]
impl TechnologyUseCases for StubTechnologyUseCases {
    async fn list(
        &self,
        _filter: TechnologyListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<TechnologyResult>, TechnologyError> {
        unimplemented!("stubbed technology use case")
    }
    async fn list_featured(&self) -> Result<Vec<TechnologyResult>, TechnologyError> {
        unimplemented!("stubbed technology use case")
    }
    async fn get(&self, _id: Uuid) -> Result<TechnologyResult, TechnologyError> {
        unimplemented!("stubbed technology use case")
    }
    async fn create(
        &self,
        _input: CreateTechnologyInput,
    ) -> Result<TechnologyResult, TechnologyError> {
        unimplemented!("stubbed technology use case")
    }
    async fn patch(
        &self,
        _id: Uuid,
        _data: PatchTechnologyData,
    ) -> Result<TechnologyResult, TechnologyError> {
        unimplemented!("stubbed technology use case")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), TechnologyError> {
        unimplemented!("stubbed technology use case")
    }
    async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), TechnologyError> {
        unimplemented!("stubbed technology use case")
    }
    async fn toggle_featured(&self, _id: Uuid) -> Result<TechnologyResult, TechnologyError> {
        unimplemented!("stubbed technology use case")
    }
}

pub struct StubTestimonialUseCases;

#[async_trait]
impl TestimonialUseCases for StubTestimonialUseCases {
    async fn list(
        &self,
        _filter: TestimonialListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<TestimonialResult>, TestimonialError> {
        unimplemented!("stubbed testimonial use case")
    }
    async fn list_published(&self) -> Result<Vec<TestimonialResult>, TestimonialError> {
        unimplemented!("stubbed testimonial use case")
    }
    async fn get(&self, _id: Uuid) -> Result<TestimonialResult, TestimonialError> {
        unimplemented!("stubbed testimonial use case")
    }
    async fn create(
        &self,
        _input: CreateTestimonialInput,
    ) -> Result<TestimonialResult, TestimonialError> {
        unimplemented!("stubbed testimonial use case")
    }
    async fn patch(
        &self,
        _id: Uuid,
        _input: PatchTestimonialInput,
    ) -> Result<TestimonialResult, TestimonialError> {
        unimplemented!("stubbed testimonial use case")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), TestimonialError> {
        unimplemented!("stubbed testimonial use case")
    }
    async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), TestimonialError> {
        unimplemented!("stubbed testimonial use case")
    }
    async fn toggle_featured(
        &self,
        _id: Uuid,
    ) -> Result<TestimonialResult, TestimonialError> {
        unimplemented!("stubbed testimonial use case")
    }
    async fn toggle_published(
        &self,
        _id: Uuid,
    ) -> Result<TestimonialResult, TestimonialError> {
        unimplemented!("stubbed testimonial use case")
    }
}

pub struct StubProjectUseCases;

#[async_trait]
impl ProjectUseCases for StubProjectUseCases {
    async fn list(
        &self,
        _filter: ProjectListFilter,
        _sort: ProjectSort,
        _page: PageRequest,
    ) -> Result<PageResult<ProjectCardView>, ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn get(&self, _id: Uuid) -> Result<ProjectView, ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn get_published_by_slug(&self, _slug: &str) -> Result<ProjectView, ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn like_by_slug(&self, _slug: &str) -> Result<ProjectView, ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn list_featured_published(&self) -> Result<Vec<ProjectCardView>, ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn create(&self, _input: CreateProjectInput) -> Result<ProjectView, ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn patch(
        &self,
        _id: Uuid,
        _input: PatchProjectInput,
    ) -> Result<ProjectView, ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn toggle_featured(&self, _id: Uuid) -> Result<ProjectView, ProjectError> {
        unimplemented!("stubbed project use case")
    }
    async fn toggle_published(&self, _id: Uuid) -> Result<ProjectView, ProjectError> {
        unimplemented!("stubbed project use case")
    }
}

pub struct StubContactUseCases;

#[async_trait]
impl ContactUseCases for StubContactUseCases {
    async fn submit(
        &self,
        _data: CreateContactMessageData,
    ) -> Result<ContactMessageResult, ContactError> {
        unimplemented!("stubbed contact use case")
    }
    async fn list(
        &self,
        _status: Option<ContactStatus>,
        _page: PageRequest,
    ) -> Result<PageResult<ContactMessageResult>, ContactError> {
        unimplemented!("stubbed contact use case")
    }
    async fn set_status(
        &self,
        _id: Uuid,
        _status: ContactStatus,
    ) -> Result<ContactMessageResult, ContactError> {
        unimplemented!("stubbed contact use case")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), ContactError> {
        unimplemented!("stubbed contact use case")
    }
}

pub struct StubDashboardUseCases;

#[async_trait]
impl DashboardUseCases for StubDashboardUseCases {
    async fn summary(&self) -> Result<DashboardSummary, DashboardError> {
        unimplemented!("stubbed dashboard use case")
    }
}

pub struct StubPublicSiteUseCases;

#[async_trait]
impl PublicSiteUseCases for StubPublicSiteUseCases {
    async fn home(&self) -> Result<HomePage, PublicSiteError> {
        unimplemented!("stubbed public site use case")
    }
    async fn about(&self) -> Result<AboutPage, PublicSiteError> {
        unimplemented!("stubbed public site use case")
    }
}
