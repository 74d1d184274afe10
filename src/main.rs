pub mod modules;
pub mod shared;

pub mod health;

use crate::modules::admin::extractor::AdminTokenConfig;
use crate::modules::certification::adapter::repository_postgres::CertificationRepositoryPostgres;
use crate::modules::certification::application::ports::CertificationUseCases;
use crate::modules::certification::application::services::CertificationService;
use crate::modules::contact::adapter::repository_postgres::ContactRepositoryPostgres;
use crate::modules::contact::application::ports::ContactUseCases;
use crate::modules::contact::application::services::ContactService;
use crate::modules::dashboard::adapter::query_postgres::DashboardQueryPostgres;
use crate::modules::dashboard::application::ports::DashboardUseCases;
use crate::modules::dashboard::application::services::DashboardService;
use crate::modules::education::adapter::repository_postgres::EducationRepositoryPostgres;
use crate::modules::education::application::ports::EducationUseCases;
use crate::modules::education::application::services::EducationService;
use crate::modules::experience::adapter::repository_postgres::ExperienceRepositoryPostgres;
use crate::modules::experience::application::ports::ExperienceUseCases;
use crate::modules::experience::application::services::ExperienceService;
use crate::modules::project::adapter::query_postgres::ProjectQueryPostgres;
use crate::modules::project::adapter::repository_postgres::ProjectRepositoryPostgres;
use crate::modules::project::application::ports::ProjectUseCases;
use crate::modules::project::application::services::ProjectService;
use crate::modules::public_site::application::{PublicSiteService, PublicSiteUseCases};
use crate::modules::skill::adapter::repository_postgres::SkillRepositoryPostgres;
use crate::modules::skill::application::ports::SkillUseCases;
use crate::modules::skill::application::services::SkillService;
use crate::modules::storage::media_storage::MediaStorage;
use crate::modules::storage::storage_gcs::GcsMediaStorage;
use crate::modules::storage::storage_memory::InMemoryMediaStorage;
use crate::modules::technology::adapter::repository_postgres::TechnologyRepositoryPostgres;
use crate::modules::technology::application::ports::TechnologyUseCases;
use crate::modules::technology::application::services::TechnologyService;
use crate::modules::testimonial::adapter::repository_postgres::TestimonialRepositoryPostgres;
use crate::modules::testimonial::application::ports::TestimonialUseCases;
use crate::modules::testimonial::application::services::TestimonialService;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: Arc<dyn ProjectUseCases>,
    pub technology: Arc<dyn TechnologyUseCases>,
    pub skill: Arc<dyn SkillUseCases>,
    pub experience: Arc<dyn ExperienceUseCases>,
    pub education: Arc<dyn EducationUseCases>,
    pub certification: Arc<dyn CertificationUseCases>,
    pub testimonial: Arc<dyn TestimonialUseCases>,
    pub contact: Arc<dyn ContactUseCases>,
    pub dashboard: Arc<dyn DashboardUseCases>,
    pub public_site: Arc<dyn PublicSiteUseCases>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let admin_token_config = AdminTokenConfig::from_env();

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Media storage: GCS when a bucket is configured, in-memory otherwise
    // (local development without credentials).
    let storage: Arc<dyn MediaStorage> = if env::var("MEDIA_UPLOAD_BUCKET").is_ok() {
        Arc::new(GcsMediaStorage::from_env())
    } else {
        tracing::warn!("MEDIA_UPLOAD_BUCKET not set; using in-memory media storage");
        Arc::new(InMemoryMediaStorage::new())
    };

    // Repositories and services
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let project_service: Arc<dyn ProjectUseCases> = Arc::new(ProjectService::new(
        project_repo,
        project_query,
        Arc::clone(&storage),
    ));

    let technology_repo = TechnologyRepositoryPostgres::new(Arc::clone(&db_arc));
    let technology_service: Arc<dyn TechnologyUseCases> =
        Arc::new(TechnologyService::new(technology_repo));

    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill_service: Arc<dyn SkillUseCases> = Arc::new(SkillService::new(skill_repo));

    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_service: Arc<dyn ExperienceUseCases> = Arc::new(ExperienceService::new(
        experience_repo,
        Arc::clone(&storage),
    ));

    let education_repo = EducationRepositoryPostgres::new(Arc::clone(&db_arc));
    let education_service: Arc<dyn EducationUseCases> =
        Arc::new(EducationService::new(education_repo, Arc::clone(&storage)));

    let certification_repo = CertificationRepositoryPostgres::new(Arc::clone(&db_arc));
    let certification_service: Arc<dyn CertificationUseCases> = Arc::new(
        CertificationService::new(certification_repo, Arc::clone(&storage)),
    );

    let testimonial_repo = TestimonialRepositoryPostgres::new(Arc::clone(&db_arc));
    let testimonial_service: Arc<dyn TestimonialUseCases> = Arc::new(TestimonialService::new(
        testimonial_repo,
        Arc::clone(&storage),
    ));

    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));
    let contact_service: Arc<dyn ContactUseCases> = Arc::new(ContactService::new(contact_repo));

    let dashboard_query = DashboardQueryPostgres::new(Arc::clone(&db_arc));
    let dashboard_service: Arc<dyn DashboardUseCases> =
        Arc::new(DashboardService::new(dashboard_query));

    let public_site_service: Arc<dyn PublicSiteUseCases> = Arc::new(PublicSiteService::new(
        Arc::clone(&project_service),
        Arc::clone(&technology_service),
        Arc::clone(&skill_service),
        Arc::clone(&testimonial_service),
        Arc::clone(&experience_service),
        Arc::clone(&education_service),
        Arc::clone(&certification_service),
    ));

    let state = AppState {
        project: project_service,
        technology: technology_service,
        skill: skill_service,
        experience: experience_service,
        education: education_service,
        certification: certification_service,
        testimonial: testimonial_service,
        contact: contact_service,
        dashboard: dashboard_service,
        public_site: public_site_service,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(admin_token_config.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Projects
    cfg.service(crate::modules::project::adapter::routes::list_projects_handler);
    cfg.service(crate::modules::project::adapter::routes::get_project_handler);
    cfg.service(crate::modules::project::adapter::routes::create_project_handler);
    cfg.service(crate::modules::project::adapter::routes::patch_project_handler);
    cfg.service(crate::modules::project::adapter::routes::delete_project_handler);
    cfg.service(crate::modules::project::adapter::routes::reorder_projects_handler);
    cfg.service(crate::modules::project::adapter::routes::toggle_project_featured_handler);
    cfg.service(crate::modules::project::adapter::routes::toggle_project_published_handler);
    cfg.service(crate::modules::project::adapter::routes::get_public_portfolio_handler);
    cfg.service(crate::modules::project::adapter::routes::get_public_project_handler);
    cfg.service(crate::modules::project::adapter::routes::like_public_project_handler);

    // Technologies
    cfg.service(crate::modules::technology::adapter::routes::list_technologies_handler);
    cfg.service(crate::modules::technology::adapter::routes::get_technology_handler);
    cfg.service(crate::modules::technology::adapter::routes::create_technology_handler);
    cfg.service(crate::modules::technology::adapter::routes::patch_technology_handler);
    cfg.service(crate::modules::technology::adapter::routes::delete_technology_handler);
    cfg.service(crate::modules::technology::adapter::routes::reorder_technologies_handler);
    cfg.service(crate::modules::technology::adapter::routes::toggle_technology_featured_handler);

    // Skills
    cfg.service(crate::modules::skill::adapter::routes::list_skills_handler);
    cfg.service(crate::modules::skill::adapter::routes::get_skill_handler);
    cfg.service(crate::modules::skill::adapter::routes::create_skill_handler);
    cfg.service(crate::modules::skill::adapter::routes::patch_skill_handler);
    cfg.service(crate::modules::skill::adapter::routes::delete_skill_handler);
    cfg.service(crate::modules::skill::adapter::routes::reorder_skills_handler);
    cfg.service(crate::modules::skill::adapter::routes::toggle_skill_highlighted_handler);
    cfg.service(crate::modules::skill::adapter::routes::get_public_skills_handler);

    // Experiences
    cfg.service(crate::modules::experience::adapter::routes::list_experiences_handler);
    cfg.service(crate::modules::experience::adapter::routes::get_experience_handler);
    cfg.service(crate::modules::experience::adapter::routes::create_experience_handler);
    cfg.service(crate::modules::experience::adapter::routes::patch_experience_handler);
    cfg.service(crate::modules::experience::adapter::routes::delete_experience_handler);
    cfg.service(crate::modules::experience::adapter::routes::reorder_experiences_handler);

    // Educations
    cfg.service(crate::modules::education::adapter::routes::list_educations_handler);
    cfg.service(crate::modules::education::adapter::routes::get_education_handler);
    cfg.service(crate::modules::education::adapter::routes::create_education_handler);
    cfg.service(crate::modules::education::adapter::routes::patch_education_handler);
    cfg.service(crate::modules::education::adapter::routes::delete_education_handler);
    cfg.service(crate::modules::education::adapter::routes::reorder_educations_handler);

    // Certifications
    cfg.service(crate::modules::certification::adapter::routes::list_certifications_handler);
    cfg.service(crate::modules::certification::adapter::routes::get_certification_handler);
    cfg.service(crate::modules::certification::adapter::routes::create_certification_handler);
    cfg.service(crate::modules::certification::adapter::routes::patch_certification_handler);
    cfg.service(crate::modules::certification::adapter::routes::delete_certification_handler);
    cfg.service(crate::modules::certification::adapter::routes::reorder_certifications_handler);

    // Testimonials
    cfg.service(crate::modules::testimonial::adapter::routes::list_testimonials_handler);
    cfg.service(crate::modules::testimonial::adapter::routes::get_testimonial_handler);
    cfg.service(crate::modules::testimonial::adapter::routes::create_testimonial_handler);
    cfg.service(crate::modules::testimonial::adapter::routes::patch_testimonial_handler);
    cfg.service(crate::modules::testimonial::adapter::routes::delete_testimonial_handler);
    cfg.service(crate::modules::testimonial::adapter::routes::reorder_testimonials_handler);
    cfg.service(crate::modules::testimonial::adapter::routes::toggle_testimonial_featured_handler);
    cfg.service(crate::modules::testimonial::adapter::routes::toggle_testimonial_published_handler);
    cfg.service(crate::modules::testimonial::adapter::routes::get_public_testimonials_handler);

    // Contact
    cfg.service(crate::modules::contact::adapter::routes::submit_contact_message_handler);
    cfg.service(crate::modules::contact::adapter::routes::list_contact_messages_handler);
    cfg.service(crate::modules::contact::adapter::routes::set_contact_status_handler);
    cfg.service(crate::modules::contact::adapter::routes::delete_contact_message_handler);

    // Dashboard
    cfg.service(crate::modules::dashboard::adapter::routes::get_dashboard_handler);

    // Public composites
    cfg.service(crate::modules::public_site::routes::get_public_home_handler);
    cfg.service(crate::modules::public_site::routes::get_public_about_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
