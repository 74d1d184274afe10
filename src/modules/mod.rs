pub mod admin;
pub mod certification;
pub mod contact;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod project;
pub mod public_site;
pub mod skill;
pub mod storage;
pub mod technology;
pub mod testimonial;
