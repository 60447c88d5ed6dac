//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Table and column names match the migrations in `infra::migrations`.

pub mod answer;
pub mod attempt;
pub mod choice;
pub mod enrollment;
pub mod question;
pub mod quiz;
pub mod role;
pub mod subject;
pub mod user;
pub mod user_role;

