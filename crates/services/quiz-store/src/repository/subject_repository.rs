//! Subject and enrollment repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use validator::Validate;

use super::entities::enrollment::{self, Entity as EnrollmentEntity};
use super::entities::subject::{self, Entity as SubjectEntity};
use common::AppResult;
use domain::{Enrollment, NewEnrollment, NewSubject, Subject};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Subject repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// Create a new subject
    async fn create_subject(&self, new_subject: NewSubject) -> AppResult<Subject>;

    /// Find subject by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Subject>>;

    /// Find subject by its unique name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Subject>>;

    /// List all subjects
    async fn list_subjects(&self) -> AppResult<Vec<Subject>>;

    /// Enroll a user in a subject (at most once per pair)
    async fn enroll(&self, new_enrollment: NewEnrollment) -> AppResult<Enrollment>;

    /// Enrollments held by a user
    async fn enrollments_for_user(&self, user_id: i32) -> AppResult<Vec<Enrollment>>;

    /// Enrollments in a subject
    async fn enrollments_for_subject(&self, subject_id: i32) -> AppResult<Vec<Enrollment>>;
}

/// Concrete implementation of SubjectRepository over any connection
pub struct SubjectStore<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> SubjectStore<'c, C> {
    /// Create new repository instance
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'c, C> SubjectRepository for SubjectStore<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create_subject(&self, new_subject: NewSubject) -> AppResult<Subject> {
        new_subject.validate()?;

        let active_model = subject::ActiveModel {
            name: Set(new_subject.name),
            description: Set(new_subject.description),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(subject_id = model.subject_id, "subject created");
        Ok(Subject::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Subject>> {
        let result = SubjectEntity::find_by_id(id).one(self.db).await?;
        Ok(result.map(Subject::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Subject>> {
        let result = SubjectEntity::find()
            .filter(subject::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(result.map(Subject::from))
    }

    async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        let models = SubjectEntity::find()
            .order_by_asc(subject::Column::Name)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Subject::from).collect())
    }

    async fn enroll(&self, new_enrollment: NewEnrollment) -> AppResult<Enrollment> {
        let active_model = enrollment::ActiveModel {
            user_id: Set(new_enrollment.user_id),
            subject_id: Set(new_enrollment.subject_id),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(
            user_id = model.user_id,
            subject_id = model.subject_id,
            "user enrolled"
        );
        Ok(Enrollment::from(model))
    }

    async fn enrollments_for_user(&self, user_id: i32) -> AppResult<Vec<Enrollment>> {
        let models = EnrollmentEntity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .order_by_asc(enrollment::Column::EnrollmentId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Enrollment::from).collect())
    }

    async fn enrollments_for_subject(&self, subject_id: i32) -> AppResult<Vec<Enrollment>> {
        let models = EnrollmentEntity::find()
            .filter(enrollment::Column::SubjectId.eq(subject_id))
            .order_by_asc(enrollment::Column::EnrollmentId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Enrollment::from).collect())
    }
}
