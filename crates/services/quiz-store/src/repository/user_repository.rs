//! User, role and role assignment repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use validator::Validate;

use super::entities::role::{self, Entity as RoleEntity};
use super::entities::user::{self, Entity as UserEntity};
use super::entities::user_role::{self, Entity as UserRoleEntity};
use common::AppResult;
use domain::{NewRole, NewUser, Role, User, UserRole};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a new role
    async fn create_role(&self, new_role: NewRole) -> AppResult<Role>;

    /// Find role by its unique name
    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// List all roles
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Assign a role to a user.
    ///
    /// Assigning the same pair twice stores a second row.
    async fn assign_role(&self, user_id: i32, role_id: i32) -> AppResult<UserRole>;

    /// Roles assigned to a user, each listed once
    async fn roles_for_user(&self, user_id: i32) -> AppResult<Vec<Role>>;
}

/// Concrete implementation of UserRepository over any connection
pub struct UserStore<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> UserStore<'c, C> {
    /// Create new repository instance
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'c, C> UserRepository for UserStore<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        new_user.validate()?;

        let active_model = user::ActiveModel {
            username: Set(new_user.username),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(user_id = model.user_id, "user created");
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(self.db).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::UserId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create_role(&self, new_role: NewRole) -> AppResult<Role> {
        new_role.validate()?;

        let active_model = role::ActiveModel {
            role_name: Set(new_role.name),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(role_id = model.role_id, role = %model.role_name, "role created");
        Ok(Role::from(model))
    }

    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let result = RoleEntity::find()
            .filter(role::Column::RoleName.eq(name))
            .one(self.db)
            .await?;

        Ok(result.map(Role::from))
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find()
            .order_by_asc(role::Column::RoleId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Role::from).collect())
    }

    async fn assign_role(&self, user_id: i32, role_id: i32) -> AppResult<UserRole> {
        let active_model = user_role::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(user_id, role_id, "role assigned");
        Ok(UserRole::from(model))
    }

    async fn roles_for_user(&self, user_id: i32) -> AppResult<Vec<Role>> {
        // Assignments may repeat, so collapse them
        let models = RoleEntity::find()
            .inner_join(UserRoleEntity)
            .filter(user_role::Column::UserId.eq(user_id))
            .distinct()
            .order_by_asc(role::Column::RoleId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Role::from).collect())
    }
}
