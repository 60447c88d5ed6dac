//! Reference data inserted by the `seed` command.

use common::AppResult;
use domain::{NewRole, Role, DEFAULT_ROLES};

use crate::repository::UserRepository;

/// Insert whichever default roles are missing.
///
/// Returns the roles that were created; running it again creates nothing.
pub async fn seed_default_roles<R>(users: &R) -> AppResult<Vec<Role>>
where
    R: UserRepository + ?Sized,
{
    let mut created = Vec::new();

    for name in DEFAULT_ROLES {
        if users.find_role_by_name(name).await?.is_some() {
            tracing::debug!(role = name, "role already present");
            continue;
        }

        let role = users.create_role(NewRole::new(*name)).await?;
        tracing::info!(role = %role.name, "role created");
        created.push(role);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ROLE_INSTRUCTOR, ROLE_STUDENT};

    use crate::repository::MockUserRepository;

    #[tokio::test]
    async fn creates_only_missing_roles() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_role_by_name()
            .times(2)
            .returning(|name| {
                Ok((name == ROLE_INSTRUCTOR).then(|| Role {
                    id: 1,
                    name: ROLE_INSTRUCTOR.to_string(),
                }))
            });
        repo.expect_create_role()
            .times(1)
            .returning(|new_role| {
                Ok(Role {
                    id: 2,
                    name: new_role.name,
                })
            });

        let created = seed_default_roles(&repo).await.unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, ROLE_STUDENT);
    }

    #[tokio::test]
    async fn nothing_created_when_all_roles_exist() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_role_by_name().returning(|name| {
            Ok(Some(Role {
                id: 1,
                name: name.to_string(),
            }))
        });
        repo.expect_create_role().never();

        let created = seed_default_roles(&repo).await.unwrap();
        assert!(created.is_empty());
    }
}
