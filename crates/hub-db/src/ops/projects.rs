//! Projects and their tasks.

use chrono::NaiveDate;
use hub_core::audit_detail::CascadeDetail;
use hub_core::entities::{Project, Task};
use hub_core::enums::{AuditAction, EntityKind, ProjectStatus, TaskPriority, TaskStatus};
use hub_core::session::Session;

use crate::error::DatabaseError;
use crate::gateway::Filter;
use crate::service::{HubService, advance, create};

impl HubService {
    pub async fn create_project(
        &self,
        session: &Session,
        name: &str,
        description: Option<&str>,
        budget: f64,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Project, DatabaseError> {
        let project = Project::new(
            name,
            description.map(String::from),
            budget,
            start_date,
            end_date,
        )?;
        let uow = self.db().begin().await?;
        let result = create(&uow.gateway(), session, project).await;
        uow.finish(result).await
    }

    pub async fn transition_project(
        &self,
        session: &Session,
        id: i64,
        target: ProjectStatus,
    ) -> Result<Project, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = advance::<Project>(&uow.gateway(), session, id, target).await;
        uow.finish(result).await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, DatabaseError> {
        self.get(id).await
    }

    pub async fn list_projects(&self, filter: &Filter) -> Result<Vec<Project>, DatabaseError> {
        self.list(filter).await
    }

    /// Delete a project together with all of its tasks.
    ///
    /// Tasks are deleted first, each with its own audit entry; the project's
    /// entry lists the task ids it took with it. Returns the number of tasks
    /// removed.
    pub async fn delete_project(&self, session: &Session, id: i64) -> Result<u64, DatabaseError> {
        let uow = self.db().begin().await?;
        let result: Result<u64, DatabaseError> = async {
            let gw = uow.gateway();
            gw.get::<Project>(id).await?;
            let mut tasks: Vec<Task> = gw.find_all(&Filter::new().eq("project_id", id)).await?;
            // Cascade in creation order, not the newest-first listing order.
            tasks.sort_by_key(|task| task.id);
            let mut task_ids = Vec::with_capacity(tasks.len());
            for task in &tasks {
                gw.delete::<Task>(task.id).await?;
                gw.append_audit(
                    session,
                    EntityKind::Task,
                    task.id,
                    AuditAction::Deleted,
                    Some(serde_json::to_value(task)?),
                )
                .await?;
                task_ids.push(task.id);
            }
            gw.delete::<Project>(id).await?;
            let detail = CascadeDetail {
                dependent_kind: EntityKind::Task.to_string(),
                dependent_ids: task_ids,
            };
            gw.append_audit(
                session,
                EntityKind::Project,
                id,
                AuditAction::Deleted,
                Some(serde_json::to_value(detail)?),
            )
            .await?;
            Ok(tasks.len() as u64)
        }
        .await;
        let cascaded = uow.finish(result).await?;
        tracing::info!(project = id, cascaded, "project deleted");
        Ok(cascaded)
    }

    /// Add a task to an existing project.
    pub async fn create_task(
        &self,
        session: &Session,
        project_id: i64,
        title: &str,
        description: Option<&str>,
        priority: TaskPriority,
    ) -> Result<Task, DatabaseError> {
        let task = Task::new(project_id, title, description.map(String::from), priority)?;
        let uow = self.db().begin().await?;
        let result: Result<Task, DatabaseError> = async {
            let gw = uow.gateway();
            gw.get::<Project>(project_id).await?;
            create(&gw, session, task).await
        }
        .await;
        uow.finish(result).await
    }

    pub async fn transition_task(
        &self,
        session: &Session,
        id: i64,
        target: TaskStatus,
    ) -> Result<Task, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = advance::<Task>(&uow.gateway(), session, id, target).await;
        uow.finish(result).await
    }

    /// Tasks of one project, newest first.
    pub async fn list_tasks(&self, project_id: i64, limit: u32) -> Result<Vec<Task>, DatabaseError> {
        self.list(&Filter::new().eq("project_id", project_id).limit(limit))
            .await
    }

    pub async fn delete_task(&self, session: &Session, id: i64) -> Result<(), DatabaseError> {
        self.delete::<Task>(session, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditFilter;
    use crate::test_support::{date, test_service, test_session};
    use pretty_assertions::assert_eq;

    async fn project_with_tasks(svc: &HubService, tasks: usize) -> (Project, Vec<Task>) {
        let ses = test_session();
        let project = svc
            .create_project(
                &ses,
                "Billing revamp",
                Some("Move invoices to the new ledger"),
                25_000.0,
                date(2026, 1, 5),
                None,
            )
            .await
            .unwrap();
        let mut created = Vec::new();
        for n in 0..tasks {
            created.push(
                svc.create_task(
                    &ses,
                    project.id,
                    &format!("Task {n}"),
                    None,
                    TaskPriority::Medium,
                )
                .await
                .unwrap(),
            );
        }
        (project, created)
    }

    #[tokio::test]
    async fn project_lifecycle() {
        let svc = test_service().await;
        let ses = test_session();
        let (project, _) = project_with_tasks(&svc, 0).await;
        assert_eq!(project.status, ProjectStatus::Planning);

        svc.transition_project(&ses, project.id, ProjectStatus::InProgress)
            .await
            .unwrap();
        svc.transition_project(&ses, project.id, ProjectStatus::OnHold)
            .await
            .unwrap();
        let resumed = svc
            .transition_project(&ses, project.id, ProjectStatus::InProgress)
            .await
            .unwrap();
        assert_eq!(resumed.status, ProjectStatus::InProgress);

        svc.transition_project(&ses, project.id, ProjectStatus::Completed)
            .await
            .unwrap();
        let err = svc
            .transition_project(&ses, project.id, ProjectStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(err.is_illegal_transition());
        assert_eq!(
            svc.get_project(project.id).await.unwrap().status,
            ProjectStatus::Completed
        );
    }

    #[tokio::test]
    async fn task_can_go_back_to_todo() {
        let svc = test_service().await;
        let ses = test_session();
        let (_, tasks) = project_with_tasks(&svc, 1).await;
        let id = tasks[0].id;

        svc.transition_task(&ses, id, TaskStatus::InProgress).await.unwrap();
        let back = svc.transition_task(&ses, id, TaskStatus::Todo).await.unwrap();
        assert_eq!(back.status, TaskStatus::Todo);
        assert!(
            svc.transition_task(&ses, id, TaskStatus::Done)
                .await
                .unwrap_err()
                .is_illegal_transition()
        );
    }

    #[tokio::test]
    async fn task_requires_existing_project() {
        let svc = test_service().await;
        let err = svc
            .create_task(&test_session(), 404, "Orphan", None, TaskPriority::Low)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: project 404");
    }

    #[tokio::test]
    async fn tasks_list_newest_first() {
        let svc = test_service().await;
        let (project, tasks) = project_with_tasks(&svc, 3).await;

        let listed = svc.list_tasks(project.id, 10).await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|t| t.id).collect();
        let mut expected: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        expected.reverse();
        assert_eq!(ids, expected);

        assert_eq!(svc.list_tasks(project.id, 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn plain_delete_of_project_with_tasks_is_refused() {
        let svc = test_service().await;
        let (project, _) = project_with_tasks(&svc, 2).await;

        let err = svc
            .delete::<Project>(&test_session(), project.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Constraint(_)));
        assert!(err.is_persistence());
        assert_eq!(svc.list_tasks(project.id, 10).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_project_cascades_to_tasks() {
        let svc = test_service().await;
        let ses = test_session();
        let (project, tasks) = project_with_tasks(&svc, 2).await;

        let cascaded = svc.delete_project(&ses, project.id).await.unwrap();
        assert_eq!(cascaded, 2);
        assert!(svc.get_project(project.id).await.unwrap_err().is_not_found());
        for task in &tasks {
            assert!(svc.get::<Task>(task.id).await.unwrap_err().is_not_found());
        }

        let uow = svc.db().begin().await.unwrap();
        let deletions = uow
            .gateway()
            .query_audit(&AuditFilter {
                action: Some(AuditAction::Deleted),
                ..Default::default()
            })
            .await
            .unwrap();
        uow.rollback().await.unwrap();

        let kinds: Vec<EntityKind> = deletions.iter().map(|e| e.entity_kind).collect();
        assert_eq!(
            kinds,
            vec![EntityKind::Task, EntityKind::Task, EntityKind::Project]
        );
        let task_ids: Vec<i64> = deletions[..2].iter().map(|e| e.entity_id).collect();
        assert!(task_ids[0] < task_ids[1]);
        let detail: CascadeDetail =
            serde_json::from_value(deletions[2].detail.clone().unwrap()).unwrap();
        assert_eq!(detail.dependent_ids, task_ids);
        assert_eq!(detail.dependent_kind, "task");
        assert_eq!(detail.dependent_ids, tasks.iter().map(|t| t.id).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn delete_task_then_project() {
        let svc = test_service().await;
        let ses = test_session();
        let (project, tasks) = project_with_tasks(&svc, 1).await;

        svc.delete_task(&ses, tasks[0].id).await.unwrap();
        assert_eq!(svc.delete_project(&ses, project.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_missing_project_is_not_found() {
        let svc = test_service().await;
        let err = svc.delete_project(&test_session(), 9).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
