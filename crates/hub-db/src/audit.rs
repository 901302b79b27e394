//! Audit trail repository.
//!
//! Append-only audit entries recording every service mutation. Entries are
//! written through the same gateway (and so the same transaction) as the
//! mutation they describe.

use chrono::Utc;
use hub_core::entities::AuditEntry;
use hub_core::enums::{AuditAction, EntityKind};
use hub_core::session::Session;

use crate::error::DatabaseError;
use crate::gateway::Gateway;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_json};

/// Filter criteria for audit queries.
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub entity_kind: Option<EntityKind>,
    pub entity_id: Option<i64>,
    pub actor_id: Option<i64>,
    pub action: Option<AuditAction>,
    pub limit: Option<u32>,
}

fn row_to_audit(row: &libsql::Row) -> Result<AuditEntry, DatabaseError> {
    Ok(AuditEntry {
        id: row.get(0)?,
        entity_kind: parse_enum(&row.get::<String>(1)?)?,
        entity_id: row.get(2)?,
        actor_id: row.get(3)?,
        action: parse_enum(&row.get::<String>(4)?)?,
        detail: parse_optional_json(get_opt_string(row, 5)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl Gateway<'_> {
    /// Append an audit entry for `session`'s actor.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn append_audit(
        &self,
        session: &Session,
        kind: EntityKind,
        entity_id: i64,
        action: AuditAction,
        detail: Option<serde_json::Value>,
    ) -> Result<(), DatabaseError> {
        let detail = detail.map(|d| d.to_string());
        let now = Utc::now().to_rfc3339();
        self.policy()
            .execute(
                self.conn(),
                "INSERT INTO audit_trail (entity_kind, entity_id, actor_id, action, detail, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                || {
                    libsql::params![
                        kind.as_str(),
                        entity_id,
                        session.actor_id,
                        action.as_str(),
                        detail.as_deref(),
                        now.as_str()
                    ]
                },
            )
            .await?;
        Ok(())
    }

    /// Query audit entries with optional filters, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_audit(&self, filter: &AuditFilter) -> Result<Vec<AuditEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(kind) = filter.entity_kind {
            params.push(libsql::Value::Text(kind.as_str().to_string()));
            conditions.push(format!("entity_kind = ?{}", params.len()));
        }
        if let Some(id) = filter.entity_id {
            params.push(libsql::Value::Integer(id));
            conditions.push(format!("entity_id = ?{}", params.len()));
        }
        if let Some(actor) = filter.actor_id {
            params.push(libsql::Value::Integer(actor));
            conditions.push(format!("actor_id = ?{}", params.len()));
        }
        if let Some(action) = filter.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT id, entity_kind, entity_id, actor_id, action, detail, created_at
             FROM audit_trail {where_clause}
             ORDER BY id ASC LIMIT {limit}"
        );

        self.policy()
            .query_map(
                self.conn(),
                &sql,
                || libsql::params_from_iter(params.clone()),
                row_to_audit,
            )
            .await
    }
}
