use sqlx::PgPool;
use uuid::Uuid;

use super::models::Portfolio;
use super::StoreError;

/// Typed access to the portfolios table. Every query carries the owning-user
/// predicate; rows belonging to other users are invisible at this layer.
#[derive(Clone)]
pub struct PortfolioStore {
    pool: PgPool,
}

impl PortfolioStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All portfolios owned by `user_id` in insertion order, each annotated
    /// with its holdings count (0 for an empty portfolio, never null).
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Portfolio>, StoreError> {
        let portfolios = sqlx::query_as::<_, Portfolio>(
            "SELECT p.id, p.user_id, p.name, p.description, p.created_at, \
                    COUNT(h.id) AS holdings_count \
             FROM portfolios p \
             LEFT JOIN holdings h ON h.portfolio_id = p.id \
             WHERE p.user_id = $1 \
             GROUP BY p.id \
             ORDER BY p.created_at, p.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(portfolios)
    }

    /// Persist a new portfolio owned by `user_id`. Inputs are expected to be
    /// validated and trimmed already (see `store::validate`).
    pub async fn create(
        &self,
        user_id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<Portfolio, StoreError> {
        let portfolio = sqlx::query_as::<_, Portfolio>(
            "INSERT INTO portfolios (user_id, name, description) \
             VALUES ($1, $2, $3) \
             RETURNING id, user_id, name, description, created_at, 0::BIGINT AS holdings_count",
        )
        .bind(user_id)
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(portfolio)
    }

    /// Ownership guard: a matching row filtered by both id and owner is the
    /// only accepted proof. Absence and foreign ownership are
    /// indistinguishable from the caller's side.
    pub async fn owned_by(&self, user_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM portfolios WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0 > 0)
    }

    /// Delete a portfolio and all of its holdings.
    ///
    /// Two sequential statements, holdings first, with no transaction across
    /// them: if the portfolio delete then matches zero rows (e.g. a
    /// concurrent delete), the holdings are already gone. That window is an
    /// accepted inconsistency, not remediated.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        if !self.owned_by(user_id, id).await? {
            return Err(StoreError::PortfolioNotFound);
        }

        sqlx::query("DELETE FROM holdings WHERE portfolio_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::PortfolioNotFound);
        }

        Ok(())
    }
}
