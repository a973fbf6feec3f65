use sqlx::PgPool;
use uuid::Uuid;

use super::models::Holding;
use super::StoreError;

/// Typed access to the holdings table. A holding's effective owner is the
/// owner of its parent portfolio; `list` and `create` expect the caller to
/// have passed `PortfolioStore::owned_by` first, while `delete` proves
/// ownership itself in a single joined statement.
#[derive(Clone)]
pub struct HoldingStore {
    pool: PgPool,
}

impl HoldingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, portfolio_id: Uuid) -> Result<Vec<Holding>, StoreError> {
        let holdings = sqlx::query_as::<_, Holding>(
            "SELECT id, portfolio_id, symbol, quantity, purchase_price, created_at \
             FROM holdings \
             WHERE portfolio_id = $1 \
             ORDER BY created_at, id",
        )
        .bind(portfolio_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(holdings)
    }

    pub async fn create(
        &self,
        portfolio_id: Uuid,
        symbol: &str,
        quantity: f64,
        purchase_price: f64,
    ) -> Result<Holding, StoreError> {
        let holding = sqlx::query_as::<_, Holding>(
            "INSERT INTO holdings (portfolio_id, symbol, quantity, purchase_price) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, portfolio_id, symbol, quantity, purchase_price, created_at",
        )
        .bind(portfolio_id)
        .bind(symbol)
        .bind(quantity)
        .bind(purchase_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(holding)
    }

    /// Delete a holding, proving holding -> portfolio -> owner in one
    /// relational check. A separate lookup-then-delete would leave a window
    /// where the parent portfolio changes hands between the two statements.
    pub async fn delete(&self, user_id: Uuid, holding_id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query(
            "DELETE FROM holdings \
             USING portfolios \
             WHERE holdings.id = $1 \
               AND portfolios.id = holdings.portfolio_id \
               AND portfolios.user_id = $2",
        )
        .bind(holding_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::HoldingNotFound);
        }

        Ok(())
    }
}
