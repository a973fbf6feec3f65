use thiserror::Error;

pub mod holdings;
pub mod models;
pub mod portfolios;
pub mod validate;

pub use holdings::HoldingStore;
pub use portfolios::PortfolioStore;

/// Errors from portfolio/holding store access.
///
/// The two `NotFound` variants cover both "no such row" and "row owned by a
/// different user"; every query carries the owning-user predicate, so the
/// store itself cannot tell the cases apart.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("portfolio not found or not owned by requester")]
    PortfolioNotFound,

    #[error("holding not found or not owned by requester")]
    HoldingNotFound,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
