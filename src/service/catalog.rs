use crate::constants::API_NAME;
use crate::models::{Advisor, AdvisorPayload, ListingPayload, ListingView};
use crate::repository::{AdvisorRepository, ListingRepository};

/// Reads and writes for listings and advisors. Writes against an id that does
/// not exist are silent no-ops.
#[derive(Clone)]
pub struct CatalogService {
    listings: ListingRepository,
    advisors: AdvisorRepository,
}

impl CatalogService {
    pub fn new(listings: ListingRepository, advisors: AdvisorRepository) -> Self {
        Self { listings, advisors }
    }

    pub async fn list_listings(&self) -> Result<Vec<ListingView>, sqlx::Error> {
        let rows = self.listings.find_all_with_advisor().await?;
        tracing::debug!("{} Loaded {} listings", API_NAME, rows.len());
        Ok(rows)
    }

    pub async fn create_listing(&self, listing: &ListingPayload) -> Result<i32, sqlx::Error> {
        let id = self.listings.create(listing).await?;
        tracing::info!("{} Created listing {}", API_NAME, id);
        Ok(id)
    }

    pub async fn update_listing(&self, listing: &ListingPayload) -> Result<(), sqlx::Error> {
        let affected = self.listings.update(listing).await?;
        log_write("Updated", "listing", listing.id, affected);
        Ok(())
    }

    pub async fn delete_listing(&self, id: Option<i32>) -> Result<(), sqlx::Error> {
        let affected = self.listings.delete(id).await?;
        log_write("Deleted", "listing", id, affected);
        Ok(())
    }

    pub async fn list_advisors(&self) -> Result<Vec<Advisor>, sqlx::Error> {
        let rows = self.advisors.find_all().await?;
        tracing::debug!("{} Loaded {} advisors", API_NAME, rows.len());
        Ok(rows)
    }

    pub async fn create_advisor(&self, advisor: &AdvisorPayload) -> Result<i32, sqlx::Error> {
        let id = self.advisors.create(advisor).await?;
        tracing::info!("{} Created advisor {}", API_NAME, id);
        Ok(id)
    }

    pub async fn update_advisor(&self, advisor: &AdvisorPayload) -> Result<(), sqlx::Error> {
        let affected = self.advisors.update(advisor).await?;
        log_write("Updated", "advisor", advisor.id, affected);
        Ok(())
    }

    pub async fn delete_advisor(&self, id: Option<i32>) -> Result<(), sqlx::Error> {
        let affected = self.advisors.delete(id).await?;
        log_write("Deleted", "advisor", id, affected);
        Ok(())
    }
}

fn log_write(action: &str, kind: &str, id: Option<i32>, affected: u64) {
    if affected == 0 {
        tracing::info!("{} {} no {}: id {:?} matched nothing", API_NAME, action, kind, id);
    } else {
        tracing::info!("{} {} {} {:?}", API_NAME, action, kind, id);
    }
}
