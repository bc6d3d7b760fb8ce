//! Statistics repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::stats::{DemographicCount, GenreCount, YearCount},
};

#[derive(Clone)]
pub struct StatsRepository {
    pool: Pool<Postgres>,
}

impl StatsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn books_by_year(&self) -> AppResult<Vec<YearCount>> {
        let rows = sqlx::query_as::<_, YearCount>("SELECT * FROM library_api.get_books_by_year()")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn member_demographics(&self) -> AppResult<Vec<DemographicCount>> {
        let rows = sqlx::query_as::<_, DemographicCount>(
            "SELECT * FROM library_api.get_member_demographics()",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn books_count_by_genre(&self) -> AppResult<Vec<GenreCount>> {
        let rows = sqlx::query_as::<_, GenreCount>(
            "SELECT * FROM library_api.get_books_count_by_genre()",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
