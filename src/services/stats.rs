//! Statistics service feeding the client's charts

use crate::{
    error::AppResult,
    models::stats::{DemographicCount, GenreCount, YearCount},
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn books_by_year(&self) -> AppResult<Vec<YearCount>> {
        self.repository.stats.books_by_year().await
    }

    pub async fn member_demographics(&self) -> AppResult<Vec<DemographicCount>> {
        self.repository.stats.member_demographics().await
    }

    pub async fn books_count_by_genre(&self) -> AppResult<Vec<GenreCount>> {
        self.repository.stats.books_count_by_genre().await
    }
}
