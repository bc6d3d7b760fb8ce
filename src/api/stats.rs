//! Statistics endpoints used by the client's charts

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::stats::{DemographicCount, GenreCount, YearCount},
    AppState,
};

/// Number of books per published year
#[utoipa::path(
    get,
    path = "/books/publishedYear",
    tag = "stats",
    responses(
        (status = 200, description = "Book counts by year", body = Vec<YearCount>)
    )
)]
pub async fn get_books_by_published_year(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<YearCount>>> {
    let rows = state.services.stats.books_by_year().await?;
    Ok(Json(rows))
}

/// Member counts per demographic group
#[utoipa::path(
    get,
    path = "/members/demographics",
    tag = "stats",
    responses(
        (status = 200, description = "Member demographics", body = Vec<DemographicCount>)
    )
)]
pub async fn get_member_demographics(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DemographicCount>>> {
    let rows = state.services.stats.member_demographics().await?;
    Ok(Json(rows))
}

/// Number of books per genre
#[utoipa::path(
    get,
    path = "/books/genreCount",
    tag = "stats",
    responses(
        (status = 200, description = "Book counts by genre", body = Vec<GenreCount>)
    )
)]
pub async fn get_books_count_by_genre(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<GenreCount>>> {
    let rows = state.services.stats.books_count_by_genre().await?;
    Ok(Json(rows))
}
