//! Aggregate rows returned by the statistics routines

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YearCount {
    pub published_year: i32,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DemographicCount {
    /// Member gender as recorded
    pub demographic: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenreCount {
    pub genre: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_field_names() {
        let year = serde_json::to_value(YearCount { published_year: 1999, count: 3 }).unwrap();
        assert_eq!(year, serde_json::json!({ "publishedYear": 1999, "count": 3 }));

        let demo = serde_json::to_value(DemographicCount { demographic: "Female".into(), count: 8 }).unwrap();
        assert_eq!(demo["demographic"], "Female");

        let genre = serde_json::to_value(GenreCount { genre: "Fantasy".into(), count: 2 }).unwrap();
        assert_eq!(genre["genre"], "Fantasy");
    }
}
