use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::menu::MenuSnapshot;
use serde::Deserialize;

use crate::domain::menu::service;

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub period: Option<String>,
    pub category: Option<String>,
}

/// GET /api/menu?period=&category=
pub async fn get_menu(Query(query): Query<MenuQuery>) -> Result<Json<MenuSnapshot>, StatusCode> {
    match service::snapshot(query.period.as_deref(), query.category.as_deref()) {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => {
            tracing::warn!("Bad menu request: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;
    use contracts::enums::meal_period::MealPeriodId;

    fn query(uri: &'static str) -> Query<MenuQuery> {
        Query::try_from_uri(&Uri::from_static(uri)).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_period_is_bad_request() {
        let result = get_menu(query("/api/menu?period=brunch")).await;
        assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_period_and_category_from_query() {
        let Json(snapshot) = get_menu(query("/api/menu?period=tea&category=Snacks"))
            .await
            .unwrap();

        assert_eq!(snapshot.active_period, MealPeriodId::Tea);
        let names: Vec<_> = snapshot.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Osmania Biscuits", "Bun Maska"]);
    }

    #[tokio::test]
    async fn test_snapshot_serializes_period_code() {
        let Json(snapshot) = get_menu(query("/api/menu?period=dinner")).await.unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["active_period"], "dinner");
    }
}
