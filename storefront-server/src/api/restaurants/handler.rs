//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use shared::catalog::{FilterSpec, TimeRange};
use shared::models::{MenuItem, PriceRange, Restaurant};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// 过滤查询参数 (全部可选，缺省即无约束)
///
/// 多选维度用逗号分隔，例如 `?cuisine=Italian,Pizza&price=$,$$&time=10-20,40+`
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantQuery {
    pub search: Option<String>,
    /// 逗号分隔的菜系标签
    pub cuisine: Option<String>,
    /// 逗号分隔的价位符号 ($..$$$$)
    pub price: Option<String>,
    pub min_rating: Option<f64>,
    /// 逗号分隔的时间桶 (如 `10-20` / `40+`)
    pub time: Option<String>,
}

impl RestaurantQuery {
    /// 转换为过滤规格；非法价位符号或时间桶报验证错误
    pub fn into_spec(self) -> AppResult<FilterSpec> {
        let cuisines = self
            .cuisine
            .map(csv)
            .unwrap_or_default();

        let mut price_ranges = Vec::new();
        if let Some(price) = self.price {
            for token in csv(price) {
                let range = PriceRange::parse(&token)
                    .ok_or_else(|| AppError::validation(format!("Unknown price tier {token:?}")))?;
                price_ranges.push(range);
            }
        }

        let mut delivery_time = Vec::new();
        if let Some(time) = self.time {
            for token in csv(time) {
                delivery_time.push(TimeRange::parse(&token)?);
            }
        }

        Ok(FilterSpec {
            cuisines,
            price_ranges,
            min_rating: self.min_rating.unwrap_or(0.0),
            delivery_time,
            search: self.search.unwrap_or_default(),
        })
    }
}

fn csv(value: String) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 餐厅详情响应 (餐厅 + 菜单)
#[derive(Debug, Serialize)]
pub struct RestaurantWithMenu {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub menu: Vec<MenuItem>,
}

/// GET /api/restaurants - 按过滤条件列出餐厅
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RestaurantQuery>,
) -> AppResult<Json<Vec<Restaurant>>> {
    let spec = query.into_spec()?;
    Ok(Json(state.catalog.search(&spec)))
}

/// GET /api/restaurants/{slug} - 餐厅详情 + 菜单
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<RestaurantWithMenu>> {
    let (restaurant, menu) = state
        .catalog
        .restaurant_with_menu(&slug)
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", slug)))?;
    Ok(Json(RestaurantWithMenu { restaurant, menu }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_into_spec() {
        let query = RestaurantQuery {
            search: Some("pizza".into()),
            cuisine: Some("Italian, Pizza".into()),
            price: Some("$,$$".into()),
            min_rating: Some(4.0),
            time: Some("10-20, 40+".into()),
        };
        let spec = query.into_spec().unwrap();
        assert_eq!(spec.cuisines, vec!["Italian", "Pizza"]);
        assert_eq!(spec.price_ranges, vec![PriceRange::Budget, PriceRange::Moderate]);
        assert_eq!(spec.min_rating, 4.0);
        assert_eq!(
            spec.delivery_time,
            vec![TimeRange::closed(10, 20), TimeRange::open(40)]
        );
        assert_eq!(spec.search, "pizza");
    }

    #[test]
    fn test_empty_query_is_no_constraint() {
        let spec = RestaurantQuery::default().into_spec().unwrap();
        assert!(spec.cuisines.is_empty());
        assert!(spec.price_ranges.is_empty());
        assert_eq!(spec.min_rating, 0.0);
        assert!(spec.delivery_time.is_empty());
        assert!(spec.search.is_empty());
    }

    #[test]
    fn test_bad_tokens_are_validation_errors() {
        let query = RestaurantQuery {
            price: Some("$$$$$".into()),
            ..Default::default()
        };
        assert!(query.into_spec().is_err());

        let query = RestaurantQuery {
            time: Some("soon".into()),
            ..Default::default()
        };
        assert!(query.into_spec().is_err());
    }
}
