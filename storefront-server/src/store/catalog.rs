//! 目录存储
//!
//! 餐厅列表 (保持插入顺序) + 每家餐厅的菜单。目录数据由外部目录服务
//! 以快照形式推送；快照序号单调递增，过期快照直接丢弃，避免乱序
//! 刷新覆盖较新数据。

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use uuid::Uuid;

use shared::catalog::FilterSpec;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, Restaurant, RestaurantProfileUpdate};

use crate::utils::{AppError, AppResult};

#[derive(Debug, Default)]
struct CatalogInner {
    /// 插入顺序即展示顺序
    restaurants: Vec<Restaurant>,
    /// restaurant_id -> 菜单
    menus: HashMap<String, Vec<MenuItem>>,
}

/// 餐厅/菜单目录
#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: RwLock<CatalogInner>,
    /// 最近安装的快照序号 (0 = 尚未安装)
    last_snapshot_seq: AtomicU64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 安装目录快照
    ///
    /// 只有当 `seq` 严格大于上一次安装的序号时才整体替换目录；
    /// 过期快照被忽略并记录日志。餐厅的数字配送时间窗在此处
    /// 解析一次，过滤时不再解析字符串。
    pub fn install_snapshot(
        &self,
        seq: u64,
        mut restaurants: Vec<Restaurant>,
        menus: HashMap<String, Vec<MenuItem>>,
    ) -> bool {
        let mut inner = self.inner.write();
        let last = self.last_snapshot_seq.load(Ordering::Acquire);
        if seq <= last {
            tracing::warn!(seq, last, "stale catalog snapshot dropped");
            return false;
        }

        for restaurant in &mut restaurants {
            restaurant.reparse_delivery_window();
        }

        inner.restaurants = restaurants;
        inner.menus = menus;
        self.last_snapshot_seq.store(seq, Ordering::Release);
        tracing::info!(seq, restaurants = inner.restaurants.len(), "catalog snapshot installed");
        true
    }

    /// 最近安装的快照序号
    pub fn snapshot_seq(&self) -> u64 {
        self.last_snapshot_seq.load(Ordering::Acquire)
    }

    pub fn restaurant_count(&self) -> usize {
        self.inner.read().restaurants.len()
    }

    /// 全部餐厅 (插入顺序)
    pub fn restaurants(&self) -> Vec<Restaurant> {
        self.inner.read().restaurants.clone()
    }

    pub fn get(&self, id: &str) -> Option<Restaurant> {
        self.inner
            .read()
            .restaurants
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<Restaurant> {
        self.inner
            .read()
            .restaurants
            .iter()
            .find(|r| r.slug == slug)
            .cloned()
    }

    /// 按过滤条件检索餐厅 (委托给 shared 的唯一过滤实现)
    pub fn search(&self, spec: &FilterSpec) -> Vec<Restaurant> {
        let inner = self.inner.read();
        shared::filter_restaurants(&inner.restaurants, spec)
    }

    /// 某餐厅的菜单 (餐厅不存在时为空)
    pub fn menu(&self, restaurant_id: &str) -> Vec<MenuItem> {
        self.inner
            .read()
            .menus
            .get(restaurant_id)
            .cloned()
            .unwrap_or_default()
    }

    /// 餐厅 + 菜单 (按 slug，顾客详情页)
    pub fn restaurant_with_menu(&self, slug: &str) -> Option<(Restaurant, Vec<MenuItem>)> {
        let inner = self.inner.read();
        let restaurant = inner.restaurants.iter().find(|r| r.slug == slug)?.clone();
        let menu = inner.menus.get(&restaurant.id).cloned().unwrap_or_default();
        Some((restaurant, menu))
    }

    // ========== Partner menu CRUD ==========

    /// 新增菜单项
    pub fn add_item(&self, payload: MenuItemCreate) -> AppResult<MenuItem> {
        if payload.name.trim().is_empty() {
            return Err(AppError::validation("Menu item name is required"));
        }
        if !payload.price.is_finite() || payload.price < 0.0 {
            return Err(AppError::validation("Menu item price must be non-negative"));
        }

        let mut inner = self.inner.write();
        if !inner.restaurants.iter().any(|r| r.id == payload.restaurant_id) {
            return Err(AppError::not_found(format!(
                "Restaurant {} not found",
                payload.restaurant_id
            )));
        }

        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            restaurant_id: payload.restaurant_id.clone(),
            name: payload.name,
            description: payload.description.unwrap_or_default(),
            price: payload.price,
            category: payload.category,
            image: payload.image.unwrap_or_default(),
            is_veg: payload.is_veg.unwrap_or(false),
            is_popular: payload.is_popular.unwrap_or(false),
            is_spicy: payload.is_spicy.unwrap_or(false),
        };

        inner
            .menus
            .entry(payload.restaurant_id)
            .or_default()
            .push(item.clone());
        tracing::info!(item = %item.id, restaurant = %item.restaurant_id, "menu item added");
        Ok(item)
    }

    /// 更新菜单项
    pub fn update_item(&self, item_id: &str, payload: MenuItemUpdate) -> AppResult<MenuItem> {
        if let Some(price) = payload.price
            && (!price.is_finite() || price < 0.0)
        {
            return Err(AppError::validation("Menu item price must be non-negative"));
        }

        let mut inner = self.inner.write();
        let item = inner
            .menus
            .values_mut()
            .flat_map(|menu| menu.iter_mut())
            .find(|item| item.id == item_id)
            .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", item_id)))?;

        if let Some(name) = payload.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Menu item name is required"));
            }
            item.name = name;
        }
        if let Some(description) = payload.description {
            item.description = description;
        }
        if let Some(price) = payload.price {
            item.price = price;
        }
        if let Some(category) = payload.category {
            item.category = category;
        }
        if let Some(image) = payload.image {
            item.image = image;
        }
        if let Some(is_veg) = payload.is_veg {
            item.is_veg = is_veg;
        }
        if let Some(is_popular) = payload.is_popular {
            item.is_popular = is_popular;
        }
        if let Some(is_spicy) = payload.is_spicy {
            item.is_spicy = is_spicy;
        }

        Ok(item.clone())
    }

    /// 删除菜单项
    pub fn remove_item(&self, item_id: &str) -> AppResult<()> {
        let mut inner = self.inner.write();
        for menu in inner.menus.values_mut() {
            if let Some(idx) = menu.iter().position(|item| item.id == item_id) {
                menu.remove(idx);
                tracing::info!(item = %item_id, "menu item removed");
                return Ok(());
            }
        }
        Err(AppError::not_found(format!("Menu item {} not found", item_id)))
    }

    // ========== Partner profile ==========

    /// 更新餐厅资料
    ///
    /// 修改 `delivery_time` 时重新解析数字时间窗；评分必须在 [0, 5]。
    pub fn update_profile(
        &self,
        restaurant_id: &str,
        payload: RestaurantProfileUpdate,
    ) -> AppResult<Restaurant> {
        if let Some(rating) = payload.rating
            && !(0.0..=5.0).contains(&rating)
        {
            return Err(AppError::validation("Rating must be between 0 and 5"));
        }
        if let Some(cuisines) = &payload.cuisines
            && cuisines.iter().all(|c| c.trim().is_empty())
        {
            return Err(AppError::validation("At least one cuisine tag is required"));
        }

        let mut inner = self.inner.write();
        let restaurant = inner
            .restaurants
            .iter_mut()
            .find(|r| r.id == restaurant_id)
            .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", restaurant_id)))?;

        if let Some(name) = payload.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Restaurant name is required"));
            }
            restaurant.name = name;
        }
        if let Some(cuisines) = payload.cuisines {
            restaurant.cuisines = cuisines;
        }
        if let Some(rating) = payload.rating {
            restaurant.rating = rating;
        }
        if let Some(delivery_time) = payload.delivery_time {
            restaurant.delivery_time = delivery_time;
            restaurant.reparse_delivery_window();
        }
        if let Some(price_range) = payload.price_range {
            restaurant.price_range = price_range;
        }
        if let Some(delivery_fee) = payload.delivery_fee {
            if !delivery_fee.is_finite() || delivery_fee < 0.0 {
                return Err(AppError::validation("Delivery fee must be non-negative"));
            }
            restaurant.delivery_fee = delivery_fee;
        }
        if let Some(min_order) = payload.min_order {
            restaurant.min_order = min_order;
        }
        if let Some(is_promoted) = payload.is_promoted {
            restaurant.is_promoted = is_promoted;
        }
        if let Some(discount) = payload.discount {
            restaurant.discount = if discount.is_empty() { None } else { Some(discount) };
        }

        tracing::info!(restaurant = %restaurant_id, "restaurant profile updated");
        Ok(restaurant.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use shared::catalog::TimeRange;

    fn seeded() -> CatalogStore {
        let store = CatalogStore::new();
        assert!(store.install_snapshot(1, seed::demo_restaurants(), seed::demo_menus()));
        store
    }

    #[test]
    fn test_stale_snapshot_is_dropped() {
        let store = seeded();
        let before = store.restaurant_count();

        // Same sequence: dropped
        assert!(!store.install_snapshot(1, vec![], HashMap::new()));
        // Older sequence: dropped
        assert!(!store.install_snapshot(0, vec![], HashMap::new()));
        assert_eq!(store.restaurant_count(), before);
        assert_eq!(store.snapshot_seq(), 1);

        // Newer sequence replaces the catalog wholesale
        assert!(store.install_snapshot(2, vec![], HashMap::new()));
        assert_eq!(store.restaurant_count(), 0);
        assert_eq!(store.snapshot_seq(), 2);
    }

    #[test]
    fn test_snapshot_parses_delivery_windows() {
        let store = seeded();
        let parsed = store
            .restaurants()
            .iter()
            .filter(|r| r.delivery_window.is_some())
            .count();
        // The seed contains exactly one malformed-window specimen
        assert_eq!(parsed, store.restaurant_count() - 1);
    }

    #[test]
    fn test_lookup_by_slug() {
        let store = seeded();
        let (restaurant, menu) = store.restaurant_with_menu("pizza-italia").unwrap();
        assert_eq!(restaurant.name, "Pizza Italia");
        assert!(!menu.is_empty());
        assert!(store.restaurant_with_menu("nowhere").is_none());
    }

    #[test]
    fn test_menu_crud() {
        let store = seeded();
        let restaurant = &store.restaurants()[0];

        let item = store
            .add_item(MenuItemCreate {
                restaurant_id: restaurant.id.clone(),
                name: "Test Dish".into(),
                description: None,
                price: 9.99,
                category: "Mains".into(),
                image: None,
                is_veg: Some(true),
                is_popular: None,
                is_spicy: None,
            })
            .unwrap();
        assert!(store.menu(&restaurant.id).iter().any(|i| i.id == item.id));

        let updated = store
            .update_item(
                &item.id,
                MenuItemUpdate {
                    price: Some(11.49),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.price, 11.49);

        store.remove_item(&item.id).unwrap();
        assert!(store.remove_item(&item.id).is_err());
    }

    #[test]
    fn test_add_item_validation() {
        let store = seeded();
        let restaurant = &store.restaurants()[0];
        let base = MenuItemCreate {
            restaurant_id: restaurant.id.clone(),
            name: "  ".into(),
            description: None,
            price: 9.99,
            category: "Mains".into(),
            image: None,
            is_veg: None,
            is_popular: None,
            is_spicy: None,
        };
        assert!(store.add_item(base.clone()).is_err());

        let negative = MenuItemCreate {
            name: "Dish".into(),
            price: -1.0,
            ..base.clone()
        };
        assert!(store.add_item(negative).is_err());

        let orphan = MenuItemCreate {
            name: "Dish".into(),
            restaurant_id: "ghost".into(),
            ..base
        };
        assert!(store.add_item(orphan).is_err());
    }

    #[test]
    fn test_update_profile_reparses_window() {
        let store = seeded();
        let restaurant = &store.restaurants()[0];

        let updated = store
            .update_profile(
                &restaurant.id,
                RestaurantProfileUpdate {
                    delivery_time: Some("40+ min".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.delivery_window, Some(TimeRange::open(40)));

        // Malformed text degrades to no window instead of erroring
        let updated = store
            .update_profile(
                &restaurant.id,
                RestaurantProfileUpdate {
                    delivery_time: Some("asap".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.delivery_window, None);
    }

    #[test]
    fn test_update_profile_rating_bounds() {
        let store = seeded();
        let restaurant = &store.restaurants()[0];
        let result = store.update_profile(
            &restaurant.id,
            RestaurantProfileUpdate {
                rating: Some(5.5),
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }
}
