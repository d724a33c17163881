//! 订单存储与状态流转
//!
//! 所有状态变更都在 DashMap 的条目锁内完成，保证单个订单的流转原子性。
//! 后继状态唯一来源是 `OrderStatus::next()`；各角色只负责自己阶段的
//! 推进：商家推进 PENDING..PREPARING，骑手接单 (READY -> ASSIGNED) 后
//! 推进 ASSIGNED..ON_THE_WAY。取消是链外转换，任何非终态都可触发。

use chrono::Utc;
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{Order, OrderStatus};
use shared::pricing::{to_decimal, to_f64};

use crate::utils::{AppError, AppResult};

/// 骑手订单视图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiderOrderView {
    /// READY 且未被任何骑手认领
    Available,
    /// 本骑手已接、尚未送达的订单
    Active,
    /// 本骑手已送达的订单
    History,
}

impl RiderOrderView {
    /// 解析查询参数 `type=available|active|history`
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "available" => Some(Self::Available),
            "active" => Some(Self::Active),
            "history" => Some(Self::History),
            _ => None,
        }
    }
}

/// 商家统计
#[derive(Debug, Serialize, Deserialize)]
pub struct PartnerStats {
    pub total_orders: u64,
    pub active_orders: u64,
    pub completed_orders: u64,
    pub cancelled_orders: u64,
    /// 已送达订单的营业额
    pub gross_revenue: f64,
    pub average_order_value: f64,
    /// 菜单项数量 (由目录层提供)
    pub menu_size: usize,
}

/// 骑手统计
#[derive(Debug, Serialize, Deserialize)]
pub struct RiderStats {
    pub delivered_orders: u64,
    pub active_orders: u64,
    /// 已送达订单的配送费收入
    pub delivery_earnings: f64,
}

/// 每状态订单数
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u64,
}

/// 按餐厅的营收榜单条目
#[derive(Debug, Serialize, Deserialize)]
pub struct RestaurantRevenue {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub revenue: f64,
}

/// 管理员统计
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_orders: u64,
    pub by_status: Vec<StatusCount>,
    /// 已送达订单的营业额
    pub gross_revenue: f64,
    pub average_order_value: f64,
    /// 营收从高到低
    pub top_restaurants: Vec<RestaurantRevenue>,
}

/// 订单存储 (内存)
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: DashMap<String, Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// 保存新订单 (由结算流程调用，状态必为 PENDING)
    pub fn place(&self, order: Order) {
        tracing::info!(
            order = %order.id,
            restaurant = %order.restaurant_id,
            total = order.total,
            "order placed"
        );
        self.orders.insert(order.id.clone(), order);
    }

    pub fn get(&self, order_id: &str) -> Option<Order> {
        self.orders.get(order_id).map(|o| o.clone())
    }

    /// 最新订单在前 (用于「再来一单」列表)
    pub fn list_recent(&self, limit: usize) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.iter().map(|o| o.clone()).collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders.truncate(limit);
        orders
    }

    /// 某餐厅的订单，最新在前
    pub fn list_for_restaurant(&self, restaurant_id: &str) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.restaurant_id == restaurant_id)
            .map(|o| o.clone())
            .collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    }

    /// 全部订单，可按状态过滤，最新在前 (管理员视图)
    pub fn list_by_status(&self, status: Option<OrderStatus>) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| status.is_none_or(|s| o.status == s))
            .map(|o| o.clone())
            .collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    }

    // ========== Status transitions ==========

    /// 商家推进订单状态 (PENDING/CONFIRMED/PREPARING -> 下一状态)
    ///
    /// READY -> ASSIGNED 不在此处发生，只能通过骑手接单。
    pub fn advance_for_restaurant(&self, order_id: &str, restaurant_id: &str) -> AppResult<Order> {
        let mut order = self
            .orders
            .get_mut(order_id)
            .filter(|o| o.restaurant_id == restaurant_id)
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        if !order.status.is_partner_phase() {
            return Err(AppError::business_rule(format!(
                "Order {} is {} and cannot be advanced by the restaurant",
                order_id, order.status
            )));
        }
        // is_partner_phase 的状态都有后继
        let next = order.status.next().ok_or_else(|| {
            AppError::Internal(format!("partner-phase status {} has no successor", order.status))
        })?;
        Self::transition(&mut order, next);
        Ok(order.clone())
    }

    /// 取消订单 (链外转换，任何非终态均可)
    pub fn cancel(&self, order_id: &str) -> AppResult<Order> {
        let mut order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        if order.status.is_terminal() {
            return Err(AppError::business_rule(format!(
                "Order {} is already {}",
                order_id, order.status
            )));
        }
        Self::transition(&mut order, OrderStatus::Cancelled);
        Ok(order.clone())
    }

    /// 骑手接单: READY 且未分配 -> ASSIGNED + 记录骑手
    pub fn accept(&self, order_id: &str, rider_id: &str) -> AppResult<Order> {
        let mut order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        if order.status != OrderStatus::Ready {
            return Err(AppError::business_rule(format!(
                "Order {} is {} and cannot be accepted",
                order_id, order.status
            )));
        }
        if order.rider_id.is_some() {
            return Err(AppError::conflict(format!(
                "Order {} was already taken by another rider",
                order_id
            )));
        }

        order.rider_id = Some(rider_id.to_string());
        Self::transition(&mut order, OrderStatus::Assigned);
        Ok(order.clone())
    }

    /// 骑手推进自己订单的配送状态 (ASSIGNED/PICKED_UP/ON_THE_WAY -> 下一状态)
    pub fn advance_for_rider(&self, order_id: &str, rider_id: &str) -> AppResult<Order> {
        let mut order = self
            .orders
            .get_mut(order_id)
            .filter(|o| o.rider_id.as_deref() == Some(rider_id))
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        if !order.status.is_rider_phase() {
            return Err(AppError::business_rule(format!(
                "Order {} is {} and cannot be advanced by the rider",
                order_id, order.status
            )));
        }
        let next = order.status.next().ok_or_else(|| {
            AppError::Internal(format!("rider-phase status {} has no successor", order.status))
        })?;
        Self::transition(&mut order, next);
        Ok(order.clone())
    }

    fn transition(order: &mut Order, next: OrderStatus) {
        tracing::info!(order = %order.id, from = %order.status, to = %next, "order status changed");
        order.status = next;
        order.updated_at = Utc::now();
    }

    // ========== Rider views ==========

    /// 骑手订单视图，最新在前
    pub fn rider_orders(&self, rider_id: &str, view: RiderOrderView) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| match view {
                RiderOrderView::Available => {
                    o.status == OrderStatus::Ready && o.rider_id.is_none()
                }
                RiderOrderView::Active => {
                    o.rider_id.as_deref() == Some(rider_id) && o.status.is_rider_phase()
                }
                RiderOrderView::History => {
                    o.rider_id.as_deref() == Some(rider_id)
                        && o.status == OrderStatus::Delivered
                }
            })
            .map(|o| o.clone())
            .collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    }

    // ========== Statistics ==========

    /// 商家统计 (菜单项数量由调用方从目录层取得)
    pub fn partner_stats(&self, restaurant_id: &str, menu_size: usize) -> PartnerStats {
        let mut total = 0u64;
        let mut active = 0u64;
        let mut completed = 0u64;
        let mut cancelled = 0u64;
        let mut revenue = Decimal::ZERO;

        for order in self.orders.iter() {
            if order.restaurant_id != restaurant_id {
                continue;
            }
            total += 1;
            match order.status {
                OrderStatus::Delivered => {
                    completed += 1;
                    revenue += to_decimal(order.total);
                }
                OrderStatus::Cancelled => cancelled += 1,
                _ => active += 1,
            }
        }

        let average = if completed > 0 {
            revenue / Decimal::from(completed)
        } else {
            Decimal::ZERO
        };

        PartnerStats {
            total_orders: total,
            active_orders: active,
            completed_orders: completed,
            cancelled_orders: cancelled,
            gross_revenue: to_f64(revenue),
            average_order_value: to_f64(average),
            menu_size,
        }
    }

    /// 骑手统计
    pub fn rider_stats(&self, rider_id: &str) -> RiderStats {
        let mut delivered = 0u64;
        let mut active = 0u64;
        let mut earnings = Decimal::ZERO;

        for order in self.orders.iter() {
            if order.rider_id.as_deref() != Some(rider_id) {
                continue;
            }
            match order.status {
                OrderStatus::Delivered => {
                    delivered += 1;
                    earnings += to_decimal(order.delivery_fee);
                }
                s if s.is_rider_phase() => active += 1,
                _ => {}
            }
        }

        RiderStats {
            delivered_orders: delivered,
            active_orders: active,
            delivery_earnings: to_f64(earnings),
        }
    }

    /// 管理员统计
    pub fn admin_stats(&self) -> AdminStats {
        use std::collections::HashMap;

        let mut by_status: HashMap<OrderStatus, u64> = HashMap::new();
        let mut per_restaurant: HashMap<String, (String, Decimal)> = HashMap::new();
        let mut total = 0u64;
        let mut delivered = 0u64;
        let mut revenue = Decimal::ZERO;

        for order in self.orders.iter() {
            total += 1;
            *by_status.entry(order.status).or_insert(0) += 1;
            if order.status == OrderStatus::Delivered {
                delivered += 1;
                let amount = to_decimal(order.total);
                revenue += amount;
                per_restaurant
                    .entry(order.restaurant_id.clone())
                    .or_insert_with(|| (order.restaurant_name.clone(), Decimal::ZERO))
                    .1 += amount;
            }
        }

        let mut by_status: Vec<StatusCount> = by_status
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();
        by_status.sort_by_key(|entry| entry.status.as_str());

        let mut top_restaurants: Vec<RestaurantRevenue> = per_restaurant
            .into_iter()
            .map(|(restaurant_id, (restaurant_name, revenue))| RestaurantRevenue {
                restaurant_id,
                restaurant_name,
                revenue: to_f64(revenue),
            })
            .collect();
        top_restaurants.sort_by(|a, b| {
            b.revenue
                .partial_cmp(&a.revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let average = if delivered > 0 {
            revenue / Decimal::from(delivered)
        } else {
            Decimal::ZERO
        };

        AdminStats {
            total_orders: total,
            by_status,
            gross_revenue: to_f64(revenue),
            average_order_value: to_f64(average),
            top_restaurants,
        }
    }
}
