//! 结算流程
//!
//! 验证 -> 按服务端菜单定价 -> 计算合计 -> 创建 PENDING 订单 -> 清空购物车。
//! 价格永远取自服务端菜单，客户端只提交菜单项 ID 和数量。

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::cart::Cart;
use shared::models::{CheckoutLine, CheckoutRequest, Order, OrderItem, OrderStatus};
use shared::pricing::{calculate_totals, to_decimal, to_f64};

use crate::core::ServerState;
use crate::store::CatalogStore;
use crate::utils::{AppError, AppResult};

/// 根据请求行构建服务端购物车
///
/// 重复的菜单项 ID 合并为一行；数量为 0 的行拒绝；未知菜单项报 404。
pub fn build_cart(
    catalog: &CatalogStore,
    restaurant_id: &str,
    lines: &[CheckoutLine],
) -> AppResult<Cart> {
    if catalog.get(restaurant_id).is_none() {
        return Err(AppError::not_found(format!(
            "Restaurant {} not found",
            restaurant_id
        )));
    }
    let menu = catalog.menu(restaurant_id);
    let mut cart = Cart::new();

    // 先合并重复行，保持首次出现的顺序
    let mut merged: Vec<(String, u32)> = Vec::new();
    for line in lines {
        if line.quantity == 0 {
            return Err(AppError::validation(format!(
                "Quantity for item {} must be at least 1",
                line.item_id
            )));
        }
        match merged.iter_mut().find(|(id, _)| *id == line.item_id) {
            Some((_, qty)) => *qty += line.quantity,
            None => merged.push((line.item_id.clone(), line.quantity)),
        }
    }

    for (item_id, quantity) in merged {
        let item = menu
            .iter()
            .find(|item| item.id == item_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", item_id)))?;
        cart.add_item(item);
        cart.update_quantity(&item_id, quantity)?;
    }

    Ok(cart)
}

/// 下单
///
/// 成功后清空购物车并返回创建的订单。三个拦截条件：
/// 空地址、空支付方式、空购物车。
pub fn place_order(
    state: &ServerState,
    cart: &mut Cart,
    req: &CheckoutRequest,
) -> AppResult<Order> {
    if req.delivery_address.trim().is_empty() {
        return Err(AppError::validation("Delivery address is required"));
    }
    if req.payment_method.trim().is_empty() {
        return Err(AppError::validation("Payment method is required"));
    }
    if cart.is_empty() {
        return Err(AppError::validation("Cart is empty"));
    }

    let restaurant = state
        .catalog
        .get(&req.restaurant_id)
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", req.restaurant_id)))?;

    let fees = state.fee_schedule(restaurant.delivery_fee);
    let totals = calculate_totals(cart.lines(), &fees);

    let items: Vec<OrderItem> = cart
        .lines()
        .iter()
        .map(|line| OrderItem {
            item_id: line.item.id.clone(),
            name: line.item.name.clone(),
            price: line.item.price,
            quantity: line.quantity,
            line_total: to_f64(to_decimal(line.item.price) * Decimal::from(line.quantity)),
        })
        .collect();

    let now = Utc::now();
    let order = Order {
        id: Uuid::new_v4().to_string(),
        customer_name: req.customer_name.clone(),
        delivery_address: req.delivery_address.trim().to_string(),
        payment_method: req.payment_method.clone(),
        restaurant_id: restaurant.id.clone(),
        restaurant_name: restaurant.name.clone(),
        items,
        subtotal: totals.subtotal,
        delivery_fee: totals.delivery_fee,
        service_fee: totals.service_fee,
        tax: totals.tax,
        total: totals.total,
        status: OrderStatus::Pending,
        rider_id: None,
        placed_at: now,
        updated_at: now,
    };

    state.orders.place(order.clone());
    cart.clear();
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, ServerState};

    async fn test_state() -> ServerState {
        let mut config = Config::with_overrides(0, true);
        config.service_fee = 1.50;
        config.tax_rate = 0.05;
        ServerState::initialize(&config).await
    }

    fn request(restaurant_id: &str, items: Vec<CheckoutLine>) -> CheckoutRequest {
        CheckoutRequest {
            restaurant_id: restaurant_id.to_string(),
            customer_name: "Alex".into(),
            delivery_address: "1 Main St".into(),
            payment_method: "card".into(),
            items,
        }
    }

    #[tokio::test]
    async fn test_checkout_clears_cart_and_prices_from_menu() {
        let state = test_state().await;
        let restaurant = &state.catalog.restaurants()[0];
        let menu = state.catalog.menu(&restaurant.id);

        let lines = vec![
            CheckoutLine {
                item_id: menu[0].id.clone(),
                quantity: 2,
            },
            CheckoutLine {
                item_id: menu[1].id.clone(),
                quantity: 1,
            },
        ];
        let req = request(&restaurant.id, lines);
        let mut cart = build_cart(&state.catalog, &restaurant.id, &req.items).unwrap();
        assert_eq!(cart.item_count(), 3);

        let order = place_order(&state, &mut cart, &req).unwrap();
        assert!(cart.is_empty());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].price, menu[0].price);
        assert_eq!(order.delivery_fee, restaurant.delivery_fee);
        assert_eq!(state.orders.get(&order.id).unwrap().id, order.id);
    }

    #[tokio::test]
    async fn test_duplicate_lines_merge() {
        let state = test_state().await;
        let restaurant = &state.catalog.restaurants()[0];
        let menu = state.catalog.menu(&restaurant.id);

        let lines = vec![
            CheckoutLine {
                item_id: menu[0].id.clone(),
                quantity: 1,
            },
            CheckoutLine {
                item_id: menu[0].id.clone(),
                quantity: 2,
            },
        ];
        let cart = build_cart(&state.catalog, &restaurant.id, &lines).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_checkout_validation_blocks() {
        let state = test_state().await;
        let restaurant = &state.catalog.restaurants()[0];
        let menu = state.catalog.menu(&restaurant.id);
        let line = CheckoutLine {
            item_id: menu[0].id.clone(),
            quantity: 1,
        };

        // Empty address
        let mut req = request(&restaurant.id, vec![line.clone()]);
        req.delivery_address = "   ".into();
        let mut cart = build_cart(&state.catalog, &restaurant.id, &req.items).unwrap();
        assert!(place_order(&state, &mut cart, &req).is_err());
        // Blocked checkout leaves the cart untouched
        assert!(!cart.is_empty());

        // Empty payment method
        let mut req = request(&restaurant.id, vec![line.clone()]);
        req.payment_method = String::new();
        let mut cart = build_cart(&state.catalog, &restaurant.id, &req.items).unwrap();
        assert!(place_order(&state, &mut cart, &req).is_err());

        // Empty cart
        let req = request(&restaurant.id, vec![]);
        let mut cart = Cart::new();
        assert!(place_order(&state, &mut cart, &req).is_err());

        // Zero quantity
        let mut bad = line.clone();
        bad.quantity = 0;
        assert!(build_cart(&state.catalog, &restaurant.id, &[bad]).is_err());

        // Unknown menu item
        let ghost = CheckoutLine {
            item_id: "ghost".into(),
            quantity: 1,
        };
        assert!(build_cart(&state.catalog, &restaurant.id, &[ghost]).is_err());
    }

    #[tokio::test]
    async fn test_checkout_applies_configured_tax() {
        let state = test_state().await;
        let restaurant = &state.catalog.restaurants()[0];
        let menu = state.catalog.menu(&restaurant.id);

        let req = request(
            &restaurant.id,
            vec![CheckoutLine {
                item_id: menu[0].id.clone(),
                quantity: 1,
            }],
        );
        let mut cart = build_cart(&state.catalog, &restaurant.id, &req.items).unwrap();
        let order = place_order(&state, &mut cart, &req).unwrap();

        let expected_tax = to_f64(to_decimal(order.subtotal) * to_decimal(0.05));
        assert_eq!(order.tax, expected_tax);
        assert_eq!(order.service_fee, 1.50);
    }
}
