//! Quickbite Storefront Server - 外卖商城后端服务
//!
//! # 架构概述
//!
//! 本模块是 Storefront Server 的主入口，提供以下核心功能：
//!
//! - **目录** (`store::catalog`): 餐厅/菜单内存目录，支持快照摄入
//! - **订单** (`store::orders`): 下单、状态流转、骑手接单、统计
//! - **用户资料** (`store::profile`): 地址/支付方式管理
//! - **HTTP API** (`api`): RESTful API 接口 (顾客/商家/骑手/管理员)
//!
//! # 模块结构
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── store/         # 内存数据层 (无持久化)
//! ├── seed/          # 演示数据
//! └── utils/         # 错误、日志
//! ```
//!
//! 纯计算逻辑 (过滤、购物车、金额、状态机) 全部位于 `shared` crate，
//! 本 crate 只负责 HTTP 外壳和内存数据层。

pub mod api;
pub mod core;
pub mod seed;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use store::{CatalogStore, OrderStore, ProfileStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ____        _      __   __    _ __
  / __ \__  __(_)____/ /__/ /_  (_) /____
 / / / / / / / / ___/ //_/ __ \/ / __/ _ \
/ /_/ / /_/ / / /__/ ,< / /_/ / / /_/  __/
\___\_\__,_/_/\___/_/|_/_.___/_/\__/\___/
    "#
    );
}

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在 [`Config::from_env`] 之前调用，保证 `.env` 中的变量生效。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
