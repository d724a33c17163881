//! 内存数据层
//!
//! 无持久化设计：所有数据保存在进程内存中，重启即重置。
//!
//! # 模块结构
//!
//! - [`catalog`] - 餐厅/菜单目录，快照摄入 (序号单调递增)
//! - [`orders`] - 订单存储、状态流转、角色视图、统计
//! - [`checkout`] - 结算流程 (验证 + 计价 + 下单)
//! - [`profile`] - 演示账户资料 (地址/支付方式)

pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod profile;

pub use catalog::CatalogStore;
pub use checkout::{build_cart, place_order};
pub use orders::{AdminStats, OrderStore, PartnerStats, RiderOrderView, RiderStats};
pub use profile::ProfileStore;
