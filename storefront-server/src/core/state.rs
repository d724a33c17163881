use std::sync::Arc;

use shared::pricing::FeeSchedule;

use crate::core::Config;
use crate::seed;
use crate::store::{CatalogStore, OrderStore, ProfileStore};

/// 服务器状态 - 持有所有内存数据层的共享引用
///
/// ServerState 是店面服务的核心数据结构。使用 Arc 实现浅拷贝，
/// 克隆成本极低，可以安全地注入到每个请求处理器。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<CatalogStore> | 餐厅/菜单目录 (快照摄入) |
/// | orders | Arc<OrderStore> | 订单存储与状态流转 |
/// | profile | Arc<ProfileStore> | 演示账户资料 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 餐厅/菜单目录
    pub catalog: Arc<CatalogStore>,
    /// 订单存储
    pub orders: Arc<OrderStore>,
    /// 用户资料存储
    pub profile: Arc<ProfileStore>,
}

impl ServerState {
    /// 手动构造 (通常使用 [`ServerState::initialize`] 代替)
    pub fn new(
        config: Config,
        catalog: Arc<CatalogStore>,
        orders: Arc<OrderStore>,
        profile: Arc<ProfileStore>,
    ) -> Self {
        Self {
            config,
            catalog,
            orders,
            profile,
        }
    }

    /// 初始化服务器状态
    ///
    /// 构建所有内存数据层；当 `seed_demo_data` 开启时安装演示目录快照
    /// (序号 1) 和演示账户。
    pub async fn initialize(config: &Config) -> Self {
        let catalog = Arc::new(CatalogStore::new());
        let orders = Arc::new(OrderStore::new());

        let profile = if config.seed_demo_data {
            let installed = catalog.install_snapshot(1, seed::demo_restaurants(), seed::demo_menus());
            debug_assert!(installed);
            tracing::info!(
                restaurants = catalog.restaurant_count(),
                "demo catalog snapshot installed"
            );
            Arc::new(ProfileStore::new(seed::demo_profile()))
        } else {
            Arc::new(ProfileStore::default())
        };

        Self::new(config.clone(), catalog, orders, profile)
    }

    /// 结算费用表: 服务费/税率来自配置，配送费由餐厅决定
    pub fn fee_schedule(&self, delivery_fee: f64) -> FeeSchedule {
        FeeSchedule {
            delivery_fee,
            service_fee: self.config.service_fee,
            tax_rate: self.config.tax_rate,
        }
    }
}
