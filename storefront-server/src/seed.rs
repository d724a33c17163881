//! 演示数据
//!
//! 启动时 (SEED_DEMO_DATA=true) 安装的目录快照和演示账户。数据覆盖
//! 全部可过滤维度：四个价位、跨 4.6 评分线、各配送时间桶 (含 40+ 和
//! 一条故意写坏的时间文本，用于验证无时间窗的降级行为)。

use std::collections::HashMap;

use shared::models::{
    Address, MenuItem, PaymentMethod, PriceRange, Restaurant, UserProfile,
};

fn restaurant(
    id: &str,
    slug: &str,
    name: &str,
    cuisines: &[&str],
    rating: f64,
    delivery_time: &str,
    price_range: PriceRange,
    delivery_fee: f64,
    min_order: f64,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
        cuisines: cuisines.iter().map(|s| s.to_string()).collect(),
        rating,
        delivery_time: delivery_time.to_string(),
        // 时间窗在快照安装时统一解析
        delivery_window: None,
        price_range,
        delivery_fee,
        min_order,
        is_promoted: false,
        discount: None,
    }
}

fn item(
    id: &str,
    restaurant_id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    flags: (bool, bool, bool),
) -> MenuItem {
    let (is_veg, is_popular, is_spicy) = flags;
    MenuItem {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: format!("/images/menu/{id}.jpg"),
        is_veg,
        is_popular,
        is_spicy,
    }
}

/// 演示餐厅列表
pub fn demo_restaurants() -> Vec<Restaurant> {
    let mut list = vec![
        restaurant(
            "r-1",
            "pizza-italia",
            "Pizza Italia",
            &["Italian", "Pizza"],
            4.3,
            "25-35 min",
            PriceRange::Moderate,
            2.99,
            15.0,
        ),
        restaurant(
            "r-2",
            "sakura-house",
            "Sakura House",
            &["Japanese", "Sushi"],
            4.8,
            "30-40 min",
            PriceRange::Premium,
            3.99,
            25.0,
        ),
        restaurant(
            "r-3",
            "burger-barn",
            "Burger Barn",
            &["American", "Burgers"],
            4.5,
            "10-20 min",
            PriceRange::Moderate,
            1.99,
            10.0,
        ),
        restaurant(
            "r-4",
            "taco-loco",
            "Taco Loco",
            &["Mexican"],
            4.1,
            "20-30 min",
            PriceRange::Budget,
            0.99,
            8.0,
        ),
        restaurant(
            "r-5",
            "golden-dragon",
            "Golden Dragon",
            &["Chinese", "Noodles"],
            4.6,
            "30-40 min",
            PriceRange::Moderate,
            2.49,
            12.0,
        ),
        restaurant(
            "r-6",
            "le-jardin",
            "Le Jardin",
            &["French"],
            4.9,
            "40+ min",
            PriceRange::Luxury,
            5.99,
            40.0,
        ),
        restaurant(
            "r-7",
            "spice-route",
            "Spice Route",
            &["Indian", "Curry"],
            4.4,
            "30-40 min",
            PriceRange::Budget,
            1.49,
            10.0,
        ),
        // 故意写坏的时间文本：解析失败 -> 无时间窗 -> 时间过滤一律不命中
        restaurant(
            "r-8",
            "midnight-wok",
            "Midnight Wok",
            &["Fusion", "Asian"],
            3.9,
            "varies",
            PriceRange::Moderate,
            2.99,
            15.0,
        ),
    ];

    list[0].is_promoted = true;
    list[0].discount = Some("20% off orders over $30".to_string());
    list[3].is_promoted = true;
    list
}

/// 演示菜单 (restaurant_id -> 菜单)
pub fn demo_menus() -> HashMap<String, Vec<MenuItem>> {
    let mut menus = HashMap::new();

    menus.insert(
        "r-1".to_string(),
        vec![
            item("m-1-1", "r-1", "Margherita", "Tomato, mozzarella, basil", 12.99, "Pizza", (true, true, false)),
            item("m-1-2", "r-1", "Diavola", "Spicy salami, chili oil", 14.99, "Pizza", (false, true, true)),
            item("m-1-3", "r-1", "Tiramisu", "Mascarpone, espresso, cocoa", 6.49, "Desserts", (true, false, false)),
        ],
    );
    menus.insert(
        "r-2".to_string(),
        vec![
            item("m-2-1", "r-2", "Salmon Nigiri Set", "8 pieces, fresh daily", 18.50, "Sushi", (false, true, false)),
            item("m-2-2", "r-2", "Veggie Maki", "Cucumber, avocado, carrot", 9.99, "Sushi", (true, false, false)),
            item("m-2-3", "r-2", "Spicy Tuna Roll", "Tuna, sriracha mayo", 13.25, "Sushi", (false, true, true)),
        ],
    );
    menus.insert(
        "r-3".to_string(),
        vec![
            item("m-3-1", "r-3", "Classic Cheeseburger", "Beef patty, cheddar, pickles", 10.49, "Burgers", (false, true, false)),
            item("m-3-2", "r-3", "Veggie Stack", "Grilled halloumi, portobello", 9.49, "Burgers", (true, false, false)),
            item("m-3-3", "r-3", "Loaded Fries", "Cheese sauce, jalapeños", 4.99, "Sides", (true, true, true)),
        ],
    );
    menus.insert(
        "r-4".to_string(),
        vec![
            item("m-4-1", "r-4", "Carnitas Tacos", "Slow-cooked pork, salsa verde", 8.99, "Tacos", (false, true, true)),
            item("m-4-2", "r-4", "Bean Burrito", "Black beans, rice, guacamole", 7.49, "Burritos", (true, false, false)),
        ],
    );
    menus.insert(
        "r-5".to_string(),
        vec![
            item("m-5-1", "r-5", "Dan Dan Noodles", "Sichuan pepper, minced pork", 11.99, "Noodles", (false, true, true)),
            item("m-5-2", "r-5", "Mapo Tofu", "Silken tofu, chili bean paste", 10.49, "Mains", (true, false, true)),
            item("m-5-3", "r-5", "Spring Rolls", "Crispy vegetable rolls", 5.49, "Starters", (true, true, false)),
        ],
    );
    menus.insert(
        "r-6".to_string(),
        vec![
            item("m-6-1", "r-6", "Coq au Vin", "Braised chicken, red wine", 28.00, "Mains", (false, true, false)),
            item("m-6-2", "r-6", "Ratatouille", "Provençal vegetables", 19.50, "Mains", (true, false, false)),
            item("m-6-3", "r-6", "Crème Brûlée", "Vanilla custard, caramel", 9.00, "Desserts", (true, true, false)),
        ],
    );
    menus.insert(
        "r-7".to_string(),
        vec![
            item("m-7-1", "r-7", "Butter Chicken", "Creamy tomato gravy", 12.49, "Curry", (false, true, false)),
            item("m-7-2", "r-7", "Chana Masala", "Chickpeas, garam masala", 9.99, "Curry", (true, false, true)),
            item("m-7-3", "r-7", "Garlic Naan", "Tandoor-baked flatbread", 3.49, "Breads", (true, true, false)),
        ],
    );
    menus.insert(
        "r-8".to_string(),
        vec![
            item("m-8-1", "r-8", "Korean Fried Chicken", "Gochujang glaze", 13.99, "Mains", (false, true, true)),
            item("m-8-2", "r-8", "Kimchi Fried Rice", "Fermented kimchi, fried egg", 10.99, "Mains", (false, false, true)),
        ],
    );

    menus
}

/// 演示账户 (两个地址、两种支付方式，各一个默认)
pub fn demo_profile() -> UserProfile {
    UserProfile {
        name: "Alex Chen".to_string(),
        email: "alex.chen@example.com".to_string(),
        phone: "+1 555 0123".to_string(),
        addresses: vec![
            Address {
                id: "addr-1".to_string(),
                label: "Home".to_string(),
                details: "12 Maple Street, Apt 4B".to_string(),
                is_default: true,
            },
            Address {
                id: "addr-2".to_string(),
                label: "Office".to_string(),
                details: "88 Harbor Road, Floor 9".to_string(),
                is_default: false,
            },
        ],
        payment_methods: vec![
            PaymentMethod {
                id: "pay-1".to_string(),
                method_type: "card".to_string(),
                label: "Visa •••• 4242".to_string(),
                is_default: true,
            },
            PaymentMethod {
                id: "pay-2".to_string(),
                method_type: "wallet".to_string(),
                label: "Quickbite Wallet".to_string(),
                is_default: false,
            },
        ],
    }
}
