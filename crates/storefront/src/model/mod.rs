mod notification;
mod order;
mod order_item;
mod product;
mod product_variant;

pub use self::notification::Notification;
pub use self::order::{Order, OrderSource, OrderStatus};
pub use self::order_item::OrderItem;
pub use self::product::Product;
pub use self::product_variant::ProductVariant;
