use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    domain::requests::order::{CreateOrderItemRecordRequest, CreateOrderRecordRequest},
    model::{Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

const ORDER_COLUMNS: &str = "order_id, reference, user_id, cashier_id, source, status, \
     subtotal, shipping_fee, discount_amount, total_amount, payment_method, \
     recipient_name, recipient_phone, shipping_address, province, created_at, updated_at";

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    /// Decrements the authoritative stock row for one cart line, inside the
    /// checkout transaction. Zero rows affected IS the insufficient-stock
    /// signal; the follow-up read only exists to name the item and its
    /// availability in the rejection.
    async fn reserve_stock(
        tx: &mut Transaction<'_, Postgres>,
        item: &CreateOrderItemRecordRequest,
    ) -> Result<(), RepositoryError> {
        match item.variant_id {
            Some(variant_id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE product_variants
                    SET stock_quantity = stock_quantity - $1,
                        updated_at = current_timestamp
                    WHERE variant_id = $2
                      AND product_id = $3
                      AND stock_quantity >= $1
                    "#,
                )
                .bind(item.quantity)
                .bind(variant_id)
                .bind(item.product_id)
                .execute(&mut **tx)
                .await
                .map_err(RepositoryError::from)?;

                if result.rows_affected() == 0 {
                    let row = sqlx::query_as::<_, (String, String, i32)>(
                        r#"
                        SELECT p.name, v.name, v.stock_quantity
                        FROM product_variants v
                        JOIN products p ON p.product_id = v.product_id
                        WHERE v.variant_id = $1 AND v.product_id = $2
                        "#,
                    )
                    .bind(variant_id)
                    .bind(item.product_id)
                    .fetch_optional(&mut **tx)
                    .await
                    .map_err(RepositoryError::from)?;

                    return Err(match row {
                        Some((product, variant, available)) => {
                            RepositoryError::InsufficientStock {
                                name: format!("{product} ({variant})"),
                                requested: item.quantity,
                                available,
                            }
                        }
                        None => RepositoryError::NotFound,
                    });
                }
            }
            None => {
                // has_variants = FALSE in the predicate keeps a variant
                // product from ever being sold against its own stock row
                let result = sqlx::query(
                    r#"
                    UPDATE products
                    SET stock_quantity = stock_quantity - $1,
                        updated_at = current_timestamp
                    WHERE product_id = $2
                      AND has_variants = FALSE
                      AND stock_quantity >= $1
                    "#,
                )
                .bind(item.quantity)
                .bind(item.product_id)
                .execute(&mut **tx)
                .await
                .map_err(RepositoryError::from)?;

                if result.rows_affected() == 0 {
                    let row = sqlx::query_as::<_, (String, i32, bool)>(
                        "SELECT name, stock_quantity, has_variants FROM products WHERE product_id = $1",
                    )
                    .bind(item.product_id)
                    .fetch_optional(&mut **tx)
                    .await
                    .map_err(RepositoryError::from)?;

                    return Err(match row {
                        None => RepositoryError::NotFound,
                        Some((name, _, true)) => RepositoryError::VariantRequired(name),
                        Some((name, available, false)) => RepositoryError::InsufficientStock {
                            name,
                            requested: item.quantity,
                            available,
                        },
                    });
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_checkout(
        &self,
        order: &CreateOrderRecordRequest,
        items: &[CreateOrderItemRecordRequest],
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let created = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders (reference, user_id, cashier_id, source, status,
                subtotal, shipping_fee, discount_amount, total_amount, payment_method,
                recipient_name, recipient_phone, shipping_address, province,
                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                current_timestamp, current_timestamp)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(&order.reference)
        .bind(order.user_id)
        .bind(order.cashier_id)
        .bind(order.source)
        .bind(order.status)
        .bind(order.subtotal)
        .bind(order.shipping_fee)
        .bind(order.discount_amount)
        .bind(order.total_amount)
        .bind(&order.payment_method)
        .bind(&order.recipient_name)
        .bind(&order.recipient_phone)
        .bind(&order.shipping_address)
        .bind(&order.province)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order {}: {:?}", order.reference, err);
            RepositoryError::from(err)
        })?;

        let mut created_items = Vec::with_capacity(items.len());

        for item in items {
            let row = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items (order_id, product_id, variant_id, product_name,
                    quantity, price_at_purchase, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, current_timestamp)
                RETURNING order_item_id, order_id, product_id, variant_id, product_name,
                    quantity, price_at_purchase, created_at
                "#,
            )
            .bind(created.order_id)
            .bind(item.product_id)
            .bind(item.variant_id)
            .bind(&item.product_name)
            .bind(item.quantity)
            .bind(item.price_at_purchase)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create order item for order {}: {:?}",
                    created.order_id, err
                );
                RepositoryError::from(err)
            })?;

            Self::reserve_stock(&mut tx, item).await?;

            created_items.push(row);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order {} ({}) with {} items",
            created.order_id,
            created.reference,
            created_items.len()
        );
        Ok((created, created_items))
    }

    async fn update_status(
        &self,
        order_id: i32,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let updated = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET status = $3,
                updated_at = current_timestamp
            WHERE order_id = $1 AND status = $2
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(order_id)
        .bind(from)
        .bind(to)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update status of order {}: {:?}", order_id, err);
            RepositoryError::from(err)
        })?;

        match updated {
            Some(order) => {
                info!("🔄 Order {} moved from {} to {}", order_id, from, to);
                Ok(order)
            }
            None => Err(RepositoryError::Conflict(format!(
                "Order {order_id} is no longer in status {from}"
            ))),
        }
    }
}
