// ABOUTME: Item storage layer using SQLite
// ABOUTME: Handles CRUD operations for todo items with transactional rank shifts

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tokio::sync::Mutex;
use tracing::debug;

use super::ordering::{self, Shift};
use super::types::{Item, ItemCreateInput, ItemUpdateInput};
use tasklist_core::validate_task;
use tasklist_storage::{StorageError, StorageResult};

const SELECT_ITEM_COLUMNS: &str =
    r#"SELECT id, task, is_done, "order", date_created, date_modified FROM todo_item"#;

pub struct ItemStorage {
    pool: SqlitePool,
    /// Serializes mutations so concurrent shift windows never interleave
    write_lock: Mutex<()>,
}

impl ItemStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Mutex::new(()),
        }
    }

    /// All items, lowest rank first
    pub async fn list_items(&self) -> StorageResult<Vec<Item>> {
        debug!("Fetching all items");

        let rows = sqlx::query(&format!(
            r#"{} ORDER BY "order" ASC, id ASC"#,
            SELECT_ITEM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_item).collect()
    }

    pub async fn get_item(&self, item_id: i64) -> StorageResult<Item> {
        debug!("Fetching item: {}", item_id);

        let mut conn = self.pool.acquire().await?;
        fetch_item(&mut conn, item_id)
            .await?
            .ok_or(StorageError::NotFound(item_id))
    }

    pub async fn count_items(&self) -> StorageResult<i64> {
        let mut conn = self.pool.acquire().await?;
        count_items(&mut conn).await
    }

    pub async fn create_item(&self, input: ItemCreateInput) -> StorageResult<Item> {
        validate_task(&input.task)?;

        let _guard = self.write_lock.lock().await;
        let mut tx = self.pool.begin().await?;

        let count = count_items(&mut tx).await?;
        let rank = ordering::insert_rank(input.order, count);
        let now = Utc::now();

        debug!(
            "Creating item at rank {} (requested: {:?}, count: {})",
            rank, input.order, count
        );

        if let Some(shift) = ordering::insert_shift(rank, count) {
            apply_shift(&mut tx, shift, now).await?;
        }

        let item_id = sqlx::query(
            r#"
            INSERT INTO todo_item (task, is_done, "order", date_created, date_modified)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.task)
        .bind(input.is_done.unwrap_or(false))
        .bind(rank)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let item = fetch_item(&mut tx, item_id)
            .await?
            .ok_or(StorageError::NotFound(item_id))?;

        tx.commit().await?;
        Ok(item)
    }

    pub async fn update_item(&self, item_id: i64, input: ItemUpdateInput) -> StorageResult<Item> {
        debug!("Updating item: {}", item_id);

        if let Some(task) = &input.task {
            validate_task(task)?;
        }

        let _guard = self.write_lock.lock().await;
        let mut tx = self.pool.begin().await?;

        let current = fetch_item(&mut tx, item_id)
            .await?
            .ok_or(StorageError::NotFound(item_id))?;

        if input.is_empty() {
            return Ok(current);
        }

        let now = Utc::now();
        let mut order = current.order;

        if let Some(requested) = input.order {
            let count = count_items(&mut tx).await?;
            order = ordering::move_rank(requested, count);

            debug!(
                "Moving item {} from rank {} to {} (requested: {})",
                item_id, current.order, order, requested
            );

            if let Some(shift) = ordering::move_shift(current.order, order) {
                apply_shift(&mut tx, shift, now).await?;
            }
        }

        sqlx::query(
            r#"
            UPDATE todo_item
            SET task = ?, is_done = ?, "order" = ?, date_modified = ?
            WHERE id = ?
            "#,
        )
        .bind(input.task.as_deref().unwrap_or(&current.task))
        .bind(input.is_done.unwrap_or(current.is_done))
        .bind(order)
        .bind(now)
        .bind(item_id)
        .execute(&mut *tx)
        .await?;

        let item = fetch_item(&mut tx, item_id)
            .await?
            .ok_or(StorageError::NotFound(item_id))?;

        tx.commit().await?;
        Ok(item)
    }

    pub async fn delete_item(&self, item_id: i64) -> StorageResult<()> {
        debug!("Deleting item: {}", item_id);

        let _guard = self.write_lock.lock().await;
        let mut tx = self.pool.begin().await?;

        let current = fetch_item(&mut tx, item_id)
            .await?
            .ok_or(StorageError::NotFound(item_id))?;

        sqlx::query("DELETE FROM todo_item WHERE id = ?")
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        apply_shift(&mut tx, ordering::delete_shift(current.order), Utc::now()).await?;

        tx.commit().await?;
        Ok(())
    }
}

async fn fetch_item(conn: &mut SqliteConnection, item_id: i64) -> StorageResult<Option<Item>> {
    let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_ITEM_COLUMNS))
        .bind(item_id)
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(row_to_item).transpose()
}

async fn count_items(conn: &mut SqliteConnection) -> StorageResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM todo_item")
        .fetch_one(&mut *conn)
        .await?;
    Ok(count)
}

/// Displace every rank inside `shift` and touch the rows' modification time.
async fn apply_shift(
    conn: &mut SqliteConnection,
    shift: Shift,
    now: DateTime<Utc>,
) -> StorageResult<u64> {
    let result = sqlx::query(
        r#"
        UPDATE todo_item
        SET "order" = "order" + ?, date_modified = ?
        WHERE "order" >= ? AND (? IS NULL OR "order" <= ?)
        "#,
    )
    .bind(shift.delta)
    .bind(now)
    .bind(shift.lower)
    .bind(shift.upper)
    .bind(shift.upper)
    .execute(&mut *conn)
    .await?;

    debug!(
        "Shifted {} item(s) by {} from rank {} to {:?}",
        result.rows_affected(),
        shift.delta,
        shift.lower,
        shift.upper
    );

    Ok(result.rows_affected())
}

fn row_to_item(row: &SqliteRow) -> StorageResult<Item> {
    Ok(Item {
        id: row.try_get("id")?,
        task: row.try_get("task")?,
        is_done: row.try_get("is_done")?,
        order: row.try_get("order")?,
        date_created: row.try_get("date_created")?,
        date_modified: row.try_get("date_modified")?,
    })
}
