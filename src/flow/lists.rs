use super::{Outcome, Rejection};
use crate::error::Result;
use crate::store::Store;
use crate::types::{ListView, Product};

/// A list-creation request after form decoding.
#[derive(Debug, Clone)]
pub struct NewList {
    pub name: String,
    pub owner_id: i64,
    pub products: Vec<Product>,
}

/// Inserts the list row and then one product row per entry, in order.
///
/// The inserts are independent statements. If a product insert fails the
/// list row and every product inserted before it stay in the database.
/// Two concurrent requests for the same new name can both get past the
/// existence check; the second `insert_list` then fails on the unique index.
pub fn create_list(store: &dyn Store, list: &NewList) -> Result<Outcome<String>> {
    if store.list_name_exists(&list.name)? {
        tracing::warn!("List '{}' already exists", list.name);
        return Ok(Outcome::Rejected(Rejection::DuplicateListName));
    }

    let list_id = store.insert_list(list.owner_id, &list.name)?;

    for product in &list.products {
        store.insert_product(list_id, product)?;
    }

    tracing::info!(
        "Created list '{}' (id {}) with {} products",
        list.name,
        list_id,
        list.products.len()
    );

    Ok(Outcome::Accepted(list.name.clone()))
}

/// Loads every list with its products: one query for the lists, then one
/// per list.
pub fn fetch_list_views(store: &dyn Store) -> Result<Vec<ListView>> {
    store
        .fetch_all_lists()?
        .into_iter()
        .map(|list| -> Result<ListView> {
            Ok(ListView {
                products: store.fetch_products_for_list(list.id)?,
                list_name: list.name,
            })
        })
        .collect()
}
