use crate::error::{Error, Result};
use crate::server::dto::CreateListForm;
use crate::types::Product;

/// Zips the parallel product arrays into products.
///
/// Arrays of different lengths and non-integer quantities are rejected
/// here, before anything is written.
pub fn products_from_form(form: &CreateListForm) -> Result<Vec<Product>> {
    let count = form.products.len();
    if form.quantities.len() != count || form.stores.len() != count {
        return Err(Error::validation(format!(
            "Mismatched product rows: {} products, {} quantities, {} stores",
            count,
            form.quantities.len(),
            form.stores.len()
        )));
    }

    form.products
        .iter()
        .zip(&form.quantities)
        .zip(&form.stores)
        .map(|((name, quantity), store)| -> Result<Product> {
            let quantity = quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::validation(format!("Invalid quantity for {name}: '{quantity}'")))?;
            Ok(Product::new(name.as_str(), quantity, store.as_str()))
        })
        .collect()
}
