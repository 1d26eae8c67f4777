use serde::Deserialize;

// Absent fields decode as empty strings so that they reach validation.

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// The list form posts one `product[]`, `quantity[]` and `store[]` value
/// per row; equal indices describe the same product.
#[derive(Debug, Default, Deserialize)]
pub struct CreateListForm {
    #[serde(rename = "listName", default)]
    pub list_name: String,
    #[serde(rename = "product[]", default)]
    pub products: Vec<String>,
    #[serde(rename = "quantity[]", default)]
    pub quantities: Vec<String>,
    #[serde(rename = "store[]", default)]
    pub stores: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListSuccessParams {
    #[serde(default)]
    pub name: String,
}
