//! One template per rendered page. Forms that can be re-shown after a
//! rejection carry an optional inline message.

use askama::Template;

use crate::types::ListView;

#[derive(Template, Default)]
#[template(path = "index.html")]
pub struct IndexPage;

#[derive(Template, Default)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub error_message: Option<&'static str>,
}

#[derive(Template, Default)]
#[template(path = "login-success.html")]
pub struct LoginSuccessPage {
    pub username: Option<String>,
}

#[derive(Template, Default)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub error_message: Option<&'static str>,
}

#[derive(Template, Default)]
#[template(path = "register-success.html")]
pub struct RegisterSuccessPage;

#[derive(Template, Default)]
#[template(path = "create-list.html")]
pub struct CreateListPage {
    pub error_message: Option<&'static str>,
}

#[derive(Template, Default)]
#[template(path = "list-success.html")]
pub struct ListSuccessPage {
    pub list_name: String,
}

#[derive(Template, Default)]
#[template(path = "view-lists.html")]
pub struct ViewListsPage {
    pub lists: Vec<ListView>,
}
