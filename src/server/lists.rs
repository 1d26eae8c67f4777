use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;

use crate::flow::{self, NewList, Outcome};
use crate::server::AppState;
use crate::server::dto::{CreateListForm, ListSuccessParams};
use crate::server::pages::{CreateListPage, ListSuccessPage, ViewListsPage};
use crate::server::response::{PageError, found, render};
use crate::server::validation::products_from_form;
use crate::types::PLACEHOLDER_OWNER_ID;

pub async fn create_list_page() -> impl IntoResponse {
    render(&CreateListPage::default())
}

/// POST /create-list
///
/// Every list is recorded under the placeholder owner; requests carry no
/// identity to bind it to.
pub async fn create_list(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateListForm>,
) -> Result<Response, PageError> {
    let store = state.store.as_ref();
    let products = products_from_form(&form)?;
    let list = NewList {
        name: form.list_name,
        owner_id: PLACEHOLDER_OWNER_ID,
        products,
    };

    match flow::create_list(store, &list)? {
        Outcome::Accepted(name) => {
            let location = format!("/list-success?name={}", urlencoding::encode(&name));
            Ok(found(&location))
        }
        Outcome::Rejected(rejection) => Ok(render(&CreateListPage {
            error_message: Some(rejection.message()),
        })?
        .into_response()),
    }
}

pub async fn list_success(Query(params): Query<ListSuccessParams>) -> impl IntoResponse {
    render(&ListSuccessPage {
        list_name: params.name,
    })
}

pub async fn view_lists(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let lists = flow::fetch_list_views(state.store.as_ref())?;
    render(&ViewListsPage { lists })
}
