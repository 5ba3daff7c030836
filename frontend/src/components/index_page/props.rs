use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct IndexPageProps {
    pub client: ApiClient,
}
