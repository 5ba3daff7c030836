use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use common::requests::ClientConfig;

use crate::api::{load_config, ApiClient};
use crate::components::index_page::IndexPage;

pub enum Msg {
    ConfigLoaded(ClientConfig),
}

/// Root component. Holds the page back until the host configuration is known.
pub struct App {
    client: Option<ApiClient>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_config().await));
        });
        Self { client: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                gloo_console::log!(format!("Data-quality service at {}", config.api_base_url));
                self.client = Some(ApiClient::new(config));
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.client {
            Some(client) => html! {
                <div class="app-root">
                    <IndexPage client={client.clone()} />
                </div>
            },
            None => html! { <div class="app-loading">{"Loading..."}</div> },
        }
    }
}
