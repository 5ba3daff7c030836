use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::{html, AttrValue, Callback, Component, Context, Html, NodeRef, Properties};

const SHOW_CLASS: &str = "show";

/// Sliding dialog container. Children stay mounted while closed so that the
/// dialog components can react to `open` changes themselves.
pub struct YwMaterialTopSheet {
    node_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_| ());
        html! {
            <div
                class={yew::classes!("top-sheet", props.wide.then_some("top-sheet-wide"))}
                aria-hidden={(!props.open).to_string()}
                ref={self.node_ref.clone()}
            >
                <div class="top-sheet-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="icon-btn" title="Close" onclick={on_close}>{ "✕" }</button>
                </div>
                <div class="top-sheet-body">
                    { props.children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if ctx.props().open {
            open_top_sheet(&self.node_ref);
        } else {
            close_top_sheet(&self.node_ref);
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
        // Deferred so the transition runs after the element is laid out.
        Timeout::new(50, move || {
            top_sheet.class_list().add_1(SHOW_CLASS).ok();
        })
        .forget();
    }
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
        top_sheet.class_list().remove_1(SHOW_CLASS).ok();
    }
}
