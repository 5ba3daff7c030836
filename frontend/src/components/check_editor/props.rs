use yew::prelude::*;

use common::model::check::{Check, CheckPayload};

#[derive(Properties, PartialEq, Clone)]
pub struct CheckEditorProps {
    pub open: bool,
    /// The check being edited; `None` opens the editor in create mode.
    #[prop_or_default]
    pub check: Option<Check>,
    /// Schema columns. When empty the column is typed by hand.
    pub columns: Vec<String>,
    pub on_save: Callback<CheckPayload>,
    pub on_close: Callback<()>,
}
