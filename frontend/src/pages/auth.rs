use shared::LoginCredentials;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::{components::auth::LoginForm, hooks::use_login_fields};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_login: Callback<LoginCredentials>,
}

/// Owns the form's field values and hands the submitted credentials upward.
/// Authentication itself happens behind `on_login`.
#[function_component(Auth)]
pub fn auth(props: &Props) -> Html {
    let fields = use_login_fields();

    let on_submit = {
        let credentials = fields.credentials();
        let reset = fields.reset.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |_: SubmitEvent| {
            log::info!("Login submitted for {:?}", credentials.username);
            log::debug!("Submitting {:?}", credentials);
            on_login.emit(credentials.clone());
            reset.emit(());
        })
    };

    html! {
        <LoginForm
            username={fields.username.clone()}
            password={fields.password.clone()}
            on_submit={on_submit}
            on_username_change={fields.on_username_change.clone()}
            on_password_change={fields.on_password_change.clone()}
        />
    }
}
