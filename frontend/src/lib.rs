pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;

use shared::{
    constants::{LOGOUT_BUTTON_ID, LOGOUT_BUTTON_LABEL},
    LoginCredentials,
};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::pages::auth::Auth;

#[function_component(App)]
pub fn app() -> Html {
    // Username of the last submitted login. Nothing is verified or persisted.
    let logged_in_as = use_state(|| None::<String>);

    let on_login = {
        let logged_in_as = logged_in_as.clone();
        Callback::from(move |credentials: LoginCredentials| {
            logged_in_as.set(Some(credentials.username));
        })
    };

    let on_logout = {
        let logged_in_as = logged_in_as.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Logged out");
            logged_in_as.set(None);
        })
    };

    match &*logged_in_as {
        Some(username) => html! {
            <div>
                <p>{format!("{} logged in", username)}</p>
                <button id={LOGOUT_BUTTON_ID} type="button" onclick={on_logout}>
                    {LOGOUT_BUTTON_LABEL}
                </button>
            </div>
        },
        None => html! { <Auth on_login={on_login} /> },
    }
}
