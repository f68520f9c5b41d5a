use shared::LoginCredentials;
use yew::prelude::*;

/// Caller-owned values behind a controlled login form.
#[derive(Clone)]
pub struct LoginFields {
    pub username: String,
    pub password: String,
    pub on_username_change: Callback<String>,
    pub on_password_change: Callback<String>,
    pub reset: Callback<()>,
}

impl LoginFields {
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials::new(self.username.clone(), self.password.clone())
    }
}

#[hook]
pub fn use_login_fields() -> LoginFields {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |value: String| username.set(value))
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let reset = {
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |_| {
            username.set(String::new());
            password.set(String::new());
        })
    };

    LoginFields {
        username: (*username).clone(),
        password: (*password).clone(),
        on_username_change,
        on_password_change,
        reset,
    }
}
