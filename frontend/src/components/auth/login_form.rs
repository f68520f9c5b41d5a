use shared::constants::{
    LOGIN_BUTTON_ID, LOGIN_BUTTON_LABEL, LOGIN_HEADING, PASSWORD_FIELD_NAME, PASSWORD_INPUT_ID,
    PASSWORD_LABEL, USERNAME_FIELD_NAME, USERNAME_INPUT_ID, USERNAME_LABEL,
};
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

/// Everything the form displays and reports comes from the caller.
///
/// Every prop is required:
///
/// ```
/// use frontend::components::auth::LoginForm;
/// use yew::prelude::*;
///
/// let _ = html! {
///     <LoginForm
///         username="alice"
///         password="secret"
///         on_submit={Callback::noop()}
///         on_username_change={Callback::noop()}
///         on_password_change={Callback::noop()}
///     />
/// };
/// ```
///
/// ```compile_fail
/// use frontend::components::auth::LoginForm;
/// use yew::prelude::*;
///
/// let _ = html! {
///     <LoginForm
///         username="alice"
///         password="secret"
///         on_submit={Callback::noop()}
///         on_username_change={Callback::noop()}
///     />
/// };
/// ```
#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub username: AttrValue,
    pub password: AttrValue,
    /// Receives the submit event after its default navigation has been prevented.
    pub on_submit: Callback<SubmitEvent>,
    /// Receives the field's new value on every keystroke.
    pub on_username_change: Callback<String>,
    pub on_password_change: Callback<String>,
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(e);
        })
    };

    let on_username_input = props.on_username_change.reform(input_value);
    let on_password_input = props.on_password_change.reform(input_value);

    html! {
        <div>
            <h2>{LOGIN_HEADING}</h2>
            <form onsubmit={onsubmit}>
                <div>
                    {USERNAME_LABEL}
                    <input
                        id={USERNAME_INPUT_ID}
                        type="text"
                        value={props.username.clone()}
                        name={USERNAME_FIELD_NAME}
                        oninput={on_username_input}
                    />
                </div>
                <div>
                    {PASSWORD_LABEL}
                    <input
                        id={PASSWORD_INPUT_ID}
                        type="password"
                        value={props.password.clone()}
                        name={PASSWORD_FIELD_NAME}
                        oninput={on_password_input}
                    />
                </div>
                <button id={LOGIN_BUTTON_ID} type="submit">
                    {LOGIN_BUTTON_LABEL}
                </button>
            </form>
        </div>
    }
}
