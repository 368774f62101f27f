//! Signup page: account fields, nickname availability check, registration.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::HttpUsersApi;
use crate::pages::signup_flow::SignupFlow;
use crate::state::signup::{SignupField, SignupState};
use crate::util::navigation::BrowserLocation;
use crate::util::notify::BrowserAlert;

fn text_field<F>(
    label: &'static str,
    input_type: &'static str,
    field: SignupField,
    state: RwSignal<SignupState>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(SignupField, String) + Send + Sync + 'static,
{
    view! {
        <label class="signup-field">
            <span class="signup-field__label">{label}</span>
            <input
                class="signup-input"
                type=input_type
                prop:value=move || state.with(|s| s.form.get(field).to_owned())
                on:input=move |ev| on_input(field, event_target_value(&ev))
            />
        </label>
    }
}

/// Signup page. Checks the nickname on blur and posts the form on submit.
#[component]
pub fn SignupPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let state = RwSignal::new(SignupState::default());
    let flow = SignupFlow::new(HttpUsersApi::new(&config), BrowserAlert, BrowserLocation, config.login_path);

    let input = {
        let flow = flow.clone();
        move |field: SignupField, value: String| flow.input(&state, field, value)
    };

    let blur_flow = flow.clone();
    let on_nickname_blur = move |_| {
        let flow = blur_flow.clone();
        leptos::task::spawn_local(async move {
            flow.nickname_blurred(&state).await;
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let flow = flow.clone();
        leptos::task::spawn_local(async move {
            flow.submit(&state).await;
        });
    };

    let checking = move || state.with(SignupState::is_checking);
    let nickname_error = move || state.with(|s| s.nickname_error().map(str::to_owned));
    let nickname_input = input.clone();

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1 class="signup-card__title">"회원가입"</h1>
                <form class="signup-form" on:submit=on_submit>
                    {text_field("아이디", "text", SignupField::Username, state, input.clone())}
                    <label class="signup-field">
                        <span class="signup-field__label">"별명"</span>
                        <input
                            class=move || {
                                if nickname_error().is_some() {
                                    "signup-input signup-input--error"
                                } else {
                                    "signup-input"
                                }
                            }
                            type="text"
                            prop:value=move || state.with(|s| s.form.nickname.clone())
                            on:input=move |ev| nickname_input(SignupField::Nickname, event_target_value(&ev))
                            on:blur=on_nickname_blur
                        />
                        <Show when=move || nickname_error().is_some()>
                            <span class="signup-field__helper">{move || nickname_error().unwrap_or_default()}</span>
                        </Show>
                    </label>
                    {text_field("이메일", "email", SignupField::Email, state, input.clone())}
                    {text_field("비밀번호", "password", SignupField::Password, state, input.clone())}
                    {text_field("비밀번호 확인", "password", SignupField::ConfirmPassword, state, input.clone())}
                    {text_field("생년월일", "date", SignupField::Birthdate, state, input)}
                    <button class="signup-button" type="submit" disabled=checking>
                        <Show when=checking fallback=|| "회원가입 완료">
                            <span class="signup-spinner" role="progressbar"></span>
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}
