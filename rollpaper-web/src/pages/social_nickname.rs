//! First sign-in: pick the nickname stored in the `Users` row.

use crate::components::button::{Button, ButtonSize};
use crate::components::header::PageHeader;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NicknameFormProps {
    pub nickname: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub busy: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(NicknameForm)]
pub fn nickname_form(p: &NicknameFormProps) -> Html {
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let onsubmit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    html! {
        <main class="nickname">
            <PageHeader title={AttrValue::Static("닉네임 설정")} />
            <form class="nickname__form" {onsubmit}>
                <label for="nickname">{ "닉네임" }</label>
                <input id="nickname" type="text" value={p.nickname.clone()} {oninput} />
                { p.error.as_ref().map(|msg| html! {
                    <p class="field-error" role="alert">{ msg.clone() }</p>
                }).unwrap_or_default() }
                <Button label="시작하기" kind="submit" size={ButtonSize::Large} disabled={p.busy} />
            </form>
        </main>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(SocialNicknamePage)]
pub fn social_nickname_page() -> Html {
    use crate::router::Route;
    use crate::session::use_session;
    use rollpaper_core::constants::MSG_PROFILE_FAILED;
    use rollpaper_core::{NicknameError, complete_onboarding};
    use wasm_bindgen_futures::spawn_local;
    use yew_router::prelude::*;

    let session = use_session();
    let navigator = use_navigator();
    let nickname = use_state(String::new);
    let error = use_state(|| None::<AttrValue>);
    let busy = use_state(|| false);

    let on_input = {
        let nickname = nickname.clone();
        let error = error.clone();
        Callback::from(move |value: String| {
            error.set(None);
            nickname.set(value);
        })
    };
    let on_submit = {
        let nickname = nickname.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |()| {
            if *busy {
                return;
            }
            let client = match session.client() {
                Ok(client) => client,
                Err(err) => {
                    log::error!("backend is not configured: {err}");
                    error.set(Some(AttrValue::Static(MSG_PROFILE_FAILED)));
                    return;
                }
            };
            let session = session.clone();
            let navigator = navigator.clone();
            let nickname = (*nickname).clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let mut ctx = (*session.user).clone();
                let result = complete_onboarding(&client, &mut ctx, &nickname).await;
                busy.set(false);
                let target = match result {
                    Ok(path) => {
                        session.set_user(ctx);
                        Route::from(path)
                    }
                    Err(NicknameError::NoSession) => Route::Login,
                    Err(err) => {
                        if !matches!(err, NicknameError::Empty) {
                            log::warn!("profile insert failed: {err}");
                        }
                        let message = err.inline_message().unwrap_or(MSG_PROFILE_FAILED);
                        error.set(Some(AttrValue::Static(message)));
                        return;
                    }
                };
                if let Some(nav) = navigator.as_ref() {
                    nav.replace(&target);
                }
            });
        })
    };

    html! {
        <NicknameForm
            nickname={(*nickname).clone()}
            error={(*error).clone()}
            busy={*busy}
            {on_input}
            {on_submit}
        />
    }
}
