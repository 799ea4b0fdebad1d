//! Social sign-in entry point.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginViewProps {
    /// Nickname of the signed-in user, if any.
    #[prop_or_default]
    pub signed_in_as: Option<AttrValue>,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(LoginView)]
pub fn login_view(p: &LoginViewProps) -> Html {
    let action = match &p.signed_in_as {
        Some(nickname) => {
            let cb = p.on_logout.clone();
            let onclick = Callback::from(move |_| cb.emit(()));
            html! {
                <>
                    <p class="login__who">{ format!("{nickname}님으로 로그인되어 있습니다.") }</p>
                    <button type="button" class="btn btn--large" {onclick}>{ "로그아웃" }</button>
                </>
            }
        }
        None => {
            let cb = p.on_login.clone();
            let onclick = Callback::from(move |_| cb.emit(()));
            html! {
                <button type="button" class="btn btn--kakao" {onclick}>
                    <img src={crate::paths::asset_path("icons/kakao.png")} alt="" width="20" height="20" />
                    { "카카오로 시작하기" }
                </button>
            }
        }
    };
    html! {
        <main class="login">
            <img class="login__logo" src={crate::paths::asset_path("img/logo.png")} alt="어땠어?" />
            { action }
        </main>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    use crate::session::use_session;
    use rollpaper_core::login_url;

    let session = use_session();

    let on_login = {
        let session = session.clone();
        Callback::from(move |()| {
            let client = match session.client() {
                Ok(client) => client,
                Err(err) => {
                    log::error!("backend is not configured: {err}");
                    return;
                }
            };
            let origin = crate::paths::app_origin(&crate::dom::origin());
            let url = login_url(client.config(), &origin);
            if let Err(err) = crate::dom::redirect_to(&url) {
                log::error!(
                    "could not open the sign-in page: {}",
                    crate::dom::js_error_message(&err)
                );
            }
        })
    };
    let on_logout = {
        let session = session.clone();
        Callback::from(move |()| session.logout())
    };
    let signed_in_as = session.user.user().map(|u| AttrValue::from(u.nickname.clone()));

    html! { <LoginView {signed_in_as} {on_login} {on_logout} /> }
}
