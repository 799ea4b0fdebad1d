//! Landing page for the identity provider redirect.

use rollpaper_core::constants::MSG_SIGNING_IN;
use yew::prelude::*;

#[function_component(SigningInView)]
pub fn signing_in_view() -> Html {
    html! {
        <main class="redirect" aria-busy="true">
            <div class="spinner" role="status"></div>
            <p>{ MSG_SIGNING_IN }</p>
        </main>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(KakaoRedirectPage)]
pub fn kakao_redirect_page() -> Html {
    use crate::router::Route;
    use crate::session::use_session;
    use rollpaper_core::{AuthOutcome, resolve_redirect};
    use wasm_bindgen_futures::spawn_local;
    use yew_router::prelude::*;

    let session = use_session();
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        let fragment = crate::dom::location_hash();
        match session.client() {
            Ok(client) => spawn_local(async move {
                let mut ctx = (*session.user).clone();
                match resolve_redirect(&client, &fragment, &mut ctx).await {
                    AuthOutcome::Navigate(path) => {
                        session.set_user(ctx);
                        if let Some(nav) = navigator.as_ref() {
                            nav.replace(&Route::from(path));
                        }
                    }
                    // Already logged; stay on the spinner.
                    AuthOutcome::Halt(_) => {}
                }
            }),
            Err(err) => log::error!("backend is not configured: {err}"),
        }
        || {}
    });

    html! { <SigningInView /> }
}
