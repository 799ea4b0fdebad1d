#[cfg(target_arch = "wasm32")]
use crate::pages::{
    board::BoardPage, clubs::ClubsPage, create_club::CreateClubPage,
    create_post::CreatePostPage, kakao_redirect::KakaoRedirectPage, login::LoginPage,
    not_found::NotFoundPage, post_detail::PostDetailPage, social_nickname::SocialNicknamePage,
};
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::session::SessionProvider;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

/// Root component: router, session context and the page switch.
#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <SessionProvider>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Clubs} /> },
        Route::Clubs => html! { <ClubsPage /> },
        Route::CreateClub => html! { <CreateClubPage /> },
        Route::ClubBoard { club_id } => html! { <BoardPage club_id={club_id} /> },
        Route::CreatePost { club_id } => html! { <CreatePostPage club_id={club_id} /> },
        Route::PostDetail { club_id, post_id } => {
            html! { <PostDetailPage club_id={club_id} {post_id} /> }
        }
        Route::Login => html! { <LoginPage /> },
        Route::KakaoRedirect => html! { <KakaoRedirectPage /> },
        Route::SocialNickname => html! { <SocialNicknamePage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
