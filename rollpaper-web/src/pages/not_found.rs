use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found">
            <h1>{ "404" }</h1>
            <p>{ "페이지를 찾을 수 없습니다." }</p>
            <Link<Route> to={Route::Clubs}>{ "모임 목록으로" }</Link<Route>>
        </main>
    }
}
