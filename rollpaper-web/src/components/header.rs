use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Shows the back arrow when set.
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageHeader)]
pub fn page_header(p: &Props) -> Html {
    let back = p.on_back.as_ref().map(|cb| {
        let cb = cb.clone();
        let onclick = Callback::from(move |_| cb.emit(()));
        html! {
            <button type="button" class="page-header__back" aria-label="뒤로가기" {onclick}>
                <img src={crate::paths::asset_path("icons/back.png")} alt="Back" width="24" height="24" />
            </button>
        }
    });
    html! {
        <header class="page-header" role="banner">
            { back.unwrap_or_default() }
            { p.title.as_ref().map(|t| html! { <h1 class="page-header__title">{ t.clone() }</h1> }).unwrap_or_default() }
            { for p.children.iter() }
        </header>
    }
}
