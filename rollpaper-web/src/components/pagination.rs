use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Zero-based current page.
    pub page: usize,
    pub pages: usize,
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(p: &Props) -> Html {
    if p.pages <= 1 {
        return Html::default();
    }
    let buttons = (0..p.pages).map(|index| {
        let cb = p.on_change.clone();
        let onclick = Callback::from(move |_| cb.emit(index));
        let current = index == p.page;
        html! {
            <button
                type="button"
                class={classes!("pagination__page", current.then_some("pagination__page--current"))}
                aria-current={current.then_some("page")}
                {onclick}
            >
                { (index + 1).to_string() }
            </button>
        }
    });
    html! {
        <nav class="pagination" aria-label="pages">
            { for buttons }
        </nav>
    }
}
