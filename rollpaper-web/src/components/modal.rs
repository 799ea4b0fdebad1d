use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Adds a confirm button to the footer.
    #[prop_or_default]
    pub on_confirm: Option<Callback<()>>,
    #[prop_or(AttrValue::Static("확인"))]
    pub confirm_label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let confirm = props.on_confirm.as_ref().map(|cb| {
        let cb = cb.clone();
        let onclick = Callback::from(move |_| cb.emit(()));
        html! {
            <div class="modal__footer">
                <button type="button" class="btn btn--large" {onclick}>{ props.confirm_label.clone() }</button>
            </div>
        }
    });

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                onkeydown={on_keydown}
                onclick={stop}
            >
                <div class="modal__header">
                    <h2>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label="Close dialog" onclick={on_close}>
                        {"X"}
                    </button>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
                { confirm.unwrap_or_default() }
            </div>
        </div>
    }
}
