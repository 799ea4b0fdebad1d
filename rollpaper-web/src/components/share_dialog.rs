use rollpaper_core::constants::MSG_LINK_COPIED;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub link: AttrValue,
    #[prop_or_default]
    pub copied: bool,
    pub on_copy: Callback<AttrValue>,
}

/// Body of the share modal: the board link and a copy button.
#[function_component(ShareDialog)]
pub fn share_dialog(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_copy.clone();
        let link = p.link.clone();
        Callback::from(move |_| cb.emit(link.clone()))
    };
    html! {
        <div class="share">
            <input class="share__link" readonly=true value={p.link.clone()} />
            <button type="button" class="btn btn--small" {onclick}>{ "링크 복사" }</button>
            { p.copied.then(|| html! { <p class="share__status" aria-live="polite">{ MSG_LINK_COPIED }</p> }).unwrap_or_default() }
        </div>
    }
}
