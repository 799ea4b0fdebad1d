use rollpaper_core::ViewMode;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view_mode: ViewMode,
    pub relocating: bool,
    /// Hides the relocation toggle when there is nothing to move.
    pub can_relocate: bool,
    pub on_toggle_view: Callback<()>,
    pub on_toggle_relocation: Callback<()>,
    pub on_share: Callback<()>,
    pub on_write: Callback<()>,
}

fn emit(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

#[function_component(BoardToolbar)]
pub fn board_toolbar(p: &Props) -> Html {
    let view_label = match p.view_mode {
        ViewMode::Grid => "목록 보기",
        ViewMode::List => "모아 보기",
    };
    let relocate_label = if p.relocating { "완료" } else { "재배치" };
    html! {
        <div class="board-toolbar">
            <button type="button" class="btn btn--small" onclick={emit(&p.on_toggle_view)}>{ view_label }</button>
            { p.can_relocate.then(|| html! {
                <button
                    type="button"
                    class={classes!("btn", "btn--small", p.relocating.then_some("btn--active"))}
                    aria-pressed={p.relocating.to_string()}
                    onclick={emit(&p.on_toggle_relocation)}
                >
                    { relocate_label }
                </button>
            }).unwrap_or_default() }
            <button type="button" class="btn btn--small" onclick={emit(&p.on_share)}>{ "공유하기" }</button>
            <button type="button" class="btn btn--large" onclick={emit(&p.on_write)}>{ "글쓰기" }</button>
        </div>
    }
}
