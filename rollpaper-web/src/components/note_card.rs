//! A note as it appears on the board, in grid and list form.

use rollpaper_core::{Note, NoteId, Position};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GridProps {
    pub note: Note,
    pub position: Position,
    #[prop_or_default]
    pub dragging: bool,
    /// Pointer pressed on the card, with client coordinates.
    pub on_pointer_down: Callback<(NoteId, Position)>,
}

#[function_component(NoteGridItem)]
pub fn note_grid_item(p: &GridProps) -> Html {
    let onmousedown = {
        let cb = p.on_pointer_down.clone();
        let id = p.note.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit((id, Position::new(e.client_x(), e.client_y())));
        })
    };
    let style = format!(
        "left:{}px;top:{}px;background-color:{};",
        p.position.x,
        p.position.y,
        p.note.background()
    );
    let class = classes!("note", "note--grid", p.dragging.then_some("note--dragging"));
    html! {
        <article {class} {style} data-note-id={p.note.id.to_string()} {onmousedown}>
            <p class="note__content">{ p.note.content.clone() }</p>
            <p class="note__author">{ format!("From. {}", p.note.nickname) }</p>
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ListProps {
    pub note: Note,
    pub on_select: Callback<NoteId>,
}

#[function_component(NoteListItem)]
pub fn note_list_item(p: &ListProps) -> Html {
    let onclick = {
        let cb = p.on_select.clone();
        let id = p.note.id;
        Callback::from(move |_| cb.emit(id))
    };
    let style = format!("background-color:{};", p.note.background());
    html! {
        <li class="note note--list" {style} data-note-id={p.note.id.to_string()} {onclick}>
            <span class="note__category">{ p.note.category.clone() }</span>
            <span class="note__author">{ p.note.nickname.clone() }</span>
            <p class="note__content">{ p.note.content.clone() }</p>
        </li>
    }
}
